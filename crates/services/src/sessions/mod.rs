mod countdown;
mod events;
mod progress;
mod service;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use countdown::Countdown;
pub use events::SessionEvent;
pub use progress::SessionProgress;
pub use service::{QuizSession, SessionAnswer, SessionPhase, TickOutcome};
