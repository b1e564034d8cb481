#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod sessions;

pub use sessions as session;

pub use config::{SessionConfig, SessionConfigDraft};
pub use error::{ConfigLoadError, SessionError};

pub use sessions::{
    Countdown, QuizSession, SessionAnswer, SessionEvent, SessionPhase, SessionProgress,
    TickOutcome,
};
