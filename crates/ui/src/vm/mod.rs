mod answer_entry;
mod feedback;
mod quiz_vm;
mod time_fmt;

pub use answer_entry::{AnswerEntry, MAX_DIGITS};
pub use feedback::{FeedbackTone, FeedbackVm, level_complete_feedback, map_feedback};
pub use quiz_vm::{QuizIntent, QuizPhase, QuizVm, VmError};
pub use time_fmt::format_seconds;
