//! Presentation-facing view models for the math quiz.
//!
//! Nothing here renders. A front end reads `QuizVm` and feeds it `QuizIntent`s.

pub mod vm;

pub use vm::{
    AnswerEntry, FeedbackTone, FeedbackVm, MAX_DIGITS, QuizIntent, QuizPhase, QuizVm, VmError,
};
