use quiz_core::{Problem, ResultType};

/// Notifications a session queues for its presenter, in emission order.
///
/// Drained with `QuizSession::drain_events`.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A new question should be rendered.
    ProblemChanged(Problem),
    /// Seconds left on the countdown.
    TimerChanged(f32),
    QuestionNumberChanged { current: u32, max: u32 },
    Result(ResultType),
    LevelComplete,
}
