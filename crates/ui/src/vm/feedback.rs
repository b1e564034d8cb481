use quiz_core::ResultType;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackTone {
    Success,
    Failure,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub text: &'static str,
    pub tone: FeedbackTone,
}

#[must_use]
pub fn map_feedback(outcome: ResultType) -> FeedbackVm {
    match outcome {
        ResultType::Correct => FeedbackVm {
            text: "Correct Answer!",
            tone: FeedbackTone::Success,
        },
        ResultType::Incorrect => FeedbackVm {
            text: "Incorrect Answer. Try Again!",
            tone: FeedbackTone::Failure,
        },
        ResultType::TimeUp => FeedbackVm {
            text: "Time's up!",
            tone: FeedbackTone::Warning,
        },
        ResultType::LastQuestionCorrect => level_complete_feedback(),
    }
}

#[must_use]
pub fn level_complete_feedback() -> FeedbackVm {
    FeedbackVm {
        text: "Level complete!",
        tone: FeedbackTone::Success,
    }
}
