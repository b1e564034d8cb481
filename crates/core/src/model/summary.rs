use serde::Serialize;

use super::answer::ResultType;

/// Aggregate figures for a finished (or abandoned) session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    questions: u32,
    submissions: u32,
    correct: u32,
    incorrect: u32,
    timed_out: u32,
    elapsed_secs: f32,
}

impl SessionSummary {
    /// Build a summary from the outcomes of every submission, in any order.
    #[must_use]
    pub fn from_outcomes(
        questions: u32,
        outcomes: impl IntoIterator<Item = ResultType>,
        elapsed_secs: f32,
    ) -> Self {
        let mut correct = 0_u32;
        let mut incorrect = 0_u32;
        let mut timed_out = 0_u32;

        for outcome in outcomes {
            match outcome {
                ResultType::Correct | ResultType::LastQuestionCorrect => {
                    correct = correct.saturating_add(1);
                }
                ResultType::Incorrect => incorrect = incorrect.saturating_add(1),
                ResultType::TimeUp => timed_out = timed_out.saturating_add(1),
            }
        }

        Self {
            questions,
            submissions: correct
                .saturating_add(incorrect)
                .saturating_add(timed_out),
            correct,
            incorrect,
            timed_out,
            elapsed_secs,
        }
    }

    #[must_use]
    pub fn questions(&self) -> u32 {
        self.questions
    }

    #[must_use]
    pub fn submissions(&self) -> u32 {
        self.submissions
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    #[must_use]
    pub fn timed_out(&self) -> u32 {
        self.timed_out
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed_secs
    }

    /// Share of questions answered correctly, 0–100.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn accuracy_percent(&self) -> f32 {
        if self.questions == 0 {
            return 0.0;
        }
        self.correct as f32 * 100.0 / self.questions as f32
    }
}
