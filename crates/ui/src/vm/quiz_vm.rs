use rand::Rng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::debug;

use quiz_core::ResultType;
use services::{QuizSession, SessionConfig, SessionError, SessionEvent, SessionPhase, TickOutcome};

use super::answer_entry::AnswerEntry;
use super::feedback::{FeedbackVm, level_complete_feedback, map_feedback};
use super::time_fmt::format_seconds;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum VmError {
    /// The answer entry refused a key: it is full, or already has a decimal point.
    #[error("answer entry rejected {0:?}")]
    EntryRejected(QuizIntent),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl VmError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::EntryRejected(_) => "That answer is too long to enter.",
            Self::Session(_) => "Something went wrong. Please restart the level.",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum QuizIntent {
    Digit(u8),
    DecimalPoint,
    Backspace,
    Clear,
    ToggleSign,
    Submit,
    Next,
    Tick(f32),
    Pause,
    Resume,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Answering,
    Feedback,
    Complete,
}

/// Bridges a `QuizSession` to a front end.
pub struct QuizVm<R = StdRng> {
    session: QuizSession<R>,
    entry: AnswerEntry,
    feedback: Option<FeedbackVm>,
}

impl QuizVm<StdRng> {
    /// # Errors
    ///
    /// Returns `VmError::Session` if the first question cannot be generated.
    pub fn start(config: SessionConfig) -> Result<Self, VmError> {
        Self::new(QuizSession::from_config(config))
    }
}

impl<R: Rng> QuizVm<R> {
    /// Start `session` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `VmError::Session` if the first question cannot be generated.
    pub fn new(mut session: QuizSession<R>) -> Result<Self, VmError> {
        session.start_session()?;
        Ok(Self {
            session,
            entry: AnswerEntry::new(),
            feedback: None,
        })
    }

    /// Apply one intent and return the notifications it produced.
    ///
    /// Intents that make no sense in the current phase (typing during
    /// feedback, `Next` while answering) are ignored.
    ///
    /// # Errors
    ///
    /// Returns `VmError::EntryRejected` when a digit or decimal point does not
    /// fit the entry; the entry is left as it was. Returns `VmError::Session`
    /// for session failures.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<Vec<SessionEvent>, VmError> {
        debug!(?intent, "dispatch");
        match intent {
            QuizIntent::Digit(digit) if self.input_enabled() => {
                if !self.entry.push_digit(digit) {
                    return Err(VmError::EntryRejected(intent));
                }
            }
            QuizIntent::DecimalPoint if self.input_enabled() => {
                if !self.entry.push_decimal_point() {
                    return Err(VmError::EntryRejected(intent));
                }
            }
            QuizIntent::Backspace if self.input_enabled() => self.entry.backspace(),
            QuizIntent::Clear => self.entry.clear(),
            QuizIntent::ToggleSign if self.input_enabled() => self.entry.toggle_sign(),
            QuizIntent::Submit if self.input_enabled() => {
                let outcome = self.session.submit_answer(self.entry.value())?;
                self.entry.clear();
                self.feedback = Some(map_feedback(outcome));
            }
            QuizIntent::Next if self.phase() == QuizPhase::Feedback => {
                if self.session.advance_question()? {
                    self.feedback = None;
                    self.entry.clear();
                }
            }
            QuizIntent::Tick(delta) => match self.session.tick(delta)? {
                TickOutcome::TimeUp => {
                    self.entry.clear();
                    self.feedback = Some(map_feedback(ResultType::TimeUp));
                }
                TickOutcome::LevelComplete => {
                    self.feedback = Some(level_complete_feedback());
                }
                TickOutcome::Idle | TickOutcome::Running => {}
            },
            QuizIntent::Pause => self.session.pause_timer(),
            QuizIntent::Resume => self.session.resume_timer(),
            _ => {}
        }
        Ok(self.session.drain_events())
    }

    /// Notifications queued outside `dispatch`, such as the first question.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        self.session.drain_events()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        match self.session.phase() {
            SessionPhase::LevelComplete => QuizPhase::Complete,
            SessionPhase::Feedback => QuizPhase::Feedback,
            SessionPhase::NotStarted | SessionPhase::AwaitingAnswer => QuizPhase::Answering,
        }
    }

    /// Numpad and submit are live only while answering.
    #[must_use]
    pub fn input_enabled(&self) -> bool {
        self.phase() == QuizPhase::Answering
    }

    #[must_use]
    pub fn show_next(&self) -> bool {
        self.phase() == QuizPhase::Feedback
    }

    #[must_use]
    pub fn problem_text(&self) -> Option<String> {
        self.session.current_problem().map(ToString::to_string)
    }

    #[must_use]
    pub fn question_label(&self) -> String {
        format!(
            "Question {}/{}",
            self.session.current_question(),
            self.session.max_questions()
        )
    }

    #[must_use]
    pub fn timer_label(&self) -> String {
        format_seconds(self.session.time_remaining())
    }

    #[must_use]
    pub fn answer_text(&self) -> String {
        self.entry.text()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&FeedbackVm> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession<R> {
        &self.session
    }
}
