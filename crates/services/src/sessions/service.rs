use std::mem;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use quiz_core::{
    AnswerResult, Problem, ProblemGenerator, ProblemProcessor, ProcessOutcome, ResultType,
    SessionSummary, Solution,
};

use super::countdown::Countdown;
use super::events::SessionEvent;
use super::progress::SessionProgress;
use crate::config::SessionConfig;
use crate::error::SessionError;

//
// ─── ANSWER HISTORY ────────────────────────────────────────────────────────────
//

/// One recorded submission, including time-up auto-submissions.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionAnswer {
    pub question: u32,
    pub result: AnswerResult,
    pub outcome: ResultType,
}

//
// ─── PHASES ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Built but `start_session` has not produced a question yet.
    NotStarted,
    AwaitingAnswer,
    /// Answered correctly; the countdown is frozen until `advance_question`.
    Feedback,
    LevelComplete,
}

/// What a call to `QuizSession::tick` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to count down: frozen, not answering, or complete.
    Idle,
    Running,
    /// The question expired and the session moved to the next one.
    TimeUp,
    /// The final question expired.
    LevelComplete,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// The quiz state machine.
///
/// Owns the question counter, the current solution, the countdown and the
/// append-only answer history. Presenters call the operations below and
/// read back `SessionEvent`s through [`QuizSession::drain_events`].
pub struct QuizSession<R = StdRng> {
    config: SessionConfig,
    generator: ProblemGenerator<R>,
    processor: ProblemProcessor,
    phase: SessionPhase,
    current_question: u32,
    countdown: Countdown,
    current_solution: Option<Solution>,
    history: Vec<SessionAnswer>,
    events: Vec<SessionEvent>,
    elapsed: f32,
}

impl QuizSession<StdRng> {
    /// Build a session whose randomness comes from the config seed, or from
    /// the OS when no seed is set.
    #[must_use]
    pub fn from_config(config: SessionConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> QuizSession<R> {
    #[must_use]
    pub fn with_rng(config: SessionConfig, rng: R) -> Self {
        let generator = ProblemGenerator::new(config.range(), config.operator(), rng);
        let countdown = Countdown::new(config.time_per_question());

        Self {
            config,
            generator,
            processor: ProblemProcessor::new(),
            phase: SessionPhase::NotStarted,
            current_question: 0,
            countdown,
            current_solution: None,
            history: Vec::new(),
            events: Vec::new(),
            elapsed: 0.0,
        }
    }

    /// Register a callback that sees every generated problem.
    #[must_use]
    pub fn with_problem_hook(mut self, hook: impl FnMut(&Problem) + 'static) -> Self {
        self.generator.set_on_created(hook);
        self
    }

    //
    // ─── OPERATIONS ───────────────────────────────────────────────────────────
    //

    /// Discard any previous run and present the first question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidProblem` if the first generated problem
    /// fails validation.
    pub fn start_session(&mut self) -> Result<(), SessionError> {
        self.phase = SessionPhase::NotStarted;
        self.current_question = 0;
        self.current_solution = None;
        self.history.clear();
        self.events.clear();
        self.elapsed = 0.0;
        self.countdown.reset();

        info!(
            max_questions = self.config.max_questions(),
            operator = %self.config.operator(),
            "session started"
        );
        self.advance_question()?;
        Ok(())
    }

    /// Move to the next question.
    ///
    /// Returns `Ok(false)` without touching any state once all
    /// `max_questions` have been handed out.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidProblem` if the generated problem fails
    /// validation; the session is left unchanged.
    pub fn advance_question(&mut self) -> Result<bool, SessionError> {
        let max = self.config.max_questions();
        if self.current_question >= max {
            debug!(max, "max questions reached");
            return Ok(false);
        }

        let problem = self.generator.create_problem();
        let solution = match self.processor.process(&problem) {
            ProcessOutcome::Valid(solution) => solution,
            ProcessOutcome::Invalid(problem) => {
                return Err(SessionError::InvalidProblem(problem));
            }
        };

        self.current_question += 1;
        self.current_solution = Some(solution);
        self.countdown.reset();
        self.phase = SessionPhase::AwaitingAnswer;

        self.events.push(SessionEvent::QuestionNumberChanged {
            current: self.current_question,
            max,
        });
        self.events.push(SessionEvent::ProblemChanged(problem));
        self.events
            .push(SessionEvent::TimerChanged(self.countdown.remaining()));

        info!(question = self.current_question, max, %problem, "question advanced");
        Ok(true)
    }

    /// Record an answer for the current question and classify it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveProblem` before the first question and
    /// after the level is complete, and `SessionError::AlreadyAnswered` while
    /// waiting for `advance_question` after a correct answer. Neither touches
    /// the history.
    pub fn submit_answer(&mut self, value: f32) -> Result<ResultType, SessionError> {
        if self.phase == SessionPhase::Feedback {
            warn!(question = self.current_question, "answer submitted twice");
            return Err(SessionError::AlreadyAnswered);
        }
        let Some(solution) = self.current_solution else {
            warn!("answer submitted without an active problem");
            return Err(SessionError::NoActiveProblem);
        };

        let result = AnswerResult::new(solution, value);
        let is_last = self.current_question >= self.config.max_questions();
        let outcome = match (result.is_correct(), is_last) {
            (false, _) => ResultType::Incorrect,
            (true, false) => ResultType::Correct,
            (true, true) => ResultType::LastQuestionCorrect,
        };

        self.record(result, outcome);

        match outcome {
            ResultType::Correct => {
                self.countdown.freeze();
                self.phase = SessionPhase::Feedback;
            }
            ResultType::LastQuestionCorrect => {
                self.countdown.freeze();
                self.complete_level();
            }
            ResultType::Incorrect | ResultType::TimeUp => {}
        }

        Ok(outcome)
    }

    /// Advance the countdown by `delta` seconds.
    ///
    /// On expiry with questions left a zero answer is recorded as
    /// `ResultType::TimeUp` and the next question is presented. On expiry of
    /// the final question the level completes.
    ///
    /// # Errors
    ///
    /// Propagates `SessionError::InvalidProblem` from the automatic advance.
    pub fn tick(&mut self, delta: f32) -> Result<TickOutcome, SessionError> {
        if self.phase != SessionPhase::AwaitingAnswer || self.countdown.is_frozen() {
            return Ok(TickOutcome::Idle);
        }

        let consumed = self.countdown.advance(delta);
        if consumed > 0.0 {
            self.elapsed += consumed;
            self.events
                .push(SessionEvent::TimerChanged(self.countdown.remaining()));
        }

        if !self.countdown.is_expired() {
            return Ok(TickOutcome::Running);
        }

        if self.current_question >= self.config.max_questions() {
            info!(question = self.current_question, "time up on final question");
            self.complete_level();
            return Ok(TickOutcome::LevelComplete);
        }

        let solution = self.current_solution.ok_or(SessionError::NoActiveProblem)?;
        info!(question = self.current_question, "time up");
        self.record(AnswerResult::new(solution, 0.0), ResultType::TimeUp);
        self.advance_question()?;
        Ok(TickOutcome::TimeUp)
    }

    /// Stop the countdown. Repeated calls are no-ops.
    pub fn pause_timer(&mut self) {
        self.countdown.freeze();
    }

    /// Restart the countdown. Repeated calls are no-ops.
    pub fn resume_timer(&mut self) {
        self.countdown.thaw();
    }

    /// Hand out queued notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        mem::take(&mut self.events)
    }

    //
    // ─── READ ACCESS ──────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn current_question(&self) -> u32 {
        self.current_question
    }

    #[must_use]
    pub fn max_questions(&self) -> u32 {
        self.config.max_questions()
    }

    #[must_use]
    pub fn time_remaining(&self) -> f32 {
        self.countdown.remaining()
    }

    #[must_use]
    pub fn time_per_question(&self) -> f32 {
        self.countdown.duration()
    }

    #[must_use]
    pub fn is_timer_frozen(&self) -> bool {
        self.countdown.is_frozen()
    }

    #[must_use]
    pub fn is_level_complete(&self) -> bool {
        self.phase == SessionPhase::LevelComplete
    }

    #[must_use]
    pub fn current_solution(&self) -> Option<&Solution> {
        self.current_solution.as_ref()
    }

    #[must_use]
    pub fn current_problem(&self) -> Option<&Problem> {
        self.current_solution.as_ref().map(Solution::problem)
    }

    #[must_use]
    pub fn history(&self) -> &[SessionAnswer] {
        &self.history
    }

    /// Seconds the countdown actually ran, summed over all questions.
    #[must_use]
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            current: self.current_question,
            max: self.config.max_questions(),
            answered: self.history.len(),
            correct: self
                .history
                .iter()
                .filter(|answer| answer.outcome.is_correct())
                .count(),
            remaining: self
                .config
                .max_questions()
                .saturating_sub(self.current_question),
            is_complete: self.is_level_complete(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary::from_outcomes(
            self.current_question,
            self.history.iter().map(|answer| answer.outcome),
            self.elapsed,
        )
    }

    //
    // ─── INTERNALS ────────────────────────────────────────────────────────────
    //

    fn record(&mut self, result: AnswerResult, outcome: ResultType) {
        debug!(
            question = self.current_question,
            input = result.input_answer(),
            expected = result.solution().correct_answer(),
            ?outcome,
            "result recorded"
        );
        self.history.push(SessionAnswer {
            question: self.current_question,
            result,
            outcome,
        });
        self.events.push(SessionEvent::Result(outcome));
    }

    fn complete_level(&mut self) {
        self.phase = SessionPhase::LevelComplete;
        self.current_solution = None;
        self.events.push(SessionEvent::LevelComplete);
        info!(
            questions = self.current_question,
            answered = self.history.len(),
            "level complete"
        );
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
