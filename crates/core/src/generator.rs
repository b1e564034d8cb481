use std::fmt;

use rand::Rng;
use tracing::debug;

use crate::error::ConfigurationError;
use crate::model::{NumberRange, Operator, Problem};

type ProblemHook = Box<dyn FnMut(&Problem)>;

/// Produces random problems for one operator over an inclusive range.
///
/// Randomness is injected so sessions can be replayed from a seed:
///
/// ```
/// # use quiz_core::{NumberRange, Operator, ProblemGenerator};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let range = NumberRange::new(1, 10)?;
/// let mut generator = ProblemGenerator::new(range, Operator::Add, StdRng::seed_from_u64(7));
/// let problem = generator.create_problem();
/// assert!(range.contains(problem.operand1()));
/// # Ok::<(), quiz_core::ConfigurationError>(())
/// ```
pub struct ProblemGenerator<R> {
    range: NumberRange,
    operator: Operator,
    rng: R,
    on_created: Option<ProblemHook>,
}

impl<R: Rng> ProblemGenerator<R> {
    #[must_use]
    pub fn new(range: NumberRange, operator: Operator, rng: R) -> Self {
        Self {
            range,
            operator,
            rng,
            on_created: None,
        }
    }

    /// Build a generator from raw configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidRange` if `min > max` and
    /// `ConfigurationError::Operator` if `symbol` is not one of `+ - * /`.
    pub fn from_parts(min: i32, max: i32, symbol: char, rng: R) -> Result<Self, ConfigurationError> {
        let range = NumberRange::new(min, max)?;
        let operator = Operator::from_symbol(symbol)?;
        Ok(Self::new(range, operator, rng))
    }

    /// Register a callback invoked with every problem this generator creates.
    #[must_use]
    pub fn with_on_created(mut self, hook: impl FnMut(&Problem) + 'static) -> Self {
        self.set_on_created(hook);
        self
    }

    pub fn set_on_created(&mut self, hook: impl FnMut(&Problem) + 'static) {
        self.on_created = Some(Box::new(hook));
    }

    #[must_use]
    pub fn range(&self) -> NumberRange {
        self.range
    }

    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Draw both operands uniformly from the range.
    ///
    /// For division a zero divisor is replaced by 1, which makes 1 twice as
    /// likely as any other divisor when the range spans zero.
    pub fn create_problem(&mut self) -> Problem {
        let operand1 = self.draw();
        let mut operand2 = self.draw();

        if self.operator == Operator::Divide && operand2 == 0.0 {
            operand2 = 1.0;
        }

        let problem = Problem::new(operand1, operand2, self.operator);
        debug!(%problem, "problem created");

        if let Some(hook) = self.on_created.as_mut() {
            hook(&problem);
        }
        problem
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw(&mut self) -> f32 {
        self.rng.random_range(self.range.min()..=self.range.max()) as f32
    }
}

impl<R> fmt::Debug for ProblemGenerator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProblemGenerator")
            .field("range", &self.range)
            .field("operator", &self.operator)
            .field("has_hook", &self.on_created.is_some())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
