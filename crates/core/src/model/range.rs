use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Inclusive integer interval operands are drawn from. Always `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct NumberRange {
    min: i32,
    max: i32,
}

#[derive(Deserialize)]
struct RawRange {
    min: i32,
    max: i32,
}

impl NumberRange {
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidRange` if `min > max`.
    pub fn new(min: i32, max: i32) -> Result<Self, ConfigurationError> {
        if min > max {
            return Err(ConfigurationError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> i32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> i32 {
        self.max
    }

    /// True if `value` is a whole number inside the interval.
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        value.fract() == 0.0 && value >= self.min as f32 && value <= self.max as f32
    }
}

impl Default for NumberRange {
    fn default() -> Self {
        Self { min: 0, max: 10 }
    }
}

impl TryFrom<RawRange> for NumberRange {
    type Error = ConfigurationError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}
