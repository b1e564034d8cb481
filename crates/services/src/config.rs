use std::path::Path;

use serde::Deserialize;

use quiz_core::{ConfigurationError, NumberRange, Operator};

use crate::error::ConfigLoadError;

pub const DEFAULT_TIME_PER_QUESTION: f32 = 30.0;
pub const DEFAULT_MAX_QUESTIONS: u32 = 10;

/// Unvalidated session settings as they appear in a JSON config file.
///
/// Every field is optional; missing values fall back to the defaults.
///
/// ```json
/// { "min": 1, "max": 12, "operator": "*", "time_per_question": 20, "max_questions": 5 }
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfigDraft {
    pub min: Option<i32>,
    pub max: Option<i32>,
    pub operator: Option<String>,
    pub time_per_question: Option<f32>,
    pub max_questions: Option<u32>,
    pub seed: Option<u64>,
}

impl SessionConfigDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the draft into an immutable config.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigurationError` found: inverted range, unknown
    /// operator, non-positive time budget, or zero questions.
    pub fn validate(self) -> Result<SessionConfig, ConfigurationError> {
        let defaults = NumberRange::default();
        let range = NumberRange::new(
            self.min.unwrap_or(defaults.min()),
            self.max.unwrap_or(defaults.max()),
        )?;
        let operator = match self.operator.as_deref() {
            Some(raw) => raw.parse::<Operator>()?,
            None => Operator::Add,
        };

        let config = SessionConfig::new(
            range,
            operator,
            self.time_per_question.unwrap_or(DEFAULT_TIME_PER_QUESTION),
            self.max_questions.unwrap_or(DEFAULT_MAX_QUESTIONS),
        )?;

        Ok(match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        })
    }
}

/// Settings supplied once when a session is built.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    range: NumberRange,
    operator: Operator,
    time_per_question: f32,
    max_questions: u32,
    seed: Option<u64>,
}

impl SessionConfig {
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidTimePerQuestion` unless the time
    /// budget is finite and positive, and `ConfigurationError::NoQuestions`
    /// when `max_questions` is zero.
    pub fn new(
        range: NumberRange,
        operator: Operator,
        time_per_question: f32,
        max_questions: u32,
    ) -> Result<Self, ConfigurationError> {
        validate_time(time_per_question)?;
        validate_questions(max_questions)?;

        Ok(Self {
            range,
            operator,
            time_per_question,
            max_questions,
            seed: None,
        })
    }

    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns `ConfigLoadError::Parse` for malformed JSON or unknown keys and
    /// `ConfigLoadError::Invalid` when validation fails.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigLoadError> {
        let draft: SessionConfigDraft = serde_json::from_str(raw)?;
        Ok(draft.validate()?)
    }

    /// Read, parse and validate a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigLoadError::Io` if the file cannot be read, otherwise the
    /// errors of [`SessionConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// # Errors
    ///
    /// Returns `ConfigurationError::NoQuestions` when `max_questions` is zero.
    pub fn with_max_questions(mut self, max_questions: u32) -> Result<Self, ConfigurationError> {
        validate_questions(max_questions)?;
        self.max_questions = max_questions;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidTimePerQuestion` for a non-positive
    /// or non-finite time budget.
    pub fn with_time_per_question(mut self, seconds: f32) -> Result<Self, ConfigurationError> {
        validate_time(seconds)?;
        self.time_per_question = seconds;
        Ok(self)
    }

    #[must_use]
    pub fn range(&self) -> NumberRange {
        self.range
    }

    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    #[must_use]
    pub fn time_per_question(&self) -> f32 {
        self.time_per_question
    }

    #[must_use]
    pub fn max_questions(&self) -> u32 {
        self.max_questions
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            range: NumberRange::default(),
            operator: Operator::Add,
            time_per_question: DEFAULT_TIME_PER_QUESTION,
            max_questions: DEFAULT_MAX_QUESTIONS,
            seed: None,
        }
    }
}

fn validate_time(seconds: f32) -> Result<(), ConfigurationError> {
    if seconds.is_finite() && seconds > 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidTimePerQuestion(seconds))
    }
}

fn validate_questions(max_questions: u32) -> Result<(), ConfigurationError> {
    if max_questions == 0 {
        return Err(ConfigurationError::NoQuestions);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use quiz_core::UnsupportedOperator;

    #[test]
    fn empty_draft_uses_defaults() {
        let config = SessionConfigDraft::new().validate().unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.time_per_question(), 30.0);
        assert_eq!(config.max_questions(), 10);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn json_overrides_every_field() {
        let config = SessionConfig::from_json_str(
            r#"{"min":2,"max":9,"operator":"/","time_per_question":12.5,"max_questions":3,"seed":7}"#,
        )
        .unwrap();

        assert_eq!(config.range(), NumberRange::new(2, 9).unwrap());
        assert_eq!(config.operator(), Operator::Divide);
        assert_eq!(config.time_per_question(), 12.5);
        assert_eq!(config.max_questions(), 3);
        assert_eq!(config.seed(), Some(7));
    }

    #[test]
    fn invalid_values_are_configuration_errors() {
        let err = SessionConfig::from_json_str(r#"{"min":5,"max":1}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Invalid(ConfigurationError::InvalidRange { min: 5, max: 1 })
        ));

        let err = SessionConfig::from_json_str(r#"{"operator":"%"}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Invalid(ConfigurationError::Operator(UnsupportedOperator(op))) if op == "%"
        ));

        let err = SessionConfig::from_json_str(r#"{"time_per_question":0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Invalid(ConfigurationError::InvalidTimePerQuestion(_))
        ));

        let err = SessionConfig::from_json_str(r#"{"max_questions":0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Invalid(ConfigurationError::NoQuestions)
        ));
    }

    #[test]
    fn unknown_keys_are_parse_errors() {
        let err = SessionConfig::from_json_str(r#"{"questions":3}"#).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }

    #[test]
    fn builder_overrides_are_validated() {
        let config = SessionConfig::default()
            .with_max_questions(4)
            .unwrap()
            .with_time_per_question(5.0)
            .unwrap();
        assert_eq!(config.max_questions(), 4);
        assert_eq!(config.time_per_question(), 5.0);

        assert!(SessionConfig::default().with_max_questions(0).is_err());
        assert!(SessionConfig::default().with_time_per_question(f32::NAN).is_err());
        assert!(SessionConfig::default().with_time_per_question(-1.0).is_err());
    }

    #[test]
    fn load_reads_file_and_reports_missing_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"operator":"-","max_questions":2}}"#).unwrap();

        let config = SessionConfig::load(file.path()).unwrap();
        assert_eq!(config.operator(), Operator::Subtract);
        assert_eq!(config.max_questions(), 2);

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            SessionConfig::load(&missing),
            Err(ConfigLoadError::Io { .. })
        ));
    }
}
