use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("unknown cuisine: '{0}'")]
    UnknownCuisine(String),

    #[error("unknown meal type: '{0}'; expected Breakfast, Lunch, or Dinner")]
    UnknownMealType(String),

    #[error("a resto must serve at least one meal type")]
    EmptyMealSupport,

    #[error("invalid meal flag '{0}'; expected B, L, or D")]
    InvalidMealFlag(char),
}

impl CoreError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CoreError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
