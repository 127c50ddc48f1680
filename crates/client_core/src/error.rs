use std::time::Duration;

use model::fields::Field;
use thiserror::Error;

/// A record that cannot be scored. Validation stops at the first failing
/// field, walking the intake form in display order.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("required field '{0}' is missing or not usable")]
    MissingOrInvalidField(Field),
    #[error("field '{field}' must be between {min} and {max}")]
    OutOfRange { field: Field, min: f64, max: f64 },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingOrInvalidField(field) => *field,
            ValidationError::OutOfRange { field, .. } => *field,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("scoring service unreachable: {0}")]
    Unreachable(String),
    #[error("scoring request timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    #[error("scoring service answered with status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed scoring response: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Response(#[from] ResponseError),
    #[error("session is closed")]
    SessionClosed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("failed to build http client: {0}")]
    HttpClient(String),
}
