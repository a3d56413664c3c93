//! Error types for the drafting domain

use super::intent::Intent;
use super::status::MissingFieldStatus;

/// Turn resolution errors
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ResolveError {
    #[error("Status {status} does not apply to a {intent} draft")]
    StatusNotApplicable {
        status: MissingFieldStatus,
        intent: Intent,
    },
}

/// Model output errors
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ModelOutputError {
    #[error("Response too long: {actual} bytes exceeds maximum of {max} bytes")]
    TooLong { max: usize, actual: usize },

    #[error("No JSON object found in response")]
    NoJson,

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Unknown intent: {0}")]
    UnknownIntent(String),

    #[error("Payload does not match intent {intent}: {reason}")]
    PayloadMismatch { intent: Intent, reason: String },
}
