//! Error types for entity-recognizer operations.
//!
//! Most public operations report "nothing found" as `None` rather than an
//! error. `RecognizerError` is reserved for the temporal parser boundary and
//! for configuration loading.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecognizerError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Parser error: {0}")]
    Parser(String),
}

pub type Result<T> = std::result::Result<T, RecognizerError>;
