//! Error types for the fitnessreport application.

use thiserror::Error;

/// Errors that can occur when validating a single answer or a person record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("not a number: '{0}'")]
    InvalidNumber(String),

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str, value: f64 },

    #[error("invalid intensity: '{0}'")]
    UnknownIntensity(String),

    #[error("name must not be empty")]
    EmptyName,
}

/// Errors that end an interactive collection session.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("failed to read or write prompt: {0}")]
    Io(#[from] std::io::Error),

    /// Fields are checked one at a time before the record is built, so this
    /// only fires if record validation is stricter than the per-field checks.
    #[error("invalid person record: {0}")]
    InvalidRecord(#[from] InputError),

    #[error("input ended while waiting for {field}")]
    UnexpectedEof { field: &'static str },
}
