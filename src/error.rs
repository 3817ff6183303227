//! Defines the error types for caller contract violations.
//!
//! A field that fails validation is NOT an error: it is reported as a
//! `ValidationResult::Invalid`. These variants cover input the validators
//! must never observe, such as a unit tag outside the supported set.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntakeError {
    #[error("Unknown unit '{0}': expected 'kg' or 'lb'")]
    UnknownUnit(String),
    #[error("Inverted bounds: min {min} is greater than max {max}")]
    InvertedBounds { min: f64, max: f64 },
    #[error("Constraint bounds must be finite")]
    NonFiniteBound,
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, IntakeError>;
