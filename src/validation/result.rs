//! The outcome type every validator returns.
use crate::measure::Constraint;
use serde::Serialize;
use std::fmt;

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reason {
    /// The value is absent or an empty string.
    Required,
    /// The value lies outside the inclusive range.
    OutOfRange(Constraint),
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Required => f.write_str("Required"),
            Reason::OutOfRange(c) => write!(f, "Must be between {} and {}", c.min(), c.max()),
        }
    }
}

/// Result of a single field check. An `Invalid` result always carries a
/// reason, so a failure without a message cannot be represented.
///
/// Serializes as `{"valid": true}` or `{"valid": false, "message": "..."}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "ResultRecord")]
pub enum ValidationResult {
    Valid,
    Invalid(Reason),
}

impl ValidationResult {
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn reason(&self) -> Option<&Reason> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(reason) => Some(reason),
        }
    }

    /// The human-readable failure message, present iff the result is invalid.
    pub fn message(&self) -> Option<String> {
        self.reason().map(ToString::to_string)
    }
}

#[derive(Serialize)]
struct ResultRecord {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl From<ValidationResult> for ResultRecord {
    fn from(result: ValidationResult) -> Self {
        Self { valid: result.is_valid(), message: result.message() }
    }
}
