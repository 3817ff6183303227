//! Rule: a field must be filled in.
use crate::validation::result::{Reason, ValidationResult};

/// Fails for `None` and the empty string. Whitespace counts as present.
pub fn required(value: Option<&str>) -> ValidationResult {
    match value {
        None | Some("") => ValidationResult::Invalid(Reason::Required),
        Some(_) => ValidationResult::Valid,
    }
}
