//! Rule: a number must lie within an inclusive range.
use crate::measure::Constraint;
use crate::validation::result::{Reason, ValidationResult};

pub fn is_between(value: f64, constraint: Constraint) -> ValidationResult {
    if constraint.contains(value) {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(Reason::OutOfRange(constraint))
    }
}
