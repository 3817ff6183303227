//! Units, their bounds, and measured values.

pub use self::measurement::Measurement;
pub use self::units::{Constraint, UnitConstraints, Units, WEIGHT_CONSTRAINTS};

mod measurement;
mod units;
