//! Rule for unit-aware measurements.
//!
//! The same physical quantity has different valid ranges depending on the
//! unit it is expressed in (66-440 lb is 30-200 kg), so the bound is resolved
//! from the measurement's unit *before* the range check runs.
use super::range::is_between;
use super::required::required;
use crate::measure::{Constraint, Measurement, UnitConstraints, Units};
use crate::validation::result::ValidationResult;

/// The bound to check against and whether an absent value is acceptable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementOptions {
    pub constraint: Constraint,
    pub nullable: bool,
}

impl MeasurementOptions {
    /// Selects the bound for `units` from the table.
    pub fn for_units(constraints: &UnitConstraints, units: Units, nullable: bool) -> Self {
        Self { constraint: constraints.get(units), nullable }
    }
}

enum Entry {
    Missing,
    Present(f64),
}

impl From<Option<f64>> for Entry {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Entry::Missing, Entry::Present)
    }
}

pub fn validate_measurement(value: Option<f64>, options: MeasurementOptions) -> ValidationResult {
    match Entry::from(value) {
        Entry::Missing if options.nullable => ValidationResult::Valid,
        Entry::Missing => required(None),
        Entry::Present(v) => is_between(v, options.constraint),
    }
}

/// Validates `measurement` against the bound for its own unit.
pub fn validate_unit_measurement(
    measurement: &Measurement,
    constraints: &UnitConstraints,
    nullable: bool,
) -> ValidationResult {
    let options = MeasurementOptions::for_units(constraints, measurement.units, nullable);
    validate_measurement(measurement.value, options)
}
