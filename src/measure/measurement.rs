//! A numeric value paired with the unit it is expressed in.
use super::units::Units;
use serde::{Deserialize, Serialize};

/// A possibly missing value in a declared unit. `value` is `None` until the
/// user has entered something.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurement {
    pub value: Option<f64>,
    pub units: Units,
}

impl Measurement {
    pub fn new(value: f64, units: Units) -> Self {
        Self { value: Some(value), units }
    }

    pub fn missing(units: Units) -> Self {
        Self { value: None, units }
    }
}
