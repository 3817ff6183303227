//! Units of expression and the numeric bounds attached to each of them.
use crate::error::{IntakeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The unit a weight is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Kg,
    Lb,
}

impl Units {
    pub const ALL: [Units; 2] = [Units::Kg, Units::Lb];

    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Kg => "kg",
            Units::Lb => "lb",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = IntakeError;

    /// Parses a unit tag. Anything other than `kg` or `lb` fails fast;
    /// there is no fallback unit.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "kg" => Ok(Units::Kg),
            "lb" => Ok(Units::Lb),
            other => {
                tracing::debug!(unit = other, "rejected unknown unit tag");
                Err(IntakeError::UnknownUnit(other.to_string()))
            }
        }
    }
}

/// An inclusive numeric range. `min <= max` holds for every instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawConstraint")]
pub struct Constraint {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RawConstraint {
    min: f64,
    max: f64,
}

impl TryFrom<RawConstraint> for Constraint {
    type Error = IntakeError;

    fn try_from(raw: RawConstraint) -> Result<Self> {
        Constraint::new(raw.min, raw.max)
    }
}

impl Constraint {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(IntakeError::NonFiniteBound);
        }
        if min > max {
            return Err(IntakeError::InvertedBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Builds a constraint from bounds known at compile time to be ordered.
    pub(crate) const fn fixed(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn min(&self) -> f64 { self.min }

    #[inline]
    pub fn max(&self) -> f64 { self.max }

    /// Inclusive on both ends. `NaN` is never contained.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Bounds for each supported unit. Lookup by `Units` is total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitConstraints {
    pub kg: Constraint,
    pub lb: Constraint,
}

/// Valid patient weight: 30-200 kg, or 66-440 lb.
pub const WEIGHT_CONSTRAINTS: UnitConstraints = UnitConstraints {
    kg: Constraint::fixed(30.0, 200.0),
    lb: Constraint::fixed(66.0, 440.0),
};

impl Default for UnitConstraints {
    fn default() -> Self { WEIGHT_CONSTRAINTS }
}

impl UnitConstraints {
    pub fn get(&self, units: Units) -> Constraint {
        match units {
            Units::Kg => self.kg,
            Units::Lb => self.lb,
        }
    }

    /// Resolves the bound for a raw unit tag, failing on unknown tags.
    pub fn lookup(&self, tag: &str) -> Result<Constraint> {
        tag.parse::<Units>().map(|units| self.get(units))
    }
}
