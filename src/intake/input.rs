//! Patient input and the parsing of raw form text.
use crate::error::{IntakeError, Result};
use crate::measure::{Measurement, Units};
use serde::{Deserialize, Serialize};

/// The values entered in the intake form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PatientInput {
    pub name: Option<String>,
    pub weight: Measurement,
}

impl PatientInput {
    pub fn new(name: impl Into<String>, weight: Measurement) -> Self {
        Self { name: Some(name.into()), weight }
    }

    /// Builds an input from the raw text of the form controls.
    ///
    /// An empty name becomes `None`. Unknown unit tags and non-numeric weights
    /// are rejected here rather than reaching the validators.
    pub fn from_raw(name: &str, weight: &str, units: &str) -> Result<Self> {
        let units: Units = units.parse()?;
        let value = parse_weight(weight)?;
        Ok(Self {
            name: (!name.is_empty()).then(|| name.to_string()),
            weight: Measurement { value, units },
        })
    }
}

/// Parses weight text. Blank text means no value has been entered.
pub fn parse_weight(text: &str) -> Result<Option<f64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(IntakeError::InvalidNumber(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("150", Some(150.0))]
    #[case(" 72.5 ", Some(72.5))]
    #[case("", None)]
    #[case("   ", None)]
    fn test_parse_weight(#[case] text: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_weight(text).unwrap(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("12kg")]
    #[case("NaN")]
    #[case("inf")]
    fn test_parse_weight_rejects_non_numbers(#[case] text: &str) {
        assert_eq!(parse_weight(text), Err(IntakeError::InvalidNumber(text.to_string())));
    }

    #[test]
    fn test_from_raw() {
        let input = PatientInput::from_raw("lachlan", "150", "lb").unwrap();
        assert_eq!(input, PatientInput::new("lachlan", Measurement::new(150.0, Units::Lb)));

        let empty = PatientInput::from_raw("", "", "kg").unwrap();
        assert_eq!(empty.name, None);
        assert_eq!(empty.weight, Measurement::missing(Units::Kg));
    }

    #[test]
    fn test_from_raw_rejects_unknown_unit() {
        assert_eq!(
            PatientInput::from_raw("lachlan", "150", "stone"),
            Err(IntakeError::UnknownUnit("stone".to_string()))
        );
    }
}
