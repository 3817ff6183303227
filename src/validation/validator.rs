//! The form validator that runs every field rule and aggregates the results.
use super::result::ValidationResult;
use super::rules::measurement::validate_unit_measurement;
use super::rules::required::required;
use crate::error::{IntakeError, Result};
use crate::intake::PatientInput;
use crate::measure::UnitConstraints;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fields of the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Weight,
}

impl FormField {
    pub const ALL: [FormField; 2] = [FormField::Name, FormField::Weight];
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::Name => f.write_str("name"),
            FormField::Weight => f.write_str("weight"),
        }
    }
}

/// One result per form field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormResult {
    pub name: ValidationResult,
    pub weight: ValidationResult,
}

impl FormResult {
    pub fn get(&self, field: FormField) -> &ValidationResult {
        match field {
            FormField::Name => &self.name,
            FormField::Weight => &self.weight,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &ValidationResult)> + '_ {
        FormField::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// The message for each invalid field, in form order.
    pub fn errors(&self) -> Vec<(FormField, String)> {
        self.iter()
            .filter_map(|(field, result)| result.message().map(|msg| (field, msg)))
            .collect()
    }

    pub fn error_count(&self) -> usize {
        self.iter().filter(|(_, result)| !result.is_valid()).count()
    }
}

/// Rule settings for the form. The default is the fixed weight table with
/// weight required.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub weight: UnitConstraints,
    pub weight_nullable: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self { weight: UnitConstraints::default(), weight_nullable: false }
    }
}

impl FormConfig {
    /// Reads a config from JSON. Every constraint is re-checked on the way in.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| IntakeError::Config(e.to_string()))
    }
}

/// Runs the field rules for a patient against a `FormConfig`.
///
/// Fields are validated independently; there are no cross-field rules.
#[derive(Debug, Clone, Default)]
pub struct PatientFormValidator {
    config: FormConfig,
}

impl PatientFormValidator {
    pub fn new(config: FormConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Validates a single field, e.g. on every change of that field.
    pub fn validate_field(&self, field: FormField, patient: &PatientInput) -> ValidationResult {
        match field {
            FormField::Name => required(patient.name.as_deref()),
            FormField::Weight => validate_unit_measurement(
                &patient.weight,
                &self.config.weight,
                self.config.weight_nullable,
            ),
        }
    }

    pub fn validate(&self, patient: &PatientInput) -> FormResult {
        let form = FormResult {
            name: self.validate_field(FormField::Name, patient),
            weight: self.validate_field(FormField::Weight, patient),
        };
        tracing::debug!(
            units = %patient.weight.units,
            invalid_fields = form.error_count(),
            "validated patient form"
        );
        form
    }
}

/// Validates a patient with the default rules.
pub fn patient_form(patient: &PatientInput) -> FormResult {
    PatientFormValidator::default().validate(patient)
}

/// True iff every field in the form is valid.
pub fn is_form_valid(form: &FormResult) -> bool {
    form.iter().all(|(_, result)| result.is_valid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{Constraint, Measurement, Units};
    use crate::validation::result::Reason;
    use serde_json::json;

    fn valid_patient() -> PatientInput {
        PatientInput::new("test patient", Measurement::new(100.0, Units::Kg))
    }

    #[test]
    fn test_valid_when_filled_out_correctly() {
        let form = patient_form(&valid_patient());
        assert_eq!(form.name, ValidationResult::Valid);
        assert_eq!(form.weight, ValidationResult::Valid);
        assert!(is_form_valid(&form));
    }

    #[test]
    fn test_invalid_when_name_empty() {
        let patient = PatientInput { name: Some(String::new()), ..valid_patient() };
        let form = patient_form(&patient);
        assert_eq!(form.name, ValidationResult::Invalid(Reason::Required));
        assert!(!is_form_valid(&form));
    }

    #[test]
    fn test_validates_weight_in_imperial() {
        let patient = PatientInput { weight: Measurement::new(65.0, Units::Lb), ..valid_patient() };
        let form = patient_form(&patient);
        assert_eq!(form.weight.message().as_deref(), Some("Must be between 66 and 440"));
    }

    #[test]
    fn test_validates_weight_in_metric() {
        let patient = PatientInput { weight: Measurement::new(29.0, Units::Kg), ..valid_patient() };
        let form = patient_form(&patient);
        assert_eq!(form.weight.message().as_deref(), Some("Must be between 30 and 200"));
    }

    #[test]
    fn test_missing_weight_is_required() {
        let patient = PatientInput { weight: Measurement::missing(Units::Lb), ..valid_patient() };
        assert_eq!(patient_form(&patient).weight, ValidationResult::Invalid(Reason::Required));
    }

    #[test]
    fn test_is_form_valid_aggregation() {
        let bad = ValidationResult::Invalid(Reason::Required);
        let ok = ValidationResult::Valid;
        assert!(is_form_valid(&FormResult { name: ok, weight: ok }));
        assert!(!is_form_valid(&FormResult { name: bad, weight: ok }));
        assert!(!is_form_valid(&FormResult { name: ok, weight: bad }));
        assert!(!is_form_valid(&FormResult { name: bad, weight: bad }));
    }

    #[test]
    fn test_error_count_matches_invalid_fields() {
        let patient = PatientInput { name: None, weight: Measurement::new(50.0, Units::Lb) };
        let form = patient_form(&patient);
        assert_eq!(form.error_count(), 2);
        assert_eq!(
            form.errors(),
            vec![
                (FormField::Name, "Required".to_string()),
                (FormField::Weight, "Must be between 66 and 440".to_string()),
            ]
        );
    }

    #[test]
    fn test_validate_single_field() {
        let validator = PatientFormValidator::default();
        let patient = PatientInput { name: None, ..valid_patient() };
        assert!(!validator.validate_field(FormField::Name, &patient).is_valid());
        assert!(validator.validate_field(FormField::Weight, &patient).is_valid());
    }

    #[test]
    fn test_form_result_wire_shape() {
        let patient = PatientInput { name: None, ..valid_patient() };
        assert_eq!(
            serde_json::to_value(patient_form(&patient)).unwrap(),
            json!({
                "name": { "valid": false, "message": "Required" },
                "weight": { "valid": true }
            })
        );
    }

    #[test]
    fn test_custom_config() {
        let config = FormConfig::from_json(
            r#"{
                "weight": { "kg": { "min": 10, "max": 30 }, "lb": { "min": 22, "max": 66 } },
                "weight_nullable": true
            }"#,
        )
        .unwrap();
        assert_eq!(config.weight.kg, Constraint::new(10.0, 30.0).unwrap());

        let validator = PatientFormValidator::new(config);
        let missing = PatientInput { weight: Measurement::missing(Units::Kg), ..valid_patient() };
        assert!(is_form_valid(&validator.validate(&missing)));

        let heavy = PatientInput { weight: Measurement::new(40.0, Units::Kg), ..valid_patient() };
        assert_eq!(
            validator.validate(&heavy).weight.message().as_deref(),
            Some("Must be between 10 and 30")
        );
    }

    #[test]
    fn test_config_defaults_and_rejections() {
        assert_eq!(FormConfig::from_json("{}").unwrap(), FormConfig::default());

        let inverted = FormConfig::from_json(
            r#"{ "weight": { "kg": { "min": 200, "max": 30 }, "lb": { "min": 66, "max": 440 } } }"#,
        );
        assert!(matches!(
            inverted,
            Err(IntakeError::Config(msg)) if msg.contains("Inverted bounds")
        ));

        assert!(matches!(FormConfig::from_json("not json"), Err(IntakeError::Config(_))));
    }
}
