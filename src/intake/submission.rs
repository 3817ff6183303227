//! The payload emitted when a valid form is submitted.
use super::input::PatientInput;
use crate::measure::Units;
use crate::validation::{is_form_valid, FormResult, PatientFormValidator};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A submitted weight. Unlike `Measurement`, the value is always present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub value: f64,
    pub units: Units,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,
    pub weight: Weight,
}

/// `{"patient": {"name": ..., "weight": {"value": ..., "units": "kg"|"lb"}}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitEvent {
    pub patient: Patient,
}

/// Why no event was emitted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// At least one field failed validation. Carries the result to render.
    #[error("Form has {} invalid field(s)", .0.error_count())]
    Invalid(FormResult),
    /// The form is valid under a nullable-weight config but has no weight,
    /// so there is no number to put in the payload.
    #[error("No weight to submit")]
    MissingWeight,
}

/// Submits with the default rules.
pub fn submit(input: &PatientInput) -> Result<SubmitEvent, SubmitError> {
    submit_with(&PatientFormValidator::default(), input)
}

/// Validates `input` and builds the event only if every field is valid and
/// a weight value is present.
pub fn submit_with(
    validator: &PatientFormValidator,
    input: &PatientInput,
) -> Result<SubmitEvent, SubmitError> {
    let form = validator.validate(input);
    if !is_form_valid(&form) {
        tracing::debug!(invalid_fields = form.error_count(), "submission rejected");
        return Err(SubmitError::Invalid(form));
    }

    let Some(value) = input.weight.value else {
        tracing::debug!("submission withheld: no weight value");
        return Err(SubmitError::MissingWeight);
    };

    tracing::debug!(units = %input.weight.units, "submission emitted");
    Ok(SubmitEvent {
        patient: Patient {
            // A valid name is always present and non-empty.
            name: input.name.clone().unwrap_or_default(),
            weight: Weight { value, units: input.weight.units },
        },
    })
}
