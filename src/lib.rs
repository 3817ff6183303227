//! Validation core for a patient intake form (name, weight).
//!
//! The form component calls `patient_form` on its current input, renders the
//! message of every invalid field, and emits a `SubmitEvent` only when
//! `is_form_valid` holds.

pub mod error;
pub mod intake;
pub mod measure;
pub mod validation;

pub use error::{IntakeError, Result};
pub use intake::{submit, IntakeForm, Patient, PatientInput, SubmitError, SubmitEvent, Weight};
pub use measure::{Constraint, Measurement, UnitConstraints, Units};
pub use validation::{
    is_between, is_form_valid, patient_form, required, validate_measurement, FormConfig, FormField,
    FormResult, MeasurementOptions, PatientFormValidator, ValidationResult,
};
