//! The validation engine for the patient intake form.
//!
//! Rule primitives (`required`, `is_between`) are composed into a unit-aware
//! measurement rule, and the `PatientFormValidator` runs one rule per field
//! and aggregates them into a single pass/fail verdict. Every function here
//! is a pure function of its input.

pub use self::result::{Reason, ValidationResult};
pub use self::rules::measurement::{
    validate_measurement, validate_unit_measurement, MeasurementOptions,
};
pub use self::rules::range::is_between;
pub use self::rules::required::required;
pub use self::validator::{
    is_form_valid, patient_form, FormConfig, FormField, FormResult, PatientFormValidator,
};

mod result;
mod validator;
mod rules {
    pub mod measurement;
    pub mod range;
    pub mod required;
}
