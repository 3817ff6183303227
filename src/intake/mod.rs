//! The boundary between the form component and the validation engine.
//!
//! Raw text from form controls is parsed into a `PatientInput` here, so the
//! validators only ever see supported units and real numbers. A valid form
//! is turned into the `SubmitEvent` payload the component emits.

pub use self::form::IntakeForm;
pub use self::input::{parse_weight, PatientInput};
pub use self::submission::{submit, submit_with, Patient, SubmitError, SubmitEvent, Weight};

mod form;
mod input;
mod submission;
