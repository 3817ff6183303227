//! Headless state of the intake form.
//!
//! Holds what the user has typed so far and answers the two questions a
//! rendering layer asks: which error messages to show, and whether a submit
//! produces an event.
use super::input::{parse_weight, PatientInput};
use super::submission::{submit_with, SubmitEvent};
use crate::error::Result;
use crate::measure::{Measurement, Units};
use crate::validation::{FormConfig, FormResult, PatientFormValidator};

#[derive(Debug, Clone, Default)]
pub struct IntakeForm {
    name: String,
    weight: Option<f64>,
    units: Units,
    validator: PatientFormValidator,
}

impl IntakeForm {
    /// An empty form with weight in kilograms.
    pub fn new() -> Self { Self::default() }

    pub fn with_config(config: FormConfig) -> Self {
        Self { validator: PatientFormValidator::new(config), ..Self::default() }
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Selects the weight unit. Unknown tags leave the selection unchanged.
    pub fn set_units(&mut self, tag: &str) -> Result<()> {
        self.units = tag.parse()?;
        Ok(())
    }

    /// Sets the weight from text. Blank text clears it; text that is not a
    /// number is rejected and leaves the weight unchanged.
    pub fn set_weight(&mut self, text: &str) -> Result<()> {
        self.weight = parse_weight(text)?;
        Ok(())
    }

    pub fn units(&self) -> Units { self.units }

    pub fn input(&self) -> PatientInput {
        PatientInput {
            name: (!self.name.is_empty()).then(|| self.name.clone()),
            weight: Measurement { value: self.weight, units: self.units },
        }
    }

    pub fn validation(&self) -> FormResult {
        self.validator.validate(&self.input())
    }

    /// The messages to render, one per invalid field.
    pub fn errors(&self) -> Vec<String> {
        self.validation().errors().into_iter().map(|(_, msg)| msg).collect()
    }

    /// Returns the event to emit, or `None` while any field is invalid or no
    /// weight has been entered.
    pub fn submit(&self) -> Option<SubmitEvent> {
        submit_with(&self.validator, &self.input()).ok()
    }
}
