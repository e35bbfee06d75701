//! Validation engine

use crate::error::MadlibError;
use crate::form::FieldBindings;
use crate::model::{Filler, FillerType, MadLib};
use crate::surface::{FieldState, Surface};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Outcome of validating one filler
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldVerdict {
    pub id: String,
    #[serde(rename = "type")]
    pub filler_type: FillerType,
    pub valid: bool,
    /// Empty when valid
    pub message: String,
    /// The field's input or error display was not found
    pub missing_control: bool,
}

impl FieldVerdict {
    /// Create a passing verdict
    pub fn pass(filler: &Filler) -> Self {
        Self {
            id: filler.id.clone(),
            filler_type: filler.filler_type,
            valid: true,
            message: String::new(),
            missing_control: false,
        }
    }

    /// Create a failing verdict with the type's message
    pub fn fail(filler: &Filler) -> Self {
        Self {
            id: filler.id.clone(),
            filler_type: filler.filler_type,
            valid: false,
            message: filler.filler_type.error_message().to_string(),
            missing_control: false,
        }
    }

    /// Create a failing verdict for a field that is not rendered
    pub fn missing(filler: &Filler) -> Self {
        Self {
            id: filler.id.clone(),
            filler_type: filler.filler_type,
            valid: false,
            message: MadlibError::MissingControl(filler.id.clone()).to_string(),
            missing_control: true,
        }
    }

    /// Check a raw input value against the filler's type
    ///
    /// Surrounding whitespace and byte order marks are ignored.
    pub fn check(filler: &Filler, raw: &str) -> Self {
        let value = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
        if filler.filler_type.accepts(value) {
            Self::pass(filler)
        } else {
            Self::fail(filler)
        }
    }
}

/// Result of one full validation pass, in filler order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    verdicts: Vec<FieldVerdict>,
}

impl ValidationReport {
    /// True iff every filler passed
    pub fn is_valid(&self) -> bool {
        self.verdicts.iter().all(|v| v.valid)
    }

    pub fn verdicts(&self) -> &[FieldVerdict] {
        &self.verdicts
    }

    pub fn verdict(&self, id: &str) -> Option<&FieldVerdict> {
        self.verdicts.iter().find(|v| v.id == id)
    }

    /// Message for one filler (empty when valid)
    pub fn message(&self, id: &str) -> Option<&str> {
        self.verdict(id).map(|v| v.message.as_str())
    }

    /// Filler id to message, for every filler
    pub fn messages(&self) -> BTreeMap<String, String> {
        self.verdicts
            .iter()
            .map(|v| (v.id.clone(), v.message.clone()))
            .collect()
    }

    /// Ids of the fillers that failed, in filler order
    pub fn invalid_ids(&self) -> Vec<&str> {
        self.verdicts
            .iter()
            .filter(|v| !v.valid)
            .map(|v| v.id.as_str())
            .collect()
    }
}

/// Validates the fields rendered on a surface
#[derive(Debug, Default, Clone, Copy)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Validate every filler and apply per-field feedback to the surface
    pub fn validate<S: Surface + ?Sized>(
        &self,
        madlib: &MadLib,
        bindings: &FieldBindings,
        surface: &mut S,
    ) -> ValidationReport {
        let mut verdicts = Vec::with_capacity(madlib.fillers().len());

        for filler in madlib.fillers() {
            let handle = bindings.get(&filler.id).filter(|h| surface.field_present(*h));
            let value = handle.and_then(|h| surface.input_value(h).map(|v| (h, v)));

            let Some((handle, value)) = value else {
                tracing::error!(filler = %filler.id, "Missing elements for {}", filler.id);
                verdicts.push(FieldVerdict::missing(filler));
                continue;
            };

            let verdict = FieldVerdict::check(filler, &value);
            if verdict.valid {
                surface.set_feedback(handle, FieldState::Normal, "");
            } else {
                tracing::debug!(filler = %filler.id, filler_type = %filler.filler_type, "rejected input");
                surface.set_feedback(handle, FieldState::Invalid, &verdict.message);
            }
            verdicts.push(verdict);
        }

        let report = ValidationReport { verdicts };
        tracing::debug!(
            valid = report.is_valid(),
            invalid = report.invalid_ids().len(),
            "validation finished"
        );
        report
    }
}

/// Validate plain values without a surface
///
/// A filler with no entry in `values` is treated like a missing control.
pub fn validate_values(madlib: &MadLib, values: &HashMap<String, String>) -> ValidationReport {
    let verdicts = madlib
        .fillers()
        .iter()
        .map(|filler| match values.get(&filler.id) {
            Some(value) => FieldVerdict::check(filler, value),
            None => FieldVerdict::missing(filler),
        })
        .collect();
    ValidationReport { verdicts }
}
