//! Rendering surface - the boundary between the madlib components and a host UI
//!
//! A host only needs to create fields, read their values, show per-field
//! feedback, replace the result block and acknowledge a generate attempt.
//! Fields are addressed through [`FieldHandle`]s handed out by
//! [`Surface::append_field`], never through element-id strings.

pub mod memory;

use crate::model::Filler;
use crate::session::Outcome;
use serde::Serialize;

/// Opaque reference to a field created on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldHandle(usize);

impl FieldHandle {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Everything a surface needs to create the field for one filler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec<'a> {
    pub filler_id: &'a str,
    pub input_id: String,
    pub error_id: String,
    pub label: &'a str,
    pub placeholder: &'a str,
}

impl<'a> FieldSpec<'a> {
    pub fn for_filler(filler: &'a Filler) -> Self {
        Self {
            filler_id: &filler.id,
            input_id: filler.input_id(),
            error_id: filler.error_id(),
            label: &filler.friendly_text,
            placeholder: &filler.example_text,
        }
    }
}

/// Visual state of an input control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldState {
    #[default]
    Normal,
    Invalid,
}

impl FieldState {
    /// CSS class list applied to the input in this state
    pub fn class_name(&self) -> &'static str {
        match self {
            FieldState::Normal => "form-control",
            FieldState::Invalid => "form-control is-invalid",
        }
    }
}

/// Primitives a host UI provides to the madlib components
pub trait Surface {
    /// Create a labelled, empty input and an empty error display
    fn append_field(&mut self, spec: FieldSpec<'_>) -> FieldHandle;

    /// Whether both the input and its error display still exist
    fn field_present(&self, handle: FieldHandle) -> bool;

    /// Raw current value of the input, `None` if the input is gone
    fn input_value(&self, handle: FieldHandle) -> Option<String>;

    /// Set the error text and visual state of a field
    fn set_feedback(&mut self, handle: FieldHandle, state: FieldState, message: &str);

    /// Replace all prior content of the result container
    fn replace_result(&mut self, paragraphs: &[String]);

    /// Tell the user how a generate attempt went
    fn acknowledge(&mut self, outcome: Outcome);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FillerType;

    #[test]
    fn test_field_spec_for_filler() {
        let filler = Filler::new("hero", FillerType::ProperNoun, "A name", "Ada");
        let spec = FieldSpec::for_filler(&filler);
        assert_eq!(spec.filler_id, "hero");
        assert_eq!(spec.input_id, "hero-input");
        assert_eq!(spec.error_id, "hero-error-text");
        assert_eq!(spec.label, "A name");
        assert_eq!(spec.placeholder, "Ada");
    }

    #[test]
    fn test_state_class_names() {
        assert_eq!(FieldState::Normal.class_name(), "form-control");
        assert_eq!(FieldState::Invalid.class_name(), "form-control is-invalid");
    }
}
