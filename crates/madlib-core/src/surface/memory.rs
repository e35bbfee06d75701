//! In-memory surface, used by tests and by hosts that render elsewhere

use super::{FieldHandle, FieldSpec, FieldState, Surface};
use crate::session::Outcome;
use serde::Serialize;

/// A rendered field: label, input and error display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryField {
    pub filler_id: String,
    pub input_id: String,
    pub error_id: String,
    pub label: String,
    pub placeholder: String,
    pub value: String,
    pub error_text: String,
    pub state: FieldState,
}

/// Surface that keeps every element in memory
#[derive(Debug, Default)]
pub struct MemorySurface {
    // Removed fields leave a `None` so handles stay stable
    fields: Vec<Option<MemoryField>>,
    result: Vec<String>,
    acknowledgments: Vec<Outcome>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields still present, in creation order
    pub fn fields(&self) -> impl Iterator<Item = &MemoryField> {
        self.fields.iter().flatten()
    }

    /// Look up a field by its input element id
    pub fn field(&self, input_id: &str) -> Option<&MemoryField> {
        self.fields().find(|f| f.input_id == input_id)
    }

    /// Look up a field by its error element id
    pub fn field_by_error_id(&self, error_id: &str) -> Option<&MemoryField> {
        self.fields().find(|f| f.error_id == error_id)
    }

    /// Field behind a handle, if it is still present
    pub fn field_at(&self, handle: FieldHandle) -> Option<&MemoryField> {
        self.fields.get(handle.index()).and_then(Option::as_ref)
    }

    fn field_mut(&mut self, input_id: &str) -> Option<&mut MemoryField> {
        self.fields
            .iter_mut()
            .flatten()
            .find(|f| f.input_id == input_id)
    }

    /// Edit an input as the user would. Returns false if no such input exists.
    pub fn set_value(&mut self, input_id: &str, value: impl Into<String>) -> bool {
        match self.field_mut(input_id) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Drop a field's input and error display
    pub fn remove_field(&mut self, input_id: &str) -> bool {
        let slot = self
            .fields
            .iter_mut()
            .find(|slot| matches!(slot, Some(f) if f.input_id == input_id));
        match slot {
            Some(slot) => {
                *slot = None;
                true
            }
            None => false,
        }
    }

    /// Paragraphs currently in the result container
    pub fn result(&self) -> &[String] {
        &self.result
    }

    /// Every acknowledgment shown so far, oldest first
    pub fn acknowledgments(&self) -> &[Outcome] {
        &self.acknowledgments
    }

    pub fn last_acknowledgment(&self) -> Option<Outcome> {
        self.acknowledgments.last().copied()
    }
}

impl Surface for MemorySurface {
    fn append_field(&mut self, spec: FieldSpec<'_>) -> FieldHandle {
        let handle = FieldHandle::new(self.fields.len());
        self.fields.push(Some(MemoryField {
            filler_id: spec.filler_id.to_string(),
            input_id: spec.input_id,
            error_id: spec.error_id,
            label: spec.label.to_string(),
            placeholder: spec.placeholder.to_string(),
            value: String::new(),
            error_text: String::new(),
            state: FieldState::Normal,
        }));
        handle
    }

    fn field_present(&self, handle: FieldHandle) -> bool {
        self.field_at(handle).is_some()
    }

    fn input_value(&self, handle: FieldHandle) -> Option<String> {
        self.field_at(handle).map(|f| f.value.clone())
    }

    fn set_feedback(&mut self, handle: FieldHandle, state: FieldState, message: &str) {
        if let Some(Some(field)) = self.fields.get_mut(handle.index()) {
            field.state = state;
            field.error_text = message.to_string();
        }
    }

    fn replace_result(&mut self, paragraphs: &[String]) {
        self.result = paragraphs.to_vec();
    }

    fn acknowledge(&mut self, outcome: Outcome) {
        self.acknowledgments.push(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Filler, FillerType};

    fn surface_with_animal() -> (MemorySurface, FieldHandle) {
        let filler = Filler::new("animal", FillerType::Word, "An animal", "fox");
        let mut surface = MemorySurface::new();
        let handle = surface.append_field(FieldSpec::for_filler(&filler));
        (surface, handle)
    }

    #[test]
    fn test_append_field_starts_empty() {
        let (surface, handle) = surface_with_animal();
        let field = surface.field("animal-input").unwrap();
        assert_eq!(field.label, "An animal");
        assert_eq!(field.placeholder, "fox");
        assert_eq!(field.value, "");
        assert_eq!(field.error_text, "");
        assert_eq!(field.state, FieldState::Normal);
        assert!(surface.field_by_error_id("animal-error-text").is_some());
        assert_eq!(surface.input_value(handle).as_deref(), Some(""));
    }

    #[test]
    fn test_set_value_by_input_id() {
        let (mut surface, handle) = surface_with_animal();
        assert!(surface.set_value("animal-input", " cat "));
        assert!(!surface.set_value("plant-input", "fern"));
        assert_eq!(surface.input_value(handle).as_deref(), Some(" cat "));
    }

    #[test]
    fn test_removed_field_is_not_present() {
        let (mut surface, handle) = surface_with_animal();
        assert!(surface.remove_field("animal-input"));
        assert!(!surface.field_present(handle));
        assert_eq!(surface.input_value(handle), None);
        assert_eq!(surface.fields().count(), 0);
        // Feedback on a missing field is a no-op
        surface.set_feedback(handle, FieldState::Invalid, "gone");
    }

    #[test]
    fn test_replace_result_discards_previous_content() {
        let mut surface = MemorySurface::new();
        surface.replace_result(&["one".to_string(), "two".to_string()]);
        surface.replace_result(&["three".to_string()]);
        assert_eq!(surface.result(), ["three".to_string()]);
    }
}
