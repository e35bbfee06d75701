//! Form renderer - one labelled input and error display per filler

use crate::model::MadLib;
use crate::surface::{FieldHandle, FieldSpec, Surface};

/// Filler id to the handle of its rendered field, in filler order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBindings {
    entries: Vec<(String, FieldHandle)>,
}

impl FieldBindings {
    pub fn get(&self, id: &str) -> Option<FieldHandle> {
        self.entries
            .iter()
            .find(|(filler_id, _)| filler_id == id)
            .map(|(_, handle)| *handle)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldHandle)> {
        self.entries.iter().map(|(id, handle)| (id.as_str(), *handle))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the input form for a madlib
pub struct FormRenderer;

impl FormRenderer {
    /// Append one field per filler to the surface, in order
    pub fn render<S: Surface + ?Sized>(madlib: &MadLib, surface: &mut S) -> FieldBindings {
        let entries = madlib
            .fillers()
            .iter()
            .map(|filler| {
                let handle = surface.append_field(FieldSpec::for_filler(filler));
                (filler.id.clone(), handle)
            })
            .collect::<Vec<_>>();

        tracing::debug!(fields = entries.len(), "form rendered");
        FieldBindings { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::Variant;
    use crate::surface::memory::MemorySurface;

    #[test]
    fn test_one_input_per_filler_in_order() {
        let madlib = Variant::Long.load().unwrap();
        let mut surface = MemorySurface::new();
        let bindings = FormRenderer::render(&madlib, &mut surface);

        let expected: Vec<String> = madlib.fillers().iter().map(|f| f.input_id()).collect();
        let actual: Vec<String> = surface.fields().map(|f| f.input_id.clone()).collect();
        assert_eq!(actual, expected);
        assert_eq!(bindings.len(), madlib.fillers().len());
    }

    #[test]
    fn test_fields_carry_label_and_placeholder() {
        let madlib = Variant::Short.load().unwrap();
        let mut surface = MemorySurface::new();
        FormRenderer::render(&madlib, &mut surface);

        for filler in madlib.fillers() {
            let field = surface.field(&filler.input_id()).unwrap();
            assert_eq!(field.label, filler.friendly_text);
            assert_eq!(field.placeholder, filler.example_text);
            assert_eq!(field.value, "");
            assert_eq!(field.error_id, filler.error_id());
            assert_eq!(field.error_text, "");
        }
    }

    #[test]
    fn test_bindings_resolve_every_filler() {
        let madlib = Variant::Short.load().unwrap();
        let mut surface = MemorySurface::new();
        let bindings = FormRenderer::render(&madlib, &mut surface);

        for (index, filler) in madlib.fillers().iter().enumerate() {
            assert_eq!(bindings.get(&filler.id).map(|h| h.index()), Some(index));
        }
        assert!(bindings.get("nobody").is_none());
        let ids: Vec<&str> = bindings.iter().map(|(id, _)| id).collect();
        assert_eq!(ids.len(), madlib.fillers().len());
    }
}
