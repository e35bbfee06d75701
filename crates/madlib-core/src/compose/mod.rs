//! Result renderer - substitute input values into the text and split paragraphs
//!
//! `Newline` always emits the current paragraph, even when it is empty. Only
//! the final paragraph is dropped when empty, so a trailing `Newline` never
//! produces a blank block at the end.

use crate::error::{MadlibError, Result};
use crate::form::FieldBindings;
use crate::model::{MadLib, Segment};
use crate::surface::Surface;

/// Compose segments into paragraphs, resolving fillable ids through `lookup`
pub fn compose_paragraphs<'a, F>(segments: &[Segment], mut lookup: F) -> Result<Vec<String>>
where
    F: FnMut(&str) -> Option<&'a str>,
{
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for segment in segments {
        match segment {
            Segment::Static { text } => current.push_str(text),
            Segment::Fillable { id } => {
                let value = lookup(id).ok_or_else(|| MadlibError::MissingControl(id.clone()))?;
                current.push_str(value);
            }
            Segment::Newline => paragraphs.push(std::mem::take(&mut current)),
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    Ok(paragraphs)
}

/// Writes the finished madlib into a surface's result container
pub struct ResultRenderer;

impl ResultRenderer {
    /// Compose the text from the raw (untrimmed) input values and replace the result
    pub fn render<S: Surface + ?Sized>(
        madlib: &MadLib,
        bindings: &FieldBindings,
        surface: &mut S,
    ) -> Result<Vec<String>> {
        let mut values = Vec::with_capacity(bindings.len());
        for filler in madlib.fillers() {
            let value = bindings
                .get(&filler.id)
                .and_then(|h| surface.input_value(h))
                .ok_or_else(|| MadlibError::MissingControl(filler.id.clone()))?;
            values.push((filler.id.as_str(), value));
        }

        let paragraphs = compose_paragraphs(madlib.text(), |id| {
            values
                .iter()
                .find(|(filler_id, _)| *filler_id == id)
                .map(|(_, value)| value.as_str())
        })?;

        tracing::debug!(paragraphs = paragraphs.len(), "result composed");
        surface.replace_result(&paragraphs);
        Ok(paragraphs)
    }
}
