use super::{Filler, Segment};
use crate::error::{MadlibError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// On-disk shape of a madlib, before the construction contract is checked
#[derive(Debug, Deserialize)]
struct MadLibDef {
    #[serde(default)]
    fillers: Vec<Filler>,
    #[serde(default)]
    text: Vec<Segment>,
}

/// A validated madlib template
///
/// Invariants held by every value of this type:
/// - at least one filler
/// - filler ids are non-empty and unique
/// - every `Fillable` segment resolves to exactly one filler
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MadLib {
    fillers: Vec<Filler>,
    text: Vec<Segment>,
}

impl MadLib {
    /// Build a madlib, rejecting contract violations
    pub fn new(fillers: Vec<Filler>, text: Vec<Segment>) -> Result<Self> {
        if fillers.is_empty() {
            return Err(MadlibError::NoFillers);
        }

        let mut seen = HashSet::with_capacity(fillers.len());
        for (index, filler) in fillers.iter().enumerate() {
            if filler.id.is_empty() {
                return Err(MadlibError::EmptyFillerId { index });
            }
            if !seen.insert(filler.id.as_str()) {
                return Err(MadlibError::DuplicateFillerId {
                    id: filler.id.clone(),
                });
            }
        }

        for (segment_index, segment) in text.iter().enumerate() {
            if let Segment::Fillable { id } = segment {
                if !seen.contains(id.as_str()) {
                    return Err(MadlibError::UnknownFillable {
                        id: id.clone(),
                        segment_index,
                    });
                }
            }
        }

        Ok(Self { fillers, text })
    }

    /// Parse a madlib from its TOML form
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let def: MadLibDef = toml::from_str(content)?;
        Self::new(def.fillers, def.text)
    }

    /// Read a madlib file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MadlibError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn fillers(&self) -> &[Filler] {
        &self.fillers
    }

    pub fn text(&self) -> &[Segment] {
        &self.text
    }

    /// Look up a filler by id
    pub fn filler(&self, id: &str) -> Option<&Filler> {
        self.fillers.iter().find(|f| f.id == id)
    }
}
