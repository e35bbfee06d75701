use crate::builtin::Variant;
use crate::error::Result;
use crate::model::MadLib;
use std::fmt;
use std::path::PathBuf;

/// Where a madlib comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Builtin(Variant),
    File(PathBuf),
}

impl TemplateSource {
    pub fn load(&self) -> Result<MadLib> {
        match self {
            TemplateSource::Builtin(variant) => variant.load(),
            TemplateSource::File(path) => MadLib::from_file(path),
        }
    }
}

impl Default for TemplateSource {
    fn default() -> Self {
        TemplateSource::Builtin(Variant::default())
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSource::Builtin(variant) => write!(f, "builtin '{}'", variant),
            TemplateSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
