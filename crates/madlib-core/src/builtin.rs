//! Builtin madlib definitions

use crate::error::{MadlibError, Result};
use crate::model::MadLib;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Builtin madlib variants shipped with the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Short,
    Long,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Short, Variant::Long];

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Short => "short",
            Variant::Long => "long",
        }
    }

    /// Raw TOML source of this variant
    pub fn source(&self) -> &'static str {
        match self {
            Variant::Short => include_str!("../builtin_madlibs/short.toml"),
            Variant::Long => include_str!("../builtin_madlibs/long.toml"),
        }
    }

    /// Parse this variant into a madlib
    pub fn load(&self) -> Result<MadLib> {
        MadLib::from_toml_str(self.source())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = MadlibError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "short" => Ok(Variant::Short),
            "long" => Ok(Variant::Long),
            other => Err(MadlibError::UnknownVariant(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Segment;

    #[test]
    fn test_builtin_variants_parse() {
        for variant in Variant::ALL {
            let madlib = variant.load().unwrap();
            assert!(!madlib.fillers().is_empty(), "{variant} has no fillers");
        }
    }

    #[test]
    fn test_long_has_more_fillers_than_short() {
        let short = Variant::Short.load().unwrap();
        let long = Variant::Long.load().unwrap();
        assert!(long.fillers().len() > short.fillers().len());
    }

    #[test]
    fn test_every_filler_is_used_in_text() {
        for variant in Variant::ALL {
            let madlib = variant.load().unwrap();
            for filler in madlib.fillers() {
                let used = madlib
                    .text()
                    .iter()
                    .any(|s| matches!(s, Segment::Fillable { id } if *id == filler.id));
                assert!(used, "{} is never used in {}", filler.id, variant);
            }
        }
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!("short".parse::<Variant>().unwrap(), Variant::Short);
        assert_eq!("long".parse::<Variant>().unwrap(), Variant::Long);
        assert!(matches!(
            "medium".parse::<Variant>(),
            Err(MadlibError::UnknownVariant(_))
        ));
    }

    #[test]
    fn test_default_variant_is_short() {
        assert_eq!(Variant::default(), Variant::Short);
    }
}
