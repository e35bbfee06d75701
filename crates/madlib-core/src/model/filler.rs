use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Validation type of a filler slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FillerType {
    Word,
    ProperNoun,
    Adjective,
    Quote,
}

impl FillerType {
    pub const ALL: [FillerType; 4] = [
        FillerType::Word,
        FillerType::ProperNoun,
        FillerType::Adjective,
        FillerType::Quote,
    ];

    /// Tag used in madlib files
    pub fn as_str(&self) -> &'static str {
        match self {
            FillerType::Word => "word",
            FillerType::ProperNoun => "properNoun",
            FillerType::Adjective => "adjective",
            FillerType::Quote => "quote",
        }
    }
}

impl fmt::Display for FillerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FillerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FillerType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown filler type '{}'", s))
    }
}

/// One user-editable slot of a madlib
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filler {
    pub id: String,
    #[serde(rename = "type")]
    pub filler_type: FillerType,
    pub friendly_text: String,
    pub example_text: String,
}

impl Filler {
    pub fn new(
        id: impl Into<String>,
        filler_type: FillerType,
        friendly_text: impl Into<String>,
        example_text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            filler_type,
            friendly_text: friendly_text.into(),
            example_text: example_text.into(),
        }
    }

    /// Element id of the rendered input control
    pub fn input_id(&self) -> String {
        format!("{}-input", self.id)
    }

    /// Element id of the rendered error display
    pub fn error_id(&self) -> String {
        format!("{}-error-text", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filler_with_camel_case_type() {
        let toml = r#"
id = "hero"
type = "properNoun"
friendly_text = "A name"
example_text = "Alice"
"#;
        let filler: Filler = toml::from_str(toml).unwrap();
        assert_eq!(filler.id, "hero");
        assert_eq!(filler.filler_type, FillerType::ProperNoun);
    }

    #[test]
    fn test_reject_unknown_type() {
        let toml = r#"
id = "hero"
type = "verb"
friendly_text = "A verb"
example_text = "run"
"#;
        assert!(toml::from_str::<Filler>(toml).is_err());
    }

    #[test]
    fn test_derived_element_ids() {
        let filler = Filler::new("animal", FillerType::Word, "An animal", "fox");
        assert_eq!(filler.input_id(), "animal-input");
        assert_eq!(filler.error_id(), "animal-error-text");
    }

    #[test]
    fn test_type_tag_round_trips_through_from_str() {
        for t in FillerType::ALL {
            assert_eq!(t.as_str().parse::<FillerType>().unwrap(), t);
        }
        assert!("Word".parse::<FillerType>().is_err());
    }
}
