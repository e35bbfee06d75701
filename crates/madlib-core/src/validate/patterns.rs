//! Pattern for each filler type

use crate::config::consts::validation;
use crate::model::FillerType;
use regex::Regex;
use std::sync::OnceLock;

fn word_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z]+$").expect("Invalid regex"))
}

fn proper_noun_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[A-Z][a-zA-Z]*$").expect("Invalid regex"))
}

fn adjective_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z]*[yY]$").expect("Invalid regex"))
}

fn quote_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    // Same quote character on both ends, no line terminator in between
    REGEX.get_or_init(|| {
        Regex::new(r#"^(?:'[^\n\r\x{2028}\x{2029}]*'|"[^\n\r\x{2028}\x{2029}]*")$"#)
            .expect("Invalid regex")
    })
}

impl FillerType {
    /// Whether an (already trimmed) value satisfies this type
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            FillerType::Word => word_regex().is_match(value),
            FillerType::ProperNoun => proper_noun_regex().is_match(value),
            FillerType::Adjective => adjective_regex().is_match(value),
            FillerType::Quote => quote_regex().is_match(value),
        }
    }

    /// Message shown when a value is rejected
    pub fn error_message(&self) -> &'static str {
        match self {
            FillerType::Word => validation::WORD,
            FillerType::ProperNoun => validation::PROPER_NOUN,
            FillerType::Adjective => validation::ADJECTIVE,
            FillerType::Quote => validation::QUOTE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use FillerType::*;

    #[test]
    fn test_classification_table() {
        let cases: &[(FillerType, &str, bool)] = &[
            (ProperNoun, "Cat", true),
            (ProperNoun, "cat", false),
            (ProperNoun, "C", true),
            (ProperNoun, "CAT", true),
            (ProperNoun, "Cat5", false),
            (ProperNoun, "Mary-Jane", false),
            (ProperNoun, "", false),
            (Adjective, "sunny", true),
            (Adjective, "sun", false),
            (Adjective, "y", true),
            (Adjective, "HAPPY", true),
            (Adjective, "silly!", false),
            (Adjective, "very silly", false),
            (Adjective, "", false),
            (Quote, "'hello'", true),
            (Quote, "\"hello\"", true),
            (Quote, "''", true),
            (Quote, "'mismatched\"", false),
            (Quote, "'", false),
            (Quote, "hello", false),
            (Quote, "'it's'", true),
            (Quote, "'a'b", false),
            (Quote, "'line\nbreak'", false),
            (Quote, "'line\rbreak'", false),
            (Quote, "\"line\r\nbreak\"", false),
            (Quote, "'line\u{2028}break'", false),
            (Quote, "'para\u{2029}break'", false),
            (Quote, "'tab\tinside'", true),
            (Word, "hi there", false),
            (Word, "Hi", true),
            (Word, "hi2", false),
            (Word, "café", false),
            (Word, "", false),
        ];

        for (filler_type, value, expected) in cases {
            assert_eq!(
                filler_type.accepts(value),
                *expected,
                "{filler_type} on {value:?}"
            );
        }
    }

    #[test]
    fn test_error_messages_are_distinct() {
        let messages: std::collections::HashSet<_> =
            FillerType::ALL.iter().map(|t| t.error_message()).collect();
        assert_eq!(messages.len(), FillerType::ALL.len());
    }

    #[test]
    fn test_error_message_text() {
        assert_eq!(
            Word.error_message(),
            "Please type 1 or more letters, without spaces or special characters."
        );
        assert_eq!(
            Quote.error_message(),
            "Please type 1 or more characters between single or double quotes."
        );
    }
}
