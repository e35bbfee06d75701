use serde::{Deserialize, Serialize};

/// One piece of a madlib's text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "segment", rename_all = "lowercase")]
pub enum Segment {
    /// Literal text, emitted verbatim
    Static { text: String },
    /// Current value of the filler with this id
    Fillable { id: String },
    /// Paragraph break
    Newline,
}

impl Segment {
    pub fn text(text: impl Into<String>) -> Self {
        Segment::Static { text: text.into() }
    }

    pub fn fillable(id: impl Into<String>) -> Self {
        Segment::Fillable { id: id.into() }
    }
}
