use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MadlibError {
    // Template model errors
    #[error("MADLIB_NO_FILLERS: a madlib must declare at least one filler")]
    NoFillers,

    #[error("MADLIB_EMPTY_FILLER_ID: filler #{index} has an empty id")]
    EmptyFillerId { index: usize },

    #[error("MADLIB_DUPLICATE_FILLER_ID: filler id '{id}' is declared more than once")]
    DuplicateFillerId { id: String },

    #[error(
        "MADLIB_UNKNOWN_FILLABLE: text segment #{segment_index} references unknown filler '{id}'"
    )]
    UnknownFillable { id: String, segment_index: usize },

    #[error("MADLIB_PARSE_ERROR: {0}")]
    ParseError(String),

    #[error("MADLIB_FILE_NOT_FOUND: '{path}' does not exist")]
    FileNotFound { path: PathBuf },

    // Surface errors
    #[error("MISSING_CONTROL: no input/error pair is rendered for filler '{0}'")]
    MissingControl(String),

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    #[error("UNKNOWN_VARIANT: '{0}' is not a builtin madlib (expected 'short' or 'long')")]
    UnknownVariant(String),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<toml::de::Error> for MadlibError {
    fn from(err: toml::de::Error) -> Self {
        MadlibError::ParseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MadlibError>;
