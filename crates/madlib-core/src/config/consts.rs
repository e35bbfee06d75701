//! Constants shared across the workspace

/// Configuration discovery
pub mod file {
    /// Name of the optional configuration file
    pub const CONFIG_FILE_NAME: &str = "madlib.toml";

    /// Environment variable selecting a builtin variant
    pub const ENV_VARIANT: &str = "MADLIB_VARIANT";

    /// Environment variable pointing at an external madlib file
    pub const ENV_FILE: &str = "MADLIB_FILE";
}

/// Per-type validation messages, shown verbatim next to an invalid field
pub mod validation {
    pub const WORD: &str =
        "Please type 1 or more letters, without spaces or special characters.";

    pub const PROPER_NOUN: &str =
        "Please type 1 or more letters, without special characters, starting with a capital letter.";

    pub const ADJECTIVE: &str =
        "Please type 1 or more letters, without special characters, ending with a y.";

    pub const QUOTE: &str = "Please type 1 or more characters between single or double quotes.";
}

/// Acknowledgments shown after each generate attempt
pub mod acknowledgment {
    pub const SUCCESS: &str = "Success! Please see below for your MadLib :)";

    pub const FAILURE: &str = "Uh oh, please check your form submission.";
}
