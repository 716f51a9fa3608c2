//! Error types for the tablily library

use std::io;

/// Failure to parse a single tab entry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// More than one string or duration separator
    #[error("invalid tab entry format: '{token}'")]
    InvalidFormat { token: String },

    /// String suffix is not a number or outside of the tuning
    #[error("invalid string number '{value}' in tab entry '{token}'")]
    InvalidStringNumber { value: String, token: String },

    /// Duration suffix is not a number
    #[error("invalid duration '{value}' in tab entry '{token}'")]
    InvalidDuration { value: String, token: String },

    /// Fret is not a number
    #[error("invalid fret number '{value}' in tab entry '{token}'")]
    InvalidFret { value: String, token: String },
}

/// Failure to turn a note event into a LilyPond pitch.
/// Not expected with the built-in tunings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("string {string_number} does not exist on a {string_count} string tuning")]
    InvalidStringNumber {
        string_number: u32,
        string_count: usize,
    },

    #[error("fret {0} is out of range")]
    FretOutOfRange(u32),

    #[error("invalid open string note: '{0}'")]
    InvalidOpenStringNote(String),

    #[error("invalid note index: {0}")]
    InvalidNoteIndex(i32),
}

/// Library error type for tablily operations
#[derive(Debug, thiserror::Error)]
pub enum TablilyError {
    /// Tab entry could not be parsed
    #[error("parsing error: {0}")]
    ParsingError(#[from] ParseError),

    /// Parsed tab entry could not be converted to a pitch
    #[error("conversion error for tab entry '{token}': {source}")]
    ResolveError {
        token: String,
        #[source]
        source: ResolveError,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// LilyPond template error
    #[error("template error: {0}")]
    TemplateError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<io::Error> for TablilyError {
    fn from(error: io::Error) -> Self {
        Self::IoError(error.to_string())
    }
}

impl From<mustache::Error> for TablilyError {
    fn from(error: mustache::Error) -> Self {
        Self::TemplateError(error.to_string())
    }
}
