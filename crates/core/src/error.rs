//! Error types for GeoJSON/WKT conversion.

use thiserror::Error;

use crate::types::Format;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting between GeoJSON and WKT.
///
/// The `Display` output of each variant is the exact message shown to the
/// user in the error banner.
#[derive(Error, Debug)]
pub enum Error {
    /// The input text is not syntactically valid for its format.
    #[error("Invalid {format}: {message}")]
    InvalidSyntax { format: Format, message: String },

    /// The input parsed, but is not a structure the codec can convert.
    #[error("Invalid {format}: Requires a valid input object.")]
    InvalidDocument { format: Format },

    /// The codec does not know how to render this shape.
    #[error("Unsupported geometry: {0}")]
    Unsupported(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The clipboard refused the copy.
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl Error {
    /// Syntax error for the given format.
    pub fn syntax(format: Format, message: impl Into<String>) -> Self {
        Self::InvalidSyntax {
            format,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_message_names_format() {
        let err = Error::syntax(Format::GeoJson, "EOF while parsing a value at line 1 column 0");
        assert_eq!(
            err.to_string(),
            "Invalid GeoJSON: EOF while parsing a value at line 1 column 0"
        );
    }

    #[test]
    fn test_invalid_document_message_is_generic() {
        let err = Error::InvalidDocument {
            format: Format::GeoJson,
        };
        assert_eq!(
            err.to_string(),
            "Invalid GeoJSON: Requires a valid input object."
        );
    }
}
