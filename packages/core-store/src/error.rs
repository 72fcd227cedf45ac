//! Error types for the store layer.
//!
//! Writes into the tree never fail. Errors come from the edges: parsing
//! user-typed paths, coercing raw input for a field, and codecs that are
//! asked for a format they don't speak or whose output can't be written.

use crate::format::Format;
use crate::path::{FieldPath, PathError};

/// Errors at the store layer.
#[derive(Debug)]
pub enum Error {
    /// Path parsing error.
    Path(PathError),

    /// Raw input could not be turned into a value for a field.
    Input { path: FieldPath, message: String },

    /// Codec failed to encode value.
    Encode { format: Format, message: String },

    /// Format not supported by codec.
    UnsupportedFormat(Format),
}

impl Error {
    pub fn input(path: &FieldPath, message: impl Into<String>) -> Self {
        Error::Input {
            path: path.clone(),
            message: message.into(),
        }
    }

    pub fn encode(format: Format, message: impl Into<String>) -> Self {
        Error::Encode {
            format,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Path(e) => write!(f, "path error: {}", e),
            Error::Input { path, message } => write!(f, "invalid input for '{}': {}", path, message),
            Error::Encode { format, message } => {
                write!(f, "encode error ({}): {}", format, message)
            }
            Error::UnsupportedFormat(format) => {
                write!(f, "unsupported format: {}", format)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Path(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PathError> for Error {
    fn from(e: PathError) -> Self {
        Error::Path(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use std::error::Error as StdError;

    #[test]
    fn path_error_display() {
        let e = Error::Path(PathError::EmptySegment { position: 1 });
        assert!(format!("{}", e).contains("path error"));
    }

    #[test]
    fn input_error_display() {
        let e = Error::input(&path!("robots.index"), "expected a checkbox state");
        let display = format!("{}", e);
        assert!(display.contains("robots.index"));
        assert!(display.contains("checkbox"));
    }

    #[test]
    fn encode_error_display() {
        let e = Error::encode(Format::JSON, "serialization failed");
        let display = format!("{}", e);
        assert!(display.contains("encode error"));
        assert!(display.contains("application/json"));
        assert!(display.contains("serialization failed"));
    }

    #[test]
    fn unsupported_format_display() {
        let e = Error::UnsupportedFormat(Format::new("text/yaml"));
        assert!(format!("{}", e).contains("text/yaml"));
    }

    #[test]
    fn path_error_source() {
        let e = Error::Path(PathError::Empty);
        assert!(StdError::source(&e).is_some());
    }

    #[test]
    fn encode_error_source_is_none() {
        let e = Error::encode(Format::JSON, "writer closed");
        assert!(StdError::source(&e).is_none());
    }

    #[test]
    fn path_error_conversion() {
        let e: Error = PathError::Empty.into();
        assert!(matches!(e, Error::Path(_)));
    }
}
