//! Error types for the design exporter.
//!
//! This module defines all error types that can occur while reading a design
//! snapshot and turning it into a PDF document.

/// Result type alias for exporter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during design export.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    /// Element record carries a shape tag the exporter cannot draw.
    ///
    /// Fatal: the whole export is aborted and no partial document is returned.
    #[error("Unsupported element type: \"{0}\"")]
    UnsupportedElementType(String),

    /// Color reference is neither a hex literal nor a palette key.
    #[error("Invalid color format: \"{0}\"")]
    InvalidColorFormat(String),

    /// Color reference looks like a hex literal but is not `#rrggbb`.
    #[error("Malformed hex color literal: \"{0}\" (expected #rrggbb)")]
    MalformedHexLiteral(String),

    /// Element record with a known tag but missing or invalid attributes
    #[error("Invalid {kind} element: {reason}")]
    InvalidElement {
        /// Element tag (circle, rect, text)
        kind: String,
        /// What was wrong with the attributes
        reason: String,
    },

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the exporter degrades this error instead of aborting.
    ///
    /// Color problems resolve to black; everything else stops the export.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::InvalidColorFormat(_) | Error::MalformedHexLiteral(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_element_type_error() {
        let err = Error::UnsupportedElementType("triangle".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Unsupported element type"));
        assert!(msg.contains("triangle"));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_color_errors_are_recoverable() {
        assert!(Error::InvalidColorFormat("mauve-ish".to_string()).is_recoverable());
        assert!(Error::MalformedHexLiteral("#fff".to_string()).is_recoverable());
    }

    #[test]
    fn test_invalid_element_error() {
        let err = Error::InvalidElement {
            kind: "rect".to_string(),
            reason: "missing field `width`".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("rect"));
        assert!(msg.contains("width"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(format!("{}", err).contains("IO error"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
