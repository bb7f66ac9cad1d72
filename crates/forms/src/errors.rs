//! Error types for the issue-ops domain.
//!
//! [`FormsError`] covers conditions that abort an invocation. A header missing
//! from an issue body is deliberately **not** an error: the affected field is
//! left empty and the appended record is reviewed downstream.
//!
//! [`SinkError`] is the error surface of the [`crate::RecordSink`] port.
//! Infrastructure implementations map their own failures into it.

use thiserror::Error;

/// Failure reported by a [`crate::RecordSink`] implementation.
///
/// The underlying I/O failure, when there is one, is exposed as the error
/// source rather than repeated in the message.
#[derive(Debug, Error)]
#[error("Append to {target} failed")]
pub struct SinkError {
    /// Human-readable description of the sink (usually a file path).
    pub target: String,
    /// The underlying I/O failure, when one is available.
    #[source]
    pub source: Option<std::io::Error>,
}

impl SinkError {
    /// Creates a [`SinkError`] wrapping an I/O failure.
    pub fn with_source(target: impl Into<String>, source: std::io::Error) -> Self {
        Self {
            target: target.into(),
            source: Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

/// Errors that abort a single issue-ops invocation.
#[derive(Debug, Error)]
pub enum FormsError {
    /// The order record is not an object of at least four values, or its count
    /// is not a string.
    #[error("Malformed order record: {reason}")]
    MalformedOrder {
        /// Description of what was wrong with the record.
        reason: String,
    },

    /// The rendered content could not be appended to its target.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn sink_error_keeps_io_message_in_source_only() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = FormsError::from(SinkError::with_source("_data/index.yml", io));

        assert_eq!(err.to_string(), "Append to _data/index.yml failed");
        let source = err.source().expect("io source");
        assert_eq!(source.to_string(), "no such directory");
        assert!(source.source().is_none());
    }
}
