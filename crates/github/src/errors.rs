//! Error type for the GitHub Actions adapter.
//!
//! Every variant that involves a file carries its path, so the message printed
//! by the CLI names the input that was missing or malformed.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading workflow inputs or resolving configuration.
#[derive(Debug, Error)]
pub enum GithubError {
    /// A required setting (environment variable or flag) was unset or empty.
    #[error("Required setting {name} is not set")]
    MissingSetting {
        /// Name of the environment variable backing the setting.
        name: &'static str,
    },

    /// A file could not be read.
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file was read but is not valid JSON of the expected shape.
    #[error("Failed to decode JSON in {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The payload decoded but a required field is null or empty.
    #[error("Event payload field {field} is missing or empty")]
    MissingField {
        /// Dotted path of the field within the payload (e.g. `"sender.login"`).
        field: &'static str,
    },

    /// The order record was read but rejected by the domain.
    #[error("Invalid order record in {}", path.display())]
    Order {
        path: PathBuf,
        #[source]
        source: forms::FormsError,
    },
}
