//! Issue-ops GitHub Actions adapter.
//!
//! Supplies the [`forms`] crate with workflow inputs and implements its
//! [`forms::RecordSink`] port over files in the checkout.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Environment lookups, payload decoding, and file writes
//! live here. This crate must not contain domain rules; the [`forms`] crate
//! never sees a path or an environment variable.

pub mod append;
pub mod config;
pub mod errors;
pub mod payload;

pub use append::AppendFile;
pub use config::{collection_index_path, ActionsConfig, EVENT_PATH_VAR, WORKSPACE_VAR};
pub use errors::GithubError;
pub use payload::{
    load_issue_event, load_order_record, load_sender_event, Issue, IssueEvent, Sender,
    SenderEvent,
};
