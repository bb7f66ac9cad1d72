//! Event payload and order record loading.
//!
//! Only the fields each entry point needs are modelled; everything else in the
//! webhook payload is ignored.

use std::path::Path;

use forms::{GitHubLogin, OrderRecord};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::GithubError;

/// The slice of an `issues` event read by the collection indexer.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueEvent {
    pub issue: Issue,
}

/// The issue of an [`IssueEvent`].
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    /// `null` when the issue was opened without a description.
    #[serde(default)]
    pub body: Option<String>,
}

impl IssueEvent {
    /// The issue body.
    ///
    /// # Errors
    ///
    /// [`GithubError::MissingField`] when the body is `null` or absent.
    pub fn body(&self) -> Result<&str, GithubError> {
        self.issue
            .body
            .as_deref()
            .ok_or(GithubError::MissingField {
                field: "issue.body",
            })
    }
}

/// The slice of any event read by the order recorder.
#[derive(Debug, Clone, Deserialize)]
pub struct SenderEvent {
    pub sender: Sender,
}

/// The account that triggered the event.
#[derive(Debug, Clone, Deserialize)]
pub struct Sender {
    pub login: String,
}

impl SenderEvent {
    /// The sender's login.
    ///
    /// # Errors
    ///
    /// [`GithubError::MissingField`] when the login is empty.
    pub fn login(&self) -> Result<GitHubLogin, GithubError> {
        GitHubLogin::new(self.sender.login.clone()).ok_or(GithubError::MissingField {
            field: "sender.login",
        })
    }
}

/// Reads an `issues` event payload.
pub fn load_issue_event(path: &Path) -> Result<IssueEvent, GithubError> {
    load_json(path)
}

/// Reads any event payload that carries a `sender`.
pub fn load_sender_event(path: &Path) -> Result<SenderEvent, GithubError> {
    load_json(path)
}

/// Reads an order record from a JSON file.
pub fn load_order_record(path: &Path) -> Result<OrderRecord, GithubError> {
    let value: serde_json::Value = load_json(path)?;
    OrderRecord::from_json(&value).map_err(|source| GithubError::Order {
        path: path.to_path_buf(),
        source,
    })
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, GithubError> {
    let raw = std::fs::read_to_string(path).map_err(|source| GithubError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "Read JSON input");
    serde_json::from_str(&raw).map_err(|source| GithubError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
