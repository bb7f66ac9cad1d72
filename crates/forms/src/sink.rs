//! The record sink port and the two use cases built on it.
//!
//! Both use cases render their content in full before touching the sink, so a
//! failure in parsing or rendering leaves the target untouched. Each performs
//! exactly one [`RecordSink::append`].

use crate::{CollectionIndexEntry, FormsError, GitHubLogin, OrderRecord, SinkError};

/// An append-only destination for rendered records.
///
/// Implementations must never modify or truncate existing content: after a
/// successful append the target holds its prior content followed by `content`.
pub trait RecordSink {
    /// Appends `content` to the end of the target.
    fn append(&mut self, content: &str) -> Result<(), SinkError>;

    /// Human-readable description of the target, for logs and errors.
    fn describe(&self) -> String;
}

/// Extracts a collection-index entry from `issue_body` and appends it to `sink`.
///
/// Missing headers are logged and rendered as empty values; they never fail the
/// invocation.
pub fn index_collection(
    issue_body: &str,
    sink: &mut dyn RecordSink,
) -> Result<CollectionIndexEntry, FormsError> {
    let entry = CollectionIndexEntry::from_issue_body(issue_body);

    let missing = entry.missing_fields();
    if !missing.is_empty() {
        tracing::warn!(
            missing = ?missing,
            "Issue body is missing collection fields; writing them empty"
        );
    }

    sink.append(&entry.render())?;
    tracing::info!(
        target_file = %sink.describe(),
        name = entry.name.as_deref().unwrap_or_default(),
        "Appended collection-index entry"
    );
    Ok(entry)
}

/// Renders the order placed by `login` and appends the line to `sink`.
///
/// Returns the appended line.
pub fn record_order(
    login: &GitHubLogin,
    order: &OrderRecord,
    sink: &mut dyn RecordSink,
) -> Result<String, FormsError> {
    let line = crate::render_order_line(login, order);
    sink.append(&line)?;
    tracing::info!(
        target_file = %sink.describe(),
        user = %login,
        amount = %order.amount(),
        "Appended order line"
    );
    Ok(line)
}
