//! Subcommand implementations. Each takes its configuration explicitly.

use std::path::Path;

use anyhow::Context;
use github::{collection_index_path, ActionsConfig, AppendFile};

/// Appends the collection-index record for the issue in the event payload.
pub fn collection_index(config: &ActionsConfig) -> anyhow::Result<()> {
    let event_path = config.require_event_path()?;
    let workspace = config.require_workspace()?;

    let event = github::load_issue_event(event_path)?;
    let body = event.body()?;

    let mut sink = AppendFile::new(collection_index_path(workspace));
    forms::index_collection(body, &mut sink)
        .with_context(|| format!("Could not record collection in {}", workspace.display()))?;
    Ok(())
}

/// Appends the sender's order line to `readme`.
pub fn pizza_order(config: &ActionsConfig, order_path: &Path, readme: &Path) -> anyhow::Result<()> {
    let event_path = config.require_event_path()?;

    let login = github::load_sender_event(event_path)?.login()?;
    let order = github::load_order_record(order_path)?;

    let mut sink = AppendFile::new(readme);
    forms::record_order(&login, &order, &mut sink)
        .with_context(|| format!("Could not record order for {login}"))?;
    Ok(())
}
