//! GitHub Actions environment configuration.
//!
//! The runner exposes the event payload path ([`EVENT_PATH_VAR`]) and the
//! checkout directory ([`WORKSPACE_VAR`]) as environment variables. The CLI
//! resolves them once, together with any flags, and passes the resulting
//! [`ActionsConfig`] explicitly to each entry point from there on.

use std::path::{Path, PathBuf};

use crate::GithubError;

/// Environment variable naming the JSON event payload file.
pub const EVENT_PATH_VAR: &str = "GITHUB_EVENT_PATH";

/// Environment variable naming the workspace (checkout) directory.
pub const WORKSPACE_VAR: &str = "GITHUB_WORKSPACE";

/// Location of the collection index, relative to the workspace.
const COLLECTION_INDEX_RELATIVE: [&str; 2] = ["_data", "collection-index.yml"];

/// Paths supplied by the workflow runner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionsConfig {
    pub event_path: Option<PathBuf>,
    pub workspace: Option<PathBuf>,
}

impl ActionsConfig {
    /// Creates a config from optional values. Empty paths count as unset.
    pub fn new(event_path: Option<PathBuf>, workspace: Option<PathBuf>) -> Self {
        Self {
            event_path: event_path.filter(|p| !p.as_os_str().is_empty()),
            workspace: workspace.filter(|p| !p.as_os_str().is_empty()),
        }
    }

    /// The event payload path.
    ///
    /// # Errors
    ///
    /// [`GithubError::MissingSetting`] when unset.
    pub fn require_event_path(&self) -> Result<&Path, GithubError> {
        self.event_path
            .as_deref()
            .ok_or(GithubError::MissingSetting {
                name: EVENT_PATH_VAR,
            })
    }

    /// The workspace directory.
    ///
    /// # Errors
    ///
    /// [`GithubError::MissingSetting`] when unset.
    pub fn require_workspace(&self) -> Result<&Path, GithubError> {
        self.workspace
            .as_deref()
            .ok_or(GithubError::MissingSetting {
                name: WORKSPACE_VAR,
            })
    }
}

/// `<workspace>/_data/collection-index.yml`.
pub fn collection_index_path(workspace: &Path) -> PathBuf {
    COLLECTION_INDEX_RELATIVE
        .iter()
        .fold(workspace.to_path_buf(), |acc, part| acc.join(part))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_count_as_unset() {
        let config = ActionsConfig::new(Some(PathBuf::new()), Some(PathBuf::from("/ws")));
        assert!(matches!(
            config.require_event_path(),
            Err(GithubError::MissingSetting { name: EVENT_PATH_VAR })
        ));
        assert_eq!(config.require_workspace().ok(), Some(Path::new("/ws")));
    }

    #[test]
    fn missing_workspace_names_the_variable() {
        let err = ActionsConfig::default()
            .require_workspace()
            .expect_err("unset workspace");
        assert_eq!(err.to_string(), "Required setting GITHUB_WORKSPACE is not set");
    }

    #[test]
    fn collection_index_lives_under_data_dir() {
        assert_eq!(
            collection_index_path(Path::new("/ws")),
            Path::new("/ws/_data/collection-index.yml")
        );
    }
}
