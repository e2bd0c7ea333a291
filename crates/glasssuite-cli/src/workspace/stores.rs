use std::path::Path;

use serde::{Deserialize, Serialize};

use glasssuite_core::ARTIFACT_VERSION;
use glasssuite_query::SavedQuery;

use super::atomic::write_json_atomic;
use super::{WorkspacePaths, WorkspaceResult};
use crate::notifications::{NotificationItem, default_notifications};

/// On-disk envelope for the saved-query log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedQueriesFile {
    pub artifact_version: String,
    pub queries: Vec<SavedQuery>,
}

impl Default for SavedQueriesFile {
    fn default() -> Self {
        Self {
            artifact_version: ARTIFACT_VERSION.to_string(),
            queries: Vec::new(),
        }
    }
}

/// On-disk envelope for the notification inbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsFile {
    pub artifact_version: String,
    pub items: Vec<NotificationItem>,
}

impl Default for NotificationsFile {
    fn default() -> Self {
        Self {
            artifact_version: ARTIFACT_VERSION.to_string(),
            items: default_notifications(),
        }
    }
}

pub fn load_or_create_saved_queries(paths: &WorkspacePaths) -> WorkspaceResult<SavedQueriesFile> {
    load_or_create(&paths.saved_queries_path(), "saved queries")
}

pub fn save_saved_queries(paths: &WorkspacePaths, file: &SavedQueriesFile) -> WorkspaceResult<()> {
    write_json_atomic(&paths.saved_queries_path(), file)
}

pub fn load_or_create_notifications(paths: &WorkspacePaths) -> WorkspaceResult<NotificationsFile> {
    load_or_create(&paths.notifications_path(), "notifications")
}

pub fn save_notifications(paths: &WorkspacePaths, file: &NotificationsFile) -> WorkspaceResult<()> {
    write_json_atomic(&paths.notifications_path(), file)
}

/// Shared load path: missing files are seeded with defaults, unreadable
/// files degrade to defaults and are rewritten, and a version mismatch is
/// kept but logged for `doctor` to surface.
fn load_or_create<T>(path: &Path, label: &str) -> WorkspaceResult<T>
where
    T: Default + Serialize + for<'de> Deserialize<'de> + VersionedStore,
{
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str::<T>(&content) {
            Ok(file) => {
                if file.artifact_version() != ARTIFACT_VERSION {
                    tracing::warn!(
                        path = %path.display(),
                        found = file.artifact_version(),
                        expected = ARTIFACT_VERSION,
                        "artifact version mismatch in {label} store"
                    );
                }
                return Ok(file);
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "{label} store unreadable, rewriting defaults"
                );
            }
        }
    }

    let file = T::default();
    write_json_atomic(path, &file)?;
    Ok(file)
}

pub(super) trait VersionedStore {
    fn artifact_version(&self) -> &str;
}

impl VersionedStore for SavedQueriesFile {
    fn artifact_version(&self) -> &str {
        &self.artifact_version
    }
}

impl VersionedStore for NotificationsFile {
    fn artifact_version(&self) -> &str {
        &self.artifact_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use glasssuite_core::EntityKind;
    use glasssuite_query::{Clause, ClauseOp, SavedQueryLog};
    use tempfile::TempDir;

    fn workspace() -> (TempDir, WorkspacePaths) {
        let dir = TempDir::new().expect("temp dir");
        let paths = WorkspacePaths::new(dir.path().join("ws"));
        paths.ensure_dirs().expect("ensure dirs");
        (dir, paths)
    }

    #[test]
    fn fresh_workspace_seeds_empty_query_log() {
        let (_dir, paths) = workspace();
        let file = load_or_create_saved_queries(&paths).expect("load");
        assert_eq!(file.artifact_version, ARTIFACT_VERSION);
        assert!(file.queries.is_empty());
        assert!(paths.saved_queries_path().exists());
    }

    #[test]
    fn fresh_workspace_seeds_the_notification_inbox() {
        let (_dir, paths) = workspace();
        let file = load_or_create_notifications(&paths).expect("load");
        assert_eq!(file.items.len(), 4);
        assert_eq!(file.items.iter().filter(|item| item.unread).count(), 2);
    }

    #[test]
    fn saved_queries_round_trip() {
        let (_dir, paths) = workspace();
        let mut log = SavedQueryLog::new();
        log.save(
            "Big spenders",
            EntityKind::Orders,
            vec![Clause::new("total", ClauseOp::GreaterThan, "100")],
        );
        let file = SavedQueriesFile {
            queries: log.entries().to_vec(),
            ..SavedQueriesFile::default()
        };
        save_saved_queries(&paths, &file).expect("save");

        let loaded = load_or_create_saved_queries(&paths).expect("load");
        assert_eq!(loaded.queries.len(), 1);
        assert_eq!(loaded.queries[0].name, "Big spenders");
        assert_eq!(loaded.queries[0].entity, EntityKind::Orders);
        assert_eq!(loaded.queries[0].clauses[0].value, "100");
    }

    #[test]
    fn corrupt_store_resets_to_defaults() {
        let (_dir, paths) = workspace();
        std::fs::write(paths.notifications_path(), "{ not json").expect("write");
        let file = load_or_create_notifications(&paths).expect("load");
        assert_eq!(file.items.len(), 4);
        let content = std::fs::read_to_string(paths.notifications_path()).expect("read");
        assert!(serde_json::from_str::<NotificationsFile>(&content).is_ok());
    }

    #[test]
    fn version_mismatch_is_kept_not_discarded() {
        let (_dir, paths) = workspace();
        let file = NotificationsFile {
            artifact_version: "0.0".to_string(),
            ..NotificationsFile::default()
        };
        save_notifications(&paths, &file).expect("save");
        let loaded = load_or_create_notifications(&paths).expect("load");
        assert_eq!(loaded.artifact_version, "0.0");
        assert_eq!(loaded.items.len(), 4);
    }

    #[test]
    fn notifications_file_keeps_read_state() {
        let (_dir, paths) = workspace();
        let mut file = NotificationsFile::default();
        for item in &mut file.items {
            item.unread = false;
        }
        save_notifications(&paths, &file).expect("save");
        let loaded = load_or_create_notifications(&paths).expect("load");
        assert!(loaded.items.iter().all(|item| !item.unread));
    }
}
