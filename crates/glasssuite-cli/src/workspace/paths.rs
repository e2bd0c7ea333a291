use std::path::{Path, PathBuf};

use super::WorkspaceResult;

/// Well-known locations under the workspace root (`.glasssuite/` by
/// default).
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    pub root: PathBuf,
    pub config_dir: PathBuf,
    pub exports_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl WorkspacePaths {
    pub fn new(root: PathBuf) -> Self {
        let config_dir = root.join("config");
        let exports_dir = root.join("exports");
        let logs_dir = root.join("logs");
        Self {
            root,
            config_dir,
            exports_dir,
            logs_dir,
        }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join("settings.toml")
    }

    pub fn saved_queries_path(&self) -> PathBuf {
        self.config_dir.join("saved_queries.json")
    }

    pub fn notifications_path(&self) -> PathBuf {
        self.config_dir.join("notifications.json")
    }

    pub fn console_log_path(&self) -> PathBuf {
        self.logs_dir.join("console.ndjson")
    }

    /// Plain-text copy of the message log, one line per entry.
    pub fn transcript_path(&self) -> PathBuf {
        self.logs_dir.join("console.log")
    }

    pub fn export_path(&self, file_name: &str) -> PathBuf {
        self.exports_dir.join(file_name)
    }

    pub fn ensure_dirs(&self) -> WorkspaceResult<()> {
        create_if_missing(&self.root)?;
        create_if_missing(&self.config_dir)?;
        create_if_missing(&self.exports_dir)?;
        create_if_missing(&self.logs_dir)?;
        Ok(())
    }
}

fn create_if_missing(path: &Path) -> WorkspaceResult<()> {
    if path.exists() {
        return Ok(());
    }
    std::fs::create_dir_all(path)?;
    Ok(())
}
