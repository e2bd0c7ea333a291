use std::path::Path;

use glasssuite_core::ARTIFACT_VERSION;
use glasssuite_query::SAVED_QUERY_CAP;

use super::settings::ShellSettings;
use super::stores::{NotificationsFile, SavedQueriesFile};
use super::{WorkspacePaths, WorkspaceResult};

#[derive(Debug, Clone)]
pub enum DoctorLevel {
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct DoctorIssue {
    pub level: DoctorLevel,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DoctorReport {
    pub issues: Vec<DoctorIssue>,
}

impl DoctorReport {
    fn push(&mut self, level: DoctorLevel, message: impl Into<String>, hint: Option<String>) {
        self.issues.push(DoctorIssue {
            level,
            message: message.into(),
            hint,
        });
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| matches!(issue.level, DoctorLevel::Error))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| matches!(issue.level, DoctorLevel::Warning))
            .count()
    }
}

/// Inspect the workspace without repairing anything. The load paths
/// self-heal unreadable files; doctor exists to say so before they do.
pub fn run_doctor(paths: &WorkspacePaths) -> WorkspaceResult<DoctorReport> {
    let mut report = DoctorReport { issues: Vec::new() };

    check_dir(&mut report, &paths.root, "workspace root");
    check_dir(&mut report, &paths.config_dir, "config");
    check_dir(&mut report, &paths.exports_dir, "exports");
    check_dir(&mut report, &paths.logs_dir, "logs");

    check_settings(&mut report, &paths.settings_path())?;
    check_saved_queries(&mut report, &paths.saved_queries_path())?;
    check_notifications(&mut report, &paths.notifications_path())?;

    Ok(report)
}

fn check_dir(report: &mut DoctorReport, path: &Path, label: &str) {
    if !path.exists() {
        report.push(
            DoctorLevel::Error,
            format!("{label} directory missing"),
            Some("run any command to recreate it".to_string()),
        );
    }
}

fn check_settings(report: &mut DoctorReport, path: &Path) -> WorkspaceResult<()> {
    if !path.exists() {
        return Ok(());
    }
    let content = std::fs::read_to_string(path)?;
    if let Err(err) = toml::from_str::<ShellSettings>(&content) {
        report.push(
            DoctorLevel::Warning,
            format!("settings.toml unreadable: {err}"),
            Some("defaults will be used and the file rewritten on next launch".to_string()),
        );
    }
    Ok(())
}

fn check_saved_queries(report: &mut DoctorReport, path: &Path) -> WorkspaceResult<()> {
    if !path.exists() {
        return Ok(());
    }
    let content = std::fs::read_to_string(path)?;
    match serde_json::from_str::<SavedQueriesFile>(&content) {
        Ok(file) => {
            check_version(report, path, &file.artifact_version);
            if file.queries.len() > SAVED_QUERY_CAP {
                report.push(
                    DoctorLevel::Warning,
                    format!(
                        "saved query log holds {} entries, cap is {SAVED_QUERY_CAP}",
                        file.queries.len()
                    ),
                    Some("oldest entries drop off on next save".to_string()),
                );
            }
        }
        Err(err) => report.push(
            DoctorLevel::Warning,
            format!("saved_queries.json unreadable: {err}"),
            Some("the store resets to empty on next launch".to_string()),
        ),
    }
    Ok(())
}

fn check_notifications(report: &mut DoctorReport, path: &Path) -> WorkspaceResult<()> {
    if !path.exists() {
        return Ok(());
    }
    let content = std::fs::read_to_string(path)?;
    match serde_json::from_str::<NotificationsFile>(&content) {
        Ok(file) => check_version(report, path, &file.artifact_version),
        Err(err) => report.push(
            DoctorLevel::Warning,
            format!("notifications.json unreadable: {err}"),
            Some("the inbox resets to its seed items on next launch".to_string()),
        ),
    }
    Ok(())
}

fn check_version(report: &mut DoctorReport, path: &Path, found: &str) {
    if found != ARTIFACT_VERSION {
        report.push(
            DoctorLevel::Warning,
            format!(
                "artifact version mismatch in {}: found {found}, expected {ARTIFACT_VERSION}",
                path.display()
            ),
            None,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn workspace() -> (TempDir, WorkspacePaths) {
        let dir = TempDir::new().expect("temp dir");
        let paths = WorkspacePaths::new(dir.path().join("ws"));
        paths.ensure_dirs().expect("ensure dirs");
        (dir, paths)
    }

    #[test]
    fn fresh_workspace_has_no_issues() {
        let (_dir, paths) = workspace();
        let report = run_doctor(&paths).expect("doctor");
        assert!(report.issues.is_empty());
    }

    #[test]
    fn missing_directories_are_errors() {
        let dir = TempDir::new().expect("temp dir");
        let paths = WorkspacePaths::new(dir.path().join("never-created"));
        let report = run_doctor(&paths).expect("doctor");
        assert_eq!(report.error_count(), 4);
        assert_eq!(report.warning_count(), 0);
    }

    #[test]
    fn unreadable_settings_is_a_warning() {
        let (_dir, paths) = workspace();
        std::fs::write(paths.settings_path(), "mode = [broken").expect("write");
        let report = run_doctor(&paths).expect("doctor");
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.warning_count(), 1);
        assert!(report.issues[0].message.contains("settings.toml"));
    }

    #[test]
    fn version_mismatch_is_reported() {
        let (_dir, paths) = workspace();
        std::fs::write(
            paths.saved_queries_path(),
            r#"{"artifact_version": "9.9", "queries": []}"#,
        )
        .expect("write");
        let report = run_doctor(&paths).expect("doctor");
        assert_eq!(report.warning_count(), 1);
        assert!(report.issues[0].message.contains("version mismatch"));
    }

    #[test]
    fn oversized_query_log_is_flagged() {
        let (_dir, paths) = workspace();
        let queries: Vec<String> = (0..SAVED_QUERY_CAP + 1)
            .map(|i| {
                format!(
                    r#"{{"id": "q{i}", "name": "q{i}", "entity": "Customers", "clauses": [], "created_at": 0}}"#
                )
            })
            .collect();
        let body = format!(
            r#"{{"artifact_version": "{ARTIFACT_VERSION}", "queries": [{}]}}"#,
            queries.join(",")
        );
        std::fs::write(paths.saved_queries_path(), body).expect("write");
        let report = run_doctor(&paths).expect("doctor");
        assert_eq!(report.warning_count(), 1);
        assert!(report.issues[0].message.contains("cap"));
    }
}
