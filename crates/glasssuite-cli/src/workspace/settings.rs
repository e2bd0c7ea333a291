use std::str::FromStr;

use serde::{Deserialize, Serialize};

use glasssuite_grid::EngineKind;

use super::atomic::write_bytes_atomic;
use super::{WorkspaceError, WorkspacePaths, WorkspaceResult};
use crate::i18n::Lang;
use crate::theme::{Mode, ThemeId};

/// Console section the shell is focused on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveView {
    Dashboard,
    Queries,
    Reports,
    Overview,
    Settings,
    Admin,
}

impl ActiveView {
    pub const ALL: [ActiveView; 6] = [
        ActiveView::Dashboard,
        ActiveView::Queries,
        ActiveView::Reports,
        ActiveView::Overview,
        ActiveView::Settings,
        ActiveView::Admin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ActiveView::Dashboard => "dashboard",
            ActiveView::Queries => "queries",
            ActiveView::Reports => "reports",
            ActiveView::Overview => "overview",
            ActiveView::Settings => "settings",
            ActiveView::Admin => "admin",
        }
    }
}

impl Default for ActiveView {
    fn default() -> Self {
        ActiveView::Dashboard
    }
}

impl FromStr for ActiveView {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "dashboard" => Ok(ActiveView::Dashboard),
            "queries" => Ok(ActiveView::Queries),
            "reports" => Ok(ActiveView::Reports),
            "overview" => Ok(ActiveView::Overview),
            "settings" => Ok(ActiveView::Settings),
            "admin" => Ok(ActiveView::Admin),
            _ => Err(()),
        }
    }
}

/// Persisted shell preferences. Every field carries a serde default so a
/// settings file written by an older build still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellSettings {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub lang: Lang,
    #[serde(default, rename = "theme_id")]
    pub theme: ThemeId,
    #[serde(default, rename = "grid_engine")]
    pub engine: EngineKind,
    #[serde(default, rename = "active_view")]
    pub view: ActiveView,
    #[serde(default)]
    pub sidebar_collapsed: bool,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            mode: Mode::Light,
            lang: Lang::En,
            theme: ThemeId::Discord,
            engine: EngineKind::Virtual,
            view: ActiveView::Dashboard,
            sidebar_collapsed: false,
        }
    }
}

/// Load settings, creating the file with defaults when missing. A file
/// that no longer parses degrades to defaults and is rewritten, so one
/// bad edit never locks the console out.
pub fn load_or_create_settings(paths: &WorkspacePaths) -> WorkspaceResult<ShellSettings> {
    let path = paths.settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path)?;
        match toml::from_str::<ShellSettings>(&content) {
            Ok(settings) => return Ok(settings),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "settings unreadable, rewriting defaults");
            }
        }
    }

    let settings = ShellSettings::default();
    save_settings(paths, &settings)?;
    Ok(settings)
}

pub fn save_settings(paths: &WorkspacePaths, settings: &ShellSettings) -> WorkspaceResult<()> {
    let path = paths.settings_path();
    let encoded = toml::to_string_pretty(settings)?;
    write_bytes_atomic(&path, encoded.as_bytes()).map_err(WorkspaceError::from)
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
    fn missing_file_seeds_defaults_and_writes_them() {
        let (_dir, paths) = workspace();
        let settings = load_or_create_settings(&paths).expect("load");
        assert_eq!(settings, ShellSettings::default());
        assert!(paths.settings_path().exists());
    }

    #[test]
    fn settings_round_trip() {
        let (_dir, paths) = workspace();
        let settings = ShellSettings {
            mode: Mode::Dark,
            lang: Lang::De,
            theme: ThemeId::Turbo,
            engine: EngineKind::Paged,
            view: ActiveView::Reports,
            sidebar_collapsed: true,
        };
        save_settings(&paths, &settings).expect("save");
        let loaded = load_or_create_settings(&paths).expect("load");
        assert_eq!(loaded, settings);
    }

    #[test]
    fn garbage_degrades_to_defaults_and_rewrites() {
        let (_dir, paths) = workspace();
        std::fs::write(paths.settings_path(), "mode = [not toml").expect("write");
        let settings = load_or_create_settings(&paths).expect("load");
        assert_eq!(settings, ShellSettings::default());
        let content = std::fs::read_to_string(paths.settings_path()).expect("read");
        let reparsed: ShellSettings = toml::from_str(&content).expect("reparse");
        assert_eq!(reparsed, ShellSettings::default());
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let (_dir, paths) = workspace();
        std::fs::write(paths.settings_path(), "mode = \"dark\"\n").expect("write");
        let settings = load_or_create_settings(&paths).expect("load");
        assert_eq!(settings.mode, Mode::Dark);
        assert_eq!(settings.lang, Lang::En);
        assert_eq!(settings.view, ActiveView::Dashboard);
    }

    #[test]
    fn view_names_parse_back() {
        for view in ActiveView::ALL {
            assert_eq!(view.name().parse::<ActiveView>(), Ok(view));
        }
        assert!("nowhere".parse::<ActiveView>().is_err());
    }
}
