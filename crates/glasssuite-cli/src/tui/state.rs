use std::path::PathBuf;

use glasssuite_core::{CellValue, EntityKind};
use glasssuite_grid::{EngineKind, GridData, GridRuntime, TableEngine, initialize_grid_runtime};
use glasssuite_query::{Clause, ClauseOp, SavedQueryLog};

use crate::CliError;
use crate::i18n::{Text, tr};
use crate::notifications::NotificationCenter;
use crate::theme::Theme;
use crate::tui::utils::append_line;
use crate::workspace::{
    ActiveView, NotificationsFile, SavedQueriesFile, ShellSettings, WorkspacePaths,
    load_or_create_notifications, load_or_create_saved_queries, load_or_create_settings,
    save_notifications, save_saved_queries, save_settings,
};

pub const MAX_MESSAGES: usize = 1000;

#[derive(Debug, Clone)]
pub struct PaletteEntry {
    pub command: &'static str,
    pub description: &'static str,
}

pub enum AppEvent {
    ExportDone(Result<(PathBuf, u64), String>),
}

/// What the active grid is showing, which also decides the view it
/// renders under.
pub enum GridSource {
    QueryRun { entity: EntityKind },
    ReportRuns { key: String },
}

impl GridSource {
    pub fn visible_in(&self, view: ActiveView) -> bool {
        matches!(
            (self, view),
            (GridSource::QueryRun { .. }, ActiveView::Queries)
                | (GridSource::ReportRuns { .. }, ActiveView::Reports)
        )
    }
}

/// A data set plus the engine presenting it. The data is kept alongside
/// the engine so the live engine toggle can rebuild the other backend
/// over the same rows.
pub struct ActiveGrid {
    pub source: GridSource,
    pub data: GridData,
    pub engine: Box<dyn TableEngine>,
}

impl ActiveGrid {
    pub fn new(grids: &GridRuntime, kind: EngineKind, source: GridSource, data: GridData) -> Self {
        let mut engine = grids.create(kind);
        engine.set_data(data.clone());
        Self {
            source,
            data,
            engine,
        }
    }

    /// Rebuild the presentation under the other engine, dropping filter,
    /// sort, and scroll position.
    pub fn swap_engine(&mut self, grids: &GridRuntime, kind: EngineKind) {
        let mut engine = grids.create(kind);
        engine.set_data(self.data.clone());
        self.engine = engine;
    }

    /// Rows in view order, owned, for handing to the CSV writer off the
    /// UI thread.
    pub fn export_cells(&self) -> Vec<Vec<CellValue>> {
        self.engine
            .view_indices()
            .iter()
            .map(|&index| self.engine.row(index).to_vec())
            .collect()
    }
}

/// The clause every fresh builder starts with.
pub fn initial_clause() -> Clause {
    Clause::new("name", ClauseOp::Contains, "")
}

pub struct App {
    pub runtime: tokio::runtime::Handle,
    pub tx: tokio::sync::mpsc::UnboundedSender<AppEvent>,
    pub paths: WorkspacePaths,
    pub settings: ShellSettings,

    // Query builder
    pub query_name: String,
    pub entity: EntityKind,
    pub clauses: Vec<Clause>,
    pub results_count: Option<usize>,
    pub saved: SavedQueryLog,

    // Reports browser
    pub report_search: String,
    pub selected_report: Option<&'static str>,

    pub grid: Option<ActiveGrid>,
    pub grids: &'static GridRuntime,

    pub notifications: NotificationCenter,
    pub show_notifications: bool,
    pub ai_history: Vec<String>,

    pub input: String,
    pub messages: Vec<String>,
    pub should_quit: bool,
    pub scroll_offset: u16,
    pub palette_select: usize,
}

impl App {
    pub fn new(
        runtime: tokio::runtime::Handle,
        workspace_root: PathBuf,
        tx: tokio::sync::mpsc::UnboundedSender<AppEvent>,
    ) -> Result<Self, CliError> {
        let paths = WorkspacePaths::new(workspace_root);
        let settings = load_or_create_settings(&paths)?;
        let saved_file = load_or_create_saved_queries(&paths)?;
        let saved = SavedQueryLog::from_entries(saved_file.queries);
        let notifications_file = load_or_create_notifications(&paths)?;
        let notifications = NotificationCenter::new(notifications_file.items);

        Ok(Self {
            runtime,
            tx,
            paths,
            settings,
            query_name: String::new(),
            entity: EntityKind::Customers,
            clauses: vec![initial_clause()],
            results_count: None,
            saved,
            report_search: String::new(),
            selected_report: None,
            grid: None,
            grids: initialize_grid_runtime(),
            notifications,
            show_notifications: false,
            ai_history: Vec::new(),
            input: String::new(),
            messages: Vec::new(),
            should_quit: false,
            scroll_offset: 0,
            palette_select: 0,
        })
    }

    pub fn tr(&self, key: Text) -> &'static str {
        tr(self.settings.lang, key)
    }

    pub fn theme(&self) -> &'static Theme {
        self.settings.theme.theme()
    }

    pub fn push_message(&mut self, message: impl Into<String>) {
        let line = message.into();
        self.messages.push(line.clone());
        let _ = append_line(&self.paths.transcript_path(), &line);
        if self.messages.len() > MAX_MESSAGES {
            let overflow = self.messages.len() - MAX_MESSAGES;
            self.messages.drain(0..overflow);
        }
    }

    pub fn record_command(&mut self, command: &str) {
        if !self.messages.is_empty() {
            self.push_message("");
        }
        self.push_message(format!("► {}", command));
    }

    pub fn persist_settings(&self) -> Result<(), CliError> {
        save_settings(&self.paths, &self.settings)?;
        Ok(())
    }

    pub fn persist_saved_queries(&self) -> Result<(), CliError> {
        let file = SavedQueriesFile {
            queries: self.saved.entries().to_vec(),
            ..SavedQueriesFile::default()
        };
        save_saved_queries(&self.paths, &file)?;
        Ok(())
    }

    pub fn persist_notifications(&self) -> Result<(), CliError> {
        let file = NotificationsFile {
            items: self.notifications.items.clone(),
            ..NotificationsFile::default()
        };
        save_notifications(&self.paths, &file)?;
        Ok(())
    }

    /// The grid pane is drawn only when its source belongs to the view
    /// the shell is on.
    pub fn visible_grid(&self) -> Option<&ActiveGrid> {
        self.grid
            .as_ref()
            .filter(|grid| grid.source.visible_in(self.settings.view))
    }
}
