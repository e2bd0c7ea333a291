mod atomic;
mod doctor;
mod logging;
mod paths;
mod settings;
mod stores;

pub use atomic::{write_bytes_atomic, write_json_atomic};
pub use doctor::{DoctorIssue, DoctorLevel, DoctorReport, run_doctor};
pub use logging::init_console_logging;
pub use paths::WorkspacePaths;
pub use settings::{ActiveView, ShellSettings, load_or_create_settings, save_settings};
pub use stores::{
    NotificationsFile, SavedQueriesFile, load_or_create_notifications,
    load_or_create_saved_queries, save_notifications, save_saved_queries,
};

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("toml encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
    #[error("logging init error: {0}")]
    Logging(String),
    #[error("invalid workspace state: {0}")]
    Invalid(String),
}

pub type WorkspaceResult<T> = Result<T, WorkspaceError>;
