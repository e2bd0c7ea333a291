//! Core contracts and helpers for GlassSuite.
//!
//! This crate defines the canonical entity metadata, the built-in report
//! catalog, and the cell value union shared across the row generator, the
//! query builder, the grid engines, and the CLI.

pub mod entity;
pub mod error;
pub mod report;
pub mod value;

pub use entity::{EntityKind, FieldDef, FieldType, entity_fields, lookup_field};
pub use error::{Error, Result};
pub use report::{ALL_REPORTS_KEY, Report, ReportCategory, builtin_reports, find_report, report_run_fields};
pub use value::CellValue;

/// Current contract version for persisted artifacts (`saved_queries.json` and friends).
pub const ARTIFACT_VERSION: &str = "0.1";
