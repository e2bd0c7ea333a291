//! Deterministic synthetic row generation for GlassSuite.
//!
//! Rows are derived data: a pure function of (kind, count, seed, reference
//! instant). The seed string feeds an FNV-1a style 32-bit hash into a
//! mulberry32 mixer; every randomized sub-value draws from that one stream
//! in a fixed per-kind order, so identical inputs reproduce identical
//! sequences bit for bit across runs and platforms.

pub mod engine;
pub mod errors;
pub mod output;
pub mod pools;
pub mod rows;
pub mod seed;

pub use engine::{generate_rows, generate_rows_now};
pub use errors::{GenerationError, Result};
pub use output::csv::{write_cells_csv, write_rows_csv};
pub use output::json::write_rows_json;
pub use rows::{
    CustomerRow, InvoiceRow, OrderRow, OrderStatus, ReportRunRow, Row, RowKind, RunStatus,
    UserRole, UserRow,
};
pub use seed::{Mulberry32, hash_string};
