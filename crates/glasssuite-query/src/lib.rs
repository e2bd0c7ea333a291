//! Query descriptor builder for GlassSuite.
//!
//! Turns an entity and an ordered clause list into the display SQL string
//! and the structured filter description, and keeps the capped saved-query
//! log used by the console shell. Rendering produces display artifacts
//! only; nothing here executes SQL.

pub mod builder;
pub mod errors;
pub mod model;
pub mod saved;

pub use builder::{filter_descriptor, render_sql};
pub use errors::{QueryError, Result};
pub use model::{Clause, ClauseOp, FilterDescriptor, SavedQuery, WhereEntry};
pub use saved::{SAVED_QUERY_CAP, SavedQueryLog, uid};
