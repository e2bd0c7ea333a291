//! Tabular view engines for GlassSuite.
//!
//! Two interchangeable backends render one shared column/row model: a
//! virtual-window scroller and a paginated grid. Callers talk to the
//! [`TableEngine`] trait and stay agnostic of which variant is active;
//! generator and query code never depend on either implementation.

pub mod engine;
pub mod paged;
pub mod runtime;
pub mod virtual_grid;

pub use engine::{EngineKind, GridData, SortDirection, SortState, TableEngine};
pub use paged::{Density, PageSize, PagedGrid};
pub use runtime::{GridRuntime, initialize_grid_runtime};
pub use virtual_grid::VirtualGrid;
