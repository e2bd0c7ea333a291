use std::sync::OnceLock;

use crate::engine::{EngineKind, TableEngine};
use crate::paged::PagedGrid;
use crate::virtual_grid::VirtualGrid;

/// Process-wide registry of the available table engines.
///
/// Callers obtain it through [`initialize_grid_runtime`]; constructing
/// engines before initialization is a logic error the factory guards
/// against by initializing on first use.
#[derive(Debug)]
pub struct GridRuntime {
    engines: &'static [EngineKind],
}

impl GridRuntime {
    pub fn engines(&self) -> &'static [EngineKind] {
        self.engines
    }

    /// Builds a fresh engine of the requested kind with no data loaded.
    pub fn create(&self, kind: EngineKind) -> Box<dyn TableEngine> {
        match kind {
            EngineKind::Virtual => Box::new(VirtualGrid::new()),
            EngineKind::Paged => Box::new(PagedGrid::new()),
        }
    }
}

/// Registers the table engines exactly once and returns the shared
/// runtime. Safe to call from multiple places; only the first call
/// performs registration.
pub fn initialize_grid_runtime() -> &'static GridRuntime {
    static RUNTIME: OnceLock<GridRuntime> = OnceLock::new();
    RUNTIME.get_or_init(|| {
        tracing::info!(engines = EngineKind::ALL.len(), "grid runtime initialized");
        GridRuntime {
            engines: EngineKind::ALL,
        }
    })
}
