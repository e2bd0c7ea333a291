use std::str::FromStr;

use serde::{Deserialize, Serialize};

use glasssuite_core::{CellValue, FieldDef};

/// Which tabular backend renders the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Windowed scroller over the full row set.
    Virtual,
    /// Page-at-a-time grid with size and density controls.
    Paged,
}

impl EngineKind {
    pub const ALL: &'static [EngineKind] = &[EngineKind::Virtual, EngineKind::Paged];

    pub fn label(&self) -> &'static str {
        match self {
            EngineKind::Virtual => "virtual",
            EngineKind::Paged => "paged",
        }
    }

    /// The other engine, for the live toggle.
    pub fn toggle(self) -> Self {
        match self {
            EngineKind::Virtual => EngineKind::Paged,
            EngineKind::Paged => EngineKind::Virtual,
        }
    }
}

impl Default for EngineKind {
    fn default() -> Self {
        EngineKind::Virtual
    }
}

impl FromStr for EngineKind {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "virtual" => Ok(EngineKind::Virtual),
            "paged" => Ok(EngineKind::Paged),
            _ => Err(()),
        }
    }
}

/// The shared column/row model both engines consume.
#[derive(Debug, Clone, Default)]
pub struct GridData {
    pub columns: &'static [FieldDef],
    pub rows: Vec<Vec<CellValue>>,
}

impl GridData {
    pub fn new(columns: &'static [FieldDef], rows: Vec<Vec<CellValue>>) -> Self {
        Self { columns, rows }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active sort: one column, one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: usize,
    pub direction: SortDirection,
}

/// A filterable, sortable, windowed view over rows + column descriptors.
///
/// Implementations own presentation state only; the backing data is
/// replaced wholesale through [`TableEngine::set_data`] and never mutated.
pub trait TableEngine {
    fn kind(&self) -> EngineKind;

    /// Replace the backing data and reset presentation state.
    fn set_data(&mut self, data: GridData);

    /// Case-insensitive substring filter across every column. An empty or
    /// whitespace-only needle clears the filter.
    fn set_quick_filter(&mut self, needle: &str);

    /// Cycle sort on a column: ascending, then descending, then off.
    /// Out-of-range columns are ignored.
    fn toggle_sort(&mut self, column: usize);

    fn sort(&self) -> Option<SortState>;

    /// Move the visible window: rows for the scroller, pages for the grid.
    fn step(&mut self, delta: isize);

    /// View indices visible in a viewport of `height` rows, in display
    /// order. Indices address the backing rows via [`TableEngine::row`].
    fn window(&self, height: usize) -> Vec<usize>;

    /// Filtered and sorted order over the whole row set (what a CSV
    /// export walks).
    fn view_indices(&self) -> &[usize];

    fn row(&self, index: usize) -> &[CellValue];

    fn columns(&self) -> &'static [FieldDef];

    /// Unfiltered row count.
    fn total_rows(&self) -> usize;

    /// One-line presentation status for the footer.
    fn status(&self) -> String;

    /// Clear filter, sort, and window position.
    fn reset(&mut self);

    /// Cycle the page size (paged engine; no-op for the scroller).
    fn cycle_page_size(&mut self) {}

    /// Toggle row density (paged engine; no-op for the scroller).
    fn toggle_density(&mut self) {}
}

/// Filtered + sorted index order shared by both engines.
pub(crate) fn build_view(data: &GridData, filter: &str, sort: Option<SortState>) -> Vec<usize> {
    let needle = filter.trim().to_lowercase();
    let mut view: Vec<usize> = (0..data.rows.len())
        .filter(|&index| {
            needle.is_empty()
                || data.rows[index]
                    .iter()
                    .any(|cell| cell.matches_filter(&needle))
        })
        .collect();

    if let Some(SortState { column, direction }) = sort {
        view.sort_by(|&a, &b| {
            let ordering = data.rows[a][column].compare(&data.rows[b][column]);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
    view
}

/// Shared sort cycling: ascending, descending, off.
pub(crate) fn cycle_sort(current: Option<SortState>, column: usize) -> Option<SortState> {
    match current {
        Some(state) if state.column == column => match state.direction {
            SortDirection::Ascending => Some(SortState {
                column,
                direction: SortDirection::Descending,
            }),
            SortDirection::Descending => None,
        },
        _ => Some(SortState {
            column,
            direction: SortDirection::Ascending,
        }),
    }
}
