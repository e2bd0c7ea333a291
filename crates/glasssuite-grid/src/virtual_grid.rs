use glasssuite_core::{CellValue, FieldDef};

use crate::engine::{EngineKind, GridData, SortState, TableEngine, build_view, cycle_sort};

/// Windowed scroller: the whole filtered set stays addressable and the
/// viewport slides over it one row at a time.
#[derive(Debug, Default)]
pub struct VirtualGrid {
    data: GridData,
    view: Vec<usize>,
    filter: String,
    sort: Option<SortState>,
    offset: usize,
}

impl VirtualGrid {
    pub fn new() -> Self {
        Self::default()
    }

    fn rebuild(&mut self) {
        self.view = build_view(&self.data, &self.filter, self.sort);
        self.offset = self.offset.min(self.view.len().saturating_sub(1));
    }

    /// First visible view position, for the footer.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl TableEngine for VirtualGrid {
    fn kind(&self) -> EngineKind {
        EngineKind::Virtual
    }

    fn set_data(&mut self, data: GridData) {
        self.data = data;
        self.filter.clear();
        self.sort = None;
        self.offset = 0;
        self.rebuild();
    }

    fn set_quick_filter(&mut self, needle: &str) {
        self.filter = needle.to_string();
        self.offset = 0;
        self.rebuild();
    }

    fn toggle_sort(&mut self, column: usize) {
        if column >= self.data.columns.len() {
            return;
        }
        self.sort = cycle_sort(self.sort, column);
        self.rebuild();
    }

    fn sort(&self) -> Option<SortState> {
        self.sort
    }

    fn step(&mut self, delta: isize) {
        let max = self.view.len().saturating_sub(1);
        self.offset = self.offset.saturating_add_signed(delta).min(max);
    }

    fn window(&self, height: usize) -> Vec<usize> {
        self.view
            .iter()
            .skip(self.offset)
            .take(height)
            .copied()
            .collect()
    }

    fn view_indices(&self) -> &[usize] {
        &self.view
    }

    fn row(&self, index: usize) -> &[CellValue] {
        &self.data.rows[index]
    }

    fn columns(&self) -> &'static [FieldDef] {
        self.data.columns
    }

    fn total_rows(&self) -> usize {
        self.data.rows.len()
    }

    fn status(&self) -> String {
        if self.view.is_empty() {
            return format!("0 of {} rows", self.data.rows.len());
        }
        format!(
            "row {} of {} ({} total)",
            self.offset + 1,
            self.view.len(),
            self.data.rows.len()
        )
    }

    fn reset(&mut self) {
        self.filter.clear();
        self.sort = None;
        self.offset = 0;
        self.rebuild();
    }
}
