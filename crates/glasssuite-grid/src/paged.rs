use glasssuite_core::{CellValue, FieldDef};

use crate::engine::{EngineKind, GridData, SortState, TableEngine, build_view, cycle_sort};

/// Rows shown per page. Cycles through the fixed ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Rows25,
    Rows50,
    Rows100,
}

impl PageSize {
    pub fn as_usize(&self) -> usize {
        match self {
            PageSize::Rows25 => 25,
            PageSize::Rows50 => 50,
            PageSize::Rows100 => 100,
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            PageSize::Rows25 => PageSize::Rows50,
            PageSize::Rows50 => PageSize::Rows100,
            PageSize::Rows100 => PageSize::Rows25,
        }
    }
}

/// Row padding mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Density {
    #[default]
    Comfortable,
    Compact,
}

impl Density {
    pub fn toggle(self) -> Self {
        match self {
            Density::Comfortable => Density::Compact,
            Density::Compact => Density::Comfortable,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Density::Comfortable => "comfortable",
            Density::Compact => "compact",
        }
    }
}

/// Page-at-a-time grid with size and density controls.
#[derive(Debug, Default)]
pub struct PagedGrid {
    data: GridData,
    view: Vec<usize>,
    filter: String,
    sort: Option<SortState>,
    page: usize,
    page_size: PageSize,
    density: Density,
}

impl PagedGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.view.len().div_ceil(self.page_size.as_usize()).max(1)
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn density(&self) -> Density {
        self.density
    }

    fn rebuild(&mut self) {
        self.view = build_view(&self.data, &self.filter, self.sort);
        self.page = self.page.min(self.page_count() - 1);
    }
}

impl TableEngine for PagedGrid {
    fn kind(&self) -> EngineKind {
        EngineKind::Paged
    }

    fn set_data(&mut self, data: GridData) {
        self.data = data;
        self.filter.clear();
        self.sort = None;
        self.page = 0;
        self.rebuild();
    }

    fn set_quick_filter(&mut self, needle: &str) {
        self.filter = needle.to_string();
        self.page = 0;
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
        let last = self.page_count() - 1;
        self.page = self.page.saturating_add_signed(delta).min(last);
    }

    fn window(&self, height: usize) -> Vec<usize> {
        let per_page = self.page_size.as_usize().min(height.max(1));
        self.view
            .iter()
            .skip(self.page * self.page_size.as_usize())
            .take(per_page)
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
            return "no rows".to_string();
        }
        format!(
            "page {}/{} ({} per page, {})",
            self.page + 1,
            self.page_count(),
            self.page_size.as_usize(),
            self.density.label()
        )
    }

    fn reset(&mut self) {
        self.filter.clear();
        self.sort = None;
        self.page = 0;
        self.page_size = PageSize::default();
        self.density = Density::default();
        self.rebuild();
    }

    fn cycle_page_size(&mut self) {
        self.page_size = self.page_size.cycle();
        self.page = self.page.min(self.page_count() - 1);
    }

    fn toggle_density(&mut self) {
        self.density = self.density.toggle();
    }
}
