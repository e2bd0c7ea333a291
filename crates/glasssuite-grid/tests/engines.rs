use chrono::NaiveDate;

use glasssuite_core::{CellValue, EntityKind, entity_fields};
use glasssuite_grid::{
    Density, EngineKind, GridData, PageSize, PagedGrid, SortDirection, SortState, TableEngine,
    VirtualGrid, initialize_grid_runtime,
};

fn order_row(id: i64, customer: i64, status: &str, total: f64, day: u32) -> Vec<CellValue> {
    vec![
        CellValue::Int(id),
        CellValue::Int(customer),
        CellValue::Text(status.to_string()),
        CellValue::Float(total),
        CellValue::Date(NaiveDate::from_ymd_opt(2024, 3, day).expect("valid date")),
    ]
}

fn sample_data() -> GridData {
    GridData::new(
        entity_fields(EntityKind::Orders),
        vec![
            order_row(1, 412, "open", 120.50, 3),
            order_row(2, 17, "shipped", 9800.00, 1),
            order_row(3, 233, "open", 45.25, 9),
            order_row(4, 890, "cancelled", 310.10, 5),
        ],
    )
}

fn bulk_data(count: usize) -> GridData {
    let statuses = ["open", "processing", "shipped"];
    let rows = (0..count)
        .map(|i| {
            order_row(
                i as i64 + 1,
                (i as i64 % 900) + 1,
                statuses[i % statuses.len()],
                10.0 * i as f64,
                (i as u32 % 28) + 1,
            )
        })
        .collect();
    GridData::new(entity_fields(EntityKind::Orders), rows)
}

#[test]
fn quick_filter_narrows_across_columns() {
    let mut grid = VirtualGrid::new();
    grid.set_data(sample_data());
    assert_eq!(grid.view_indices(), &[0, 1, 2, 3]);

    grid.set_quick_filter("open");
    assert_eq!(grid.view_indices(), &[0, 2]);

    // Integer columns participate too.
    grid.set_quick_filter("412");
    assert_eq!(grid.view_indices(), &[0]);

    // Whitespace-only clears the filter.
    grid.set_quick_filter("   ");
    assert_eq!(grid.view_indices(), &[0, 1, 2, 3]);
}

#[test]
fn quick_filter_ignores_case() {
    let mut grid = VirtualGrid::new();
    grid.set_data(sample_data());
    grid.set_quick_filter("SHIPPED");
    assert_eq!(grid.view_indices(), &[1]);
}

#[test]
fn sort_cycles_ascending_descending_off() {
    let mut grid = VirtualGrid::new();
    grid.set_data(sample_data());
    let total_column = 3;

    grid.toggle_sort(total_column);
    assert_eq!(
        grid.sort(),
        Some(SortState {
            column: total_column,
            direction: SortDirection::Ascending,
        })
    );
    assert_eq!(grid.view_indices(), &[2, 0, 3, 1]);

    grid.toggle_sort(total_column);
    assert_eq!(grid.view_indices(), &[1, 3, 0, 2]);

    grid.toggle_sort(total_column);
    assert_eq!(grid.sort(), None);
    assert_eq!(grid.view_indices(), &[0, 1, 2, 3]);
}

#[test]
fn sort_on_new_column_starts_ascending() {
    let mut grid = VirtualGrid::new();
    grid.set_data(sample_data());
    grid.toggle_sort(3);
    grid.toggle_sort(1);
    assert_eq!(
        grid.sort(),
        Some(SortState {
            column: 1,
            direction: SortDirection::Ascending,
        })
    );
    // customer_id ascending: 17, 233, 412, 890.
    assert_eq!(grid.view_indices(), &[1, 2, 0, 3]);
}

#[test]
fn out_of_range_sort_column_is_ignored() {
    let mut grid = VirtualGrid::new();
    grid.set_data(sample_data());
    grid.toggle_sort(99);
    assert_eq!(grid.sort(), None);
}

#[test]
fn filter_and_sort_compose() {
    let mut grid = VirtualGrid::new();
    grid.set_data(sample_data());
    grid.set_quick_filter("open");
    grid.toggle_sort(3);
    assert_eq!(grid.view_indices(), &[2, 0]);
}

#[test]
fn virtual_window_steps_one_row_at_a_time() {
    let mut grid = VirtualGrid::new();
    grid.set_data(sample_data());

    assert_eq!(grid.window(2), vec![0, 1]);
    grid.step(1);
    assert_eq!(grid.window(2), vec![1, 2]);
    grid.step(10);
    assert_eq!(grid.window(2), vec![3]);
    grid.step(-10);
    assert_eq!(grid.window(2), vec![0, 1]);
}

#[test]
fn virtual_status_reports_position() {
    let mut grid = VirtualGrid::new();
    grid.set_data(sample_data());
    assert_eq!(grid.status(), "row 1 of 4 (4 total)");

    grid.set_quick_filter("open");
    grid.step(1);
    assert_eq!(grid.status(), "row 2 of 2 (4 total)");

    grid.set_quick_filter("no such row");
    assert_eq!(grid.status(), "0 of 4 rows");
}

#[test]
fn paged_engine_steps_by_pages() {
    let mut grid = PagedGrid::new();
    grid.set_data(bulk_data(60));

    assert_eq!(grid.page_count(), 3);
    let first: Vec<usize> = (0..25).collect();
    assert_eq!(grid.window(30), first);

    grid.step(1);
    let second: Vec<usize> = (25..50).collect();
    assert_eq!(grid.window(30), second);

    grid.step(5);
    let last: Vec<usize> = (50..60).collect();
    assert_eq!(grid.window(30), last);
    assert_eq!(grid.status(), "page 3/3 (25 per page, comfortable)");
}

#[test]
fn paged_window_respects_viewport_height() {
    let mut grid = PagedGrid::new();
    grid.set_data(bulk_data(60));
    assert_eq!(grid.window(10).len(), 10);
    assert_eq!(grid.window(200).len(), 25);
}

#[test]
fn page_size_cycles_and_clamps_current_page() {
    let mut grid = PagedGrid::new();
    grid.set_data(bulk_data(60));
    grid.step(2);
    assert_eq!(grid.page(), 2);

    grid.cycle_page_size();
    assert_eq!(grid.page_size(), PageSize::Rows50);
    assert_eq!(grid.page_count(), 2);
    assert_eq!(grid.page(), 1);

    grid.cycle_page_size();
    assert_eq!(grid.page_size(), PageSize::Rows100);
    assert_eq!(grid.page(), 0);

    grid.cycle_page_size();
    assert_eq!(grid.page_size(), PageSize::Rows25);
}

#[test]
fn density_toggle_shows_in_status() {
    let mut grid = PagedGrid::new();
    grid.set_data(bulk_data(30));
    grid.toggle_density();
    assert_eq!(grid.density(), Density::Compact);
    assert!(grid.status().ends_with("compact)"));
    grid.toggle_density();
    assert_eq!(grid.density(), Density::Comfortable);
}

#[test]
fn paged_reset_restores_defaults() {
    let mut grid = PagedGrid::new();
    grid.set_data(bulk_data(60));
    grid.set_quick_filter("processing");
    grid.toggle_sort(3);
    grid.cycle_page_size();
    grid.toggle_density();
    grid.step(1);

    grid.reset();
    assert_eq!(grid.view_indices().len(), 60);
    assert_eq!(grid.sort(), None);
    assert_eq!(grid.page(), 0);
    assert_eq!(grid.page_size(), PageSize::Rows25);
    assert_eq!(grid.density(), Density::Comfortable);
}

#[test]
fn virtual_engine_ignores_paged_controls() {
    let mut grid = VirtualGrid::new();
    grid.set_data(sample_data());
    grid.cycle_page_size();
    grid.toggle_density();
    assert_eq!(grid.window(2), vec![0, 1]);
}

#[test]
fn set_data_resets_presentation_state() {
    let mut grid = PagedGrid::new();
    grid.set_data(bulk_data(60));
    grid.set_quick_filter("open");
    grid.toggle_sort(0);
    grid.step(1);

    grid.set_data(sample_data());
    assert_eq!(grid.view_indices(), &[0, 1, 2, 3]);
    assert_eq!(grid.sort(), None);
    assert_eq!(grid.page(), 0);
}

#[test]
fn runtime_initialization_is_idempotent() {
    let first = initialize_grid_runtime();
    let second = initialize_grid_runtime();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.engines(), &[EngineKind::Virtual, EngineKind::Paged]);
}

#[test]
fn runtime_builds_both_engine_kinds() {
    let runtime = initialize_grid_runtime();
    for &kind in runtime.engines() {
        let engine = runtime.create(kind);
        assert_eq!(engine.kind(), kind);
        assert_eq!(engine.total_rows(), 0);
    }
}

#[test]
fn engine_toggle_swaps_backends_over_the_same_data() {
    let runtime = initialize_grid_runtime();
    let data = bulk_data(40);

    let mut engine = runtime.create(EngineKind::Virtual);
    engine.set_data(data.clone());
    assert_eq!(engine.view_indices().len(), 40);

    let next = engine.kind().toggle();
    assert_eq!(next, EngineKind::Paged);
    let mut engine = runtime.create(next);
    engine.set_data(data);
    assert_eq!(engine.view_indices().len(), 40);
    assert_eq!(engine.window(50).len(), 25);
}
