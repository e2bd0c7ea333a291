use glasssuite_core::{ALL_REPORTS_KEY, ReportCategory, builtin_reports, find_report, report_run_fields};

#[test]
fn catalog_lists_four_reports_in_display_order() {
    let reports = builtin_reports();
    assert_eq!(reports.len(), 4);
    let ids: Vec<&str> = reports.iter().map(|r| r.id).collect();
    assert_eq!(ids, ["r1", "r2", "r3", "r4"]);
    assert_eq!(reports[0].title, "Monthly Spend Overview");
    assert_eq!(reports[1].category, ReportCategory::Security);
}

#[test]
fn report_lookup_resolves_known_ids_only() {
    let report = find_report("r3").expect("r3 exists");
    assert_eq!(report.title, "API Usage by Module");
    assert!(find_report("r9").is_none());
    assert!(find_report(ALL_REPORTS_KEY).is_none());
}

#[test]
fn run_history_columns_match_the_run_row_shape() {
    let fields = report_run_fields();
    let ids: Vec<&str> = fields.iter().map(|f| f.id).collect();
    assert_eq!(
        ids,
        ["id", "report", "owner", "status", "updated", "duration_ms"]
    );
    assert_eq!(fields[5].label, "Duration (ms)");
}
