use chrono::{DateTime, Duration, TimeZone, Utc};

use glasssuite_core::EntityKind;
use glasssuite_generate::pools::{COUNTRIES, FIRST_NAMES, LAST_NAMES};
use glasssuite_generate::{Row, RowKind, RunStatus, generate_rows};

fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn assert_within_window(date: chrono::NaiveDate, now: DateTime<Utc>, days_back: i64) {
    assert!(date <= now.date_naive(), "date in the future: {date}");
    let floor = (now - Duration::days(days_back)).date_naive();
    assert!(date >= floor, "date {date} older than {days_back} days");
}

fn is_two_decimal(value: f64) -> bool {
    let scaled = value * 100.0;
    (scaled - scaled.round()).abs() < 1e-6
}

#[test]
fn customers_compose_names_emails_and_countries_from_the_pools() {
    let now = fixed_instant();
    let rows = generate_rows(&RowKind::Entity(EntityKind::Customers), 200, "c", now);
    for row in &rows {
        let Row::Customer(customer) = row else {
            panic!("expected customer rows");
        };
        let mut parts = customer.name.split(' ');
        let first = parts.next().expect("first name");
        let last = parts.next().expect("last name");
        assert!(parts.next().is_none());
        assert!(FIRST_NAMES.contains(&first));
        assert!(LAST_NAMES.contains(&last));
        assert!(COUNTRIES.contains(&customer.country.as_str()));

        let expected_email = format!(
            "{}.{}{}@example.com",
            first.to_lowercase(),
            last.to_lowercase(),
            (customer.id % 97) + 1
        );
        assert_eq!(customer.email, expected_email);
        assert_within_window(customer.created_at, now, 180);
    }
}

#[test]
fn orders_stay_inside_their_numeric_ranges() {
    let now = fixed_instant();
    let rows = generate_rows(&RowKind::Entity(EntityKind::Orders), 400, "o", now);
    for row in &rows {
        let Row::Order(order) = row else {
            panic!("expected order rows");
        };
        assert!((1..=900).contains(&order.customer_id));
        assert!(order.total >= 50.0 && order.total <= 9850.0);
        assert!(is_two_decimal(order.total), "total {}", order.total);
        assert_within_window(order.created_at, now, 120);
    }
}

#[test]
fn invoices_stay_inside_their_numeric_ranges() {
    let now = fixed_instant();
    let rows = generate_rows(&RowKind::Entity(EntityKind::Invoices), 400, "i", now);
    let mut paid = 0_usize;
    for row in &rows {
        let Row::Invoice(invoice) = row else {
            panic!("expected invoice rows");
        };
        assert!((1..=1500).contains(&invoice.order_id));
        assert!(invoice.amount >= 25.0 && invoice.amount <= 12525.0);
        assert!(is_two_decimal(invoice.amount), "amount {}", invoice.amount);
        assert_within_window(invoice.issued_at, now, 90);
        if invoice.paid {
            paid += 1;
        }
    }
    // paid is drawn at probability ~0.78; with 400 rows a majority is certain
    // enough for a deterministic stream.
    assert!(paid > 200, "only {paid} of 400 invoices paid");
}

#[test]
fn users_draw_roles_and_activity_flags() {
    let now = fixed_instant();
    let rows = generate_rows(&RowKind::Entity(EntityKind::Users), 300, "u", now);
    let mut active = 0_usize;
    for row in &rows {
        let Row::User(user) = row else {
            panic!("expected user rows");
        };
        assert!(["Admin", "Analyst", "Operator", "Viewer"].contains(&user.role.as_str()));
        assert_within_window(user.created_at, now, 365);
        if user.active {
            active += 1;
        }
    }
    assert!(active > 150, "only {active} of 300 users active");
}

#[test]
fn running_reports_carry_the_duration_offset() {
    let now = fixed_instant();
    let kind = RowKind::ReportRun {
        report: "r3".to_string(),
    };
    let rows = generate_rows(&kind, 1600, "r3", now);
    let mut running = 0_usize;
    for row in &rows {
        let Row::ReportRun(run) = row else {
            panic!("expected run rows");
        };
        assert_eq!(run.report, "r3");
        assert_within_window(run.updated, now, 45);
        match run.status {
            RunStatus::Running => {
                running += 1;
                assert!(run.duration_ms >= 22_000, "running below offset");
                assert!(run.duration_ms < 56_000);
            }
            RunStatus::Success | RunStatus::Failed => {
                assert!((1_800..35_800).contains(&run.duration_ms));
            }
        }
    }
    assert!(running > 0, "1600 draws produced no running status");
}

#[test]
fn cells_project_in_field_list_order() {
    let now = fixed_instant();
    let kind = RowKind::Entity(EntityKind::Invoices);
    let rows = generate_rows(&kind, 1, "cells", now);
    let cells = rows[0].cells();
    let fields = kind.fields();
    assert_eq!(cells.len(), fields.len());
    assert_eq!(cells[0].as_i64(), Some(1));
    assert!(cells[2].as_f64().is_some(), "amount column is numeric");
    assert!(cells[4].as_date().is_some(), "issued_at column is a date");
}
