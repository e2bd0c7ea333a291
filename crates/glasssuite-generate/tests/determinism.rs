use chrono::{DateTime, TimeZone, Utc};

use glasssuite_core::EntityKind;
use glasssuite_generate::{Row, RowKind, generate_rows, generate_rows_now};

fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

#[test]
fn identical_inputs_reproduce_identical_sequences() {
    let now = fixed_instant();
    for kind in [
        RowKind::Entity(EntityKind::Customers),
        RowKind::Entity(EntityKind::Orders),
        RowKind::Entity(EntityKind::Invoices),
        RowKind::Entity(EntityKind::Users),
        RowKind::ReportRun {
            report: "r2".to_string(),
        },
    ] {
        let first = generate_rows(&kind, 64, "Orders:SELECT * FROM orders;", now);
        let second = generate_rows(&kind, 64, "Orders:SELECT * FROM orders;", now);
        assert_eq!(first, second, "{} rows must be reproducible", kind.label());
    }
}

#[test]
fn output_length_matches_the_requested_count() {
    let now = fixed_instant();
    let kind = RowKind::Entity(EntityKind::Customers);
    for count in [0_usize, 1, 37, 1600] {
        let rows = generate_rows(&kind, count, "seed", now);
        assert_eq!(rows.len(), count);
    }
    assert!(generate_rows_now(&kind, 0, "seed").is_empty());
}

#[test]
fn different_seeds_disagree_somewhere() {
    let now = fixed_instant();
    let kind = RowKind::Entity(EntityKind::Users);
    let a = generate_rows(&kind, 50, "seed-a", now);
    let b = generate_rows(&kind, 50, "seed-b", now);
    assert_ne!(a, b);
}

#[test]
fn entity_identifiers_count_up_from_one() {
    let now = fixed_instant();
    for kind in EntityKind::ALL {
        let rows = generate_rows(&RowKind::Entity(kind), 120, "ids", now);
        for (index, row) in rows.iter().enumerate() {
            let id = match row {
                Row::Customer(r) => r.id,
                Row::Order(r) => r.id,
                Row::Invoice(r) => r.id,
                Row::User(r) => r.id,
                Row::ReportRun(_) => panic!("entity kind produced a run row"),
            };
            assert_eq!(id, index as i64 + 1);
        }
    }
}

#[test]
fn run_identifiers_are_sequential_strings() {
    let now = fixed_instant();
    let kind = RowKind::ReportRun {
        report: "all".to_string(),
    };
    let rows = generate_rows(&kind, 1600, "all", now);
    assert_eq!(rows.len(), 1600);
    for (index, row) in rows.iter().enumerate() {
        let Row::ReportRun(run) = row else {
            panic!("run kind produced an entity row");
        };
        assert_eq!(run.id, format!("run_{}", index + 1));
        assert_eq!(run.report, "all");
    }
}

#[test]
fn the_reference_instant_only_moves_dates() {
    let kind = RowKind::Entity(EntityKind::Orders);
    let seed = "window";
    let early = generate_rows(&kind, 10, seed, fixed_instant());
    let later = generate_rows(
        &kind,
        10,
        seed,
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    );
    for (a, b) in early.iter().zip(&later) {
        let (Row::Order(a), Row::Order(b)) = (a, b) else {
            panic!("expected order rows");
        };
        assert_eq!(a.customer_id, b.customer_id);
        assert_eq!(a.status, b.status);
        assert_eq!(a.total, b.total);
    }
}
