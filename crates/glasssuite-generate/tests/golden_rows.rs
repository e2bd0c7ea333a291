use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use sha2::{Digest, Sha256};

use glasssuite_core::EntityKind;
use glasssuite_generate::output::csv::write_rows_csv;
use glasssuite_generate::output::json::write_rows_json;
use glasssuite_generate::{RowKind, generate_rows};

fn hash_file(path: &Path) -> Result<String, std::io::Error> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0_u8; 8192];
    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

#[test]
fn csv_bytes_are_stable_for_fixed_inputs() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let kind = RowKind::Entity(EntityKind::Customers);
    let seed = "Customers:SELECT * FROM customers;";
    let now = fixed_instant();

    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");
    write_rows_csv(&first, kind.fields(), &generate_rows(&kind, 250, seed, now))
        .expect("write first");
    write_rows_csv(&second, kind.fields(), &generate_rows(&kind, 250, seed, now))
        .expect("write second");

    assert_eq!(
        hash_file(&first).expect("hash first"),
        hash_file(&second).expect("hash second"),
        "fixed inputs must produce identical bytes"
    );
}

#[test]
fn changing_the_seed_changes_the_bytes() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let kind = RowKind::Entity(EntityKind::Orders);
    let now = fixed_instant();

    let a = dir.path().join("a.csv");
    let b = dir.path().join("b.csv");
    write_rows_csv(&a, kind.fields(), &generate_rows(&kind, 100, "seed-a", now))
        .expect("write a");
    write_rows_csv(&b, kind.fields(), &generate_rows(&kind, 100, "seed-b", now))
        .expect("write b");

    assert_ne!(
        hash_file(&a).expect("hash a"),
        hash_file(&b).expect("hash b")
    );
}

#[test]
fn csv_header_lists_the_field_identifiers() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let kind = RowKind::Entity(EntityKind::Invoices);
    let path = dir.path().join("invoices.csv");
    let rows = generate_rows(&kind, 3, "header", fixed_instant());
    let bytes = write_rows_csv(&path, kind.fields(), &rows).expect("write csv");
    assert!(bytes > 0);

    let content = std::fs::read_to_string(&path).expect("read csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,order_id,amount,paid,issued_at"),
        "header row"
    );
    assert_eq!(lines.count(), 3, "one line per generated row");
}

#[test]
fn json_output_is_an_array_of_flat_records() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let kind = RowKind::ReportRun {
        report: "r1".to_string(),
    };
    let path = dir.path().join("runs.json");
    let rows = generate_rows(&kind, 5, "r1", fixed_instant());
    write_rows_json(&path, &rows).expect("write json");

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("read json"))
            .expect("parse json");
    let array = parsed.as_array().expect("array output");
    assert_eq!(array.len(), 5);
    assert_eq!(array[0]["id"], "run_1");
    assert_eq!(array[0]["report"], "r1");
    assert!(array[0]["duration_ms"].is_i64());
}
