use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::debug;

use glasssuite_core::EntityKind;

use crate::pools::{COUNTRIES, FIRST_NAMES, LAST_NAMES, pick};
use crate::rows::{
    CustomerRow, InvoiceRow, OrderRow, OrderStatus, ReportRunRow, Row, RowKind, RunStatus,
    UserRole, UserRow,
};
use crate::seed::{Mulberry32, hash_string};

/// Generate `count` rows of `kind`, seeded by `seed`, with date fields
/// derived from the reference instant `now`.
///
/// Pure function of its arguments: identical inputs reproduce the exact
/// draw sequence, so the output is element-wise identical across calls,
/// runs, and platforms. `count = 0` yields an empty vector; identifiers
/// are `index + 1`, never randomized.
pub fn generate_rows(kind: &RowKind, count: usize, seed: &str, now: DateTime<Utc>) -> Vec<Row> {
    let mut rnd = Mulberry32::new(hash_string(seed));
    let mut rows = Vec::with_capacity(count);
    for index in 0..count {
        rows.push(synthesize(kind, index, &mut rnd, now));
    }
    debug!(kind = kind.label(), count, seed, "rows generated");
    rows
}

/// [`generate_rows`] against the current instant.
pub fn generate_rows_now(kind: &RowKind, count: usize, seed: &str) -> Vec<Row> {
    generate_rows(kind, count, seed, Utc::now())
}

/// One record. Draws happen in declaration order below; that order is the
/// reproducibility contract, so reordering statements changes every seed's
/// output.
fn synthesize(kind: &RowKind, index: usize, rnd: &mut Mulberry32, now: DateTime<Utc>) -> Row {
    let id = index as i64 + 1;
    match kind {
        RowKind::Entity(EntityKind::Customers) => {
            let first = pick(rnd, &FIRST_NAMES);
            let last = pick(rnd, &LAST_NAMES);
            let email = format!(
                "{}.{}{}@example.com",
                first.to_lowercase(),
                last.to_lowercase(),
                (id % 97) + 1
            );
            let country = pick(rnd, &COUNTRIES).to_string();
            let created_at = date_back(rnd, now, 180);
            Row::Customer(CustomerRow {
                id,
                name: format!("{first} {last}"),
                email,
                country,
                created_at,
            })
        }
        RowKind::Entity(EntityKind::Orders) => {
            let customer_id = (rnd.next_f64() * 900.0).floor() as i64 + 1;
            let status = pick(rnd, &OrderStatus::ALL);
            let total = round_currency(rnd.next_f64() * 9800.0 + 50.0);
            let created_at = date_back(rnd, now, 120);
            Row::Order(OrderRow {
                id,
                customer_id,
                status,
                total,
                created_at,
            })
        }
        RowKind::Entity(EntityKind::Invoices) => {
            // Amount draws before order_id.
            let amount = round_currency(rnd.next_f64() * 12500.0 + 25.0);
            let order_id = (rnd.next_f64() * 1500.0).floor() as i64 + 1;
            let paid = rnd.next_f64() > 0.22;
            let issued_at = date_back(rnd, now, 90);
            Row::Invoice(InvoiceRow {
                id,
                order_id,
                amount,
                paid,
                issued_at,
            })
        }
        RowKind::Entity(EntityKind::Users) => {
            let first = pick(rnd, &FIRST_NAMES);
            let last = pick(rnd, &LAST_NAMES);
            let role = pick(rnd, &UserRole::ALL);
            let active = rnd.next_f64() > 0.12;
            let created_at = date_back(rnd, now, 365);
            Row::User(UserRow {
                id,
                name: format!("{first} {last}"),
                role,
                active,
                created_at,
            })
        }
        RowKind::ReportRun { report } => {
            let first = pick(rnd, &FIRST_NAMES);
            let last = pick(rnd, &LAST_NAMES);
            let status = pick(rnd, &RunStatus::ALL);
            let updated = date_back(rnd, now, 45);
            let base = (rnd.next_f64() * 34000.0).floor() as i64;
            let offset = if status == RunStatus::Running {
                22000
            } else {
                1800
            };
            Row::ReportRun(ReportRunRow {
                id: format!("run_{}", index + 1),
                report: report.clone(),
                owner: format!("{first} {last}"),
                status,
                updated,
                duration_ms: base + offset,
            })
        }
    }
}

/// Uniform date within the last `days_back` days of `now`, as the UTC
/// calendar date with time-of-day discarded.
fn date_back(rnd: &mut Mulberry32, now: DateTime<Utc>, days_back: u32) -> NaiveDate {
    let delta_ms =
        (rnd.next_f64() * f64::from(days_back) * 24.0 * 60.0 * 60.0 * 1000.0).floor() as i64;
    (now - Duration::milliseconds(delta_ms)).date_naive()
}

fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
