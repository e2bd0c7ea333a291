//! Closed value pools for row synthesis. Pool order is normative: picks
//! index with `floor(draw * len)`, so reordering changes every output.

use crate::seed::Mulberry32;

pub const FIRST_NAMES: [&str; 15] = [
    "Ava", "Mia", "Liam", "Noah", "Olivia", "Ethan", "Zoe", "Mason", "Sofia", "Leo", "Iris",
    "Aria", "Theo", "Nina", "Omar",
];

pub const LAST_NAMES: [&str; 13] = [
    "Johnson", "Patel", "Kim", "Garcia", "Chen", "Williams", "Nguyen", "Brown", "Singh", "Khan",
    "Lopez", "Miller", "Davis",
];

pub const COUNTRIES: [&str; 11] = [
    "US", "DE", "FR", "GB", "CA", "IN", "SG", "AU", "NL", "SE", "JP",
];

/// Pick one entry, consuming exactly one draw.
pub fn pick<T: Copy>(rnd: &mut Mulberry32, values: &[T]) -> T {
    let index = (rnd.next_f64() * values.len() as f64).floor() as usize;
    values[index]
}
