//! Alert evaluation: low-stock and expired subsets of the table.
//!
//! Both functions are pure reads, evaluated fresh against the latest loaded
//! table on every render cycle. `today` is an explicit parameter so the
//! expiry boundary is deterministic under test.

use chrono::NaiveDate;

use crate::item::Item;
use crate::table::Table;

/// Rows whose quantity is at or below their alert threshold.
///
/// The comparison is inclusive: quantity equal to the threshold already
/// alerts.
pub fn low_stock(table: &Table) -> Vec<&Item> {
    table
        .items()
        .iter()
        .filter(|item| item.quantity <= item.alert_threshold)
        .collect()
}

/// Rows whose expiry date is strictly before `today`.
///
/// Date-only comparison. Rows without an expiry are never expired, and an
/// expiry equal to `today` does not qualify.
pub fn expired(table: &Table, today: NaiveDate) -> Vec<&Item> {
    table
        .items()
        .iter()
        .filter(|item| item.expiry.is_some_and(|expiry| expiry < today))
        .collect()
}
