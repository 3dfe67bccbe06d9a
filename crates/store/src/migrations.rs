//! Versioned schema migrations, executed once at load time.
//!
//! Each step upgrades the raw rows by exactly one schema version. New column
//! additions follow the same pattern: add a `SchemaVersion` variant, append
//! a `Migration` here, and the load path picks it up.

use larder_core::ItemId;
use larder_inventory::DEFAULT_ALERT_THRESHOLD;

use crate::schema::SchemaVersion;

/// A row as read from disk, before type checking. Fields added by later
/// schema versions are `None` until a migration fills them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub name: String,
    pub quantity: String,
    pub category: String,
    pub expiry: String,
    pub note: String,
    pub image: String,
    pub threshold: Option<String>,
    pub id: Option<String>,
}

/// One schema upgrade step.
pub struct Migration {
    /// Version the rows are at after this step runs.
    pub to: SchemaVersion,
    pub describe: &'static str,
    apply: fn(&mut RawRow),
}

/// All known migrations, oldest first. Order matters.
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        to: SchemaVersion::V2,
        describe: "backfill alert threshold",
        apply: backfill_alert_threshold,
    },
    Migration {
        to: SchemaVersion::V3,
        describe: "assign surrogate row ids",
        apply: assign_row_id,
    },
];

fn backfill_alert_threshold(row: &mut RawRow) {
    if row.threshold.is_none() {
        row.threshold = Some(DEFAULT_ALERT_THRESHOLD.to_string());
    }
}

fn assign_row_id(row: &mut RawRow) {
    if row.id.is_none() {
        row.id = Some(ItemId::new().to_string());
    }
}

/// Upgrade rows from `from` to the current schema version.
///
/// Returns the version the rows ended at (always `CURRENT`).
pub fn upgrade(rows: &mut [RawRow], from: SchemaVersion) -> SchemaVersion {
    let mut version = from;
    for migration in MIGRATIONS {
        if migration.to <= version {
            continue;
        }
        for row in rows.iter_mut() {
            (migration.apply)(row);
        }
        tracing::info!(
            step = migration.describe,
            to = ?migration.to,
            rows = rows.len(),
            "applied schema migration"
        );
        version = migration.to;
    }
    version
}
