//! Persisted table schema: column labels and version detection.
//!
//! The seven original column labels are localized strings and are preserved
//! verbatim so files written by earlier versions of the household app keep
//! loading. Schema versions only ever add columns; the header row is enough
//! to identify which version wrote the file.

use csv::StringRecord;

use crate::error::{StoreError, StoreResult};

pub const COL_NAME: &str = "名前";
pub const COL_QUANTITY: &str = "数量";
pub const COL_CATEGORY: &str = "カテゴリー";
pub const COL_EXPIRY: &str = "期限";
pub const COL_NOTE: &str = "備考";
pub const COL_IMAGE: &str = "画像";
pub const COL_THRESHOLD: &str = "アラートしきい値";
pub const COL_ID: &str = "id";

/// Header row written by the current schema, in column order.
pub const HEADERS: [&str; 8] = [
    COL_NAME,
    COL_QUANTITY,
    COL_CATEGORY,
    COL_EXPIRY,
    COL_NOTE,
    COL_IMAGE,
    COL_THRESHOLD,
    COL_ID,
];

/// Columns every readable file must have, whatever its version.
const BASE_COLUMNS: [&str; 6] = [
    COL_NAME,
    COL_QUANTITY,
    COL_CATEGORY,
    COL_EXPIRY,
    COL_NOTE,
    COL_IMAGE,
];

/// Version of the persisted schema, ordered oldest to newest.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SchemaVersion {
    /// Original six columns, no alert threshold.
    V1,
    /// V1 plus the alert-threshold column.
    V2,
    /// V2 plus the surrogate id column.
    V3,
}

impl SchemaVersion {
    pub const CURRENT: SchemaVersion = SchemaVersion::V3;

    /// Identify the schema version from a header row.
    ///
    /// A header missing any of the six base columns is not a table we ever
    /// wrote; that is a corrupt file, not a migration case.
    pub fn detect(headers: &StringRecord) -> StoreResult<Self> {
        let has = |col: &str| headers.iter().any(|h| h == col);

        if let Some(missing) = BASE_COLUMNS.iter().find(|col| !has(col)) {
            return Err(StoreError::corrupt(format!(
                "header row is missing required column {missing:?}"
            )));
        }

        if has(COL_ID) {
            Ok(SchemaVersion::V3)
        } else if has(COL_THRESHOLD) {
            Ok(SchemaVersion::V2)
        } else {
            Ok(SchemaVersion::V1)
        }
    }
}
