//! The record store: whole-file load and save of the consumables table.
//!
//! Lifecycle contract: callers reload the table at the start of every
//! interaction cycle and rewrite it after every mutation. Saves are atomic
//! (temp file + rename in the same directory) and serialization is
//! deterministic, so `save(load())` is idempotent byte for byte.

use std::io::Write;
use std::path::{Path, PathBuf};

use csv::StringRecord;

use larder_core::ItemId;
use larder_inventory::{Category, Item, Table};

use crate::error::{StoreError, StoreResult};
use crate::migrations::{upgrade, RawRow};
use crate::schema::{
    SchemaVersion, COL_CATEGORY, COL_EXPIRY, COL_ID, COL_IMAGE, COL_NAME, COL_NOTE,
    COL_QUANTITY, COL_THRESHOLD, HEADERS,
};

/// Fixed filename of the persisted table inside the data directory.
pub const TABLE_FILE: &str = "consumables.csv";

/// UTF-8 byte-order mark. The file has always carried one; readers strip it,
/// writers emit it.
const BOM: &[u8] = b"\xef\xbb\xbf";

const EXPIRY_FORMAT: &str = "%Y-%m-%d";

/// Loads and saves the consumables table at a fixed path.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store rooted in a data directory, using the canonical filename.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(TABLE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted table, upgrading legacy schemas in memory.
    ///
    /// A missing file is an empty table; an unreadable or unparseable file
    /// is fatal.
    pub fn load(&self) -> StoreResult<Table> {
        if !self.path.exists() {
            return Ok(Table::new());
        }

        let bytes = std::fs::read(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let bytes = bytes.strip_prefix(BOM).unwrap_or(&bytes);

        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);
        let headers = reader.headers()?.clone();
        let version = SchemaVersion::detect(&headers)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(raw_row(&headers, &record?));
        }

        upgrade(&mut rows, version);

        let items = rows
            .into_iter()
            .map(typed_item)
            .collect::<StoreResult<Vec<Item>>>()?;

        tracing::debug!(rows = items.len(), path = %self.path.display(), "loaded table");
        Ok(Table::from_items(items))
    }

    /// Rewrite the persisted table atomically.
    pub fn save(&self, table: &Table) -> StoreResult<()> {
        let bytes = encode(table)?;

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        let mut tmp =
            tempfile::NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
        tmp.write_all(&bytes)
            .map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;

        tracing::debug!(rows = table.len(), path = %self.path.display(), "saved table");
        Ok(())
    }
}

fn raw_row(headers: &StringRecord, record: &StringRecord) -> RawRow {
    let column = |name: &str| -> Option<&str> {
        headers
            .iter()
            .position(|h| h == name)
            .and_then(|i| record.get(i))
    };
    let required = |name: &str| column(name).unwrap_or("").to_string();
    // Short rows leave later fields absent; treat absent like the column
    // never existed so migrations backfill them.
    let optional = |name: &str| column(name).map(str::to_string);

    RawRow {
        name: required(COL_NAME),
        quantity: required(COL_QUANTITY),
        category: required(COL_CATEGORY),
        expiry: required(COL_EXPIRY),
        note: required(COL_NOTE),
        image: required(COL_IMAGE),
        threshold: optional(COL_THRESHOLD),
        id: optional(COL_ID),
    }
}

fn typed_item(row: RawRow) -> StoreResult<Item> {
    let quantity: u32 = row
        .quantity
        .trim()
        .parse()
        .map_err(|_| StoreError::corrupt(format!("bad quantity {:?}", row.quantity)))?;

    let category: Category = row
        .category
        .parse()
        .map_err(|_| StoreError::corrupt(format!("unknown category {:?}", row.category)))?;

    // Tolerated, never fatal: a row with an unreadable expiry simply has no
    // expiry, and in particular is never reported as expired.
    let expiry = match row.expiry.trim() {
        "" => None,
        s => match chrono::NaiveDate::parse_from_str(s, EXPIRY_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                tracing::warn!(name = %row.name, expiry = %s, "ignoring unparseable expiry");
                None
            }
        },
    };

    // Both always present after migration.
    let threshold_field = row.threshold.unwrap_or_default();
    let alert_threshold: u32 = threshold_field
        .trim()
        .parse()
        .map_err(|_| StoreError::corrupt(format!("bad alert threshold {threshold_field:?}")))?;
    if alert_threshold < 1 {
        return Err(StoreError::corrupt("alert threshold must be at least 1"));
    }

    let id_field = row.id.unwrap_or_default();
    let id: ItemId = id_field
        .parse()
        .map_err(|_| StoreError::corrupt(format!("bad row id {id_field:?}")))?;

    Ok(Item {
        id,
        name: row.name,
        quantity,
        category,
        expiry,
        note: row.note,
        image_path: match row.image.as_str() {
            "" => None,
            path => Some(path.to_string()),
        },
        alert_threshold,
    })
}

fn encode(table: &Table) -> StoreResult<Vec<u8>> {
    let mut buf = Vec::new();
    buf.extend_from_slice(BOM);

    let mut writer = csv::Writer::from_writer(&mut buf);
    writer.write_record(HEADERS)?;
    for item in table.items() {
        writer.write_record(&[
            item.name.clone(),
            item.quantity.to_string(),
            item.category.label().to_string(),
            item.expiry
                .map(|d| d.format(EXPIRY_FORMAT).to_string())
                .unwrap_or_default(),
            item.note.clone(),
            item.image_path.clone().unwrap_or_default(),
            item.alert_threshold.to_string(),
            item.id.to_string(),
        ])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    drop(writer);

    Ok(buf)
}
