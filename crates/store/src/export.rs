//! Spreadsheet export of the full table.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;

use larder_inventory::Table;

use crate::error::{StoreError, StoreResult};
use crate::schema::HEADERS;

/// Fixed filename of the export inside the data directory.
pub const EXPORT_FILE: &str = "consumables.xlsx";

/// A finished export: where it was written, plus the bytes for download.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Serialize the full, unfiltered table to a single-sheet workbook at the
/// fixed filename, overwriting any prior export.
///
/// Columns mirror the persisted schema, rows appear in table order.
pub fn export_snapshot(table: &Table, data_dir: &Path) -> StoreResult<ExportArtifact> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    for (i, item) in table.items().iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &item.name)?;
        sheet.write_number(row, 1, item.quantity)?;
        sheet.write_string(row, 2, item.category.label())?;
        sheet.write_string(
            row,
            3,
            item.expiry
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        )?;
        sheet.write_string(row, 4, &item.note)?;
        sheet.write_string(row, 5, item.image_path.as_deref().unwrap_or_default())?;
        sheet.write_number(row, 6, item.alert_threshold)?;
        sheet.write_string(row, 7, item.id.to_string())?;
    }

    let bytes = workbook.save_to_buffer()?;
    let path = data_dir.join(EXPORT_FILE);
    std::fs::write(&path, &bytes).map_err(|e| StoreError::io(&path, e))?;

    tracing::info!(rows = table.len(), path = %path.display(), "exported snapshot");
    Ok(ExportArtifact { path, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_inventory::{Category, NewItem};

    fn sample_table() -> Table {
        let mut table = Table::new();
        table
            .add(NewItem {
                name: "お米".to_string(),
                quantity: 5,
                category: Category::Food,
                expiry: Some("2026-12-01".parse().unwrap()),
                note: "新米".to_string(),
                image_path: None,
                alert_threshold: 3,
            })
            .unwrap();
        table
    }

    #[test]
    fn writes_workbook_at_the_fixed_filename() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = export_snapshot(&sample_table(), dir.path()).unwrap();

        assert_eq!(artifact.path, dir.path().join(EXPORT_FILE));
        assert!(artifact.path.exists());
        assert!(!artifact.bytes.is_empty());
        // xlsx files are zip containers.
        assert_eq!(&artifact.bytes[..2], b"PK");
    }

    #[test]
    fn export_overwrites_the_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        export_snapshot(&sample_table(), dir.path()).unwrap();

        let empty = Table::new();
        let artifact = export_snapshot(&empty, dir.path()).unwrap();

        assert_eq!(
            std::fs::read(dir.path().join(EXPORT_FILE)).unwrap(),
            artifact.bytes
        );
    }
}
