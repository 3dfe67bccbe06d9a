//! `larder-store` — durable storage for the consumables table.
//!
//! Owns the persisted CSV file (schema detection + versioned migration on
//! load, atomic whole-file rewrite on save), the image directory, and the
//! spreadsheet export. Everything above this crate treats storage failures
//! as fatal.

pub mod error;
pub mod export;
pub mod image_store;
pub mod migrations;
pub mod record_store;
pub mod schema;

pub use error::{StoreError, StoreResult};
pub use export::{export_snapshot, ExportArtifact, EXPORT_FILE};
pub use image_store::{ImageStore, IMAGES_DIR};
pub use record_store::{RecordStore, TABLE_FILE};
pub use schema::SchemaVersion;
