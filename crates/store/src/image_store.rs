//! Loose-file image storage.
//!
//! Images are written once into a fixed directory and never mutated; the
//! table only ever holds the relative path. No deduplication and no size
//! limits are enforced here.

use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};

/// Fixed directory name for images, relative to the data directory.
pub const IMAGES_DIR: &str = "images";

#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    /// Image store rooted in a data directory.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            root: data_dir.as_ref().join(IMAGES_DIR),
        }
    }

    /// Create the image directory if it does not exist yet.
    pub fn ensure_dir(&self) -> StoreResult<()> {
        std::fs::create_dir_all(&self.root).map_err(|e| StoreError::io(&self.root, e))
    }

    /// Write `bytes` under the suggested filename and return the relative
    /// path recorded in the table.
    ///
    /// The suggested name is reduced to its final path component, so callers
    /// cannot write outside the image directory. A repeated name overwrites
    /// the earlier file.
    pub fn save(&self, bytes: &[u8], suggested_name: &str) -> StoreResult<String> {
        let file_name = Path::new(suggested_name)
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty() && *n != "." && *n != "..")
            .ok_or_else(|| StoreError::InvalidImageName(suggested_name.to_string()))?;

        self.ensure_dir()?;
        let target = self.root.join(file_name);
        std::fs::write(&target, bytes).map_err(|e| StoreError::io(&target, e))?;

        tracing::debug!(file = %file_name, bytes = bytes.len(), "stored image");
        Ok(format!("{IMAGES_DIR}/{file_name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_bytes_and_returns_relative_path() {
        let dir = tempfile::tempdir().unwrap();
        let images = ImageStore::in_dir(dir.path());

        let path = images.save(b"png-bytes", "soap.png").unwrap();
        assert_eq!(path, "images/soap.png");
        assert_eq!(
            std::fs::read(dir.path().join("images/soap.png")).unwrap(),
            b"png-bytes"
        );
    }

    #[test]
    fn suggested_name_is_reduced_to_its_final_component() {
        let dir = tempfile::tempdir().unwrap();
        let images = ImageStore::in_dir(dir.path());

        let path = images.save(b"x", "../../etc/passwd").unwrap();
        assert_eq!(path, "images/passwd");
        assert!(dir.path().join("images/passwd").exists());
    }

    #[test]
    fn empty_suggested_name_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let images = ImageStore::in_dir(dir.path());

        assert!(matches!(
            images.save(b"x", ""),
            Err(StoreError::InvalidImageName(_))
        ));
    }

    #[test]
    fn repeated_name_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let images = ImageStore::in_dir(dir.path());

        images.save(b"old", "a.png").unwrap();
        images.save(b"new", "a.png").unwrap();
        assert_eq!(std::fs::read(dir.path().join("images/a.png")).unwrap(), b"new");
    }
}
