//! Infrastructure wiring for the HTTP app: record store, image store,
//! sessions, credentials.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;

use larder_auth::{Credentials, SessionStore};
use larder_store::{ImageStore, RecordStore, StoreResult};

use crate::config::Config;

pub struct AppServices {
    record_store: RecordStore,
    images: ImageStore,
    sessions: Arc<SessionStore>,
    credentials: Credentials,
    data_dir: PathBuf,
}

impl AppServices {
    pub fn new(config: &Config) -> StoreResult<Self> {
        let record_store = RecordStore::in_dir(&config.data_dir);
        let images = ImageStore::in_dir(&config.data_dir);
        images.ensure_dir()?;

        Ok(Self {
            record_store,
            images,
            sessions: Arc::new(SessionStore::new(config.session_ttl)),
            credentials: config.credentials.clone(),
            data_dir: config.data_dir.clone(),
        })
    }

    pub fn record_store(&self) -> &RecordStore {
        &self.record_store
    }

    pub fn images(&self) -> &ImageStore {
        &self.images
    }

    pub fn sessions(&self) -> Arc<SessionStore> {
        self.sessions.clone()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Today's date for alert evaluation (date-only, local time).
    pub fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}
