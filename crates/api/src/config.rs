//! Process configuration, read from the environment once at startup.

use std::path::PathBuf;

use chrono::Duration;

use larder_auth::Credentials;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// Directory holding the table file, the images directory and exports.
    pub data_dir: PathBuf,
    pub credentials: Credentials,
    pub session_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("LARDER_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let data_dir = std::env::var("LARDER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let username =
            std::env::var("LARDER_USERNAME").unwrap_or_else(|_| "household".to_string());
        let password = std::env::var("LARDER_PASSWORD").unwrap_or_else(|_| {
            tracing::warn!("LARDER_PASSWORD not set; using insecure dev default");
            "dev-password".to_string()
        });

        let session_ttl = std::env::var("LARDER_SESSION_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .map(Duration::hours)
            .unwrap_or_else(|| Duration::hours(12));

        Self {
            bind_addr,
            data_dir,
            credentials: Credentials::new(username, password),
            session_ttl,
        }
    }
}
