use axum::{routing::get, Router};

pub mod alerts;
pub mod export;
pub mod items;
pub mod session;
pub mod system;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/session", get(session::current).delete(session::logout))
        .nest("/items", items::router())
        .route("/alerts", get(alerts::get_alerts))
        .route("/export", get(export::download_export))
}
