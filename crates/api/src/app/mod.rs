//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: infrastructure wiring (record store, image store, sessions)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::config::Config;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: Config) -> anyhow::Result<Router> {
    let services = Arc::new(services::AppServices::new(&config)?);
    let auth_state = middleware::AuthState {
        sessions: services.sessions(),
    };

    // Protected routes: require a live session.
    let protected = routes::router()
        .layer(Extension(services.clone()))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::session_middleware,
        ));

    Ok(Router::new()
        .route("/health", get(routes::system::health))
        .route("/session", post(routes::session::login))
        .layer(Extension(services))
        .merge(protected))
}
