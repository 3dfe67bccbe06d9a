use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::SessionContext;

/// Exchange credentials for a session token.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    if services
        .credentials()
        .verify(&body.username, &body.password)
        .is_err()
    {
        return errors::json_error(
            StatusCode::UNAUTHORIZED,
            "invalid_credentials",
            "username or password is incorrect",
        );
    }

    let session = services.sessions().open(Utc::now());
    tracing::info!(session = %session.id, "session opened");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "token": session.id.to_string(),
            "expires_at": session.expires_at.to_rfc3339(),
        })),
    )
        .into_response()
}

/// Describe the session backing this request.
pub async fn current(Extension(ctx): Extension<SessionContext>) -> impl IntoResponse {
    let session = ctx.session();
    Json(serde_json::json!({
        "session_id": session.id.to_string(),
        "created_at": session.created_at.to_rfc3339(),
        "expires_at": session.expires_at.to_rfc3339(),
    }))
}

/// Invalidate the session backing this request (logout).
pub async fn logout(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<SessionContext>,
) -> impl IntoResponse {
    services.sessions().revoke(ctx.session_id());
    tracing::info!(session = %ctx.session_id(), "session revoked");
    StatusCode::NO_CONTENT
}
