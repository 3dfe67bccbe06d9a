use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use larder_core::DomainError;
use larder_store::StoreError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        // The targeted row is gone: nothing was mutated, tell the user.
        DomainError::NotFound => json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            "item no longer exists; the list may be stale",
        ),
    }
}

/// Storage failures are fatal for the operation: log and surface.
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "storage failure");
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "storage_error",
        err.to_string(),
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn parse_category(s: &str) -> Result<larder_inventory::Category, axum::response::Response> {
    s.parse().map_err(|_| {
        json_error(
            StatusCode::BAD_REQUEST,
            "invalid_category",
            format!("category must be one of: 食品, 洗剤, トイレットペーパー, 調味料, その他 (got {s:?})"),
        )
    })
}
