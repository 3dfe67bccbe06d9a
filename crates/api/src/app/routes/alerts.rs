use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use larder_inventory::{expired, low_stock};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Low-stock and expired subsets, computed fresh against the latest table.
pub async fn get_alerts(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let table = match services.record_store().load() {
        Ok(t) => t,
        Err(e) => return errors::store_error_to_response(e),
    };

    let low = low_stock(&table);
    let past = expired(&table, services.today());

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "low_stock": dto::items_to_json(low),
            "expired": dto::items_to_json(past),
        })),
    )
        .into_response()
}
