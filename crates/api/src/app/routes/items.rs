use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use larder_core::ItemId;
use larder_inventory::{self as inventory, ItemFilter, NewItem};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(add_item))
        .route("/:id/increase", post(increase))
        .route("/:id/decrease", post(decrease))
        .route("/:id", axum::routing::delete(delete_item))
}

/// The original shell's "all categories" dropdown sentinel, accepted for
/// compatibility alongside simply omitting the parameter.
const ALL_CATEGORIES: &str = "すべて";

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::ListParams>,
) -> axum::response::Response {
    let category = match params.category.as_deref() {
        None | Some(ALL_CATEGORIES) => None,
        Some(label) => match errors::parse_category(label) {
            Ok(category) => Some(category),
            Err(resp) => return resp,
        },
    };

    let table = match services.record_store().load() {
        Ok(t) => t,
        Err(e) => return errors::store_error_to_response(e),
    };

    let criteria = ItemFilter {
        name_contains: params.name,
        category,
    };
    let hits = inventory::filter(&table, &criteria);

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "count": hits.len(),
            "items": dto::items_to_json(hits),
        })),
    )
        .into_response()
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::AddItemRequest>,
) -> axum::response::Response {
    let mut draft = NewItem {
        name: body.name,
        quantity: body.quantity,
        category: body.category,
        expiry: body.expiry,
        note: body.note,
        image_path: None,
        alert_threshold: body.alert_threshold,
    };

    // Reject a bad draft before any bytes hit the image directory.
    if let Err(e) = draft.validate() {
        return errors::domain_error_to_response(e);
    }

    if let Some(image) = body.image {
        let bytes = match BASE64.decode(image.data.as_bytes()) {
            Ok(b) => b,
            Err(_) => {
                return errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "invalid_image",
                    "image data is not valid base64",
                )
            }
        };
        match services.images().save(&bytes, &image.filename) {
            Ok(path) => draft.image_path = Some(path),
            Err(e) => return errors::store_error_to_response(e),
        }
    }

    let mut table = match services.record_store().load() {
        Ok(t) => t,
        Err(e) => return errors::store_error_to_response(e),
    };

    let id = match table.add(draft) {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };

    if let Err(e) = services.record_store().save(&table) {
        return errors::store_error_to_response(e);
    }

    tracing::info!(%id, "added item");
    (
        StatusCode::CREATED,
        Json(serde_json::json!({ "id": id.to_string() })),
    )
        .into_response()
}

pub async fn increase(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::IncreaseRequest>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid item id"),
    };

    let mut table = match services.record_store().load() {
        Ok(t) => t,
        Err(e) => return errors::store_error_to_response(e),
    };

    let quantity = match table.increase(id, body.amount) {
        Ok(q) => q,
        Err(e) => return errors::domain_error_to_response(e),
    };

    if let Err(e) = services.record_store().save(&table) {
        return errors::store_error_to_response(e);
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({ "id": id.to_string(), "quantity": quantity })),
    )
        .into_response()
}

pub async fn decrease(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::DecreaseRequest>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid item id"),
    };

    let mut table = match services.record_store().load() {
        Ok(t) => t,
        Err(e) => return errors::store_error_to_response(e),
    };

    let outcome = match table.decrease(id, body.amount, body.auto_delete) {
        Ok(o) => o,
        Err(e) => return errors::domain_error_to_response(e),
    };

    if let Err(e) = services.record_store().save(&table) {
        return errors::store_error_to_response(e);
    }

    if outcome.removed {
        tracing::info!(%id, "auto-deleted item at zero quantity");
    }
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "id": id.to_string(),
            "quantity": outcome.remaining,
            "removed": outcome.removed,
        })),
    )
        .into_response()
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Query(params): Query<dto::DeleteParams>,
) -> axum::response::Response {
    // Deletion is destructive; the shell must send the confirmation signal.
    if !params.confirm {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "confirmation_required",
            "pass confirm=true to delete this item",
        );
    }

    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid item id"),
    };

    let mut table = match services.record_store().load() {
        Ok(t) => t,
        Err(e) => return errors::store_error_to_response(e),
    };

    let removed = match table.remove(id) {
        Ok(item) => item,
        Err(e) => return errors::domain_error_to_response(e),
    };

    if let Err(e) = services.record_store().save(&table) {
        return errors::store_error_to_response(e);
    }

    tracing::info!(%id, name = %removed.name, "deleted item");
    (
        StatusCode::OK,
        Json(serde_json::json!({ "id": id.to_string(), "deleted": true })),
    )
        .into_response()
}
