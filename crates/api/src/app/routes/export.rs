use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::IntoResponse,
};

use larder_store::{export_snapshot, EXPORT_FILE};

use crate::app::errors;
use crate::app::services::AppServices;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Snapshot the full table to the fixed export file and hand the workbook
/// back as a download.
pub async fn download_export(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let table = match services.record_store().load() {
        Ok(t) => t,
        Err(e) => return errors::store_error_to_response(e),
    };

    let artifact = match export_snapshot(&table, services.data_dir()) {
        Ok(a) => a,
        Err(e) => return errors::store_error_to_response(e),
    };

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE}\""),
            ),
        ],
        artifact.bytes,
    )
        .into_response()
}
