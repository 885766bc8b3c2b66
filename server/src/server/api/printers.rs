//! Printer inspection API.

use axum::Json;
use axum::http::StatusCode;
use serde_json::{Value, json};

use super::err_json;

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

/// GET /printers – list printers visible to the platform adapter.
pub async fn list_printers() -> ApiResult {
    let names = tokio::task::spawn_blocking(|| {
        let host = pageprinter::platform_host()?;
        host.list_printers()
    })
    .await
    .map_err(|e| err_json(500, &format!("printer listing task failed: {e}")))?
    .map_err(|e| err_json(500, &e.to_string()))?;

    let count = names.len();
    Ok(Json(json!({ "printers": names, "count": count })))
}
