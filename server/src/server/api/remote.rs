//! Remote inventory forwarding API.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{Value, json};

use super::err_json;
use crate::app::AppState;
use crate::services::remote::{ForwardPayload, RemoteError, RemoteInventoryClient};

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

/// POST /send-data-to-remote – forward the payload and relay the response.
pub async fn send_data_to_remote(
    State(state): State<AppState>,
    Json(payload): Json<ForwardPayload>,
) -> ApiResult {
    let client = RemoteInventoryClient::new(
        state.http().clone(),
        state.config().remote_inventory_url.clone(),
    );

    match client.create_qr_code(&payload).await {
        Ok(data) => Ok(Json(json!({ "status": "success", "data": data }))),
        Err(RemoteError::Status { status }) => {
            tracing::warn!(status, "Remote inventory service rejected forwarded data");
            Err(err_json(status, "Failed to send data to remote API"))
        }
        Err(RemoteError::Network(e)) => {
            tracing::error!(error = %e, "Could not reach remote inventory service");
            Err(err_json(500, &e.to_string()))
        }
    }
}
