//! REST API handlers.

pub mod printers;
pub mod receipt;
pub mod remote;

use axum::Json;
use serde_json::{Value, json};

/// Standard error response.
pub fn err_json(status: u16, message: &str) -> (axum::http::StatusCode, Json<Value>) {
    (
        axum::http::StatusCode::from_u16(status)
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
        Json(json!({ "status": "error", "error": message })),
    )
}

/// GET / – liveness message.
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Receipt Generator API is running. Go to /generate-receipt to generate a receipt image."
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn err_json_maps_known_status_codes() {
        let (status, _) = err_json(404, "missing");
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn err_json_falls_back_on_invalid_status() {
        let (status, _) = err_json(0, "broken");
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
