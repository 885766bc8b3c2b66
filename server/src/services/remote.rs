//! Outbound client for the remote inventory service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload forwarded verbatim to the inventory service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForwardPayload {
    #[serde(rename = "supplierId")]
    pub supplier_id: String,
    pub id: String,
}

/// Errors from the forwarding path.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("remote service returned status {status}")]
    Status { status: u16 },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Thin client over the configured inventory endpoint.
pub struct RemoteInventoryClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RemoteInventoryClient {
    pub fn new(http: reqwest::Client, endpoint: String) -> Self {
        Self { http, endpoint }
    }

    /// POST the payload as JSON and relay the remote's JSON response.
    ///
    /// Any status other than 200 is surfaced as [`RemoteError::Status`]. No
    /// retries, no timeout beyond the transport default.
    pub async fn create_qr_code(&self, payload: &ForwardPayload) -> Result<Value, RemoteError> {
        let resp = self.http.post(&self.endpoint).json(payload).send().await?;

        let status = resp.status().as_u16();
        if status != 200 {
            return Err(RemoteError::Status { status });
        }

        Ok(resp.json::<Value>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::http::StatusCode;
    use axum::routing::post;

    fn payload() -> ForwardPayload {
        ForwardPayload {
            supplier_id: "sup-1".to_string(),
            id: "42".to_string(),
        }
    }

    async fn serve(router: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/")
    }

    #[test]
    fn payload_serializes_with_remote_field_casing() {
        let json = serde_json::to_value(payload()).unwrap();
        assert_eq!(json, serde_json::json!({ "supplierId": "sup-1", "id": "42" }));
    }

    #[tokio::test]
    async fn success_relays_the_remote_json() {
        let router = axum::Router::new().route(
            "/",
            post(|| async { Json(serde_json::json!({ "created": true })) }),
        );
        let endpoint = serve(router).await;

        let client = RemoteInventoryClient::new(reqwest::Client::new(), endpoint);
        let data = client.create_qr_code(&payload()).await.unwrap();
        assert_eq!(data, serde_json::json!({ "created": true }));
    }

    #[tokio::test]
    async fn non_200_status_is_surfaced() {
        let router = axum::Router::new().route(
            "/",
            post(|| async { (StatusCode::NOT_FOUND, "no such supplier") }),
        );
        let endpoint = serve(router).await;

        let client = RemoteInventoryClient::new(reqwest::Client::new(), endpoint);
        let err = client.create_qr_code(&payload()).await.unwrap_err();
        assert!(matches!(err, RemoteError::Status { status: 404 }));
    }

    #[tokio::test]
    async fn connection_failure_is_a_network_error() {
        // Bind and drop to get a port nothing is listening on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = RemoteInventoryClient::new(reqwest::Client::new(), format!("http://{addr}/"));
        let err = client.create_qr_code(&payload()).await.unwrap_err();
        assert!(matches!(err, RemoteError::Network(_)));
    }
}
