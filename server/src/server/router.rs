use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use super::api;
use crate::app::AppState;

/// Create the axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config().allowed_origin);

    Router::new()
        .route("/", get(api::root))
        .route("/generate-receipt", post(api::receipt::generate_receipt))
        .route("/send-data-to-remote", post(api::remote::send_data_to_remote))
        .route("/printers", get(api::printers::list_printers))
        .layer(cors)
        .with_state(state)
}

/// CORS policy: one allowed origin, any method, any header.
fn cors_layer(origin: &str) -> CorsLayer {
    let allowed = origin.parse::<HeaderValue>().unwrap_or_else(|_| {
        tracing::warn!(origin, "Configured CORS origin is not a valid header value");
        HeaderValue::from_static("http://localhost:5173")
    });

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn router_builds_with_default_config() {
        let state = AppState::new(AppConfig::default());
        let _router = create_router(state);
    }

    #[test]
    fn invalid_cors_origin_falls_back() {
        let _layer = cors_layer("not a header\nvalue");
    }
}
