//! Shared application state.

use std::sync::Arc;

use crate::config::AppConfig;

/// State shared across request handlers. Cheap to clone; the config is
/// immutable after startup.
#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
    http: reqwest::Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }
}
