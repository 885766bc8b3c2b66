//! Runtime configuration — defaults plus environment overrides.

/// Immutable service configuration, built once at startup and shared through
/// [`crate::app::AppState`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    /// The single origin allowed to call this service cross-origin.
    pub allowed_origin: String,
    /// Shop name drawn at the top of every label.
    pub shop_title: String,
    /// Remote inventory QR-creation endpoint.
    pub remote_inventory_url: String,
    /// Default target printer; `None` uses the host default.
    pub printer_name: Option<String>,
    /// Skip the physical print while keeping the HTTP contract intact.
    pub dry_run: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 8000,
            allowed_origin: "http://localhost:5173".to_string(),
            shop_title: "SS SAREE & KID'S WEAR".to_string(),
            remote_inventory_url: "http://13.60.46.80:6001/api/inventory/createQRCode".to_string(),
            printer_name: None,
            dry_run: false,
        }
    }
}

impl AppConfig {
    /// Build the configuration from defaults and environment overrides.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("SERVER_PORT") {
            if let Ok(port) = v.parse::<u16>() {
                config.server_port = port;
            }
        }
        if let Ok(v) = std::env::var("ALLOWED_ORIGIN") {
            if !v.is_empty() {
                config.allowed_origin = v;
            }
        }
        if let Ok(v) = std::env::var("SHOP_TITLE") {
            if !v.is_empty() {
                config.shop_title = v;
            }
        }
        if let Ok(v) = std::env::var("REMOTE_INVENTORY_URL") {
            if !v.is_empty() {
                config.remote_inventory_url = v;
            }
        }
        if let Ok(v) = std::env::var("PRINTER_NAME") {
            if !v.is_empty() {
                config.printer_name = Some(v);
            }
        }
        if let Ok(v) = std::env::var("DRY_RUN_MODE") {
            config.dry_run = v == "true";
        }

        config
    }
}
