use sage_common::edge_config::EdgeConfigClientConfig;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Registry JSON file overriding the compiled-in data; `None` uses
    /// the embedded registry.
    pub registry_path: Option<String>,
    /// Upstream edge-config service. `None` disables the upstream: the
    /// OG endpoint serves built-in defaults and rejects writes.
    pub edge_config: Option<EdgeConfigClientConfig>,
}

impl Config {
    /// Optional:
    /// - `SITE_API_LISTEN_ADDR` (default "127.0.0.1:8787")
    /// - `SAGE_REGISTRY_PATH`: registry JSON to load instead of the
    ///   embedded copy; must exist if set.
    /// - `EDGE_CONFIG_URL` and friends, see [`EdgeConfigClientConfig`].
    pub fn from_env() -> Result<Self, AppError> {
        let listen_addr = std::env::var("SITE_API_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8787".to_string());

        let registry_path = std::env::var("SAGE_REGISTRY_PATH").ok();
        if let Some(path) = &registry_path {
            if !std::path::Path::new(path).exists() {
                return Err(AppError::Config(format!(
                    "SAGE_REGISTRY_PATH points at a missing file: {path}"
                )));
            }
        }

        Ok(Self {
            listen_addr,
            registry_path,
            edge_config: EdgeConfigClientConfig::from_env(),
        })
    }
}
