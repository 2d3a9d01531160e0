use crate::error::AppError;

/// Application configuration loaded explicitly from environment
/// variables. The registry ships compiled into the binary, so everything
/// here is optional.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path to a registry JSON file overriding the compiled-in data.
    /// `None` uses the embedded registry.
    pub registry_path: Option<String>,
}

impl Config {
    /// Optional:
    /// - `SAGE_REGISTRY_PATH`: registry JSON to load instead of the
    ///   embedded copy; must exist if set.
    pub fn from_env() -> Result<Self, AppError> {
        let registry_path = std::env::var("SAGE_REGISTRY_PATH").ok();

        if let Some(path) = &registry_path {
            if !std::path::Path::new(path).exists() {
                return Err(AppError::Config(format!(
                    "SAGE_REGISTRY_PATH points at a missing file: {path}"
                )));
            }
        }

        Ok(Self { registry_path })
    }
}
