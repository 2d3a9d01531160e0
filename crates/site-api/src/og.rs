/// Social-preview (Open Graph) configuration blob.
///
/// A small key-value document stored in the hosted edge-config service so
/// the generated preview card can be retitled without a redeploy. Reads
/// fall back to these defaults whenever the upstream is unreachable or
/// the key is missing; rendering the image itself happens elsewhere.
use serde::{Deserialize, Serialize};

pub const OG_CONFIG_KEY: &str = "og-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OgConfig {
    pub title: String,
    pub description: String,
    pub theme: String,
    pub accent_color: String,
}

impl Default for OgConfig {
    fn default() -> Self {
        Self {
            title: "The Sage Design System".to_string(),
            description: "Accessible React components, design tokens and patterns.".to_string(),
            theme: "dark".to_string(),
            accent_color: "#7c9a72".to_string(),
        }
    }
}

impl OgConfig {
    /// Validate a caller-supplied configuration before writing it
    /// upstream. Returns the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        if !matches!(self.theme.as_str(), "light" | "dark") {
            return Err(format!(
                "theme must be \"light\" or \"dark\", got {:?}",
                self.theme
            ));
        }
        if !self.accent_color.starts_with('#') {
            return Err("accent_color must be a hex color".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(OgConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_upstream_blobs_fill_from_defaults() {
        let parsed: OgConfig = serde_json::from_str(r#"{"title": "Custom title"}"#).unwrap();
        assert_eq!(parsed.title, "Custom title");
        assert_eq!(parsed.theme, OgConfig::default().theme);
        assert_eq!(parsed.accent_color, OgConfig::default().accent_color);
    }

    #[test]
    fn invalid_input_is_rejected_with_a_message() {
        let mut config = OgConfig::default();
        config.title = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = OgConfig::default();
        config.theme = "sepia".to_string();
        assert!(config.validate().unwrap_err().contains("theme"));
    }
}
