use crate::services::HarmonyMode;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_COLOR_API_URL: &str = "https://www.thecolorapi.com";
pub const DEFAULT_PRODUCT_API_URL: &str = "https://makeup-api.herokuapp.com";

/// Endpoints and limits for the external services.
///
/// Every field is optional so the section can be omitted from configuration;
/// accessors supply the defaults.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ServicesConfig {
    /// Base URL of the color scheme service (default: The Color API)
    color_api_url: Option<String>,
    /// Base URL of the product catalog service (default: makeup API)
    product_api_url: Option<String>,
    /// Per-request deadline in seconds (default: 10)
    request_timeout_secs: Option<u64>,
    /// Harmony rule for derived palettes (default: analogic)
    harmony_mode: Option<HarmonyMode>,
}

impl ServicesConfig {
    /// Configuration pointing both services at the given base URLs.
    pub fn new(color_api_url: impl Into<String>, product_api_url: impl Into<String>) -> Self {
        Self {
            color_api_url: Some(color_api_url.into()),
            product_api_url: Some(product_api_url.into()),
            request_timeout_secs: None,
            harmony_mode: None,
        }
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = Some(secs);
        self
    }

    pub fn with_harmony_mode(mut self, mode: HarmonyMode) -> Self {
        self.harmony_mode = Some(mode);
        self
    }

    pub fn color_api_url(&self) -> &str {
        self.color_api_url
            .as_deref()
            .unwrap_or(DEFAULT_COLOR_API_URL)
            .trim_end_matches('/')
    }

    pub fn product_api_url(&self) -> &str {
        self.product_api_url
            .as_deref()
            .unwrap_or(DEFAULT_PRODUCT_API_URL)
            .trim_end_matches('/')
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs.unwrap_or(10)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs())
    }

    pub fn harmony_mode(&self) -> HarmonyMode {
        self.harmony_mode.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServicesConfig::default();
        assert_eq!(config.color_api_url(), DEFAULT_COLOR_API_URL);
        assert_eq!(config.product_api_url(), DEFAULT_PRODUCT_API_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.harmony_mode(), HarmonyMode::Analogic);
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ServicesConfig::new("http://localhost:9000/", "http://localhost:9001");
        assert_eq!(config.color_api_url(), "http://localhost:9000");
        assert_eq!(config.product_api_url(), "http://localhost:9001");
    }

    #[test]
    fn test_deserializes_kebab_case_mode() {
        let config: ServicesConfig =
            serde_json::from_str(r#"{"harmony_mode":"analogic-complement","request_timeout_secs":3}"#)
                .unwrap();
        assert_eq!(config.harmony_mode(), HarmonyMode::AnalogicComplement);
        assert_eq!(config.request_timeout_secs(), 3);
    }
}
