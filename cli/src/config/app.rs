use super::{LoggingConfig, StorageConfig, limits::*, validation::ConfigValidationError};
use engine::config::ServicesConfig;
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    #[serde(default)]
    services: ServicesConfig,
    #[serde(default)]
    storage: StorageConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let timeout = self.services.request_timeout_secs();
        if !(MIN_REQUEST_TIMEOUT_SECS..=MAX_REQUEST_TIMEOUT_SECS).contains(&timeout) {
            errors.push(ConfigValidationError::RequestTimeout {
                configured: timeout,
                min_limit: MIN_REQUEST_TIMEOUT_SECS,
                max_limit: MAX_REQUEST_TIMEOUT_SECS,
            });
        }

        for (key, url) in [
            ("color_api_url", self.services.color_api_url()),
            ("product_api_url", self.services.product_api_url()),
        ] {
            if !is_http_url(url) {
                errors.push(ConfigValidationError::ServiceUrl {
                    key,
                    configured: url.to_string(),
                });
            }
        }

        let level = self.logging.level().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::LogLevel {
                configured: self.logging.level().to_string(),
            });
        }

        if self
            .storage
            .favorites_path()
            .is_some_and(|path| path.trim().is_empty())
        {
            errors.push(ConfigValidationError::FavoritesPath);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn services(&self) -> &ServicesConfig {
        &self.services
    }

    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    /// Applies command line overrides on top of file and environment values.
    pub fn with_overrides(mut self, favorites: Option<String>, log_level: Option<String>) -> Self {
        if favorites.is_some() {
            self.storage.favorites_path = favorites;
        }
        if log_level.is_some() {
            self.logging.level = log_level;
        }
        self
    }
}

fn is_http_url(url: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| url.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
}
