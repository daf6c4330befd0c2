use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub mod app;
pub mod limits;
pub mod setup;
pub mod validation;

pub use app::AppConfig;
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Prefix of environment overrides, e.g. `VIBELOOK__SERVICES__REQUEST_TIMEOUT_SECS`
pub const ENV_PREFIX: &str = "VIBELOOK";

/// Loads configuration and applies command line overrides, then validates the
/// merged result once.
pub fn resolve_config(
    path: Option<&Path>,
    favorites: Option<String>,
    log_level: Option<String>,
) -> ConfigLoadResult {
    match load_config(path) {
        ConfigLoadResult::Success(config) => {
            let config = (*config).with_overrides(favorites, log_level);
            match config.validate() {
                Ok(()) => ConfigLoadResult::Success(Box::new(config)),
                Err(errors) => ConfigLoadResult::ValidationError(errors),
            }
        }
        other => other,
    }
}

/// Loads configuration from an optional `config.toml` and the environment.
///
/// An explicit `path` must exist. Without one the file is discovered with
/// [`setup::find_config_file`] and may be absent, in which case defaults and
/// environment values are used. Values are not validated here; see
/// [`resolve_config`].
pub fn load_config(path: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let file_source = match path {
        Some(path) => Some(File::from(path).required(true)),
        None => setup::find_config_file().map(|found| {
            log::debug!("Using config file {}", found.display());
            File::from(found).required(false)
        }),
    };

    let env_source = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true);

    let mut builder = Config::builder();
    if let Some(file_source) = file_source {
        builder = builder.add_source(file_source);
    }

    // environment entries override file values when present
    let config = match builder.add_source(env_source).build() {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => ConfigLoadResult::Success(Box::new(app_config)),
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Where favorites are kept
#[derive(Debug, Deserialize, Default, Clone)]
pub struct StorageConfig {
    favorites_path: Option<String>,
}

impl StorageConfig {
    pub fn favorites_path(&self) -> Option<&str> {
        self.favorites_path.as_deref()
    }

    /// Configured favorites file, or the default under the user data dir.
    pub fn resolve_favorites_path(&self) -> Result<PathBuf, setup::SetupError> {
        match self.favorites_path() {
            Some(path) => Ok(PathBuf::from(path)),
            None => setup::default_favorites_path(),
        }
    }
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;
    use engine::services::HarmonyMode;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn test_file_values_are_loaded() {
        let (_dir, path) = write_config(
            r#"
            [services]
            color_api_url = "http://localhost:8080/"
            request_timeout_secs = 30
            harmony_mode = "monochrome-light"

            [storage]
            favorites_path = "/tmp/vibelook-test/favorites.json"

            [logging]
            level = "debug"
            "#,
        );

        let config = assert_ok!(load_config(Some(&path)).into_result());
        assert_eq!(config.services().color_api_url(), "http://localhost:8080");
        assert_eq!(config.services().request_timeout_secs(), 30);
        assert_eq!(config.services().harmony_mode(), HarmonyMode::MonochromeLight);
        assert_eq!(
            config.storage().favorites_path(),
            Some("/tmp/vibelook-test/favorites.json")
        );
        assert_eq!(config.logging().level(), "debug");
        assert_none!(config.logging().file());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let (_dir, path) = write_config("");
        let config = assert_ok!(load_config(Some(&path)).into_result());
        assert_eq!(config.services().request_timeout_secs(), 10);
        assert_eq!(config.logging().level(), "info");
    }

    #[test]
    fn test_missing_explicit_file_is_load_error() {
        let dir = TempDir::new().unwrap();
        let result = load_config(Some(&dir.path().join("absent.toml")));
        assert_matches!(result, ConfigLoadResult::LoadError(_));
    }

    #[test]
    fn test_validation_errors_are_collected() {
        let (_dir, path) = write_config(
            r#"
            [services]
            product_api_url = "ftp://catalog"
            request_timeout_secs = 0

            [logging]
            level = "loud"
            "#,
        );

        let ConfigLoadResult::ValidationError(errors) = resolve_config(Some(&path), None, None)
        else {
            panic!("expected validation errors");
        };
        assert_eq!(errors.len(), 3);
        assert_matches!(
            &errors[0],
            ConfigValidationError::RequestTimeout { configured: 0, .. }
        );
        assert_matches!(
            &errors[1],
            ConfigValidationError::ServiceUrl { key: "product_api_url", .. }
        );
        assert_matches!(&errors[2], ConfigValidationError::LogLevel { .. });

        let message = assert_err!(resolve_config(Some(&path), None, None).into_result());
        assert!(message.contains("request_timeout_secs"));
    }

    #[test]
    fn test_log_level_flag_overrides_invalid_file_value() {
        let (_dir, path) = write_config("[logging]\nlevel = \"loud\"\n");

        let config = assert_ok!(
            resolve_config(Some(&path), None, Some("debug".to_string())).into_result()
        );
        assert_eq!(config.logging().level(), "debug");
    }

    #[test]
    fn test_load_does_not_validate() {
        let (_dir, path) = write_config("[services]\nrequest_timeout_secs = 0\n");
        let config = assert_ok!(load_config(Some(&path)).into_result());
        assert_eq!(config.services().request_timeout_secs(), 0);
        assert_err!(config.validate());
    }

    #[test]
    fn test_unknown_harmony_mode_fails_deserialization() {
        let (_dir, path) = write_config("[services]\nharmony_mode = \"rainbow\"\n");
        assert_matches!(
            load_config(Some(&path)),
            ConfigLoadResult::DeserializeError(_)
        );
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let config = AppConfig::default()
            .with_overrides(Some("/data/favs.json".into()), Some("warn".into()));
        assert_eq!(config.storage().favorites_path(), Some("/data/favs.json"));
        assert_eq!(config.logging().level(), "warn");
        assert_eq!(
            assert_ok!(config.storage().resolve_favorites_path()),
            PathBuf::from("/data/favs.json")
        );
    }
}
