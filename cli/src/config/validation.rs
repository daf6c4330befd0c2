use super::app::AppConfig;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid request_timeout_secs: {configured} (min: {min_limit}, max: {max_limit})")]
    RequestTimeout {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid {key}: {configured} (expected an http or https URL)")]
    ServiceUrl { key: &'static str, configured: String },
    #[error("Invalid logging level: {configured}")]
    LogLevel { configured: String },
    #[error("Invalid favorites_path: path is empty")]
    FavoritesPath,
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::RequestTimeout {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Request timeout out of range!\n\n\
                    Your configured value: {configured} seconds\n\
                    Valid range: {min_limit} - {max_limit} seconds\n\n\
                    Please update services.request_timeout_secs in config.toml."
                )
            }
            ConfigValidationError::ServiceUrl { key, configured } => {
                format!(
                    "Service URL is not usable!\n\n\
                    Your configured value: {configured}\n\n\
                    Please set services.{key} to an http:// or https:// address."
                )
            }
            ConfigValidationError::LogLevel { configured } => {
                format!(
                    "Unknown log level '{configured}'!\n\n\
                    Please set logging.level to one of: {}.",
                    super::limits::LOG_LEVELS.join(", ")
                )
            }
            ConfigValidationError::FavoritesPath => {
                "Favorites path is empty!\n\n\
                Please remove storage.favorites_path or point it at a file."
                    .to_string()
            }
        }
    }
}

/// Configuration loading result
#[derive(Debug)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
    ValidationError(Vec<ConfigValidationError>),
}

impl ConfigLoadResult {
    /// Collapses the result into the validated configuration or a single
    /// user-facing message.
    pub fn into_result(self) -> Result<AppConfig, String> {
        match self {
            ConfigLoadResult::Success(config) => Ok(*config),
            ConfigLoadResult::LoadError(msg) | ConfigLoadResult::DeserializeError(msg) => Err(msg),
            ConfigLoadResult::ValidationError(errors) => Err(describe(&errors)),
        }
    }
}

/// Joins validation errors into one report.
fn describe(errors: &[ConfigValidationError]) -> String {
    let messages: Vec<String> = errors.iter().map(|e| e.user_message()).collect();
    format!(
        "Configuration validation failed:\n{}",
        messages.join("\n\n")
    )
}
