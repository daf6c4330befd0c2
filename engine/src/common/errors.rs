use std::time::Duration;
use thiserror::Error;

/// Errors produced by the look engine.
///
/// The variants follow the propagation rules of the engine's components:
///
/// ## External Service Errors
/// - [`ServiceUnavailable`] - transport failure, timeout or non-success status
/// - [`ParseError`] - a service answered with a body that could not be read
///
/// Product catalog failures never reach the caller as one of these; the
/// affected category degrades to an empty list instead. A palette failure
/// during generation is wrapped in [`GenerationFailed`].
///
/// ## Palette Editing Errors
/// - [`InvalidIndex`] - the palette position does not exist
/// - [`InvalidColor`] - the value is not a hex color
///
/// ## Storage Errors
/// - [`StorageCorrupt`] - persisted favorites could not be parsed; reported by
///   the store and recovered as an empty collection, never raised
/// - [`Storage`] - reading or writing durable storage failed
///
/// ## Lookup and State Errors
/// - [`NotFound`] - unknown vibe key or favorite id
/// - [`NoCurrentLook`] - a session operation needs a generated look first
///
/// # Examples
///
/// ```no_run
/// use engine::common::LookError;
///
/// fn describe(error: &LookError) -> &'static str {
///     match error {
///         LookError::GenerationFailed { .. } => "try again in a moment",
///         LookError::InvalidColor { .. } => "use a value like #B91C1C",
///         LookError::InvalidIndex { .. } => "pick a swatch between 0 and 4",
///         _ => "something went wrong",
///     }
/// }
/// ```
///
/// [`ServiceUnavailable`]: LookError::ServiceUnavailable
/// [`ParseError`]: LookError::ParseError
/// [`GenerationFailed`]: LookError::GenerationFailed
/// [`InvalidIndex`]: LookError::InvalidIndex
/// [`InvalidColor`]: LookError::InvalidColor
/// [`StorageCorrupt`]: LookError::StorageCorrupt
/// [`Storage`]: LookError::Storage
/// [`NotFound`]: LookError::NotFound
/// [`NoCurrentLook`]: LookError::NoCurrentLook
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookError {
    /// An external service could not be reached or answered with a failure.
    ///
    /// Timeouts are reported through this variant as well.
    #[error("{service} unavailable: {reason}")]
    ServiceUnavailable { service: String, reason: String },

    /// An external service answered, but the body did not have the expected shape.
    #[error("{service} returned an unreadable response: {reason}")]
    ParseError { service: String, reason: String },

    /// Palette position outside `0..len`.
    #[error("Palette index {index} is out of range (palette has {len} colors)")]
    InvalidIndex { index: usize, len: usize },

    /// Value is not a `#RGB` or `#RRGGBB` hex color.
    #[error("Invalid hex color: {value:?}")]
    InvalidColor { value: String },

    /// Lookup by key or id found nothing.
    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },

    /// Persisted favorites exist but cannot be parsed.
    #[error("Favorites at {location} are corrupt: {reason}")]
    StorageCorrupt { location: String, reason: String },

    /// Reading or writing durable storage failed.
    #[error("Favorites storage error at {location}: {reason}")]
    Storage { location: String, reason: String },

    /// The palette could not be fetched, so no look was produced.
    #[error("Look generation failed: {source}")]
    GenerationFailed {
        #[source]
        source: Box<LookError>,
    },

    /// The session has not generated or restored a look yet.
    #[error("No current look, generate one first")]
    NoCurrentLook,

    /// The HTTP client could not be built.
    #[error("HTTP client creation failed: {reason}")]
    Client { reason: String },
}

impl LookError {
    pub fn service_unavailable(service: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            service: service.into(),
            reason: reason.into(),
        }
    }

    pub fn parse_error(service: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ParseError {
            service: service.into(),
            reason: reason.into(),
        }
    }

    /// A request that exceeded its deadline counts as the service being unavailable.
    pub fn timeout(service: impl Into<String>, after: Duration) -> Self {
        Self::ServiceUnavailable {
            service: service.into(),
            reason: format!("request timed out after {}ms", after.as_millis()),
        }
    }

    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    pub fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }

    pub fn storage(location: impl Into<String>, reason: impl ToString) -> Self {
        Self::Storage {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    pub fn storage_corrupt(location: impl Into<String>, reason: impl ToString) -> Self {
        Self::StorageCorrupt {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    pub fn generation_failed(cause: LookError) -> Self {
        Self::GenerationFailed {
            source: Box::new(cause),
        }
    }

    /// True for failures of an external service (transport or body format).
    pub fn is_service_failure(&self) -> bool {
        match self {
            LookError::ServiceUnavailable { .. } | LookError::ParseError { .. } => true,
            LookError::GenerationFailed { source } => source.is_service_failure(),
            _ => false,
        }
    }

    /// True when the caller supplied a value the engine rejected.
    pub fn is_rejected_input(&self) -> bool {
        matches!(
            self,
            LookError::InvalidIndex { .. }
                | LookError::InvalidColor { .. }
                | LookError::NotFound { .. }
                | LookError::NoCurrentLook
        )
    }
}

pub type LookResult<T> = Result<T, LookError>;
