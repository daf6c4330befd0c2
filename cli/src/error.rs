use crate::config::setup::SetupError;
use engine::LookError;
use thiserror::Error;

/// Errors surfaced by the Vibelook shell.
///
/// Engine rejections inside the interactive session are printed and the loop
/// continues; only startup failures (configuration, setup, logging) end the
/// process.
///
/// - [`Config`] - configuration could not be loaded or failed validation
/// - [`Setup`] - data or config directories could not be determined or created
/// - [`Engine`] - a typed rejection from the engine
/// - [`Io`] - terminal input or output failed
/// - [`Command`] - a shell command line could not be understood
///
/// [`Config`]: AppError::Config
/// [`Setup`]: AppError::Setup
/// [`Engine`]: AppError::Engine
/// [`Io`]: AppError::Io
/// [`Command`]: AppError::Command
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Setup Error: {0}")]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Engine(#[from] LookError),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Command(String),
}

impl AppError {
    /// Short hint printed under an error in the interactive session.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            AppError::Engine(LookError::NoCurrentLook) => {
                Some("Generate a look first, e.g. `generate soft-glam`.")
            }
            AppError::Engine(LookError::NotFound { kind: "vibe", .. }) => {
                Some("Run `vibes` to see the available styles.")
            }
            AppError::Engine(LookError::NotFound { kind: "occasion", .. }) => Some(
                "Occasions: everyday, work, date, party, wedding, night-out, brunch.",
            ),
            AppError::Engine(LookError::NotFound { kind: "favorite", .. }) => {
                Some("Run `favorites` to see saved look ids.")
            }
            AppError::Engine(LookError::InvalidIndex { .. }) => {
                Some("Swatch positions start at 0.")
            }
            AppError::Engine(LookError::InvalidColor { .. }) => {
                Some("Colors are hex values such as #F4C2C2 or #fcc.")
            }
            AppError::Engine(e) if e.is_service_failure() => {
                Some("The color service could not be reached. Try again in a moment.")
            }
            AppError::Command(_) => Some("Type `help` for the list of commands."),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
