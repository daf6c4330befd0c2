//! # Vibelook
//!
//! Terminal shell over the Vibelook engine: one-shot commands for scripting and
//! an interactive session for generating a look, adjusting its swatches and
//! saving favorites.
//!
//! ## Modules
//!
//! - [`cli`] - Command line arguments and session command grammar
//! - [`commands`] - Subcommand handlers and the interactive session loop
//! - [`config`] - Configuration loading, validation and directory setup
//! - [`error`] - Shell error type
//! - [`logger`] - Logging configuration
//! - [`output`] - Plain text rendering
//!
//! This library interface enables integration testing by providing access to internal modules.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod output;

pub use error::{AppError, AppResult};
