//! # Vibelook Engine
//!
//! Core library for generating makeup looks, editing their palettes and keeping
//! a durable collection of favorites. The engine never renders anything; a view
//! layer drives it through [`session::LookSession`] and receives typed results.
//!
//! ## Modules
//!
//! - [`common`] - Error taxonomy shared by every component
//! - [`config`] - External service endpoints and request limits
//! - [`favorites`] - Durable favorites storage with legacy record migration
//! - [`generator`] - Concurrent look generation from the external services
//! - [`model`] - Looks, colors, products and occasions
//! - [`palette`] - Palette editing and reset
//! - [`services`] - Color scheme and product catalog adapters
//! - [`session`] - Explicit application state implementing the view contract
//! - [`vibes`] - Static catalog of aesthetic styles

pub mod common;
pub mod config;
pub mod favorites;
pub mod generator;
pub mod model;
pub mod palette;
pub mod services;
pub mod session;
pub mod vibes;

pub use common::{LookError, LookResult};
pub use model::{Category, HexColor, Look, LookId, Occasion, Product, ProductSet};
pub use session::LookSession;
