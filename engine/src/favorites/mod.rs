//! Durable favorites.
//!
//! The whole collection lives under one storage key as a JSON array of looks.
//! Records from older versions without an original palette are migrated on
//! read so resetting them stays safe.

mod storage;
mod store;

pub use storage::{FavoritesStorage, FileStorage, MemoryStorage};
pub use store::{FavoritesStore, LoadReport};
