//! fxpad Flag Icons
//!
//! Fetches one flag image per supported currency. Any failure yields a
//! solid-colour placeholder, so callers always get something to show.

pub mod config;
pub mod error;
pub mod image;
pub mod loader;

pub use config::FlagConfig;
pub use error::FlagError;
pub use image::{FlagImage, FLAG_HEIGHT, FLAG_WIDTH, PLACEHOLDER_COLOR};
pub use loader::{FlagLoader, FlagSet};
