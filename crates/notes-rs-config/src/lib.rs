//! Configuration models and layered config loading.
//!
//! This crate owns the notes service settings schema and the logic that
//! merges defaults, JSON5 files, environment variables and CLI overrides
//! into the effective config consumed at startup.

mod error;
mod loader;
mod model;

/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// Layered config types and loader options.
pub use loader::{ConfigLayer, ConfigLayerSource, LayeredConfig, LayeredConfigOptions};
/// Configuration schema models.
pub use model::*;
