//! Configuration management
//!
//! Layered loading with Figment: built-in defaults, then a TOML file, then
//! `TUTORLENS_` environment variables.

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
pub use validation::validate_app_config;
