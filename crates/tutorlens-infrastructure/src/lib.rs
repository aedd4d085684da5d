//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns for TutorLens.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered TOML + environment configuration with Figment |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`bootstrap`] | Builds services from configuration |
//! | [`input`] | Transcript, text list and class roster readers |
//! | [`constants`] | Infrastructure constants |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod input;
pub mod logging;

pub use bootstrap::{AppContext, build_embedding_provider, init_app};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
