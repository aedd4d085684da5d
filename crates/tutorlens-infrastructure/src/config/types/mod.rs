//! Configuration types module

pub mod app;
pub mod clustering;
pub mod embedding;
pub mod logging;

pub use app::AppConfig;
pub use clustering::ClusteringConfig;
pub use embedding::EmbeddingConfig;
pub use logging::LoggingConfig;
