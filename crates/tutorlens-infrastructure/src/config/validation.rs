//! Configuration validation
//!
//! Run after every load so a bad file or environment override fails before
//! any service is built.

use tutorlens_domain::error::{Error, Result};

use super::AppConfig;
use crate::logging::parse_log_level;

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_logging_config(config)?;
    validate_embedding_config(config)?;
    validate_analysis_config(config)?;
    validate_clustering_config(config)?;
    Ok(())
}

fn validate_logging_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level).map(|_| ())
}

fn validate_embedding_config(config: &AppConfig) -> Result<()> {
    let embedding = &config.embedding;
    if embedding.provider.trim().is_empty() {
        return Err(Error::config("Embedding provider name cannot be empty"));
    }
    if embedding.timeout_secs == 0 {
        return Err(Error::config("Embedding timeout cannot be 0"));
    }
    if embedding.dimensions == Some(0) {
        return Err(Error::config("Embedding dimensions cannot be 0"));
    }
    if embedding.request_dimensions == Some(0) {
        return Err(Error::config("Embedding request_dimensions cannot be 0"));
    }
    Ok(())
}

fn validate_analysis_config(config: &AppConfig) -> Result<()> {
    if config.analysis.max_summary_points == 0 {
        return Err(Error::config("Summary must keep at least one point"));
    }
    Ok(())
}

fn validate_clustering_config(config: &AppConfig) -> Result<()> {
    let clustering = &config.clustering;
    if clustering.max_iterations == 0 {
        return Err(Error::config("Clustering max iterations cannot be 0"));
    }
    let threshold = clustering.convergence_threshold;
    if !(threshold > 0.0 && threshold <= 1.0) {
        return Err(Error::config(format!(
            "Clustering convergence threshold must be in (0, 1], got {threshold}"
        )));
    }
    Ok(())
}
