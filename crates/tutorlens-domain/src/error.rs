//! Error handling types
//!
//! Scorers and the clustering engine are total and never produce these.
//! Failures only arise where TutorLens touches the outside world: transcript
//! and roster files, configuration sources, and a remote embedding service.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed cause kept behind a contextual message
pub type ErrorSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for TutorLens
#[derive(Error, Debug)]
pub enum Error {
    /// A transcript, roster or config file could not be read or written
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<ErrorSource>,
    },

    /// Transcript or roster JSON that does not match the expected shape
    ///
    /// A turn missing `role` or `content` ends up here.
    #[error("JSON parsing error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// An input file that does not exist
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    /// The embedding service answered, but not with usable vectors
    #[error("Embedding provider error: {message}")]
    Embedding { message: String },

    /// The embedding service could not be reached in time
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<ErrorSource>,
    },

    /// Settings that failed to load or validate
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<ErrorSource>,
    },

    /// Any other failure wrapped with caller context
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        message: String,
        #[source]
        source: Option<ErrorSource>,
    },
}

impl Error {
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn embedding<S: Into<String>>(message: S) -> Self {
        Self::Embedding {
            message: message.into(),
        }
    }

    /// Transport failure talking to an embedding service
    pub fn network<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }
}
