//! Error extension utilities
//!
//! Context helpers that turn foreign errors (figment, toml, std I/O) into
//! the domain error type.

use std::fmt;
use tutorlens_domain::error::{Error, ErrorSource, Result};

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```no_run
/// use tutorlens_infrastructure::error_ext::ErrorContext;
///
/// # fn load() -> tutorlens_domain::Result<String> {
/// let path = std::path::Path::new("transcript.json");
/// let content = std::fs::read_to_string(path)
///     .io_context(format!("Failed to read transcript: {}", path.display()))?;
/// # Ok(content)
/// # }
/// ```
pub trait ErrorContext<T> {
    /// Add context to a Result, converting the error to an infrastructure error
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context with lazy evaluation for expensive context creation
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;

    /// Add context for I/O operations
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| {
            wrap(err, &context, |message, source| Error::Infrastructure {
                message,
                source: Some(source),
            })
        })
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            wrap(err, &f(), |message, source| Error::Infrastructure {
                message,
                source: Some(source),
            })
        })
    }

    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| {
            wrap(err, &context, |message, source| Error::Io {
                message,
                source: Some(source),
            })
        })
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| {
            wrap(err, &context, |message, source| Error::Configuration {
                message,
                source: Some(source),
            })
        })
    }
}

fn wrap<E, C>(err: E, context: &C, build: impl FnOnce(String, ErrorSource) -> Error) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
    C: fmt::Display,
{
    build(format!("{context}: {err}"), Box::new(err))
}
