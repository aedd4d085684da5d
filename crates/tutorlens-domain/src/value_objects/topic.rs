//! Topic identifier

use serde::{Deserialize, Serialize};

/// Identifier of the lesson unit a transcript belongs to
///
/// Selects the domain-vocabulary set. Any string is accepted; unknown
/// topics resolve to the default vocabulary in the lexicon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Topic(String);

impl Topic {
    /// Name of the fallback topic
    pub const DEFAULT: &'static str = "default";

    /// Create a topic from its identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Identifier as given by the caller
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Topic {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl From<&str> for Topic {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Topic {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
