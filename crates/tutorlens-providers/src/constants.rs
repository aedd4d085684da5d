//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in tutorlens-domain) and infrastructure
//! constants.

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Model name reported by the local term-frequency provider
pub const LOCAL_EMBEDDING_MODEL: &str = "local-tf";

/// OpenAI text-embedding-3-small dimension
pub const EMBEDDING_DIMENSION_OPENAI_SMALL: usize = 1536;

/// OpenAI text-embedding-3-large dimension
pub const EMBEDDING_DIMENSION_OPENAI_LARGE: usize = 3072;

/// OpenAI text-embedding-ada-002 dimension
pub const EMBEDDING_DIMENSION_OPENAI_ADA: usize = 1536;

/// Ollama nomic-embed-text dimension
pub const EMBEDDING_DIMENSION_OLLAMA_NOMIC: usize = 768;

/// Ollama all-minilm dimension
pub const EMBEDDING_DIMENSION_OLLAMA_MINILM: usize = 384;

/// Ollama mxbai-embed-large dimension
pub const EMBEDDING_DIMENSION_OLLAMA_MXBAI: usize = 1024;

/// Ollama default dimension
pub const EMBEDDING_DIMENSION_OLLAMA_DEFAULT: usize = 768;

// ============================================================================
// EMBEDDING API CONSTANTS
// ============================================================================

/// Default OpenAI-compatible API base URL
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default OpenAI embedding model
pub const OPENAI_DEFAULT_MODEL: &str = "text-embedding-3-small";

/// Default Ollama server URL
pub const OLLAMA_DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default Ollama embedding model
pub const OLLAMA_DEFAULT_MODEL: &str = "nomic-embed-text";

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type header value
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Prefix of the error raised when a request exceeds its timeout
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";
