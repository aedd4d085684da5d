//! Infrastructure layer constants
//!
//! Domain tunables live in `tutorlens_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "tutorlens.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "tutorlens";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "TUTORLENS";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the configured filter
pub const LOG_ENV_VAR: &str = "TUTORLENS_LOG";

/// File name prefix used when the configured log path has no stem
pub const DEFAULT_LOG_FILE_PREFIX: &str = "tutorlens";

// ============================================================================
// EMBEDDING CONSTANTS
// ============================================================================

/// Provider used when none is configured
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "local";

/// Default per-call embedding timeout in seconds
pub const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 30;
