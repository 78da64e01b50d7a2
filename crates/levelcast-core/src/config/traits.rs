//! Configuration source trait

use thiserror::Error;

/// Key holding the minimum severity to dispatch
pub const LOG_LEVEL_KEY: &str = "log_level";

/// Key-value lookup consulted once when an emitter is built
///
/// Implementations:
/// - `MemoryConfigSource`: in-memory map, for tests and embedding
/// - `EnvConfigSource`: process environment
/// - `FileConfigSource`: YAML file (user or workspace level)
/// - `ChainConfigSource`: first source with a value wins
pub trait ConfigSource: Send + Sync {
    /// Human-readable name of this source, used in diagnostics
    fn name(&self) -> &str;

    /// Look up a raw string value
    ///
    /// `Ok(None)` means the key is absent. `Err` means the source itself could
    /// not be read.
    fn get(&self, key: &str) -> ConfigResult<Option<String>>;

    fn has(&self, key: &str) -> bool {
        matches!(self.get(key), Ok(Some(_)))
    }
}

/// Errors that can occur while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Config source '{source_name}' failed: {message}")]
    Source { source_name: String, message: String },

    #[error("Configuration error: {0}")]
    Other(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
