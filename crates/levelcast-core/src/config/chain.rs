//! Chained configuration source with fallback behavior

use std::sync::Arc;

use super::traits::{ConfigError, ConfigResult, ConfigSource};

/// Tries several sources in order and returns the first value found
///
/// A source that fails to read is skipped; its error is only returned when
/// no later source has a value either.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use levelcast_core::config::{ChainConfigSource, ConfigSource, EnvConfigSource, MemoryConfigSource};
///
/// let overrides = Arc::new(MemoryConfigSource::new().with("log_level", "trace"));
/// let env = Arc::new(EnvConfigSource::new());
///
/// let chain = ChainConfigSource::new(vec![overrides, env]);
/// assert_eq!(chain.get("log_level").unwrap().as_deref(), Some("trace"));
/// ```
pub struct ChainConfigSource {
    sources: Vec<Arc<dyn ConfigSource>>,
}

impl ChainConfigSource {
    pub fn new(sources: Vec<Arc<dyn ConfigSource>>) -> Self {
        Self { sources }
    }

    pub fn sources(&self) -> &[Arc<dyn ConfigSource>] {
        &self.sources
    }

    /// Find the first source that has a value for `key`
    pub fn find_source(&self, key: &str) -> Option<&Arc<dyn ConfigSource>> {
        self.sources.iter().find(|s| s.has(key))
    }
}

impl std::fmt::Debug for ChainConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.sources.iter().map(|s| s.name()).collect();
        f.debug_struct("ChainConfigSource").field("sources", &names).finish()
    }
}

impl ConfigSource for ChainConfigSource {
    fn name(&self) -> &str {
        "chain"
    }

    fn get(&self, key: &str) -> ConfigResult<Option<String>> {
        let mut first_error: Option<ConfigError> = None;

        for source in &self.sources {
            match source.get(key) {
                Ok(Some(value)) => return Ok(Some(value)),
                Ok(None) => {}
                Err(e) => {
                    if first_error.is_none() {
                        first_error = Some(ConfigError::Source {
                            source_name: source.name().to_string(),
                            message: e.to_string(),
                        });
                    }
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(None),
        }
    }
}
