//! In-memory configuration source

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::{ConfigResult, ConfigSource};

/// In-memory configuration source
///
/// # Example
///
/// ```
/// use levelcast_core::config::{ConfigSource, MemoryConfigSource};
///
/// let source = MemoryConfigSource::new().with("log_level", "warn");
/// assert_eq!(source.get("log_level").unwrap().as_deref(), Some("warn"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryConfigSource {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(initial: HashMap<String, String>) -> Self {
        Self {
            values: RwLock::new(initial),
        }
    }

    /// Builder-style insert
    pub fn with(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values.write().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.values.write().remove(key)
    }

    pub fn clear(&self) {
        self.values.write().clear();
    }
}

impl ConfigSource for MemoryConfigSource {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }
}
