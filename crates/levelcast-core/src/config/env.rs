//! Environment variable configuration source

use std::collections::HashMap;
use std::env;

use once_cell::sync::Lazy;

use super::traits::{ConfigResult, ConfigSource};

/// Unprefixed variables also accepted for a key, checked after the prefixed one
static ENV_ALIASES: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("log_level", vec!["LOG_LEVEL"]);
    m
});

/// Reads configuration from environment variables
///
/// A key maps to `<PREFIX>_<KEY>` in uppercase, so with the default prefix
/// `log_level` is read from `LEVELCAST_LOG_LEVEL`, then from `LOG_LEVEL`.
/// Empty values count as absent.
#[derive(Debug, Clone)]
pub struct EnvConfigSource {
    prefix: String,
}

impl Default for EnvConfigSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvConfigSource {
    pub fn new() -> Self {
        Self::with_prefix("LEVELCAST")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Primary variable name for a key
    pub fn var_name(&self, key: &str) -> String {
        format!("{}_{}", self.prefix, key).to_uppercase()
    }

    pub fn aliases_for(key: &str) -> &'static [&'static str] {
        ENV_ALIASES.get(key).map(|v| v.as_slice()).unwrap_or(&[])
    }

    fn read(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.is_empty())
    }
}

impl ConfigSource for EnvConfigSource {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &str) -> ConfigResult<Option<String>> {
        if let Some(value) = Self::read(&self.var_name(key)) {
            return Ok(Some(value));
        }

        Ok(Self::aliases_for(key).iter().find_map(|name| Self::read(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_name() {
        assert_eq!(EnvConfigSource::new().var_name("log_level"), "LEVELCAST_LOG_LEVEL");
        assert_eq!(EnvConfigSource::with_prefix("app").var_name("log_level"), "APP_LOG_LEVEL");
    }

    #[test]
    fn test_aliases() {
        assert_eq!(EnvConfigSource::aliases_for("log_level"), &["LOG_LEVEL"]);
        assert!(EnvConfigSource::aliases_for("unknown").is_empty());
    }

    #[test]
    fn test_env_source_reads_prefixed_var() {
        env::set_var("LCTEST_READ_LOG_LEVEL", "warn");

        let source = EnvConfigSource::with_prefix("LCTEST_READ");
        assert_eq!(source.get("log_level").unwrap().as_deref(), Some("warn"));

        env::remove_var("LCTEST_READ_LOG_LEVEL");
    }

    #[test]
    fn test_env_source_empty_is_absent() {
        env::set_var("LCTEST_EMPTY_COLOR", "");

        let source = EnvConfigSource::with_prefix("LCTEST_EMPTY");
        assert_eq!(source.get("color").unwrap(), None);

        env::remove_var("LCTEST_EMPTY_COLOR");
    }

    #[test]
    fn test_env_source_missing() {
        let source = EnvConfigSource::with_prefix("LCTEST_MISSING_XYZ");
        assert_eq!(source.get("nonexistent_key").unwrap(), None);
        assert_eq!(source.name(), "env");
    }
}
