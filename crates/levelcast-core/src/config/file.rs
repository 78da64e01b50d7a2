//! File-based configuration source (YAML)
//!
//! Supports user-level (`~/.config/levelcast/config.yaml`) and workspace-level
//! (`.config/levelcast/config.yaml`) files. Only top-level scalar keys are read:
//!
//! ```yaml
//! log_level: debug
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde_yaml::Value;

use super::traits::{ConfigError, ConfigResult, ConfigSource};

/// Config level (user or workspace)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLevel {
    /// `<config_dir>/levelcast/config.yaml`
    User,
    /// `.config/levelcast/config.yaml` in a workspace root
    Workspace,
}

impl ConfigLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigLevel::User => "user",
            ConfigLevel::Workspace => "workspace",
        }
    }
}

/// Parsed top-level keys of a config file
pub type ConfigFile = BTreeMap<String, Value>;

/// Reads configuration from a YAML file
///
/// The file is parsed on first lookup and cached; call [`reload`](Self::reload)
/// to pick up changes. A missing file simply has no values.
///
/// # Example
///
/// ```no_run
/// use levelcast_core::config::FileConfigSource;
///
/// let user = FileConfigSource::user();
/// let workspace = FileConfigSource::workspace("/path/to/workspace");
/// ```
pub struct FileConfigSource {
    path: PathBuf,
    level: ConfigLevel,
    cache: RwLock<Option<ConfigFile>>,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>, level: ConfigLevel) -> Self {
        Self {
            path: path.into(),
            level,
            cache: RwLock::new(None),
        }
    }

    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("levelcast").join("config.yaml"), ConfigLevel::User)
    }

    pub fn workspace(workspace_root: impl AsRef<Path>) -> Self {
        let path = workspace_root
            .as_ref()
            .join(".config")
            .join("levelcast")
            .join("config.yaml");
        Self::new(path, ConfigLevel::Workspace)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn level(&self) -> ConfigLevel {
        self.level
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> ConfigResult<ConfigFile> {
        if !self.path.exists() {
            return Ok(ConfigFile::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(ConfigFile::new());
        }

        serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::Parse(format!("{}: {}", self.path.display(), e))
        })
    }

    fn get_config(&self) -> ConfigResult<ConfigFile> {
        if let Some(config) = self.cache.read().as_ref() {
            return Ok(config.clone());
        }

        let config = self.load()?;
        *self.cache.write() = Some(config.clone());
        Ok(config)
    }

    /// Re-read the file from disk
    pub fn reload(&self) -> ConfigResult<ConfigFile> {
        let config = self.load()?;
        *self.cache.write() = Some(config.clone());
        Ok(config)
    }
}

/// Render a YAML scalar as the string a config lookup returns
fn scalar_to_string(value: &Value) -> ConfigResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        _ => Err(ConfigError::Other("expected a scalar value".to_string())),
    }
}

impl std::fmt::Debug for FileConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileConfigSource")
            .field("path", &self.path)
            .field("level", &self.level)
            .field("exists", &self.exists())
            .finish()
    }
}

impl ConfigSource for FileConfigSource {
    fn name(&self) -> &str {
        self.level.as_str()
    }

    fn get(&self, key: &str) -> ConfigResult<Option<String>> {
        let config = self.get_config()?;
        match config.get(key) {
            Some(value) => scalar_to_string(value).map_err(|e| ConfigError::Source {
                source_name: self.path.display().to_string(),
                message: format!("key '{}': {}", key, e),
            }),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_has_no_values() {
        let dir = tempdir().unwrap();
        let source = FileConfigSource::new(dir.path().join("config.yaml"), ConfigLevel::User);

        assert!(!source.exists());
        assert_eq!(source.get("log_level").unwrap(), None);
    }

    #[test]
    fn test_reads_log_level() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "log_level: debug\nother: 3\n").unwrap();

        let source = FileConfigSource::new(&path, ConfigLevel::User);
        assert_eq!(source.get("log_level").unwrap().as_deref(), Some("debug"));
        assert_eq!(source.get("other").unwrap().as_deref(), Some("3"));
        assert_eq!(source.name(), "user");
    }

    #[test]
    fn test_empty_file_and_null_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "").unwrap();
        let source = FileConfigSource::new(&path, ConfigLevel::User);
        assert_eq!(source.get("log_level").unwrap(), None);

        fs::write(&path, "log_level: ~\n").unwrap();
        source.reload().unwrap();
        assert_eq!(source.get("log_level").unwrap(), None);
    }

    #[test]
    fn test_cache_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "log_level: warn\n").unwrap();

        let source = FileConfigSource::new(&path, ConfigLevel::User);
        assert_eq!(source.get("log_level").unwrap().as_deref(), Some("warn"));

        fs::write(&path, "log_level: trace\n").unwrap();
        assert_eq!(source.get("log_level").unwrap().as_deref(), Some("warn"));

        source.reload().unwrap();
        assert_eq!(source.get("log_level").unwrap().as_deref(), Some("trace"));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "log_level: [unclosed\n").unwrap();

        let source = FileConfigSource::new(&path, ConfigLevel::User);
        assert!(matches!(source.get("log_level"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_non_scalar_value_is_source_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "log_level:\n  - warn\n  - info\n").unwrap();

        let source = FileConfigSource::new(&path, ConfigLevel::User);
        assert!(matches!(source.get("log_level"), Err(ConfigError::Source { .. })));
    }

    #[test]
    fn test_workspace_path() {
        let source = FileConfigSource::workspace("/tmp/project");
        assert_eq!(source.level(), ConfigLevel::Workspace);
        assert!(source.path().ends_with(".config/levelcast/config.yaml"));
        assert_eq!(source.name(), "workspace");
    }
}
