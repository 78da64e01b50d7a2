//! Configuration for building an emitter
//!
//! The only setting read from outside is `log_level`. Sources:
//! - `MemoryConfigSource`: in-memory, for tests
//! - `EnvConfigSource`: environment variables
//! - `FileConfigSource`: YAML file (user/workspace level)
//! - `ChainConfigSource`: ordered fallback over other sources

mod traits;
mod memory;
mod env;
mod file;
mod chain;
mod settings;

pub use traits::{ConfigSource, ConfigError, ConfigResult, LOG_LEVEL_KEY};
pub use memory::MemoryConfigSource;
pub use env::EnvConfigSource;
pub use file::{FileConfigSource, ConfigFile, ConfigLevel};
pub use chain::ChainConfigSource;
pub use settings::{EmitterConfig, ThresholdResolution, DEFAULT_THRESHOLD};
