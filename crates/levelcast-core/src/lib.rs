//! levelcast Core
//!
//! A severity-filtered log emitter. Log calls below a configured threshold
//! are dropped; the rest are stamped, formatted and handed to subscribers.
//! The emitter itself never prints: printing, shipping or counting lines is
//! the subscribers' job.
//!
//! ## Subscribers
//!
//! - Level subscribers see only events of exactly one severity, as a
//!   formatted line.
//! - Global subscribers see every event that passes the threshold, as a
//!   [`MessageEvent`] carrying the structured event and the formatted line.
//!
//! ```rust
//! use std::sync::Arc;
//! use levelcast_core::{LevelFilteredEmitter, EmitterConfig, ConsoleLogger, Severity};
//!
//! let config = EmitterConfig::new().with_log_level("warn");
//! let emitter = LevelFilteredEmitter::new(&config, Arc::new(ConsoleLogger::new()));
//!
//! emitter.subscribe_level(Severity::Severe, |line| eprintln!("{line}"));
//! emitter.subscribe_all(|ev| println!("{}", ev.formatted_message));
//!
//! emitter.info("dropped");
//! emitter.severe("delivered to both subscribers");
//! ```

pub mod severity;
pub mod event;
pub mod format;
pub mod config;
pub mod logging;
pub mod emitter;
mod error;

pub use severity::{Severity, SeverityError, SeverityResult};
pub use event::{LogEvent, MessageEvent};
pub use format::{ColorMode, MessageFormatter};

pub use config::{
    ConfigSource, ConfigError, ConfigResult,
    EmitterConfig, ThresholdResolution, DEFAULT_THRESHOLD,
    MemoryConfigSource, EnvConfigSource, FileConfigSource, ChainConfigSource,
};

pub use logging::{Logger, SharedLogger, NoOpLogger, ConsoleLogger, MemoryLogger};

pub use emitter::{
    LevelFilteredEmitter, SubscriptionId, DispatchReport,
    LevelCallback, GlobalCallback,
};

pub use error::{EmitterError, EmitterResult};
