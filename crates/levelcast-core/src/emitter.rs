//! Severity-filtered emitter with level and global subscribers
//!
//! ```text
//! log(severity, message)
//!     │
//!     ├─ severity < threshold ──► return (nothing built, nobody called)
//!     │
//!     └─ LogEvent + formatted line
//!            ├──► level subscribers for exactly `severity` (registration order)
//!            └──► global subscribers                        (registration order)
//! ```
//!
//! Dispatch is synchronous: `log` returns once every subscriber has run. A
//! panicking subscriber is caught, reported to the diagnostic logger, and the
//! remaining subscribers still run.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::{ConfigSource, EmitterConfig, ThresholdResolution, DEFAULT_THRESHOLD};
use crate::error::EmitterResult;
use crate::event::{LogEvent, MessageEvent};
use crate::format::MessageFormatter;
use crate::logging::{ConsoleLogger, SharedLogger};
use crate::severity::Severity;
use crate::{log_debug, log_error, log_warn};

/// Callback for a single severity; receives the formatted line
pub type LevelCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Callback for every dispatched event
pub type GlobalCallback = Arc<dyn Fn(&MessageEvent) + Send + Sync>;

/// Handle returned by the subscribe calls, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a single `log` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchReport {
    /// Whether the event passed the threshold
    pub passed: bool,
    /// Subscribers that returned normally
    pub delivered: usize,
    /// Subscribers that panicked
    pub failed: usize,
}

impl DispatchReport {
    pub fn filtered() -> Self {
        Self::default()
    }

    pub fn invoked(&self) -> usize {
        self.delivered + self.failed
    }
}

#[derive(Default)]
struct Registrations {
    by_level: HashMap<Severity, Vec<(SubscriptionId, LevelCallback)>>,
    global: Vec<(SubscriptionId, GlobalCallback)>,
}

impl Registrations {
    fn len(&self) -> usize {
        self.by_level.values().map(Vec::len).sum::<usize>() + self.global.len()
    }
}

/// Filters log calls by a fixed threshold and fans them out to subscribers
///
/// # Example
///
/// ```
/// use levelcast_core::{LevelFilteredEmitter, EmitterConfig, NoOpLogger, Severity};
///
/// let emitter = LevelFilteredEmitter::new(&EmitterConfig::default(), NoOpLogger::shared());
/// emitter.subscribe_all(|ev| println!("{}", ev.formatted_message));
///
/// emitter.log(Severity::Severe, "CRITICAL ERROR");
/// emitter.log(Severity::Warn, "Low disk space");
/// emitter.log(Severity::Info, "User logged in");
/// emitter.log(Severity::Debug, "Debugging x=42");         // filtered
/// emitter.log(Severity::Trace, "Entered function foo()"); // filtered
/// ```
pub struct LevelFilteredEmitter {
    threshold: Severity,
    formatter: MessageFormatter,
    registrations: RwLock<Registrations>,
    next_id: AtomicU64,
    diagnostics: SharedLogger,
}

impl Default for LevelFilteredEmitter {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl LevelFilteredEmitter {
    /// Build an emitter from explicit configuration
    ///
    /// A missing level means `info`. An unrecognized level also means `info`
    /// and is reported once to `diagnostics` as a warning. Never fails.
    pub fn new(config: &EmitterConfig, diagnostics: SharedLogger) -> Self {
        let resolution = config.resolve_threshold();
        if let ThresholdResolution::Invalid(raw) = &resolution {
            log_warn!(
                diagnostics,
                "invalid log level in config: \"{}\", using default \"{}\"",
                raw,
                DEFAULT_THRESHOLD
            );
        }

        Self {
            threshold: resolution.severity(),
            formatter: MessageFormatter::new(config.color),
            registrations: RwLock::new(Registrations::default()),
            next_id: AtomicU64::new(1),
            diagnostics,
        }
    }

    /// Build an emitter reading `log_level` from a configuration source
    ///
    /// If the source cannot be read the failure is reported as an error
    /// diagnostic and the default threshold is used.
    pub fn from_source(source: &dyn ConfigSource, diagnostics: SharedLogger) -> Self {
        let config = match EmitterConfig::from_source(source) {
            Ok(config) => config,
            Err(e) => {
                log_error!(
                    diagnostics,
                    "failed to read log_level from config source '{}', using default: {}",
                    source.name(),
                    e
                );
                EmitterConfig::default()
            }
        };
        Self::new(&config, diagnostics)
    }

    /// Default threshold, colored output, diagnostics to the console
    pub fn with_defaults() -> Self {
        Self::new(&EmitterConfig::default(), Arc::new(ConsoleLogger::new()))
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Whether a call at `severity` would be dispatched
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity.passes(self.threshold)
    }

    pub fn formatter(&self) -> &MessageFormatter {
        &self.formatter
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Register a callback for events of exactly `severity`
    pub fn subscribe_level<F>(&self, severity: Severity, callback: F) -> SubscriptionId
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.registrations
            .write()
            .by_level
            .entry(severity)
            .or_default()
            .push((id, Arc::new(callback)));
        id
    }

    /// Like [`subscribe_level`](Self::subscribe_level), naming the severity as text
    pub fn subscribe_level_str<F>(&self, severity: &str, callback: F) -> EmitterResult<SubscriptionId>
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let severity: Severity = severity.parse()?;
        Ok(self.subscribe_level(severity, callback))
    }

    /// Register a callback for every event that passes the threshold
    pub fn subscribe_all<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&MessageEvent) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.registrations.write().global.push((id, Arc::new(callback)));
        id
    }

    /// Remove a registration; returns false if the id is unknown
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registrations = self.registrations.write();

        let before = registrations.global.len();
        registrations.global.retain(|(sid, _)| *sid != id);
        if registrations.global.len() != before {
            return true;
        }

        for callbacks in registrations.by_level.values_mut() {
            if let Some(pos) = callbacks.iter().position(|(sid, _)| *sid == id) {
                callbacks.remove(pos);
                return true;
            }
        }
        false
    }

    /// Number of registered callbacks, level and global together
    pub fn subscriber_count(&self) -> usize {
        self.registrations.read().len()
    }

    /// Filter, format and dispatch one message
    pub fn log(&self, severity: Severity, message: &str) -> DispatchReport {
        if !self.is_enabled(severity) {
            return DispatchReport::filtered();
        }

        let event = LogEvent::now(severity, message);
        let formatted = self.formatter.format(&event);

        // Snapshot under the lock; callbacks run with no lock held so they
        // may subscribe or log themselves.
        let (level_callbacks, global_callbacks) = {
            let registrations = self.registrations.read();
            let level: Vec<_> = registrations
                .by_level
                .get(&severity)
                .map(|cbs| cbs.to_vec())
                .unwrap_or_default();
            (level, registrations.global.clone())
        };

        let mut report = DispatchReport {
            passed: true,
            ..DispatchReport::default()
        };

        for (id, callback) in &level_callbacks {
            self.invoke(*id, &mut report, || callback(&formatted));
        }

        if !global_callbacks.is_empty() {
            let payload = MessageEvent::new(event, formatted);
            for (id, callback) in &global_callbacks {
                self.invoke(*id, &mut report, || callback(&payload));
            }
        }

        report
    }

    /// Like [`log`](Self::log), naming the severity as text
    pub fn log_str(&self, severity: &str, message: &str) -> EmitterResult<DispatchReport> {
        let severity: Severity = severity.parse()?;
        Ok(self.log(severity, message))
    }

    pub fn trace(&self, message: &str) -> DispatchReport {
        self.log(Severity::Trace, message)
    }

    pub fn debug(&self, message: &str) -> DispatchReport {
        self.log(Severity::Debug, message)
    }

    pub fn info(&self, message: &str) -> DispatchReport {
        self.log(Severity::Info, message)
    }

    pub fn warn(&self, message: &str) -> DispatchReport {
        self.log(Severity::Warn, message)
    }

    pub fn severe(&self, message: &str) -> DispatchReport {
        self.log(Severity::Severe, message)
    }

    fn invoke(&self, id: SubscriptionId, report: &mut DispatchReport, call: impl FnOnce()) {
        match panic::catch_unwind(AssertUnwindSafe(call)) {
            Ok(()) => report.delivered += 1,
            Err(payload) => {
                report.failed += 1;
                log_error!(
                    self.diagnostics,
                    "subscriber {} panicked: {}",
                    id,
                    panic_message(payload.as_ref())
                );
                log_debug!(self.diagnostics, "continuing dispatch after subscriber {}", id);
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

impl fmt::Debug for LevelFilteredEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelFilteredEmitter")
            .field("threshold", &self.threshold)
            .field("formatter", &self.formatter)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
