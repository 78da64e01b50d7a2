//! In-memory diagnostic logger

use parking_lot::Mutex;

use super::traits::{DiagnosticLevel, Logger};

/// Captures diagnostics in memory
///
/// Used by tests to assert on what the emitter reported, e.g. that an
/// invalid configured level produced exactly one warning.
///
/// # Example
///
/// ```
/// use levelcast_core::logging::{Logger, MemoryLogger, DiagnosticLevel};
///
/// let logger = MemoryLogger::new();
/// logger.warn("careful");
/// assert_eq!(logger.count(DiagnosticLevel::Warn), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<(DiagnosticLevel, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record so far, oldest first
    pub fn records(&self) -> Vec<(DiagnosticLevel, String)> {
        self.records.lock().clone()
    }

    /// Messages logged at exactly `level`
    pub fn messages(&self, level: DiagnosticLevel) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn count(&self, level: DiagnosticLevel) -> usize {
        self.records.lock().iter().filter(|(l, _)| *l == level).count()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }

    fn push(&self, level: DiagnosticLevel, message: &str) {
        self.records.lock().push((level, message.to_string()));
    }
}

impl Logger for MemoryLogger {
    fn debug(&self, message: &str) {
        self.push(DiagnosticLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.push(DiagnosticLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(DiagnosticLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(DiagnosticLevel::Error, message);
    }
}
