//! Silent diagnostic logger

use std::sync::Arc;

use super::traits::{Logger, SharedLogger};

/// A logger that discards every diagnostic
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    pub fn new() -> Self {
        Self
    }

    /// Shared handle, ready to pass to an emitter
    pub fn shared() -> SharedLogger {
        Arc::new(Self)
    }
}

impl Logger for NoOpLogger {
    fn debug(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_logger() {
        let logger = NoOpLogger::shared();
        logger.warn("ignored");
        crate::log_error!(logger, "ignored {}", 42);
    }
}
