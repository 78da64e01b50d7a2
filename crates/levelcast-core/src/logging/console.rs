//! Console diagnostic logger

use super::traits::{DiagnosticLevel, Logger};

/// A logger that writes diagnostics to the console
///
/// Info goes to stdout; debug, warnings and errors go to stderr so they do
/// not interleave with lines printed by subscribers.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
    min_level: DiagnosticLevel,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self {
            prefix: "[levelcast]".to_string(),
            min_level: DiagnosticLevel::Info,
        }
    }

    /// Create a console logger with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::new()
        }
    }

    /// Drop diagnostics below `level`
    pub fn with_min_level(mut self, level: DiagnosticLevel) -> Self {
        self.min_level = level;
        self
    }

    fn line(&self, level: DiagnosticLevel, message: &str) -> Option<String> {
        (level >= self.min_level).then(|| format!("{} {}: {}", self.prefix, level, message))
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        if let Some(line) = self.line(DiagnosticLevel::Debug, message) {
            eprintln!("{line}");
        }
    }

    fn info(&self, message: &str) {
        if let Some(line) = self.line(DiagnosticLevel::Info, message) {
            println!("{line}");
        }
    }

    fn warn(&self, message: &str) {
        if let Some(line) = self.line(DiagnosticLevel::Warn, message) {
            eprintln!("{line}");
        }
    }

    fn error(&self, message: &str) {
        if let Some(line) = self.line(DiagnosticLevel::Error, message) {
            eprintln!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_logger_creation() {
        let logger = ConsoleLogger::new();
        assert_eq!(logger.prefix, "[levelcast]");

        let custom = ConsoleLogger::with_prefix("[demo]");
        assert_eq!(custom.prefix, "[demo]");
        assert_eq!(custom.min_level, DiagnosticLevel::Info);
    }

    #[test]
    fn test_line_respects_min_level() {
        let logger = ConsoleLogger::new().with_min_level(DiagnosticLevel::Warn);
        assert!(logger.line(DiagnosticLevel::Info, "hidden").is_none());
        assert_eq!(
            logger.line(DiagnosticLevel::Error, "shown").as_deref(),
            Some("[levelcast] ERROR: shown")
        );
    }

    #[test]
    fn test_console_logger_logs() {
        let logger = ConsoleLogger::new();
        logger.debug("debug message");
        logger.info("info message");
        logger.warn("warn message");
        logger.error("error message");
    }
}
