//! Diagnostic logging for the emitter's own problems
//!
//! The emitter never prints the events it dispatches; subscribers do that.
//! What it does report (a bad configured level, a panicking subscriber) goes
//! through a [`Logger`].

mod traits;
mod noop;
mod console;
mod memory;

pub use traits::{Logger, LoggerExt, SharedLogger, DiagnosticLevel};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use memory::MemoryLogger;
