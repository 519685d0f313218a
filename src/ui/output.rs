//! Output abstraction layer
//!
//! Results go to stdout; notices are styled by level, errors go to stderr.

use colored::Colorize;

/// Trait for output operations
pub trait OutputWriter {
    /// Write a result line
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write an informational notice (dimmed/secondary)
    fn info(&self, message: &str);
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Info message
    Info,
}

/// CLI implementation - writes to stdout/stderr
pub struct StdoutWriter;

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message);
    }

    fn info(&self, message: &str) {
        println!("{}", message.dimmed());
    }
}
