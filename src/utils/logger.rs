//! Logger utility for application-wide logging
//!
//! This module provides a logger that is handed to components by reference.
//! It works alongside the standard log crate, writing either to a file or to an
//! in-memory buffer so tests can assert on what was recorded.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use log::{Log, Record, Level, Metadata, LevelFilter};

/// Destination of logged messages
enum Sink {
    File(File),
    Memory(Vec<String>),
}

/// Custom logger implementation
pub struct Logger {
    /// Sink for log output
    sink: Mutex<Sink>,
}

impl Logger {
    /// Creates a new logger appending to a file
    ///
    /// Several loggers may share one file; each line lands at the end.
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(log_file.as_ref())?;
        Ok(Logger {
            sink: Mutex::new(Sink::File(file)),
        })
    }

    /// Creates a logger that keeps every message in memory
    pub fn in_memory() -> Self {
        Logger {
            sink: Mutex::new(Sink::Memory(Vec::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Sink> {
        self.sink.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Logs a message to the sink
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        match &mut *self.lock() {
            Sink::File(file) => {
                writeln!(file, "{}", message)?;
                file.flush()?;
            }
            Sink::Memory(lines) => lines.push(message.to_string()),
        }
        Ok(())
    }

    /// Messages recorded so far (always empty for file-backed loggers)
    pub fn records(&self) -> Vec<String> {
        match &*self.lock() {
            Sink::Memory(lines) => lines.clone(),
            Sink::File(_) => Vec::new(),
        }
    }

    /// Whether any recorded message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.records().iter().any(|line| line.contains(needle))
    }

    /// Static method to initialize the global logger
    pub fn init_global_logger(log_file: &str, level: LevelFilter) -> io::Result<()> {
        let global_logger = Logger::new(log_file)?;

        // Only one backend can be installed per process
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            // Also print to console
            println!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
