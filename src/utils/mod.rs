//! Utility modules for common functionality
//!
//! Logging, progress reporting, downloads and warning presentation used
//! at the edges of the library.

pub mod logger;
mod progress;
pub mod download;
pub mod warning;
#[cfg(test)]
mod tests;

pub use progress::ProgressTracker;
