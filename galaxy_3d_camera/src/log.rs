//! Internal logging system for the Galaxy3D camera
//!
//! This module provides a flexible logging system with:
//! - Customizable logger via Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - A global minimum severity checked before any message is formatted
//! - File and line information for detailed ERROR logs

use colored::*;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Global minimum severity, stored as `LogSeverity as u8`
static MAX_SEVERITY: AtomicU8 = AtomicU8::new(LogSeverity::Info as u8);

/// Logger trait for custom logging implementations
///
/// Implement this trait to create custom loggers (file logging, network logging, etc.)
///
/// # Example
///
/// ```no_run
/// use galaxy_3d_camera::galaxy3d::log::{Logger, LogEntry};
///
/// struct FileLogger {
///     file: std::fs::File,
/// }
///
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level (Trace, Debug, Info, Warn, Error)
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "galaxy3d::Camera", "galaxy3d::PerspectiveProjection")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose debug information (every matrix recomputation)
    Trace = 0,

    /// Development/debugging information
    Debug = 1,

    /// Important informational messages
    Info = 2,

    /// Warning messages (potential issues)
    Warn = 3,

    /// Error messages (rejected parameters, with file:line details)
    Error = 4,
}

impl LogSeverity {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => LogSeverity::Trace,
            1 => LogSeverity::Debug,
            2 => LogSeverity::Info,
            3 => LogSeverity::Warn,
            _ => LogSeverity::Error,
        }
    }
}

/// Default logger implementation using colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            );
        }
    }
}

// ===== GLOBAL LOGGER =====

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

/// Replace the global logger
///
/// # Example
///
/// ```no_run
/// use galaxy_3d_camera::galaxy3d::log::{self, DefaultLogger};
///
/// log::set_logger(DefaultLogger);
/// ```
pub fn set_logger<L: Logger + 'static>(new_logger: L) {
    if let Ok(mut lock) = logger().write() {
        *lock = Box::new(new_logger);
    }
}

/// Reset logger to default (DefaultLogger)
pub fn reset_logger() {
    if let Ok(mut lock) = logger().write() {
        *lock = Box::new(DefaultLogger);
    }
}

/// Set the minimum severity that reaches the logger
///
/// Messages below this level are dropped by the logging macros before
/// their arguments are formatted. Defaults to `Info`.
pub fn set_max_severity(severity: LogSeverity) {
    MAX_SEVERITY.store(severity as u8, Ordering::Relaxed);
}

/// Current minimum severity
pub fn max_severity() -> LogSeverity {
    LogSeverity::from_u8(MAX_SEVERITY.load(Ordering::Relaxed))
}

/// Whether a message of this severity would reach the logger
#[inline]
pub fn enabled(severity: LogSeverity) -> bool {
    severity as u8 >= MAX_SEVERITY.load(Ordering::Relaxed)
}

/// Send a message to the global logger
///
/// Used by the camera_* macros. Messages below the minimum severity are dropped.
pub fn log(severity: LogSeverity, source: &str, message: String) {
    if !enabled(severity) {
        return;
    }
    if let Ok(lock) = logger().read() {
        lock.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }
}

/// Send a message with file:line information to the global logger
///
/// Used by the camera_error! macro to include source location.
pub fn log_detailed(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: &'static str,
    line: u32,
) {
    if !enabled(severity) {
        return;
    }
    if let Ok(lock) = logger().read() {
        lock.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (very verbose, disabled by default)
///
/// # Example
///
/// ```no_run
/// galaxy_3d_camera::camera_trace!("galaxy3d::Camera", "View matrix recomputed");
/// ```
#[macro_export]
macro_rules! camera_trace {
    ($source:expr, $($arg:tt)*) => {
        if $crate::galaxy3d::log::enabled($crate::galaxy3d::log::LogSeverity::Trace) {
            $crate::galaxy3d::log::log(
                $crate::galaxy3d::log::LogSeverity::Trace,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log a DEBUG message (development information)
///
/// # Example
///
/// ```no_run
/// galaxy_3d_camera::camera_debug!("galaxy3d::Camera", "Created with up {:?}", [0.0, 1.0, 0.0]);
/// ```
#[macro_export]
macro_rules! camera_debug {
    ($source:expr, $($arg:tt)*) => {
        if $crate::galaxy3d::log::enabled($crate::galaxy3d::log::LogSeverity::Debug) {
            $crate::galaxy3d::log::log(
                $crate::galaxy3d::log::LogSeverity::Debug,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log an INFO message (important events)
#[macro_export]
macro_rules! camera_info {
    ($source:expr, $($arg:tt)*) => {
        if $crate::galaxy3d::log::enabled($crate::galaxy3d::log::LogSeverity::Info) {
            $crate::galaxy3d::log::log(
                $crate::galaxy3d::log::LogSeverity::Info,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log a WARN message (potential issues)
#[macro_export]
macro_rules! camera_warn {
    ($source:expr, $($arg:tt)*) => {
        if $crate::galaxy3d::log::enabled($crate::galaxy3d::log::LogSeverity::Warn) {
            $crate::galaxy3d::log::log(
                $crate::galaxy3d::log::LogSeverity::Warn,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log an ERROR message with file:line information
///
/// # Example
///
/// ```no_run
/// galaxy_3d_camera::camera_error!("galaxy3d::Camera", "Rejected zoom {}", 0.0);
/// ```
#[macro_export]
macro_rules! camera_error {
    ($source:expr, $($arg:tt)*) => {
        if $crate::galaxy3d::log::enabled($crate::galaxy3d::log::LogSeverity::Error) {
            $crate::galaxy3d::log::log_detailed(
                $crate::galaxy3d::log::LogSeverity::Error,
                $source,
                format!($($arg)*),
                file!(),
                line!()
            )
        }
    };
}

/// Log an ERROR and build the matching `Error` variant
///
/// # Example
///
/// ```no_run
/// use galaxy_3d_camera::galaxy3d::Result;
///
/// fn check_zoom(zoom: f32) -> Result<()> {
///     if zoom <= 0.0 {
///         return Err(galaxy_3d_camera::camera_err!(
///             "galaxy3d::Camera", InvalidParameter, "zoom must be > 0, got {}", zoom
///         ));
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! camera_err {
    ($source:expr, $kind:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::camera_error!($source, "{}", message);
        $crate::galaxy3d::Error::$kind(message)
    }};
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
