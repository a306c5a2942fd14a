//! Error types for the Galaxy3D camera
//!
//! Camera math never fails at runtime. Errors only come from validating
//! caller-supplied parameters before they reach the cached state.

use std::fmt;

/// Result type for Galaxy3D camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D camera errors
#[derive(Debug, Clone)]
pub enum Error {
    /// A single value is outside its domain (zoom <= 0, NaN, zero-length axis, ...)
    InvalidParameter(String),

    /// Values are individually valid but produce a singular transform
    /// (near >= far, left == right, look-at target on the eye, ...)
    DegenerateParameters(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::DegenerateParameters(msg) => write!(f, "Degenerate camera parameters: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
