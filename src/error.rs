//! Simulation error type
//!
//! Only construction and configuration can fail. Ticking never does.

use std::fmt;

/// Error raised when building bodies, generating a system or loading config.
#[derive(Debug)]
pub enum SimError {
    /// Orbital distance must be finite and greater than zero.
    NonPositiveDistance(f64),
    /// Body size must be finite and greater than zero.
    NonPositiveSize(f64),
    /// Generation range must satisfy `0 < min < max`.
    InvalidDistanceRange { min: f64, max: f64 },
    /// A tuning value is out of range.
    InvalidConfig(String),
    /// Config file could not be read.
    Io(std::io::Error),
    /// Config file is not valid JSON for `SimConfig`.
    Json(serde_json::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::NonPositiveDistance(d) => {
                write!(f, "orbital distance must be > 0, got {d}")
            }
            SimError::NonPositiveSize(s) => write!(f, "body size must be > 0, got {s}"),
            SimError::InvalidDistanceRange { min, max } => {
                write!(f, "invalid distance range {min}..{max}")
            }
            SimError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            SimError::Io(e) => write!(f, "config io error: {e}"),
            SimError::Json(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Io(e) => Some(e),
            SimError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(e: std::io::Error) -> Self {
        SimError::Io(e)
    }
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::Json(e)
    }
}
