//! Error types for the video pause controller
//!
//! The decision logic itself never fails: unmet preconditions turn into no-ops.
//! These errors cover the surfaces around it (lifecycle misuse, configuration
//! and logging setup).

use thiserror::Error;

/// Result type for video pause operations
pub type Result<T> = std::result::Result<T, VideoPauseError>;

/// Errors that can occur while configuring or attaching the controller
#[derive(Debug, Error)]
pub enum VideoPauseError {
    /// `set_up` was called on a controller that is already attached to a host
    #[error("Controller is already attached to an in-call host")]
    AlreadyAttached,

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// The event pump has stopped and no longer accepts events
    #[error("Event pump is closed")]
    EventPumpClosed,

    /// Logging subsystem could not be initialized
    #[error("Logging error: {message}")]
    Logging { message: String },
}

impl VideoPauseError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a logging error
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for VideoPauseError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(format!("invalid JSON: {}", err))
    }
}
