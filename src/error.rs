//! Error types for path building
//!
//! Categorizes failures into parameter validation, builder configuration,
//! and cipher-level errors. All of them are programmer or configuration
//! mistakes, never transient; nothing here is retried.

use thiserror::Error;

/// Errors that can occur while building or signing a request path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed or out-of-range option/value-type parameter,
    /// raised at construction time of the offending value
    #[error("invalid parameter '{param}': {message}")]
    Validation { param: String, message: String },

    /// Builder reached an inconsistent state at build time
    /// (e.g. encrypted source mode without an encrypter)
    #[error("builder misconfigured: {0}")]
    Configuration(String),

    /// Underlying cipher operation failed
    #[error("encryption failed: {0}")]
    Crypto(String),
}

impl Error {
    pub fn validation(param: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Validation {
            param: param.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
