//! services/client/src/error.rs
//!
//! Defines the primary error type for the client service.

use crate::config::ConfigError;
use athletic_spirit_core::{FormError, PortError, ResponderError};

/// The primary error type for the `client` service.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from one of the core service ports.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),

    /// A form was used in a way its state does not allow.
    #[error("Form error: {0}")]
    Form(#[from] FormError),

    #[error("Responder error: {0}")]
    Responder(#[from] ResponderError),

    /// Represents an error building the HTTP client.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Represents a standard Input/Output error (e.g., reading from stdin).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
