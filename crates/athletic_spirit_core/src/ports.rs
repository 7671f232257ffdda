//! crates/athletic_spirit_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the client's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of the HTTP client, local storage, and the UI shell.

use crate::domain::{Credentials, Destination, PasswordReset, Registration};
use crate::forms::{ApiResponse, Page, Tone};
use async_trait::async_trait;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    /// The request never produced a response.
    #[error("Transport failure: {0}")]
    Transport(String),
    /// A response arrived but its body could not be read.
    #[error("Malformed response: {0}")]
    Decode(String),
    #[error("Storage failure: {0}")]
    Storage(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// The REST backend the auth forms talk to.
///
/// Any answer from the server, successful or not, is an `Ok(ApiResponse)`;
/// `Err` is reserved for requests that never got one.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> PortResult<ApiResponse>;

    async fn signup(&self, registration: &Registration) -> PortResult<ApiResponse>;

    async fn google_login(&self, id_token: &str) -> PortResult<ApiResponse>;

    async fn forgot_password(&self, email: &str) -> PortResult<ApiResponse>;

    async fn reset_password(&self, reset: &PasswordReset) -> PortResult<ApiResponse>;

    /// The URL that starts the GitHub sign-in flow in a popup.
    fn github_authorize_url(&self) -> String;
}

/// Client-side storage for the session token.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn save_token(&self, token: &str) -> PortResult<()>;

    async fn load_token(&self) -> PortResult<Option<String>>;
}

#[async_trait]
pub trait Navigator: Send + Sync {
    async fn navigate(&self, destination: Destination) -> PortResult<()>;

    async fn open_popup(&self, url: &str) -> PortResult<()>;
}

/// Renders form messages to the user.
#[async_trait]
pub trait Presenter: Send + Sync {
    async fn show_inline(&self, page: Page, text: &str, tone: Tone);

    async fn alert(&self, text: &str);
}
