//! services/client/src/adapters/http.rs
//!
//! This module contains the HTTP adapter for the auth backend.
//! It implements the `AuthApi` port from the `core` crate using `reqwest`.

use async_trait::async_trait;
use athletic_spirit_core::domain::{Credentials, PasswordReset, Registration};
use athletic_spirit_core::forms::ApiResponse;
use athletic_spirit_core::ports::{AuthApi, PortError, PortResult};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements the `AuthApi` port against the REST backend.
#[derive(Clone)]
pub struct HttpAuthAdapter {
    client: Client,
    base_url: String,
}

impl HttpAuthAdapter {
    /// Creates a new `HttpAuthAdapter`. `base_url` must not end with a slash.
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends one JSON POST and reduces whatever comes back to an `ApiResponse`.
    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> PortResult<ApiResponse> {
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await.map_err(|e| {
            error!("Request to {} failed: {:?}", url, e);
            PortError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| {
            error!("Failed to read response body from {}: {:?}", url, e);
            PortError::Transport(e.to_string())
        })?;

        let body: Value = serde_json::from_str(&text).map_err(|e| {
            error!("Response from {} (status {}) is not JSON: {:?}", url, status, e);
            PortError::Decode(e.to_string())
        })?;

        Ok(response_from_json(status, &body))
    }
}

//=========================================================================================
// Wire Records
//=========================================================================================

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignupBody<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct GoogleBody<'a> {
    id_token: &'a str,
}

#[derive(Serialize)]
struct ForgotPasswordBody<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct ResetPasswordBody<'a> {
    token: &'a str,
    password: &'a str,
}

/// Reads the loose JSON every endpoint answers with.
///
/// Any JSON is accepted. Fields that are missing or not strings are treated as
/// absent; FastAPI's `{"detail": ...}` stands in for `error` when it is a string.
fn response_from_json(status: u16, body: &Value) -> ApiResponse {
    let field = |name: &str| body.get(name).and_then(Value::as_str).map(str::to_string);
    ApiResponse {
        status,
        message: field("message"),
        error: field("error").or_else(|| field("detail")),
        token: field("token"),
    }
}

//=========================================================================================
// `AuthApi` Trait Implementation
//=========================================================================================

#[async_trait]
impl AuthApi for HttpAuthAdapter {
    async fn login(&self, credentials: &Credentials) -> PortResult<ApiResponse> {
        let body = LoginBody {
            email: &credentials.email,
            password: &credentials.password,
        };
        self.post("/login", &body).await
    }

    async fn signup(&self, registration: &Registration) -> PortResult<ApiResponse> {
        let body = SignupBody {
            username: &registration.username,
            email: &registration.email,
            password: &registration.password,
        };
        self.post("/signup", &body).await
    }

    async fn google_login(&self, id_token: &str) -> PortResult<ApiResponse> {
        self.post("/auth/google", &GoogleBody { id_token }).await
    }

    async fn forgot_password(&self, email: &str) -> PortResult<ApiResponse> {
        self.post("/forgot-password", &ForgotPasswordBody { email }).await
    }

    async fn reset_password(&self, reset: &PasswordReset) -> PortResult<ApiResponse> {
        let body = ResetPasswordBody {
            token: &reset.token,
            password: &reset.password,
        };
        self.post("/reset-password", &body).await
    }

    fn github_authorize_url(&self) -> String {
        self.url("/auth/github")
    }
}
