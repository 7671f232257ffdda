//! Mock port implementations for unit tests.
//!
//! These mocks let the widgets run without a backend, a disk, or a terminal.

use crate::config::Config;
use crate::widgets::state::AppState;
use async_trait::async_trait;
use athletic_spirit_core::domain::{Credentials, Destination, PasswordReset, Registration};
use athletic_spirit_core::forms::{ApiResponse, Page, Tone};
use athletic_spirit_core::ports::{
    AuthApi, CredentialStore, Navigator, PortError, PortResult, Presenter,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

// ============================================================================
// Mock Auth API
// ============================================================================

/// A request the mock API received, reduced to the endpoint and its key field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Login(String),
    Signup(String),
    Google(String),
    ForgotPassword(String),
    ResetPassword { token: String, password: String },
}

/// Returns queued responses in order; an empty queue reads as a dropped connection.
#[derive(Default)]
pub struct MockAuthApi {
    responses: Mutex<VecDeque<PortResult<ApiResponse>>>,
    calls: Mutex<Vec<Call>>,
    /// When set, each request is held until the gate is notified.
    gate: Option<Arc<Notify>>,
}

impl MockAuthApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock whose requests stay in flight until `gate` is notified.
    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn queue_response(&self, response: ApiResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub fn queue_error(&self, error: PortError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    async fn answer(&self, call: Call) -> PortResult<ApiResponse> {
        self.calls.lock().unwrap().push(call);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(PortError::Transport("No mock response queued".into())))
    }
}

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn login(&self, credentials: &Credentials) -> PortResult<ApiResponse> {
        self.answer(Call::Login(credentials.email.clone())).await
    }

    async fn signup(&self, registration: &Registration) -> PortResult<ApiResponse> {
        self.answer(Call::Signup(registration.email.clone())).await
    }

    async fn google_login(&self, id_token: &str) -> PortResult<ApiResponse> {
        self.answer(Call::Google(id_token.to_string())).await
    }

    async fn forgot_password(&self, email: &str) -> PortResult<ApiResponse> {
        self.answer(Call::ForgotPassword(email.to_string())).await
    }

    async fn reset_password(&self, reset: &PasswordReset) -> PortResult<ApiResponse> {
        self.answer(Call::ResetPassword {
            token: reset.token.clone(),
            password: reset.password.clone(),
        })
        .await
    }

    fn github_authorize_url(&self) -> String {
        "http://backend.test/auth/github".to_string()
    }
}

// ============================================================================
// In-Memory Credential Store
// ============================================================================

#[derive(Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
    fail_writes: AtomicBool,
}

impl MemoryCredentialStore {
    pub fn token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn save_token(&self, token: &str) -> PortResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PortError::Storage("disk full".into()));
        }
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    async fn load_token(&self) -> PortResult<Option<String>> {
        Ok(self.token())
    }
}

// ============================================================================
// Recording Navigator and Presenter
// ============================================================================

#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<Destination>>,
    popups: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<Destination> {
        self.visits.lock().unwrap().clone()
    }

    pub fn popups(&self) -> Vec<String> {
        self.popups.lock().unwrap().clone()
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn navigate(&self, destination: Destination) -> PortResult<()> {
        self.visits.lock().unwrap().push(destination);
        Ok(())
    }

    async fn open_popup(&self, url: &str) -> PortResult<()> {
        self.popups.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Inline(Page, String, Tone),
    Alert(String),
}

#[derive(Default)]
pub struct RecordingPresenter {
    shown: Mutex<Vec<Shown>>,
}

impl RecordingPresenter {
    pub fn shown(&self) -> Vec<Shown> {
        self.shown.lock().unwrap().clone()
    }
}

#[async_trait]
impl Presenter for RecordingPresenter {
    async fn show_inline(&self, page: Page, text: &str, tone: Tone) {
        self.shown
            .lock()
            .unwrap()
            .push(Shown::Inline(page, text.to_string(), tone));
    }

    async fn alert(&self, text: &str) {
        self.shown.lock().unwrap().push(Shown::Alert(text.to_string()));
    }
}

// ============================================================================
// Harness
// ============================================================================

/// An `AppState` wired to mocks, plus typed handles to inspect them.
pub struct TestApp {
    pub app: Arc<AppState>,
    pub api: Arc<MockAuthApi>,
    pub credentials: Arc<MemoryCredentialStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub presenter: Arc<RecordingPresenter>,
}

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "CREDENTIAL_STORE_PATH" => Some("/tmp/athletic_spirit_test/credentials.json".into()),
        _ => None,
    })
    .unwrap()
}

pub fn test_app(api: MockAuthApi) -> TestApp {
    let api = Arc::new(api);
    let credentials = Arc::new(MemoryCredentialStore::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let presenter = Arc::new(RecordingPresenter::default());
    let app = Arc::new(AppState {
        api: api.clone(),
        credentials: credentials.clone(),
        navigator: navigator.clone(),
        presenter: presenter.clone(),
        config: Arc::new(test_config()),
    });
    TestApp {
        app,
        api,
        credentials,
        navigator,
        presenter,
    }
}
