//! services/client/src/widgets/pages.rs
//!
//! One controller per auth page, composing the forms and indicators that page shows.

use crate::widgets::forms::{FormController, FormFields};
use crate::widgets::state::AppState;
use crate::widgets::strength::StrengthIndicator;
use athletic_spirit_core::domain::{Credentials, Registration};
use athletic_spirit_core::forms::{
    FormError, FormKind, FormSubmissionResult, Page, INVALID_RESET_TOKEN,
};
use athletic_spirit_core::ports::PortResult;
use std::sync::Arc;
use tracing::{info, warn};

/// Opens the GitHub sign-in popup. The flow itself happens outside this client.
async fn open_github(app: &AppState) -> PortResult<()> {
    let url = app.api.github_authorize_url();
    info!("Starting GitHub sign-in at {}", url);
    app.navigator.open_popup(&url).await
}

fn google_form(app: &Arc<AppState>, page: Page) -> FormController {
    if app.config.google_client_id.is_none() {
        warn!("GOOGLE_CLIENT_ID is not set; Google sign-in will be rejected by the backend");
    }
    FormController::new(app.clone(), page, FormKind::GoogleLogin)
}

//=========================================================================================
// Login
//=========================================================================================

pub struct LoginPage {
    app: Arc<AppState>,
    pub form: FormController,
    pub google: FormController,
}

impl LoginPage {
    pub fn new(app: Arc<AppState>) -> Self {
        Self {
            form: FormController::new(app.clone(), Page::Login, FormKind::Login),
            google: google_form(&app, Page::Login),
            app,
        }
    }

    pub async fn submit(
        &self,
        email: &str,
        password: &str,
    ) -> Result<FormSubmissionResult, FormError> {
        self.form
            .submit(FormFields::Login(Credentials {
                email: email.to_string(),
                password: password.to_string(),
            }))
            .await
    }

    /// Receives the ID token handed back by Google's sign-in prompt.
    pub async fn google_callback(&self, id_token: &str) -> Result<FormSubmissionResult, FormError> {
        self.google
            .submit(FormFields::GoogleLogin {
                id_token: id_token.to_string(),
            })
            .await
    }

    pub async fn github(&self) -> PortResult<()> {
        open_github(&self.app).await
    }
}

//=========================================================================================
// Signup
//=========================================================================================

pub struct SignupPage {
    app: Arc<AppState>,
    pub form: FormController,
    pub google: FormController,
    pub strength: StrengthIndicator,
}

impl SignupPage {
    pub fn new(app: Arc<AppState>) -> Self {
        Self {
            form: FormController::new(app.clone(), Page::Signup, FormKind::Signup),
            google: google_form(&app, Page::Signup),
            strength: StrengthIndicator::default(),
            app,
        }
    }

    pub fn on_password_input(&mut self, password: &str) {
        self.strength.on_input(password);
    }

    pub async fn submit(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<FormSubmissionResult, FormError> {
        self.form
            .submit(FormFields::Signup(Registration {
                username: username.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            }))
            .await
    }

    /// Google sign-in from the signup page; errors surface as alerts here.
    pub async fn google_callback(&self, id_token: &str) -> Result<FormSubmissionResult, FormError> {
        self.google
            .submit(FormFields::GoogleLogin {
                id_token: id_token.to_string(),
            })
            .await
    }

    pub async fn github(&self) -> PortResult<()> {
        open_github(&self.app).await
    }
}

//=========================================================================================
// Forgot Password
//=========================================================================================

pub struct ForgotPasswordPage {
    pub form: FormController,
}

impl ForgotPasswordPage {
    pub fn new(app: Arc<AppState>) -> Self {
        Self {
            form: FormController::new(app, Page::ForgotPassword, FormKind::ForgotPassword),
        }
    }

    pub async fn submit(&self, email: &str) -> Result<FormSubmissionResult, FormError> {
        self.form
            .submit(FormFields::ForgotPassword {
                email: email.to_string(),
            })
            .await
    }

    /// The submit button reads "Sending..." while a request is in flight.
    pub async fn submit_label(&self) -> &'static str {
        if self.form.state().await.is_submitting() {
            "Sending..."
        } else {
            "Send Reset Link"
        }
    }
}

//=========================================================================================
// Reset Password
//=========================================================================================

pub struct ResetPasswordPage {
    token: Option<String>,
    pub form: FormController,
    pub strength: StrengthIndicator,
}

impl ResetPasswordPage {
    /// Reads the reset token from the page's query string, once.
    ///
    /// Without a token the form is disabled before it can be used.
    pub async fn load(app: Arc<AppState>, query: &str) -> Self {
        let token = query_param(query, "token");
        let form = FormController::new(app, Page::ResetPassword, FormKind::ResetPassword);
        if token.is_none() {
            warn!("Reset page opened without a token");
            form.disable(INVALID_RESET_TOKEN).await;
        }
        Self {
            token,
            form,
            strength: StrengthIndicator::default(),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn on_password_input(&mut self, password: &str) {
        self.strength.on_input(password);
    }

    pub async fn submit(
        &self,
        password: &str,
        confirmation: &str,
    ) -> Result<FormSubmissionResult, FormError> {
        self.form
            .submit(FormFields::ResetPassword {
                token: self.token.clone().unwrap_or_default(),
                password: password.to_string(),
                confirmation: confirmation.to_string(),
            })
            .await
    }
}

/// Returns the first non-empty value of `key` in a URL query string.
pub fn query_param(query: &str, key: &str) -> Option<String> {
    let decode = |raw: &str| {
        let spaced = raw.replace('+', " ");
        urlencoding::decode(&spaced)
            .map(|value| value.into_owned())
            .unwrap_or(spaced)
    };

    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(name) == key).then(|| decode(value))
        })
        .filter(|value| !value.is_empty())
}
