//! services/client/src/widgets/forms.rs
//!
//! The controller that drives one auth form through a submission: local
//! validation, a single backend call, classification, and the resulting effects.

use crate::widgets::state::AppState;
use athletic_spirit_core::domain::{Credentials, PasswordReset, Registration};
use athletic_spirit_core::forms::{
    self, FormEffect, FormError, FormKind, FormState, FormSubmissionResult, Page, Tone,
    PASSWORD_MISMATCH,
};
use athletic_spirit_core::ports::PortResult;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// The field values of one submission. The variant decides which form it belongs to.
#[derive(Debug, Clone)]
pub enum FormFields {
    Login(Credentials),
    GoogleLogin { id_token: String },
    Signup(Registration),
    ForgotPassword { email: String },
    ResetPassword {
        token: String,
        password: String,
        confirmation: String,
    },
}

impl FormFields {
    pub fn kind(&self) -> FormKind {
        match self {
            Self::Login(_) => FormKind::Login,
            Self::GoogleLogin { .. } => FormKind::GoogleLogin,
            Self::Signup(_) => FormKind::Signup,
            Self::ForgotPassword { .. } => FormKind::ForgotPassword,
            Self::ResetPassword { .. } => FormKind::ResetPassword,
        }
    }
}

/// Drives a single form on a single page.
///
/// Submissions are not serialized: a second `submit` while the first is in
/// flight runs alongside it, and the last one to settle decides the final state.
pub struct FormController {
    page: Page,
    kind: FormKind,
    state: Mutex<FormState>,
    app: Arc<AppState>,
}

impl FormController {
    pub fn new(app: Arc<AppState>, page: Page, kind: FormKind) -> Self {
        Self {
            page,
            kind,
            state: Mutex::new(FormState::Idle),
            app,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub async fn state(&self) -> FormState {
        self.state.lock().await.clone()
    }

    /// Puts the form out of use and shows why.
    pub async fn disable(&self, message: &str) {
        *self.state.lock().await = FormState::Disabled {
            message: message.to_string(),
        };
        self.app
            .presenter
            .show_inline(self.page, message, Tone::Error)
            .await;
    }

    pub async fn submit(&self, fields: FormFields) -> Result<FormSubmissionResult, FormError> {
        if fields.kind() != self.kind {
            return Err(FormError::WrongForm {
                expected: self.kind,
                got: fields.kind(),
            });
        }

        {
            let mut state = self.state.lock().await;
            *state = state.submit()?;
        }
        info!("Submitting {} form", self.kind);

        let mut result = self.run(&fields).await;
        if result.succeeded {
            info!("{} form succeeded", self.kind);
        } else {
            warn!("{} form failed: {:?}", self.kind, result.message);
        }

        // A failed effect turns the submission into a connection failure.
        if let Err(e) = self.apply_all(&result).await {
            error!("Failed to apply {} form effect: {:?}", self.kind, e);
            result = FormSubmissionResult::transport_failure(self.kind);
            if let Err(e) = self.apply_all(&result).await {
                error!("Failed to show {} form error: {:?}", self.kind, e);
            }
        }

        {
            let mut state = self.state.lock().await;
            *state = state.resolve(&result);
        }
        Ok(result)
    }

    /// Validates locally, then issues exactly one request.
    async fn run(&self, fields: &FormFields) -> FormSubmissionResult {
        let api = &self.app.api;
        let response = match fields {
            FormFields::Login(credentials) => api.login(credentials).await,
            FormFields::GoogleLogin { id_token } => api.google_login(id_token).await,
            FormFields::Signup(registration) => api.signup(registration).await,
            FormFields::ForgotPassword { email } => api.forgot_password(email).await,
            FormFields::ResetPassword {
                token,
                password,
                confirmation,
            } => {
                if password != confirmation {
                    return FormSubmissionResult::rejected(PASSWORD_MISMATCH);
                }
                let reset = PasswordReset {
                    token: token.clone(),
                    password: password.clone(),
                };
                api.reset_password(&reset).await
            }
        };

        match response {
            Ok(response) => FormSubmissionResult::from_response(self.kind, &response),
            Err(e) => {
                error!("{} request did not complete: {:?}", self.kind, e);
                FormSubmissionResult::transport_failure(self.kind)
            }
        }
    }

    /// Runs the result's effects in order, stopping at the first failure.
    async fn apply_all(&self, result: &FormSubmissionResult) -> PortResult<()> {
        for effect in forms::effects(self.page, self.kind, result) {
            self.apply(effect).await?;
        }
        Ok(())
    }

    async fn apply(&self, effect: FormEffect) -> PortResult<()> {
        match effect {
            FormEffect::PersistToken(token) => self.app.credentials.save_token(&token).await,
            FormEffect::Navigate { to, after: None } => self.app.navigator.navigate(to).await,
            FormEffect::Navigate {
                to,
                after: Some(delay),
            } => {
                let navigator = self.app.navigator.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    if let Err(e) = navigator.navigate(to).await {
                        error!("Delayed navigation to {:?} failed: {:?}", to, e);
                    }
                });
                Ok(())
            }
            FormEffect::ShowInline { text, tone } => {
                self.app.presenter.show_inline(self.page, &text, tone).await;
                Ok(())
            }
            FormEffect::Alert(text) => {
                self.app.presenter.alert(&text).await;
                Ok(())
            }
        }
    }
}
