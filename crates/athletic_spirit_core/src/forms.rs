//! crates/athletic_spirit_core/src/forms.rs
//!
//! The submission state machine shared by every auth form, and the pure
//! mapping from a submission outcome to the UI effects it should trigger.

use crate::domain::Destination;
use std::fmt;
use std::time::Duration;

/// How long the reset-password page shows its success message before
/// sending the user back to the login page.
pub const RESET_REDIRECT_DELAY: Duration = Duration::from_secs(3);

pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";
pub const INVALID_RESET_TOKEN: &str = "Invalid or missing reset token.";

//=========================================================================================
// Forms and Pages
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    GoogleLogin,
    Signup,
    ForgotPassword,
    ResetPassword,
}

impl FormKind {
    /// Login flows only count as successful when the server hands back a token.
    pub fn requires_token(self) -> bool {
        matches!(self, Self::Login | Self::GoogleLogin)
    }

    /// Shown on success when the server sends no message. Login flows are silent.
    pub fn default_success(self) -> Option<&'static str> {
        match self {
            Self::Login | Self::GoogleLogin => None,
            Self::Signup => Some("Signup successful! Please log in."),
            Self::ForgotPassword => {
                Some("If an account with that email exists, a reset link has been sent.")
            }
            Self::ResetPassword => Some("Password has been reset successfully!"),
        }
    }

    /// Shown on failure when the server sends no error.
    pub fn default_failure(self) -> &'static str {
        match self {
            Self::Login | Self::GoogleLogin => "An unknown error occurred.",
            Self::Signup => "Signup failed. Please try again.",
            Self::ForgotPassword => "An error occurred. Please try again.",
            Self::ResetPassword => "Failed to reset password. The link may be invalid or expired.",
        }
    }

    /// Shown when no response arrives at all.
    pub fn transport_failure(self) -> &'static str {
        match self {
            Self::Login | Self::Signup => "Could not connect to server.",
            Self::GoogleLogin => "An error occurred during Google login.",
            Self::ForgotPassword => "Could not connect to the server. Please try again later.",
            Self::ResetPassword => "An error occurred. Please try again.",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Login => "login",
            Self::GoogleLogin => "google-login",
            Self::Signup => "signup",
            Self::ForgotPassword => "forgot-password",
            Self::ResetPassword => "reset-password",
        };
        f.write_str(name)
    }
}

/// Where a form's messages end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// A message element embedded in the page.
    Inline,
    /// A blocking alert, used where the page has no message element.
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Signup,
    ForgotPassword,
    ResetPassword,
}

impl Page {
    pub fn surface(self) -> Surface {
        match self {
            Self::Signup => Surface::Alert,
            Self::Login | Self::ForgotPassword | Self::ResetPassword => Surface::Inline,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

//=========================================================================================
// Responses and Results
//=========================================================================================

/// What the backend answered, reduced to the fields the forms look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub message: Option<String>,
    pub error: Option<String>,
    pub token: Option<String>,
}

impl ApiResponse {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The outcome of one submission attempt. Consumed right away, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmissionResult {
    pub succeeded: bool,
    pub message: Option<String>,
    pub token: Option<String>,
}

impl FormSubmissionResult {
    pub fn from_response(kind: FormKind, response: &ApiResponse) -> Self {
        let token = response
            .token
            .clone()
            .filter(|token| !token.is_empty());
        let succeeded = response.is_ok() && (!kind.requires_token() || token.is_some());

        if succeeded {
            let message = if kind.requires_token() {
                None
            } else {
                non_empty(&response.message)
                    .or_else(|| kind.default_success().map(str::to_string))
            };
            Self {
                succeeded,
                message,
                token,
            }
        } else {
            let message =
                non_empty(&response.error).unwrap_or_else(|| kind.default_failure().to_string());
            Self::rejected(message)
        }
    }

    pub fn transport_failure(kind: FormKind) -> Self {
        Self::rejected(kind.transport_failure())
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            message: Some(message.into()),
            token: None,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}

//=========================================================================================
// State Machine
//=========================================================================================

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Form is disabled: {0}")]
    Disabled(String),
    #[error("Fields for {got} were submitted to the {expected} form")]
    WrongForm { expected: FormKind, got: FormKind },
}

/// Idle → Submitting → {Succeeded, Failed}; either terminal state may submit again.
///
/// There is no in-flight guard: `Submitting` accepts another submission, so
/// overlapping requests for the same form all run to completion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Succeeded { message: Option<String> },
    Failed { message: String },
    /// The form cannot be used at all (e.g. a reset link without a token).
    Disabled { message: String },
}

impl FormState {
    pub fn submit(&self) -> Result<FormState, FormError> {
        match self {
            Self::Disabled { message } => Err(FormError::Disabled(message.clone())),
            _ => Ok(Self::Submitting),
        }
    }

    pub fn resolve(&self, result: &FormSubmissionResult) -> FormState {
        match self {
            Self::Disabled { .. } => self.clone(),
            _ if result.succeeded => Self::Succeeded {
                message: result.message.clone(),
            },
            _ => Self::Failed {
                message: result
                    .message
                    .clone()
                    .unwrap_or_else(|| "Request failed.".to_string()),
            },
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Succeeded { message } => message.as_deref(),
            Self::Failed { message } | Self::Disabled { message } => Some(message),
            Self::Idle | Self::Submitting => None,
        }
    }
}

//=========================================================================================
// Effects
//=========================================================================================

/// A side effect requested by a settled submission, executed by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    PersistToken(String),
    Navigate {
        to: Destination,
        after: Option<Duration>,
    },
    ShowInline {
        text: String,
        tone: Tone,
    },
    Alert(String),
}

fn show(page: Page, text: String, tone: Tone) -> FormEffect {
    match page.surface() {
        Surface::Inline => FormEffect::ShowInline { text, tone },
        Surface::Alert => FormEffect::Alert(text),
    }
}

/// Maps a result to the effects the page should run, in order.
pub fn effects(page: Page, kind: FormKind, result: &FormSubmissionResult) -> Vec<FormEffect> {
    if !result.succeeded {
        let text = result
            .message
            .clone()
            .unwrap_or_else(|| kind.default_failure().to_string());
        return vec![show(page, text, Tone::Error)];
    }

    let mut effects = Vec::new();
    if kind.requires_token() {
        if let Some(token) = &result.token {
            effects.push(FormEffect::PersistToken(token.clone()));
        }
        effects.push(FormEffect::Navigate {
            to: Destination::Home,
            after: None,
        });
        return effects;
    }

    if let Some(text) = &result.message {
        effects.push(show(page, text.clone(), Tone::Success));
    }
    match kind {
        FormKind::Signup => effects.push(FormEffect::Navigate {
            to: Destination::Login,
            after: None,
        }),
        FormKind::ResetPassword => effects.push(FormEffect::Navigate {
            to: Destination::Login,
            after: Some(RESET_REDIRECT_DELAY),
        }),
        _ => {}
    }
    effects
}
