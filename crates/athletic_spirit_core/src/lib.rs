pub mod domain;
pub mod forms;
pub mod ports;
pub mod responder;
pub mod strength;

pub use domain::{Credentials, Destination, PasswordReset, Registration, Sender, Transcript, Turn};
pub use forms::{
    ApiResponse, FormEffect, FormError, FormKind, FormState, FormSubmissionResult, Page, Surface,
    Tone,
};
pub use ports::{AuthApi, CredentialStore, Navigator, PortError, PortResult, Presenter};
pub use responder::{Responder, ResponderError};
pub use strength::{StrengthReport, StrengthTier};
