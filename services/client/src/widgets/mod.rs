pub mod chat;
pub mod forms;
pub mod pages;
pub mod state;
pub mod strength;

pub use chat::{ChatWidget, ReplyId};
pub use forms::{FormController, FormFields};
pub use pages::{ForgotPasswordPage, LoginPage, ResetPasswordPage, SignupPage};
pub use state::AppState;
pub use strength::StrengthIndicator;
