pub mod console;
pub mod credentials;
pub mod http;

pub use console::{ConsoleNavigator, ConsolePresenter};
pub use credentials::FileCredentialStore;
pub use http::HttpAuthAdapter;
