//! services/client/src/widgets/state.rs
//!
//! Defines the application state shared by every widget.

use crate::adapters::{ConsoleNavigator, ConsolePresenter, FileCredentialStore, HttpAuthAdapter};
use crate::config::Config;
use crate::error::ClientError;
use athletic_spirit_core::ports::{AuthApi, CredentialStore, Navigator, Presenter};
use std::sync::Arc;

//=========================================================================================
// AppState (Shared Across All Pages)
//=========================================================================================

/// The shared application state, created once at startup and handed to each page.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn AuthApi>,
    pub credentials: Arc<dyn CredentialStore>,
    pub navigator: Arc<dyn Navigator>,
    pub presenter: Arc<dyn Presenter>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wires the production adapters from the loaded configuration.
    pub fn from_config(config: Arc<Config>) -> Result<Self, ClientError> {
        let http_client = reqwest::Client::builder().build()?;
        Ok(Self {
            api: Arc::new(HttpAuthAdapter::new(
                http_client,
                config.api_base_url.clone(),
            )),
            credentials: Arc::new(FileCredentialStore::new(
                config.credential_store_path.clone(),
            )),
            navigator: Arc::new(ConsoleNavigator::new(
                config.home_page.clone(),
                config.login_page.clone(),
            )),
            presenter: Arc::new(ConsolePresenter),
            config,
        })
    }
}
