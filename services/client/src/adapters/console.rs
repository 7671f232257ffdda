//! services/client/src/adapters/console.rs
//!
//! Terminal implementations of the `Navigator` and `Presenter` ports used by
//! the interactive shell.

use async_trait::async_trait;
use athletic_spirit_core::domain::Destination;
use athletic_spirit_core::forms::{Page, Tone};
use athletic_spirit_core::ports::{Navigator, PortResult, Presenter};
use tracing::info;

/// "Navigates" by announcing the page the browser would load.
#[derive(Clone, Debug)]
pub struct ConsoleNavigator {
    home_page: String,
    login_page: String,
}

impl ConsoleNavigator {
    pub fn new(home_page: impl Into<String>, login_page: impl Into<String>) -> Self {
        Self {
            home_page: home_page.into(),
            login_page: login_page.into(),
        }
    }

    pub fn page_for(&self, destination: Destination) -> &str {
        match destination {
            Destination::Home => &self.home_page,
            Destination::Login => &self.login_page,
        }
    }
}

#[async_trait]
impl Navigator for ConsoleNavigator {
    async fn navigate(&self, destination: Destination) -> PortResult<()> {
        let page = self.page_for(destination);
        info!("Navigating to {}", page);
        println!("-> {}", page);
        Ok(())
    }

    async fn open_popup(&self, url: &str) -> PortResult<()> {
        info!("Opening popup {}", url);
        println!("-> open in browser: {}", url);
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct ConsolePresenter;

#[async_trait]
impl Presenter for ConsolePresenter {
    async fn show_inline(&self, page: Page, text: &str, tone: Tone) {
        let marker = match tone {
            Tone::Success => "ok",
            Tone::Error => "error",
        };
        println!("[{:?}] {}: {}", page, marker, text);
    }

    async fn alert(&self, text: &str) {
        println!("[alert] {}", text);
    }
}
