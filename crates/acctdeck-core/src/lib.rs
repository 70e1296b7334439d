//! Account selection page state and services

pub mod auth;
pub mod error;
pub mod models;
pub mod navigation;
pub mod page;
pub mod session;

use acctdeck_config::Config;

pub use auth::{confirm_logout, AuthClient, HttpAuthClient, NoopAuthClient};
pub use error::{CoreError, CoreResult, ErrorCode, ErrorSeverity};
pub use models::{Account, ModalState};
pub use navigation::{Navigator, PendingRedirect};
pub use page::AccountPage;
pub use session::{MemorySessionStore, SessionKeys, SessionStore};

/// Build the page from the configured seed accounts
pub fn page_from_config(config: &Config) -> AccountPage {
    AccountPage::new(config.accounts.iter().map(Account::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_default_config() {
        let page = page_from_config(&Config::default());
        let names: Vec<_> = page.accounts().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Personal Checking", "Vacation Fund", "Emergency Fund"]);
    }
}
