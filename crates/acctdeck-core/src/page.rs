//! Account selection page state
//!
//! Owns the account list, the three dialog flags, the new-account draft and
//! the staged delete target. Every method is one user event.

use crate::error::{CoreError, CoreResult};
use crate::models::{Account, ModalState};
use crate::navigation::Navigator;
use crate::session::{SessionKeys, SessionStore};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AccountPage {
    #[serde(skip)]
    seed: Vec<Account>,
    accounts: Vec<Account>,
    modals: ModalState,
    draft_name: String,
    delete_target: Option<Account>,
    username: String,
}

impl AccountPage {
    /// Create a page whose list starts (and restarts on mount) as `seed`
    pub fn new(seed: Vec<Account>) -> Self {
        Self {
            accounts: seed.clone(),
            seed,
            modals: ModalState::default(),
            draft_name: String::new(),
            delete_target: None,
            username: String::new(),
        }
    }

    /// Fresh page load: seed list restored, dialogs closed, username re-read
    pub fn mount(&mut self, store: &dyn SessionStore, keys: &SessionKeys) {
        self.accounts = self.seed.clone();
        self.modals = ModalState::default();
        self.draft_name.clear();
        self.delete_target = None;
        self.username = store.get(&keys.username).unwrap_or_default();
        log::debug!("Mounted account page for '{}' with {} accounts", self.username, self.accounts.len());
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn modals(&self) -> ModalState {
        self.modals
    }

    pub fn draft_name(&self) -> &str {
        &self.draft_name
    }

    pub fn delete_target(&self) -> Option<&Account> {
        self.delete_target.as_ref()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    // ==================== Create ====================

    pub fn open_create(&mut self) {
        self.modals.create = true;
    }

    pub fn close_create(&mut self) {
        self.modals.create = false;
    }

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.draft_name = name.into();
    }

    /// Append a zero-balance account named after the draft
    ///
    /// A blank draft is ignored: nothing is added and the dialog stays open.
    /// The new id is the list length plus one, so it can repeat an id that
    /// survived an earlier delete.
    pub fn submit_create(&mut self) -> Option<&Account> {
        if self.draft_name.trim().is_empty() {
            log::debug!("Ignoring blank account name");
            return None;
        }

        let id = (self.accounts.len() + 1).to_string();
        let name = std::mem::take(&mut self.draft_name);
        log::debug!("Creating account {} '{}'", id, name);
        self.accounts.push(Account::new(id, name, Decimal::ZERO));
        self.modals.create = false;
        self.accounts.last()
    }

    // ==================== Select ====================

    /// Select an account: logged, then a full redirect to `home_path`
    pub fn select_account(&self, id: &str, navigator: &dyn Navigator, home_path: &str) -> CoreResult<()> {
        let account = self.account(id).ok_or_else(|| CoreError::AccountNotFound { id: id.to_string() })?;
        log::info!("Selected account: {} '{}' ({})", account.id, account.name, account.balance);
        navigator.navigate(home_path);
        Ok(())
    }

    // ==================== Delete ====================

    /// Stage `id` for deletion and open the confirmation dialog
    pub fn request_delete(&mut self, id: &str) -> CoreResult<()> {
        let account = self
            .account(id)
            .cloned()
            .ok_or_else(|| CoreError::AccountNotFound { id: id.to_string() })?;
        self.delete_target = Some(account);
        self.modals.delete = true;
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.modals.delete = false;
        self.delete_target = None;
    }

    /// Remove the staged account; does nothing when nothing is staged
    pub fn confirm_delete(&mut self) -> Option<Account> {
        let target = self.delete_target.take()?;
        self.accounts.retain(|a| a.id != target.id);
        self.modals.delete = false;
        log::debug!("Deleted account {} '{}'", target.id, target.name);
        Some(target)
    }

    // ==================== Logout ====================

    pub fn open_logout(&mut self) {
        self.modals.logout = true;
    }

    pub fn cancel_logout(&mut self) {
        self.modals.logout = false;
    }
}
