//! Core data models for the account screen

use acctdeck_config::SeedAccount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named balance record displayed as a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

impl Account {
    pub fn new(id: impl Into<String>, name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
        }
    }
}

impl From<&SeedAccount> for Account {
    fn from(seed: &SeedAccount) -> Self {
        Account::new(seed.id.clone(), seed.name.clone(), seed.balance)
    }
}

/// Visibility of the three dialogs on the page
///
/// The flags are independent; nothing stops two being set at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalState {
    pub create: bool,
    pub logout: bool,
    pub delete: bool,
}
