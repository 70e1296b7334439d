//! Reusable HTML fragments
//!
//! - card: AccountCard
//! - modal: Modal dialog

pub mod card;
pub mod modal;

pub use card::render_account_card;
pub use modal::Modal;
