//! Account routes - Account selection screen
//!
//! Features:
//! - Account cards with hover-only delete control
//! - Create account dialog
//! - Delete confirmation dialog
//! - Select account (redirects home)
//!
//! Structure:
//! - api.rs: JSON API and HTMX action endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{
    api_accounts,
    htmx_cancel_delete,
    htmx_close_create,
    htmx_confirm_delete,
    htmx_create_account,
    htmx_open_create,
    htmx_request_delete,
    htmx_select_account,
    CreateAccountForm,
};
pub use page::{page_accounts, render_account_screen};
