//! Session routes - Logout dialog and redirect targets

pub mod api;
pub mod page;

pub use api::{htmx_cancel_logout, htmx_confirm_logout, htmx_open_logout};
pub use page::{page_home, page_login};
