//! Route modules for the API server
//!
//! - accounts: Account selection screen, create/select/delete actions
//! - session: Logout dialog, home and login pages
//! - settings: Effective configuration
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON API and HTMX action endpoints
//! - page.rs: HTMX page rendering

pub mod accounts;
pub mod session;
pub mod settings;
