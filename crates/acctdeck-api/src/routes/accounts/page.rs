//! Account selection page rendering - Full page endpoint

use crate::components::{render_account_card, Modal};
use crate::AppState;
use acctdeck_config::Config;
use acctdeck_core::AccountPage;
use acctdeck_utils::escape_html;

/// Render the whole screen: header, card grid, add button and dialogs
///
/// Every action inside swaps this fragment (`#account-screen`) with the
/// re-rendered one.
pub fn render_account_screen(page: &AccountPage, config: &Config) -> String {
    let cards: String = page
        .accounts()
        .iter()
        .map(|account| render_account_card(account, &config.currency))
        .collect();
    let modals = page.modals();

    let create_modal = Modal::new("Create New Account", "Create")
        .open(modals.create)
        .on_close("/accounts/create/close")
        .on_submit("/accounts")
        .include("#new-account-name")
        .body(format!(
            r#"<input type='text' id='new-account-name' name='name' value='{}' placeholder='Enter account name' autofocus class='w-full p-2 border border-blue-300 rounded-md mb-4 focus:outline-none focus:ring-2 focus:ring-blue-500'>"#,
            escape_html(page.draft_name())
        ));

    let logout_modal = Modal::new("Confirm Logout", "Logout")
        .open(modals.logout)
        .on_close("/logout/cancel")
        .on_submit("/logout")
        .body("<p class='text-lg text-gray-700'>Are you sure you want to log out?</p>");

    let delete_name = page.delete_target().map(|a| a.name.as_str()).unwrap_or("");
    let delete_modal = Modal::new("Confirm Delete Account", "Delete")
        .open(modals.delete)
        .on_close("/accounts/delete/cancel")
        .on_submit("/accounts/delete/confirm")
        .body(format!(
            r#"<p class='text-lg text-gray-700'>Are you sure you want to delete the account "{}"? This action cannot be undone.</p>"#,
            escape_html(delete_name)
        ));

    format!(
        r#"<div id='account-screen' hx-target='this' hx-swap='outerHTML' class='min-h-screen bg-gradient-to-br from-blue-100 to-blue-200 p-8'>
    <div class='max-w-4xl mx-auto bg-white rounded-lg shadow-lg p-8'>
        <div class='flex justify-between items-center mb-8'>
            <h1 class='text-3xl font-bold text-blue-600'>Select an Account</h1>
            <button type='button' class='text-blue-500 hover:text-blue-700 transition-colors' hx-post='/logout/open'>Log Out</button>
        </div>
        <p class='text-xl text-blue-800 mb-8'>Welcome back, {}</p>
        <div class='account-grid grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6'>{}</div>
        <button type='button' class='add-account mt-8 w-full bg-gradient-to-r from-blue-500 to-blue-600 text-white py-3 rounded-md hover:from-blue-600 hover:to-blue-700 transition-all duration-300 text-lg font-semibold shadow-sm hover:shadow' hx-post='/accounts/create/open'>+ Add New Account</button>
    </div>
    {}{}{}
</div>"#,
        escape_html(page.username()),
        cards,
        create_modal.render(),
        logout_modal.render(),
        delete_modal.render(),
    )
}

/// Account selection page
///
/// A full page load mounts the page afresh, so accounts created or deleted
/// earlier are gone. HTMX requests just re-render the current state.
pub async fn page_accounts(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let mut page = state.page.write().await;
    if !crate::is_htmx_request(&headers) {
        page.mount(state.session.as_ref(), &state.keys());
    }

    let screen = render_account_screen(&page, &state.config);
    axum::response::Html(crate::page_response(&headers, "Accounts", &screen))
}
