//! Account card

use acctdeck_config::CurrencyConfig;
use acctdeck_core::Account;
use acctdeck_utils::{escape_html, format_balance};

/// Render one account as a clickable card
///
/// Clicking the card selects the account. The delete control only shows
/// while the card is hovered, and its `consume` trigger keeps the click from
/// reaching the card's select handler.
pub fn render_account_card(account: &Account, currency: &CurrencyConfig) -> String {
    let path_id = urlencoding::encode(&account.id);
    format!(
        r#"<div class='account-card group relative bg-gradient-to-br from-blue-50 to-blue-100 rounded-lg shadow-md p-6 hover:shadow-lg transition-all cursor-pointer' data-account-id='{}' hx-post='/accounts/{}/select' hx-trigger='click'>
    <button type='button' class='delete-control hidden group-hover:block absolute top-2 right-2 text-red-500 hover:text-red-700 transition-colors' title='Delete account' hx-post='/accounts/{}/delete' hx-trigger='click consume'>
        <svg xmlns='http://www.w3.org/2000/svg' class='h-6 w-6' viewBox='0 0 24 24' fill='currentColor'><path fill-rule='evenodd' d='M5.47 5.47a.75.75 0 011.06 0L12 10.94l5.47-5.47a.75.75 0 111.06 1.06L13.06 12l5.47 5.47a.75.75 0 11-1.06 1.06L12 13.06l-5.47 5.47a.75.75 0 01-1.06-1.06L10.94 12 5.47 6.53a.75.75 0 010-1.06z' clip-rule='evenodd'/></svg>
    </button>
    <h2 class='text-xl font-semibold text-blue-700 mb-4'>{}</h2>
    <p class='text-2xl font-bold text-blue-900 mb-4'>{}</p>
    <span class='block w-full text-center bg-gradient-to-r from-blue-500 to-blue-600 text-white py-2 rounded-md shadow-sm'>Select</span>
</div>"#,
        escape_html(&account.id),
        path_id,
        path_id,
        escape_html(&account.name),
        format_balance(account.balance, &currency.symbol, currency.decimal_places),
    )
}
