//! Utility functions and helpers

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a balance as `{symbol}{amount}` with a fixed number of decimals
///
/// No thousands separators: `5234.56` renders as `$5234.56`.
pub fn format_balance(balance: Decimal, symbol: &str, decimal_places: u32) -> String {
    let mut rounded =
        balance.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimal_places);
    format!("{}{}", symbol, rounded)
}

/// Escape text for interpolation into HTML content or attributes
pub fn escape_html(content: &str) -> String {
    let mut escaped = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
