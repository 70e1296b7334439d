//! Redirect target pages - Full page endpoints

use crate::AppState;

/// Home page, reached after selecting an account
pub async fn page_home(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let username = state
        .session
        .get(&state.config.session.username_key)
        .unwrap_or_default();

    let inner_content = format!(
        r#"<div class='min-h-screen bg-gradient-to-br from-blue-100 to-blue-200 p-8'>
    <div class='max-w-4xl mx-auto bg-white rounded-lg shadow-lg p-8'>
        <h1 class='text-3xl font-bold text-blue-600 mb-4'>Dashboard</h1>
        <p class='text-xl text-blue-800 mb-8'>Signed in as {}</p>
        <a href='/accounts' class='text-blue-500 hover:text-blue-700'>Switch account</a>
    </div>
</div>"#,
        acctdeck_utils::escape_html(&username)
    );

    axum::response::Html(crate::page_response(&headers, "Dashboard", &inner_content))
}

/// Login page, reached after logging out
pub async fn page_login(headers: axum::http::HeaderMap) -> axum::response::Html<String> {
    let inner_content = r#"<div class='min-h-screen bg-gradient-to-br from-blue-100 to-blue-200 p-8'>
    <div class='max-w-md mx-auto bg-white rounded-lg shadow-lg p-8'>
        <h1 class='text-3xl font-bold text-blue-600 mb-4'>Log In</h1>
        <p class='text-lg text-gray-700 mb-6'>You have been signed out.</p>
        <a href='/accounts' class='text-blue-500 hover:text-blue-700'>Back to accounts</a>
    </div>
</div>"#;

    axum::response::Html(crate::page_response(&headers, "Log In", inner_content))
}
