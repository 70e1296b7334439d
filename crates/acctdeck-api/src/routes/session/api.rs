//! Logout endpoints - HTMX actions

use crate::routes::accounts::render_account_screen;
use crate::AppState;
use acctdeck_core::{confirm_logout, PendingRedirect};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};

async fn render(state: &AppState) -> Html<String> {
    let page = state.page.read().await;
    Html(render_account_screen(&page, &state.config))
}

pub async fn htmx_open_logout(state: State<AppState>) -> Html<String> {
    state.page.write().await.open_logout();
    render(&state).await
}

pub async fn htmx_cancel_logout(state: State<AppState>) -> Html<String> {
    state.page.write().await.cancel_logout();
    render(&state).await
}

/// Confirm logout
///
/// The page lock is not held while the logout endpoint is awaited. A failed
/// logout re-renders the screen unchanged, dialog still open.
pub async fn htmx_confirm_logout(state: State<AppState>, headers: HeaderMap) -> Response {
    let navigator = PendingRedirect::new();
    let result = confirm_logout(
        state.auth.as_ref(),
        state.session.as_ref(),
        &state.keys(),
        &navigator,
        &state.config.routes.login,
    )
    .await;

    match (result, navigator.take()) {
        (Ok(()), Some(target)) => {
            state.page.write().await.cancel_logout();
            crate::redirect(&headers, &target)
        }
        _ => render(&state).await.into_response(),
    }
}
