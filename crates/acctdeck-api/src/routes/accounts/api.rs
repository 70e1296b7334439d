//! Accounts endpoints - JSON API and HTMX actions
//!
//! Each HTMX action applies one user event to the page and answers with the
//! re-rendered screen, or with a redirect when the event navigates away.

use super::page::render_account_screen;
use crate::{ApiError, AppState};
use acctdeck_core::{Account, PendingRedirect};
use axum::extract::{Form, Path, State};
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

/// Create dialog form
#[derive(Debug, Deserialize)]
pub struct CreateAccountForm {
    #[serde(default)]
    pub name: String,
}

/// Current account list (JSON API)
pub async fn api_accounts(state: State<AppState>) -> axum::Json<Vec<Account>> {
    let page = state.page.read().await;
    axum::Json(page.accounts().to_vec())
}

async fn render(state: &AppState) -> Html<String> {
    let page = state.page.read().await;
    Html(render_account_screen(&page, &state.config))
}

pub async fn htmx_open_create(state: State<AppState>) -> Html<String> {
    state.page.write().await.open_create();
    render(&state).await
}

pub async fn htmx_close_create(state: State<AppState>) -> Html<String> {
    state.page.write().await.close_create();
    render(&state).await
}

/// Submit the create dialog
pub async fn htmx_create_account(
    state: State<AppState>,
    Form(form): Form<CreateAccountForm>,
) -> Html<String> {
    {
        let mut page = state.page.write().await;
        page.set_draft_name(form.name);
        if let Some(account) = page.submit_create() {
            log::info!("Created account {} '{}'", account.id, account.name);
        }
    }
    render(&state).await
}

/// Select an account and redirect to the home page
pub async fn htmx_select_account(
    state: State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let navigator = PendingRedirect::new();
    state
        .page
        .read()
        .await
        .select_account(&id, &navigator, &state.config.routes.home)?;

    match navigator.take() {
        Some(target) => Ok(crate::redirect(&headers, &target)),
        None => Ok(render(&state).await.into_response()),
    }
}

/// Stage an account for deletion
pub async fn htmx_request_delete(
    state: State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    state.page.write().await.request_delete(&id)?;
    Ok(render(&state).await)
}

pub async fn htmx_confirm_delete(state: State<AppState>) -> Html<String> {
    if let Some(account) = state.page.write().await.confirm_delete() {
        log::info!("Deleted account {} '{}'", account.id, account.name);
    }
    render(&state).await
}

pub async fn htmx_cancel_delete(state: State<AppState>) -> Html<String> {
    state.page.write().await.cancel_delete();
    render(&state).await
}
