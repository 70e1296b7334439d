//! HTTP server with HTMX support
//!
//! Routes are organized into modules:
//! - routes::accounts: Account selection screen and its actions
//! - routes::session: Logout dialog, home and login pages
//! - routes::settings: Configuration display

pub mod components;
pub mod error;
pub mod routes;

use acctdeck_config::Config;
use acctdeck_core::{auth, page_from_config, AccountPage, AuthClient, MemorySessionStore, SessionKeys, SessionStore};
use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub page: Arc<RwLock<AccountPage>>,
    pub session: Arc<dyn SessionStore>,
    pub auth: Arc<dyn AuthClient>,
    pub config: Config,
}

impl AppState {
    /// State with an in-memory session store and the configured logout client
    pub fn new(config: Config) -> Self {
        let session = Arc::new(MemorySessionStore::from_config(&config.session));
        let auth = auth::client_from_config(&config.auth);
        Self::with_services(config, session, auth)
    }

    pub fn with_services(config: Config, session: Arc<dyn SessionStore>, auth: Arc<dyn AuthClient>) -> Self {
        let mut page = page_from_config(&config);
        page.mount(session.as_ref(), &SessionKeys::from(&config.session));
        Self {
            page: Arc::new(RwLock::new(page)),
            session,
            auth,
            config,
        }
    }

    pub fn keys(&self) -> SessionKeys {
        SessionKeys::from(&self.config.session)
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::accounts::{api_accounts, htmx_cancel_delete, htmx_close_create, htmx_confirm_delete, htmx_create_account, htmx_open_create, htmx_request_delete, htmx_select_account, page_accounts};
    use routes::session::{htmx_cancel_logout, htmx_confirm_logout, htmx_open_logout, page_home, page_login};
    use routes::settings::api_settings;

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/api/accounts", get(api_accounts))
        .route("/api/settings", get(api_settings))
        // HTMX page routes
        .route("/", get(page_home))
        .route("/login", get(page_login))
        .route("/accounts", get(page_accounts).post(htmx_create_account))
        // HTMX action routes
        .route("/accounts/create/open", post(htmx_open_create))
        .route("/accounts/create/close", post(htmx_close_create))
        .route("/accounts/delete/confirm", post(htmx_confirm_delete))
        .route("/accounts/delete/cancel", post(htmx_cancel_delete))
        .route("/accounts/:id/select", post(htmx_select_account))
        .route("/accounts/:id/delete", post(htmx_request_delete))
        .route("/logout", post(htmx_confirm_logout))
        .route("/logout/open", post(htmx_open_logout))
        .route("/logout/cancel", post(htmx_cancel_logout))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Acctdeck</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        @keyframes card-in {{ from {{ opacity: 0; transform: translateY(20px); }} to {{ opacity: 1; transform: translateY(0); }} }}
        @keyframes card-shake {{ 0%, 100% {{ transform: translateX(0); }} 20%, 60% {{ transform: translateX(-5px); }} 40%, 80% {{ transform: translateX(5px); }} }}
        @keyframes modal-in {{ from {{ opacity: 0; transform: scale(0.9); }} to {{ opacity: 1; transform: scale(1); }} }}
        .account-grid {{ animation: card-in 0.5s ease-out; }}
        .account-card {{ animation: card-in 0.3s ease-out; }}
        .account-card:hover {{ animation: card-shake 0.4s; }}
        .modal-panel {{ animation: modal-in 0.2s ease-out; }}
        .add-account:hover {{ transform: scale(1.05); }}
        .add-account:active {{ transform: scale(0.95); }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
</body>
</html>"#,
        acctdeck_utils::escape_html(title),
        content
    )
}

/// Check if request is from HTMX (partial page update)
pub fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(headers: &axum::http::HeaderMap, title: &str, inner_content: &str) -> String {
    if is_htmx_request(headers) {
        inner_content.to_string()
    } else {
        base_html(title, inner_content)
    }
}

/// Full-page redirect
///
/// HTMX requests get an `HX-Redirect` header so the browser performs a real
/// navigation; plain requests get `303 See Other`.
pub fn redirect(headers: &axum::http::HeaderMap, path: &str) -> Response {
    if is_htmx_request(headers) {
        ([("hx-redirect", path.to_string())], "").into_response()
    } else {
        axum::response::Redirect::to(path).into_response()
    }
}

/// Start the HTTP server
///
/// Binds to the configured address and serves until Ctrl-C.
pub async fn start_server(state: AppState) -> std::io::Result<()> {
    let addr = state.config.bind_addr();
    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting Acctdeck server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - /accounts (Account selection)");
    log::info!("  - / (Home)");
    log::info!("  - /login (Login)");
    log::info!("  - /api/* (JSON API endpoints)");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acctdeck_core::{CoreError, CoreResult};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    struct RejectingAuth;

    #[async_trait]
    impl AuthClient for RejectingAuth {
        async fn logout(&self, _token: Option<&str>) -> CoreResult<()> {
            Err(CoreError::LogoutFailed { message: "connection refused".to_string() })
        }
    }

    fn test_state(auth: Arc<dyn AuthClient>) -> (AppState, Arc<MemorySessionStore>) {
        let mut config = Config::default();
        config.session.username = "alice".to_string();
        config.session.token = Some("t0k3n".to_string());
        let session = Arc::new(MemorySessionStore::from_config(&config.session));
        let state = AppState::with_services(config, session.clone(), auth);
        (state, session)
    }

    fn default_state() -> (AppState, Arc<MemorySessionStore>) {
        test_state(Arc::new(acctdeck_core::NoopAuthClient))
    }

    fn htmx_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("hx-request", "true")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = create_router(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_full_page_load() {
        let (state, _) = default_state();
        let request = Request::builder().uri("/accounts").body(Body::empty()).unwrap();
        let (status, _, body) = send(&state, request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains("Welcome back, alice"));
        assert_eq!(body.matches("class='account-card").count(), 3);
    }

    #[tokio::test]
    async fn test_full_page_load_remounts() {
        let (state, _) = default_state();
        send(&state, htmx_post("/accounts/1/delete", "")).await;
        send(&state, htmx_post("/accounts/delete/confirm", "")).await;
        assert_eq!(state.page.read().await.accounts().len(), 2);

        let request = Request::builder().uri("/accounts").body(Body::empty()).unwrap();
        send(&state, request).await;
        assert_eq!(state.page.read().await.accounts().len(), 3);
    }

    #[tokio::test]
    async fn test_create_account() {
        let (state, _) = default_state();
        send(&state, htmx_post("/accounts/create/open", "")).await;
        let (status, _, body) = send(&state, htmx_post("/accounts", "name=Brokerage")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<div id='account-screen'"));
        assert!(body.contains("Brokerage"));
        assert!(!body.contains("Create New Account"));

        let page = state.page.read().await;
        assert_eq!(page.accounts().len(), 4);
        assert_eq!(page.accounts()[3].id, "4");
        assert!(page.accounts()[3].balance.is_zero());
    }

    #[tokio::test]
    async fn test_create_blank_name_keeps_dialog_open() {
        let (state, _) = default_state();
        send(&state, htmx_post("/accounts/create/open", "")).await;
        let (_, _, body) = send(&state, htmx_post("/accounts", "name=%20%20")).await;

        assert!(body.contains("Create New Account"));
        assert_eq!(state.page.read().await.accounts().len(), 3);
    }

    #[tokio::test]
    async fn test_select_redirects_home() {
        let (state, _) = default_state();
        let (status, headers, _) = send(&state, htmx_post("/accounts/2/select", "")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers.get("hx-redirect").unwrap(), "/");

        let request = Request::builder()
            .method("POST")
            .uri("/accounts/3/select")
            .body(Body::empty())
            .unwrap();
        let (status, headers, _) = send(&state, request).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(headers.get("location").unwrap(), "/");
    }

    #[tokio::test]
    async fn test_select_unknown_account() {
        let (state, _) = default_state();
        let (status, headers, _) = send(&state, htmx_post("/accounts/99/select", "")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(headers.get("hx-redirect").is_none());
    }

    #[tokio::test]
    async fn test_delete_flow() {
        let (state, _) = default_state();
        let (_, _, body) = send(&state, htmx_post("/accounts/2/delete", "")).await;
        assert!(body.contains("Confirm Delete Account"));
        assert!(body.contains("&quot;Vacation Fund&quot;") || body.contains("\"Vacation Fund\""));

        let (_, _, body) = send(&state, htmx_post("/accounts/delete/confirm", "")).await;
        assert!(!body.contains("Vacation Fund"));
        assert!(!body.contains("Confirm Delete Account"));

        let ids: Vec<String> = state.page.read().await.accounts().iter().map(|a| a.id.clone()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[tokio::test]
    async fn test_delete_control_does_not_select() {
        let (state, _) = default_state();
        let (status, headers, body) = send(&state, htmx_post("/accounts/2/delete", "")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(headers.get("hx-redirect").is_none());
        assert!(headers.get("location").is_none());
        assert!(body.starts_with("<div id='account-screen'"));

        let page = state.page.read().await;
        assert!(page.modals().delete);
        assert_eq!(page.delete_target().map(|a| a.id.as_str()), Some("2"));
        assert_eq!(page.accounts().len(), 3);
    }

    #[tokio::test]
    async fn test_delete_cancel() {
        let (state, _) = default_state();
        send(&state, htmx_post("/accounts/2/delete", "")).await;
        let (_, _, body) = send(&state, htmx_post("/accounts/delete/cancel", "")).await;
        assert!(!body.contains("Confirm Delete Account"));
        assert_eq!(state.page.read().await.accounts().len(), 3);
    }

    #[tokio::test]
    async fn test_logout_success() {
        let (state, session) = default_state();
        send(&state, htmx_post("/logout/open", "")).await;
        let (_, headers, _) = send(&state, htmx_post("/logout", "")).await;

        assert_eq!(headers.get("hx-redirect").unwrap(), "/login");
        assert_eq!(session.get("username"), None);
        assert_eq!(session.get("token"), None);
        assert!(!state.page.read().await.modals().logout);
    }

    #[tokio::test]
    async fn test_logout_failure_stays_on_page() {
        let (state, session) = test_state(Arc::new(RejectingAuth));
        send(&state, htmx_post("/logout/open", "")).await;
        let (status, headers, body) = send(&state, htmx_post("/logout", "")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(headers.get("hx-redirect").is_none());
        assert!(body.contains("Confirm Logout"));
        assert_eq!(session.get("username").as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn test_logout_cancel() {
        let (state, _) = default_state();
        send(&state, htmx_post("/logout/open", "")).await;
        let (_, _, body) = send(&state, htmx_post("/logout/cancel", "")).await;
        assert!(!body.contains("Confirm Logout"));
    }

    #[tokio::test]
    async fn test_api_accounts() {
        let (state, _) = default_state();
        let request = Request::builder().uri("/api/accounts").body(Body::empty()).unwrap();
        let (status, _, body) = send(&state, request).await;

        assert_eq!(status, StatusCode::OK);
        let accounts: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
        assert_eq!(accounts.len(), 3);
        assert_eq!(accounts[0]["name"], "Personal Checking");
        assert!(accounts[0]["balance"].is_number());
        assert_eq!(accounts[0]["balance"].as_f64(), Some(5234.56));
    }

    #[tokio::test]
    async fn test_api_settings_masks_token() {
        let (state, _) = default_state();
        let request = Request::builder().uri("/api/settings").body(Body::empty()).unwrap();
        let (_, headers, body) = send(&state, request).await;
        let content_type = headers.get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.starts_with("application/json"));
        assert!(!body.contains("t0k3n"));
        assert!(body.contains("\"login\":\"/login\""));
    }

    #[tokio::test]
    async fn test_health_and_placeholder_pages() {
        let (state, _) = default_state();
        let (_, _, body) = send(&state, Request::builder().uri("/api/health").body(Body::empty()).unwrap()).await;
        assert_eq!(body, "OK");

        let (_, _, body) = send(&state, Request::builder().uri("/").body(Body::empty()).unwrap()).await;
        assert!(body.contains("Signed in as alice"));

        let (_, _, body) = send(&state, Request::builder().uri("/login").body(Body::empty()).unwrap()).await;
        assert!(body.contains("You have been signed out."));
    }
}
