//! Logout flow
//!
//! The only fallible, suspending operation on the page: call the logout
//! endpoint, then clear stored credentials and redirect to the login page.

use crate::error::{CoreError, CoreResult};
use crate::navigation::Navigator;
use crate::session::{self, SessionKeys, SessionStore};
use acctdeck_config::AuthConfig;
use async_trait::async_trait;
use std::sync::Arc;

/// Remote session termination
#[async_trait]
pub trait AuthClient: Send + Sync {
    async fn logout(&self, token: Option<&str>) -> CoreResult<()>;
}

/// Logout over HTTP: `POST {url}` with the bearer token, if one is stored
pub struct HttpAuthClient {
    client: reqwest::Client,
    url: String,
}

impl HttpAuthClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl AuthClient for HttpAuthClient {
    async fn logout(&self, token: Option<&str>) -> CoreResult<()> {
        let mut request = self.client.post(&self.url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::LogoutFailed {
                message: format!("{} returned {}", self.url, status),
            });
        }
        Ok(())
    }
}

/// Logout with no remote session to end
#[derive(Debug, Default)]
pub struct NoopAuthClient;

#[async_trait]
impl AuthClient for NoopAuthClient {
    async fn logout(&self, _token: Option<&str>) -> CoreResult<()> {
        Ok(())
    }
}

/// Pick the client for the configured endpoint
pub fn client_from_config(config: &AuthConfig) -> Arc<dyn AuthClient> {
    match config.logout_url.as_deref().filter(|url| !url.trim().is_empty()) {
        Some(url) => Arc::new(HttpAuthClient::new(url)),
        None => Arc::new(NoopAuthClient),
    }
}

/// Confirm logout
///
/// On success the username and token are removed and the navigator is sent
/// to `login_path`. On failure the error is logged and returned; storage is
/// left as it was and no navigation happens.
pub async fn confirm_logout(
    auth: &dyn AuthClient,
    store: &dyn SessionStore,
    keys: &SessionKeys,
    navigator: &dyn Navigator,
    login_path: &str,
) -> CoreResult<()> {
    let token = session::token(store, keys);

    match auth.logout(token.as_deref()).await {
        Ok(()) => {
            store.remove(&keys.username);
            session::remove_token(store, keys);
            log::info!("Logged out, redirecting to {}", login_path);
            navigator.navigate(login_path);
            Ok(())
        }
        Err(e) => {
            log::error!("{}", e.to_details());
            Err(e)
        }
    }
}
