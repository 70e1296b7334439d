//! Settings API endpoints - JSON API

use crate::AppState;
use acctdeck_config::Config;
use axum::Json;

/// Effective configuration, with the seeded token withheld
pub async fn api_settings(state: axum::extract::State<AppState>) -> Json<Config> {
    let mut config = state.config.clone();
    if config.session.token.is_some() {
        config.session.token = Some("********".to_string());
    }
    Json(config)
}
