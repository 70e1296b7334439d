//! Client session storage
//!
//! Stands in for the browser's local storage: the page reads the username
//! from it at mount and logout removes the username and auth token.

use acctdeck_config::SessionConfig;
use std::collections::HashMap;
use std::sync::RwLock;

/// Key/value storage for session data
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str);
    fn clear(&self);
}

/// In-memory session store
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding the configured username and token
    pub fn from_config(config: &SessionConfig) -> Self {
        let store = Self::new();
        if !config.username.is_empty() {
            store.set(&config.username_key, config.username.clone());
        }
        if let Some(token) = &config.token {
            store.set(&config.token_key, token.clone());
        }
        store
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
    }

    fn clear(&self) {
        self.entries.write().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

/// Names of the keys the page reads and clears
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionKeys {
    pub username: String,
    pub token: String,
}

impl Default for SessionKeys {
    fn default() -> Self {
        Self::from(&SessionConfig::default())
    }
}

impl From<&SessionConfig> for SessionKeys {
    fn from(config: &SessionConfig) -> Self {
        Self {
            username: config.username_key.clone(),
            token: config.token_key.clone(),
        }
    }
}

/// Read the stored auth token
pub fn token(store: &dyn SessionStore, keys: &SessionKeys) -> Option<String> {
    store.get(&keys.token)
}

/// Remove the stored auth token
pub fn remove_token(store: &dyn SessionStore, keys: &SessionKeys) {
    store.remove(&keys.token);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get("username"), None);

        store.set("username", "alice".to_string());
        assert_eq!(store.get("username").as_deref(), Some("alice"));

        store.remove("username");
        assert_eq!(store.get("username"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear() {
        let store = MemorySessionStore::new();
        store.set("a", "1".to_string());
        store.set("b", "2".to_string());
        assert_eq!(store.len(), 2);
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_from_config_seeds_username_and_token() {
        let config = SessionConfig {
            username: "alice".to_string(),
            token: Some("t0k3n".to_string()),
            ..SessionConfig::default()
        };
        let store = MemorySessionStore::from_config(&config);
        let keys = SessionKeys::from(&config);

        assert_eq!(store.get("username").as_deref(), Some("alice"));
        assert_eq!(token(&store, &keys).as_deref(), Some("t0k3n"));

        remove_token(&store, &keys);
        assert_eq!(token(&store, &keys), None);
        assert_eq!(store.get("username").as_deref(), Some("alice"));
    }

    #[test]
    fn test_from_config_skips_blank_username() {
        let store = MemorySessionStore::from_config(&SessionConfig::default());
        assert!(store.is_empty());
    }
}
