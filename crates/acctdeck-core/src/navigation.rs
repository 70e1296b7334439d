//! Full-page navigation capability

use std::sync::Mutex;

/// Requests a full-page redirect to `path`
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Records the most recent navigation request
///
/// The HTTP layer turns the recorded path into a redirect response.
#[derive(Debug, Default)]
pub struct PendingRedirect {
    target: Mutex<Option<String>>,
}

impl PendingRedirect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the last navigation, if any
    pub fn target(&self) -> Option<String> {
        self.target.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Take the recorded path, leaving nothing pending
    pub fn take(&self) -> Option<String> {
        self.target.lock().unwrap_or_else(|e| e.into_inner()).take()
    }
}

impl Navigator for PendingRedirect {
    fn navigate(&self, path: &str) {
        log::debug!("Navigating to {}", path);
        *self.target.lock().unwrap_or_else(|e| e.into_inner()) = Some(path.to_string());
    }
}
