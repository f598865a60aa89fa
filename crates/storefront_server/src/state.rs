//! Shared application state and the per-request session runner.

use crate::error::ApiError;
use storefront_core::{Database, Session};

/// Process-wide state; read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Runs `work` in a fresh session on the blocking pool.
    ///
    /// The session is released when `work` returns, before the handler
    /// resumes.
    pub async fn run<T, F>(&self, work: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&Session) -> Result<T, ApiError> + Send + 'static,
    {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || db.with_session(work))
            .await
            .map_err(|err| ApiError::Unhandled(format!("request task failed: {err}")))?
    }
}
