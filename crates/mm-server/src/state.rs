use std::sync::Arc;

use chrono::{DateTime, Utc};
use mm_store::CatalogStore;

use crate::error::{ApiError, StoreContext};

/// Source of the current time for time-dependent routes.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Shared handler state.
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
    clock: Clock,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>) -> Arc<Self> {
        Self::with_clock(store, Arc::new(Utc::now))
    }

    pub fn with_clock(store: Arc<dyn CatalogStore>, clock: Clock) -> Arc<Self> {
        Arc::new(Self { store, clock })
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    /// Run a store call on the blocking pool. Store calls may hit the disk,
    /// so they never run on an async worker thread.
    pub async fn run<T, F>(&self, context: &'static str, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&dyn CatalogStore) -> mm_store::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || f(&*store))
            .await
            .map_err(|source| ApiError::Task { context, source })?
            .context(context)
    }
}

pub type SharedState = Arc<AppState>;
