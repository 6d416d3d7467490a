use prometheus::Registry;
use shared::ItemStore;
use std::sync::Arc;
use std::time::Instant;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
    pub started_at: Instant,
    pub registry: Registry,
}

impl AppState {
    pub fn new(store: Arc<dyn ItemStore>, registry: Registry) -> Self {
        Self {
            store,
            started_at: Instant::now(),
            registry,
        }
    }
}
