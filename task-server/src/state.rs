use crate::config::Settings;
use crate::store::{memory::InMemoryTaskStore, TaskStore};
use jsonwebtoken::DecodingKey;
use std::sync::Arc;

/// Shared application state.
///
/// Everything here is read-only from a request's perspective: the settings
/// and decoding key never change after startup, and the store is the sole
/// collaborator that request flows may suspend on.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub store: Arc<dyn TaskStore>,
    pub decoding_key: Arc<DecodingKey>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self::with_store(settings, Arc::new(InMemoryTaskStore::new()))
    }

    pub fn with_store(settings: Settings, store: Arc<dyn TaskStore>) -> Self {
        let decoding_key = DecodingKey::from_secret(settings.auth.secret.as_bytes());
        Self {
            settings: Arc::new(settings),
            store,
            decoding_key: Arc::new(decoding_key),
        }
    }
}
