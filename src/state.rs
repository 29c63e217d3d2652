use std::sync::{Arc, OnceLock};

use crate::error::ApiError;
use crate::repository::PlaceStore;

/// Process-wide handle to the datastore port.
///
/// The store is attached exactly once when startup finishes opening the
/// datastore; until then consumers get `ServiceUnavailable` and must fail
/// fast rather than block. Read-only for the rest of the process
/// lifetime.
#[derive(Default)]
pub struct AppState {
    store: OnceLock<Arc<dyn PlaceStore>>,
}

impl AppState {
    pub fn new() -> AppState {
        AppState { store: OnceLock::new() }
    }

    /// Attaches the store port. The first call wins; later calls are
    /// ignored.
    pub fn set_store(&self, store: Arc<dyn PlaceStore>) {
        let _ = self.store.set(store);
    }

    pub fn store(&self) -> Result<&Arc<dyn PlaceStore>, ApiError> {
        self.store.get().ok_or(ApiError::ServiceUnavailable)
    }
}
