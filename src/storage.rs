//! Local Storage Persistence
//!
//! One localStorage slot holds the whole app state as JSON. Every store
//! mutation overwrites it; load runs once at startup.

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};

use crate::models::PersistedState;

/// The single slot everything is persisted under.
pub const STORAGE_KEY: &str = "trackers_pro_v1";

/// Read the persisted state. A missing key means a first run and yields
/// defaults silently; anything unreadable also yields defaults but leaves
/// a diagnostic in the console. Never fails.
pub fn load() -> PersistedState {
    match LocalStorage::get(STORAGE_KEY) {
        Ok(state) => state,
        Err(StorageError::KeyNotFound(_)) => PersistedState::default(),
        Err(err) => {
            web_sys::console::error_1(
                &format!("[STORAGE] discarding unreadable saved state: {err}").into(),
            );
            PersistedState::default()
        }
    }
}

/// Overwrite the slot with the given state.
pub fn save(state: &PersistedState) {
    if let Err(err) = LocalStorage::set(STORAGE_KEY, state) {
        web_sys::console::error_1(&format!("[STORAGE] persist failed: {err}").into());
    }
}

/// Remove the slot entirely.
pub fn clear() {
    LocalStorage::delete(STORAGE_KEY);
}
