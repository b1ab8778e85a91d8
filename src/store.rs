//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All mutations
//! go through [`TrackerStore`], which records undo snapshots and writes
//! every change through to local storage.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::history::UndoHistory;
use crate::models::{PersistedState, Tracker, TrackerChanges};
use crate::storage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All trackers, in display/insertion order
    pub trackers: Vec<Tracker>,
    /// Dark mode flag; persisted but never part of undo history
    pub dark: bool,
}

/// Handle to the app state, its undo history, and the id counter.
///
/// `Copy`, so components can move it into event closures freely.
#[derive(Clone, Copy)]
pub struct TrackerStore {
    state: Store<AppState>,
    history: StoredValue<UndoHistory>,
    next_id: StoredValue<u64>,
}

impl TrackerStore {
    /// Build the store from whatever local storage holds, falling back to
    /// an empty tracker set in light mode.
    pub fn new() -> Self {
        let PersistedState { trackers, dark } = storage::load();
        let next_id = trackers.iter().map(|t| t.id + 1).max().unwrap_or(1);
        Self {
            state: Store::new(AppState { trackers, dark }),
            history: StoredValue::new(UndoHistory::default()),
            next_id: StoredValue::new(next_id),
        }
    }

    // ========================
    // Reactive Accessors
    // ========================

    pub fn trackers(&self) -> Vec<Tracker> {
        self.state.trackers().get()
    }

    pub fn dark(&self) -> bool {
        self.state.dark().get()
    }

    /// Read one tracker's fields reactively; None once it is gone.
    pub fn with_tracker<T>(&self, id: u64, f: impl FnOnce(&Tracker) -> T) -> Option<T> {
        self.state.trackers().read().iter().find(|t| t.id == id).map(f)
    }

    /// Untracked copy of the tracker list, for export and persistence.
    pub fn trackers_untracked(&self) -> Vec<Tracker> {
        self.state.trackers().get_untracked()
    }

    // ========================
    // Mutations
    // ========================

    /// Append a fresh tracker with the next id.
    pub fn add_tracker(&self) {
        self.snapshot();
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.state.trackers().write().push(Tracker::new(id));
        self.persist();
    }

    /// Merge a partial edit into the tracker with the given id. An unknown
    /// id is a no-op, but the history entry is recorded either way.
    pub fn update_tracker(&self, id: u64, changes: TrackerChanges) {
        self.snapshot();
        if let Some(tracker) = self.state.trackers().write().iter_mut().find(|t| t.id == id) {
            tracker.apply(&changes);
        }
        self.persist();
    }

    /// Remove the tracker with the given id; no-op when absent.
    pub fn remove_tracker(&self, id: u64) {
        self.snapshot();
        self.state.trackers().write().retain(|t| t.id != id);
        self.persist();
    }

    /// Restore the tracker list to the most recent snapshot. No-op on an
    /// empty history. Dark mode is left as it is.
    pub fn undo(&self) {
        let Some(snapshot) = self.history.write_value().pop() else {
            return;
        };
        self.state.trackers().set(snapshot);
        self.persist();
    }

    /// Drop all trackers, the undo history, and the persisted slot.
    /// Callers gate this behind an explicit confirmation.
    pub fn reset_all(&self) {
        self.state.trackers().set(Vec::new());
        self.history.write_value().clear();
        storage::clear();
    }

    /// Replace the tracker list wholesale with an imported set.
    pub fn import_trackers(&self, trackers: Vec<Tracker>) {
        self.snapshot();
        let next_id = trackers.iter().map(|t| t.id + 1).max().unwrap_or(1);
        if next_id > self.next_id.get_value() {
            self.next_id.set_value(next_id);
        }
        self.state.trackers().set(trackers);
        self.persist();
    }

    /// Flip dark mode. Persisted, but never recorded in undo history.
    pub fn toggle_dark(&self) {
        let dark = !self.state.dark().get_untracked();
        self.state.dark().set(dark);
        self.persist();
    }

    // ========================
    // Internals
    // ========================

    fn snapshot(&self) {
        let current = self.state.trackers().get_untracked();
        self.history.write_value().push(current);
    }

    fn persist(&self) {
        storage::save(&PersistedState {
            trackers: self.state.trackers().get_untracked(),
            dark: self.state.dark().get_untracked(),
        });
    }
}

/// Get the tracker store from context
pub fn use_tracker_store() -> TrackerStore {
    expect_context::<TrackerStore>()
}
