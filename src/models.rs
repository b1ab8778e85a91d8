//! Tracker Models
//!
//! Data structures for the tracker set and its persisted form.

use serde::{Deserialize, Serialize};

/// Title given to a freshly created tracker.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Category given to a freshly created tracker.
pub const DEFAULT_CATEGORY: &str = "General";

/// A named counter with a log of its values over time.
///
/// Field names match the JSON documents the app exports and imports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tracker {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub count: i64,
    /// Counter value after each change, starting with 0. The last entry
    /// always equals `count` when changed through [`Tracker::apply`].
    pub log: Vec<i64>,
}

impl Tracker {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            title: DEFAULT_TITLE.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            count: 0,
            log: vec![0],
        }
    }

    /// Merge a partial edit into this tracker. A count change is also
    /// appended to the log.
    pub fn apply(&mut self, changes: &TrackerChanges) {
        if let Some(title) = &changes.title {
            self.title = title.clone();
        }
        if let Some(category) = &changes.category {
            self.category = category.clone();
        }
        if let Some(count) = changes.count {
            self.count = count;
            self.log.push(count);
        }
    }
}

/// Partial edit of a tracker; unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerChanges {
    pub title: Option<String>,
    pub category: Option<String>,
    pub count: Option<i64>,
}

impl TrackerChanges {
    pub fn title(value: impl Into<String>) -> Self {
        Self {
            title: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn category(value: impl Into<String>) -> Self {
        Self {
            category: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn count(value: i64) -> Self {
        Self {
            count: Some(value),
            ..Default::default()
        }
    }
}

/// The single document written to local storage on every change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub trackers: Vec<Tracker>,
    #[serde(default)]
    pub dark: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tracker_starts_with_a_zero_log() {
        let tracker = Tracker::new(7);
        assert_eq!(tracker.id, 7);
        assert_eq!(tracker.title, DEFAULT_TITLE);
        assert_eq!(tracker.category, DEFAULT_CATEGORY);
        assert_eq!(tracker.count, 0);
        assert_eq!(tracker.log, vec![0]);
    }

    #[test]
    fn count_change_appends_exactly_one_log_entry() {
        let mut tracker = Tracker::new(1);

        tracker.apply(&TrackerChanges::count(3));
        assert_eq!(tracker.count, 3);
        assert_eq!(tracker.log, vec![0, 3]);

        tracker.apply(&TrackerChanges::count(2));
        assert_eq!(tracker.log.len(), 3);
        assert_eq!(tracker.log.last(), Some(&tracker.count));
    }

    #[test]
    fn text_changes_leave_the_log_alone() {
        let mut tracker = Tracker::new(1);
        tracker.apply(&TrackerChanges::title("Water"));
        tracker.apply(&TrackerChanges::category("Health"));

        assert_eq!(tracker.title, "Water");
        assert_eq!(tracker.category, "Health");
        assert_eq!(tracker.log, vec![0]);
    }

    #[test]
    fn combined_change_applies_every_set_field() {
        let mut tracker = Tracker::new(1);
        tracker.apply(&TrackerChanges {
            title: Some("Runs".into()),
            category: None,
            count: Some(-4),
        });

        assert_eq!(tracker.title, "Runs");
        assert_eq!(tracker.category, DEFAULT_CATEGORY);
        assert_eq!(tracker.count, -4);
        assert_eq!(tracker.log, vec![0, -4]);
    }

    #[test]
    fn persisted_state_defaults_missing_fields() {
        let state: PersistedState = serde_json::from_str("{}").unwrap();
        assert!(state.trackers.is_empty());
        assert!(!state.dark);
    }
}
