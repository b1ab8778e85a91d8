//! Tracker Card Component
//!
//! One tracker: title/category inputs, counter controls, sparkline, delete.
//! Fields are read through memos keyed on the tracker id so edits and undo
//! update the card in place without re-keying the row.

use leptos::prelude::*;

use crate::components::Chart;
use crate::models::TrackerChanges;
use crate::store::use_tracker_store;

#[component]
pub fn TrackerCard(id: u64) -> impl IntoView {
    let store = use_tracker_store();

    let title = Memo::new(move |_| {
        store.with_tracker(id, |t| t.title.clone()).unwrap_or_default()
    });
    let category = Memo::new(move |_| {
        store.with_tracker(id, |t| t.category.clone()).unwrap_or_default()
    });
    let count = Memo::new(move |_| store.with_tracker(id, |t| t.count).unwrap_or(0));
    let log = Memo::new(move |_| store.with_tracker(id, |t| t.log.clone()).unwrap_or_default());

    view! {
        <div class="tracker">
            <input
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| {
                    store.update_tracker(id, TrackerChanges::title(event_target_value(&ev)));
                }
            />

            <input
                type="text"
                class="category"
                placeholder="Category"
                prop:value=move || category.get()
                on:input=move |ev| {
                    store.update_tracker(id, TrackerChanges::category(event_target_value(&ev)));
                }
            />

            <div class="counter">
                <button on:click=move |_| {
                    store.update_tracker(id, TrackerChanges::count(count.get_untracked() - 1));
                }>
                    "−"
                </button>

                <span>{move || count.get()}</span>

                <button on:click=move |_| {
                    store.update_tracker(id, TrackerChanges::count(count.get_untracked() + 1));
                }>
                    "＋"
                </button>
            </div>

            <Chart log=log />

            <button class="delete" on:click=move |_| store.remove_tracker(id)>
                "Delete"
            </button>
        </div>
    }
}
