//! Header Bar Component
//!
//! App title plus the add / undo / theme controls.

use leptos::prelude::*;

use crate::store::use_tracker_store;

#[component]
pub fn HeaderBar() -> impl IntoView {
    let store = use_tracker_store();

    view! {
        <header class="app-header">
            <h1>"GTracker"</h1>
            <div class="actions">
                <button
                    class="add-btn"
                    title="New tracker"
                    on:click=move |_| store.add_tracker()
                >
                    "＋"
                </button>
                <button
                    class="undo-btn"
                    title="Undo"
                    on:click=move |_| store.undo()
                >
                    "↩"
                </button>
                <button
                    class="theme-btn"
                    title="Toggle theme"
                    on:click=move |_| store.toggle_dark()
                >
                    {move || if store.dark() { "☀" } else { "🌙" }}
                </button>
            </div>
        </header>
    }
}
