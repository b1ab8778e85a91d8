//! GTracker Frontend App
//!
//! Root component: creates the store, provides it via context, and lays
//! out the header, tracker list, and footer.

use leptos::prelude::*;

use crate::components::{FooterBar, HeaderBar, TrackerCard};
use crate::store::TrackerStore;

#[component]
pub fn App() -> impl IntoView {
    let store = TrackerStore::new();

    // Provide the store to all children
    provide_context(store);

    let app_class = move || if store.dark() { "app dark" } else { "app" };

    view! {
        <div class=app_class>
            <HeaderBar />

            <main>
                <For
                    each=move || store.trackers()
                    key=|tracker| tracker.id
                    children=move |tracker| view! { <TrackerCard id=tracker.id /> }
                />

                <p class="tracker-count">
                    {move || format!("{} trackers", store.trackers().len())}
                </p>
            </main>

            <FooterBar />
        </div>
    }
}
