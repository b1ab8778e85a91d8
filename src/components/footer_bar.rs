//! Footer Bar Component
//!
//! Export / import / reset-all controls.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::ConfirmButton;
use crate::files;
use crate::store::use_tracker_store;

#[component]
pub fn FooterBar() -> impl IntoView {
    let store = use_tracker_store();

    let on_export = move |_| {
        if let Err(err) = files::download_trackers(&store.trackers_untracked()) {
            web_sys::console::error_1(&format!("[EXPORT] {err}").into());
        }
    };

    // Async file read; the parsed result replaces the tracker set in one
    // state update. A bad document aborts with an alert and no change.
    let on_import = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Clear the input so picking the same file again re-fires change
        input.set_value("");

        spawn_local(async move {
            let parsed = files::read_file_text(&file)
                .await
                .and_then(|text| files::parse_trackers(&text));
            match parsed {
                Ok(trackers) => store.import_trackers(trackers),
                Err(err) => {
                    web_sys::console::error_1(&format!("[IMPORT] {err}").into());
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message("Invalid JSON file");
                    }
                }
            }
        });
    };

    view! {
        <footer class="app-footer">
            <button class="export-btn" on:click=on_export>"Export"</button>

            <label class="import">
                "Import"
                <input
                    type="file"
                    accept="application/json"
                    hidden
                    on:change=on_import
                />
            </label>

            <ConfirmButton
                button_class="reset-btn"
                label="Clear all"
                prompt="Delete all trackers?"
                on_confirm=Callback::new(move |_| store.reset_all())
            />
        </footer>
    }
}
