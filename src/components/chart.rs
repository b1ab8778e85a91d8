//! Sparkline Chart Component
//!
//! Renders a tracker's value log as normalized vertical bars, newest on
//! the right. Negative values get their own class so the stylesheet can
//! tint them.

use leptos::prelude::*;

use sparkline::bars;

#[component]
pub fn Chart(log: Memo<Vec<i64>>) -> impl IntoView {
    view! {
        <div class="chart">
            {move || {
                bars(&log.get())
                    .into_iter()
                    .map(|bar| {
                        let bar_class = if bar.negative { "bar negative" } else { "bar positive" };
                        view! {
                            <div
                                class=bar_class
                                style:height=format!("{:.1}%", bar.height)
                            />
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
