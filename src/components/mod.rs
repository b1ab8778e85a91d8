//! UI Components
//!
//! Reusable Leptos components.

mod chart;
mod confirm_button;
mod footer_bar;
mod header_bar;
mod tracker_card;

pub use chart::Chart;
pub use confirm_button::ConfirmButton;
pub use footer_bar::FooterBar;
pub use header_bar::HeaderBar;
pub use tracker_card::TrackerCard;
