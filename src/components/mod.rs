//! Leptos components mounted into the static itinerary page.

pub mod scroll_to_top;
