//! Floating button that returns the reader to the top of the page.
//!
//! The host owns the scroll listener and feeds offsets into `state`; this
//! component only renders it and reports clicks.

#[cfg(test)]
#[path = "scroll_to_top_test.rs"]
mod scroll_to_top_test;

use leptos::prelude::*;

use crate::state::scroll_top::ScrollTopState;

const BASE_STYLE: &str = "position: fixed; bottom: 30px; right: 30px; width: 50px; height: 50px; \
     border-radius: 50%; background: var(--primary-color); color: white; border: none; \
     font-size: 24px; cursor: pointer; transition: opacity 0.3s, transform 0.3s; \
     z-index: 1000; box-shadow: 0 4px 12px rgba(0,0,0,0.2);";

/// Inline style for a given state.
#[must_use]
pub fn button_style(state: &ScrollTopState) -> String {
    format!("{BASE_STYLE} opacity: {}; transform: {};", state.opacity(), state.transform())
}

/// Scroll-to-top control.
#[component]
pub fn ScrollToTop(state: RwSignal<ScrollTopState>, on_activate: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="scroll-to-top"
            type="button"
            aria-label="Scroll to top"
            style=move || button_style(&state.get())
            on:click=move |_| on_activate.run(())
            on:mouseenter=move |_| state.update(|s| s.set_hovered(true))
            on:mouseleave=move |_| state.update(|s| s.set_hovered(false))
        >
            "\u{2191}"
        </button>
    }
}
