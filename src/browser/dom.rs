//! Reading the itinerary markup and applying [`Effect`]s to it.
//!
//! Every optional element is looked up right before use; anything missing
//! is skipped without complaint. Browser API failures are logged at debug
//! level and dropped.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlInputElement, NodeList, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions, Window,
};

use crate::browser::listener::listen;
use crate::browser::local_storage::describe;
use crate::config::ItineraryConfig;
use crate::effect::{Effect, Trigger};
use crate::page::{CheckboxSnapshot, NavLinkSnapshot, PageSnapshot, SectionSnapshot, anchor_target};
use crate::state::nav::scroll_target;
use crate::state::theme::ThemeView;
use crate::util::subscription::Subscription;

// ── Selectors ───────────────────────────────────────────────────

pub const SECTION: &str = ".day-section";
pub const HEADER: &str = ".day-header";
pub const CONTENT: &str = ".day-content";
pub const OBSERVED_SECTIONS: &str = ".day-section, .bookings-section";
pub const BOOKING_ITEM: &str = ".booking-item";
pub const BOOKING_CHECKBOX: &str = ".booking-item input[type=\"checkbox\"]";
pub const NAV_LINK: &str = ".nav-links a";
pub const THEME_TOGGLE: &str = ".theme-toggle";
pub const THEME_COLOR_META: &str = "meta[name=\"theme-color\"]";
pub const HERO_BUTTON: &str = ".hero-actions .btn";
pub const HERO_EXPAND: &str = ".hero-actions .btn.primary";
pub const HERO_PRINT: &str = ".hero-actions .btn.outline";
pub const CONFIG_SCRIPT_ID: &str = "itinerary-config";

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Lookup helpers ──────────────────────────────────────────────

/// Unwrap an optional lookup, logging a thrown error as absent.
pub fn found<T>(result: Result<Option<T>, JsValue>) -> Option<T> {
    match result {
        Ok(value) => value,
        Err(err) => {
            log::debug!("DOM lookup failed: {}", describe(&err));
            None
        }
    }
}

/// Log a failed DOM call.
pub fn report<T>(result: Result<T, JsValue>, what: &str) {
    if let Err(err) = result {
        log::debug!("{what} failed: {}", describe(&err));
    }
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// All elements in the document matching `selector`.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(err) => {
            log::debug!("invalid selector {selector}: {}", describe(&err));
            Vec::new()
        }
    }
}

/// First element in the document matching `selector`.
pub fn first(document: &Document, selector: &str) -> Option<Element> {
    found(document.query_selector(selector))
}

/// First descendant of `parent` matching `selector`.
pub fn first_within(parent: &Element, selector: &str) -> Option<Element> {
    found(parent.query_selector(selector))
}

fn section_part(document: &Document, section: &str, selector: &str) -> Option<Element> {
    document.get_element_by_id(section).and_then(|el| first_within(&el, selector))
}

fn set_class(element: &Element, class: &str, on: bool) {
    report(element.class_list().toggle_with_force(class, on), "class toggle");
}

fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        report(html.style().set_property(property, value), "style update");
    }
}

// ── Reading the page ────────────────────────────────────────────

/// Snapshot the sections, checkboxes and nav links.
pub fn scan(document: &Document) -> PageSnapshot {
    let sections = query_all(document, SECTION)
        .into_iter()
        .filter_map(|section| {
            let id = section.id();
            if id.is_empty() {
                return None;
            }
            let content = first_within(&section, CONTENT);
            Some(SectionSnapshot {
                id,
                has_content: content.is_some(),
                expanded: content.is_some_and(|c| c.class_list().contains("active")),
            })
        })
        .collect();

    let checkboxes = query_all(document, BOOKING_CHECKBOX)
        .iter()
        .filter_map(|el| el.dyn_ref::<HtmlInputElement>())
        .filter(|input| !input.id().is_empty())
        .map(|input| CheckboxSnapshot { id: input.id(), checked: input.checked() })
        .collect();

    let nav_links = query_all(document, NAV_LINK)
        .iter()
        .map(|link| {
            let href = link.get_attribute("href").unwrap_or_default();
            let target_present = anchor_target(&href).is_some_and(|id| document.get_element_by_id(id).is_some());
            NavLinkSnapshot { href, target_present }
        })
        .collect();

    PageSnapshot { sections, checkboxes, nav_links }
}

/// Config from the inline JSON block, or the defaults.
pub fn read_config(document: &Document) -> ItineraryConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content()) else {
        return ItineraryConfig::default();
    };
    match ItineraryConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring itinerary config: {err}");
            ItineraryConfig::default()
        }
    }
}

/// The OS dark-mode preference, if the browser exposes it.
pub fn os_prefers_dark(window: &Window) -> Option<bool> {
    found(window.match_media(DARK_SCHEME_QUERY)).map(|query| query.matches())
}

// ── Applying effects ────────────────────────────────────────────

/// Apply effects in order.
pub fn apply(effects: Vec<Effect>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    for effect in effects {
        apply_one(&window, &document, effect);
    }
}

fn apply_one(window: &Window, document: &Document, effect: Effect) {
    match effect {
        Effect::ApplyTheme(view) => apply_theme(document, &view),
        Effect::PrepareHeader { section, expanded } => {
            if let Some(header) = section_part(document, &section, HEADER) {
                report(header.set_attribute("role", "button"), "header role");
                report(header.set_attribute("tabindex", "0"), "header tabindex");
                report(header.set_attribute("aria-expanded", bool_attr(expanded)), "header aria-expanded");
            }
        }
        Effect::SetSectionExpanded { section, expanded } => set_section_expanded(document, &section, expanded),
        Effect::ScrollIntoView { section } => {
            if let Some(el) = document.get_element_by_id(&section) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                el.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
        Effect::ScrollToAnchor { anchor, clearance } => {
            if let Some(el) = document.get_element_by_id(&anchor) {
                if let Some(html) = el.dyn_ref::<HtmlElement>() {
                    scroll_window_to(window, scroll_target(f64::from(html.offset_top()), clearance));
                }
            }
        }
        Effect::ScrollToTop => scroll_window_to(window, 0.0),
        Effect::SetActiveNav { index } => {
            for (i, link) in query_all(document, NAV_LINK).iter().enumerate() {
                if let Some(entry) = link.parent_element() {
                    set_class(&entry, "active", index == Some(i));
                }
            }
        }
        Effect::SetChecked { booking, checked } => {
            if let Some(el) = document.get_element_by_id(&booking) {
                if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
                    input.set_checked(checked);
                }
            }
        }
        Effect::FlashBooking { booking, duration_ms } => {
            let item = document.get_element_by_id(&booking).and_then(|el| found(el.closest(BOOKING_ITEM)));
            if let Some(item) = item {
                set_style(&item, "opacity", "0.7");
                Timeout::new(duration_ms, move || set_style(&item, "opacity", "1")).forget();
            }
        }
        Effect::PulseBookings { duration_ms } => {
            for item in query_all(document, BOOKING_ITEM) {
                set_style(&item, "transform", "scale(0.95)");
                Timeout::new(duration_ms, move || set_style(&item, "transform", "scale(1)")).forget();
            }
        }
        Effect::Print => report(window.print(), "print"),
        Effect::Deferred { trigger, effect } => schedule(document, trigger, *effect),
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn apply_theme(document: &Document, view: &ThemeView) {
    if let Some(root) = document.document_element() {
        report(root.set_attribute("data-theme", view.theme.as_str()), "data-theme");
    }
    if let Some(button) = first(document, THEME_TOGGLE) {
        button.set_text_content(Some(view.toggle_glyph));
        report(button.set_attribute("aria-label", &view.toggle_label), "toggle label");
        report(button.set_attribute("title", &view.toggle_label), "toggle title");
    }
    if let Some(meta) = first(document, THEME_COLOR_META) {
        report(meta.set_attribute("content", &view.chrome_color), "theme-color");
    }
}

fn set_section_expanded(document: &Document, section: &str, expanded: bool) {
    let Some(section) = document.get_element_by_id(section) else {
        return;
    };
    if let Some(content) = first_within(&section, CONTENT) {
        set_class(&content, "active", expanded);
    }
    if let Some(header) = first_within(&section, HEADER) {
        set_class(&header, "collapsed", !expanded);
        report(header.set_attribute("aria-expanded", bool_attr(expanded)), "header aria-expanded");
    }
}

/// Smoothly scroll the window to `top`.
pub fn scroll_window_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

// ── Deferred effects ────────────────────────────────────────────

fn schedule(document: &Document, trigger: Trigger, effect: Effect) {
    match trigger {
        Trigger::Delay { ms } => {
            Timeout::new(ms, move || apply(vec![effect])).forget();
        }
        Trigger::SectionSettled { section, fallback_ms } => settle(document, &section, fallback_ms, effect),
    }
}

/// Run `effect` on the content's first `transitionend`, or at `fallback_ms`.
///
/// The fallback timer also removes the transition listener, so it is
/// never dropped from inside its own callback.
fn settle(document: &Document, section: &str, fallback_ms: u32, effect: Effect) {
    let pending = Rc::new(RefCell::new(Some(effect)));
    let fire = {
        let pending = Rc::clone(&pending);
        move || {
            let effect = pending.borrow_mut().take();
            if let Some(effect) = effect {
                apply(vec![effect]);
            }
        }
    };

    let mut listener: Option<Subscription> = None;
    if let Some(content) = section_part(document, section, CONTENT) {
        let fire = fire.clone();
        match listen::<Event>(&content, "transitionend", move |_| fire()) {
            Ok(subscription) => listener = Some(subscription),
            Err(err) => log::debug!("could not watch transition of {section}: {}", describe(&err)),
        }
    }

    Timeout::new(fallback_ms, move || {
        fire();
        drop(listener);
    })
    .forget();
}
