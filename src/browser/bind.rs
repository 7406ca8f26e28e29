//! Attaching the itinerary controller to the live page.
//!
//! ARCHITECTURE
//! ============
//! One [`Itinerary`] sits behind an `Rc<RefCell<_>>` shared by every
//! handler. Handlers borrow it only long enough to compute effects, then
//! release the borrow before touching the DOM, so deferred callbacks and
//! nested events never observe a held borrow.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Event, HtmlElement, HtmlInputElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, Window,
};

use crate::browser::dom::{self, first, first_within, query_all};
use crate::browser::listener::{export, keep, listen};
use crate::browser::local_storage::{LocalStorage, describe};
use crate::components::scroll_to_top::ScrollToTop;
use crate::effect::Effect;
use crate::itinerary::Itinerary;
use crate::state::nav::Intersection;
use crate::state::scroll_top::ScrollTopState;
use crate::util::keyboard::{Modifiers, activates_header};
use crate::util::subscription::{Subscription, Subscriptions};

type Shared = Rc<RefCell<Itinerary<LocalStorage>>>;

/// Everything installed on the page; dropping it removes all of it.
pub struct Binding {
    subscriptions: Subscriptions,
    mounted: Option<Box<dyn Any>>,
}

impl Binding {
    /// Remove listeners, observer, globals and the mounted control.
    pub fn teardown(mut self) {
        self.subscriptions.dispose_all();
        self.mounted.take();
    }
}

/// Restore state, prepare the markup and attach every handler.
pub fn bind(window: &Window, document: &Document) -> Binding {
    let config = dom::read_config(document);
    let spy_root_margin = config.spy_root_margin.clone();
    let scroll_top_threshold = config.scroll_top_threshold_px;

    let page = dom::scan(document);
    let mut itinerary = Itinerary::new(config, &page, LocalStorage::open());
    dom::apply(itinerary.initialize(dom::os_prefers_dark(window)));
    let shared: Shared = Rc::new(RefCell::new(itinerary));

    let mut subs = Subscriptions::new();
    bind_headers(&shared, document, &mut subs);
    bind_checkboxes(&shared, document, &mut subs);
    bind_nav_links(&shared, document, &mut subs);
    bind_theme_toggle(&shared, document, &mut subs);
    bind_hero_buttons(&shared, document, &mut subs);
    bind_shortcuts(&shared, document, &mut subs);
    keep(&mut subs, "scroll spy", bind_scroll_spy(&shared, document, &spy_root_margin));
    export_globals(&shared, window, &mut subs);
    let mounted = mount_scroll_to_top(window, document, scroll_top_threshold, &mut subs);

    log::debug!("itinerary bound with {} subscriptions", subs.len());
    Binding { subscriptions: subs, mounted }
}

/// Run `action` against the controller and apply what it returns.
fn dispatch(shared: &Shared, action: impl FnOnce(&mut Itinerary<LocalStorage>) -> Vec<Effect>) {
    let effects = match shared.try_borrow_mut() {
        Ok(mut itinerary) => action(&mut itinerary),
        Err(_) => {
            log::debug!("itinerary busy; dropping event");
            return;
        }
    };
    dom::apply(effects);
}

fn confirm(prompt: &str) -> bool {
    match web_sys::window().map(|w| w.confirm_with_message(prompt)) {
        Some(Ok(answer)) => answer,
        Some(Err(err)) => {
            log::debug!("confirm dialog failed: {}", describe(&err));
            false
        }
        None => false,
    }
}

fn on_click(shared: &Shared, action: fn(&mut Itinerary<LocalStorage>) -> Vec<Effect>) -> impl FnMut(Event) + 'static {
    let shared = Rc::clone(shared);
    move |_: Event| dispatch(&shared, action)
}

// ── Sections ────────────────────────────────────────────────────

fn bind_headers(shared: &Shared, document: &Document, subs: &mut Subscriptions) {
    for section in query_all(document, dom::SECTION) {
        let id = section.id();
        let Some(header) = first_within(&section, dom::HEADER) else {
            continue;
        };
        if id.is_empty() {
            continue;
        }

        let click = {
            let shared = Rc::clone(shared);
            let id = id.clone();
            move |_: Event| dispatch(&shared, |it| it.toggle_section(&id))
        };
        keep(subs, "header click", listen(&header, "click", click));

        let keypress = {
            let shared = Rc::clone(shared);
            move |ev: KeyboardEvent| {
                if activates_header(&ev.key()) {
                    ev.prevent_default();
                    dispatch(&shared, |it| it.toggle_section(&id));
                }
            }
        };
        keep(subs, "header keypress", listen(&header, "keypress", keypress));
    }
}

// ── Bookings ────────────────────────────────────────────────────

fn bind_checkboxes(shared: &Shared, document: &Document, subs: &mut Subscriptions) {
    for el in query_all(document, dom::BOOKING_CHECKBOX) {
        let Some(input) = el.dyn_ref::<HtmlInputElement>().cloned() else {
            continue;
        };
        let shared = Rc::clone(shared);
        let target = input.clone();
        let change = move |_: Event| {
            let id = target.id();
            let checked = target.checked();
            dispatch(&shared, |it| it.booking_changed(&id, checked));
        };
        keep(subs, "booking change", listen(&input, "change", change));
    }
}

fn reset_bookings(shared: &Shared) {
    dispatch(shared, |it| it.reset_bookings(confirm));
}

// ── Navigation ──────────────────────────────────────────────────

fn bind_nav_links(shared: &Shared, document: &Document, subs: &mut Subscriptions) {
    for (index, link) in query_all(document, dom::NAV_LINK).into_iter().enumerate() {
        let shared = Rc::clone(shared);
        let click = move |ev: Event| {
            ev.prevent_default();
            dispatch(&shared, |it| it.nav_clicked(index));
        };
        keep(subs, "nav click", listen(&link, "click", click));
    }
}

fn bind_scroll_spy(shared: &Shared, document: &Document, root_margin: &str) -> Result<Subscription, JsValue> {
    let shared = Rc::clone(shared);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let batch: Vec<Intersection> = entries
                .iter()
                .filter_map(|entry| {
                    entry.dyn_ref::<IntersectionObserverEntry>().map(|entry| Intersection {
                        section: entry.target().id(),
                        intersecting: entry.is_intersecting(),
                    })
                })
                .collect();
            dispatch(&shared, |it| it.sections_observed(&batch));
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    options.set_threshold(&JsValue::from_f64(0.0));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for section in query_all(document, dom::OBSERVED_SECTIONS) {
        observer.observe(&section);
    }

    Ok(Subscription::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}

// ── Theme, hero buttons, shortcuts ──────────────────────────────

fn bind_theme_toggle(shared: &Shared, document: &Document, subs: &mut Subscriptions) {
    if let Some(button) = first(document, dom::THEME_TOGGLE) {
        keep(subs, "theme toggle", listen(&button, "click", on_click(shared, Itinerary::toggle_theme)));
    }
}

fn bind_hero_buttons(shared: &Shared, document: &Document, subs: &mut Subscriptions) {
    if let Some(button) = first(document, dom::HERO_EXPAND) {
        keep(subs, "expand button", listen(&button, "click", on_click(shared, Itinerary::expand_all)));
    }
    if let Some(button) = query_all(document, dom::HERO_BUTTON).get(1) {
        keep(subs, "collapse button", listen(button, "click", on_click(shared, Itinerary::collapse_all)));
    }
    if let Some(button) = first(document, dom::HERO_PRINT) {
        keep(subs, "print button", listen(&button, "click", on_click(shared, Itinerary::print_itinerary)));
    }
}

fn bind_shortcuts(shared: &Shared, document: &Document, subs: &mut Subscriptions) {
    let shared = Rc::clone(shared);
    let keydown = move |ev: KeyboardEvent| {
        let modifiers = Modifiers { shift: ev.shift_key(), ctrl: ev.ctrl_key(), alt: ev.alt_key(), meta: ev.meta_key() };
        let outcome = match shared.try_borrow_mut() {
            Ok(mut itinerary) => itinerary.key_down(&ev.key(), modifiers),
            Err(_) => return,
        };
        if outcome.prevent_default {
            ev.prevent_default();
        }
        dom::apply(outcome.effects);
    };
    keep(subs, "keyboard shortcuts", listen(document, "keydown", keydown));
}

// ── Globals ─────────────────────────────────────────────────────

fn export_globals(shared: &Shared, window: &Window, subs: &mut Subscriptions) {
    let toggle_day = {
        let shared = Rc::clone(shared);
        Closure::<dyn Fn(JsValue)>::new(move |id: JsValue| match id.as_string() {
            Some(id) => dispatch(&shared, |it| it.toggle_section(&id)),
            None => log::debug!("toggleDay expects a section id"),
        })
    };
    keep(subs, "toggleDay", export(window, "toggleDay", toggle_day));

    let reset = {
        let shared = Rc::clone(shared);
        Closure::<dyn Fn()>::new(move || reset_bookings(&shared))
    };
    keep(subs, "resetBookings", export(window, "resetBookings", reset));

    let bulk: [(&'static str, fn(&mut Itinerary<LocalStorage>) -> Vec<Effect>); 3] = [
        ("expandAll", Itinerary::expand_all),
        ("collapseAll", Itinerary::collapse_all),
        ("printItinerary", Itinerary::print_itinerary),
    ];
    for (name, action) in bulk {
        let shared = Rc::clone(shared);
        let callback = Closure::<dyn Fn()>::new(move || dispatch(&shared, action));
        keep(subs, name, export(window, name, callback));
    }
}

// ── Scroll-to-top ───────────────────────────────────────────────

fn mount_scroll_to_top(
    window: &Window,
    document: &Document,
    threshold: f64,
    subs: &mut Subscriptions,
) -> Option<Box<dyn Any>> {
    let body: HtmlElement = document.body()?;

    let state = RwSignal::new(ScrollTopState::new(threshold));
    state.update(|s| s.on_scroll(window.scroll_y().unwrap_or_default()));

    let scroll = move |_: Event| {
        let y = web_sys::window().map_or(0.0, |w| w.scroll_y().unwrap_or_default());
        state.update(|s| s.on_scroll(y));
    };
    keep(subs, "scroll-to-top visibility", listen(window, "scroll", scroll));

    let on_activate = Callback::new(|()| dom::apply(vec![Effect::ScrollToTop]));
    let handle = leptos::mount::mount_to(body, move || view! { <ScrollToTop state=state on_activate=on_activate/> });
    Some(Box::new(handle))
}
