//! Browser host: wires the itinerary controller into the live page.
//!
//! Only compiled with the `csr` feature. [`start`] runs when the WASM
//! module loads and binds once the document is parsed; [`teardown`]
//! removes everything it installed.

pub mod bind;
pub mod dom;
pub mod listener;
pub mod local_storage;

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

use crate::browser::bind::Binding;
use crate::browser::local_storage::describe;

thread_local! {
    static BINDING: RefCell<Option<Binding>> = const { RefCell::new(None) };
}

/// Module entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let ready = Closure::once_into_js(boot);
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", ready.unchecked_ref()) {
            log::warn!("could not wait for DOMContentLoaded: {}", describe(&err));
        }
    } else {
        boot();
    }
}

/// Remove every listener, global and mounted control installed by [`start`].
#[wasm_bindgen]
pub fn teardown() {
    let binding = BINDING.with(|slot| slot.borrow_mut().take());
    if let Some(binding) = binding {
        binding.teardown();
        log::info!("itinerary enhancements removed");
    }
}

fn boot() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    teardown();
    let binding = bind::bind(&window, &document);
    BINDING.with(|slot| *slot.borrow_mut() = Some(binding));
    log::info!("itinerary enhancements ready");
}
