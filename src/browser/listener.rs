//! DOM listeners and window globals as disposable subscriptions.

use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget, Window};

use crate::browser::local_storage::describe;
use crate::util::subscription::{Subscription, Subscriptions};

/// Attach `handler` for `event` on `target`.
///
/// Events that do not cast to `E` are logged and skipped. Disposing the
/// subscription removes the listener and frees the closure.
pub fn listen<E>(
    target: &EventTarget,
    event: &'static str,
    mut handler: impl FnMut(E) + 'static,
) -> Result<Subscription, JsValue>
where
    E: JsCast + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(move |ev: Event| match ev.dyn_into::<E>() {
        Ok(ev) => handler(ev),
        Err(ev) => log::debug!("skipping {} event of unexpected type", ev.type_()),
    });
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    let target = target.clone();
    Ok(Subscription::new(move || {
        if let Err(err) = target.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            log::debug!("failed to remove {event} listener: {}", describe(&err));
        }
        drop(callback);
    }))
}

/// Publish `callback` as `window[name]` for inline markup handlers.
pub fn export<T>(window: &Window, name: &'static str, callback: Closure<T>) -> Result<Subscription, JsValue>
where
    T: ?Sized + WasmClosure + 'static,
{
    js_sys::Reflect::set(window, &JsValue::from_str(name), callback.as_ref())?;
    let window = window.clone();
    Ok(Subscription::new(move || {
        if let Err(err) = js_sys::Reflect::delete_property(&window, &JsValue::from_str(name)) {
            log::debug!("failed to remove window.{name}: {}", describe(&err));
        }
        drop(callback);
    }))
}

/// Keep a subscription, logging the ones the browser refused.
pub fn keep(subscriptions: &mut Subscriptions, what: &str, result: Result<Subscription, JsValue>) {
    match result {
        Ok(subscription) => subscriptions.push(subscription),
        Err(err) => log::debug!("could not bind {what}: {}", describe(&err)),
    }
}
