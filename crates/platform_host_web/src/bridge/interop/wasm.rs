use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use wasm_bindgen::{closure::Closure, JsCast, JsValue};

use super::*;

const POPSTATE: &str = "popstate";

thread_local! {
    static POPSTATE_LISTENERS: RefCell<HashMap<ListenerId, Closure<dyn FnMut()>>> =
        RefCell::new(HashMap::new());
    static NEXT_LISTENER_ID: Cell<u64> = const { Cell::new(1) };
}

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window is unavailable in this context".to_string())
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

pub fn current_location() -> Result<LocationSnapshot, String> {
    let location = window()?.location();
    Ok(LocationSnapshot {
        pathname: location.pathname().map_err(js_error_to_string)?,
        search: location.search().map_err(js_error_to_string)?,
        hash: location.hash().map_err(js_error_to_string)?,
    })
}

pub fn push_url(url: &str) -> Result<(), String> {
    window()?
        .history()
        .map_err(js_error_to_string)?
        .push_state_with_url(&JsValue::NULL, "", Some(url))
        .map_err(js_error_to_string)
}

pub fn replace_url(url: &str) -> Result<(), String> {
    window()?
        .history()
        .map_err(js_error_to_string)?
        .replace_state_with_url(&JsValue::NULL, "", Some(url))
        .map_err(js_error_to_string)
}

pub fn add_popstate_listener(listener: NavigationListener) -> Result<ListenerId, String> {
    let window = window()?;
    let closure = Closure::<dyn FnMut()>::new(move || listener());
    window
        .add_event_listener_with_callback(POPSTATE, closure.as_ref().unchecked_ref())
        .map_err(js_error_to_string)?;

    let id = NEXT_LISTENER_ID.with(|next| {
        let id = ListenerId(next.get());
        next.set(id.0 + 1);
        id
    });
    POPSTATE_LISTENERS.with(|listeners| listeners.borrow_mut().insert(id, closure));
    Ok(id)
}

pub fn remove_popstate_listener(id: ListenerId) -> Result<(), String> {
    let Some(closure) = POPSTATE_LISTENERS.with(|listeners| listeners.borrow_mut().remove(&id))
    else {
        return Ok(());
    };

    let removed = window().and_then(|window| {
        window
            .remove_event_listener_with_callback(POPSTATE, closure.as_ref().unchecked_ref())
            .map_err(js_error_to_string)
    });

    // The listener may be unsubscribing itself from inside its own callback; release the JS
    // closure after the current dispatch has unwound.
    wasm_bindgen_futures::spawn_local(async move {
        drop(closure);
    });
    removed
}

pub fn dispatch_popstate() -> Result<(), String> {
    let event = web_sys::PopStateEvent::new(POPSTATE).map_err(js_error_to_string)?;
    window()?
        .dispatch_event(&event)
        .map(|_| ())
        .map_err(js_error_to_string)
}
