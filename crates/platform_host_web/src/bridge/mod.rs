//! Browser capability bridge for `platform_host_web` history adapters.
//!
//! Calls route through `interop`, which picks the `wasm32` implementation or a non-wasm shim
//! while keeping one API for [`crate::history::WebHistory`].

mod interop;

use platform_host::{ListenerId, LocationSnapshot, NavigationListener};

pub fn current_location() -> Result<LocationSnapshot, String> {
    interop::current_location()
}

pub fn push_url(url: &str) -> Result<(), String> {
    interop::push_url(url)
}

pub fn replace_url(url: &str) -> Result<(), String> {
    interop::replace_url(url)
}

pub fn add_popstate_listener(listener: NavigationListener) -> Result<ListenerId, String> {
    interop::add_popstate_listener(listener)
}

pub fn remove_popstate_listener(id: ListenerId) -> Result<(), String> {
    interop::remove_popstate_listener(id)
}

pub fn dispatch_popstate() -> Result<(), String> {
    interop::dispatch_popstate()
}
