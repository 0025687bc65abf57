//! Shared transport interop for the browser history bridge.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for the bridge layer.

use platform_host::{ListenerId, LocationSnapshot, NavigationListener};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub fn current_location() -> Result<LocationSnapshot, String> {
    imp::current_location()
}

pub fn push_url(url: &str) -> Result<(), String> {
    imp::push_url(url)
}

pub fn replace_url(url: &str) -> Result<(), String> {
    imp::replace_url(url)
}

pub fn add_popstate_listener(listener: NavigationListener) -> Result<ListenerId, String> {
    imp::add_popstate_listener(listener)
}

pub fn remove_popstate_listener(id: ListenerId) -> Result<(), String> {
    imp::remove_popstate_listener(id)
}

pub fn dispatch_popstate() -> Result<(), String> {
    imp::dispatch_popstate()
}
