//! Session-history host adapter for browser contexts.

use platform_host::{HistoryHost, ListenerId, LocationSnapshot, NavigationListener};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser history adapter over `window.location`, `window.history` and `popstate`.
pub struct WebHistory;

impl HistoryHost for WebHistory {
    fn location(&self) -> LocationSnapshot {
        bridge::current_location().unwrap_or_default()
    }

    fn push_url(&self, url: &str) -> Result<(), String> {
        bridge::push_url(url)
    }

    fn replace_url(&self, url: &str) -> Result<(), String> {
        bridge::replace_url(url)
    }

    fn add_navigation_listener(&self, listener: NavigationListener) -> Result<ListenerId, String> {
        bridge::add_popstate_listener(listener)
    }

    fn remove_navigation_listener(&self, id: ListenerId) -> Result<(), String> {
        bridge::remove_popstate_listener(id)
    }

    fn dispatch_navigation_event(&self) -> Result<(), String> {
        bridge::dispatch_popstate()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[test]
    fn native_web_history_reports_root_and_unsupported_mutations() {
        let history = WebHistory;
        assert_eq!(history.location(), LocationSnapshot::root());
        assert!(history.push_url("/services").is_err());
        assert!(history.replace_url("/services").is_err());
        assert!(history.add_navigation_listener(Rc::new(|| {})).is_err());
        assert!(history.dispatch_navigation_event().is_err());
        assert_eq!(history.remove_navigation_listener(ListenerId(7)), Ok(()));
    }
}
