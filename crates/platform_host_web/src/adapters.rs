use std::rc::Rc;

use platform_host::{
    HistoryHost, HostServices, HostStrategy, ListenerId, LocationSnapshot, MemoryHistory,
    NavigationListener,
};

use crate::WebHistory;

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(all(target_arch = "wasm32", not(feature = "memory-history-host")))]
    {
        HostStrategy::Browser
    }

    #[cfg(any(not(target_arch = "wasm32"), feature = "memory-history-host"))]
    {
        HostStrategy::Memory
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete history backend behind [`HistoryHost`].
#[derive(Debug, Clone)]
pub enum HistoryHostAdapter {
    /// Browser-backed `window.history`.
    Browser(WebHistory),
    /// In-memory stack for native builds, tests and the `memory-history-host` feature.
    Memory(MemoryHistory),
}

impl HistoryHost for HistoryHostAdapter {
    fn location(&self) -> LocationSnapshot {
        match self {
            Self::Browser(host) => host.location(),
            Self::Memory(host) => host.location(),
        }
    }

    fn push_url(&self, url: &str) -> Result<(), String> {
        match self {
            Self::Browser(host) => host.push_url(url),
            Self::Memory(host) => host.push_url(url),
        }
    }

    fn replace_url(&self, url: &str) -> Result<(), String> {
        match self {
            Self::Browser(host) => host.replace_url(url),
            Self::Memory(host) => host.replace_url(url),
        }
    }

    fn add_navigation_listener(&self, listener: NavigationListener) -> Result<ListenerId, String> {
        match self {
            Self::Browser(host) => host.add_navigation_listener(listener),
            Self::Memory(host) => host.add_navigation_listener(listener),
        }
    }

    fn remove_navigation_listener(&self, id: ListenerId) -> Result<(), String> {
        match self {
            Self::Browser(host) => host.remove_navigation_listener(id),
            Self::Memory(host) => host.remove_navigation_listener(id),
        }
    }

    fn dispatch_navigation_event(&self) -> Result<(), String> {
        match self {
            Self::Browser(host) => host.dispatch_navigation_event(),
            Self::Memory(host) => host.dispatch_navigation_event(),
        }
    }
}

/// Builds the history host for the selected strategy.
pub fn history_host() -> HistoryHostAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => HistoryHostAdapter::Browser(WebHistory),
        HostStrategy::Memory => HistoryHostAdapter::Memory(MemoryHistory::default()),
    }
}

/// Builds the complete host service bundle for the selected strategy.
pub fn build_host_services() -> HostServices {
    HostServices::new(Rc::new(history_host()), selected_host_strategy())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_builds_select_the_memory_history_host() {
        assert_eq!(selected_host_strategy(), HostStrategy::Memory);
        assert_eq!(host_strategy_name(), "memory");
        assert!(matches!(history_host(), HistoryHostAdapter::Memory(_)));
    }

    #[test]
    fn host_services_history_round_trips_through_the_adapter() {
        let services = build_host_services();
        assert_eq!(services.host_strategy, HostStrategy::Memory);

        services.history.push_url("/services").expect("push");
        assert_eq!(services.history.location().pathname, "/services");
    }
}
