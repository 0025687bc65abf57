//! History host-service contract.

use std::rc::Rc;

use super::location::LocationSnapshot;

/// Callback invoked when the host reports a navigation (`popstate`) event.
pub type NavigationListener = Rc<dyn Fn()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Host-issued handle for one registered [`NavigationListener`].
pub struct ListenerId(pub u64);

/// Host service wrapping the document address bar and session history stack.
///
/// Implementations are the only place that mutates browser history. `push_url` and
/// `replace_url` never notify listeners on their own; callers that need subscribers to observe a
/// programmatic change follow up with [`HistoryHost::dispatch_navigation_event`], the same
/// notification back/forward navigation produces.
pub trait HistoryHost {
    /// Reads the current document location.
    fn location(&self) -> LocationSnapshot;

    /// Adds a new session-history entry for `url` and makes it current.
    fn push_url(&self, url: &str) -> Result<(), String>;

    /// Replaces the current session-history entry with `url`.
    fn replace_url(&self, url: &str) -> Result<(), String>;

    /// Registers a listener for navigation events.
    fn add_navigation_listener(&self, listener: NavigationListener) -> Result<ListenerId, String>;

    /// Removes a listener. Unknown or already removed ids are ignored and report `Ok`.
    fn remove_navigation_listener(&self, id: ListenerId) -> Result<(), String>;

    /// Delivers one navigation event to every registered listener.
    fn dispatch_navigation_event(&self) -> Result<(), String>;
}
