//! Navigation state adapter: keeps the logical route in sync with the address bar.
//!
//! The adapter owns no state of its own. Every read derives the current path from the host
//! location, and every programmatic navigation ends in
//! [`HistoryHost::dispatch_navigation_event`], the same notification back/forward produces, so
//! subscribers only ever listen to one event source.

use std::{cell::Cell, fmt, rc::Rc};

use leptos::logging;
use platform_host::{HistoryHost, ListenerId};

use crate::config::{BasePath, SiteConfig, UnmatchedPathPolicy};

/// Derives the logical route for a browser pathname.
///
/// Paths under `base` lose the prefix (an empty remainder becomes `/`, and the result always
/// starts with `/`). Paths outside `base` follow `policy`.
pub fn current_path_for(pathname: &str, base: &BasePath, policy: UnmatchedPathPolicy) -> String {
    match base.strip(pathname) {
        Some("") => "/".to_string(),
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        Some(rest) => format!("/{rest}"),
        None => match policy {
            UnmatchedPathPolicy::Passthrough => pathname.to_string(),
            UnmatchedPathPolicy::Root => "/".to_string(),
        },
    }
}

#[derive(Clone)]
/// Observable current path plus a `navigate` mutator over an injected [`HistoryHost`].
pub struct NavigationAdapter {
    host: Rc<dyn HistoryHost>,
    base_path: BasePath,
    unmatched_paths: UnmatchedPathPolicy,
}

impl fmt::Debug for NavigationAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationAdapter")
            .field("base_path", &self.base_path)
            .field("unmatched_paths", &self.unmatched_paths)
            .finish_non_exhaustive()
    }
}

impl NavigationAdapter {
    /// Creates an adapter for `host` using the configured base path and policy.
    pub fn new(host: Rc<dyn HistoryHost>, config: &SiteConfig) -> Self {
        Self {
            host,
            base_path: config.base_path.clone(),
            unmatched_paths: config.unmatched_paths,
        }
    }

    /// Returns the deployment prefix.
    pub fn base_path(&self) -> &BasePath {
        &self.base_path
    }

    /// Reads the current logical path from the host location.
    pub fn current_path(&self) -> String {
        current_path_for(
            &self.host.location().pathname,
            &self.base_path,
            self.unmatched_paths,
        )
    }

    /// Returns the absolute URL [`NavigationAdapter::navigate`] pushes for `target`.
    pub fn href_for(&self, target: &str) -> String {
        self.base_path.join(target)
    }

    /// Pushes a new history entry for `target` and notifies every subscriber.
    pub fn navigate(&self, target: &str) {
        let href = self.href_for(target);
        if let Err(err) = self.host.push_url(&href) {
            logging::warn!("push history entry `{href}` failed: {err}");
            return;
        }
        if let Err(err) = self.host.dispatch_navigation_event() {
            logging::warn!("navigation event dispatch for `{href}` failed: {err}");
        }
    }

    /// Registers `listener` for back/forward and programmatic navigation.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        let id = match self.host.add_navigation_listener(Rc::new(listener)) {
            Ok(id) => Some(id),
            Err(err) => {
                logging::warn!("navigation listener registration failed: {err}");
                None
            }
        };

        Subscription {
            host: Rc::clone(&self.host),
            id: Cell::new(id),
        }
    }
}

/// Registration handle returned by [`NavigationAdapter::subscribe`].
///
/// Dropping the handle unsubscribes.
#[must_use = "dropping a Subscription removes its listener"]
pub struct Subscription {
    host: Rc<dyn HistoryHost>,
    id: Cell<Option<ListenerId>>,
}

impl Subscription {
    /// Returns whether this handle still owns a listener registration.
    pub fn is_active(&self) -> bool {
        self.id.get().is_some()
    }

    /// Removes the listener. Later calls do nothing.
    pub fn unsubscribe(&self) {
        if let Some(id) = self.id.take() {
            if let Err(err) = self.host.remove_navigation_listener(id) {
                logging::warn!("navigation listener removal failed: {err}");
            }
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id.get())
            .finish_non_exhaustive()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use platform_host::{LocationSnapshot, MemoryHistory, NavigationListener};
    use pretty_assertions::assert_eq;

    use super::*;

    fn config(base: &str) -> SiteConfig {
        SiteConfig {
            base_path: BasePath::parse(base).expect("base"),
            ..SiteConfig::default()
        }
    }

    fn adapter_at(base: &str, url: &str) -> (MemoryHistory, NavigationAdapter) {
        let history = MemoryHistory::new(url);
        let adapter = NavigationAdapter::new(Rc::new(history.clone()), &config(base));
        (history, adapter)
    }

    fn counter() -> (Rc<Cell<usize>>, impl Fn() + 'static) {
        let hits = Rc::new(Cell::new(0));
        let handle = Rc::clone(&hits);
        (hits, move || handle.set(handle.get() + 1))
    }

    #[test]
    fn current_path_strips_the_base_path() {
        let base = BasePath::parse("/app/").expect("base");
        let cases = [
            ("/app/", "/"),
            ("/app/services", "/services"),
            ("/app/services/retirement", "/services/retirement"),
            ("/app//double", "/double"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                current_path_for(input, &base, UnmatchedPathPolicy::Passthrough),
                expected,
                "input={input:?}"
            );
        }

        let root = BasePath::root();
        assert_eq!(
            current_path_for("/services", &root, UnmatchedPathPolicy::Passthrough),
            "/services"
        );
        assert_eq!(
            current_path_for("/", &root, UnmatchedPathPolicy::Passthrough),
            "/"
        );
    }

    #[test]
    fn paths_outside_the_base_follow_the_unmatched_policy() {
        let base = BasePath::parse("/app/").expect("base");
        for input in ["/other", "/app", "/application/x"] {
            assert_eq!(
                current_path_for(input, &base, UnmatchedPathPolicy::Passthrough),
                input,
                "input={input:?}"
            );
            assert_eq!(
                current_path_for(input, &base, UnmatchedPathPolicy::Root),
                "/",
                "input={input:?}"
            );
        }
    }

    #[test]
    fn navigate_then_read_yields_the_normalized_target() {
        let (history, adapter) = adapter_at("/app/", "/app/");

        adapter.navigate("/services");
        assert_eq!(adapter.current_path(), "/services");
        assert_eq!(history.location().pathname, "/app/services");

        adapter.navigate("faq");
        assert_eq!(adapter.current_path(), "/faq");
        assert_eq!(history.location().pathname, "/app/faq");

        adapter.navigate("/");
        assert_eq!(adapter.current_path(), "/");
        assert_eq!(history.location().pathname, "/app/");
    }

    #[test]
    fn navigate_notifies_subscribers_with_the_new_path_already_visible() {
        let (_history, adapter) = adapter_at("/app/", "/app/");
        let observed = Rc::new(RefCell::new(Vec::<String>::new()));

        let sink = Rc::clone(&observed);
        let reader = adapter.clone();
        let _subscription = adapter.subscribe(move || sink.borrow_mut().push(reader.current_path()));

        adapter.navigate("/services");
        adapter.navigate("process");

        assert_eq!(*observed.borrow(), vec!["/services", "/process"]);
    }

    #[test]
    fn navigate_adds_history_entries_that_back_navigation_revisits() {
        let (history, adapter) = adapter_at("/app/", "/app/");
        let observed = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = Rc::clone(&observed);
        let reader = adapter.clone();
        let _subscription = adapter.subscribe(move || sink.borrow_mut().push(reader.current_path()));

        adapter.navigate("/services");
        assert_eq!(history.entries(), vec!["/app/", "/app/services"]);

        assert!(history.back());
        assert_eq!(adapter.current_path(), "/");
        assert!(history.forward());
        assert_eq!(adapter.current_path(), "/services");

        assert_eq!(*observed.borrow(), vec!["/services", "/", "/services"]);
    }

    #[test]
    fn unsubscribing_one_of_n_subscriptions_leaves_the_rest_firing() {
        let (history, adapter) = adapter_at("/", "/");
        let (first_hits, first) = counter();
        let (second_hits, second) = counter();
        let (third_hits, third) = counter();

        let first = adapter.subscribe(first);
        let _second = adapter.subscribe(second);
        let _third = adapter.subscribe(third);
        assert_eq!(history.listener_count(), 3);

        first.unsubscribe();
        assert_eq!(history.listener_count(), 2);
        assert!(!first.is_active());

        history.push_url("/services").expect("push");
        assert!(history.back());

        assert_eq!(first_hits.get(), 0);
        assert_eq!(second_hits.get(), 1);
        assert_eq!(third_hits.get(), 1);
    }

    #[test]
    fn repeated_unsubscribe_and_drop_do_not_remove_other_listeners() {
        let (history, adapter) = adapter_at("/", "/");
        let (_hits, listener) = counter();
        let (_other_hits, other) = counter();

        let subscription = adapter.subscribe(listener);
        let _other = adapter.subscribe(other);

        subscription.unsubscribe();
        subscription.unsubscribe();
        drop(subscription);
        assert_eq!(history.listener_count(), 1);

        {
            let (_scoped_hits, scoped) = counter();
            let _scoped = adapter.subscribe(scoped);
            assert_eq!(history.listener_count(), 2);
        }
        assert_eq!(history.listener_count(), 1);
    }

    struct RejectingHost {
        dispatched: Cell<usize>,
    }

    impl HistoryHost for RejectingHost {
        fn location(&self) -> LocationSnapshot {
            LocationSnapshot::root()
        }

        fn push_url(&self, _url: &str) -> Result<(), String> {
            Err("history is read-only".to_string())
        }

        fn replace_url(&self, _url: &str) -> Result<(), String> {
            Err("history is read-only".to_string())
        }

        fn add_navigation_listener(
            &self,
            _listener: NavigationListener,
        ) -> Result<ListenerId, String> {
            Err("listeners unsupported".to_string())
        }

        fn remove_navigation_listener(&self, _id: ListenerId) -> Result<(), String> {
            Err("listeners unsupported".to_string())
        }

        fn dispatch_navigation_event(&self) -> Result<(), String> {
            self.dispatched.set(self.dispatched.get() + 1);
            Ok(())
        }
    }

    struct PinnedListenerHost {
        inner: MemoryHistory,
    }

    impl HistoryHost for PinnedListenerHost {
        fn location(&self) -> LocationSnapshot {
            self.inner.location()
        }

        fn push_url(&self, url: &str) -> Result<(), String> {
            self.inner.push_url(url)
        }

        fn replace_url(&self, url: &str) -> Result<(), String> {
            self.inner.replace_url(url)
        }

        fn add_navigation_listener(
            &self,
            listener: NavigationListener,
        ) -> Result<ListenerId, String> {
            self.inner.add_navigation_listener(listener)
        }

        fn remove_navigation_listener(&self, _id: ListenerId) -> Result<(), String> {
            Err("listener is pinned".to_string())
        }

        fn dispatch_navigation_event(&self) -> Result<(), String> {
            self.inner.dispatch_navigation_event()
        }
    }

    #[test]
    fn failed_listener_removal_is_reported_once_and_deactivates_the_handle() {
        let history = MemoryHistory::new("/");
        let host = Rc::new(PinnedListenerHost {
            inner: history.clone(),
        });
        let adapter = NavigationAdapter::new(host, &SiteConfig::default());

        let subscription = adapter.subscribe(|| {});
        assert!(subscription.is_active());

        subscription.unsubscribe();
        assert!(!subscription.is_active());
        assert_eq!(history.listener_count(), 1);

        subscription.unsubscribe();
        drop(subscription);
        assert_eq!(history.listener_count(), 1);
    }

    #[test]
    fn host_failures_degrade_without_notifying() {
        let host = Rc::new(RejectingHost {
            dispatched: Cell::new(0),
        });
        let adapter = NavigationAdapter::new(host.clone(), &SiteConfig::default());

        adapter.navigate("/services");
        assert_eq!(host.dispatched.get(), 0);
        assert_eq!(adapter.current_path(), "/");

        let subscription = adapter.subscribe(|| {});
        assert!(!subscription.is_active());
        subscription.unsubscribe();
    }

    #[test]
    fn href_for_matches_the_pushed_url() {
        let (_history, adapter) = adapter_at("/fineline", "/fineline/");
        assert_eq!(adapter.base_path().as_str(), "/fineline/");
        assert_eq!(adapter.href_for("/services"), "/fineline/services");
        assert_eq!(adapter.href_for("services"), "/fineline/services");
    }
}
