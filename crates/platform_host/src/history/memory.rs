//! In-memory session history used by native builds and tests.

use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    rc::Rc,
};

use super::{
    location::LocationSnapshot,
    service::{HistoryHost, ListenerId, NavigationListener},
};

#[derive(Debug)]
struct MemoryHistoryState {
    entries: Vec<LocationSnapshot>,
    index: usize,
}

#[derive(Clone)]
/// In-memory history stack with browser-like push/replace/back/forward semantics.
///
/// The stack has no origin, so `push_url`/`replace_url` reject any URL naming one, the way
/// `history.pushState` throws for a cross-origin URL.
///
/// Clones share the same stack and listener registry, so a test can keep one handle for
/// driving back/forward while another is injected as `Rc<dyn HistoryHost>`.
pub struct MemoryHistory {
    state: Rc<RefCell<MemoryHistoryState>>,
    listeners: Rc<RefCell<BTreeMap<ListenerId, NavigationListener>>>,
    next_listener_id: Rc<Cell<u64>>,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl std::fmt::Debug for MemoryHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryHistory")
            .field("state", &self.state.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl MemoryHistory {
    /// Creates a history stack holding a single entry for `initial_url`.
    pub fn new(initial_url: &str) -> Self {
        Self {
            state: Rc::new(RefCell::new(MemoryHistoryState {
                entries: vec![LocationSnapshot::parse(initial_url)],
                index: 0,
            })),
            listeners: Rc::new(RefCell::new(BTreeMap::new())),
            next_listener_id: Rc::new(Cell::new(1)),
        }
    }

    /// Returns every entry's href, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.state
            .borrow()
            .entries
            .iter()
            .map(LocationSnapshot::href)
            .collect()
    }

    /// Returns the index of the current entry.
    pub fn index(&self) -> usize {
        self.state.borrow().index
    }

    /// Returns the number of registered navigation listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Moves one entry back. Returns `false` at the start of the stack.
    pub fn back(&self) -> bool {
        self.go(-1)
    }

    /// Moves one entry forward. Returns `false` at the end of the stack.
    pub fn forward(&self) -> bool {
        self.go(1)
    }

    /// Moves the cursor by `delta` entries and notifies listeners when it moved.
    ///
    /// Out-of-range deltas leave the stack untouched, matching `history.go`.
    pub fn go(&self, delta: isize) -> bool {
        let moved = {
            let mut state = self.state.borrow_mut();
            let target = state.index as isize + delta;
            if delta == 0 || target < 0 || target >= state.entries.len() as isize {
                false
            } else {
                state.index = target as usize;
                true
            }
        };

        if moved {
            self.notify_listeners();
        }
        moved
    }

    fn notify_listeners(&self) {
        let snapshot: Vec<NavigationListener> =
            self.listeners.borrow().values().cloned().collect();
        for listener in snapshot {
            listener();
        }
    }
}

fn reject_foreign_origin(url: &str) -> Result<(), String> {
    if LocationSnapshot::carries_authority(url) {
        return Err(format!(
            "history URL `{url}` names an origin; only same-document paths are accepted"
        ));
    }
    Ok(())
}

impl HistoryHost for MemoryHistory {
    fn location(&self) -> LocationSnapshot {
        let state = self.state.borrow();
        state.entries[state.index].clone()
    }

    fn push_url(&self, url: &str) -> Result<(), String> {
        reject_foreign_origin(url)?;
        let mut state = self.state.borrow_mut();
        let next = state.entries[state.index].resolve(url);
        let keep = state.index + 1;
        state.entries.truncate(keep);
        state.entries.push(next);
        state.index = keep;
        Ok(())
    }

    fn replace_url(&self, url: &str) -> Result<(), String> {
        reject_foreign_origin(url)?;
        let mut state = self.state.borrow_mut();
        let index = state.index;
        let next = state.entries[index].resolve(url);
        state.entries[index] = next;
        Ok(())
    }

    fn add_navigation_listener(&self, listener: NavigationListener) -> Result<ListenerId, String> {
        let id = ListenerId(self.next_listener_id.get());
        self.next_listener_id.set(id.0 + 1);
        self.listeners.borrow_mut().insert(id, listener);
        Ok(id)
    }

    fn remove_navigation_listener(&self, id: ListenerId) -> Result<(), String> {
        self.listeners.borrow_mut().remove(&id);
        Ok(())
    }

    fn dispatch_navigation_event(&self) -> Result<(), String> {
        self.notify_listeners();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_truncates_forward_entries() {
        let history = MemoryHistory::new("/app/");
        history.push_url("/app/services").expect("push");
        history.push_url("/app/faq").expect("push");
        assert!(history.back());
        assert!(history.back());
        history.push_url("/app/process").expect("push");

        assert_eq!(history.entries(), vec!["/app/", "/app/process"]);
        assert_eq!(history.index(), 1);
        assert!(!history.forward());
    }

    #[test]
    fn replace_overwrites_current_entry_without_growing_stack() {
        let history = MemoryHistory::new("/index.html?redirect=/services#pricing");
        history
            .replace_url("/index.html/services#pricing")
            .expect("replace");

        assert_eq!(history.entries(), vec!["/index.html/services#pricing"]);
        assert!(!history.back());
    }

    #[test]
    fn push_and_replace_reject_urls_naming_an_origin() {
        let history = MemoryHistory::new("/");
        for url in ["//evil.example/x", "/\\evil.example", "https://example.com/app"] {
            assert!(history.push_url(url).is_err(), "input={url:?}");
            assert!(history.replace_url(url).is_err(), "input={url:?}");
        }

        assert_eq!(history.entries(), vec!["/"]);
        assert_eq!(history.index(), 0);
    }

    #[test]
    fn back_and_forward_notify_only_when_cursor_moves() {
        let history = MemoryHistory::new("/");
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        history
            .add_navigation_listener(Rc::new(move || counter.set(counter.get() + 1)))
            .expect("listen");

        history.push_url("/services").expect("push");
        assert_eq!(hits.get(), 0, "push must not notify");

        assert!(history.back());
        assert_eq!(history.location().pathname, "/");
        assert!(!history.back());
        assert!(history.forward());
        assert!(!history.go(5));

        assert_eq!(hits.get(), 2);
        assert_eq!(history.location().pathname, "/services");
    }

    #[test]
    fn listener_may_unsubscribe_itself_during_dispatch() {
        let history = MemoryHistory::new("/");
        let slot: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));
        let handle = history.clone();
        let own_id = Rc::clone(&slot);
        let id = history
            .add_navigation_listener(Rc::new(move || {
                if let Some(id) = own_id.take() {
                    handle.remove_navigation_listener(id).expect("remove");
                }
            }))
            .expect("listen");
        slot.set(Some(id));

        history.dispatch_navigation_event().expect("dispatch");
        assert_eq!(history.listener_count(), 0);
        history.remove_navigation_listener(id).expect("repeat remove");
        assert_eq!(history.listener_count(), 0);
    }
}
