//! Leptos bindings for the navigation adapter: provider, route outlet and in-app links.
#![allow(clippy::clone_on_copy)]

use leptos::*;

use crate::{navigation::NavigationAdapter, routes::SiteRoute};

#[derive(Clone, Copy)]
/// Leptos context exposing the current logical path and a navigate callback.
pub struct NavigationContext {
    /// Adapter shared by every consumer under [`NavigationProvider`].
    pub adapter: StoredValue<NavigationAdapter>,
    /// Current logical path, updated on every navigation event.
    pub path: ReadSignal<String>,
    /// Pushes a new history entry for the given route.
    pub navigate: Callback<String>,
}

impl NavigationContext {
    /// Resolves the current path against the route table.
    pub fn route(&self) -> SiteRoute {
        self.path.with(|path| SiteRoute::resolve(path))
    }

    /// Navigates to `target` through the context callback.
    pub fn navigate_to(&self, target: impl Into<String>) {
        self.navigate.call(target.into());
    }

    /// Returns the absolute href for an in-app route.
    pub fn href_for(&self, target: &str) -> String {
        self.adapter.with_value(|adapter| adapter.href_for(target))
    }
}

/// Builds the [`NavigationContext`] for `adapter` under the current reactive owner.
///
/// The path signal is seeded from the adapter and written only when a navigation event changes
/// it. The adapter subscription is released when the owner is cleaned up.
pub fn provide_navigation(adapter: NavigationAdapter) -> NavigationContext {
    let (path, set_path) = create_signal(adapter.current_path());

    let reader = adapter.clone();
    let subscription = adapter.subscribe(move || {
        let next = reader.current_path();
        if path.with_untracked(|current| *current != next) {
            set_path.set(next);
        }
    });
    on_cleanup(move || subscription.unsubscribe());

    let adapter = store_value(adapter);
    let navigate = Callback::new(move |target: String| {
        adapter.with_value(|adapter| adapter.navigate(&target));
    });

    let context = NavigationContext {
        adapter,
        path,
        navigate,
    };
    provide_context(context);
    context
}

#[component]
/// Provides [`NavigationContext`] and keeps its path signal in sync with the host history.
pub fn NavigationProvider(
    /// Adapter built by the entry layer after the startup redirect rewrite.
    adapter: NavigationAdapter,
    children: Children,
) -> impl IntoView {
    provide_navigation(adapter);
    children().into_view()
}

/// Returns the current [`NavigationContext`].
///
/// # Panics
///
/// Panics if called outside [`NavigationProvider`].
pub fn use_navigation() -> NavigationContext {
    use_context::<NavigationContext>().expect("NavigationContext not provided")
}

#[component]
/// Renders the view for the route matching the current path.
pub fn RouteOutlet(
    /// Landing page view.
    #[prop(into)]
    home: ViewFn,
    /// Fallback view for every other path.
    #[prop(into)]
    not_found: ViewFn,
) -> impl IntoView {
    let navigation = use_navigation();
    let route = create_memo(move |_| navigation.route());

    view! {
        <div class="site-route" data-route=move || route.get().id()>
            {move || match route.get() {
                SiteRoute::Home => home.run(),
                SiteRoute::NotFound => not_found.run(),
            }}
        </div>
    }
}

/// Returns whether a click should be handled as in-app navigation.
///
/// Only an unmodified primary-button click qualifies; anything else keeps the browser default
/// (new tab, new window, download, context menu).
pub fn is_plain_primary_click(button: i16, meta: bool, ctrl: bool, shift: bool, alt: bool) -> bool {
    button == 0 && !(meta || ctrl || shift || alt)
}

#[component]
/// Anchor that navigates through the history adapter instead of reloading the document.
pub fn Link(
    /// Logical route, e.g. `/` or `/services`.
    #[prop(into)]
    to: String,
    /// Optional CSS class.
    #[prop(optional, into)]
    class: Option<String>,
    /// Optional accessible label.
    #[prop(optional, into)]
    aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    let navigation = use_navigation();
    let href = navigation.href_for(&to);

    let on_click = move |ev: ev::MouseEvent| {
        if ev.default_prevented()
            || !is_plain_primary_click(
                ev.button(),
                ev.meta_key(),
                ev.ctrl_key(),
                ev.shift_key(),
                ev.alt_key(),
            )
        {
            return;
        }
        ev.prevent_default();
        navigation.navigate_to(to.clone());
    };

    view! {
        <a href=href class=class aria-label=aria_label on:click=on_click>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use platform_host::{HistoryHost, MemoryHistory};

    use super::*;
    use crate::config::{BasePath, SiteConfig};

    #[test]
    fn provider_tracks_history_and_releases_its_listener() {
        let _ = create_runtime();
        let history = MemoryHistory::new("/app/");
        let config = SiteConfig {
            base_path: BasePath::parse("/app/").expect("base"),
            ..SiteConfig::default()
        };
        let adapter = NavigationAdapter::new(Rc::new(history.clone()), &config);

        let path_runs = Rc::new(Cell::new(0));
        let runs = Rc::clone(&path_runs);
        let provide = as_child_of_current_owner(move |adapter: NavigationAdapter| {
            let navigation = provide_navigation(adapter);
            let runs = Rc::clone(&runs);
            create_isomorphic_effect(move |_| {
                navigation.path.with(|_| runs.set(runs.get() + 1));
            });
            navigation
        });
        let (navigation, disposer) = provide(adapter);

        assert_eq!(navigation.path.get_untracked(), "/");
        assert_eq!(navigation.route(), SiteRoute::Home);
        assert_eq!(navigation.href_for("/services"), "/app/services");
        assert_eq!(history.listener_count(), 1);
        assert_eq!(path_runs.get(), 1);

        navigation.navigate_to("/services");
        assert_eq!(navigation.path.get_untracked(), "/services");
        assert_eq!(navigation.route(), SiteRoute::NotFound);
        assert_eq!(path_runs.get(), 2);

        history.dispatch_navigation_event().expect("dispatch");
        assert_eq!(path_runs.get(), 2, "unchanged path must not rewrite the signal");

        assert!(history.back());
        assert_eq!(navigation.path.get_untracked(), "/");
        assert_eq!(path_runs.get(), 3);

        drop(disposer);
        assert_eq!(history.listener_count(), 0);
    }

    #[test]
    fn only_unmodified_primary_clicks_are_intercepted() {
        let cases = [
            ((0, false, false, false, false), true),
            ((1, false, false, false, false), false),
            ((2, false, false, false, false), false),
            ((0, true, false, false, false), false),
            ((0, false, true, false, false), false),
            ((0, false, false, true, false), false),
            ((0, false, false, false, true), false),
        ];

        for ((button, meta, ctrl, shift, alt), expected) in cases {
            assert_eq!(
                is_plain_primary_click(button, meta, ctrl, shift, alt),
                expected,
                "input={:?}",
                (button, meta, ctrl, shift, alt)
            );
        }
    }
}
