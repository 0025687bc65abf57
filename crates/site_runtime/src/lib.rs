//! Client-side navigation runtime for the FineLine site.
//!
//! [`redirect::normalize_redirect`] runs once before mount to undo the static-host fallback
//! redirect. [`navigation::NavigationAdapter`] then derives the logical path from the browser
//! location under the configured [`config::BasePath`], and [`components`] exposes it to Leptos
//! views through [`NavigationProvider`], [`RouteOutlet`] and [`Link`].

pub mod components;
pub mod config;
pub mod navigation;
pub mod redirect;
pub mod routes;

pub use components::{
    is_plain_primary_click, provide_navigation, use_navigation, Link, NavigationContext,
    NavigationProvider, RouteOutlet,
};
pub use config::{BasePath, SiteConfig, SiteConfigError, UnmatchedPathPolicy};
pub use navigation::{current_path_for, NavigationAdapter, Subscription};
pub use redirect::{normalize_redirect, query_param, redirect_target, REDIRECT_PARAM};
pub use routes::SiteRoute;
