//! FineLine marketing site: Leptos CSR entry, pages and static content.

pub mod content;
mod pages;
mod web_app;

pub use pages::{header_is_scrolled, HomePage, NotFoundPage, SCROLL_THRESHOLD_PX};
pub use web_app::SiteApp;

use leptos::logging;
use site_runtime::SiteConfig;

include!(concat!(env!("OUT_DIR"), "/site_config_generated.rs"));

/// Resolves the deployment configuration baked in at build time.
///
/// An invalid `site.toml` or override is logged and replaced by the defaults.
pub fn site_config() -> SiteConfig {
    match SiteConfig::from_build_env(SITE_TOML) {
        Ok(config) => config,
        Err(err) => {
            logging::warn!("{err}; serving from `/` with default settings");
            SiteConfig::default()
        }
    }
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    use std::rc::Rc;

    use site_runtime::{normalize_redirect, NavigationAdapter};

    console_error_panic_hook::set_once();

    let services = platform_host_web::build_host_services();
    normalize_redirect(services.history.as_ref());

    let adapter = NavigationAdapter::new(Rc::clone(&services.history), &site_config());
    logging::log!(
        "site mounted under `{}` (host: {})",
        adapter.base_path(),
        services.host_strategy.as_str()
    );

    leptos::mount_to_body(move || leptos::view! { <SiteApp adapter /> })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_site_toml_resolves_to_a_valid_config() {
        let config = SiteConfig::from_toml_str(SITE_TOML).expect("embedded site.toml parses");
        assert!(config.base_path.as_str().starts_with('/'));
        assert!(config.base_path.as_str().ends_with('/'));
    }
}
