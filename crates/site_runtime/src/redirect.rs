//! Startup rewrite of the static-host fallback `?redirect=` convention.
//!
//! A host without server-side rewrites serves a fallback document for unknown deep links,
//! which bounces the browser to `<base>?redirect=<encoded sub-path>#hash`. Before the site
//! mounts, [`normalize_redirect`] turns that back into `<base><sub-path>#hash` by replacing the
//! current history entry, so back navigation never returns to the query-bearing URL.

use std::borrow::Cow;

use leptos::logging;
use percent_encoding::percent_decode_str;
use platform_host::{HistoryHost, LocationSnapshot};

/// Query key written by the fallback page.
pub const REDIRECT_PARAM: &str = "redirect";

/// Returns the decoded value of the first `key` pair in `search`.
///
/// Decoding follows `URLSearchParams`: `+` reads as a space and percent-escapes are decoded,
/// replacing invalid UTF-8.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(raw_key) == key).then(|| decode_component(raw_value))
        })
}

fn decode_component(raw: &str) -> String {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Computes the clean URL for `location`, or `None` when there is nothing to rewrite.
///
/// The result is `pathname + redirect + hash` with the whole query dropped. When `pathname` ends
/// in `/`, every leading slash (or backslash) of the redirect is dropped, so the result never
/// reads as a protocol-relative URL.
pub fn redirect_target(location: &LocationSnapshot) -> Option<String> {
    let redirect = query_param(&location.search, REDIRECT_PARAM)?;
    if redirect.is_empty() {
        return None;
    }

    let sub_path = if location.pathname.ends_with('/') {
        redirect.trim_start_matches(&['/', '\\'][..])
    } else {
        redirect.as_str()
    };
    Some(format!("{}{sub_path}{}", location.pathname, location.hash))
}

/// Rewrites the current history entry when the location carries a `redirect` parameter.
///
/// Returns the new URL when a rewrite happened.
pub fn normalize_redirect(host: &dyn HistoryHost) -> Option<String> {
    let target = redirect_target(&host.location())?;
    match host.replace_url(&target) {
        Ok(()) => {
            logging::log!("restored deep link `{target}` from fallback redirect");
            Some(target)
        }
        Err(err) => {
            logging::warn!("fallback redirect to `{target}` failed: {err}");
            None
        }
    }
}
