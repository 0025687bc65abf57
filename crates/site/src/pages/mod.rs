//! Page views rendered by the route outlet.

mod home;
mod not_found;

pub use home::{header_is_scrolled, HomePage, SCROLL_THRESHOLD_PX};
pub use not_found::NotFoundPage;
