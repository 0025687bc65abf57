//! Calendar helpers for page rendering.

/// Year reported outside the browser, where no wall clock is consulted.
pub const NATIVE_FALLBACK_YEAR: i32 = 1970;

/// Returns the current calendar year from the browser clock.
///
/// Native builds report [`NATIVE_FALLBACK_YEAR`].
pub fn current_year() -> i32 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0().get_full_year() as i32
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        NATIVE_FALLBACK_YEAR
    }
}
