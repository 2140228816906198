use partyplanner_core::constants::PARAM_BUILD;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Retrieve the global `window` object when running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// The page's query string, including the leading `?`, or empty outside a browser.
#[must_use]
pub fn location_search() -> String {
    window()
        .and_then(|win| win.location().search().ok())
        .unwrap_or_default()
}

/// How a build reaches the session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    /// Add a new entry, so Back returns to the previous build.
    Push,
    /// Overwrite the current entry.
    Replace,
}

/// Push `build` into the address bar's `b` parameter without reloading.
///
/// # Errors
/// Returns an error when the browser rejects the history update.
pub fn push_build(build: &str) -> Result<(), JsValue> {
    sync_build(build, HistoryMode::Push)
}

/// Write `build` into the address bar's `b` parameter without reloading.
///
/// Nothing is written when the current query already carries the same build,
/// so history only grows on real edits.
///
/// # Errors
/// Returns an error when the browser rejects the history update.
pub fn sync_build(build: &str, mode: HistoryMode) -> Result<(), JsValue> {
    let Some(win) = window() else {
        return Ok(());
    };
    let location = win.location();
    let search = location.search()?;
    let Some(url) = url_for_build(&location.pathname()?, &search, build) else {
        return Ok(());
    };
    let history = win.history()?;
    match mode {
        HistoryMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(&url)),
        HistoryMode::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(&url)),
    }
}

/// Relative URL carrying `build` in the `b` parameter, or `None` when
/// `search` already holds it.
#[must_use]
pub fn url_for_build(pathname: &str, search: &str, build: &str) -> Option<String> {
    let query = format!("{PARAM_BUILD}={build}");
    if search.trim_start_matches('?') == query {
        None
    } else {
        Some(format!("{pathname}?{query}"))
    }
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}
