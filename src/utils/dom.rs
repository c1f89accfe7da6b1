//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Focus the terminal input element.
///
/// Convenience wrapper around `focus_element("input")`.
#[inline]
pub fn focus_terminal_input() {
    focus_element("input");
}

/// Scroll an element to its bottom edge.
pub fn scroll_to_bottom(element: &web_sys::Element) {
    element.set_scroll_top(element.scroll_height());
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Leave the page for `url`. Fire-and-forget.
pub fn navigate_to(url: &str) {
    if let Some(window) = window()
        && let Err(e) = window.location().set_href(url)
    {
        warn!("navigation to {} failed: {:?}", url, e);
    }
}
