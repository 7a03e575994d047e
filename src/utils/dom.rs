//! DOM and Web API utility functions.

use web_sys::{Document, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Set the document title to `{page} · {app}`.
pub fn set_title(page: &str, app: &str) {
    if let Some(document) = document() {
        document.set_title(&format!("{} · {}", page, app));
    }
}

/// Scroll the window back to the top, as a full page load would.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
