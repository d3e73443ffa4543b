//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{HtmlElement, Window};

use crate::models::LayoutMetrics;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Path of the current page (`location.pathname`), empty if unavailable.
pub fn pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Open `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window()
        && window.open_with_url_and_target(url, "_blank").is_err()
    {
        web_sys::console::warn_1(&format!("Failed to open {}", url).into());
    }
}

/// Set the cursor on `<body>`; an empty value restores the default.
pub fn set_body_cursor(cursor: &str) {
    if let Some(body) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().set_property("cursor", cursor);
    }
}

/// Measure the split layout from its rendered elements.
pub fn measure_layout(
    container: &HtmlElement,
    sidebar: &HtmlElement,
    separator: &HtmlElement,
) -> LayoutMetrics {
    let rect = container.get_bounding_client_rect();
    LayoutMetrics {
        container_left: rect.left(),
        container_width: rect.width(),
        sidebar_width: f64::from(sidebar.offset_width()),
        separator_width: f64::from(separator.offset_width()),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_pathname_starts_with_slash() {
        assert!(pathname().starts_with('/'));
    }

    #[wasm_bindgen_test]
    fn test_measure_layout() {
        let document = window().unwrap().document().unwrap();
        let make = |width: &str| {
            let el: HtmlElement = document.create_element("div").unwrap().unchecked_into();
            el.style().set_property("width", width).unwrap();
            el.style().set_property("display", "block").unwrap();
            el
        };
        let container = make("1000px");
        let sidebar = make("200px");
        let separator = make("6px");
        container.append_child(&sidebar).unwrap();
        container.append_child(&separator).unwrap();
        document.body().unwrap().append_child(&container).unwrap();

        let metrics = measure_layout(&container, &sidebar, &separator);
        assert_eq!(metrics.container_width, 1000.0);
        assert_eq!(metrics.sidebar_width, 200.0);
        assert_eq!(metrics.separator_width, 6.0);
        assert_eq!(metrics.available_width(), 794.0);

        container.remove();
    }
}
