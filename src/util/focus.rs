//! Focusable-element collection for the drawer focus trap.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Elements that can receive keyboard focus inside the drawer panel.
/// Explicitly tab-indexed elements count unless opted out with `-1`.
pub const FOCUSABLE_SELECTOR: &str =
    r#"a, button, textarea, input, select, [tabindex]:not([tabindex="-1"])"#;

/// Focusable elements inside `panel`, in document order. Queried fresh on
/// every call so DOM changes between key events are tolerated.
#[must_use]
pub fn focusable_elements(panel: &Element) -> Vec<HtmlElement> {
    let Ok(list) = panel.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .filter(|element| !element.has_attribute("disabled"))
        .collect()
}

/// Index of `active` within `focusable`, when it is one of them.
#[must_use]
pub fn position_of(focusable: &[HtmlElement], active: Option<&Element>) -> Option<usize> {
    let active = active?;
    focusable
        .iter()
        .position(|element| AsRef::<Element>::as_ref(element) == active)
}
