//! Guarded document queries.
//!
//! Every attachment point on the page is optional; these helpers collapse
//! the `Result<Option<_>>` shape of the selector APIs so callers read as
//! plain `Option` chains. A missing element is never an error here.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList};

/// First element matching `selector`, if any.
#[must_use]
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// First match of `selector` under `root`.
#[must_use]
pub fn query_under(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// All elements matching `selector`.
#[must_use]
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

/// All matches of `selector` under `root`.
#[must_use]
pub fn query_all_under(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

/// Narrow an element to `HtmlElement`, needed for focus and inline styles.
#[must_use]
pub fn as_html(element: Element) -> Option<HtmlElement> {
    element.dyn_into::<HtmlElement>().ok()
}

fn collect_elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
