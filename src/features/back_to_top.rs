//! Back-to-top control.

use gloo_events::EventListener;
use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

use crate::state::scroll::back_to_top_visible;
use crate::util::dom;

const BACK_TO_TOP: &str = "[data-back-to-top]";
const VISIBLE_CLASS: &str = "visible";

/// Live back-to-top wiring: visibility sync on every scroll event, smooth
/// scroll to the top on activation.
pub struct BackToTopFeature {
    _scroll: EventListener,
    _click: EventListener,
}

impl BackToTopFeature {
    /// Wire the control, syncing visibility once for the initial offset.
    #[must_use]
    pub fn mount(window: &Window, document: &Document) -> Option<Self> {
        let Some(control) = dom::query(document, BACK_TO_TOP) else {
            log::debug!("no back-to-top control on this page");
            return None;
        };
        sync_visibility(window, &control);

        let scroll_window = window.clone();
        let scroll_control = control.clone();
        let scroll = EventListener::new(window, "scroll", move |_event| {
            sync_visibility(&scroll_window, &scroll_control);
        });

        let click_window = window.clone();
        let click = EventListener::new(&control, "click", move |_event| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            click_window.scroll_to_with_scroll_to_options(&options);
        });

        Some(Self {
            _scroll: scroll,
            _click: click,
        })
    }
}

/// Project the visibility rule onto the control's `visible` class.
fn sync_visibility(window: &Window, control: &Element) {
    let offset = window.scroll_y().unwrap_or_default();
    let _ = control
        .class_list()
        .toggle_with_force(VISIBLE_CLASS, back_to_top_visible(offset));
}
