//! Scroll-reveal animation wiring.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

use crate::state::reveal::{REVEAL_THRESHOLD, RevealMotion};
use crate::util::dom;

const REVEAL_SELECTOR: &str = ".reveal";
const VISIBLE_CLASS: &str = "visible";
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Live reveal wiring. Owns the observer and its callback closure; dropping
/// the handle disconnects whatever is still observed.
pub struct RevealFeature {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealFeature {
    /// Observe every flagged element, or mark them all visible straight away
    /// when the viewer prefers reduced motion.
    #[must_use]
    pub fn mount(window: &Window, document: &Document) -> Option<Self> {
        let elements = dom::query_all(document, REVEAL_SELECTOR);
        if elements.is_empty() {
            log::debug!("no reveal-flagged elements on this page");
            return None;
        }

        let motion = RevealMotion::for_preference(prefers_reduced_motion(window));
        if motion == RevealMotion::Immediate {
            for element in &elements {
                mark_visible(element);
            }
            return None;
        }

        let callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)> =
            Closure::new(|entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    mark_visible(&target);
                    // one-shot: a revealed element leaves the observed set
                    observer.unobserve(&target);
                }
            });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;

        for element in &elements {
            observer.observe(element);
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealFeature {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .is_some_and(|list| list.matches())
}

fn mark_visible(element: &Element) {
    let _ = element.class_list().add_1(VISIBLE_CLASS);
}
