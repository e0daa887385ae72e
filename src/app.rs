//! Application bootstrap.
//!
//! DESIGN
//! ======
//! Initialization happens exactly once per page load. `boot` defers to a
//! one-shot `DOMContentLoaded` listener when the module loads before parsing
//! finishes, then `App::mount` wires every feature and the resulting handles
//! are parked in a thread-local slot for the lifetime of the page. Dropping
//! the `App` would detach every listener and observer; on a real page it
//! lives until unload.

use std::cell::RefCell;

use gloo_events::EventListener;

use crate::features::{back_to_top, contact, drawer, hours, reveal};

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Live page enhancements. Each field owns one feature's subscriptions;
/// `None` means that feature's attachment points were absent from the page.
pub struct App {
    _drawer: Option<drawer::DrawerFeature>,
    _back_to_top: Option<back_to_top::BackToTopFeature>,
    _reveal: Option<reveal::RevealFeature>,
    _contact: Option<contact::ContactFeature>,
}

impl App {
    /// Wire every feature against the current document.
    ///
    /// Returns `None` outside a browser environment. Individual features
    /// degrade to `None` fields when their attachment points are missing,
    /// without affecting the others.
    #[must_use]
    pub fn mount() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        hours::render_today(&document);

        let app = Self {
            _drawer: drawer::DrawerFeature::mount(&document),
            _back_to_top: back_to_top::BackToTopFeature::mount(&window, &document),
            _reveal: reveal::RevealFeature::mount(&window, &document),
            _contact: contact::ContactFeature::mount(&document),
        };
        log::info!("page enhancements mounted");
        Some(app)
    }
}

/// Boot once the document's structure is ready.
///
/// Loaded as a deferred module the document has normally finished parsing
/// already; the `DOMContentLoaded` path covers eager loading.
pub fn boot() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let listener = EventListener::once(&document, "DOMContentLoaded", |_event| mount_once());
        listener.forget();
    } else {
        mount_once();
    }
}

fn mount_once() {
    APP.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = App::mount();
        }
    });
}
