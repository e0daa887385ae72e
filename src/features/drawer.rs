//! Mobile drawer controller.
//!
//! DESIGN
//! ======
//! `DrawerController` owns the drawer model and its DOM handles. The
//! page-lifetime listeners (toggle, overlay, Escape, panel links) share the
//! controller behind `Rc<RefCell<_>>`. The keydown focus trap is scoped to
//! the Open phase: open installs it, close drops it, and every
//! close-triggering path runs through the one close routine, so the
//! subscription cannot leak.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use crate::state::drawer::{DrawerModel, FocusWrap, focus_wrap};
use crate::util::{dom, focus};

const MENU_TOGGLE: &str = "[data-menu-toggle]";
const DRAWER: &str = "[data-mobile-drawer]";
const OVERLAY: &str = "[data-drawer-overlay]";
const PANEL: &str = "[data-drawer-panel]";

const OPEN_CLASS: &str = "open";
const NAV_OPEN_CLASS: &str = "nav-open";

/// Live drawer wiring. Dropping it detaches every drawer listener.
pub struct DrawerFeature {
    _controller: Rc<RefCell<DrawerController>>,
    _toggle_click: EventListener,
    _overlay_click: Option<EventListener>,
    _escape: EventListener,
    _link_clicks: Vec<EventListener>,
}

impl DrawerFeature {
    /// Wire the drawer. The toggle control and the drawer container must
    /// both exist; the overlay and panel are optional refinements.
    #[must_use]
    pub fn mount(document: &Document) -> Option<Self> {
        let toggle = dom::query(document, MENU_TOGGLE).and_then(dom::as_html);
        let drawer = dom::query(document, DRAWER);
        let (Some(toggle), Some(drawer)) = (toggle, drawer) else {
            log::debug!("no drawer markup on this page");
            return None;
        };
        let body = document.body()?;
        let panel = dom::query(document, PANEL);
        let overlay = dom::query(document, OVERLAY);

        let controller = Rc::new(RefCell::new(DrawerController {
            document: document.clone(),
            body,
            drawer,
            toggle: toggle.clone(),
            panel: panel.clone(),
            model: DrawerModel::default(),
            last_focused: None,
            trap: None,
        }));
        // make the markup agree with the Closed starting phase
        controller.borrow().project();

        let toggle_controller = Rc::clone(&controller);
        let toggle_click = EventListener::new(&toggle, "click", move |_event| {
            toggle_controller.borrow_mut().toggle();
        });

        let overlay_click = overlay.map(|overlay| {
            let overlay_controller = Rc::clone(&controller);
            EventListener::new(&overlay, "click", move |_event| {
                overlay_controller.borrow_mut().close();
            })
        });

        let escape_controller = Rc::clone(&controller);
        let escape = EventListener::new(document, "keydown", move |event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if key_event.key() == "Escape" {
                escape_controller.borrow_mut().close();
            }
        });

        // a tap on any in-panel link navigates, so the drawer gets out of the way
        let link_clicks = panel
            .as_ref()
            .map(|panel| dom::query_all_under(panel, "a"))
            .unwrap_or_default()
            .into_iter()
            .map(|link| {
                let link_controller = Rc::clone(&controller);
                EventListener::new(&link, "click", move |_event| {
                    link_controller.borrow_mut().close();
                })
            })
            .collect();

        Some(Self {
            _controller: controller,
            _toggle_click: toggle_click,
            _overlay_click: overlay_click,
            _escape: escape,
            _link_clicks: link_clicks,
        })
    }
}

/// Model plus DOM handles for the one drawer on the page.
struct DrawerController {
    document: Document,
    body: HtmlElement,
    drawer: Element,
    toggle: HtmlElement,
    panel: Option<Element>,
    model: DrawerModel,
    last_focused: Option<HtmlElement>,
    trap: Option<EventListener>,
}

impl DrawerController {
    fn toggle(&mut self) {
        if self.model.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    fn open(&mut self) {
        if !self.model.open() {
            return;
        }
        self.last_focused = self
            .document
            .active_element()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        self.project();
        let first = self
            .panel
            .as_ref()
            .and_then(|panel| focus::focusable_elements(panel).into_iter().next());
        let _ = first.unwrap_or_else(|| self.toggle.clone()).focus();
        // installing the trap replaces any previous handle, dropping its listener
        self.trap = Some(self.trap_listener());
    }

    fn close(&mut self) {
        if !self.model.close() {
            return;
        }
        self.project();
        self.trap = None;
        let target = self
            .last_focused
            .take()
            .unwrap_or_else(|| self.toggle.clone());
        let _ = target.focus();
    }

    /// Write the current phase onto the DOM: container and body classes plus
    /// the toggle's expanded state.
    fn project(&self) {
        let open = self.model.is_open();
        let _ = self.drawer.class_list().toggle_with_force(OPEN_CLASS, open);
        let _ = self
            .body
            .class_list()
            .toggle_with_force(NAV_OPEN_CLASS, open);
        let _ = self
            .toggle
            .set_attribute("aria-expanded", if open { "true" } else { "false" });
    }

    /// Document-level Tab interceptor, alive only while the drawer is open.
    /// The focusable set is recomputed on every keypress.
    fn trap_listener(&self) -> EventListener {
        let document = self.document.clone();
        let panel = self.panel.clone();
        EventListener::new_with_options(
            &self.document,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if key_event.key() != "Tab" {
                    return;
                }
                let Some(panel) = panel.as_ref() else {
                    return;
                };
                let focusable = focus::focusable_elements(panel);
                let active = document.active_element();
                let position = focus::position_of(&focusable, active.as_ref());
                let target = match focus_wrap(key_event.shift_key(), position, focusable.len()) {
                    Some(FocusWrap::ToFirst) => focusable.first(),
                    Some(FocusWrap::ToLast) => focusable.last(),
                    None => None,
                };
                if let Some(target) = target {
                    event.prevent_default();
                    let _ = target.focus();
                }
            },
        )
    }
}
