//! # site-enhance
//!
//! WASM enhancement layer for the marketing site. Pages ship as static
//! markup; this crate attaches the client-side behaviors once the document
//! is ready: today's opening hours, the mobile navigation drawer, the
//! back-to-top control, scroll-reveal animations, and the frontend-only
//! contact form validator.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | One-shot bootstrap; owns every live feature handle |
//! | [`state`] | Pure models: drawer machine, hours table, validation, scroll/reveal rules |
//! | [`features`] | DOM wiring for each page behavior |
//! | [`util`] | Shared DOM helpers: guarded queries, focusable elements |

pub mod app;
pub mod features;
pub mod state;
pub mod util;

use wasm_bindgen::prelude::wasm_bindgen;

/// Module entry point, invoked by the wasm loader.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    app::boot();
}
