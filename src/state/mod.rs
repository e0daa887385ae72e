//! Pure, natively-testable page models.
//!
//! DESIGN
//! ======
//! Everything the five behaviors decide (state transitions, lookups,
//! validation, visibility rules) lives here without any DOM types, so the
//! logic tests run on the host. The `features` modules project these models
//! onto the document.

pub mod contact;
pub mod drawer;
pub mod hours;
pub mod reveal;
pub mod scroll;
