//! DOM wiring for the page behaviors.
//!
//! Each feature mounts against its attachment points and returns a handle
//! owning its live subscriptions; a missing attachment point yields `None`
//! and the rest of the page is unaffected.

pub mod back_to_top;
pub mod contact;
pub mod drawer;
pub mod hours;
pub mod reveal;
