//! Back-to-top visibility rule.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scroll offset, in CSS pixels, past which the back-to-top control shows.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

/// Whether the control is visible at the given vertical scroll offset.
#[must_use]
pub fn back_to_top_visible(offset: f64) -> bool {
    offset > BACK_TO_TOP_THRESHOLD_PX
}
