//! Today's-hours card.

use web_sys::Document;

use crate::state::hours::{Weekday, today_line};
use crate::util::dom;

const TODAY_HOURS: &str = "[data-today-hours]";

/// Render today's opening hours once, in the viewer's local time.
///
/// Stays put across a midnight rollover; pages here are short-lived.
pub fn render_today(document: &Document) {
    let Some(target) = dom::query(document, TODAY_HOURS) else {
        log::debug!("no today-hours target on this page");
        return;
    };
    let today = Weekday::from_day_index(js_sys::Date::new_0().get_day());
    target.set_text_content(Some(&today_line(today)));
}
