//! Weekly opening hours table.

#[cfg(test)]
#[path = "hours_test.rs"]
mod hours_test;

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Convert a `Date::getDay` index (0 = Sunday) into a weekday.
    #[must_use]
    pub fn from_day_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Self::Sunday),
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            _ => None,
        }
    }

    /// Lowercase key, matching how the schedule table is written.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }
}

/// Posted opening hours, one entry per weekday key. Static; never mutated.
pub const WEEKLY_HOURS: [(&str, &str); 7] = [
    ("sunday", "7 AM–9 PM"),
    ("monday", "7 AM–9 PM"),
    ("tuesday", "7 AM–9 PM"),
    ("wednesday", "7 AM–9 PM"),
    ("thursday", "7 AM–9 PM"),
    ("friday", "7 AM–10 PM"),
    ("saturday", "7 AM–10 PM"),
];

/// Posted range for a weekday, if the table has one.
#[must_use]
pub fn hours_for(day: Weekday) -> Option<&'static str> {
    let key = day.key();
    WEEKLY_HOURS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, range)| *range)
}

/// Line rendered into the "today" card. Falls back to pointing at the full
/// schedule when the weekday cannot be resolved or has no table entry.
#[must_use]
pub fn today_line(day: Option<Weekday>) -> String {
    match day.and_then(hours_for) {
        Some(range) => format!("Today: {range}"),
        None => "Hours: See schedule below".to_owned(),
    }
}
