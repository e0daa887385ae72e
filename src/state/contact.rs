//! Contact form validation and status styling.
//!
//! The form is frontend-only: validation gates nothing but the inline status
//! message, and no submission ever leaves the page.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Raw field values read from the form at submit time.
#[derive(Debug, Clone, Default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Gate one submission attempt. Name and message must be non-empty after
    /// trimming; the email only has to look plausible.
    #[must_use]
    pub fn validate(&self) -> SubmissionOutcome {
        let complete = !self.name.trim().is_empty()
            && !self.message.trim().is_empty()
            && email_is_plausible(&self.email);
        if complete {
            SubmissionOutcome::Accepted
        } else {
            SubmissionOutcome::Rejected
        }
    }
}

/// Result of validating one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// All fields passed; the form is acknowledged and cleared.
    Accepted,
    /// At least one field failed; values are kept for correction.
    Rejected,
}

impl SubmissionOutcome {
    /// Inline status text shown for this outcome.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Accepted => "Thanks! Your message has been noted. We will be in touch soon.",
            Self::Rejected => "Please complete all fields with a valid email.",
        }
    }

    /// Palette for the status region.
    #[must_use]
    pub fn palette(self) -> AlertPalette {
        match self {
            Self::Accepted => CONFIRM_PALETTE,
            Self::Rejected => WARNING_PALETTE,
        }
    }
}

/// Inline styling applied to the status region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertPalette {
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
}

/// Warm amber palette for failed validation.
pub const WARNING_PALETTE: AlertPalette = AlertPalette {
    background: "#fff4e5",
    border: "#f7d7b5",
    text: "#7a4b1c",
};

/// Green palette for the acknowledgment message.
pub const CONFIRM_PALETTE: AlertPalette = AlertPalette {
    background: "#ecf7ee",
    border: "#cfe8d4",
    text: "#225d32",
};

/// Loose email shape check: something before an `@`, then a `.` with at
/// least one character on each side somewhere after it. Not RFC validation.
#[must_use]
pub fn email_is_plausible(raw: &str) -> bool {
    let chars: Vec<char> = raw.trim().chars().collect();
    let Some(at) = chars.iter().position(|&c| c == '@') else {
        return false;
    };
    if at == 0 {
        return false;
    }
    chars
        .iter()
        .enumerate()
        .any(|(index, &c)| c == '.' && index > at + 1 && index + 1 < chars.len())
}
