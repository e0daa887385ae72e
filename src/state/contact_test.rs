use super::*;

fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
    ContactSubmission {
        name: name.to_owned(),
        email: email.to_owned(),
        message: message.to_owned(),
    }
}

// =============================================================
// email_is_plausible
// =============================================================

#[test]
fn plain_addresses_pass() {
    assert!(email_is_plausible("jane@x.com"));
    assert!(email_is_plausible("a@b.c"));
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert!(email_is_plausible("  jane@x.com  "));
}

#[test]
fn missing_at_sign_fails() {
    assert!(!email_is_plausible("not-an-email"));
    assert!(!email_is_plausible(""));
    assert!(!email_is_plausible("jane.x.com"));
}

#[test]
fn empty_local_part_fails() {
    assert!(!email_is_plausible("@x.com"));
}

#[test]
fn dot_needs_a_character_on_each_side() {
    assert!(!email_is_plausible("a@.com"));
    assert!(!email_is_plausible("a@bcom."));
    assert!(!email_is_plausible("a@bcom"));
}

#[test]
fn any_qualifying_dot_after_the_at_sign_counts() {
    assert!(email_is_plausible("a@b.c."));
    assert!(email_is_plausible("first.last@sub.domain.com"));
}

// =============================================================
// Submission validation
// =============================================================

#[test]
fn complete_submission_is_accepted() {
    assert_eq!(
        submission("Jane", "jane@x.com", "Hi").validate(),
        SubmissionOutcome::Accepted
    );
}

#[test]
fn blank_name_is_rejected() {
    assert_eq!(
        submission("", "jane@x.com", "Hi").validate(),
        SubmissionOutcome::Rejected
    );
    assert_eq!(
        submission("   ", "jane@x.com", "Hi").validate(),
        SubmissionOutcome::Rejected
    );
}

#[test]
fn implausible_email_is_rejected() {
    assert_eq!(
        submission("Jane", "not-an-email", "Hi").validate(),
        SubmissionOutcome::Rejected
    );
}

#[test]
fn blank_message_is_rejected() {
    assert_eq!(
        submission("Jane", "jane@x.com", "\n\t ").validate(),
        SubmissionOutcome::Rejected
    );
}

#[test]
fn padded_fields_still_count_as_filled() {
    assert_eq!(
        submission(" Jane ", " jane@x.com ", " Hi ").validate(),
        SubmissionOutcome::Accepted
    );
}

// =============================================================
// Outcome projection
// =============================================================

#[test]
fn outcome_messages_are_the_literal_copy() {
    assert_eq!(
        SubmissionOutcome::Accepted.message(),
        "Thanks! Your message has been noted. We will be in touch soon."
    );
    assert_eq!(
        SubmissionOutcome::Rejected.message(),
        "Please complete all fields with a valid email."
    );
}

#[test]
fn outcome_palettes_match_their_tone() {
    assert_eq!(SubmissionOutcome::Rejected.palette(), WARNING_PALETTE);
    assert_eq!(SubmissionOutcome::Accepted.palette(), CONFIRM_PALETTE);
    assert_eq!(WARNING_PALETTE.background, "#fff4e5");
    assert_eq!(WARNING_PALETTE.border, "#f7d7b5");
    assert_eq!(WARNING_PALETTE.text, "#7a4b1c");
    assert_eq!(CONFIRM_PALETTE.background, "#ecf7ee");
    assert_eq!(CONFIRM_PALETTE.border, "#cfe8d4");
    assert_eq!(CONFIRM_PALETTE.text, "#225d32");
}
