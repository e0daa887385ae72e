//! Contact form validation wiring.

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::state::contact::{ContactSubmission, SubmissionOutcome};
use crate::util::dom;

const CONTACT_FORM: &str = "[data-contact-form]";
const CONTACT_ALERT: &str = "[data-contact-alert]";
const NAME_FIELD: &str = r#"input[name="name"]"#;
const EMAIL_FIELD: &str = r#"input[name="email"]"#;
const MESSAGE_FIELD: &str = r#"textarea[name="message"]"#;

/// Live contact-form wiring.
pub struct ContactFeature {
    _submit: EventListener,
}

impl ContactFeature {
    /// Wire the submit gate. Needs both the form and its alert region.
    #[must_use]
    pub fn mount(document: &Document) -> Option<Self> {
        let Some(form) = dom::query(document, CONTACT_FORM)
            .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
        else {
            log::debug!("no contact form on this page");
            return None;
        };
        let Some(alert) = dom::query_under(&form, CONTACT_ALERT).and_then(dom::as_html) else {
            log::debug!("contact form has no alert region");
            return None;
        };

        let submit_form = form.clone();
        let submit = EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                // frontend-only: the submission never leaves the page
                event.prevent_default();
                let Some(submission) = read_submission(&submit_form) else {
                    return;
                };
                let outcome = submission.validate();
                show_status(&alert, outcome);
                if outcome == SubmissionOutcome::Accepted {
                    submit_form.reset();
                }
            },
        );

        Some(Self { _submit: submit })
    }
}

/// Read the three field values, fresh on every submit.
fn read_submission(form: &HtmlFormElement) -> Option<ContactSubmission> {
    let name = dom::query_under(form, NAME_FIELD)?
        .dyn_into::<HtmlInputElement>()
        .ok()?;
    let email = dom::query_under(form, EMAIL_FIELD)?
        .dyn_into::<HtmlInputElement>()
        .ok()?;
    let message = dom::query_under(form, MESSAGE_FIELD)?
        .dyn_into::<HtmlTextAreaElement>()
        .ok()?;
    Some(ContactSubmission {
        name: name.value(),
        email: email.value(),
        message: message.value(),
    })
}

/// Project the outcome's copy and palette onto the alert region.
fn show_status(alert: &HtmlElement, outcome: SubmissionOutcome) {
    alert.set_text_content(Some(outcome.message()));
    let palette = outcome.palette();
    let style = alert.style();
    let _ = style.set_property("display", "block");
    let _ = style.set_property("background", palette.background);
    let _ = style.set_property("border-color", palette.border);
    let _ = style.set_property("color", palette.text);
}
