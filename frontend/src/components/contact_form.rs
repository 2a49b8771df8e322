use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use serde::Serialize;
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::motion::NOTICE_MS;

/// What a visitor sent. Lives only long enough to be logged.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub details: String,
}

impl ContactSubmission {
    /// Log line without anything the visitor typed.
    pub fn summary(&self) -> String {
        format!(
            "contact request received (company given: {}, {} chars of details)",
            if self.company.is_some() { "yes" } else { "no" },
            self.details.chars().count()
        )
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Please tell us your name")]
    MissingName,
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("That email address doesn't look right")]
    InvalidEmail,
    #[error("Please describe your project")]
    MissingDetails,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub title: &'static str,
    pub body: &'static str,
}

impl Notice {
    pub fn sent() -> Self {
        Self {
            title: "Message Sent!",
            body: "We'll get back to you within 24 hours.",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    Details,
}

/// Form contents plus the one notice that may be on screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub company: String,
    pub details: String,
    pub error: Option<FormError>,
    pub notice: Option<Notice>,
}

impl FormState {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Details => self.details = value,
        }
    }

    fn validate(&self) -> Result<ContactSubmission, FormError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let details = self.details.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        if email.is_empty() {
            return Err(FormError::MissingEmail);
        }
        if !email.contains('@') {
            return Err(FormError::InvalidEmail);
        }
        if details.is_empty() {
            return Err(FormError::MissingDetails);
        }
        let company = self.company.trim();
        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            company: (!company.is_empty()).then(|| company.to_string()),
            details: details.to_string(),
        })
    }

    /// On success the fields are cleared and the notice replaced; on failure
    /// the fields are kept and no notice is shown.
    pub fn submit(&mut self) -> Result<ContactSubmission, FormError> {
        match self.validate() {
            Ok(submission) => {
                *self = FormState {
                    notice: Some(Notice::sent()),
                    ..FormState::default()
                };
                Ok(submission)
            }
            Err(error) => {
                self.error = Some(error.clone());
                self.notice = None;
                Err(error)
            }
        }
    }

    pub fn dismiss(&mut self) {
        self.notice = None;
    }
}

pub enum ContactFormMsg {
    Edit(Field, String),
    Submit,
    Dismiss,
}

pub struct ContactForm {
    state: FormState,
    dismiss_timer: Option<Timeout>,
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: FormState::default(),
            dismiss_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Edit(field, value) => {
                self.state.set(field, value);
                true
            }
            ContactFormMsg::Submit => {
                match self.state.submit() {
                    Ok(submission) => {
                        info!("{}", submission.summary());
                        match serde_json::to_string(&submission) {
                            Ok(json) => debug!("Contact submission payload: {}", json),
                            Err(e) => warn!("Could not serialize contact submission: {}", e),
                        }
                        // Replacing the timer cancels the previous one
                        let link = ctx.link().clone();
                        self.dismiss_timer = Some(Timeout::new(NOTICE_MS, move || {
                            link.send_message(ContactFormMsg::Dismiss);
                        }));
                    }
                    Err(e) => {
                        info!("Contact form rejected: {}", e);
                        self.dismiss_timer = None;
                    }
                }
                true
            }
            ContactFormMsg::Dismiss => {
                self.state.dismiss();
                self.dismiss_timer = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });
        let input = |field: Field| {
            link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                ContactFormMsg::Edit(field, input.value())
            })
        };
        let on_details = link.callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            ContactFormMsg::Edit(Field::Details, area.value())
        });

        html! {
            <div class="contact-form-wrapper">
                <form class="contact-form" onsubmit={onsubmit} novalidate=true>
                    <div class="form-row">
                        <label for="contact-name">{"Name *"}</label>
                        <input
                            id="contact-name"
                            type="text"
                            placeholder="Your name"
                            value={self.state.name.clone()}
                            oninput={input(Field::Name)}
                        />
                    </div>
                    <div class="form-row">
                        <label for="contact-email">{"Email *"}</label>
                        <input
                            id="contact-email"
                            type="email"
                            placeholder="you@company.com"
                            value={self.state.email.clone()}
                            oninput={input(Field::Email)}
                        />
                    </div>
                    <div class="form-row">
                        <label for="contact-company">{"Company"}</label>
                        <input
                            id="contact-company"
                            type="text"
                            placeholder="Optional"
                            value={self.state.company.clone()}
                            oninput={input(Field::Company)}
                        />
                    </div>
                    <div class="form-row">
                        <label for="contact-details">{"Project details *"}</label>
                        <textarea
                            id="contact-details"
                            rows="6"
                            placeholder="Tell us what you're building"
                            value={self.state.details.clone()}
                            oninput={on_details}
                        />
                    </div>
                    if let Some(error) = &self.state.error {
                        <p class="form-error" role="alert">{ error.to_string() }</p>
                    }
                    <button type="submit" class="cta-button">{"Send Message"}</button>
                </form>

                if let Some(notice) = &self.state.notice {
                    <div class="notice" role="status">
                        <div>
                            <strong>{ notice.title }</strong>
                            <p>{ notice.body }</p>
                        </div>
                        <button
                            class="notice-close"
                            aria-label="Close"
                            onclick={link.callback(|_| ContactFormMsg::Dismiss)}
                        >
                            {"✕"}
                        </button>
                    </div>
                }

                <style>
                    {r#"
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }
                    .form-row {
                        display: flex;
                        flex-direction: column;
                        gap: 0.4rem;
                    }
                    .form-row label {
                        font-weight: 600;
                        color: var(--text-muted);
                    }
                    .form-row input,
                    .form-row textarea {
                        padding: 0.85rem 1rem;
                        border-radius: 10px;
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        background: rgba(255, 255, 255, 0.04);
                        color: inherit;
                        font: inherit;
                    }
                    .form-row input:focus,
                    .form-row textarea:focus {
                        outline: none;
                        border-color: var(--primary);
                    }
                    .form-error {
                        color: #ff6b6b;
                        margin: 0;
                    }
                    .notice {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        z-index: 100;
                        display: flex;
                        gap: 1rem;
                        align-items: flex-start;
                        padding: 1rem 1.25rem;
                        border-radius: 12px;
                        background: var(--primary);
                        color: #fff;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3);
                        animation: notice-in 0.3s ease-out;
                    }
                    .notice p {
                        margin: 0.25rem 0 0;
                    }
                    .notice-close {
                        background: none;
                        border: none;
                        color: inherit;
                        cursor: pointer;
                        font-size: 1rem;
                    }
                    @keyframes notice-in {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    "#}
                </style>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut state = FormState::default();
        state.set(Field::Name, "Asha".into());
        state.set(Field::Email, " asha@example.com ".into());
        state.set(Field::Details, "A booking app for our clinics".into());
        state
    }

    #[test]
    fn successful_submit_clears_fields_and_shows_one_notice() {
        let mut state = filled();
        let submission = state.submit().unwrap();
        assert_eq!(submission.email, "asha@example.com");
        assert_eq!(submission.company, None);
        assert_eq!(state.name, "");
        assert_eq!(state.details, "");
        assert_eq!(state.notice, Some(Notice::sent()));
        assert_eq!(state.error, None);
    }

    #[test]
    fn second_submit_replaces_the_notice() {
        let mut state = filled();
        state.submit().unwrap();
        let mut again = filled();
        again.notice = state.notice.clone();
        again.submit().unwrap();
        assert_eq!(again.notice, Some(Notice::sent()));
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        let mut state = filled();
        state.set(Field::Name, "   ".into());
        assert_eq!(state.submit(), Err(FormError::MissingName));
        assert!(state.notice.is_none());
        assert_eq!(state.email, " asha@example.com ");

        let mut state = filled();
        state.set(Field::Details, "".into());
        assert_eq!(state.submit(), Err(FormError::MissingDetails));
    }

    #[test]
    fn email_needs_an_at_sign() {
        let mut state = filled();
        state.set(Field::Email, "asha.example.com".into());
        assert_eq!(state.submit(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn company_is_optional_but_kept_when_given() {
        let mut state = filled();
        state.set(Field::Company, "Clinic Co".into());
        assert_eq!(state.submit().unwrap().company.as_deref(), Some("Clinic Co"));
    }

    #[test]
    fn dismiss_clears_the_notice() {
        let mut state = filled();
        state.submit().unwrap();
        state.dismiss();
        assert!(state.notice.is_none());
    }

    #[test]
    fn summary_leaves_out_personal_details() {
        let summary = filled().submit().unwrap().summary();
        assert_eq!(
            summary,
            "contact request received (company given: no, 29 chars of details)"
        );
        assert!(!summary.contains("Asha"));
        assert!(!summary.contains("asha@example.com"));
        assert!(!summary.contains("clinics"));
    }

    #[test]
    fn submission_serializes_for_logging() {
        let json = serde_json::to_string(&filled().submit().unwrap()).unwrap();
        assert!(json.contains("\"company\":null"));
    }
}
