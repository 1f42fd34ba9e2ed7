//! State machine for the consultation form.
//!
//! The form owns every field the visitor edits plus the submission phase.
//! Views read it and dispatch user actions to the methods below; nothing else
//! mutates it. A submission only reaches the network when `begin_submit`
//! hands back a validated `NewApplication`.

use crate::attribution::Attribution;
use crate::model::application::{NewApplication, Region};
use crate::phone::{self, INVALID_PHONE_MESSAGE};
use thiserror::Error;

/// Reasons a submission is blocked before it is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("이름을 입력해주세요.")]
    MissingName,
    #[error("연락처를 입력해주세요.")]
    MissingContact,
    #[error("{message}", message = INVALID_PHONE_MESSAGE)]
    InvalidContact,
    #[error("지역을 선택해주세요.")]
    MissingRegion,
    #[error("개인정보 수집 및 이용 동의는 필수입니다.")]
    MissingConsent,
}

/// Checks the fields shared by the form and an already-built payload.
fn check_fields(name: &str, contact: &str) -> Result<(), FormError> {
    if name.trim().is_empty() {
        return Err(FormError::MissingName);
    }
    if contact.trim().is_empty() {
        return Err(FormError::MissingContact);
    }
    if !phone::validate_phone_number(contact) {
        return Err(FormError::InvalidContact);
    }
    Ok(())
}

/// Validates a payload received from outside the form (e.g. by the server
/// before insert). The region is already guaranteed by the type.
pub fn validate_new_application(app: &NewApplication) -> Result<(), FormError> {
    check_fields(&app.name, &app.contact)?;
    if !app.privacy_consent {
        return Err(FormError::MissingConsent);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Editing,
    /// A request is in flight; the submit control is disabled.
    Submitting,
    /// Terminal until the visitor confirms the success dialog.
    Submitted,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsultationForm {
    pub name: String,
    pub contact: String,
    pub region: Option<Region>,
    pub privacy_consent: bool,
    pub checkbox_selection: Vec<String>,
    /// Live feedback under the contact field.
    pub contact_error: Option<&'static str>,
    /// Message of the last blocked or failed submission.
    pub error: Option<String>,
    pub show_privacy_detail: bool,
    pub phase: SubmitPhase,
}

impl ConsultationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Formats the raw input and refreshes the live contact error.
    pub fn set_contact(&mut self, raw: &str) {
        self.contact = phone::format_phone_number(raw);
        self.contact_error = phone::contact_feedback(&self.contact, self.contact_error);
    }

    /// Single-choice selection: picking the active region clears it.
    pub fn toggle_region(&mut self, region: Region) {
        self.region = if self.region == Some(region) {
            None
        } else {
            Some(region)
        };
    }

    pub fn set_privacy_consent(&mut self, consent: bool) {
        self.privacy_consent = consent;
    }

    pub fn toggle_privacy_detail(&mut self) {
        self.show_privacy_detail = !self.show_privacy_detail;
    }

    pub fn is_busy(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == SubmitPhase::Submitted
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.phase == SubmitPhase::Editing
            && !self.name.is_empty()
            && !self.contact.is_empty()
            && self.region.is_some()
            && self.privacy_consent
            && self.contact_error.is_none()
    }

    /// Validates the fields in the order the visitor sees them and builds
    /// the insert payload.
    pub fn validate(&self, attribution: &Attribution) -> Result<NewApplication, FormError> {
        check_fields(&self.name, &self.contact)?;
        let region = self.region.ok_or(FormError::MissingRegion)?;
        if !self.privacy_consent {
            return Err(FormError::MissingConsent);
        }

        Ok(NewApplication {
            name: self.name.trim().to_string(),
            contact: self.contact.clone(),
            region,
            privacy_consent: true,
            checkbox_selection: self.checkbox_selection.clone(),
            referrer_url: attribution.referrer_url.clone(),
            utm_source: attribution.utm_source.clone(),
            utm_medium: attribution.utm_medium.clone(),
            utm_campaign: attribution.utm_campaign.clone(),
            source: attribution.source.clone(),
        })
    }

    /// Starts a submission.
    ///
    /// Returns the payload to send, or `None` when the form is busy, already
    /// submitted, or invalid. In the invalid case `error` holds the message.
    pub fn begin_submit(&mut self, attribution: &Attribution) -> Option<NewApplication> {
        if self.phase != SubmitPhase::Editing {
            return None;
        }
        self.error = None;

        match self.validate(attribution) {
            Ok(payload) => {
                self.phase = SubmitPhase::Submitting;
                Some(payload)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn submit_succeeded(&mut self) {
        self.phase = SubmitPhase::Submitted;
    }

    /// Returns to editing with the datastore's message shown verbatim.
    pub fn submit_failed(&mut self, message: String) {
        self.phase = SubmitPhase::Editing;
        self.error = Some(message);
    }

    /// Clears every field after the success dialog is confirmed.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ConsultationForm {
        let mut form = ConsultationForm::new();
        form.set_name("  홍길동 ".to_string());
        form.set_contact("01012345678");
        form.toggle_region(Region::Seoul);
        form.set_privacy_consent(true);
        form
    }

    #[test]
    fn complete_form_produces_consenting_payload() {
        let mut form = filled();
        assert!(form.can_submit());

        let attribution = Attribution::capture("https://www.instagram.com/", "", "", "");
        let payload = form.begin_submit(&attribution).expect("valid form");
        assert_eq!(payload.name, "홍길동");
        assert_eq!(payload.contact, "010-1234-5678");
        assert_eq!(payload.region, Region::Seoul);
        assert!(payload.privacy_consent);
        assert_eq!(payload.source.as_deref(), Some("인스타"));
        assert!(form.is_busy());
        assert!(!form.can_submit());
    }

    #[test]
    fn missing_consent_blocks_submission() {
        let mut form = filled();
        form.set_privacy_consent(false);
        assert!(form.begin_submit(&Attribution::default()).is_none());
        assert_eq!(form.error.as_deref(), Some("개인정보 수집 및 이용 동의는 필수입니다."));
        assert_eq!(form.phase, SubmitPhase::Editing);
    }

    #[test]
    fn missing_region_blocks_submission() {
        let mut form = filled();
        form.toggle_region(Region::Seoul);
        assert_eq!(form.region, None);
        assert!(form.begin_submit(&Attribution::default()).is_none());
        assert_eq!(form.error.as_deref(), Some("지역을 선택해주세요."));
    }

    #[test]
    fn invalid_phone_blocks_submission() {
        let mut form = filled();
        form.set_contact("0111234567");
        assert!(form.begin_submit(&Attribution::default()).is_none());
        assert_eq!(form.error.as_deref(), Some(INVALID_PHONE_MESSAGE));

        form.set_contact("01112345678");
        assert_eq!(form.contact_error, Some(INVALID_PHONE_MESSAGE));
        assert!(!form.can_submit());
    }

    #[test]
    fn errors_follow_field_order() {
        let form = ConsultationForm::new();
        assert_eq!(form.validate(&Attribution::default()), Err(FormError::MissingName));

        let mut form = ConsultationForm::new();
        form.set_name("a".into());
        assert_eq!(form.validate(&Attribution::default()), Err(FormError::MissingContact));
    }

    #[test]
    fn region_is_single_choice() {
        let mut form = ConsultationForm::new();
        form.toggle_region(Region::Seoul);
        form.toggle_region(Region::Other);
        assert_eq!(form.region, Some(Region::Other));
    }

    #[test]
    fn busy_form_refuses_second_submit() {
        let mut form = filled();
        assert!(form.begin_submit(&Attribution::default()).is_some());
        assert!(form.begin_submit(&Attribution::default()).is_none());
    }

    #[test]
    fn failure_returns_to_editing_with_message() {
        let mut form = filled();
        form.begin_submit(&Attribution::default());
        form.submit_failed("duplicate key".to_string());
        assert_eq!(form.phase, SubmitPhase::Editing);
        assert_eq!(form.error.as_deref(), Some("duplicate key"));
        assert_eq!(form.contact, "010-1234-5678");
    }

    #[test]
    fn submitted_is_terminal_until_reset() {
        let mut form = filled();
        form.begin_submit(&Attribution::default());
        form.submit_succeeded();
        assert!(form.is_submitted());
        assert!(form.begin_submit(&Attribution::default()).is_none());

        form.reset();
        assert_eq!(form, ConsultationForm::default());
    }

    #[test]
    fn payload_validation_requires_consent() {
        let mut payload = filled().validate(&Attribution::default()).unwrap();
        assert_eq!(validate_new_application(&payload), Ok(()));

        payload.privacy_consent = false;
        assert_eq!(validate_new_application(&payload), Err(FormError::MissingConsent));

        payload.privacy_consent = true;
        payload.contact = "010-12-34".to_string();
        assert_eq!(validate_new_application(&payload), Err(FormError::InvalidContact));
    }
}
