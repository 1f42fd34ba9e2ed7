use common::model::application::Region;

#[derive(Clone)]
pub enum Msg {
    SetName(String),
    SetContact(String),
    ToggleRegion(Region),
    SetConsent(bool),
    TogglePrivacyDetail,
    Submit,
    SubmitSucceeded,
    SubmitFailed(String),
    ConfirmSuccess,
}
