//! Update function for the consultation form, Elm style: apply `msg` to the
//! state and report whether the view must re-render.
//!
//! `Submit` is the only message with side effects. When the form hands back a
//! validated payload it is sent once; after a successful insert the new-lead
//! notification is fired without waiting for it.

use common::model::application::NewApplication;
use common::requests::NotifyRequest;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

use super::messages::Msg;
use super::state::ConsultationFormComponent;

pub fn update(
    component: &mut ConsultationFormComponent,
    ctx: &Context<ConsultationFormComponent>,
    msg: Msg,
) -> bool {
    let form = &mut component.form;
    match msg {
        Msg::SetName(name) => form.set_name(name),
        Msg::SetContact(raw) => form.set_contact(&raw),
        Msg::ToggleRegion(region) => form.toggle_region(region),
        Msg::SetConsent(consent) => form.set_privacy_consent(consent),
        Msg::TogglePrivacyDetail => form.toggle_privacy_detail(),
        Msg::Submit => {
            let Some(payload) = form.begin_submit(&component.attribution) else {
                return true;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::submit_application(&payload).await {
                    Ok(_) => {
                        link.send_message(Msg::SubmitSucceeded);
                        notify(&payload);
                    }
                    Err(failure) => link.send_message(Msg::SubmitFailed(failure.message)),
                }
            });
        }
        Msg::SubmitSucceeded => form.submit_succeeded(),
        Msg::SubmitFailed(message) => form.submit_failed(message),
        Msg::ConfirmSuccess => form.reset(),
    }
    true
}

fn notify(lead: &NewApplication) {
    let request = NotifyRequest {
        name: Some(lead.name.clone()),
        contact: Some(lead.contact.clone()),
        region: Some(lead.region.label().to_string()),
        source: lead.source.clone(),
    };
    spawn_local(async move {
        if let Err(failure) = api::notify_new_lead(&request).await {
            gloo_console::error!("Slack 알림 전송 실패:", failure.message);
        }
    });
}
