//! View rendering for the consultation form.
//!
//! Notes
//! - Region options are checkboxes that behave as a single choice.
//! - The consent detail is a markdown notice rendered with `pulldown_cmark`.
//! - The success sheet stays mounted and is opened through its `open` prop.

use super::messages::Msg;
use super::state::ConsultationFormComponent;
use crate::tops_sheet::TopSheet;
use common::form::SubmitPhase;
use common::model::application::Region;
use common::phone::FORMATTED_LEN;
use pulldown_cmark::{html, Parser};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

const PRIVACY_NOTICE: &str = include_str!("privacy.md");

pub fn view(
    component: &ConsultationFormComponent,
    ctx: &Context<ConsultationFormComponent>,
) -> Html {
    let link = ctx.link();
    let form = &component.form;

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <>
            { build_success_sheet(component, link) }

            <form class="consultation-form" {onsubmit}>
                {
                    if let Some(error) = &form.error {
                        html! { <div class="form-error">{ error.clone() }</div> }
                    } else {
                        html! {}
                    }
                }

                <div class="field">
                    <label for="name">{"이름 "}<span class="required">{"*"}</span></label>
                    <input
                        id="name"
                        type="text"
                        placeholder="이름을 입력하세요"
                        value={form.name.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </div>

                { build_contact_field(component, link) }
                { build_region_field(component, link) }
                { build_consent_field(component, link) }

                <div class="form-actions">
                    <button type="submit" class="submit-btn" disabled={!form.can_submit()}>
                        { if form.phase == SubmitPhase::Submitting { "제출 중..." } else { "지원하기" } }
                    </button>
                </div>
            </form>
        </>
    }
}

fn build_contact_field(
    component: &ConsultationFormComponent,
    link: &Scope<ConsultationFormComponent>,
) -> Html {
    let form = &component.form;
    html! {
        <div class="field">
            <label for="contact">{"연락처 "}<span class="required">{"*"}</span></label>
            <input
                id="contact"
                type="tel"
                placeholder="01012345678"
                maxlength={FORMATTED_LEN.to_string()}
                class={classes!(form.contact_error.is_some().then_some("invalid"))}
                value={form.contact.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetContact(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            {
                if let Some(message) = form.contact_error {
                    html! { <p class="field-error">{ message }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_region_field(
    component: &ConsultationFormComponent,
    link: &Scope<ConsultationFormComponent>,
) -> Html {
    let selected = component.form.region;
    let options = Region::ALL
        .into_iter()
        .map(|region| {
            html! {
                <label class="choice" key={region.label()}>
                    <input
                        type="checkbox"
                        checked={selected == Some(region)}
                        onchange={link.callback(move |_| Msg::ToggleRegion(region))}
                    />
                    <span>{ region.label() }</span>
                </label>
            }
        })
        .collect::<Html>();

    html! {
        <div class="field">
            <label>{"지역 "}<span class="required">{"*"}</span></label>
            <div class="choices">{ options }</div>
        </div>
    }
}

fn build_consent_field(
    component: &ConsultationFormComponent,
    link: &Scope<ConsultationFormComponent>,
) -> Html {
    let form = &component.form;
    html! {
        <div class="field">
            <label class="choice">
                <input
                    type="checkbox"
                    checked={form.privacy_consent}
                    onchange={link.callback(|e: Event| {
                        Msg::SetConsent(e.target_unchecked_into::<HtmlInputElement>().checked())
                    })}
                />
                <span>
                    {"개인정보 수집 및 이용 동의 "}<span class="required">{"*"}</span>{" "}
                    <button
                        type="button"
                        class="link-btn"
                        onclick={link.callback(|_| Msg::TogglePrivacyDetail)}
                    >
                        {"자세히 보기"}
                    </button>
                </span>
            </label>
            {
                if form.show_privacy_detail {
                    html! { <div class="privacy-detail">{ render_privacy_notice() }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn render_privacy_notice() -> Html {
    let mut html_output = String::new();
    html::push_html(&mut html_output, Parser::new(PRIVACY_NOTICE));
    Html::from_html_unchecked(AttrValue::from(html_output))
}

fn build_success_sheet(
    component: &ConsultationFormComponent,
    link: &Scope<ConsultationFormComponent>,
) -> Html {
    html! {
        <TopSheet node_ref={component.success_sheet_ref.clone()} open={component.form.is_submitted()}>
            <div class="success-dialog">
                <img src="/check.gif" alt="완료" class="success-icon" />
                <h3>{"지원이 완료되었습니다"}</h3>
                <p>{"담당자가 빠른시일내에 연락 드리겠습니다."}</p>
                <button class="primary-btn" onclick={link.callback(|_| Msg::ConfirmSuccess)}>
                    {"확인"}
                </button>
            </div>
        </TopSheet>
    }
}
