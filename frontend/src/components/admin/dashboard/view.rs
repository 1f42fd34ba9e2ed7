use super::messages::Msg;
use super::state::AdminDashboard;
use common::display::{format_admin_timestamp, source_display, summary_text, SourceBadge};
use common::model::application::Application;
use num_format::{Locale, ToFormattedString};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

const COLUMNS: [&str; 8] = [
    "전달 상태",
    "이름",
    "연락처",
    "지역",
    "유입 경로",
    "개인정보수집 동의",
    "신청일시",
    "관리",
];

pub fn view(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let link = ctx.link();

    html! {
        <div class="admin-page">
            <div class="container">
                <div class="admin-toolbar">
                    <h1>{"상담 신청 관리"}</h1>
                    <button class="danger-btn" onclick={link.callback(|_| Msg::Logout)}>
                        {"로그아웃"}
                    </button>
                </div>

                {
                    if let Some(error) = &component.error {
                        html! { <div class="admin-error">{ error.clone() }</div> }
                    } else {
                        html! {}
                    }
                }

                { build_body(component, link) }
            </div>
        </div>
    }
}

fn build_body(component: &AdminDashboard, link: &Scope<AdminDashboard>) -> Html {
    if component.loading && component.applications.is_empty() {
        return html! {
            <div class="admin-empty">
                <div class="spinner"></div>
                <p>{"로딩 중..."}</p>
            </div>
        };
    }
    if component.applications.is_empty() {
        return html! {
            <div class="admin-empty">
                <p>{"신청 내역이 없습니다."}</p>
            </div>
        };
    }

    let rows = component
        .applications
        .iter()
        .map(|app| build_row(app, component.pending.contains(&app.id), link))
        .collect::<Html>();
    let total = component.applications.len().to_formatted_string(&Locale::ko);

    html! {
        <div class="admin-card wide">
            <div class="table-scroll">
                <table class="admin-table">
                    <thead>
                        <tr>
                            { for COLUMNS.iter().map(|c| html! { <th>{ *c }</th> }) }
                        </tr>
                    </thead>
                    <tbody>{ rows }</tbody>
                </table>
            </div>
            <div class="admin-table-footer">
                <p>{ format!("총 {total}건의 신청이 있습니다.") }</p>
            </div>
        </div>
    }
}

fn build_row(app: &Application, busy: bool, link: &Scope<AdminDashboard>) -> Html {
    let delivered = app.is_delivered();
    let source = source_display(app);
    let badge = SourceBadge::for_label(&source).css_class();

    let toggle = {
        let id = app.id.clone();
        link.callback(move |e: Event| Msg::ToggleDelivered {
            id: id.clone(),
            delivered: e.target_unchecked_into::<HtmlInputElement>().checked(),
        })
    };
    let copy = {
        let summary = summary_text(app);
        link.callback(move |_| Msg::Copy(summary.clone()))
    };
    let delete = {
        let (id, name) = (app.id.clone(), app.name.clone());
        link.callback(move |_| Msg::Delete {
            id: id.clone(),
            name: name.clone(),
        })
    };

    html! {
        <tr key={app.id.clone()} class={classes!(delivered.then_some("delivered"))}>
            <td>
                <label class="choice">
                    <input type="checkbox" checked={delivered} disabled={busy} onchange={toggle} />
                    <span>{ if delivered { "전달완료" } else { "전달대기" } }</span>
                </label>
            </td>
            <td class="strong">{ app.name.clone() }</td>
            <td>{ app.contact.clone() }</td>
            <td>{ app.region.label() }</td>
            <td><span class={badge}>{ source }</span></td>
            <td>
                if app.privacy_consent {
                    <span class="badge badge-green">{"동의"}</span>
                } else {
                    <span class="badge badge-red">{"비동의"}</span>
                }
            </td>
            <td class="muted">{ format_admin_timestamp(&app.created_at) }</td>
            <td>
                <div class="row-actions">
                    <button class="small-btn" title="지원자 정보 복사" onclick={copy}>{"복사"}</button>
                    <button class="small-btn danger" disabled={busy} onclick={delete}>{"삭제"}</button>
                </div>
            </td>
        </tr>
    }
}
