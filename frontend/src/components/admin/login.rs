//! Admin login page.
//!
//! A successful login does a full page load of `/admin/dashboard`, so the
//! server-side allow-list gate decides where the browser ends up. That gate
//! sends rejected accounts back here with `?error=unauthorized`.

use crate::api;
use crate::components::helpers::{hard_navigate, location_search};
use web_sys::{HtmlInputElement, UrlSearchParams};
use yew::platform::spawn_local;
use yew::prelude::*;

const UNAUTHORIZED_MESSAGE: &str = "어드민 권한이 없습니다.";

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    Submit,
    Failed(String),
}

pub struct AdminLogin {
    email: String,
    password: String,
    error: Option<String>,
    loading: bool,
}

fn redirected_as_unauthorized() -> bool {
    UrlSearchParams::new_with_str(&location_search())
        .ok()
        .and_then(|p| p.get("error"))
        .is_some_and(|e| e == "unauthorized")
}

impl Component for AdminLogin {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            error: redirected_as_unauthorized().then(|| UNAUTHORIZED_MESSAGE.to_string()),
            loading: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(email) => self.email = email,
            Msg::SetPassword(password) => self.password = password,
            Msg::Submit => {
                if self.loading {
                    return false;
                }
                self.error = None;
                self.loading = true;

                let link = ctx.link().clone();
                let (email, password) = (self.email.clone(), self.password.clone());
                spawn_local(async move {
                    match api::login(email, password).await {
                        Ok(_) => hard_navigate("/admin/dashboard"),
                        Err(failure) => link.send_message(Msg::Failed(failure.message)),
                    }
                });
            }
            Msg::Failed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="admin-page admin-center">
                <div class="admin-card">
                    <div class="admin-card-header">
                        <h1>{"어드민 로그인"}</h1>
                        <p>{"관리자 계정으로 로그인하세요"}</p>
                    </div>

                    <form {onsubmit}>
                        {
                            if let Some(error) = &self.error {
                                html! { <div class="admin-error">{ error.clone() }</div> }
                            } else {
                                html! {}
                            }
                        }
                        <div class="field">
                            <label for="email">{"이메일"}</label>
                            <input
                                id="email"
                                type="email"
                                required=true
                                placeholder="admin@example.com"
                                value={self.email.clone()}
                                oninput={link.callback(|e: InputEvent| {
                                    Msg::SetEmail(e.target_unchecked_into::<HtmlInputElement>().value())
                                })}
                            />
                        </div>
                        <div class="field">
                            <label for="password">{"비밀번호"}</label>
                            <input
                                id="password"
                                type="password"
                                required=true
                                placeholder="••••••••"
                                value={self.password.clone()}
                                oninput={link.callback(|e: InputEvent| {
                                    Msg::SetPassword(e.target_unchecked_into::<HtmlInputElement>().value())
                                })}
                            />
                        </div>
                        <button type="submit" class="primary-btn" disabled={self.loading}>
                            { if self.loading { "로그인 중..." } else { "로그인" } }
                        </button>
                    </form>
                </div>
            </div>
        }
    }
}
