//! Admin dashboard: lists every lead and lets staff mark, copy and delete
//! them.
//!
//! The server already refuses to serve this page without an authorized
//! session. The first render still asks `/api/auth/me`, so a session that
//! expired while the tab was open lands back on the login page.

use gloo_console::log;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

use crate::api;
pub use messages::Msg;
pub use state::AdminDashboard;

impl Component for AdminDashboard {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        AdminDashboard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.checked {
            self.checked = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::current_session().await {
                    Ok(session) => {
                        log!("Signed in as", session.email);
                        link.send_message(Msg::Load);
                    }
                    Err(failure) => {
                        if !update::redirect_on_auth_failure(&failure) {
                            link.send_message(Msg::LoadFailed(failure));
                        }
                    }
                }
            });
        }
    }
}
