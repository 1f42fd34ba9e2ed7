//! Consultation form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic and view rendering.
//!
//! The field rules and the submission phases come from
//! `common::form::ConsultationForm`; this component only adds the network
//! calls and the DOM.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::ConsultationFormComponent;

impl Component for ConsultationFormComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ConsultationFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
