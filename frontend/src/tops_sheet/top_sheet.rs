//! Modal sheet over a dimmed backdrop.
//!
//! The sheet is always mounted; `open` toggles the `show` class on it and
//! locks page scrolling while it is visible.

use uuid::Uuid;
use yew::{html, Component, Context, Html, NodeRef, Properties};

pub struct TopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    pub open: bool,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet-backdrop" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                <div class="top-sheet">
                    { ctx.props().children.clone() }
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let props = ctx.props();
        if props.open {
            open_top_sheet(&props.node_ref);
        } else {
            close_top_sheet(&props.node_ref);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        lock_page_scroll(false);
    }
}

fn lock_page_scroll(locked: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let value = if locked { "hidden" } else { "unset" };
        body.style().set_property("overflow", value).ok();
    }
}

pub fn open_top_sheet(top_sheet_ref: &NodeRef) {
    if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
        top_sheet.class_list().add_1("show").ok();
        lock_page_scroll(true);
    }
}

pub fn close_top_sheet(top_sheet_ref: &NodeRef) {
    if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
        top_sheet.class_list().remove_1("show").ok();
        lock_page_scroll(false);
    }
}
