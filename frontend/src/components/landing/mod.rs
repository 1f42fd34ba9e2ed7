//! Landing page: header, hero image, the consultation form section and the
//! footer, plus the floating call-to-action.
//!
//! The floating button follows the scroll position. On every scroll event the
//! page samples its layout into `ScrollMetrics` and lets
//! `common::display::cta_visibility` decide visibility and colour.

use crate::components::consultation_form::ConsultationFormComponent;
use crate::components::footer::Footer;
use common::display::{cta_visibility, CtaColor, CtaState, ScrollMetrics};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

const CTA_LABEL: &str = "면접 지원하기 >";

pub enum Msg {
    Scrolled,
    ScrollToForm,
}

pub struct Landing {
    main_ref: NodeRef,
    form_ref: NodeRef,
    footer_ref: NodeRef,
    cta: CtaState,
    scroll_listener: Option<Closure<dyn Fn()>>,
}

impl Landing {
    fn offsets(node: &NodeRef) -> Option<(f64, f64)> {
        node.cast::<HtmlElement>()
            .map(|el| (f64::from(el.offset_top()), f64::from(el.offset_height())))
    }

    fn measure(&self) -> Option<ScrollMetrics> {
        let window = web_sys::window()?;
        let (main_top, main_height) = Self::offsets(&self.main_ref)?;
        let (form_top, _) = Self::offsets(&self.form_ref)?;
        let (footer_top, _) = Self::offsets(&self.footer_ref)?;

        Some(ScrollMetrics {
            scroll_y: window.scroll_y().ok()?,
            viewport_height: window.inner_height().ok()?.as_f64()?,
            main_top,
            main_height,
            form_top,
            footer_top,
        })
    }
}

impl Component for Landing {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            main_ref: NodeRef::default(),
            form_ref: NodeRef::default(),
            footer_ref: NodeRef::default(),
            cta: CtaState {
                visible: true,
                color: CtaColor::Black,
            },
            scroll_listener: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Scrolled => {
                let Some(metrics) = self.measure() else {
                    return false;
                };
                let next = cta_visibility(&metrics);
                let changed = next != self.cta;
                self.cta = next;
                changed
            }
            Msg::ScrollToForm => {
                if let Some(section) = self.form_ref.cast::<HtmlElement>() {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    section.scroll_into_view_with_scroll_into_view_options(&options);
                }
                false
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };

        let link = ctx.link().clone();
        let listener = Closure::<dyn Fn()>::new(move || link.send_message(Msg::Scrolled));
        if window
            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            .is_ok()
        {
            self.scroll_listener = Some(listener);
        }
        ctx.link().send_message(Msg::Scrolled);
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(listener)) = (web_sys::window(), self.scroll_listener.take()) {
            window
                .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
                .ok();
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let cta_class = match self.cta.color {
            CtaColor::Black => "floating-cta cta-black",
            CtaColor::Blue => "floating-cta cta-blue",
        };

        html! {
            <div class="landing-page">
                <header class="site-header">
                    <div class="container">
                        <img src="/logo2.png" alt="logo" class="logo" />
                    </div>
                </header>

                <main ref={self.main_ref.clone()} class="hero">
                    <img src="/main__desktop.png" alt="강남지점 채용공고" class="hero-image" />
                </main>

                <section ref={self.form_ref.clone()} class="form-section">
                    <div class="form-grid">
                        <div class="form-copy">
                            <p class="form-copy-lead">{"적성에 맞을지 고민되시나요?"}</p>
                            <p class="form-copy-title">{"이야기 나눠보고 선택해보세요."}</p>
                            <p class="form-copy-lead">
                                <span class="highlight">{"1일 안"}</span>{"에 연락드릴게요."}
                            </p>
                        </div>
                        <div>
                            <ConsultationFormComponent />
                        </div>
                    </div>
                </section>

                <Footer node_ref={self.footer_ref.clone()} />

                {
                    if self.cta.visible {
                        html! {
                            <button
                                class={cta_class}
                                onclick={ctx.link().callback(|_| Msg::ScrollToForm)}
                            >
                                { CTA_LABEL }
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}
