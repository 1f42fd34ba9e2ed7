use yew::{html, Component, Context, Html, NodeRef, Properties};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    /// Lets the landing page measure where the footer starts.
    pub node_ref: NodeRef,
}

pub struct Footer;

impl Component for Footer {
    type Message = ();
    type Properties = FooterProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Footer
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <footer class="site-footer" ref={ctx.props().node_ref.clone()}>
                <div class="container">
                    <div>
                        <h3 class="footer-company">{"(주)한평생교육그룹"}</h3>
                        <p class="footer-muted">{"서울시 도봉구 창동 마들로13길 61 씨드큐브 905호"}</p>
                    </div>
                    <div class="footer-muted footer-registry">
                        <p>{"사업자등록번호 : 227-88-03196 | "}</p>
                        <p>{"직업평생교육시설신고 (제 원격20-6호) | "}</p>
                        <p>{"대표: 양병웅"}</p>
                    </div>
                    <div class="footer-copyright">
                        <p class="footer-muted">{"©(주)한평생교육그룹 All Rights Reserved."}</p>
                    </div>
                </div>
            </footer>
        }
    }
}
