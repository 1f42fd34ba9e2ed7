use crate::components::admin::dashboard::AdminDashboard;
use crate::components::admin::login::AdminLogin;
use crate::components::landing::Landing;
use yew::{html, Component, Context, Html};
use yew_router::prelude::*;

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/admin/login")]
    AdminLogin,
    #[at("/admin/dashboard")]
    AdminDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Landing | Route::NotFound => html! { <Landing /> },
        Route::AdminLogin => html! { <AdminLogin /> },
        Route::AdminDashboard => html! { <AdminDashboard /> },
    }
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        }
    }
}
