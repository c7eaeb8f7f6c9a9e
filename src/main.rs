use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod contact;
mod content;
mod dom;
mod navigation;

mod pages {
    pub mod landing;
    pub mod not_found;
}

mod components {
    pub mod about;
    pub mod cards;
    pub mod contact_form;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod services;
}

use pages::{
    landing::Landing,
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
