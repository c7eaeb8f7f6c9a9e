use log::{debug, warn};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::{
    about::About,
    contact_form::ContactSection,
    footer::Footer,
    header::Header,
    hero::Hero,
    services::Services,
};
use crate::config;
use crate::dom::{self, DomLayout};
use crate::navigation::{self, header_opacity, NavAction, NavigationState, ScrollSnapshot};

fn snapshot() -> Option<ScrollSnapshot> {
    let layout = DomLayout::current()?;
    Some(ScrollSnapshot::measure(&layout, dom::scroll_y()))
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let nav = use_reducer(NavigationState::default);
    let opacity = use_state_eq(|| header_opacity(0.0));

    // Scroll-spy: registered on mount, removed on unmount
    {
        let dispatcher = nav.dispatcher();
        let opacity = opacity.setter();
        use_effect_with_deps(
            move |_| {
                let on_scroll = move || {
                    if let Some(snapshot) = snapshot() {
                        opacity.set(header_opacity(snapshot.scroll_y));
                        dispatcher.dispatch(NavAction::Scrolled(snapshot));
                    }
                };
                // Initial check, in case the browser restored a scroll position
                on_scroll();

                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(on_scroll);
                    match window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        Ok(()) => Box::new(move || {
                            if let Err(e) = window.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            ) {
                                warn!("failed to remove scroll listener: {:?}", e);
                            }
                        }),
                        Err(e) => {
                            warn!("failed to register scroll listener: {:?}", e);
                            Box::new(|| ())
                        }
                    }
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let on_navigate = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |id: &'static str| {
            debug!("navigate to #{}", id);
            if let Some(layout) = DomLayout::current() {
                navigation::navigate(&layout, id);
            }
            dispatcher.dispatch(NavAction::Navigated);
        })
    };

    let on_toggle_menu = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(NavAction::ToggleMenu))
    };

    html! {
        <div class="landing-page">
            <Header
                active={nav.active}
                menu_open={nav.menu_open}
                opacity={*opacity}
                on_navigate={on_navigate.clone()}
                on_toggle_menu={on_toggle_menu}
            />
            <Hero on_navigate={on_navigate.clone()} />
            <About />
            <Services />
            <ContactSection />
            <Footer on_navigate={on_navigate} />

            <a
                href={config::WHATSAPP_URL}
                target="_blank"
                rel="noopener noreferrer"
                class="whatsapp-float"
                aria-label="Chat with us on WhatsApp"
            >
                {"💬"}
            </a>

            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: #ffffff;
                        color: #111827;
                        font-family: 'Roboto', -apple-system, BlinkMacSystemFont, sans-serif;
                    }

                    .landing-page h1,
                    .landing-page h2,
                    .landing-page h3,
                    .landing-page h4 {
                        font-family: 'Poppins', sans-serif;
                    }

                    .container {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    .section-title {
                        text-align: center;
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 4rem;
                        animation: fadeUp 0.8s ease-out both;
                    }

                    .card-icon {
                        font-size: 2rem;
                        font-weight: 700;
                    }

                    .card-icon.primary { color: #1E3A8A; }
                    .card-icon.accent { color: #3B82F6; }

                    @keyframes fadeUp {
                        from { opacity: 0; transform: translateY(40px); }
                        to { opacity: 1; transform: translateY(0); }
                    }

                    .whatsapp-float {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 40;
                        background: #22c55e;
                        color: #fff;
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        text-decoration: none;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
                        animation: popIn 0.5s 1s both;
                        transition: transform 0.2s, background 0.2s;
                    }

                    .whatsapp-float:hover {
                        transform: scale(1.1);
                        background: #16a34a;
                    }

                    @keyframes popIn {
                        from { transform: scale(0); }
                        to { transform: scale(1); }
                    }
                "#}
            </style>
        </div>
    }
}
