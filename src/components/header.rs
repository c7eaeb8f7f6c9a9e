use yew::prelude::*;

use crate::config;
use crate::navigation::Section;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active: Section,
    pub menu_open: bool,
    pub opacity: f64,
    pub on_navigate: Callback<&'static str>,
    pub on_toggle_menu: Callback<()>,
}

fn nav_buttons(active: Section, on_navigate: &Callback<&'static str>, extra_class: &'static str) -> Html {
    Section::ALL
        .into_iter()
        .map(|section| {
            let onclick = on_navigate.reform(move |_: MouseEvent| section.id());
            html! {
                <button
                    key={section.id()}
                    class={classes!("nav-link", extra_class, (section == active).then(|| "active"))}
                    {onclick}
                >
                    {section.label()}
                </button>
            }
        })
        .collect()
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps {
        active,
        menu_open,
        opacity,
        on_navigate,
        on_toggle_menu,
    } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let get_started = on_navigate.reform(|_: MouseEvent| Section::Contact.id());

    html! {
        <header class="site-header" style={format!("opacity: {:.3};", opacity)}>
            <div class="container header-bar">
                <h1 class="brand">{config::BRAND}</h1>

                <nav class="desktop-nav">
                    { nav_buttons(*active, on_navigate, "") }
                </nav>

                <button class="header-cta desktop-only" onclick={get_started.clone()}>
                    {"Get Started"}
                </button>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="container mobile-menu">
                            <nav>
                                { nav_buttons(*active, on_navigate, "mobile") }
                                <button class="header-cta" onclick={get_started}>
                                    {"Get Started"}
                                </button>
                            </nav>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(4px);
                        border-bottom: 1px solid #f3f4f6;
                    }

                    .header-bar {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        height: 4rem;
                    }

                    .brand {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #1E3A8A;
                        margin: 0;
                    }

                    .desktop-nav {
                        display: flex;
                        gap: 2rem;
                    }

                    .nav-link {
                        background: none;
                        border: none;
                        cursor: pointer;
                        font-family: 'Poppins', sans-serif;
                        font-weight: 500;
                        color: #4b5563;
                        transition: color 0.2s;
                        text-align: left;
                    }

                    .nav-link:hover { color: #3B82F6; }
                    .nav-link.active { color: #1E3A8A; }

                    .header-cta {
                        background: #1E3A8A;
                        color: #fff;
                        border: none;
                        border-radius: 0.5rem;
                        padding: 0.5rem 1.5rem;
                        cursor: pointer;
                        font-family: 'Poppins', sans-serif;
                        font-weight: 500;
                        transition: background 0.2s;
                        width: fit-content;
                    }

                    .header-cta:hover { background: #1E40AF; }

                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        font-size: 1.5rem;
                        color: #4b5563;
                        cursor: pointer;
                    }

                    .mobile-menu {
                        padding-top: 1rem;
                        padding-bottom: 1rem;
                        border-top: 1px solid #f3f4f6;
                        animation: slideDown 0.3s ease-out;
                    }

                    .mobile-menu nav {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    @keyframes slideDown {
                        from { opacity: 0; transform: translateY(-20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }

                    @media (max-width: 768px) {
                        .desktop-nav,
                        .desktop-only {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                    }

                    @media (min-width: 769px) {
                        .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
        </header>
    }
}
