use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::config;
use crate::content::SOCIAL_LINKS;
use crate::navigation::Section;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<&'static str>,
}

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, config::BRAND)
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div>
                    <h3>{config::BRAND}</h3>
                    <p class="muted">{"Track debts in cedis. Get paid faster."}</p>
                </div>

                <div>
                    <h4>{"Quick Links"}</h4>
                    <nav class="footer-links">
                        {
                            Section::ALL.into_iter().map(|section| {
                                let onclick = props.on_navigate.reform(move |_: MouseEvent| section.id());
                                html! {
                                    <button key={section.id()} {onclick}>{section.label()}</button>
                                }
                            }).collect::<Html>()
                        }
                    </nav>
                </div>

                <div>
                    <h4>{"Connect"}</h4>
                    <div class="footer-social">
                        {
                            SOCIAL_LINKS.iter().map(|link| html! {
                                <a
                                    key={link.label}
                                    href={link.href}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label={link.label}
                                >
                                    {link.glyph}
                                </a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>

            <div class="container footer-bottom">
                <p class="muted">{copyright_line(year)}</p>
            </div>

            <style>
                {r#"
                    .site-footer {
                        background: #111827;
                        color: #ffffff;
                        padding: 3rem 0;
                    }

                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    .site-footer h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }

                    .site-footer h4 {
                        font-size: 1.125rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }

                    .site-footer .muted { color: #9ca3af; }

                    .footer-links {
                        display: flex;
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 0.5rem;
                    }

                    .footer-links button {
                        background: none;
                        border: none;
                        padding: 0;
                        color: #9ca3af;
                        cursor: pointer;
                        font: inherit;
                        transition: color 0.2s;
                    }

                    .footer-links button:hover,
                    .footer-social a:hover {
                        color: #ffffff;
                    }

                    .footer-social {
                        display: flex;
                        gap: 1rem;
                    }

                    .footer-social a {
                        color: #9ca3af;
                        font-size: 1.5rem;
                        text-decoration: none;
                        transition: color 0.2s;
                    }

                    .footer-bottom {
                        border-top: 1px solid #1f2937;
                        margin-top: 2rem;
                        padding-top: 2rem;
                        text-align: center;
                    }

                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year_and_brand() {
        assert_eq!(copyright_line(2026), "© 2026 Tuabi. All rights reserved.");
    }
}
