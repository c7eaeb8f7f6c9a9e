use yew::prelude::*;

use crate::components::cards::CardGrid;
use crate::content::SERVICES;
use crate::navigation::Section;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id={Section::Services.id()} class="services">
            <div class="container">
                <h2 class="section-title">{"What You Can Do With Tuabi"}</h2>
                <CardGrid cards={&SERVICES[..]} class="service-grid" />
            </div>

            <style>
                {r#"
                    .services {
                        padding: 5rem 0;
                        background: linear-gradient(to bottom right, #eff6ff, #e0e7ff);
                    }

                    .service-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }

                    .service-grid .card {
                        background: #ffffff;
                        padding: 2rem;
                        border-radius: 1rem;
                        text-align: center;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        transition: box-shadow 0.2s;
                        animation: fadeUp 0.6s ease-out both;
                    }

                    .service-grid .card:hover {
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                    }

                    .service-grid .card-icon {
                        font-size: 2.5rem;
                        margin-bottom: 1.5rem;
                    }

                    .service-grid h4 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }

                    .service-grid p {
                        color: #4b5563;
                        line-height: 1.6;
                    }

                    @media (max-width: 1024px) {
                        .service-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (max-width: 640px) {
                        .service-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
