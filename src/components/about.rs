use yew::prelude::*;

use crate::components::cards::CardGrid;
use crate::content::FEATURES;
use crate::navigation::Section;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={Section::About.id()} class="about">
            <div class="container">
                <h2 class="section-title">{"Why Tuabi?"}</h2>

                <div class="about-grid">
                    <div class="about-copy">
                        <h3>{"Managing debts can be stressful."}</h3>
                        <p>
                            {"With Tuabi, you always know who owes you, how much, and when they'll pay, so you can focus on what matters."}
                        </p>
                        <p>
                            {"No more forgotten debts, awkward conversations, or lost receipts. Tuabi keeps everything organized and helps you get paid faster."}
                        </p>
                    </div>

                    <CardGrid cards={&FEATURES[..]} class="feature-grid" />
                </div>
            </div>

            <style>
                {r#"
                    .about {
                        padding: 5rem 0;
                        background: #ffffff;
                    }

                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }

                    .about-copy h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }

                    .about-copy p {
                        font-size: 1.125rem;
                        color: #4b5563;
                        line-height: 1.7;
                        margin-bottom: 1.5rem;
                    }

                    .feature-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                    }

                    .feature-grid .card {
                        background: #f9fafb;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        transition: box-shadow 0.2s;
                        animation: fadeUp 0.6s ease-out both;
                    }

                    .feature-grid .card:hover {
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }

                    .feature-grid h4 {
                        font-size: 1.125rem;
                        font-weight: 600;
                        margin: 1rem 0 0.5rem;
                    }

                    .feature-grid p {
                        color: #4b5563;
                    }

                    @media (max-width: 1024px) {
                        .about-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    @media (max-width: 640px) {
                        .feature-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
