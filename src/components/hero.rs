use yew::prelude::*;

use crate::config;
use crate::content::RECENT_DEBTS;
use crate::navigation::Section;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let contact_us = props.on_navigate.reform(|_: MouseEvent| Section::Contact.id());
    let scroll_down = props.on_navigate.reform(|_: MouseEvent| Section::About.id());

    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="hero-background"></div>
            <div class="hero-blobs">
                <div class="blob blob-one"></div>
                <div class="blob blob-two"></div>
            </div>

            <div class="container hero-grid">
                <div class="hero-copy">
                    <h1>
                        {"Track Debts in Cedis."}
                        <span>{"Get Paid Faster."}</span>
                    </h1>
                    <p>
                        {"Tuabi helps you keep track of who owes you, stay organized, and manage repayments, all in one place."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={contact_us}>{"Contact Us"}</button>
                        <a
                            href={config::WHATSAPP_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hero-whatsapp"
                        >
                            <span class="whatsapp-glyph" aria-hidden="true">{"💬"}</span>
                            {"WhatsApp Us"}
                        </a>
                    </div>
                </div>

                <div class="hero-visual">
                    <div class="debt-card" role="img" aria-label="Recent debts in the Tuabi app">
                        <div class="debt-card-header">
                            <h3>{"Recent Debts"}</h3>
                            <span class="live-dot"></span>
                        </div>
                        {
                            RECENT_DEBTS.iter().map(|debt| html! {
                                <div key={debt.debtor} class={classes!("debt-row", debt.status.class())}>
                                    <div>
                                        <p class="debtor">{debt.debtor}</p>
                                        <p class="note">{debt.note}</p>
                                    </div>
                                    <div class="amount">
                                        <p class="value">{format!("₵{}", debt.amount)}</p>
                                        <p class="status">{debt.status.label()}</p>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="cedi-badge">{"₵"}</div>
                </div>
            </div>

            <button class="scroll-indicator" aria-label="Scroll to about" onclick={scroll_down}>
                {"⌄"}
            </button>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        padding-top: 4rem;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                    }

                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom right, #eff6ff, #e0e7ff);
                    }

                    .hero-blobs {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                    }

                    .blob {
                        position: absolute;
                        border-radius: 50%;
                    }

                    .blob-one {
                        top: 5rem;
                        right: 5rem;
                        width: 8rem;
                        height: 8rem;
                        background: rgba(59, 130, 246, 0.1);
                        animation: driftOne 20s linear infinite;
                    }

                    .blob-two {
                        bottom: 5rem;
                        left: 5rem;
                        width: 6rem;
                        height: 6rem;
                        background: rgba(30, 58, 138, 0.1);
                        animation: driftTwo 25s linear infinite;
                    }

                    @keyframes driftOne {
                        0% { transform: translate(0, 0) rotate(0deg); }
                        50% { transform: translate(100px, -50px) rotate(180deg); }
                        100% { transform: translate(0, 0) rotate(360deg); }
                    }

                    @keyframes driftTwo {
                        0% { transform: translate(0, 0) rotate(0deg); }
                        50% { transform: translate(-80px, 60px) rotate(-180deg); }
                        100% { transform: translate(0, 0) rotate(-360deg); }
                    }

                    .hero-grid {
                        position: relative;
                        z-index: 10;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }

                    .hero-copy {
                        animation: slideFromLeft 0.8s ease-out both;
                    }

                    .hero-copy h1 {
                        font-size: 3.75rem;
                        font-weight: 700;
                        color: #111827;
                        margin-bottom: 1.5rem;
                    }

                    .hero-copy h1 span {
                        display: block;
                        color: #1E3A8A;
                    }

                    .hero-copy p {
                        font-size: 1.25rem;
                        color: #4b5563;
                        line-height: 1.6;
                        margin-bottom: 2rem;
                    }

                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }

                    .hero-cta {
                        background: #1E3A8A;
                        color: #fff;
                        border: none;
                        border-radius: 0.5rem;
                        padding: 0.75rem 2rem;
                        font-size: 1.125rem;
                        cursor: pointer;
                        transition: background 0.2s;
                    }

                    .hero-cta:hover { background: #1E40AF; }

                    .hero-whatsapp {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        border: 1px solid #22c55e;
                        border-radius: 0.5rem;
                        padding: 0.75rem 2rem;
                        color: #111827;
                        font-size: 1.125rem;
                        text-decoration: none;
                        transition: background 0.2s;
                    }

                    .hero-whatsapp:hover { background: #e0e7ff; }

                    .whatsapp-glyph {
                        font-size: 1.75rem;
                        color: #22c55e;
                    }

                    .hero-visual {
                        position: relative;
                        animation: slideFromRight 0.8s 0.2s ease-out both;
                    }

                    .debt-card {
                        background: #ffffff;
                        border: 1px solid #e5e7eb;
                        border-radius: 1rem;
                        padding: 1.5rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                    }

                    .debt-card-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 1.5rem;
                    }

                    .debt-card-header h3 {
                        margin: 0;
                        font-size: 1.125rem;
                        font-weight: 600;
                    }

                    .live-dot {
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 50%;
                        background: #22c55e;
                    }

                    .debt-row {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        margin-bottom: 1rem;
                        border: 1px solid;
                    }

                    .debt-row p { margin: 0; }
                    .debt-row .debtor { font-weight: 500; }
                    .debt-row .note { font-size: 0.875rem; color: #4b5563; }
                    .debt-row .amount { text-align: right; }
                    .debt-row .value { font-weight: 700; }
                    .debt-row .status { font-size: 0.75rem; }

                    .debt-row.paid { background: #f0fdf4; border-color: #bbf7d0; color: #16a34a; }
                    .debt-row.pending { background: #fefce8; border-color: #fef08a; color: #ca8a04; }
                    .debt-row.due { background: #eff6ff; border-color: #bfdbfe; color: #2563eb; }
                    .debt-row .debtor { color: #111827; }

                    .cedi-badge {
                        position: absolute;
                        top: -1rem;
                        right: -1rem;
                        background: #1E3A8A;
                        color: #fff;
                        padding: 0.75rem;
                        border-radius: 50%;
                        font-size: 1.5rem;
                        font-weight: 700;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
                        animation: bob 2s ease-in-out infinite;
                    }

                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        background: none;
                        border: none;
                        font-size: 2rem;
                        color: #1E3A8A;
                        cursor: pointer;
                        animation: bobDown 2s ease-in-out infinite;
                    }

                    .scroll-indicator:hover { color: #3B82F6; }

                    @keyframes bob {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-10px); }
                    }

                    @keyframes bobDown {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, 10px); }
                    }

                    @keyframes slideFromLeft {
                        from { opacity: 0; transform: translateX(-50px); }
                        to { opacity: 1; transform: translateX(0); }
                    }

                    @keyframes slideFromRight {
                        from { opacity: 0; transform: translateX(50px); }
                        to { opacity: 1; transform: translateX(0); }
                    }

                    @media (max-width: 1024px) {
                        .hero-grid {
                            grid-template-columns: 1fr;
                            padding-top: 2.5rem;
                        }
                        .hero-copy h1 {
                            font-size: 2.25rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
