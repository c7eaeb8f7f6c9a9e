use std::cell::RefCell;
use std::rc::Rc;

use gloo_console::log;
use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::{self, ContactSubmission, SubmitPlan, SubmitStatus};
use crate::navigation::Section;

const ACK_DISMISS_MS: u32 = 6_000;

/// `current` mirrors `status` outside the render cycle; timers and futures
/// read it instead of the handle's render-time snapshot.
#[derive(Clone)]
struct AckDisplay {
    status: UseStateHandle<SubmitStatus>,
    current: Rc<RefCell<SubmitStatus>>,
    last_seq: Rc<RefCell<u32>>,
    timer: Rc<RefCell<Option<Timeout>>>,
}

impl AckDisplay {
    fn set(&self, next: SubmitStatus) {
        *self.current.borrow_mut() = next.clone();
        self.status.set(next);
    }

    /// Replace whatever is shown. Any armed timer is dropped, which cancels it.
    fn show(&self, next: SubmitStatus) {
        self.timer.borrow_mut().take();
        if let SubmitStatus::Done { seq, .. } = &next {
            let armed_seq = *seq;
            *self.last_seq.borrow_mut() = armed_seq;
            let status = self.status.clone();
            let current = self.current.clone();
            *self.timer.borrow_mut() = Some(Timeout::new(ACK_DISMISS_MS, move || {
                let expired = current.borrow().dismissable_by(armed_seq);
                if expired {
                    *current.borrow_mut() = SubmitStatus::Idle;
                    status.set(SubmitStatus::Idle);
                }
            }));
        }
        self.set(next);
    }

    fn dismiss(&self) {
        self.timer.borrow_mut().take();
        let pending = self.current.borrow().is_pending();
        if !pending {
            self.set(SubmitStatus::Idle);
        }
    }

    fn current(&self) -> SubmitStatus {
        self.current.borrow().clone()
    }

    fn last_seq(&self) -> u32 {
        *self.last_seq.borrow()
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(SubmitStatus::default);
    let current = use_mut_ref(SubmitStatus::default);
    let last_seq = use_mut_ref(|| 0u32);
    let timer = use_mut_ref(|| None::<Timeout>);

    let display = AckDisplay {
        status: status.clone(),
        current,
        last_seq,
        timer,
    };

    let clear_fields = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        Callback::from(move |_: ()| {
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let display = display.clone();
        let clear_fields = clear_fields.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submission = ContactSubmission {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            };
            let policy = config::ack_policy();

            match display.current().plan(&submission, policy, display.last_seq()) {
                SubmitPlan::Ignore => {
                    debug!("contact form submit ignored, previous submission still pending");
                }
                SubmitPlan::Reject(next) => {
                    warn!("contact form failed validation");
                    display.show(next);
                }
                SubmitPlan::Forward(next) => {
                    let acknowledged = next.acknowledgement().map_or(false, |ack| ack.is_success());
                    display.show(next.clone());
                    if acknowledged {
                        clear_fields.emit(());
                    }

                    let display = display.clone();
                    let clear_fields = clear_fields.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let result = contact::forward(&submission).await;
                        match &result {
                            Ok(()) => info!("contact message delivered"),
                            Err(e) => {
                                log!("Contact message failed:", e.to_string());
                                warn!("contact message not delivered: {}", e);
                            }
                        }
                        if let Some(settled) = next.settle(&result, policy, display.last_seq()) {
                            let delivered = settled.acknowledgement().map_or(false, |ack| ack.is_success());
                            display.show(settled);
                            if delivered {
                                clear_fields.emit(());
                            }
                        }
                    });
                }
            }
        })
    };

    let on_dismiss = {
        let display = display.clone();
        Callback::from(move |_: MouseEvent| display.dismiss())
    };

    let pending = status.is_pending();

    html! {
        <div class="contact-form-wrapper">
            {
                if let SubmitStatus::Done { ack, seq } = &*status {
                    html! {
                        <div
                            key={*seq}
                            class={classes!("ack", if ack.is_success() { "ack-success" } else { "ack-error" })}
                            role="status"
                        >
                            <span>{ack.message()}</span>
                            <button class="ack-dismiss" aria-label="Dismiss" onclick={on_dismiss}>{"✕"}</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <form class="contact-form" {onsubmit}>
                <label for="name">{"Name"}</label>
                <input
                    type="text"
                    id="name"
                    name="name"
                    required=true
                    placeholder="Your name"
                    value={(*name).clone()}
                    oninput={let name = name.clone(); move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        name.set(input.value());
                    }}
                />

                <label for="email">{"Email"}</label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    required=true
                    placeholder="your@email.com"
                    value={(*email).clone()}
                    oninput={let email = email.clone(); move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        email.set(input.value());
                    }}
                />

                <label for="message">{"Message"}</label>
                <textarea
                    id="message"
                    name="message"
                    required=true
                    rows="4"
                    placeholder="Tell us about your debt management needs..."
                    value={(*message).clone()}
                    oninput={let message = message.clone(); move |e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        message.set(input.value());
                    }}
                />

                <button type="submit" class="contact-submit" disabled={pending}>
                    { if pending { "Sending..." } else { "Send Message" } }
                </button>
            </form>
        </div>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    html! {
        <section id={Section::Contact.id()} class="contact">
            <div class="container contact-container">
                <div class="contact-heading">
                    <h2 class="section-title">{"Let's Talk"}</h2>
                    <p>{"Ready to get started? We'd love to hear from you."}</p>
                </div>

                <div class="contact-grid">
                    <div class="contact-info">
                        <h3>{"Get in Touch"}</h3>
                        <p>
                            {"Have questions about Tuabi? Want to learn more about how we can help you manage your debts? Send us a message and we'll get back to you as soon as possible."}
                        </p>
                        <div class="contact-line">
                            <span class="contact-icon">{"✉"}</span>
                            <span>{config::CONTACT_EMAIL}</span>
                        </div>
                        <div class="contact-line">
                            <span class="contact-icon">{"☎"}</span>
                            <span>{config::CONTACT_PHONE_DISPLAY}</span>
                        </div>
                    </div>

                    <ContactForm />
                </div>
            </div>

            <style>
                {r#"
                    .contact {
                        padding: 5rem 0;
                        background: #ffffff;
                    }

                    .contact-container {
                        max-width: 56rem;
                    }

                    .contact-heading {
                        text-align: center;
                        margin-bottom: 4rem;
                    }

                    .contact-heading .section-title {
                        margin-bottom: 1rem;
                    }

                    .contact-heading p {
                        font-size: 1.25rem;
                        color: #4b5563;
                    }

                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                    }

                    .contact-info h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }

                    .contact-info p {
                        color: #4b5563;
                        line-height: 1.6;
                        margin-bottom: 2rem;
                    }

                    .contact-line {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        color: #4b5563;
                        margin-bottom: 1rem;
                    }

                    .contact-icon { color: #1E3A8A; }

                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }

                    .contact-form label {
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #374151;
                        margin-top: 1rem;
                    }

                    .contact-form input,
                    .contact-form textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border: 1px solid #d1d5db;
                        border-radius: 0.5rem;
                        font: inherit;
                        box-sizing: border-box;
                    }

                    .contact-form textarea { resize: none; }

                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        outline: 2px solid #1E3A8A;
                        border-color: transparent;
                    }

                    .contact-submit {
                        margin-top: 1.5rem;
                        background: #1E3A8A;
                        color: #fff;
                        border: none;
                        border-radius: 0.5rem;
                        padding: 0.75rem 1.5rem;
                        font-size: 1.125rem;
                        cursor: pointer;
                        transition: background 0.2s;
                    }

                    .contact-submit:hover { background: #1E40AF; }

                    .contact-submit:disabled {
                        opacity: 0.6;
                        cursor: wait;
                    }

                    .ack {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                        margin-bottom: 1rem;
                        animation: fadeUp 0.3s ease-out;
                    }

                    .ack-success {
                        background: #f0fdf4;
                        border: 1px solid #bbf7d0;
                        color: #166534;
                    }

                    .ack-error {
                        background: #fef2f2;
                        border: 1px solid #fecaca;
                        color: #991b1b;
                    }

                    .ack-dismiss {
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: inherit;
                    }

                    @media (max-width: 1024px) {
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
