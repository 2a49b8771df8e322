use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::entrance::Entrance;
use crate::config::COMPANY;
use crate::dom::scroll_to_top;

#[function_component(Contact)]
pub fn contact() -> Html {
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="page contact-page">
            <section class="page-hero">
                <Entrance>
                    <h1>{"Let's "}<span class="highlight">{"Talk"}</span></h1>
                    <p class="section-lead">{"Tell us what you are building and we will get back to you."}</p>
                </Entrance>
            </section>

            <section class="section contact-layout">
                <div class="contact-side">
                    <Entrance class="glass-card contact-info">
                        <h3>{"Contact Information"}</h3>
                        <p><span class="label">{"Email"}</span><a href={format!("mailto:{}", COMPANY.email)}>{ COMPANY.email }</a></p>
                        <p><span class="label">{"Phone"}</span><a href={format!("tel:{}", COMPANY.phone.replace(' ', ""))}>{ COMPANY.phone }</a></p>
                        <p><span class="label">{"Office"}</span>{ COMPANY.location }</p>
                    </Entrance>
                    <Entrance order={1} class="glass-card">
                        <h3>{"Quick Response"}</h3>
                        <p>{"We answer every enquiry within 24 hours on working days."}</p>
                    </Entrance>
                    <Entrance order={2} class="glass-card">
                        <h3>{"Prefer to talk?"}</h3>
                        <p>{"Schedule a free 30 minute call and we will walk through your idea together."}</p>
                        <a class="ghost-button" href={format!("mailto:{}?subject=Schedule%20a%20call", COMPANY.email)}>
                            {"Schedule a Call"}
                        </a>
                    </Entrance>
                </div>
                <Entrance order={1} class="glass-card contact-main">
                    <h3>{"Send us a message"}</h3>
                    <ContactForm />
                </Entrance>
            </section>

            <style>
                {r#"
                .contact-layout {
                    display: grid;
                    grid-template-columns: 1fr 1.5fr;
                    gap: 2rem;
                    align-items: start;
                }
                .contact-side {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .contact-info p {
                    display: flex;
                    flex-direction: column;
                    gap: 0.2rem;
                }
                .contact-info .label {
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.08rem;
                    color: var(--text-muted);
                }
                .contact-info a {
                    color: var(--accent);
                    text-decoration: none;
                }
                @media (max-width: 900px) {
                    .contact-layout {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
