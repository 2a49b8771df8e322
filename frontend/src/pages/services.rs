use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::entrance::Entrance;
use crate::content::SERVICES;
use crate::dom::scroll_to_top;
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="page services-page">
            <section class="page-hero">
                <Entrance>
                    <h1>{"Our "}<span class="highlight">{"Services"}</span></h1>
                    <p class="section-lead">
                        {"From the first sketch to the last deploy, we cover the whole stack."}
                    </p>
                </Entrance>
            </section>

            <section class="section">
                <div class="card-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <Entrance order={i as u32}>
                            <article class="glass-card service-card" style={format!("--service-accent: {};", service.accent)}>
                                <div class="card-icon">{ service.icon }</div>
                                <h3>{ service.title }</h3>
                                <p>{ service.summary }</p>
                                <div class="service-tools">
                                    { for service.tools.iter().map(|tool| html! {
                                        <span class="tool-chip">{ *tool }</span>
                                    }) }
                                </div>
                                <p class="service-example">{ service.example }</p>
                            </article>
                        </Entrance>
                    }) }
                </div>
            </section>

            <section class="section cta-section">
                <Entrance>
                    <h2 class="section-title">{"Have something in mind?"}</h2>
                    <p class="section-lead">{"Tell us about it. We reply within a day."}</p>
                    <Link<Route> to={Route::Contact} classes="cta-button">{"Get In Touch"}</Link<Route>>
                </Entrance>
            </section>

            <style>
                {r#"
                .service-card {
                    height: 100%;
                    border-top: 3px solid transparent;
                    transition: transform 0.3s ease, border-color 0.3s ease, box-shadow 0.3s ease;
                }
                .service-card:hover {
                    transform: translateY(-6px);
                    border-top-color: var(--service-accent);
                    box-shadow: 0 20px 40px -20px var(--service-accent);
                }
                .service-card:hover h3 {
                    color: var(--service-accent);
                }
                .service-tools {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .tool-chip {
                    font-size: 0.8rem;
                    padding: 0.2rem 0.7rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.06);
                }
                .service-example {
                    font-size: 0.9rem;
                    color: var(--text-muted);
                    border-left: 2px solid var(--service-accent);
                    padding-left: 0.75rem;
                }
                .cta-section {
                    text-align: center;
                }
                "#}
            </style>
        </div>
    }
}
