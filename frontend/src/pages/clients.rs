use yew::prelude::*;

use crate::components::entrance::Entrance;
use crate::components::testimonial_card::TestimonialCard;
use crate::content::{client_names, STATS, TESTIMONIALS};
use crate::dom::scroll_to_top;

#[function_component(Clients)]
pub fn clients() -> Html {
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="page clients-page">
            <section class="page-hero">
                <Entrance>
                    <h1>{"Our "}<span class="highlight">{"Clients"}</span></h1>
                    <p class="section-lead">{"Founders, non-profits and teams who trusted us with their product."}</p>
                </Entrance>
            </section>

            <section class="section">
                <div class="client-grid">
                    { for client_names().into_iter().enumerate().map(|(i, name)| html! {
                        <Entrance order={i as u32} class="glass-card client-name">{ name }</Entrance>
                    }) }
                </div>
            </section>

            <section class="section">
                <Entrance>
                    <h2 class="section-title">{"In Their Words"}</h2>
                </Entrance>
                <div class="card-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, testimonial)| html! {
                        <Entrance order={i as u32}>
                            <TestimonialCard testimonial={*testimonial} />
                        </Entrance>
                    }) }
                </div>
            </section>

            <section class="section">
                <div class="stat-row">
                    { for STATS.iter().enumerate().map(|(i, stat)| html! {
                        <Entrance order={i as u32} class="stat">
                            <span class="stat-value">{ stat.value }</span>
                            <span class="stat-label">{ stat.label }</span>
                        </Entrance>
                    }) }
                </div>
            </section>

            <style>
                {r#"
                .client-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1rem;
                }
                .client-name {
                    text-align: center;
                    font-weight: 700;
                    font-size: 1.1rem;
                }
                .stat-row {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 1.5rem;
                    text-align: center;
                }
                .stat {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                }
                .stat-value {
                    font-size: 2.75rem;
                    font-weight: 800;
                    color: var(--primary);
                }
                .stat-label {
                    color: var(--text-muted);
                }
                "#}
            </style>
        </div>
    }
}
