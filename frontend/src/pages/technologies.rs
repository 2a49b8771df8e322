use yew::prelude::*;

use crate::components::entrance::Entrance;
use crate::content::TECH_CATEGORIES;
use crate::dom::scroll_to_top;

#[function_component(Technologies)]
pub fn technologies() -> Html {
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="page technologies-page">
            <section class="page-hero">
                <Entrance>
                    <h1>{"Our "}<span class="highlight">{"Stack"}</span></h1>
                    <p class="section-lead">{"The tools we reach for, grouped by where they live."}</p>
                </Entrance>
            </section>

            { for TECH_CATEGORIES.iter().map(|category| html! {
                <section class="section tech-category">
                    <Entrance>
                        <h2 class="section-title">{ category.label }</h2>
                    </Entrance>
                    <div class="tech-grid">
                        { for category.items.iter().enumerate().map(|(i, (name, emoji))| html! {
                            <Entrance order={i as u32} class="glass-card tech-tile">
                                <span class="tech-emoji">{ *emoji }</span>
                                <span>{ *name }</span>
                            </Entrance>
                        }) }
                    </div>
                </section>
            }) }

            <style>
                {r#"
                .tech-category .section-title {
                    text-align: left;
                }
                .tech-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
                    gap: 1rem;
                }
                .tech-tile {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    transition: transform 0.25s ease, border-color 0.25s ease;
                }
                .tech-tile:hover {
                    transform: translateY(-4px);
                    border-color: var(--primary);
                }
                .tech-emoji {
                    font-size: 2rem;
                }
                "#}
            </style>
        </div>
    }
}
