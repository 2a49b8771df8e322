use yew::prelude::*;

use crate::components::entrance::Entrance;
use crate::content::{PHILOSOPHY, TEAM, VALUES};
use crate::dom::scroll_to_top;

#[function_component(About)]
pub fn about() -> Html {
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="page about-page">
            <section class="page-hero">
                <Entrance>
                    <h1>{"About "}<span class="highlight">{"Nirmaan"}</span></h1>
                    <p class="section-lead">
                        {"We started as a handful of engineers who cared more about shipping good software than \
                          about billable hours. That is still the deal: small senior teams, honest timelines and \
                          code you will be glad to own."}
                    </p>
                </Entrance>
            </section>

            <section class="section">
                <Entrance>
                    <h2 class="section-title">{"Our Values"}</h2>
                </Entrance>
                <div class="card-grid">
                    { for VALUES.iter().enumerate().map(|(i, value)| html! {
                        <Entrance order={i as u32} class="glass-card">
                            <div class="card-icon">{ value.icon }</div>
                            <h3>{ value.title }</h3>
                            <p>{ value.description }</p>
                        </Entrance>
                    }) }
                </div>
            </section>

            <section class="section">
                <Entrance>
                    <h2 class="section-title">{"The Team"}</h2>
                </Entrance>
                <div class="card-grid team-grid">
                    { for TEAM.iter().enumerate().map(|(i, member)| html! {
                        <Entrance order={i as u32} class="glass-card team-card">
                            <img src={member.portrait} alt={member.name} />
                            <h3>{ member.name }</h3>
                            <p class="team-role">{ member.role }</p>
                            <p>{ member.expertise }</p>
                        </Entrance>
                    }) }
                </div>
            </section>

            <section class="section">
                <Entrance>
                    <h2 class="section-title">{"Tech Philosophy"}</h2>
                </Entrance>
                <div class="card-grid">
                    { for PHILOSOPHY.iter().enumerate().map(|(i, (title, body))| html! {
                        <Entrance order={i as u32} class="glass-card">
                            <h3>{ *title }</h3>
                            <p>{ *body }</p>
                        </Entrance>
                    }) }
                </div>
            </section>

            <style>
                {r#"
                .team-card {
                    text-align: center;
                }
                .team-card img {
                    width: 120px;
                    height: 120px;
                    border-radius: 50%;
                    object-fit: cover;
                }
                .team-role {
                    color: var(--accent);
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}
