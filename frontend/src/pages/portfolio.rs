use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::entrance::Entrance;
use crate::components::sticky_cards::StickyCards;
use crate::content::PROJECTS;
use crate::dom::scroll_to_top;
use crate::Route;

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="page portfolio-page">
            <section class="page-hero">
                <Entrance>
                    <h1>{"Selected "}<span class="highlight">{"Work"}</span></h1>
                    <p class="section-lead">
                        {"A few of the products we have designed, built and shipped with our clients."}
                    </p>
                </Entrance>
            </section>

            <StickyCards projects={PROJECTS} />

            <section class="section outro">
                <Entrance>
                    <h2 class="section-title">{"Your project could be next"}</h2>
                    <Link<Route> to={Route::Contact} classes="cta-button">{"Start a Project"}</Link<Route>>
                </Entrance>
            </section>

            <style>
                {r#"
                .portfolio-page .outro {
                    min-height: 60vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                }
                "#}
            </style>
        </div>
    }
}
