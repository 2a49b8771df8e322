use yew::prelude::*;
use yew_router::prelude::*;

use crate::dom::scroll_to_top;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="page not-found-page">
            <h1>{"404"}</h1>
            <p class="section-lead">{"This page wandered off. Let's get you back."}</p>
            <Link<Route> to={Route::Home} classes="cta-button">{"Back to Home"}</Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    min-height: 80vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    gap: 1rem;
                }
                .not-found-page h1 {
                    font-size: 8rem;
                    margin: 0;
                    color: var(--primary);
                }
                "#}
            </style>
        </div>
    }
}
