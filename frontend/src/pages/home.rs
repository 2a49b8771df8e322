use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::entrance::Entrance;
use crate::components::hero_background::HeroBackground;
use crate::components::marquee::Marquee;
use crate::components::profile_reveal::ProfileReveal;
use crate::components::testimonial_card::TestimonialCard;
use crate::config::COMPANY;
use crate::content::{INDUSTRIES, SERVICES, TEAM, TEAM_CAPTION, TECH_TAGS, TESTIMONIALS};
use crate::dom::scroll_to_top;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                scroll_to_top();
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <section class="hero">
                <HeroBackground />
                <div class="hero-content">
                    <Entrance>
                        <h1 class="hero-title">
                            {"We build "}<span class="highlight">{"software"}</span>{" that moves your business"}
                        </h1>
                    </Entrance>
                    <Entrance order={1}>
                        <p class="hero-subtitle">{ COMPANY.tagline }</p>
                    </Entrance>
                    <Entrance order={2} class="hero-actions">
                        <Link<Route> to={Route::Contact} classes="cta-button">{"Start a Project"}</Link<Route>>
                        <Link<Route> to={Route::Portfolio} classes="ghost-button">{"View Our Work"}</Link<Route>>
                    </Entrance>
                </div>
            </section>

            <section class="section who-we-are">
                <Entrance>
                    <h2 class="section-title">{"Who Are We"}</h2>
                    <p class="section-lead">
                        {"Nirmaan is a small, senior team of engineers and designers from Pune. We partner with \
                          founders and teams to design, build and scale products, from first prototype to production."}
                    </p>
                </Entrance>
                <div class="chip-row">
                    { for INDUSTRIES.iter().enumerate().map(|(i, industry)| html! {
                        <Entrance order={i as u32} class="chip">{ *industry }</Entrance>
                    }) }
                </div>
            </section>

            <section class="section">
                <Entrance>
                    <h2 class="section-title">{"What We Do"}</h2>
                </Entrance>
                <div class="card-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <Entrance order={i as u32} class="glass-card">
                            <div class="card-icon">{ service.icon }</div>
                            <h3>{ service.title }</h3>
                            <p>{ service.summary }</p>
                        </Entrance>
                    }) }
                </div>
            </section>

            <section class="section">
                <Entrance>
                    <h2 class="section-title">{"Technologies We Love"}</h2>
                </Entrance>
                <Marquee items={TECH_TAGS} />
            </section>

            <section class="section">
                <Entrance>
                    <h2 class="section-title">{"What Our Clients Say"}</h2>
                </Entrance>
                <div class="card-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, testimonial)| html! {
                        <Entrance order={i as u32}>
                            <TestimonialCard testimonial={*testimonial} />
                        </Entrance>
                    }) }
                </div>
            </section>

            <ProfileReveal members={TEAM} default_caption={TEAM_CAPTION} />

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    text-align: center;
                    padding: 6rem 2rem 4rem;
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 900px;
                }
                .hero-title {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    line-height: 1.1;
                    margin: 0 0 1.5rem;
                }
                .hero-title .highlight {
                    color: var(--primary);
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: var(--text-muted);
                    margin: 0 0 2.5rem;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .chip-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    justify-content: center;
                    margin-top: 2rem;
                }
                .chip {
                    padding: 0.5rem 1.25rem;
                    border-radius: 999px;
                    border: 1px solid var(--primary);
                    color: var(--accent);
                }
                "#}
            </style>
        </div>
    }
}
