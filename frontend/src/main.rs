use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::use_window_scroll;
use log::info;

mod config;
mod content;
mod dom;
mod viewport;
mod motion {
    pub mod marquee;
    pub mod particles;
    pub mod pinned;
    pub mod reveal;
}
mod components {
    pub mod contact_form;
    pub mod entrance;
    pub mod footer;
    pub mod hero_background;
    pub mod marquee;
    pub mod profile_reveal;
    pub mod sticky_cards;
    pub mod testimonial_card;
}
mod pages {
    pub mod about;
    pub mod clients;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod portfolio;
    pub mod services;
    pub mod technologies;
}

use components::footer::Footer;
use config::{breakpoints::NAV_SCROLLED_AT, theme, COMPANY};
use pages::{
    about::About,
    clients::Clients,
    contact::Contact,
    home::Home,
    not_found::NotFound,
    portfolio::Portfolio,
    services::Services,
    technologies::Technologies,
};
use viewport::CapabilitiesProvider;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/portfolio")]
    Portfolio,
    #[at("/clients")]
    Clients,
    #[at("/technologies")]
    Technologies,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes listed in the navbar, in order.
    const NAV: [(Route, &'static str); 7] = [
        (Route::Home, "Home"),
        (Route::About, "About"),
        (Route::Services, "Services"),
        (Route::Portfolio, "Portfolio"),
        (Route::Clients, "Clients"),
        (Route::Technologies, "Technologies"),
        (Route::Contact, "Contact"),
    ];
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        },
        Route::Clients => {
            info!("Rendering Clients page");
            html! { <Clients /> }
        },
        Route::Technologies => {
            info!("Rendering Technologies page");
            html! { <Technologies /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > NAV_SCROLLED_AT;
    let current = use_route::<Route>();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Links navigate on their own; this only folds the overlay away.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src={COMPANY.logo} alt="" />
                    { COMPANY.name }
                </Link<Route>>

                <button
                    class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                    aria-label="Toggle menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for Route::NAV.iter().map(|(route, label)| {
                        let active = current.as_ref() == Some(route);
                        html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={route.clone()} classes={classes!("nav-link", active.then(|| "active"))}>
                                    { *label }
                                </Link<Route>>
                            </div>
                        }
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="cta-button nav-cta">
                            {"Get In Touch"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

fn global_styles() -> String {
    format!(
        "{}{}",
        theme::css_variables(),
        r#"
        :root {
            --bg: #0a0a0a;
            --text: #f5f5f5;
            --text-muted: #a3a3a3;
        }
        * { box-sizing: border-box; }
        html { scroll-behavior: smooth; }
        body {
            margin: 0;
            background: var(--bg);
            color: var(--text);
            font-family: var(--font);
            -webkit-font-smoothing: antialiased;
        }
        .highlight { color: var(--primary); }
        .section {
            max-width: 1200px;
            margin: 0 auto;
            padding: 5rem 2rem;
        }
        .page-hero {
            max-width: 900px;
            margin: 0 auto;
            padding: 10rem 2rem 3rem;
            text-align: center;
        }
        .page-hero h1 {
            font-size: clamp(2.5rem, 5vw, 4rem);
            margin: 0 0 1rem;
        }
        .section-title {
            font-size: clamp(2rem, 4vw, 3rem);
            text-align: center;
            margin: 0 0 2.5rem;
        }
        .section-lead {
            font-size: 1.15rem;
            line-height: 1.7;
            color: var(--text-muted);
            max-width: 760px;
            margin: 0 auto 2rem;
            text-align: center;
        }
        .card-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
            gap: 1.5rem;
        }
        .glass-card {
            background: rgba(255, 255, 255, 0.04);
            border: 1px solid rgba(255, 255, 255, 0.08);
            border-radius: 16px;
            padding: 1.75rem;
            backdrop-filter: blur(10px);
        }
        .glass-card h3 { margin: 0.5rem 0; }
        .glass-card p { color: var(--text-muted); line-height: 1.6; }
        .card-icon { font-size: 2rem; }
        .cta-button, .ghost-button {
            display: inline-block;
            padding: 0.9rem 1.8rem;
            border-radius: 999px;
            font-weight: 700;
            text-decoration: none;
            cursor: pointer;
            transition: transform 0.2s ease, background 0.2s ease;
        }
        .cta-button {
            background: var(--primary);
            color: #fff;
            border: none;
        }
        .cta-button:hover {
            background: var(--primary-dark);
            transform: translateY(-2px);
        }
        .ghost-button {
            border: 1px solid var(--primary);
            color: var(--accent);
            background: transparent;
        }
        .entrance {
            opacity: 0;
            transform: translateY(30px);
            transition: opacity 0.7s var(--ease-out), transform 0.7s var(--ease-out);
        }
        .entrance.in-view {
            opacity: 1;
            transform: none;
        }
        @media (prefers-reduced-motion: reduce) {
            .entrance { opacity: 1; transform: none; transition: none; }
            html { scroll-behavior: auto; }
        }

        .top-nav {
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            z-index: 1000;
            padding: 1.25rem 2rem;
            transition: background 0.3s ease, padding 0.3s ease;
        }
        .top-nav.scrolled {
            background: rgba(10, 10, 10, 0.75);
            backdrop-filter: blur(12px);
            padding: 0.75rem 2rem;
            border-bottom: 1px solid rgba(255, 255, 255, 0.06);
        }
        .nav-content {
            max-width: 1200px;
            margin: 0 auto;
            display: flex;
            align-items: center;
            justify-content: space-between;
        }
        .nav-logo {
            display: flex;
            align-items: center;
            gap: 0.5rem;
            font-size: 1.4rem;
            font-weight: 800;
            color: #fff;
            text-decoration: none;
        }
        .nav-logo img { height: 36px; }
        .nav-right {
            display: flex;
            align-items: center;
            gap: 1.5rem;
        }
        .nav-link {
            color: var(--text-muted);
            text-decoration: none;
            font-weight: 500;
            transition: color 0.2s ease;
        }
        .nav-link:hover, .nav-link.active { color: var(--primary); }
        .nav-cta { padding: 0.6rem 1.3rem; }
        .burger-menu {
            display: none;
            flex-direction: column;
            gap: 5px;
            background: none;
            border: none;
            cursor: pointer;
            padding: 0.5rem;
            z-index: 1001;
        }
        .burger-menu span {
            display: block;
            width: 24px;
            height: 2px;
            background: #fff;
            transition: transform 0.3s ease, opacity 0.3s ease;
        }
        .burger-menu.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
        .burger-menu.open span:nth-child(2) { opacity: 0; }
        .burger-menu.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
        @media (max-width: 900px) {
            .burger-menu { display: flex; }
            .nav-right {
                position: fixed;
                inset: 0;
                flex-direction: column;
                justify-content: center;
                gap: 2rem;
                background: rgba(10, 10, 10, 0.97);
                transform: translateX(100%);
                transition: transform 0.35s var(--ease-out);
            }
            .nav-right.mobile-menu-open { transform: none; }
            .nav-link { font-size: 1.5rem; }
        }
        "#
    )
}

#[function_component]
fn App() -> Html {
    html! {
        <CapabilitiesProvider>
            <BrowserRouter>
                <style>{ global_styles() }</style>
                <Nav />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </BrowserRouter>
        </CapabilitiesProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_resolve_to_distinct_paths() {
        let paths: Vec<String> = Route::NAV.iter().map(|(route, _)| route.to_path()).collect();
        assert_eq!(paths[0], "/");
        assert!(paths.iter().all(|p| p.starts_with('/')));
        let mut unique = paths.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), paths.len());
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/portfolio"), Some(Route::Portfolio));
    }
}
