use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::config::breakpoints::CARDS_MOBILE;
use crate::content::{card_index, tech_icon, Project};
use crate::dom::{document_top, query_all, scroll_y, set_style, Listener};
use crate::motion::pinned::PinnedStack;
use crate::viewport::mobile_media_query;

/// Window events after which slot geometry is read again.
const REMEASURE_EVENTS: [&str; 2] = ["resize", "load"];

#[derive(Properties, PartialEq)]
pub struct StickyCardsProps {
    pub projects: &'static [Project],
    #[prop_or(CARDS_MOBILE)]
    pub breakpoint: f64,
}

fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Slots are never transformed, so their tops stay valid while cards are pinned.
fn measure(root: &web_sys::Element) -> PinnedStack {
    let tops = query_all(root, ".sticky-slot").iter().map(|slot| document_top(slot)).collect();
    PinnedStack::new(tops, viewport_height())
}

fn apply(root: &web_sys::Element, stack: &PinnedStack) {
    let frames = stack.frames(scroll_y());
    for (card, frame) in query_all(root, ".sticky-card").iter().zip(frames) {
        set_style(card, "transform", &frame.transform());
        set_style(card, "--after-opacity", &format!("{:.3}", frame.overlay));
        let _ = card.class_list().toggle_with_force("is-pinned", frame.pinned());
    }
}

const BASE_STYLES: &str = r#"
                .sticky-cards {
                    position: relative;
                    width: 100%;
                }
                .sticky-slot {
                    position: relative;
                    width: 100%;
                    height: 100svh;
                    padding: 1.5rem;
                    box-sizing: border-box;
                }
                .sticky-card {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    display: flex;
                    gap: 4rem;
                    padding: 2.5rem;
                    box-sizing: border-box;
                    background: #0f0f0f;
                    color: #fff;
                    border-radius: 1rem;
                    transform-origin: center bottom;
                    will-change: transform;
                    --after-opacity: 0;
                }
                .sticky-card::after {
                    content: "";
                    position: absolute;
                    inset: 0;
                    border-radius: inherit;
                    background: rgba(0, 0, 0, 0.6);
                    opacity: var(--after-opacity);
                    pointer-events: none;
                }
                .sticky-card-index {
                    flex: 1;
                }
                .sticky-card-index h1 {
                    font-family: var(--display-font);
                    font-size: 6rem;
                    margin: 0;
                    color: var(--primary);
                }
                .sticky-card-body {
                    flex: 4;
                    display: flex;
                    gap: 2rem;
                }
                .sticky-card-copy {
                    flex: 3;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .sticky-card-copy h2 {
                    font-size: 2.5rem;
                    margin: 0;
                }
                .sticky-card-copy .tagline {
                    color: var(--primary);
                    font-weight: 600;
                }
                .sticky-card-tech {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .tech-chip {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.35rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.08);
                    font-size: 0.85rem;
                }
                .tech-chip img {
                    width: 16px;
                    height: 16px;
                }
                .sticky-card-links {
                    display: flex;
                    gap: 1rem;
                }
                .sticky-card-links a {
                    color: var(--primary);
                    text-decoration: none;
                    font-weight: 600;
                }
                .sticky-card-image {
                    flex: 2;
                    border-radius: 0.75rem;
                    overflow: hidden;
                }
                .sticky-card-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .sticky-card.is-pinned {
                    pointer-events: none;
                }
"#;

const MOBILE_STYLES: &str = r#"
                    .sticky-card {
                        flex-direction: column;
                        gap: 1.5rem;
                        padding: 1.5rem;
                    }
                    .sticky-card-body {
                        flex-direction: column;
                    }
                    .sticky-card-index h1 {
                        font-size: 3rem;
                    }
                    .sticky-card-copy h2 {
                        font-size: 1.75rem;
                    }
"#;

fn card_styles(breakpoint: f64) -> String {
    format!("{}@media {} {{{}}}", BASE_STYLES, mobile_media_query(breakpoint), MOBILE_STYLES)
}

/// Project cards that pin to the top and tip back as the next card slides over.
#[function_component(StickyCards)]
pub fn sticky_cards(props: &StickyCardsProps) -> Html {
    let container = use_node_ref();

    {
        let container = container.clone();
        use_effect_with_deps(
            move |count| {
                let mut listeners = Vec::new();
                if let (Some(root), Some(window)) = (container.cast::<web_sys::Element>(), web_sys::window()) {
                    let stack = Rc::new(RefCell::new(measure(&root)));
                    apply(&root, &stack.borrow());
                    debug!("pinned {} project cards", count);

                    let on_scroll = {
                        let root = root.clone();
                        let stack = stack.clone();
                        move |_: Event| apply(&root, &stack.borrow())
                    };
                    // Geometry is read with cards at rest, then re-applied.
                    let remeasure = Rc::new(move || {
                        for card in query_all(&root, ".sticky-card") {
                            set_style(&card, "transform", "none");
                        }
                        *stack.borrow_mut() = measure(&root);
                        apply(&root, &stack.borrow());
                    });
                    listeners.extend(Listener::new(&window, "scroll", on_scroll));
                    for event in REMEASURE_EVENTS {
                        let remeasure = remeasure.clone();
                        listeners.extend(Listener::new(&window, event, move |_: Event| remeasure()));
                    }
                }
                move || drop(listeners)
            },
            props.projects.len(),
        );
    }

    html! {
        <div class="sticky-cards" ref={container}>
            { for props.projects.iter().enumerate().map(|(index, project)| html! {
                <div class="sticky-slot">
                    <div class="sticky-card">
                        <div class="sticky-card-index">
                            <h1>{ card_index(index) }</h1>
                        </div>
                        <div class="sticky-card-body">
                            <div class="sticky-card-copy">
                                <h2>{ project.name }</h2>
                                <p class="tagline">{ project.tagline }</p>
                                <p>{ project.description() }</p>
                                <div class="sticky-card-tech">
                                    { for project.tech.iter().map(|tech| html! {
                                        <span class="tech-chip">
                                            <img src={tech_icon(tech)} alt="" />
                                            { *tech }
                                        </span>
                                    }) }
                                </div>
                                <div class="sticky-card-links">
                                    { for project.live_url.map(|url| html! {
                                        <a href={url} target="_blank" rel="noopener noreferrer">{"Live site"}</a>
                                    }) }
                                    { for project.source_url.map(|url| html! {
                                        <a href={url} target="_blank" rel="noopener noreferrer">{"Source"}</a>
                                    }) }
                                </div>
                            </div>
                            <div class="sticky-card-image">
                                <img src={project.image} alt={project.name} />
                            </div>
                        </div>
                    </div>
                </div>
            }) }
            <style>{ card_styles(props.breakpoint) }</style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_is_reread_after_late_loads() {
        assert!(REMEASURE_EVENTS.contains(&"resize"));
        assert!(REMEASURE_EVENTS.contains(&"load"));
    }

    #[test]
    fn mobile_styles_follow_the_breakpoint() {
        let css = card_styles(CARDS_MOBILE);
        assert!(css.contains("@media (max-width: 899.98px) {"));
        assert!(css.contains(".sticky-card.is-pinned"));
        assert!(!card_styles(700.0).contains("900px"));
    }
}
