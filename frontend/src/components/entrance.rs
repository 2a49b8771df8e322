use yew::prelude::*;

use crate::config::motion::{ENTRANCE_MARGIN_PX, ENTRANCE_STEP_MS};
use crate::dom::Listener;
use crate::viewport::use_capabilities;

/// True once an element's top edge has risen `margin` pixels above the viewport bottom.
pub fn entered_view(top: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin
}

#[derive(Properties, PartialEq)]
pub struct EntranceProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Position in a list; each step delays the entrance a little more.
    #[prop_or_default]
    pub order: u32,
}

/// Fades and lifts its children in the first time they scroll into view.
#[function_component(Entrance)]
pub fn entrance(props: &EntranceProps) -> Html {
    let capabilities = use_capabilities();
    let visible = use_state(|| capabilities.reduced_motion);
    let node = use_node_ref();

    {
        let visible = visible.clone();
        let node = node.clone();
        let already = *visible;
        use_effect_with_deps(
            move |_| {
                let mut listener = None;
                let check = move || -> bool {
                    let Some(element) = node.cast::<web_sys::Element>() else {
                        return false;
                    };
                    let viewport = web_sys::window()
                        .and_then(|w| w.inner_height().ok())
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);
                    entered_view(element.get_bounding_client_rect().top(), viewport, ENTRANCE_MARGIN_PX)
                };
                if !already {
                    if check() {
                        visible.set(true);
                    } else if let Some(window) = web_sys::window() {
                        listener = Listener::new(&window, "scroll", move |_| {
                            if check() {
                                visible.set(true);
                            }
                        });
                    }
                }
                move || drop(listener)
            },
            already,
        );
    }

    let delay = format!("transition-delay: {}ms;", props.order * ENTRANCE_STEP_MS);
    html! {
        <div
            ref={node}
            class={classes!("entrance", (*visible).then(|| "in-view"), props.class.clone())}
            style={delay}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enters_once_past_the_margin() {
        assert!(!entered_view(750.0, 800.0, 100.0));
        assert!(entered_view(699.0, 800.0, 100.0));
        assert!(entered_view(-300.0, 800.0, 100.0));
    }
}
