use log::debug;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

use crate::config::breakpoints::TEAM_MOBILE;
use crate::content::TeamMember;
use crate::dom::Listener;
use crate::motion::reveal::{frame, stagger_from_center, ActiveProfile};
use crate::viewport::{mobile_media_query, use_capabilities, BreakpointWatch, Layout};

/// Avatars are drawn at this fraction of their desktop size below the breakpoint.
const MOBILE_AVATAR_SCALE: f64 = 0.4;

#[derive(Properties, PartialEq)]
pub struct ProfileRevealProps {
    pub members: &'static [TeamMember],
    pub default_caption: AttrValue,
    #[prop_or(TEAM_MOBILE)]
    pub breakpoint: f64,
}

fn letters(text: &str) -> Vec<String> {
    text.chars()
        .map(|c| if c == ' ' { "\u{00a0}".to_string() } else { c.to_string() })
        .collect()
}

const BASE_STYLES: &str = r#"
                .team-reveal {
                    width: 100%;
                    min-height: 90svh;
                    background: #0f0f0f;
                    color: #e3e3e3;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    gap: 2.5rem;
                    overflow: hidden;
                    position: relative;
                    font-family: var(--display-font);
                }
                .profile-avatars {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                }
                .profile-avatar {
                    padding: 5px;
                    cursor: pointer;
                    will-change: width, height;
                    box-sizing: border-box;
                }
                .profile-avatar img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    border-radius: 0.375rem;
                }
                .profile-names {
                    width: 100%;
                    height: 20rem;
                    position: relative;
                    overflow: hidden;
                    clip-path: polygon(0 0, 100% 0, 100% 100%, 0 100%);
                }
                .profile-name h1 {
                    position: absolute;
                    width: 100%;
                    margin: 0;
                    text-align: center;
                    text-transform: uppercase;
                    font-weight: 900;
                    font-size: 20rem;
                    letter-spacing: -0.5rem;
                    line-height: 1;
                    color: #f93535;
                    user-select: none;
                }
                .profile-name.default h1 {
                    color: #e3e3db;
                }
                .profile-name .letter {
                    display: inline-block;
                    will-change: transform;
                }
"#;

const MOBILE_STYLES: &str = r#"
                    .team-reveal {
                        flex-direction: column-reverse;
                    }
                    .profile-avatars {
                        flex-wrap: wrap;
                        max-width: 90%;
                    }
                    .profile-avatar {
                        padding: 2.5px;
                    }
                    .profile-names {
                        height: 5rem;
                    }
                    .profile-name h1 {
                        font-size: 4rem;
                        letter-spacing: 0;
                    }
"#;

fn reveal_styles(breakpoint: f64) -> String {
    format!("{}@media {} {{{}}}", BASE_STYLES, mobile_media_query(breakpoint), MOBILE_STYLES)
}

/// Team headline: hovering (or tapping) a portrait swaps the headline to that person.
#[function_component(ProfileReveal)]
pub fn profile_reveal(props: &ProfileRevealProps) -> Html {
    let capabilities = use_capabilities();
    let active = use_state(ActiveProfile::default);
    let avatars_ref = use_node_ref();
    let watch = use_mut_ref(|| BreakpointWatch::new(props.breakpoint));
    let generation = use_mut_ref(|| 0u32);

    if let Some(crossed) = watch.borrow_mut().observe(capabilities.width) {
        *generation.borrow_mut() += 1;
        debug!("team reveal entering {:?} layout", crossed);
    }
    let layout = watch
        .borrow()
        .current()
        .unwrap_or_else(|| capabilities.layout(props.breakpoint));
    let hover_mode = capabilities.hover_mode(props.breakpoint);
    let current_generation = *generation.borrow();

    // Rebinds once per breakpoint crossing (or pointer change), never per resize.
    {
        let active = active.clone();
        let avatars_ref = avatars_ref.clone();
        use_effect_with_deps(
            move |(_, hover_mode)| {
                active.set(ActiveProfile::NoneActive);
                let mut outside_tap = None;
                if !*hover_mode {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        outside_tap = Listener::new(&document, "click", move |event: Event| {
                            let Some(container) = avatars_ref.cast::<Node>() else {
                                return;
                            };
                            let inside = event
                                .target()
                                .and_then(|t| t.dyn_into::<Node>().ok())
                                .map(|target| container.contains(Some(&target)))
                                .unwrap_or(false);
                            if !inside {
                                active.set(active.tap_outside());
                            }
                        });
                    }
                }
                move || drop(outside_tap)
            },
            (current_generation, hover_mode),
        );
    }

    let view = frame(props.members.len(), *active, capabilities.reduced_motion);
    let size_scale = match layout {
        Layout::Mobile => MOBILE_AVATAR_SCALE,
        Layout::Desktop => 1.0,
    };
    let shown = view.shown_caption();
    let letter_transition = view.letter_transition();
    let avatar_transition = view.avatar_transition();

    let avatars = props.members.iter().enumerate().map(|(index, member)| {
        let px = view.avatar_px[index] * size_scale;
        let (onmouseenter, onmouseleave, onclick) = if hover_mode {
            let enter = {
                let active = active.clone();
                Callback::from(move |_: MouseEvent| active.set(ActiveProfile::ActiveAt(index)))
            };
            let leave = {
                let active = active.clone();
                Callback::from(move |_: MouseEvent| active.set(ActiveProfile::NoneActive))
            };
            (Some(enter), Some(leave), None)
        } else {
            let tap = {
                let active = active.clone();
                Callback::from(move |_: MouseEvent| active.set(active.tap(index)))
            };
            (None, None, Some(tap))
        };
        html! {
            <div
                class="profile-avatar"
                style={format!("width: {0}px; height: {0}px; transition: {1};", px, avatar_transition)}
                {onmouseenter}
                {onmouseleave}
                {onclick}
            >
                <img src={member.portrait} alt={member.caption} />
            </div>
        }
    });

    let captions = std::iter::once(props.default_caption.to_string())
        .chain(props.members.iter().map(|m| m.caption.to_string()))
        .enumerate()
        .map(|(index, caption)| {
            let offset = view.captions[index].percent();
            let glyphs = letters(&caption);
            let delays = stagger_from_center(glyphs.len());
            html! {
                <div
                    class={classes!("profile-name", (index == 0).then(|| "default"))}
                    aria-hidden={(shown != Some(index)).to_string()}
                >
                    <h1 aria-label={caption.clone()}>
                        { for glyphs.into_iter().zip(delays).map(|(glyph, delay)| html! {
                            <span
                                class="letter"
                                aria-hidden="true"
                                style={format!(
                                    "transform: translateY({}%); transition: {}; transition-delay: {}s;",
                                    offset, letter_transition, delay
                                )}
                            >
                                { glyph }
                            </span>
                        }) }
                    </h1>
                </div>
            }
        });

    html! {
        <section class="team-reveal">
            <div class="profile-avatars" ref={avatars_ref}>
                { for avatars }
            </div>
            <div class="profile-names">
                { for captions }
            </div>
            <style>{ reveal_styles(props.breakpoint) }</style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_styles_follow_the_breakpoint() {
        let css = reveal_styles(640.0);
        assert!(css.contains("@media (max-width: 639.98px) {"));
        assert!(!css.contains("900px"));
    }

    #[test]
    fn spaces_become_non_breaking() {
        assert_eq!(letters("The Squad")[3], "\u{00a0}");
        assert_eq!(letters("Meet").len(), 4);
    }
}
