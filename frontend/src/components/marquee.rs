use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::config::breakpoints::TOOLTIP_MIN;
use crate::config::motion::{MARQUEE_COPIES, MARQUEE_ITEMS_PER_ROW};
use crate::content::tech_icon;
use crate::dom::{query_all, set_style, AnimationLoop, Listener};
use crate::motion::marquee::{chunk_rows, Direction, MarqueeRow};
use crate::viewport::use_capabilities;

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub items: &'static [&'static str],
}

#[derive(Clone, PartialEq, Debug)]
struct Tooltip {
    label: &'static str,
    x: i32,
    y: i32,
}

type Rows = Rc<RefCell<Vec<MarqueeRow>>>;

/// Measures every track and re-phases its row. One copy is a third of the track.
fn measure(container: &web_sys::Element, rows: &Rows) {
    let tracks = query_all(container, ".marquee-track");
    let mut rows = rows.borrow_mut();
    for (row, track) in rows.iter_mut().zip(&tracks) {
        row.measure(track.scroll_width() as f64 / MARQUEE_COPIES as f64);
        set_style(track, "transform", &format!("translate3d({}px, 0, 0)", row.offset()));
    }
}

/// Rows of technology logos drifting in alternating directions.
#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let capabilities = use_capabilities();
    let container = use_node_ref();
    let tooltip = use_state(|| None::<Tooltip>);
    let grouped = chunk_rows(props.items, MARQUEE_ITEMS_PER_ROW);
    let row_count = grouped.len();
    let rows: Rows = use_mut_ref(Vec::new);
    let tooltips_enabled = capabilities.can_hover && capabilities.width >= TOOLTIP_MIN;

    {
        let container = container.clone();
        let rows = rows.clone();
        use_effect_with_deps(
            move |(row_count, reduced_motion)| {
                *rows.borrow_mut() = (0..*row_count).map(|i| MarqueeRow::new(Direction::for_row(i))).collect();
                let mut frame_loop = None;
                let mut resize = None;
                if let Some(root) = container.cast::<web_sys::Element>() {
                    measure(&root, &rows);
                    if let Some(window) = web_sys::window() {
                        let root = root.clone();
                        let rows = rows.clone();
                        resize = Listener::new(&window, "resize", move |_| measure(&root, &rows));
                    }
                    if !*reduced_motion {
                        let tracks = query_all(&root, ".marquee-track");
                        let rows = rows.clone();
                        frame_loop = AnimationLoop::start(move |dt| {
                            for (row, track) in rows.borrow_mut().iter_mut().zip(&tracks) {
                                let x = row.advance(dt);
                                set_style(track, "transform", &format!("translate3d({}px, 0, 0)", x));
                            }
                            true
                        });
                    }
                    debug!("marquee with {} rows, animated: {}", row_count, frame_loop.is_some());
                }
                move || {
                    drop(frame_loop);
                    drop(resize);
                }
            },
            (row_count, capabilities.reduced_motion),
        );
    }

    let row_views = grouped.into_iter().enumerate().map(|(index, names)| {
        let onwheel = {
            let rows = rows.clone();
            Callback::from(move |_: WheelEvent| {
                if let Some(row) = rows.borrow_mut().get_mut(index) {
                    row.boost();
                }
            })
        };
        let onmouseleave = {
            let rows = rows.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(row) = rows.borrow_mut().get_mut(index) {
                    row.relax();
                }
            })
        };
        let copies = (0..MARQUEE_COPIES).flat_map(|_| names.iter().copied());
        html! {
            <div class="marquee-row" {onwheel} {onmouseleave}>
                <div class="marquee-track">
                    { for copies.map(|name| {
                        let (onmousemove, onmouseout) = if tooltips_enabled {
                            let show = {
                                let tooltip = tooltip.clone();
                                Callback::from(move |e: MouseEvent| {
                                    tooltip.set(Some(Tooltip { label: name, x: e.client_x(), y: e.client_y() }));
                                })
                            };
                            let hide = {
                                let tooltip = tooltip.clone();
                                Callback::from(move |_: MouseEvent| tooltip.set(None))
                            };
                            (Some(show), Some(hide))
                        } else {
                            (None, None)
                        };
                        html! {
                            <div class="marquee-item" {onmousemove} {onmouseout}>
                                <img src={tech_icon(name)} alt={name} loading="lazy" />
                            </div>
                        }
                    }) }
                </div>
            </div>
        }
    });

    let tip = match (*tooltip).clone() {
        Some(tip) if tooltips_enabled => html! {
            <div class="marquee-tooltip" style={format!("left: {}px; top: {}px;", tip.x + 12, tip.y + 12)}>
                { tip.label }
            </div>
        },
        _ => html! {},
    };

    html! {
        <div class="marquee" ref={container}>
            { for row_views }
            { tip }
            <style>
                {r#"
                .marquee {
                    width: 100%;
                    overflow: hidden;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    padding: 2rem 0;
                }
                .marquee-row {
                    width: 100%;
                    overflow: hidden;
                }
                .marquee-track {
                    display: flex;
                    width: max-content;
                    gap: 1.5rem;
                    will-change: transform;
                }
                .marquee-item {
                    flex: 0 0 auto;
                    width: 96px;
                    height: 96px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 16px;
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }
                .marquee-item:hover {
                    transform: scale(1.08);
                    border-color: var(--primary);
                }
                .marquee-item img {
                    width: 56px;
                    height: 56px;
                    object-fit: contain;
                }
                .marquee-tooltip {
                    position: fixed;
                    z-index: 50;
                    pointer-events: none;
                    padding: 0.35rem 0.75rem;
                    border-radius: 8px;
                    background: rgba(0, 0, 0, 0.85);
                    color: #fff;
                    font-size: 0.85rem;
                    white-space: nowrap;
                }
                @media (max-width: 768px) {
                    .marquee-item {
                        width: 72px;
                        height: 72px;
                    }
                    .marquee-item img {
                        width: 40px;
                        height: 40px;
                    }
                }
                "#}
            </style>
        </div>
    }
}
