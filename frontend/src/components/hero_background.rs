use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::config::motion::{PARTICLE_COUNT, PARTICLE_SPREAD};
use crate::config::theme;
use crate::dom::{AnimationLoop, Listener};
use crate::motion::particles::{rotate, rotation_at, scatter, Camera, Point3};
use crate::viewport::use_capabilities;

const POINT_SIZE: f64 = 0.02;
const OPACITY: f64 = 0.6;

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Matches the canvas backing store to its box and the device pixel ratio.
fn fit(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let ratio = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let width = canvas.client_width().max(1) as f64 * ratio;
    let height = canvas.client_height().max(1) as f64 * ratio;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    (width, height)
}

fn draw(ctx: &CanvasRenderingContext2d, points: &[Point3], elapsed: f64, width: f64, height: f64) {
    let camera = Camera::default();
    let (rx, ry) = rotation_at(elapsed);
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_global_alpha(OPACITY);
    ctx.set_fill_style_str(theme::PRIMARY);
    for point in points {
        if let Some(p) = camera.project(rotate(*point, rx, ry), width, height) {
            let size = (POINT_SIZE * p.scale).max(0.5);
            ctx.fill_rect(p.x - size / 2.0, p.y - size / 2.0, size, size);
        }
    }
}

/// Slowly turning particle cloud behind the hero copy.
#[function_component(HeroBackground)]
pub fn hero_background() -> Html {
    let canvas_ref = use_node_ref();
    let capabilities = use_capabilities();
    let reduced_motion = capabilities.reduced_motion;

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |reduced_motion| {
                let mut frame_loop = None;
                let mut resize = None;
                match canvas_ref.cast::<HtmlCanvasElement>().and_then(|c| context_2d(&c).map(|ctx| (c, ctx))) {
                    Some((canvas, ctx)) => {
                        let points = Rc::new(scatter(&mut rand::thread_rng(), PARTICLE_COUNT, PARTICLE_SPREAD));
                        let size = Rc::new(RefCell::new(fit(&canvas)));
                        let elapsed = Rc::new(RefCell::new(0.0_f64));

                        if let Some(window) = web_sys::window() {
                            let canvas = canvas.clone();
                            let ctx = ctx.clone();
                            let points = points.clone();
                            let size = size.clone();
                            let elapsed = elapsed.clone();
                            resize = Listener::new(&window, "resize", move |_| {
                                let (w, h) = fit(&canvas);
                                *size.borrow_mut() = (w, h);
                                draw(&ctx, &points, *elapsed.borrow(), w, h);
                            });
                        }

                        let (w, h) = *size.borrow();
                        draw(&ctx, &points, 0.0, w, h);
                        if !*reduced_motion {
                            frame_loop = AnimationLoop::start(move |dt| {
                                let now = {
                                    let mut elapsed = elapsed.borrow_mut();
                                    *elapsed += dt;
                                    *elapsed
                                };
                                let (w, h) = *size.borrow();
                                draw(&ctx, &points, now, w, h);
                                true
                            });
                        }
                        debug!("particle field running: {}", frame_loop.is_some());
                    }
                    None => warn!("hero canvas unavailable, skipping particles"),
                }
                move || {
                    drop(frame_loop);
                    drop(resize);
                }
            },
            reduced_motion,
        );
    }

    html! {
        <div class="hero-particles" aria-hidden="true">
            <canvas ref={canvas_ref}></canvas>
            <style>
                {r#"
                .hero-particles {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                    pointer-events: none;
                }
                .hero-particles canvas {
                    width: 100%;
                    height: 100%;
                    display: block;
                }
                "#}
            </style>
        </div>
    }
}
