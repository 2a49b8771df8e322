//! Small owners for browser resources. Dropping one releases what it holds,
//! so an effect's teardown is just `drop(..)`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlElement};

/// An event listener that is removed when dropped.
pub struct Listener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event_type: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        match target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event_type,
                callback,
            }),
            Err(_) => {
                warn!("could not listen for {}", event_type);
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref());
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A `requestAnimationFrame` loop. The tick receives the seconds elapsed
/// since the previous frame (0 on the first) and returns `false` to stop.
pub struct AnimationLoop {
    callback: FrameCallback,
    handle: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
    pub fn start<F>(mut tick: F) -> Option<Self>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = web_sys::window()?;
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));

        let next = Rc::downgrade(&callback);
        let next_handle = handle.clone();
        let mut previous: Option<f64> = None;
        let frame_window = window.clone();
        *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |now: f64| {
            let dt = previous.map(|p| ((now - p) / 1000.0).max(0.0)).unwrap_or(0.0);
            previous = Some(now);
            next_handle.set(None);
            if !tick(dt) {
                return;
            }
            // A dropped loop leaves nothing to reschedule
            if let Some(cb) = next.upgrade() {
                if let Some(closure) = cb.borrow().as_ref() {
                    if let Ok(id) = frame_window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                        next_handle.set(Some(id));
                    }
                }
            }
        }));

        let id = {
            let first = callback.borrow();
            let closure = first.as_ref()?;
            window.request_animation_frame(closure.as_ref().unchecked_ref()).ok()?
        };
        handle.set(Some(id));
        Some(Self { callback, handle })
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let (Some(window), Some(id)) = (web_sys::window(), self.handle.take()) {
            let _ = window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

/// Children of `root` matching `selector`, skipping anything that is not an `HtmlElement`.
pub fn query_all(root: &web_sys::Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub fn scroll_y() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Document-relative top of an element, ignoring any transform on its children.
pub fn document_top(element: &web_sys::Element) -> f64 {
    element.get_bounding_client_rect().top() + scroll_y()
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
