use yew::prelude::*;
use log::debug;

use crate::dom::Listener;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Layout {
    Mobile,
    Desktop,
}

impl Layout {
    pub fn for_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            Layout::Mobile
        } else {
            Layout::Desktop
        }
    }
}

/// Read-only facts about the device, handed to widgets through context
/// instead of being queried ad hoc.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Capabilities {
    pub can_hover: bool,
    pub reduced_motion: bool,
    pub width: f64,
    pub height: f64,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            can_hover: true,
            reduced_motion: false,
            width: 1280.0,
            height: 800.0,
        }
    }
}

impl Capabilities {
    pub fn detect() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let matches = |query: &str| {
            window
                .match_media(query)
                .ok()
                .flatten()
                .map(|mql| mql.matches())
        };
        let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>, fallback: f64| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(fallback)
        };
        let fallback = Self::default();
        Self {
            can_hover: matches("(hover: hover)").unwrap_or(fallback.can_hover),
            reduced_motion: matches("(prefers-reduced-motion: reduce)").unwrap_or(fallback.reduced_motion),
            width: dimension(window.inner_width(), fallback.width),
            height: dimension(window.inner_height(), fallback.height),
        }
    }

    pub fn layout(&self, breakpoint: f64) -> Layout {
        Layout::for_width(self.width, breakpoint)
    }

    /// Hover interactions need both a hover-capable pointer and a wide layout.
    pub fn hover_mode(&self, breakpoint: f64) -> bool {
        self.can_hover && self.layout(breakpoint) == Layout::Desktop
    }
}

/// Media query matching exactly the widths `Layout::for_width` calls mobile.
pub fn mobile_media_query(breakpoint: f64) -> String {
    format!("(max-width: {}px)", breakpoint - 0.02)
}

/// Reports a layout only when a width change actually crosses the breakpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct BreakpointWatch {
    breakpoint: f64,
    current: Option<Layout>,
}

impl BreakpointWatch {
    pub fn new(breakpoint: f64) -> Self {
        Self {
            breakpoint,
            current: None,
        }
    }

    pub fn current(&self) -> Option<Layout> {
        self.current
    }

    pub fn observe(&mut self, width: f64) -> Option<Layout> {
        let layout = Layout::for_width(width, self.breakpoint);
        if self.current == Some(layout) {
            return None;
        }
        self.current = Some(layout);
        Some(layout)
    }
}

/// Hook for widgets: the injected capabilities, or desktop defaults.
#[hook]
pub fn use_capabilities() -> Capabilities {
    use_context::<Capabilities>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct CapabilitiesProviderProps {
    pub children: Children,
}

#[function_component(CapabilitiesProvider)]
pub fn capabilities_provider(props: &CapabilitiesProviderProps) -> Html {
    let capabilities = use_state(Capabilities::detect);

    {
        let capabilities = capabilities.clone();
        use_effect_with_deps(
            move |_| {
                let mut last = *capabilities;
                let listener = web_sys::window().and_then(|window| {
                    Listener::new(&window, "resize", move |_| {
                        let next = Capabilities::detect();
                        if last != next {
                            debug!("viewport changed: {:?}", next);
                            last = next;
                            capabilities.set(next);
                        }
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    html! {
        <ContextProvider<Capabilities> context={*capabilities}>
            { for props.children.iter() }
        </ContextProvider<Capabilities>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_splits_at_the_breakpoint() {
        assert_eq!(Layout::for_width(899.0, 900.0), Layout::Mobile);
        assert_eq!(Layout::for_width(900.0, 900.0), Layout::Desktop);
    }

    #[test]
    fn crossing_is_reported_once_per_crossing() {
        let mut watch = BreakpointWatch::new(900.0);
        let widths = [1200.0, 1100.0, 1000.0, 850.0, 700.0, 400.0, 950.0, 960.0, 800.0];
        let reported: Vec<Layout> = widths.iter().filter_map(|w| watch.observe(*w)).collect();
        assert_eq!(
            reported,
            vec![Layout::Desktop, Layout::Mobile, Layout::Desktop, Layout::Mobile]
        );
        assert_eq!(watch.current(), Some(Layout::Mobile));
    }

    #[test]
    fn media_query_agrees_with_layout() {
        assert_eq!(mobile_media_query(900.0), "(max-width: 899.98px)");
        assert_eq!(mobile_media_query(640.0), "(max-width: 639.98px)");
        assert_eq!(Layout::for_width(899.98, 900.0), Layout::Mobile);
    }

    #[test]
    fn hover_mode_needs_pointer_and_width() {
        let desktop = Capabilities::default();
        assert!(desktop.hover_mode(900.0));

        let narrow = Capabilities { width: 600.0, ..desktop };
        assert!(!narrow.hover_mode(900.0));

        let touch = Capabilities { can_hover: false, ..desktop };
        assert!(!touch.hover_mode(900.0));
    }
}
