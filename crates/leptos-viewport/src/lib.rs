//! Leptos Viewport Utilities
//!
//! Reactive viewport width and scroll position.
//! Window listeners are attached when the owning component mounts and
//! removed when it is cleaned up.

use leptos::ev;
use leptos::prelude::*;

/// Viewport signals
#[derive(Clone, Copy)]
pub struct ViewportSignals {
    /// `window.innerWidth` in CSS px; `None` when unavailable
    pub width: ReadSignal<Option<f64>>,
    /// `window.scrollY` in CSS px
    pub scroll_y: ReadSignal<f64>,
}

impl ViewportSignals {
    /// True once the page has scrolled past `threshold` px
    pub fn scrolled_past(&self, threshold: f64) -> Memo<bool> {
        let scroll_y = self.scroll_y;
        Memo::new(move |_| scroll_y.get() > threshold)
    }
}

/// Current inner width of the window
pub fn inner_width() -> Option<f64> {
    web_sys::window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|width| width.as_f64())
}

/// Current vertical scroll offset of the window
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Create viewport signals bound to the current reactive owner.
///
/// Call from a component body; the listeners live as long as the
/// component does.
pub fn use_viewport() -> ViewportSignals {
    let (width, set_width) = signal(inner_width());
    let (scroll, set_scroll) = signal(scroll_y());

    let resize = window_event_listener(ev::resize, move |_| {
        set_width.set(inner_width());
    });
    let scrolled = window_event_listener(ev::scroll, move |_| {
        set_scroll.set(scroll_y());
    });

    on_cleanup(move || {
        resize.remove();
        scrolled.remove();
    });

    ViewportSignals { width, scroll_y: scroll }
}

/// Smooth-scroll the window back to the top
pub fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}
