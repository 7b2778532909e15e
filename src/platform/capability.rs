//! Device capability probing via media queries

use web_sys::Window;

use crate::sim::DeviceSignals;

pub fn device_signals(window: &Window) -> DeviceSignals {
    DeviceSignals {
        fine_pointer: media_matches(window, "(pointer: fine)"),
        hover: media_matches(window, "(hover: hover)"),
        viewport_width: window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0),
        reduced_motion: media_matches(window, "(prefers-reduced-motion: reduce)"),
    }
}

fn media_matches(window: &Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .is_some_and(|list| list.matches())
}

/// Viewport size in CSS pixels
pub fn viewport_size(window: &Window) -> (u32, u32) {
    let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0).round() as u32
    };
    (read(window.inner_width()), read(window.inner_height()))
}

/// Milliseconds on the same clock as animation-frame timestamps
pub fn now(window: &Window) -> f64 {
    window.performance().map_or(0.0, |p| p.now())
}
