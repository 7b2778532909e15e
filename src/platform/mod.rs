//! Browser platform layer (wasm32 only)
//!
//! DOM plumbing around the platform-free engine:
//! - Canvas 2D surface
//! - Event listeners and animation frames with explicit teardown (gloo)
//! - Capability probing (media queries, viewport)
//! - The `HeroAnimation` lifecycle exported to JS

pub mod canvas;
pub mod capability;
pub mod engine_host;
pub mod error;
pub mod frames;
pub mod lifecycle;
pub mod overlay;

pub use canvas::CanvasSurface;
pub use engine_host::EngineHost;
pub use error::PlatformError;
pub use frames::FrameLoop;
pub use lifecycle::HeroAnimation;
pub use overlay::OverlayLease;

use wasm_bindgen::prelude::*;

/// Module entry: panic hook and console logger
#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"hero-canvas: logger already initialized".into());
    }
}
