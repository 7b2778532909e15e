//! Hero Canvas - falling-words background animation for a portfolio hero
//!
//! Core modules:
//! - `sim`: Simulation (entity pools, spawn policy, collisions)
//! - `engine`: Frame stepping and lifecycle around a drawing surface
//! - `overlay`: Pointer-following rocket marker drawn above the page
//! - `renderer`: Drawing surface abstraction
//! - `config`: Tuning values (pool sizes, speeds, timings)
//! - `platform`: Browser bindings (wasm32 only)

pub mod config;
pub mod engine;
pub mod overlay;
pub mod renderer;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod platform;

pub use config::{ConfigError, GameConfig};
pub use engine::GameEngine;
pub use overlay::CursorOverlay;
pub use sim::CapabilityMode;

/// Fixed engine constants (visual theme and frame limits)
pub mod consts {
    /// Largest simulation step per frame (~30 fps). Long pauses such as a
    /// backgrounded tab resuming never move entities further than this.
    pub const MAX_FRAME_DT: f32 = 1.0 / 30.0;

    /// Minimum viewport width for the interactive desktop mode
    pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

    /// Words deactivate once this far below the bottom edge
    pub const WORD_EXIT_PADDING: f32 = 50.0;
    /// Bullets deactivate once above this y
    pub const BULLET_EXIT_Y: f32 = -10.0;
    /// Fragments deactivate outside the surface grown by this margin
    pub const FRAGMENT_BOUNDS_PADDING: f32 = 50.0;
    /// Rocket rest position above the bottom edge
    pub const ROCKET_BOTTOM_OFFSET: f32 = 40.0;
    /// Fallback surface size used for the initial rocket position
    pub const ROCKET_FALLBACK_WIDTH: f32 = 400.0;
    pub const ROCKET_FALLBACK_HEIGHT: f32 = 600.0;

    /// Delay before retrying init on a zero-size canvas (ms)
    pub const INIT_RETRY_DELAY_MS: u32 = 200;

    // Opacity (subtle background effect)
    pub const WORD_OPACITY: f32 = 0.25;
    pub const BULLET_OPACITY: f32 = 0.40;
    pub const FRAGMENT_OPACITY: f32 = 0.25;
    pub const ROCKET_OPACITY: f32 = 0.50;

    // Theme colors (red-black)
    pub const COLOR_RED: &str = "#ef4444";
    pub const COLOR_RED_DARK: &str = "#dc2626";
    pub const COLOR_WHITE: &str = "#f3f4f6";
    pub const COLOR_GRAY: &str = "#e5e7eb";
    pub const COLOR_GRAY_LIGHT: &str = "#d1d5db";

    /// Word font (size + family), precomputed so rendering never formats
    pub const WORD_FONT: &str = "18px monospace";
    /// Fragment dot radius
    pub const FRAGMENT_RADIUS: f32 = 2.0;
}

/// Clamp a point into the `[0, width] x [0, height]` rectangle
#[inline]
pub fn clamp_to_bounds(x: f32, y: f32, width: f32, height: f32) -> glam::Vec2 {
    glam::Vec2::new(x.clamp(0.0, width.max(0.0)), y.clamp(0.0, height.max(0.0)))
}
