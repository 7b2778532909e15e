//! Pointer-following rocket marker
//!
//! State for the page-wide cursor overlay. There is one overlay per page,
//! shared by every running animation. The browser side (`platform::overlay`)
//! owns the fixed full-viewport canvas and the body cursor style; this type
//! counts owners, tracks the pointer and keeps the saved cursor value so
//! that restoring it is exact.

use glam::Vec2;

use crate::consts::{COLOR_RED, ROCKET_OPACITY};
use crate::renderer::DrawSurface;

#[derive(Debug, Clone, Default)]
pub struct CursorOverlay {
    pointer: Vec2,
    size: f32,
    owners: usize,
    /// Inline `cursor` style of `body` before the first owner ("" when unset)
    saved_cursor: Option<String>,
}

impl CursorOverlay {
    pub fn is_active(&self) -> bool {
        self.owners > 0
    }

    pub fn owners(&self) -> usize {
        self.owners
    }

    /// Add an owner. Only the first owner reads and saves the current
    /// cursor style; returns true for it, and the caller then hides the
    /// native cursor.
    pub fn acquire<F>(&mut self, marker_size: f32, read_cursor: F) -> bool
    where
        F: FnOnce() -> String,
    {
        self.owners += 1;
        if self.owners > 1 {
            return false;
        }
        self.size = marker_size;
        self.saved_cursor = Some(read_cursor());
        true
    }

    /// Drop an owner. The last one gets the saved cursor style back, exactly
    /// once. Releasing with no owners is a no-op.
    pub fn release(&mut self) -> Option<String> {
        if self.owners == 0 {
            return None;
        }
        self.owners -= 1;
        if self.owners > 0 {
            return None;
        }
        self.saved_cursor.take()
    }

    /// Window-relative pointer position
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Upward triangle: apex `size` above the pointer, base centered on it
    pub fn marker(&self) -> [Vec2; 3] {
        let Vec2 { x, y } = self.pointer;
        let half = self.size / 2.0;
        [
            Vec2::new(x, y - self.size),
            Vec2::new(x - half, y),
            Vec2::new(x + half, y),
        ]
    }

    /// Clear and draw the marker. Draws nothing while inactive.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S, width: f32, height: f32) {
        if !self.is_active() {
            return;
        }
        surface.clear(width, height);
        surface.fill_triangle(self.marker(), COLOR_RED, ROCKET_OPACITY);
    }
}
