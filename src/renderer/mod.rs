//! Drawing surface abstraction
//!
//! Entities draw through [`DrawSurface`] so the simulation never touches the
//! DOM. The browser implementation wraps a `CanvasRenderingContext2d`
//! (`platform::canvas`); [`RecordingSurface`] captures draw calls headlessly.

pub mod recording;
pub mod scene;

pub use recording::{DrawCommand, RecordingSurface};
pub use scene::render_scene;

use glam::Vec2;

/// Immediate-mode 2D drawing primitives used by the engine and overlay
pub trait DrawSurface {
    /// Clear the whole drawing buffer to transparent
    fn clear(&mut self, width: f32, height: f32);
    /// Filled circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str, alpha: f32);
    /// Text centered on `pos` (both axes)
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str, alpha: f32);
    /// Filled triangle
    fn fill_triangle(&mut self, points: [Vec2; 3], color: &str, alpha: f32);
}

/// On-screen box of a surface in client (viewport) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Convert a client point into rect-local coordinates
    #[inline]
    pub fn to_local(&self, client_x: f32, client_y: f32) -> Vec2 {
        Vec2::new(client_x - self.left, client_y - self.top)
    }

    /// Whether a rect-local point lies inside (edges inclusive)
    #[inline]
    pub fn contains_local(&self, local: Vec2) -> bool {
        local.x >= 0.0 && local.x <= self.width && local.y >= 0.0 && local.y <= self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A drawing surface the engine can measure and resize
pub trait Surface: DrawSurface {
    /// Displayed size and position (CSS pixels)
    fn client_rect(&self) -> Rect;
    /// Current drawing-buffer dimensions
    fn buffer_size(&self) -> (u32, u32);
    /// Reallocate the drawing buffer
    fn set_buffer_size(&mut self, width: u32, height: u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_local_edges() {
        let rect = Rect::new(100.0, 50.0, 200.0, 100.0);
        assert!(rect.contains_local(rect.to_local(100.0, 50.0)));
        assert!(rect.contains_local(rect.to_local(300.0, 150.0)));
        assert!(!rect.contains_local(rect.to_local(99.0, 60.0)));
        assert!(!rect.contains_local(rect.to_local(150.0, 151.0)));
    }

    #[test]
    fn test_rect_is_empty() {
        assert!(Rect::default().is_empty());
        assert!(Rect::new(0.0, 0.0, 10.0, 0.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, 10.0, 10.0).is_empty());
    }
}
