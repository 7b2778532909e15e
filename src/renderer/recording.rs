//! Headless surface that records draw calls
//!
//! Used by the native smoke binary and by tests to observe what a frame
//! would have drawn without a browser.

use glam::Vec2;

use super::{DrawSurface, Rect, Surface};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    Circle { center: Vec2, radius: f32, color: String, alpha: f32 },
    Text { text: String, pos: Vec2, color: String, alpha: f32 },
    Triangle { points: [Vec2; 3], color: String, alpha: f32 },
}

/// In-memory surface with a configurable on-screen rect
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    rect: Rect,
    buffer: (u32, u32),
    /// Number of times the buffer was reallocated
    pub buffer_resizes: u32,
    /// Draw calls since the last clear
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Surface displayed at `rect` with an unsized (0x0) buffer
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            ..Default::default()
        }
    }

    /// Simulate a layout change of the displayed box
    pub fn set_client_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    pub fn texts(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { .. }))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str, alpha: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: color.to_string(),
            alpha,
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, _font: &str, color: &str, alpha: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            color: color.to_string(),
            alpha,
        });
    }

    fn fill_triangle(&mut self, points: [Vec2; 3], color: &str, alpha: f32) {
        self.commands.push(DrawCommand::Triangle {
            points,
            color: color.to_string(),
            alpha,
        });
    }
}

impl Surface for RecordingSurface {
    fn client_rect(&self) -> Rect {
        self.rect
    }

    fn buffer_size(&self) -> (u32, u32) {
        self.buffer
    }

    fn set_buffer_size(&mut self, width: u32, height: u32) {
        self.buffer = (width, height);
        self.buffer_resizes += 1;
    }
}
