//! `DrawSurface` backed by a 2D canvas context

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::PlatformError;
use crate::renderer::{DrawSurface, Rect, Surface};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, PlatformError> {
        let context = canvas
            .get_context("2d")?
            .ok_or(PlatformError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| PlatformError::ContextUnavailable)?;
        Ok(Self { canvas, context })
    }

    /// Set fill color and opacity for one shape; pair with `restore()`
    fn begin_fill(&self, color: &str, alpha: f32) {
        self.context.save();
        self.context.set_global_alpha(alpha as f64);
        self.context.set_fill_style_str(color);
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.context.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str, alpha: f32) {
        self.begin_fill(color, alpha);
        self.context.begin_path();
        match self.context.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU) {
            Ok(()) => self.context.fill(),
            Err(err) => log::warn!("arc failed: {:?}", err),
        }
        self.context.restore();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str, alpha: f32) {
        self.begin_fill(color, alpha);
        self.context.set_font(font);
        self.context.set_text_align("center");
        self.context.set_text_baseline("middle");
        if let Err(err) = self.context.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("fillText failed: {:?}", err);
        }
        self.context.restore();
    }

    fn fill_triangle(&mut self, points: [Vec2; 3], color: &str, alpha: f32) {
        self.begin_fill(color, alpha);
        self.context.begin_path();
        self.context.move_to(points[0].x as f64, points[0].y as f64);
        self.context.line_to(points[1].x as f64, points[1].y as f64);
        self.context.line_to(points[2].x as f64, points[2].y as f64);
        self.context.close_path();
        self.context.fill();
        self.context.restore();
    }
}

impl Surface for CanvasSurface {
    fn client_rect(&self) -> Rect {
        let rect = self.canvas.get_bounding_client_rect();
        Rect::new(
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        )
    }

    fn buffer_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn set_buffer_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}
