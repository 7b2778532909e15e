//! Falling word entity

use glam::Vec2;
use rand::Rng;

use super::collision::Circle;
use super::palette;
use super::pool::Poolable;
use crate::consts::{COLOR_WHITE, WORD_EXIT_PADDING, WORD_FONT, WORD_OPACITY};
use crate::renderer::DrawSurface;

/// A token drifting down the hero background
#[derive(Debug, Clone)]
pub struct Word {
    pub pos: Vec2,
    pub text: &'static str,
    pub active: bool,
    /// Horizontal drift (pixels/second)
    pub drift: f32,
    /// Fall speed (pixels/second)
    pub fall_speed: f32,
    pub radius: f32,
    color: &'static str,
}

impl Default for Word {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            text: "",
            active: false,
            drift: 0.0,
            fall_speed: 0.0,
            radius: 0.0,
            color: COLOR_WHITE,
        }
    }
}

impl Word {
    /// Arm this slot at `(x, y)` with a random drift in `±max_drift`
    #[allow(clippy::too_many_arguments)]
    pub fn init<R: Rng>(
        &mut self,
        x: f32,
        y: f32,
        text: &'static str,
        fall_speed: f32,
        max_drift: f32,
        radius: f32,
        rng: &mut R,
    ) {
        self.pos = Vec2::new(x, y);
        self.text = text;
        self.active = true;
        self.fall_speed = fall_speed;
        self.radius = radius;
        self.drift = (rng.random::<f32>() - 0.5) * 2.0 * max_drift;
        self.color = palette::color_for(text, rng);
    }

    pub fn color(&self) -> &'static str {
        self.color
    }

    /// Fall, drift, wrap horizontally and retire below the bottom edge
    pub fn update(&mut self, dt: f32, width: f32, height: f32) {
        if !self.active {
            return;
        }

        self.pos.y += self.fall_speed * dt;
        self.pos.x += self.drift * dt;

        if self.pos.x < 0.0 {
            self.pos.x = width;
        } else if self.pos.x > width {
            self.pos.x = 0.0;
        }

        if self.pos.y > height + WORD_EXIT_PADDING {
            self.active = false;
        }
    }

    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        if !self.active {
            return;
        }
        surface.fill_text(self.text, self.pos, WORD_FONT, self.color, WORD_OPACITY);
    }

    pub fn collision_bounds(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }
}

impl Poolable for Word {
    fn is_active(&self) -> bool {
        self.active
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
