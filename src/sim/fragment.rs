//! Debris thrown out when a word is hit

use glam::Vec2;
use rand::Rng;

use super::pool::Poolable;
use crate::consts::{COLOR_RED, FRAGMENT_BOUNDS_PADDING, FRAGMENT_OPACITY, FRAGMENT_RADIUS};
use crate::renderer::DrawSurface;

#[derive(Debug, Clone, Default)]
pub struct Fragment {
    pub pos: Vec2,
    pub vel: Vec2,
    pub active: bool,
    /// Elapsed lifetime (ms)
    pub lifetime: f32,
    /// Lifetime at which the fragment retires (ms)
    pub max_lifetime: f32,
}

impl Fragment {
    /// Launch along `angle`; each axis gets its own 50-100% speed factor
    pub fn init<R: Rng>(&mut self, origin: Vec2, angle: f32, speed: f32, max_lifetime: f32, rng: &mut R) {
        self.pos = origin;
        self.vel = Vec2::new(
            angle.cos() * speed * (0.5 + rng.random::<f32>() * 0.5),
            angle.sin() * speed * (0.5 + rng.random::<f32>() * 0.5),
        );
        self.lifetime = 0.0;
        self.max_lifetime = max_lifetime;
        self.active = true;
    }

    pub fn update(&mut self, dt: f32, width: f32, height: f32) {
        if !self.active {
            return;
        }

        self.pos += self.vel * dt;
        self.lifetime += dt * 1000.0;

        let pad = FRAGMENT_BOUNDS_PADDING;
        let out_of_bounds = self.pos.x < -pad
            || self.pos.x > width + pad
            || self.pos.y < -pad
            || self.pos.y > height + pad;

        if self.lifetime >= self.max_lifetime || out_of_bounds {
            self.active = false;
        }
    }

    /// Fades out linearly over its lifetime
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        if !self.active {
            return;
        }
        let alpha = FRAGMENT_OPACITY * (1.0 - self.lifetime / self.max_lifetime).max(0.0);
        surface.fill_circle(self.pos, FRAGMENT_RADIUS, COLOR_RED, alpha);
    }
}

impl Poolable for Fragment {
    fn is_active(&self) -> bool {
        self.active
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
