//! Projectile fired from the rocket

use glam::Vec2;

use super::collision::Circle;
use super::pool::Poolable;
use crate::consts::{BULLET_EXIT_Y, BULLET_OPACITY, COLOR_RED};
use crate::renderer::DrawSurface;

#[derive(Debug, Clone, Default)]
pub struct Bullet {
    pub pos: Vec2,
    pub active: bool,
    /// Rise speed (pixels/second)
    pub speed: f32,
    pub radius: f32,
}

impl Bullet {
    pub fn init(&mut self, origin: Vec2, speed: f32, radius: f32) {
        self.pos = origin;
        self.speed = speed;
        self.radius = radius;
        self.active = true;
    }

    /// Move straight up; retire once above the visible area
    pub fn update(&mut self, dt: f32, _width: f32, _height: f32) {
        if !self.active {
            return;
        }

        self.pos.y -= self.speed * dt;

        if self.pos.y < BULLET_EXIT_Y {
            self.active = false;
        }
    }

    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        if !self.active {
            return;
        }
        surface.fill_circle(self.pos, self.radius, COLOR_RED, BULLET_OPACITY);
    }

    pub fn collision_bounds(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }
}

impl Poolable for Bullet {
    fn is_active(&self) -> bool {
        self.active
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
