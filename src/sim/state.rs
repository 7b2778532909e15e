//! Simulation state and entity pools
//!
//! Everything the frame step mutates lives here. Pools are sized once from
//! the capability mode; desktop-only pools are never allocated on mobile.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::bullet::Bullet;
use super::fragment::Fragment;
use super::input::InputHandler;
use super::mode::CapabilityMode;
use super::palette;
use super::pool::Pool;
use super::word::Word;
use crate::config::GameConfig;
use crate::consts::{ROCKET_BOTTOM_OFFSET, ROCKET_FALLBACK_HEIGHT, ROCKET_FALLBACK_WIDTH};

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    pub mode: CapabilityMode,
    pub config: GameConfig,
    pub words: Pool<Word>,
    /// Desktop only
    pub bullets: Option<Pool<Bullet>>,
    /// Desktop only
    pub fragments: Option<Pool<Fragment>>,
    /// Desktop only
    pub input: Option<InputHandler>,
    /// Rocket aim point / firing origin (surface coordinates)
    pub rocket: Vec2,
    /// Whether the pointer is currently over the drawing surface
    pub pointer_over: bool,
    /// Time of the last scheduled word spawn (ms); `None` spawns immediately
    pub last_word_spawn: Option<f64>,
    /// Set once the startup burst of words has been spawned
    pub initial_burst_done: bool,
    /// Total bullet/word hits so far
    pub hits: u64,
    pub(crate) rng: Pcg32,
}

impl SimState {
    /// Allocate pools for `mode` on a surface of the given buffer size
    pub fn new(mode: CapabilityMode, config: GameConfig, seed: u64, width: f32, height: f32) -> Self {
        let words = Pool::new(config.max_words(mode));
        let (bullets, fragments, input) = if mode.is_interactive() {
            (
                Some(Pool::new(config.max_bullets)),
                Some(Pool::new(config.max_fragments)),
                Some(InputHandler::new(config.fire_rate_limit_ms)),
            )
        } else {
            (None, None, None)
        };

        // Buffer may still be unsized here; resize() re-centers later
        let rocket = Vec2::new(
            width.max(ROCKET_FALLBACK_WIDTH) / 2.0,
            height.max(ROCKET_FALLBACK_HEIGHT) - ROCKET_BOTTOM_OFFSET,
        );

        Self {
            mode,
            config,
            words,
            bullets,
            fragments,
            input,
            rocket,
            pointer_over: false,
            last_word_spawn: None,
            initial_burst_done: false,
            hits: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Put the rocket back at bottom-center
    pub fn recenter_rocket(&mut self, width: f32, height: f32) {
        self.rocket = Vec2::new(width / 2.0, height - ROCKET_BOTTOM_OFFSET);
    }

    /// Arm the first free word slot at `(x, y)` with a random token.
    /// Returns false when the pool is saturated.
    pub fn spawn_word(&mut self, x: f32, y: f32) -> bool {
        let Some(word) = self.words.claim() else {
            return false;
        };
        let text = palette::random_token(&mut self.rng);
        word.init(
            x,
            y,
            text,
            self.config.word_fall_speed,
            self.config.word_horizontal_drift,
            self.config.word_collision_radius,
            &mut self.rng,
        );
        true
    }

    /// Spawn a word at a random x in `[0, width)`
    pub fn spawn_word_anywhere(&mut self, y: f32, width: f32) -> bool {
        let x = self.rng.random::<f32>() * width;
        self.spawn_word(x, y)
    }

    /// Launch a bullet from the rocket. Dropped if the pool is saturated.
    pub fn fire_bullet(&mut self) -> bool {
        let Some(bullet) = self.bullets.as_mut().and_then(Pool::claim) else {
            return false;
        };
        bullet.init(self.rocket, self.config.bullet_speed, self.config.bullet_radius);
        true
    }

    pub fn active_words(&self) -> usize {
        self.words.active_count()
    }

    pub fn active_bullets(&self) -> usize {
        self.bullets.as_ref().map_or(0, Pool::active_count)
    }

    pub fn active_fragments(&self) -> usize {
        self.fragments.as_ref().map_or(0, Pool::active_count)
    }
}
