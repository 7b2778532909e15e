//! Tuning configuration
//!
//! Defaults reproduce the reference feel of the animation. A host may
//! override any subset of fields with a JSON object at construction time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::CapabilityMode;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value: {0}")]
    Invalid(&'static str),
}

/// Engine tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Pool limits ===
    /// Bullet pool size (desktop only)
    pub max_bullets: usize,
    /// Word pool size in desktop mode
    pub max_words_desktop: usize,
    /// Fragment pool size (desktop only)
    pub max_fragments: usize,
    /// Word pool size in mobile mode
    pub max_words_mobile: usize,

    // === Motion ===
    /// Word fall speed (pixels/second)
    pub word_fall_speed: f32,
    /// Maximum horizontal drift either way (pixels/second)
    pub word_horizontal_drift: f32,
    /// Bullet rise speed (pixels/second)
    pub bullet_speed: f32,
    /// Base fragment speed (pixels/second)
    pub fragment_speed: f32,
    /// Fragment lifetime (milliseconds)
    pub fragment_lifetime_ms: f32,

    // === Input ===
    /// Minimum time between shots (milliseconds)
    pub fire_rate_limit_ms: f64,

    // === Collision ===
    pub word_collision_radius: f32,
    pub bullet_radius: f32,

    // === Spawning ===
    /// Minimum time between scheduled word spawns (milliseconds)
    pub word_spawn_interval_ms: f64,
    /// Spawn height (negative = above the visible area)
    pub word_spawn_y_offset: f32,
    /// Extra words spawned once right after the first spawn
    pub initial_burst_desktop: usize,
    pub initial_burst_mobile: usize,
    /// Vertical spacing between burst words (pixels)
    pub burst_stagger: f32,

    /// Rocket marker size (pixels)
    pub rocket_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_bullets: 12,
            max_words_desktop: 18,
            max_fragments: 30,
            max_words_mobile: 8,

            word_fall_speed: 30.0,
            word_horizontal_drift: 8.0,
            bullet_speed: 400.0,
            fragment_speed: 60.0,
            fragment_lifetime_ms: 600.0,

            fire_rate_limit_ms: 150.0,

            word_collision_radius: 25.0,
            bullet_radius: 2.0,

            word_spawn_interval_ms: 2000.0,
            word_spawn_y_offset: -30.0,
            initial_burst_desktop: 8,
            initial_burst_mobile: 5,
            burst_stagger: 80.0,

            rocket_size: 16.0,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON object over the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall or break the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_words_desktop == 0 || self.max_words_mobile == 0 {
            return Err(ConfigError::Invalid("word pool capacity must be positive"));
        }
        if self.max_bullets == 0 || self.max_fragments == 0 {
            return Err(ConfigError::Invalid("bullet and fragment pools must be positive"));
        }
        if !(self.word_spawn_interval_ms > 0.0) {
            return Err(ConfigError::Invalid("word_spawn_interval_ms must be positive"));
        }
        if !(self.fragment_lifetime_ms > 0.0) {
            return Err(ConfigError::Invalid("fragment_lifetime_ms must be positive"));
        }
        if self.fire_rate_limit_ms < 0.0 {
            return Err(ConfigError::Invalid("fire_rate_limit_ms must not be negative"));
        }
        if self.word_fall_speed < 0.0 || self.bullet_speed <= 0.0 {
            return Err(ConfigError::Invalid("speeds must be positive"));
        }
        Ok(())
    }

    /// Word pool capacity for a mode
    pub fn max_words(&self, mode: CapabilityMode) -> usize {
        match mode {
            CapabilityMode::DesktopInteractive => self.max_words_desktop,
            CapabilityMode::MobileAmbient => self.max_words_mobile,
        }
    }

    /// Size of the one-time startup burst for a mode
    pub fn initial_burst(&self, mode: CapabilityMode) -> usize {
        match mode {
            CapabilityMode::DesktopInteractive => self.initial_burst_desktop,
            CapabilityMode::MobileAmbient => self.initial_burst_mobile,
        }
    }
}
