//! Per-frame simulation step
//!
//! Order within one step: fire, words, spawn, bullets, collisions, fragments.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::fragment::Fragment;
use super::pool::{Pool, Poolable};
use super::state::SimState;
use crate::config::GameConfig;

/// Fewest / most fragments thrown per hit
pub const MIN_FRAGMENTS: usize = 3;
pub const MAX_FRAGMENTS_PER_HIT: usize = 6;

/// Advance the simulation by `dt` seconds on a `width` x `height` surface
pub fn tick(state: &mut SimState, dt: f32, now_ms: f64, width: f32, height: f32) {
    if state.pointer_over {
        if let Some(input) = state.input.as_mut() {
            if input.can_fire(now_ms) {
                state.fire_bullet();
            }
        }
    }

    for word in state.words.active_mut() {
        word.update(dt, width, height);
    }

    spawn_words(state, now_ms, width);

    if !state.mode.is_interactive() {
        return;
    }

    if let Some(bullets) = state.bullets.as_mut() {
        for bullet in bullets.active_mut() {
            bullet.update(dt, width, height);
        }
    }

    let hits = resolve_collisions(state);
    if hits > 0 {
        log::debug!("{} word(s) hit", hits);
    }

    if let Some(fragments) = state.fragments.as_mut() {
        for fragment in fragments.active_mut() {
            fragment.update(dt, width, height);
        }
    }
}

/// Scheduled spawn plus the one-time startup burst
fn spawn_words(state: &mut SimState, now_ms: f64, width: f32) {
    if let Some(last) = state.last_word_spawn {
        if now_ms - last < state.config.word_spawn_interval_ms {
            return;
        }
    }

    let y = state.config.word_spawn_y_offset;
    if !state.spawn_word_anywhere(y, width) {
        // Saturated: try again next frame
        return;
    }
    state.last_word_spawn = Some(now_ms);

    if !state.initial_burst_done {
        state.initial_burst_done = true;
        let count = state.config.initial_burst(state.mode);
        let stagger = state.config.burst_stagger;
        for i in 0..count {
            state.spawn_word_anywhere(y - i as f32 * stagger, width);
        }
    }
}

/// Test every active bullet against every active word.
///
/// A hit retires both and throws fragments from the word's position. Each
/// bullet resolves at most one word. Returns the number of hits.
pub fn resolve_collisions(state: &mut SimState) -> usize {
    let (Some(bullets), Some(fragments)) = (state.bullets.as_mut(), state.fragments.as_mut())
    else {
        return 0;
    };

    let mut hits = 0;
    for bullet in bullets.active_mut() {
        let bounds = bullet.collision_bounds();
        let Some(word) = state
            .words
            .active_mut()
            .find(|word| word.collision_bounds().overlaps(&bounds))
        else {
            continue;
        };

        let origin = word.pos;
        bullet.reset();
        word.reset();
        burst_fragments(fragments, origin, &state.config, &mut state.rng);
        hits += 1;
    }

    state.hits += hits as u64;
    hits
}

/// Throw 3-6 fragments evenly around a full turn with some jitter.
/// Fragments beyond the pool's free capacity are dropped.
fn burst_fragments(pool: &mut Pool<Fragment>, origin: Vec2, config: &GameConfig, rng: &mut Pcg32) -> usize {
    let count = rng.random_range(MIN_FRAGMENTS..=MAX_FRAGMENTS_PER_HIT);
    let mut spawned = 0;
    for i in 0..count {
        let angle = TAU * i as f32 / count as f32 + rng.random::<f32>() * 0.5;
        let Some(fragment) = pool.claim() else {
            break;
        };
        fragment.init(origin, angle, config.fragment_speed, config.fragment_lifetime_ms, rng);
        spawned += 1;
    }
    spawned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::CapabilityMode;

    const W: f32 = 800.0;
    const H: f32 = 600.0;

    fn desktop() -> SimState {
        SimState::new(CapabilityMode::DesktopInteractive, GameConfig::default(), 12345, W, H)
    }

    fn mobile() -> SimState {
        SimState::new(CapabilityMode::MobileAmbient, GameConfig::default(), 12345, W, H)
    }

    #[test]
    fn test_first_tick_spawns_word_and_burst() {
        let mut state = desktop();
        tick(&mut state, 0.016, 0.0, W, H);
        assert!(state.initial_burst_done);
        // 1 scheduled + 8 burst
        assert_eq!(state.active_words(), 9);
        assert_eq!(state.last_word_spawn, Some(0.0));

        // Burst happens only once
        tick(&mut state, 0.016, 2000.0, W, H);
        assert_eq!(state.active_words(), 10);
    }

    #[test]
    fn test_mobile_burst_is_smaller() {
        let mut state = mobile();
        tick(&mut state, 0.016, 0.0, W, H);
        assert_eq!(state.active_words(), 6);
    }

    #[test]
    fn test_spawn_respects_interval() {
        let mut state = mobile();
        tick(&mut state, 0.016, 0.0, W, H);
        let after_burst = state.active_words();
        tick(&mut state, 0.016, 1999.0, W, H);
        assert_eq!(state.active_words(), after_burst);
        tick(&mut state, 0.016, 2000.0, W, H);
        assert_eq!(state.active_words(), after_burst + 1);
    }

    #[test]
    fn test_burst_words_are_staggered() {
        let mut state = mobile();
        tick(&mut state, 0.0, 0.0, W, H);
        let mut ys: Vec<f32> = state.words.active().map(|w| w.pos.y).collect();
        ys.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_eq!(ys, vec![-30.0, -30.0, -110.0, -190.0, -270.0, -350.0]);
    }

    #[test]
    fn test_single_collision_spawns_fragments() {
        let mut state = desktop();
        assert!(state.spawn_word(200.0, 200.0));
        state.rocket = Vec2::new(205.0, 210.0);
        assert!(state.fire_bullet());

        let hits = resolve_collisions(&mut state);
        assert_eq!(hits, 1);
        assert_eq!(state.active_words(), 0);
        assert_eq!(state.active_bullets(), 0);
        let fragments = state.active_fragments();
        assert!((MIN_FRAGMENTS..=MAX_FRAGMENTS_PER_HIT).contains(&fragments));
        assert!(
            state
                .fragments
                .as_ref()
                .unwrap()
                .active()
                .all(|f| f.pos == Vec2::new(200.0, 200.0))
        );

        // Nothing left to collide
        assert_eq!(resolve_collisions(&mut state), 0);
    }

    #[test]
    fn test_one_bullet_destroys_one_word() {
        let mut state = desktop();
        state.spawn_word(100.0, 100.0);
        state.spawn_word(105.0, 100.0);
        state.rocket = Vec2::new(102.0, 100.0);
        state.fire_bullet();

        assert_eq!(resolve_collisions(&mut state), 1);
        assert_eq!(state.active_words(), 1);
    }

    #[test]
    fn test_miss_keeps_both_alive() {
        let mut state = desktop();
        state.spawn_word(100.0, 100.0);
        state.rocket = Vec2::new(400.0, 500.0);
        state.fire_bullet();
        assert_eq!(resolve_collisions(&mut state), 0);
        assert_eq!(state.active_words(), 1);
        assert_eq!(state.active_bullets(), 1);
    }

    #[test]
    fn test_fragment_pool_saturation_is_silent() {
        let mut config = GameConfig::default();
        config.max_fragments = 2;
        let mut state = SimState::new(CapabilityMode::DesktopInteractive, config, 5, W, H);
        state.spawn_word(100.0, 100.0);
        state.rocket = Vec2::new(100.0, 100.0);
        state.fire_bullet();
        assert_eq!(resolve_collisions(&mut state), 1);
        assert_eq!(state.active_fragments(), 2);
    }

    #[test]
    fn test_fires_only_over_surface_while_held() {
        let mut state = desktop();
        state.last_word_spawn = Some(0.0);
        state.input.as_mut().unwrap().press();

        tick(&mut state, 0.001, 10.0, W, H);
        assert_eq!(state.active_bullets(), 0);

        state.pointer_over = true;
        tick(&mut state, 0.001, 20.0, W, H);
        assert_eq!(state.active_bullets(), 1);

        // Rate limited
        tick(&mut state, 0.001, 100.0, W, H);
        assert_eq!(state.active_bullets(), 1);
        tick(&mut state, 0.001, 170.0, W, H);
        assert_eq!(state.active_bullets(), 2);
    }

    #[test]
    fn test_mobile_never_simulates_projectiles() {
        let mut state = mobile();
        state.pointer_over = true;
        for i in 0..200 {
            tick(&mut state, 0.016, i as f64 * 16.0, W, H);
        }
        assert!(state.bullets.is_none());
        assert!(state.fragments.is_none());
        assert!(state.input.is_none());
        assert_eq!(state.hits, 0);
    }

    #[test]
    fn test_pools_never_exceed_capacity_under_pressure() {
        let mut config = GameConfig::default();
        config.word_spawn_interval_ms = 1.0;
        config.fire_rate_limit_ms = 0.0;
        let mut state = SimState::new(CapabilityMode::DesktopInteractive, config, 77, W, H);
        state.pointer_over = true;
        state.input.as_mut().unwrap().press();

        for i in 0..2000 {
            state.rocket = Vec2::new((i * 37 % 800) as f32, 550.0);
            tick(&mut state, 0.033, i as f64 * 5.0, W, H);
            assert!(state.active_words() <= 18);
            assert!(state.active_bullets() <= 12);
            assert!(state.active_fragments() <= 30);
        }
        assert!(state.hits > 0);
    }
}
