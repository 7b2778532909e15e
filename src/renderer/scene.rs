//! Frame rendering for the simulation
//!
//! Draw order: words, then bullets, then fragments. The rocket is not drawn
//! here; the cursor overlay paints it above page content.

use super::DrawSurface;
use crate::sim::SimState;

/// Clear the surface and draw every active entity
pub fn render_scene<S: DrawSurface + ?Sized>(state: &SimState, surface: &mut S, width: f32, height: f32) {
    surface.clear(width, height);

    for word in state.words.active() {
        word.render(surface);
    }

    if let Some(bullets) = &state.bullets {
        for bullet in bullets.active() {
            bullet.render(surface);
        }
    }

    if let Some(fragments) = &state.fragments {
        for fragment in fragments.active() {
            fragment.render(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::sim::{CapabilityMode, resolve_collisions};
    use glam::Vec2;

    #[test]
    fn test_draw_order_words_bullets_fragments() {
        let mut state =
            SimState::new(CapabilityMode::DesktopInteractive, GameConfig::default(), 4, 800.0, 600.0);
        state.spawn_word(100.0, 100.0);
        state.spawn_word(500.0, 100.0);
        state.rocket = Vec2::new(100.0, 110.0);
        state.fire_bullet();
        resolve_collisions(&mut state);
        state.rocket = Vec2::new(700.0, 500.0);
        state.fire_bullet();

        let mut surface = RecordingSurface::default();
        render_scene(&state, &mut surface, 800.0, 600.0);

        assert!(matches!(surface.commands[0], DrawCommand::Clear { .. }));
        assert!(matches!(surface.commands[1], DrawCommand::Text { .. }));
        assert!(matches!(surface.commands[2], DrawCommand::Circle { radius, .. } if radius == 2.0));
        assert_eq!(surface.texts(), 1);
        assert_eq!(surface.circles(), 1 + state.active_fragments());
    }

    #[test]
    fn test_mobile_draws_words_only() {
        let mut state =
            SimState::new(CapabilityMode::MobileAmbient, GameConfig::default(), 4, 800.0, 600.0);
        state.spawn_word(100.0, 100.0);
        let mut surface = RecordingSurface::default();
        render_scene(&state, &mut surface, 800.0, 600.0);
        assert_eq!(surface.texts(), 1);
        assert_eq!(surface.circles(), 0);
    }
}
