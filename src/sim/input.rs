//! Pointer tracking and fire-rate limiting (desktop only)

use glam::Vec2;

/// Tracks the pointer relative to the drawing surface and gates firing
#[derive(Debug, Clone)]
pub struct InputHandler {
    pointer: Vec2,
    held: bool,
    last_fire: Option<f64>,
    fire_rate_limit_ms: f64,
}

impl InputHandler {
    pub fn new(fire_rate_limit_ms: f64) -> Self {
        Self {
            pointer: Vec2::ZERO,
            held: false,
            last_fire: None,
            fire_rate_limit_ms,
        }
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn pointer_moved(&mut self, local: Vec2) {
        self.pointer = local;
    }

    pub fn press(&mut self) {
        self.held = true;
    }

    pub fn release(&mut self) {
        self.held = false;
    }

    /// True at most once per rate-limit window while held; records the shot.
    ///
    /// This is the only fire limiter; callers must not add their own.
    pub fn can_fire(&mut self, now_ms: f64) -> bool {
        if !self.held {
            return false;
        }
        let ready = match self.last_fire {
            None => true,
            Some(last) => now_ms - last >= self.fire_rate_limit_ms,
        };
        if ready {
            self.last_fire = Some(now_ms);
        }
        ready
    }

    pub fn reset(&mut self) {
        self.held = false;
        self.last_fire = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fire_rate_sequence() {
        let mut input = InputHandler::new(150.0);
        input.press();
        let fired: Vec<bool> = [0.0, 50.0, 150.0, 151.0, 300.0]
            .iter()
            .map(|&t| input.can_fire(t))
            .collect();
        assert_eq!(fired, vec![true, false, true, false, true]);
    }

    #[test]
    fn test_released_never_fires() {
        let mut input = InputHandler::new(150.0);
        assert!(!input.can_fire(1000.0));
        input.press();
        input.release();
        assert!(!input.can_fire(2000.0));
    }

    #[test]
    fn test_reset_clears_last_fire() {
        let mut input = InputHandler::new(150.0);
        input.press();
        assert!(input.can_fire(10.0));
        input.reset();
        assert!(!input.is_held());
        input.press();
        assert!(input.can_fire(20.0));
    }

    proptest! {
        #[test]
        fn prop_at_most_one_fire_per_window(
            limit in 1.0f64..500.0,
            steps in proptest::collection::vec(0.0f64..200.0, 1..100),
        ) {
            let mut input = InputHandler::new(limit);
            input.press();
            let mut now = 0.0;
            let mut fires = Vec::new();
            for step in steps {
                now += step;
                if input.can_fire(now) {
                    fires.push(now);
                }
            }
            for pair in fires.windows(2) {
                prop_assert!(pair[1] - pair[0] >= limit);
            }
        }
    }
}
