//! Game engine: lifecycle and frame stepping around a drawing surface
//!
//! The engine is host-agnostic. It never schedules frames or registers
//! listeners itself; the browser host (`platform::engine_host`) forwards
//! animation frames, pointer and visibility events, and uses the return
//! values of [`GameEngine::start`] / [`GameEngine::frame`] to decide whether
//! to schedule another frame.
//!
//! A missing or zero-size surface is never an error: every operation
//! degrades to a no-op.

use glam::Vec2;

use crate::clamp_to_bounds;
use crate::config::GameConfig;
use crate::consts::MAX_FRAME_DT;
use crate::renderer::{Surface, render_scene};
use crate::sim::{CapabilityMode, SimState, tick};

/// Drives one [`SimState`] on one surface
pub struct GameEngine<S: Surface> {
    config: GameConfig,
    seed: u64,
    mode: CapabilityMode,
    surface: Option<S>,
    state: Option<SimState>,
    running: bool,
    visible: bool,
    last_time: f64,
}

impl<S: Surface> GameEngine<S> {
    /// Create an engine with nothing bound yet
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            mode: CapabilityMode::MobileAmbient,
            surface: None,
            state: None,
            running: false,
            visible: true,
            last_time: 0.0,
        }
    }

    /// Bind a surface and allocate pools for `mode`
    pub fn init(&mut self, surface: S, mode: CapabilityMode) {
        let (width, height) = surface.buffer_size();
        self.mode = mode;
        self.state = Some(SimState::new(
            mode,
            self.config.clone(),
            self.seed,
            width as f32,
            height as f32,
        ));
        self.surface = Some(surface);
        log::info!("Engine initialized ({})", mode.as_str());
    }

    pub fn mode(&self) -> CapabilityMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn state(&self) -> Option<&SimState> {
        self.state.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut SimState> {
        self.state.as_mut()
    }

    /// Begin running. Returns true when the host should schedule a frame.
    ///
    /// Refuses while already running, unbound, or when the surface has no
    /// displayed size.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.running || self.surface.is_none() {
            return false;
        }

        self.resize();

        let Some((width, height)) = self.surface.as_ref().map(Surface::buffer_size) else {
            return false;
        };
        if width == 0 || height == 0 || self.client_rect_is_empty() {
            log::warn!("Surface has zero size, not starting");
            return false;
        }

        self.running = true;
        self.last_time = now_ms;
        log::info!("Frame loop started ({}x{})", width, height);
        true
    }

    /// Stop running; the host cancels its pending frame. Idempotent.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Match the drawing buffer to the displayed size.
    ///
    /// Reallocates only on change; in desktop mode a change also re-centers
    /// the rocket. Returns whether anything changed.
    pub fn resize(&mut self) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };

        let rect = surface.client_rect();
        let width = rect.width.round().max(1.0) as u32;
        let height = rect.height.round().max(1.0) as u32;

        if surface.buffer_size() == (width, height) {
            return false;
        }
        surface.set_buffer_size(width, height);

        if self.mode.is_interactive() {
            if let Some(state) = self.state.as_mut() {
                state.recenter_rocket(width as f32, height as f32);
            }
        }
        true
    }

    /// Page visibility changed. Hidden pauses and drops any held button,
    /// since its release may never arrive; visible tries to restart.
    /// Returns true when the host should schedule a frame.
    pub fn visibility_changed(&mut self, visible: bool, now_ms: f64) -> bool {
        self.visible = visible;
        if !visible {
            self.pause();
            if let Some(input) = self.state.as_mut().and_then(|s| s.input.as_mut()) {
                input.reset();
            }
            return false;
        }
        self.start(now_ms)
    }

    /// One animation frame. Returns true when the host should reschedule.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if !self.running || !self.visible {
            return false;
        }
        let (Some(surface), Some(state)) = (self.surface.as_mut(), self.state.as_mut()) else {
            return false;
        };

        let dt = (((now_ms - self.last_time) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT);
        self.last_time = now_ms;

        let (width, height) = surface.buffer_size();
        let (width, height) = (width as f32, height as f32);
        if width <= 0.0 || height <= 0.0 {
            return true;
        }

        tick(state, dt, now_ms, width, height);
        render_scene(state, surface, width, height);
        true
    }

    /// Pointer moved (client coordinates). Desktop only.
    ///
    /// Over the surface the rocket follows the pointer; outside it the
    /// rocket is projected onto the surface edge.
    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) {
        let (Some(surface), Some(state)) = (self.surface.as_ref(), self.state.as_mut()) else {
            return;
        };
        let Some(input) = state.input.as_mut() else {
            return;
        };

        let rect = surface.client_rect();
        let local = rect.to_local(client_x, client_y);
        state.pointer_over = rect.contains_local(local);

        if state.pointer_over {
            input.pointer_moved(local);
            state.rocket = input.pointer();
        } else {
            state.rocket = clamp_to_bounds(local.x, local.y, rect.width, rect.height);
        }
    }

    /// Primary button pressed; only arms firing over the surface
    pub fn pointer_down(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        if !state.pointer_over {
            return;
        }
        if let Some(input) = state.input.as_mut() {
            input.press();
        }
    }

    pub fn pointer_up(&mut self) {
        if let Some(input) = self.state.as_mut().and_then(|s| s.input.as_mut()) {
            input.release();
        }
    }

    /// Current rocket position, if bound
    pub fn rocket(&self) -> Option<Vec2> {
        self.state.as_ref().map(|s| s.rocket)
    }

    /// Stop and release the surface, pools and input. Idempotent.
    pub fn destroy(&mut self) {
        self.pause();
        if self.surface.take().is_some() {
            log::info!("Engine destroyed");
        }
        self.state = None;
    }

    fn client_rect_is_empty(&self) -> bool {
        self.surface
            .as_ref()
            .is_none_or(|s| s.client_rect().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{RecordingSurface, Rect};

    fn engine(mode: CapabilityMode, rect: Rect) -> GameEngine<RecordingSurface> {
        let mut engine = GameEngine::new(GameConfig::default(), 42);
        engine.init(RecordingSurface::new(rect), mode);
        engine
    }

    #[test]
    fn test_start_sizes_buffer_and_runs() {
        let mut engine = engine(CapabilityMode::DesktopInteractive, Rect::new(0.0, 0.0, 1280.0, 720.0));
        assert!(engine.start(0.0));
        assert!(engine.is_running());
        assert_eq!(engine.surface().unwrap().buffer_size(), (1280, 720));
        assert_eq!(engine.rocket(), Some(Vec2::new(640.0, 680.0)));

        // Already running
        assert!(!engine.start(10.0));
    }

    #[test]
    fn test_start_refuses_zero_size() {
        let mut engine = engine(CapabilityMode::MobileAmbient, Rect::new(0.0, 0.0, 0.0, 0.0));
        assert!(!engine.start(0.0));
        assert!(!engine.is_running());
        assert!(!engine.frame(16.0));
    }

    #[test]
    fn test_unbound_engine_is_inert() {
        let mut engine: GameEngine<RecordingSurface> = GameEngine::new(GameConfig::default(), 1);
        assert!(!engine.start(0.0));
        assert!(!engine.resize());
        assert!(!engine.frame(16.0));
        engine.pointer_move(10.0, 10.0);
        engine.pointer_down();
        engine.pointer_up();
        engine.destroy();
    }

    #[test]
    fn test_resize_is_idempotent() {
        let mut engine = engine(CapabilityMode::DesktopInteractive, Rect::new(0.0, 0.0, 800.0, 600.0));
        assert!(engine.resize());
        assert_eq!(engine.rocket(), Some(Vec2::new(400.0, 560.0)));

        engine.pointer_move(100.0, 100.0);
        assert!(!engine.resize());
        assert_eq!(engine.surface().unwrap().buffer_resizes, 1);
        assert_eq!(engine.rocket(), Some(Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn test_resize_follows_layout_change() {
        let mut engine = engine(CapabilityMode::MobileAmbient, Rect::new(0.0, 0.0, 800.0, 600.0));
        engine.resize();
        let rocket = engine.rocket();

        engine.surface.as_mut().unwrap().set_client_rect(Rect::new(0.0, 0.0, 400.5, 300.0));
        assert!(engine.resize());
        assert_eq!(engine.surface().unwrap().buffer_size(), (401, 300));
        // Mobile never moves the rocket
        assert_eq!(engine.rocket(), rocket);
    }

    #[test]
    fn test_frame_clamps_large_gaps() {
        let mut engine = engine(CapabilityMode::MobileAmbient, Rect::new(0.0, 0.0, 800.0, 2000.0));
        engine.start(0.0);
        let state = engine.state_mut().unwrap();
        state.last_word_spawn = Some(9_000.0);
        state.spawn_word(100.0, 0.0);

        // A 10 s gap moves the word by at most one clamped step
        assert!(engine.frame(10_000.0));
        let word = engine.state().unwrap().words.active().next().unwrap();
        assert!((word.pos.y - 30.0 * MAX_FRAME_DT).abs() < 1e-3);
    }

    #[test]
    fn test_hidden_page_stops_loop() {
        let mut engine = engine(CapabilityMode::MobileAmbient, Rect::new(0.0, 0.0, 800.0, 600.0));
        assert!(engine.start(0.0));
        assert!(!engine.visibility_changed(false, 100.0));
        assert!(!engine.is_running());
        assert!(!engine.frame(116.0));

        assert!(engine.visibility_changed(true, 5000.0));
        assert!(engine.frame(5016.0));
    }

    #[test]
    fn test_hiding_page_releases_held_pointer() {
        let mut engine = engine(CapabilityMode::DesktopInteractive, Rect::new(0.0, 0.0, 800.0, 600.0));
        engine.start(0.0);
        engine.pointer_move(400.0, 500.0);
        engine.pointer_down();
        engine.frame(16.0);
        assert_eq!(engine.state().unwrap().active_bullets(), 1);

        engine.visibility_changed(false, 100.0);
        assert!(!engine.state().unwrap().input.as_ref().unwrap().is_held());

        // No mouseup arrived while hidden; nothing fires after resuming
        engine.visibility_changed(true, 1000.0);
        engine.frame(1016.0);
        engine.frame(1200.0);
        assert_eq!(engine.state().unwrap().active_bullets(), 1);
        assert_eq!(engine.state().unwrap().input.as_ref().unwrap().pointer(), Vec2::new(400.0, 500.0));
    }

    #[test]
    fn test_pointer_outside_clamps_rocket() {
        let mut engine = engine(CapabilityMode::DesktopInteractive, Rect::new(100.0, 50.0, 800.0, 600.0));
        engine.resize();

        engine.pointer_move(300.0, 250.0);
        assert!(engine.state().unwrap().pointer_over);
        assert_eq!(engine.rocket(), Some(Vec2::new(200.0, 200.0)));

        engine.pointer_move(1000.0, 900.0);
        assert!(!engine.state().unwrap().pointer_over);
        assert_eq!(engine.rocket(), Some(Vec2::new(800.0, 600.0)));

        // Press outside does not arm firing
        engine.pointer_down();
        assert!(!engine.state().unwrap().input.as_ref().unwrap().is_held());
    }

    #[test]
    fn test_held_pointer_fires_through_frames() {
        let mut engine = engine(CapabilityMode::DesktopInteractive, Rect::new(0.0, 0.0, 800.0, 600.0));
        engine.start(0.0);
        engine.pointer_move(400.0, 500.0);
        engine.pointer_down();

        let mut now = 0.0;
        for _ in 0..10 {
            now += 16.0;
            engine.frame(now);
        }
        // One shot at 16 ms; the next window opens at 166 ms
        assert_eq!(engine.state().unwrap().active_bullets(), 1);

        engine.pointer_up();
        for _ in 0..20 {
            now += 16.0;
            engine.frame(now);
        }
        assert!(engine.state().unwrap().active_bullets() <= 1);
    }

    #[test]
    fn test_mobile_ignores_pointer() {
        let mut engine = engine(CapabilityMode::MobileAmbient, Rect::new(0.0, 0.0, 800.0, 600.0));
        engine.start(0.0);
        let rocket = engine.rocket();
        engine.pointer_move(10.0, 10.0);
        engine.pointer_down();
        assert_eq!(engine.rocket(), rocket);
        assert!(!engine.state().unwrap().pointer_over);
        assert!(engine.state().unwrap().input.is_none());
    }

    #[test]
    fn test_destroy_then_calls_are_noops() {
        let mut engine = engine(CapabilityMode::DesktopInteractive, Rect::new(0.0, 0.0, 800.0, 600.0));
        engine.start(0.0);
        engine.destroy();

        assert!(!engine.is_running());
        assert!(engine.surface().is_none());
        assert!(engine.state().is_none());
        assert!(!engine.frame(16.0));
        assert!(!engine.resize());
        assert!(!engine.start(32.0));
        assert!(!engine.visibility_changed(true, 48.0));
        engine.pointer_move(1.0, 1.0);
        engine.pointer_down();
        engine.destroy();
    }
}
