//! Hero Canvas entry point
//!
//! On wasm the library's `#[wasm_bindgen(start)]` entry does the setup and
//! the host page drives `HeroAnimation`. Natively this runs a short headless
//! simulation as a smoke check.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use hero_canvas::renderer::{Rect, RecordingSurface};
    use hero_canvas::{CapabilityMode, GameConfig, GameEngine};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Hero Canvas (native) starting headless run...");

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const SECONDS: u32 = 20;

    let surface = RecordingSurface::new(Rect::new(0.0, 0.0, 1280.0, 720.0));
    let mut engine = GameEngine::new(GameConfig::default(), 0x5eed);
    engine.init(surface, CapabilityMode::DesktopInteractive);

    if !engine.start(0.0) {
        log::error!("Engine refused to start");
        return;
    }

    // Sweep the pointer across the bottom of the surface with the button held
    engine.pointer_move(640.0, 650.0);
    engine.pointer_down();

    let frames = SECONDS * 60;
    let mut peak_words = 0;
    let mut peak_bullets = 0;
    let mut peak_fragments = 0;
    for frame in 1..=frames {
        let now = frame as f64 * FRAME_MS;
        let x = 640.0 + 600.0 * (now as f32 / 1500.0).sin();
        engine.pointer_move(x, 650.0);
        engine.frame(now);

        if let Some(state) = engine.state() {
            peak_words = peak_words.max(state.active_words());
            peak_bullets = peak_bullets.max(state.active_bullets());
            peak_fragments = peak_fragments.max(state.active_fragments());
        }
    }
    engine.pointer_up();

    if let Some(state) = engine.state() {
        log::info!(
            "{} frames: {} hits, peak words {}/{}, bullets {}/{}, fragments {}/{}",
            frames,
            state.hits,
            peak_words,
            state.words.capacity(),
            peak_bullets,
            state.config.max_bullets,
            peak_fragments,
            state.config.max_fragments,
        );
    }
    if let Some(surface) = engine.surface() {
        log::info!("Last frame issued {} draw commands", surface.commands.len());
    }

    engine.destroy();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The page loads the library; `platform::wasm_start` runs on module init
}
