//! Binds a `GameEngine` to a canvas, DOM events and animation frames

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlCanvasElement, MouseEvent, VisibilityState, Window};

use super::PlatformError;
use super::canvas::CanvasSurface;
use super::capability::now;
use super::frames::FrameLoop;
use crate::config::GameConfig;
use crate::engine::GameEngine;
use crate::sim::CapabilityMode;

type SharedEngine = Rc<RefCell<GameEngine<CanvasSurface>>>;

pub struct EngineHost {
    window: Window,
    engine: SharedEngine,
    frames: FrameLoop,
    listeners: Vec<EventListener>,
}

impl EngineHost {
    /// Bind the engine to `canvas` and register its listeners.
    ///
    /// Pointer listeners are window-scoped so the rocket keeps tracking the
    /// pointer outside the canvas; they are only registered in desktop mode.
    pub fn new(canvas: HtmlCanvasElement, mode: CapabilityMode, config: GameConfig) -> Result<Self, PlatformError> {
        let window = web_sys::window().ok_or(PlatformError::NoWindow)?;
        let document = window.document().ok_or(PlatformError::NoDocument)?;
        let surface = CanvasSurface::new(canvas)?;

        let seed = js_sys::Date::now() as u64;
        let mut engine = GameEngine::new(config, seed);
        engine.init(surface, mode);
        let engine: SharedEngine = Rc::new(RefCell::new(engine));

        let frames = {
            let engine = engine.clone();
            FrameLoop::new(move |time| engine.borrow_mut().frame(time))
        };

        let mut listeners = Vec::new();

        if mode.is_interactive() {
            {
                let engine = engine.clone();
                listeners.push(EventListener::new(&window, "mousemove", move |event: &Event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        engine
                            .borrow_mut()
                            .pointer_move(event.client_x() as f32, event.client_y() as f32);
                    }
                }));
            }
            {
                let engine = engine.clone();
                listeners.push(EventListener::new(&window, "mousedown", move |event: &Event| {
                    let primary = event.dyn_ref::<MouseEvent>().is_some_and(|e| e.button() == 0);
                    if primary {
                        engine.borrow_mut().pointer_down();
                    }
                }));
            }
            {
                let engine = engine.clone();
                listeners.push(EventListener::new(&window, "mouseup", move |_event: &Event| {
                    engine.borrow_mut().pointer_up();
                }));
            }
        }

        // Pause while the tab is hidden, resume when it comes back
        {
            let engine = engine.clone();
            let frames = frames.clone();
            let window = window.clone();
            let doc = document.clone();
            listeners.push(EventListener::new(&document, "visibilitychange", move |_event: &Event| {
                let visible = doc.visibility_state() == VisibilityState::Visible;
                let schedule = engine.borrow_mut().visibility_changed(visible, now(&window));
                if schedule {
                    frames.schedule();
                } else if !visible {
                    frames.cancel();
                }
            }));
        }

        Ok(Self {
            window,
            engine,
            frames,
            listeners,
        })
    }

    pub fn mode(&self) -> CapabilityMode {
        self.engine.borrow().mode()
    }

    pub fn is_running(&self) -> bool {
        self.engine.borrow().is_running()
    }

    pub fn start(&self) {
        if self.engine.borrow_mut().start(now(&self.window)) {
            self.frames.schedule();
        }
    }

    pub fn resize(&self) {
        self.engine.borrow_mut().resize();
    }

    /// Remove listeners, stop frames and release the engine. Idempotent.
    pub fn destroy(&mut self) {
        self.listeners.clear();
        self.frames.cancel();
        self.engine.borrow_mut().destroy();
    }
}

impl Drop for EngineHost {
    fn drop(&mut self) {
        self.destroy();
    }
}
