//! JS-facing lifecycle: init, resize and destroy of the hero animation

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlElement, ResizeObserver};

use super::PlatformError;
use super::capability::device_signals;
use super::engine_host::EngineHost;
use super::overlay::OverlayLease;
use crate::config::GameConfig;
use crate::consts::INIT_RETRY_DELAY_MS;
use crate::sim::CapabilityMode;

/// Hero background animation handle exported to JS.
///
/// The host calls `init` once its canvas is laid out, `resize` on layout
/// changes it knows about, and `destroy` on teardown.
#[wasm_bindgen]
pub struct HeroAnimation {
    inner: Rc<RefCell<Lifecycle>>,
}

struct ContainerObserver {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

struct Lifecycle {
    config: GameConfig,
    host: Option<EngineHost>,
    observer: Option<ContainerObserver>,
    /// Pending zero-size retry; dropping it cancels
    retry: Option<Timeout>,
    overlay: Option<OverlayLease>,
}

#[wasm_bindgen]
impl HeroAnimation {
    #[wasm_bindgen(constructor)]
    pub fn new() -> HeroAnimation {
        Self::from_config(GameConfig::default())
    }

    /// Construct with tuning overrides, e.g. `{"max_words_desktop": 24}`
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<HeroAnimation, JsValue> {
        let config = GameConfig::from_json(json).map_err(|err| JsValue::from_str(&err.to_string()))?;
        Ok(Self::from_config(config))
    }

    /// Start the animation on `canvas`, resizing with `container`.
    /// Replaces any previous run.
    pub fn init(&self, canvas: HtmlCanvasElement, container: HtmlElement) {
        self.destroy();
        if let Err(err) = Lifecycle::start(&self.inner, canvas, container) {
            log::error!("Hero animation init failed: {}", err);
            self.destroy();
        }
    }

    pub fn resize(&self) {
        if let Some(host) = &self.inner.borrow().host {
            host.resize();
        }
    }

    pub fn destroy(&self) {
        self.inner.borrow_mut().teardown();
    }

    /// `"desktop-interactive"` / `"mobile-ambient"` while running
    pub fn mode(&self) -> Option<String> {
        self.inner
            .borrow()
            .host
            .as_ref()
            .map(|host| host.mode().as_str().to_string())
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.inner.borrow().host.as_ref().is_some_and(EngineHost::is_running)
    }
}

impl Default for HeroAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl HeroAnimation {
    fn from_config(config: GameConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Lifecycle {
                config,
                host: None,
                observer: None,
                retry: None,
                overlay: None,
            })),
        }
    }
}

impl Lifecycle {
    fn start(inner: &Rc<RefCell<Self>>, canvas: HtmlCanvasElement, container: HtmlElement) -> Result<(), PlatformError> {
        let window = web_sys::window().ok_or(PlatformError::NoWindow)?;

        let signals = device_signals(&window);
        if signals.reduced_motion {
            log::info!("Reduced motion preferred, animation disabled");
            return Ok(());
        }

        let rect = canvas.get_bounding_client_rect();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            log::warn!("Canvas not laid out yet, retrying in {} ms", INIT_RETRY_DELAY_MS);
            let weak = Rc::downgrade(inner);
            let retry = Timeout::new(INIT_RETRY_DELAY_MS, move || retry_start(weak, canvas, container));
            inner.borrow_mut().retry = Some(retry);
            return Ok(());
        }

        let mode = CapabilityMode::detect(&signals);
        let config = inner.borrow().config.clone();
        let rocket_size = config.rocket_size;
        let host = EngineHost::new(canvas, mode, config)?;

        let callback = {
            let weak = Rc::downgrade(inner);
            Closure::<dyn FnMut(js_sys::Array)>::new(move |_entries: js_sys::Array| {
                if let Some(inner) = weak.upgrade() {
                    if let Some(host) = &inner.borrow().host {
                        host.resize();
                    }
                }
            })
        };
        let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(&container);

        host.resize();
        host.start();

        let overlay = if mode.is_interactive() {
            OverlayLease::acquire(rocket_size)
                .inspect_err(|err| log::error!("Cursor overlay unavailable: {}", err))
                .ok()
        } else {
            None
        };

        let mut lifecycle = inner.borrow_mut();
        lifecycle.overlay = overlay;
        lifecycle.host = Some(host);
        lifecycle.observer = Some(ContainerObserver {
            observer,
            _callback: callback,
        });
        log::info!("Hero animation running ({})", mode.as_str());
        Ok(())
    }

    /// Release everything; safe to call repeatedly
    fn teardown(&mut self) {
        self.retry = None;
        if let Some(observer) = self.observer.take() {
            observer.observer.disconnect();
        }
        if let Some(mut host) = self.host.take() {
            host.destroy();
        }
        self.overlay = None;
    }
}

impl Drop for Lifecycle {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn retry_start(weak: Weak<RefCell<Lifecycle>>, canvas: HtmlCanvasElement, container: HtmlElement) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    inner.borrow_mut().retry = None;
    if let Err(err) = Lifecycle::start(&inner, canvas, container) {
        log::error!("Hero animation init failed: {}", err);
        inner.borrow_mut().teardown();
    }
}
