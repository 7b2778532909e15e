//! Page-wide canvas that draws the rocket marker at the pointer
//!
//! One overlay exists per page. Each running animation holds an
//! [`OverlayLease`]; the first lease builds the canvas and hides the native
//! cursor, the last one dropped tears it down and restores the cursor.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlCanvasElement, HtmlElement, MouseEvent, Window};

use super::PlatformError;
use super::canvas::CanvasSurface;
use super::capability::viewport_size;
use super::frames::FrameLoop;
use crate::overlay::CursorOverlay;
use crate::renderer::Surface;

const OVERLAY_STYLE: [(&str, &str); 7] = [
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("pointer-events", "none"),
    ("z-index", "9999"),
];

thread_local! {
    static PAGE_OVERLAY: RefCell<GlobalCursorOverlay> = RefCell::new(GlobalCursorOverlay::default());
}

/// Share of the page overlay; gives it back when dropped
pub struct OverlayLease {
    _private: (),
}

impl OverlayLease {
    pub fn acquire(marker_size: f32) -> Result<Self, PlatformError> {
        PAGE_OVERLAY.with(|overlay| overlay.borrow_mut().acquire(marker_size))?;
        Ok(Self { _private: () })
    }
}

impl Drop for OverlayLease {
    fn drop(&mut self) {
        if PAGE_OVERLAY
            .try_with(|overlay| overlay.borrow_mut().release())
            .is_err()
        {
            log::debug!("Page overlay already torn down");
        }
    }
}

/// Removes the overlay canvas from the page when dropped
struct AttachedCanvas(HtmlCanvasElement);

impl Drop for AttachedCanvas {
    fn drop(&mut self) {
        self.0.remove();
    }
}

/// DOM side of a live overlay. Field order is drop order: listeners are
/// removed before the canvas is detached.
struct OverlayParts {
    frames: FrameLoop,
    _listeners: Vec<EventListener>,
    _canvas: AttachedCanvas,
}

impl OverlayParts {
    fn attach(window: &Window, document: &Document, body: &HtmlElement, state: &Rc<RefCell<CursorOverlay>>) -> Result<Self, PlatformError> {
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| PlatformError::Js("created element is not a canvas".into()))?;
        let style = canvas.style();
        for (property, value) in OVERLAY_STYLE {
            style.set_property(property, value)?;
        }
        body.append_child(&canvas)?;
        let attached = AttachedCanvas(canvas.clone());

        let surface = Rc::new(RefCell::new(CanvasSurface::new(canvas)?));
        let (width, height) = viewport_size(window);
        surface.borrow_mut().set_buffer_size(width, height);

        let mut listeners = Vec::new();
        {
            let state = state.clone();
            listeners.push(EventListener::new(window, "mousemove", move |event: &Event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    state
                        .borrow_mut()
                        .pointer_moved(event.client_x() as f32, event.client_y() as f32);
                }
            }));
        }
        {
            let surface = surface.clone();
            let resize_window = window.clone();
            listeners.push(EventListener::new(window, "resize", move |_event: &Event| {
                let (width, height) = viewport_size(&resize_window);
                surface.borrow_mut().set_buffer_size(width, height);
            }));
        }

        let frames = {
            let state = state.clone();
            FrameLoop::new(move |_time| {
                let state = state.borrow();
                let mut surface = surface.borrow_mut();
                let (width, height) = surface.buffer_size();
                state.render(&mut *surface, width as f32, height as f32);
                state.is_active()
            })
        };

        Ok(Self {
            frames,
            _listeners: listeners,
            _canvas: attached,
        })
    }
}

impl Drop for OverlayParts {
    fn drop(&mut self) {
        self.frames.cancel();
    }
}

/// The page's single cursor overlay, reference counted by its leases
#[derive(Default)]
struct GlobalCursorOverlay {
    state: Rc<RefCell<CursorOverlay>>,
    body: Option<HtmlElement>,
    parts: Option<OverlayParts>,
}

impl GlobalCursorOverlay {
    fn acquire(&mut self, marker_size: f32) -> Result<(), PlatformError> {
        let body = match &self.body {
            Some(body) => body.clone(),
            None => {
                let window = web_sys::window().ok_or(PlatformError::NoWindow)?;
                let document = window.document().ok_or(PlatformError::NoDocument)?;
                let body = document.body().ok_or(PlatformError::NoBody)?;
                self.parts = Some(OverlayParts::attach(&window, &document, &body, &self.state)?);
                self.body = Some(body.clone());
                body
            }
        };

        let first = self.state.borrow_mut().acquire(marker_size, || {
            body.style().get_property_value("cursor").unwrap_or_default()
        });
        if !first {
            log::debug!("Cursor overlay shared by {} owners", self.state.borrow().owners());
            return Ok(());
        }

        if let Err(err) = body.style().set_property("cursor", "none") {
            log::warn!("Failed to hide native cursor: {:?}", err);
        }
        if let Some(parts) = &self.parts {
            parts.frames.schedule();
        }
        log::info!("Cursor overlay active");
        Ok(())
    }

    fn release(&mut self) {
        let saved = self.state.borrow_mut().release();
        if let (Some(saved), Some(body)) = (saved, &self.body) {
            restore_cursor(body, &saved);
        }
        if self.state.borrow().is_active() {
            return;
        }
        self.body = None;
        if self.parts.take().is_some() {
            log::info!("Cursor overlay removed");
        }
    }
}

fn restore_cursor(body: &HtmlElement, saved: &str) {
    let style = body.style();
    let result = if saved.is_empty() {
        style.remove_property("cursor").map(|_| ())
    } else {
        style.set_property("cursor", saved)
    };
    if let Err(err) = result {
        log::warn!("Failed to restore cursor: {:?}", err);
    }
}
