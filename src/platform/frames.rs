//! Repeating animation frames on top of `gloo::render`

use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{AnimationFrame, request_animation_frame};

/// Keeps requesting frames while the callback returns true.
///
/// At most one frame is pending; dropping its handle cancels it. A pending
/// frame keeps the loop alive, so owners call [`FrameLoop::cancel`] on
/// teardown.
#[derive(Clone)]
pub struct FrameLoop {
    pending: Rc<RefCell<Option<AnimationFrame>>>,
    on_frame: Rc<dyn Fn(f64) -> bool>,
}

impl FrameLoop {
    pub fn new<F>(on_frame: F) -> Self
    where
        F: Fn(f64) -> bool + 'static,
    {
        Self {
            pending: Rc::new(RefCell::new(None)),
            on_frame: Rc::new(on_frame),
        }
    }

    /// Request the next frame unless one is already pending
    pub fn schedule(&self) {
        if self.pending.borrow().is_some() {
            return;
        }
        let frames = self.clone();
        let handle = request_animation_frame(move |time| {
            frames.pending.borrow_mut().take();
            if (frames.on_frame)(time) {
                frames.schedule();
            }
        });
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        let pending = self.pending.borrow_mut().take();
        drop(pending);
    }
}
