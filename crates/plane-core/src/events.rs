use crate::input::PointerInput;
use crate::texture::TextureImage;
use crate::uniforms::FrequencyAxis;
use crate::viewport::Viewport;
use std::cell::RefCell;
use std::rc::Rc;

/// Everything host callbacks may ask of the scene. Applied at the start of
/// the next frame, in arrival order.
#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    Resized(Viewport),
    Pointer(PointerInput),
    Frequency(FrequencyAxis, f32),
    /// Relative change, resolved against the value current at drain time.
    FrequencyStep(FrequencyAxis, f32),
    RegenerateSpikes,
    TextureLoaded(TextureImage),
}

/// Single-threaded queue shared between host callbacks and the frame loop.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    inner: Rc<RefCell<Vec<AppEvent>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: AppEvent) {
        self.inner.borrow_mut().push(event);
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Take all pending events. Only the latest resize survives; everything
    /// else keeps its order.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = std::mem::take(&mut *self.inner.borrow_mut());
        if let Some(last_resize) = events
            .iter()
            .rposition(|e| matches!(e, AppEvent::Resized(_)))
        {
            let mut i = 0;
            events.retain(|e| {
                let keep = !matches!(e, AppEvent::Resized(_)) || i == last_resize;
                i += 1;
                keep
            });
        }
        events
    }
}
