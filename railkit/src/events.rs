//! Event types shared by the scroll widgets.
//!
//! Pointer handlers report what they did through [`EventResult`], so the
//! host's dispatcher stays a thin router. A handler returning
//! [`EventResult::StartDrag`] asks the host for document-level capture: all
//! following pointer move/up events must be routed to this component
//! regardless of their position, since a drag routinely leaves the widget's
//! bounds.

use std::sync::RwLock;

/// Result of handling a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
    /// Event started a drag; route subsequent move/up events here.
    StartDrag,
}

impl EventResult {
    /// Check if the event was handled (consumed or started drag).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// A request to move the native scroll offset to a content-space position.
///
/// Emitted by a scroll in response to user interaction; the position is
/// committed only when the owner applies it and syncs back via `set_shift`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftRequest {
    /// Requested content-space offset, already clamped to the valid range.
    pub shift: u16,
}

/// Coordinate space of a shift argument.
///
/// The two conversion paths are kept distinct: callers that already hold a
/// content-space value must not be converted a second time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftUnits {
    /// Track-space value; converted to content space before clamping.
    Track,
    /// Content-space value; used as-is.
    Content,
}

/// Registered callbacks for one event kind.
pub(crate) struct Listeners<T> {
    #[allow(clippy::type_complexity)]
    slots: RwLock<Vec<Box<dyn Fn(&T) + Send + Sync>>>,
}

impl<T> Listeners<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: RwLock::new(Vec::new()),
        }
    }

    pub(crate) fn register(&self, callback: impl Fn(&T) + Send + Sync + 'static) {
        if let Ok(mut guard) = self.slots.write() {
            guard.push(Box::new(callback));
        }
    }

    pub(crate) fn emit(&self, payload: &T) {
        if let Ok(guard) = self.slots.read() {
            for callback in guard.iter() {
                callback(payload);
            }
        }
    }

    pub(crate) fn clear(&self) {
        if let Ok(mut guard) = self.slots.write() {
            guard.clear();
        }
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}
