//! Visibility-change notification.
//!
//! Widgets that must defer measurement until their pane is actually visible
//! subscribe here. The host flips the flag when the pane is shown or hidden;
//! callbacks receive the new visibility.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

type VisibilityCallback = Box<dyn Fn(bool) + Send + Sync>;

/// Shared visibility flag with change callbacks.
pub struct VisibilityListener {
    visible: Arc<AtomicBool>,
    #[allow(clippy::type_complexity)]
    callbacks: Arc<RwLock<Vec<VisibilityCallback>>>,
}

impl std::fmt::Debug for VisibilityListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let callback_count = self.callbacks.read().map(|g| g.len()).unwrap_or(0);
        f.debug_struct("VisibilityListener")
            .field("visible", &self.visible.load(Ordering::SeqCst))
            .field("callbacks", &callback_count)
            .finish()
    }
}

impl VisibilityListener {
    pub fn new(visible: bool) -> Self {
        Self {
            visible: Arc::new(AtomicBool::new(visible)),
            callbacks: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    /// Flip the visibility flag, notifying callbacks on an actual change.
    pub fn set_visible(&self, visible: bool) {
        let previous = self.visible.swap(visible, Ordering::SeqCst);
        if previous != visible {
            if let Ok(guard) = self.callbacks.read() {
                for callback in guard.iter() {
                    callback(visible);
                }
            }
        }
    }

    pub fn on_change(&self, callback: impl Fn(bool) + Send + Sync + 'static) {
        if let Ok(mut guard) = self.callbacks.write() {
            guard.push(Box::new(callback));
        }
    }
}

impl Default for VisibilityListener {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Clone for VisibilityListener {
    fn clone(&self) -> Self {
        Self {
            visible: Arc::clone(&self.visible),
            callbacks: Arc::clone(&self.callbacks),
        }
    }
}
