//! The natively scrolling host pane.
//!
//! [`ScrollPane`] models the host's own scrolling box: it owns the scroll
//! offset and clamps it against the content extent. Interested parties
//! register scroll listeners; they are notified only when the offset actually
//! changes, matching host scroll-event semantics. The pane is the single
//! source of truth for the offset — widgets layered on top only ever cache a
//! projection of it.

use std::sync::{Arc, RwLock};

use log::trace;

use crate::geometry::Rect;

type ScrollListener = Box<dyn Fn(u16, u16) + Send + Sync>;

#[derive(Debug, Default)]
struct ScrollPaneInner {
    viewport: Rect,
    content_width: u16,
    content_height: u16,
    scroll_left: u16,
    scroll_top: u16,
    /// Columns the host's builtin scrollbar is slid out of the visible area.
    gutter: u16,
}

impl ScrollPaneInner {
    fn max_scroll_top(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport.height)
    }

    fn max_scroll_left(&self) -> u16 {
        self.content_width.saturating_sub(self.viewport.width)
    }
}

/// A natively scrolling host box.
pub struct ScrollPane {
    inner: Arc<RwLock<ScrollPaneInner>>,
    #[allow(clippy::type_complexity)]
    listeners: Arc<RwLock<Vec<ScrollListener>>>,
}

impl std::fmt::Debug for ScrollPane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let listener_count = self.listeners.read().map(|g| g.len()).unwrap_or(0);
        f.debug_struct("ScrollPane")
            .field("inner", &self.inner)
            .field("listeners", &listener_count)
            .finish()
    }
}

impl ScrollPane {
    pub fn new(viewport: Rect) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ScrollPaneInner {
                viewport,
                ..ScrollPaneInner::default()
            })),
            listeners: Arc::new(RwLock::new(Vec::new())),
        }
    }

    // -------------------------------------------------------------------------
    // Measurement
    // -------------------------------------------------------------------------

    pub fn viewport(&self) -> Rect {
        self.inner
            .read()
            .map(|guard| guard.viewport)
            .unwrap_or_default()
    }

    pub fn set_viewport(&self, viewport: Rect) {
        if let Ok(mut guard) = self.inner.write() {
            guard.viewport = viewport;
            let max = guard.max_scroll_top();
            guard.scroll_top = guard.scroll_top.min(max);
            let max = guard.max_scroll_left();
            guard.scroll_left = guard.scroll_left.min(max);
        }
    }

    pub fn content_height(&self) -> u16 {
        self.inner
            .read()
            .map(|guard| guard.content_height)
            .unwrap_or(0)
    }

    /// Update the measured content extent, silently re-clamping a stale
    /// offset. The owner re-syncs any dependent display state afterwards.
    pub fn set_content_height(&self, height: u16) {
        if let Ok(mut guard) = self.inner.write() {
            guard.content_height = height;
            let max = guard.max_scroll_top();
            guard.scroll_top = guard.scroll_top.min(max);
        }
    }

    pub fn content_width(&self) -> u16 {
        self.inner
            .read()
            .map(|guard| guard.content_width)
            .unwrap_or(0)
    }

    pub fn set_content_width(&self, width: u16) {
        if let Ok(mut guard) = self.inner.write() {
            guard.content_width = width;
            let max = guard.max_scroll_left();
            guard.scroll_left = guard.scroll_left.min(max);
        }
    }

    // -------------------------------------------------------------------------
    // Scroll offset
    // -------------------------------------------------------------------------

    pub fn scroll_top(&self) -> u16 {
        self.inner
            .read()
            .map(|guard| guard.scroll_top)
            .unwrap_or(0)
    }

    pub fn scroll_left(&self) -> u16 {
        self.inner
            .read()
            .map(|guard| guard.scroll_left)
            .unwrap_or(0)
    }

    pub fn max_scroll_top(&self) -> u16 {
        self.inner
            .read()
            .map(|guard| guard.max_scroll_top())
            .unwrap_or(0)
    }

    /// Set the vertical offset, clamped to the scrollable range.
    ///
    /// Listeners fire only when the stored offset actually changes.
    pub fn set_scroll_top(&self, top: u16) {
        let changed = match self.inner.write() {
            Ok(mut guard) => {
                let clamped = top.min(guard.max_scroll_top());
                if clamped != guard.scroll_top {
                    guard.scroll_top = clamped;
                    Some((guard.scroll_left, clamped))
                } else {
                    None
                }
            }
            Err(_) => None,
        };

        if let Some((left, top)) = changed {
            trace!("scroll pane offset -> {top}");
            self.notify(left, top);
        }
    }

    /// Set the horizontal offset, clamped to the scrollable range.
    pub fn set_scroll_left(&self, left: u16) {
        let changed = match self.inner.write() {
            Ok(mut guard) => {
                let clamped = left.min(guard.max_scroll_left());
                if clamped != guard.scroll_left {
                    guard.scroll_left = clamped;
                    Some((clamped, guard.scroll_top))
                } else {
                    None
                }
            }
            Err(_) => None,
        };

        if let Some((left, top)) = changed {
            self.notify(left, top);
        }
    }

    // -------------------------------------------------------------------------
    // Builtin scrollbar gutter
    // -------------------------------------------------------------------------

    pub fn gutter(&self) -> u16 {
        self.inner.read().map(|guard| guard.gutter).unwrap_or(0)
    }

    /// Slide the host's builtin scrollbar out of the visible area by the
    /// given number of columns (0 restores it).
    pub fn set_gutter(&self, gutter: u16) {
        if let Ok(mut guard) = self.inner.write() {
            guard.gutter = gutter;
        }
    }

    // -------------------------------------------------------------------------
    // Scroll listeners
    // -------------------------------------------------------------------------

    /// Register a listener called with `(scroll_left, scroll_top)` after
    /// every effective offset change.
    pub fn on_scroll(&self, listener: impl Fn(u16, u16) + Send + Sync + 'static) {
        if let Ok(mut guard) = self.listeners.write() {
            guard.push(Box::new(listener));
        }
    }

    /// Drop all registered listeners (teardown).
    pub fn clear_listeners(&self) {
        if let Ok(mut guard) = self.listeners.write() {
            guard.clear();
        }
    }

    fn notify(&self, left: u16, top: u16) {
        if let Ok(guard) = self.listeners.read() {
            for listener in guard.iter() {
                listener(left, top);
            }
        }
    }
}

impl Clone for ScrollPane {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            listeners: Arc::clone(&self.listeners),
        }
    }
}
