//! Scroll widget state and coordinate conversions.

use std::sync::{Arc, Mutex, RwLock};

use log::debug;
use panedom::Pane;

use crate::axis::AxisStrategy;
use crate::events::{Listeners, ShiftRequest, ShiftUnits};
use crate::flags;
use crate::timer::Repeater;

/// Fallback floor on the thumb length.
const DEFAULT_MIN_THUMB_SIZE: u16 = 8;

/// Content cells moved per wheel/step request.
const DEFAULT_STEP_SIZE: u16 = 3;

/// Scroll widget configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollConfig {
    /// Floor on the thumb length; a thumb shorter than this is stretched
    /// to stay grabbable.
    pub min_thumb_size: u16,
    /// Content cells moved per `step` request.
    pub step_size: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            min_thumb_size: DEFAULT_MIN_THUMB_SIZE,
            step_size: DEFAULT_STEP_SIZE,
        }
    }
}

/// Live drag session; exists only between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy)]
pub(super) struct DragSession {
    /// Axis pointer coordinate at drag start.
    pub(super) start_pointer: u16,
    /// Track-space thumb shift at drag start.
    pub(super) start_shift: u16,
}

#[derive(Debug, Default)]
pub(super) struct ScrollInner {
    pub(super) viewport_size: u16,
    pub(super) content_size: u16,
    pub(super) track_size: u16,
    /// Thumb length, already clamped to the configured minimum.
    pub(super) thumb_size: u16,
    /// Track-space maximum thumb travel.
    pub(super) max_shift: u16,
    /// Content-space maximum native-scroll travel.
    pub(super) max_scrollable_shift: u16,
    /// Cached track-space position, derived from the committed offset.
    pub(super) current_shift: u16,
    /// Last committed content-space offset.
    pub(super) current_scrollable_shift: u16,
    pub(super) disabled: bool,
    pub(super) drag: Option<DragSession>,
}

pub(super) struct ScrollListeners {
    pub(super) shift: Listeners<ShiftRequest>,
    pub(super) enabled: Listeners<()>,
    pub(super) disabled: Listeners<()>,
}

impl ScrollListeners {
    fn new() -> Self {
        Self {
            shift: Listeners::new(),
            enabled: Listeners::new(),
            disabled: Listeners::new(),
        }
    }
}

/// A draggable thumb-on-track scroll widget for one axis.
pub struct Scroll<A: AxisStrategy> {
    pub(super) axis: A,
    pub(super) root: Pane,
    pub(super) track: Pane,
    pub(super) thumb: Pane,
    pub(super) config: ScrollConfig,
    pub(super) inner: Arc<RwLock<ScrollInner>>,
    pub(super) listeners: Arc<ScrollListeners>,
    pub(super) repeat: Arc<Mutex<Option<Repeater>>>,
}

impl<A: AxisStrategy> Scroll<A> {
    /// Create a scroll over its root, track and thumb panes.
    pub fn new(axis: A, root: Pane, track: Pane, thumb: Pane, config: ScrollConfig) -> Self {
        Self {
            axis,
            root,
            track,
            thumb,
            config,
            inner: Arc::new(RwLock::new(ScrollInner::default())),
            listeners: Arc::new(ScrollListeners::new()),
            repeat: Arc::new(Mutex::new(None)),
        }
    }

    // -------------------------------------------------------------------------
    // Geometry updates
    // -------------------------------------------------------------------------

    /// Recompute the track/thumb geometry from fresh measurements.
    ///
    /// Content that fits the viewport (including zero-size degenerate
    /// measurements) disables the axis; no geometry work happens in that
    /// case. Calling twice with identical arguments leaves the state
    /// unchanged and fires no redundant `enabled`/`disabled` notification.
    pub fn update(&self, viewport_size: u16, content_size: u16) {
        if content_size <= viewport_size {
            self.disable();
            return;
        }

        self.root.set_flag(flags::ACTIVE);

        let thumb_size = {
            let Ok(mut inner) = self.inner.write() else {
                return;
            };
            inner.viewport_size = viewport_size;
            inner.content_size = content_size;
            inner.max_scrollable_shift = content_size - viewport_size;

            let track_size = self.axis.size_of(self.track.rect());
            let raw =
                ((viewport_size as f64 * track_size as f64) / content_size as f64).ceil() as u16;
            let thumb_size = raw.max(self.config.min_thumb_size);

            inner.track_size = track_size;
            inner.thumb_size = thumb_size;
            inner.max_shift = track_size.saturating_sub(thumb_size);
            thumb_size
        };

        self.axis.set_size(&self.thumb, thumb_size);
        // The enabled notification comes last, once the geometry can back
        // the conversions.
        self.enable();
    }

    /// Display the committed content-space offset.
    ///
    /// Derives and caches the track-space shift and repositions the thumb.
    /// This is a passive sync from the native offset, so nothing is emitted
    /// here — the path from native scroll to display must never loop back
    /// into a native mutation.
    pub fn set_shift(&self, scrollable_shift: u16) {
        let shift = {
            let Ok(mut inner) = self.inner.write() else {
                return;
            };
            inner.current_scrollable_shift = scrollable_shift;
            let shift = convert_from_scrollable(&inner, scrollable_shift);
            inner.current_shift = shift;
            shift
        };
        self.axis.set_position(&self.thumb, shift);
    }

    // -------------------------------------------------------------------------
    // Shift requests
    // -------------------------------------------------------------------------

    /// Request a relative move.
    ///
    /// `Track` deltas are added to the cached track shift and converted;
    /// `Content` deltas are added to the committed content offset as-is.
    /// The two paths stay separate so an already-converted value is never
    /// converted twice.
    pub fn shift_by(&self, diff: i32, units: ShiftUnits) {
        if diff == 0 {
            return;
        }
        let target = {
            let Ok(inner) = self.inner.read() else {
                return;
            };
            match units {
                ShiftUnits::Content => inner.current_scrollable_shift as i32 + diff,
                ShiftUnits::Track => {
                    convert_to_scrollable(&inner, inner.current_shift as i32 + diff)
                }
            }
        };
        self.shift_to(target, ShiftUnits::Content);
    }

    /// Request an absolute move, clamped to the scrollable range.
    ///
    /// Emits a `shift` request; the position is committed only when the
    /// owner applies it and syncs back through [`Self::set_shift`].
    pub fn shift_to(&self, value: i32, units: ShiftUnits) {
        let request = {
            let Ok(inner) = self.inner.read() else {
                return;
            };
            let scrollable = match units {
                ShiftUnits::Content => value,
                ShiftUnits::Track => convert_to_scrollable(&inner, value),
            };
            scrollable.clamp(0, inner.max_scrollable_shift as i32) as u16
        };
        self.listeners.shift.emit(&ShiftRequest { shift: request });
    }

    /// Request one configured step in the given direction.
    pub fn step(&self, direction: i32) {
        self.shift_by(direction * self.config.step_size as i32, ShiftUnits::Content);
    }

    // -------------------------------------------------------------------------
    // Enable / disable
    // -------------------------------------------------------------------------

    pub fn is_disabled(&self) -> bool {
        self.inner
            .read()
            .map(|inner| inner.disabled)
            .unwrap_or(true)
    }

    fn disable(&self) {
        {
            let Ok(mut inner) = self.inner.write() else {
                return;
            };
            if inner.disabled {
                return;
            }
            inner.disabled = true;
        }
        self.root.del_flag(flags::ACTIVE);
        debug!("scroll '{}' disabled", self.root.id());
        self.listeners.disabled.emit(&());
    }

    fn enable(&self) {
        {
            let Ok(mut inner) = self.inner.write() else {
                return;
            };
            if !inner.disabled {
                return;
            }
            inner.disabled = false;
        }
        debug!("scroll '{}' enabled", self.root.id());
        self.listeners.enabled.emit(&());
    }

    // -------------------------------------------------------------------------
    // Listener registration
    // -------------------------------------------------------------------------

    /// Register for user-driven shift requests.
    pub fn on_shift(&self, callback: impl Fn(ShiftRequest) + Send + Sync + 'static) {
        self.listeners.shift.register(move |request| callback(*request));
    }

    /// Register for the disabled → enabled transition.
    pub fn on_enabled(&self, callback: impl Fn() + Send + Sync + 'static) {
        self.listeners.enabled.register(move |()| callback());
    }

    /// Register for the enabled → disabled transition.
    pub fn on_disabled(&self, callback: impl Fn() + Send + Sync + 'static) {
        self.listeners.disabled.register(move |()| callback());
    }

    /// Cancel pending tasks and drop all listeners.
    ///
    /// Listeners go first so a stale pointer event arriving mid-teardown
    /// has nowhere to report to.
    pub fn detach(&self) {
        if let Ok(mut guard) = self.repeat.lock() {
            if let Some(repeater) = guard.take() {
                repeater.cancel();
            }
        }
        self.listeners.shift.clear();
        self.listeners.enabled.clear();
        self.listeners.disabled.clear();
        if let Ok(mut inner) = self.inner.write() {
            inner.drag = None;
        }
        self.root.del_flag(flags::DRAGGING);
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn current_shift(&self) -> u16 {
        self.inner
            .read()
            .map(|inner| inner.current_shift)
            .unwrap_or(0)
    }

    pub fn current_scrollable_shift(&self) -> u16 {
        self.inner
            .read()
            .map(|inner| inner.current_scrollable_shift)
            .unwrap_or(0)
    }

    pub fn thumb_size(&self) -> u16 {
        self.inner
            .read()
            .map(|inner| inner.thumb_size)
            .unwrap_or(0)
    }

    pub fn max_shift(&self) -> u16 {
        self.inner.read().map(|inner| inner.max_shift).unwrap_or(0)
    }

    pub fn max_scrollable_shift(&self) -> u16 {
        self.inner
            .read()
            .map(|inner| inner.max_scrollable_shift)
            .unwrap_or(0)
    }

    pub fn root(&self) -> &Pane {
        &self.root
    }

    pub fn track(&self) -> &Pane {
        &self.track
    }

    pub fn thumb(&self) -> &Pane {
        &self.thumb
    }
}

impl<A: AxisStrategy + Clone> Clone for Scroll<A> {
    fn clone(&self) -> Self {
        Self {
            axis: self.axis.clone(),
            root: self.root.clone(),
            track: self.track.clone(),
            thumb: self.thumb.clone(),
            config: self.config,
            inner: Arc::clone(&self.inner),
            listeners: Arc::clone(&self.listeners),
            repeat: Arc::clone(&self.repeat),
        }
    }
}

/// Project a committed content-space offset into track space.
pub(super) fn convert_from_scrollable(inner: &ScrollInner, scrollable: u16) -> u16 {
    if inner.disabled || inner.max_scrollable_shift == 0 {
        return 0;
    }
    ((scrollable as f64 * inner.max_shift as f64) / inner.max_scrollable_shift as f64).round()
        as u16
}

/// Project a track-space shift (possibly out of range) into content space.
pub(super) fn convert_to_scrollable(inner: &ScrollInner, shift: i32) -> i32 {
    if inner.max_shift == 0 {
        return 0;
    }
    ((shift as f64 * inner.max_scrollable_shift as f64) / inner.max_shift as f64).round() as i32
}
