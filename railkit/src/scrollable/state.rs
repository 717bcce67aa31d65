//! Scrollable composite state, synchronization and lifecycle.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use log::{debug, trace, warn};
use panedom::{ContentBlock, Pane, ScrollPane, ScrollbarMetrics, VisibilityListener};

use crate::error::Error;
use crate::flags;
use crate::scroll::VerticalScroll;
use crate::timer::Debounced;

/// Quiet window after the last drag-driven shift before text selection is
/// allowed again.
const SELECTION_RELEASE_DELAY: Duration = Duration::from_millis(500);

/// Scrollable composite configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollableConfig {
    /// Hide the overlay scrollbar entirely while the content fits the
    /// viewport.
    pub auto_hiding: bool,
}

impl Default for ScrollableConfig {
    fn default() -> Self {
        Self { auto_hiding: true }
    }
}

#[derive(Debug)]
struct ScrollableInner {
    /// Mirrors the owned scroll's disabled state so repeated enabled
    /// notifications produce no redundant side effects.
    vertical_disabled: bool,
    detached: bool,
}

impl Default for ScrollableInner {
    fn default() -> Self {
        Self {
            vertical_disabled: true,
            detached: false,
        }
    }
}

/// Auto-hide side effects shared by the enabled/disabled listeners and the
/// refresh pass.
struct VerticalCascade {
    root: Pane,
    host: ScrollPane,
    inner: Arc<RwLock<ScrollableInner>>,
    metrics: ScrollbarMetrics,
    auto_hiding: bool,
}

impl VerticalCascade {
    fn disabled(&self) {
        if self.auto_hiding {
            self.root.del_flag(flags::VERTICAL_ACTIVE);
            if self.metrics.vertical_optimized > 0 {
                self.host.set_gutter(0);
            }
        }
        if let Ok(mut inner) = self.inner.write() {
            inner.vertical_disabled = true;
        }
    }

    fn enabled(&self) {
        let was_disabled = self
            .inner
            .read()
            .map(|inner| inner.vertical_disabled)
            .unwrap_or(true);
        if self.auto_hiding && was_disabled {
            self.apply();
        }
        if let Ok(mut inner) = self.inner.write() {
            inner.vertical_disabled = false;
        }
    }

    /// Show the overlay and slide the host's builtin scrollbar out of the
    /// visible area.
    fn apply(&self) {
        self.root.set_flag(flags::VERTICAL_ACTIVE);
        if self.metrics.vertical_optimized > 0 {
            self.host.set_gutter(self.metrics.vertical_optimized);
        }
    }
}

impl Clone for VerticalCascade {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            host: self.host.clone(),
            inner: Arc::clone(&self.inner),
            metrics: self.metrics,
            auto_hiding: self.auto_hiding,
        }
    }
}

/// A natively scrolling pane with an overlay scrollbar kept in sync.
pub struct Scrollable {
    root: Pane,
    viewport: Pane,
    content: Pane,
    host: ScrollPane,
    vertical: Option<VerticalScroll>,
    cascade: VerticalCascade,
    allow_selection: Arc<Debounced>,
    visibility: VisibilityListener,
    inner: Arc<RwLock<ScrollableInner>>,
}

/// Builder for [`Scrollable`].
pub struct ScrollableBuilder {
    root: Pane,
    viewport: Pane,
    content: Pane,
    host: ScrollPane,
    vertical: Option<VerticalScroll>,
    config: ScrollableConfig,
    metrics: Option<ScrollbarMetrics>,
    visibility: Option<VisibilityListener>,
}

impl ScrollableBuilder {
    pub fn new(root: Pane, viewport: Pane, content: Pane, host: ScrollPane) -> Self {
        Self {
            root,
            viewport,
            content,
            host,
            vertical: None,
            config: ScrollableConfig::default(),
            metrics: None,
            visibility: None,
        }
    }

    /// Attach the vertical scroll instance.
    pub fn vertical(mut self, scroll: VerticalScroll) -> Self {
        self.vertical = Some(scroll);
        self
    }

    pub fn config(mut self, config: ScrollableConfig) -> Self {
        self.config = config;
        self
    }

    /// Inject gutter metrics; defaults to the process-wide measurement, or
    /// zeroes when none was installed.
    pub fn metrics(mut self, metrics: ScrollbarMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn visibility(mut self, visibility: VisibilityListener) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Assemble the scrollable and run the initial measurement pass.
    ///
    /// Fails fast when no axis scroll instance was attached; a scrollable
    /// with nothing to drive cannot work and must not degrade silently.
    /// The initial pass is deferred while the pane is not visible and runs
    /// once visibility is regained.
    pub fn build(self) -> Result<Scrollable, Error> {
        if self.vertical.is_none() {
            return Err(Error::NoAxisConfigured);
        }

        let metrics = self
            .metrics
            .or_else(|| ScrollbarMetrics::global().copied())
            .unwrap_or_default();
        let visibility = self.visibility.unwrap_or_default();
        let inner = Arc::new(RwLock::new(ScrollableInner::default()));

        let cascade = VerticalCascade {
            root: self.root.clone(),
            host: self.host.clone(),
            inner: Arc::clone(&inner),
            metrics,
            auto_hiding: self.config.auto_hiding,
        };

        let content = self.content.clone();
        let allow_selection = Arc::new(Debounced::new(SELECTION_RELEASE_DELAY, move || {
            content.del_flag(flags::SCROLLING);
        }));

        let scrollable = Scrollable {
            root: self.root,
            viewport: self.viewport,
            content: self.content,
            host: self.host,
            vertical: self.vertical,
            cascade,
            allow_selection,
            visibility,
            inner,
        };
        scrollable.connect();

        if !scrollable.cascade.auto_hiding {
            // A permanently shown overlay applies its visuals up front.
            scrollable.cascade.apply();
        }

        if scrollable.visibility.is_visible() {
            scrollable.refresh();
        }
        let deferred = scrollable.clone();
        scrollable.visibility.on_change(move |visible| {
            if visible {
                deferred.refresh();
            }
        });

        Ok(scrollable)
    }
}

impl Scrollable {
    /// Wire the synchronization protocol.
    fn connect(&self) {
        let Some(vertical) = &self.vertical else {
            return;
        };

        // User-driven shift request -> native offset. The only place the
        // composite writes the native offset on behalf of the overlay.
        let host = self.host.clone();
        let content = self.content.clone();
        let allow_selection = Arc::clone(&self.allow_selection);
        vertical.on_shift(move |request| {
            content.set_flag(flags::SCROLLING);
            host.set_scroll_top(request.shift);
            allow_selection.call();
        });

        // Native offset change -> passive thumb sync. Emits nothing, so the
        // round trip after an applied request ends here.
        let scroll = vertical.clone();
        self.host.on_scroll(move |_left, top| scroll.set_shift(top));

        let cascade = self.cascade.clone();
        vertical.on_disabled(move || cascade.disabled());
        let cascade = self.cascade.clone();
        vertical.on_enabled(move || cascade.enabled());
    }

    // -------------------------------------------------------------------------
    // Content
    // -------------------------------------------------------------------------

    /// Replace the content blocks and re-run the full measurement pass.
    pub fn set_content(&self, blocks: Vec<ContentBlock>) {
        self.content.set_blocks(blocks);
        self.refresh();
    }

    pub fn has_content(&self) -> bool {
        self.content.child_count() > 0
    }

    // -------------------------------------------------------------------------
    // Measurement / synchronization
    // -------------------------------------------------------------------------

    /// Full update pass: re-measure, recompute the overlay geometry, re-sync
    /// the thumb against the (possibly re-clamped) native offset, and run
    /// the enabled/disabled cascade.
    pub fn refresh(&self) {
        if self.is_detached() {
            return;
        }

        let viewport_rect = self.viewport.rect();
        self.host.set_viewport(viewport_rect);

        if let Some(vertical) = &self.vertical {
            let content_size = self.content.content_height();
            let viewport_size = viewport_rect.height;
            trace!("scrollable refresh: viewport={viewport_size} content={content_size}");

            self.host.set_content_height(content_size);
            vertical.update(viewport_size, content_size);
            vertical.set_shift(self.host.scroll_top());

            if vertical.is_disabled() {
                self.cascade.disabled();
            } else {
                self.cascade.enabled();
            }
        }
    }

    /// Re-run the update pass after a host resize.
    pub fn handle_resize(&self) {
        trace!("scrollable resize");
        self.refresh();
    }

    /// Push the current native offset into the overlay display.
    pub fn sync_vertical(&self) {
        if let Some(vertical) = &self.vertical {
            vertical.set_shift(self.host.scroll_top());
        }
    }

    /// Bring a content block into view.
    ///
    /// A block already fully visible (with `offset` margin) is left alone.
    /// A block past the viewport bottom is aligned so its bottom edge plus
    /// the margin shows; anything else aligns its top edge minus the margin.
    /// The thumb is re-synced explicitly afterwards: the host may report
    /// offsets while the block is still transiently mispositioned.
    pub fn scroll_to(&self, block_id: &str, offset: u16) {
        let Some(top) = self.content.block_top(block_id) else {
            warn!("scroll_to: unknown content block '{block_id}'");
            return;
        };
        let height = self.content.block_height(block_id).unwrap_or(0);
        let bottom = top.saturating_add(height);
        let viewport_height = self.viewport.rect().height;
        let scroll_top = self.host.scroll_top();

        let rel_top = top as i32 - scroll_top as i32;
        let rel_bottom = bottom as i32 - scroll_top as i32;
        if rel_top > offset as i32 && rel_bottom < viewport_height as i32 - offset as i32 {
            return;
        }

        let target = if rel_bottom >= viewport_height as i32 - offset as i32 {
            top as i32 + height as i32 + offset as i32 - viewport_height as i32
        } else {
            top as i32 - offset as i32
        };
        self.host.set_scroll_top(target.max(0) as u16);
        self.sync_vertical();
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Disconnect from the host: cancel pending tasks and drop listeners.
    ///
    /// Pointer or scroll events delivered after this are ignored.
    pub fn detach(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.detached = true;
        }
        if let Some(vertical) = &self.vertical {
            vertical.detach();
        }
        self.host.clear_listeners();
        self.allow_selection.cancel();
        debug!("scrollable '{}' detached", self.root.id());
    }

    pub fn is_detached(&self) -> bool {
        self.inner
            .read()
            .map(|inner| inner.detached)
            .unwrap_or(true)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn root(&self) -> &Pane {
        &self.root
    }

    pub fn viewport(&self) -> &Pane {
        &self.viewport
    }

    pub fn content(&self) -> &Pane {
        &self.content
    }

    pub fn host(&self) -> &ScrollPane {
        &self.host
    }

    pub fn vertical(&self) -> Option<&VerticalScroll> {
        self.vertical.as_ref()
    }

    pub(super) fn viewport_contains(&self, x: u16, y: u16) -> bool {
        self.viewport.rect().contains(x, y)
    }
}

impl Clone for Scrollable {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            viewport: self.viewport.clone(),
            content: self.content.clone(),
            host: self.host.clone(),
            vertical: self.vertical.clone(),
            cascade: self.cascade.clone(),
            allow_selection: Arc::clone(&self.allow_selection),
            visibility: self.visibility.clone(),
            inner: Arc::clone(&self.inner),
        }
    }
}
