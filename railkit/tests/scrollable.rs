use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use railkit::axis::Vertical;
use railkit::error::Error;
use railkit::events::EventResult;
use railkit::scroll::{Scroll, ScrollConfig, VerticalScroll};
use railkit::scrollable::{Scrollable, ScrollableBuilder, ScrollableConfig};

use panedom::{ContentBlock, Pane, PointerEvent, PointerKind, Rect, ScrollPane, ScrollbarMetrics, VisibilityListener};

const VIEWPORT: Rect = Rect::new(0, 0, 20, 10);

fn blocks(count: usize, height: u16) -> Vec<ContentBlock> {
    (0..count)
        .map(|index| ContentBlock::new(format!("block-{index}"), height))
        .collect()
}

fn test_metrics() -> ScrollbarMetrics {
    ScrollbarMetrics {
        vertical: 1,
        horizontal: 0,
        vertical_optimized: 1,
        horizontal_optimized: 0,
    }
}

fn make_vertical(config: ScrollConfig) -> VerticalScroll {
    let root = Pane::new("scroll");
    // Track runs down the viewport's right edge.
    let track = Pane::with_rect(
        "scroll-track",
        Rect::new(VIEWPORT.right(), VIEWPORT.y, 1, VIEWPORT.height),
    );
    let thumb = Pane::with_rect("scroll-thumb", Rect::new(0, 0, 1, 0));
    Scroll::new(Vertical, root, track, thumb, config)
}

struct Fixture {
    scrollable: Scrollable,
    scroll: VerticalScroll,
    visibility: VisibilityListener,
}

fn fixture(
    content: Vec<ContentBlock>,
    scroll_config: ScrollConfig,
    config: ScrollableConfig,
    visible: bool,
) -> Fixture {
    let root = Pane::new("scrollable");
    let viewport = Pane::with_rect("scrollable-viewport", VIEWPORT);
    let content_pane = Pane::new("scrollable-content");
    content_pane.set_blocks(content);
    let host = ScrollPane::new(VIEWPORT);
    let scroll = make_vertical(scroll_config);
    let visibility = VisibilityListener::new(visible);

    let scrollable = ScrollableBuilder::new(root, viewport, content_pane, host)
        .vertical(scroll.clone())
        .config(config)
        .metrics(test_metrics())
        .visibility(visibility.clone())
        .build()
        .expect("scrollable should build");

    Fixture {
        scrollable,
        scroll,
        visibility,
    }
}

fn count_shifts(scroll: &VerticalScroll) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    scroll.on_shift(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    count
}

#[test]
fn test_builder_requires_an_axis() {
    let result = ScrollableBuilder::new(
        Pane::new("scrollable"),
        Pane::with_rect("viewport", VIEWPORT),
        Pane::new("content"),
        ScrollPane::new(VIEWPORT),
    )
    .build();

    assert_eq!(result.err(), Some(Error::NoAxisConfigured));
}

#[test]
fn test_native_sync_never_emits_shift() {
    let fx = fixture(blocks(4, 10), ScrollConfig::default(), ScrollableConfig::default(), true);
    let emitted = count_shifts(&fx.scroll);

    // A pure sync pass: the native offset moves, the thumb follows, and no
    // shift request ever fires.
    fx.scrollable.host().set_scroll_top(15);
    fx.scrollable.host().set_scroll_top(30);
    fx.scrollable.sync_vertical();

    assert_eq!(fx.scroll.current_scrollable_shift(), 30);
    assert_eq!(emitted.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_drag_applies_offset_and_suppresses_selection() {
    let scroll_config = ScrollConfig {
        min_thumb_size: 2,
        ..ScrollConfig::default()
    };
    let fx = fixture(blocks(4, 10), scroll_config, ScrollableConfig::default(), true);

    // viewport=10, content=40, track=10: thumb = 3, max_shift = 7, range 30.
    assert_eq!(fx.scroll.thumb_size(), 3);

    let down = PointerEvent::down(VIEWPORT.right(), 1);
    assert_eq!(fx.scrollable.handle_pointer(&down), EventResult::StartDrag);

    let moved = PointerEvent::moved(VIEWPORT.right(), 4);
    assert_eq!(fx.scrollable.handle_pointer(&moved), EventResult::Consumed);

    // +3 track cells -> round(3 * 30 / 7) = 13 content cells, applied to the
    // native offset and synced back into the thumb.
    assert_eq!(fx.scrollable.host().scroll_top(), 13);
    assert_eq!(fx.scroll.current_scrollable_shift(), 13);
    assert!(fx.scrollable.content().has_flag("scrolling"));

    let up = PointerEvent::up(VIEWPORT.right(), 4);
    assert_eq!(fx.scrollable.handle_pointer(&up), EventResult::Consumed);

    // Selection returns after the quiet window.
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(!fx.scrollable.content().has_flag("scrolling"));
}

#[test]
fn test_auto_hide_cascade_follows_content() {
    let fx = fixture(blocks(4, 10), ScrollConfig::default(), ScrollableConfig::default(), true);

    assert!(fx.scrollable.root().has_flag("vertical-active"));
    assert_eq!(fx.scrollable.host().gutter(), 1);

    // Content now fits: the overlay hides and the builtin gutter returns.
    fx.scrollable.set_content(blocks(1, 4));
    assert!(fx.scroll.is_disabled());
    assert!(!fx.scrollable.root().has_flag("vertical-active"));
    assert_eq!(fx.scrollable.host().gutter(), 0);

    // And back again.
    fx.scrollable.set_content(blocks(6, 10));
    assert!(!fx.scroll.is_disabled());
    assert!(fx.scrollable.root().has_flag("vertical-active"));
    assert_eq!(fx.scrollable.host().gutter(), 1);
}

#[test]
fn test_pinned_overlay_survives_disable() {
    let config = ScrollableConfig { auto_hiding: false };
    let fx = fixture(blocks(1, 4), ScrollConfig::default(), config, true);

    // Content fits, the scroll is disabled, but the overlay stays applied.
    assert!(fx.scroll.is_disabled());
    assert!(fx.scrollable.root().has_flag("vertical-active"));
    assert_eq!(fx.scrollable.host().gutter(), 1);
}

#[test]
fn test_content_shrink_recovers_from_stale_offset() {
    let fx = fixture(blocks(5, 100), ScrollConfig::default(), ScrollableConfig::default(), true);

    fx.scrollable.host().set_scroll_top(400);
    assert_eq!(fx.scroll.current_scrollable_shift(), 400);

    // Shrinking below the viewport disables the axis and collapses the
    // stale offset without panicking.
    fx.scrollable.set_content(blocks(1, 8));
    assert!(fx.scroll.is_disabled());
    assert_eq!(fx.scrollable.host().scroll_top(), 0);
    assert_eq!(fx.scroll.current_shift(), 0);
}

#[test]
fn test_set_content_and_has_content() {
    let fx = fixture(Vec::new(), ScrollConfig::default(), ScrollableConfig::default(), true);
    assert!(!fx.scrollable.has_content());
    assert!(fx.scroll.is_disabled());

    fx.scrollable.set_content(blocks(4, 10));
    assert!(fx.scrollable.has_content());
    assert!(!fx.scroll.is_disabled());
}

#[test]
fn test_scroll_to_brings_blocks_into_view() {
    let fx = fixture(blocks(5, 4), ScrollConfig::default(), ScrollableConfig::default(), true);

    // block-4 occupies 16..20 of a 20-cell content in a 10-cell viewport.
    fx.scrollable.scroll_to("block-4", 0);
    assert_eq!(fx.scrollable.host().scroll_top(), 10);
    assert_eq!(fx.scroll.current_scrollable_shift(), 10);

    // block-3 (12..16) is now fully visible; nothing moves.
    fx.scrollable.scroll_to("block-3", 0);
    assert_eq!(fx.scrollable.host().scroll_top(), 10);

    // Scrolling back up aligns the block's top edge.
    fx.scrollable.scroll_to("block-0", 0);
    assert_eq!(fx.scrollable.host().scroll_top(), 0);

    // Unknown targets are ignored.
    fx.scrollable.scroll_to("missing", 0);
    assert_eq!(fx.scrollable.host().scroll_top(), 0);
}

#[test]
fn test_wheel_steps_through_viewport() {
    let fx = fixture(blocks(4, 10), ScrollConfig::default(), ScrollableConfig::default(), true);

    let wheel = PointerEvent::new(5, 5, PointerKind::Wheel(1));
    assert_eq!(fx.scrollable.handle_pointer(&wheel), EventResult::Consumed);
    assert_eq!(fx.scrollable.host().scroll_top(), 3);

    // Wheel outside the viewport belongs to someone else.
    let outside = PointerEvent::new(40, 5, PointerKind::Wheel(1));
    assert_eq!(fx.scrollable.handle_pointer(&outside), EventResult::Ignored);
    assert_eq!(fx.scrollable.host().scroll_top(), 3);
}

#[test]
fn test_deferred_measurement_until_visible() {
    let fx = fixture(blocks(4, 10), ScrollConfig::default(), ScrollableConfig::default(), false);

    // Hidden at build time: no measurement pass has run yet.
    assert_eq!(fx.scroll.max_scrollable_shift(), 0);

    fx.visibility.set_visible(true);
    assert_eq!(fx.scroll.max_scrollable_shift(), 30);
    assert!(!fx.scroll.is_disabled());
}

#[test]
fn test_resize_reclamps_and_resyncs() {
    let fx = fixture(blocks(4, 10), ScrollConfig::default(), ScrollableConfig::default(), true);
    fx.scrollable.host().set_scroll_top(30);

    // The viewport grows; the old offset is out of range afterwards.
    fx.scrollable.viewport().set_rect(Rect::new(0, 0, 20, 35));
    fx.scroll.track().set_height(35);
    fx.scrollable.handle_resize();

    assert_eq!(fx.scrollable.host().scroll_top(), 5);
    assert_eq!(fx.scroll.current_scrollable_shift(), 5);
    assert_eq!(fx.scroll.max_scrollable_shift(), 5);
}

#[test]
fn test_detach_ignores_stale_events() {
    let fx = fixture(blocks(4, 10), ScrollConfig::default(), ScrollableConfig::default(), true);
    fx.scrollable.detach();

    let down = PointerEvent::down(VIEWPORT.right(), 1);
    assert_eq!(fx.scrollable.handle_pointer(&down), EventResult::Ignored);

    // Native scroll no longer reaches the overlay.
    fx.scrollable.host().set_scroll_top(15);
    assert_eq!(fx.scroll.current_scrollable_shift(), 0);
}
