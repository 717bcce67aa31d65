use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use panedom::{Rect, ScrollPane};

#[test]
fn test_scroll_top_clamps_to_content() {
    let pane = ScrollPane::new(Rect::from_size(40, 10));
    pane.set_content_height(30);

    pane.set_scroll_top(100);
    assert_eq!(pane.scroll_top(), 20);

    pane.set_scroll_top(5);
    assert_eq!(pane.scroll_top(), 5);
}

#[test]
fn test_scroll_top_zero_when_content_fits() {
    let pane = ScrollPane::new(Rect::from_size(40, 10));
    pane.set_content_height(8);

    pane.set_scroll_top(3);
    assert_eq!(pane.scroll_top(), 0);
    assert_eq!(pane.max_scroll_top(), 0);
}

#[test]
fn test_listeners_fire_only_on_change() {
    let pane = ScrollPane::new(Rect::from_size(40, 10));
    pane.set_content_height(30);

    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);
    pane.on_scroll(move |_, _| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    pane.set_scroll_top(5);
    pane.set_scroll_top(5);
    pane.set_scroll_top(5);
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    pane.set_scroll_top(6);
    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

#[test]
fn test_content_shrink_reclamps_silently() {
    let pane = ScrollPane::new(Rect::from_size(40, 10));
    pane.set_content_height(500);
    pane.set_scroll_top(400);
    assert_eq!(pane.scroll_top(), 400);

    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);
    pane.on_scroll(move |_, _| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    // Content now fits; the stale offset collapses without a notification.
    pane.set_content_height(8);
    assert_eq!(pane.scroll_top(), 0);
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[test]
fn test_viewport_change_reclamps_offset() {
    let pane = ScrollPane::new(Rect::from_size(40, 10));
    pane.set_content_height(30);
    pane.set_scroll_top(20);

    pane.set_viewport(Rect::from_size(40, 25));
    assert_eq!(pane.scroll_top(), 5);
}

#[test]
fn test_cleared_listeners_stay_silent() {
    let pane = ScrollPane::new(Rect::from_size(40, 10));
    pane.set_content_height(30);

    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);
    pane.on_scroll(move |_, _| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    pane.clear_listeners();
    pane.set_scroll_top(7);
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}
