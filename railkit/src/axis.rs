//! Axis strategies.
//!
//! A scroll is the same widget whether it runs along a row or a column; the
//! only difference is which extent it measures, which coordinate it moves the
//! thumb along, and which pointer coordinate it reads. Those three concerns
//! live behind [`AxisStrategy`], implemented by the two unit structs below
//! and injected into the generic [`crate::scroll::Scroll`].

use panedom::{Pane, PointerEvent, Rect};

/// The three axis-dependent concerns of a scroll widget.
pub trait AxisStrategy: Send + Sync + 'static {
    /// Extent of a rect along this axis.
    fn size_of(&self, rect: Rect) -> u16;

    /// Page origin of a rect along this axis.
    fn origin_of(&self, rect: Rect) -> u16;

    /// The pane's offset along this axis (track-relative for thumbs).
    fn position_of(&self, pane: &Pane) -> u16;

    /// Move the pane along this axis.
    fn set_position(&self, pane: &Pane, position: u16);

    /// Resize the pane along this axis.
    fn set_size(&self, pane: &Pane, size: u16);

    /// The pointer's page coordinate along this axis.
    fn pointer_coord(&self, event: &PointerEvent) -> u16;
}

/// Left-to-right axis: widths, `x`, `PointerEvent::x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Horizontal;

impl AxisStrategy for Horizontal {
    fn size_of(&self, rect: Rect) -> u16 {
        rect.width
    }

    fn origin_of(&self, rect: Rect) -> u16 {
        rect.x
    }

    fn position_of(&self, pane: &Pane) -> u16 {
        pane.rect().x
    }

    fn set_position(&self, pane: &Pane, position: u16) {
        pane.set_x(position);
    }

    fn set_size(&self, pane: &Pane, size: u16) {
        pane.set_width(size);
    }

    fn pointer_coord(&self, event: &PointerEvent) -> u16 {
        event.x
    }
}

/// Top-to-bottom axis: heights, `y`, `PointerEvent::y`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vertical;

impl AxisStrategy for Vertical {
    fn size_of(&self, rect: Rect) -> u16 {
        rect.height
    }

    fn origin_of(&self, rect: Rect) -> u16 {
        rect.y
    }

    fn position_of(&self, pane: &Pane) -> u16 {
        pane.rect().y
    }

    fn set_position(&self, pane: &Pane, position: u16) {
        pane.set_y(position);
    }

    fn set_size(&self, pane: &Pane, size: u16) {
        pane.set_height(size);
    }

    fn pointer_coord(&self, event: &PointerEvent) -> u16 {
        event.y
    }
}
