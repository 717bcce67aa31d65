//! Pane state flags toggled by the scroll widgets.
//!
//! The styling layer keys visual variants off these; the widgets only ever
//! set and clear them.

/// Set on a scroll's root pane while the axis has overflow to scroll.
pub const ACTIVE: &str = "active";

/// Set on a scroll's root pane while the thumb is being dragged.
pub const DRAGGING: &str = "dragging";

/// Set on the content pane while drag-driven scrolling is in flight;
/// suppresses text selection.
pub const SCROLLING: &str = "scrolling";

/// Set on a scrollable's root pane while the vertical overlay is shown.
pub const VERTICAL_ACTIVE: &str = "vertical-active";
