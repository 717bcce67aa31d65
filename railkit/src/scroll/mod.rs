//! The draggable thumb-on-track scroll widget.
//!
//! A [`Scroll`] owns the synthetic track and thumb panes for one axis. It
//! knows nothing about the content being scrolled: the owner feeds it
//! viewport and content measurements through `update`, pushes the committed
//! native offset through `set_shift`, and listens for `shift` requests that
//! user interaction produces. Requests are not state changes — the widget's
//! cached position only moves when the owner syncs it back.

mod events;
mod state;

pub use state::{Scroll, ScrollConfig};

/// A scroll running along the top-to-bottom axis.
pub type VerticalScroll = Scroll<crate::axis::Vertical>;

/// A scroll running along the left-to-right axis.
pub type HorizontalScroll = Scroll<crate::axis::Horizontal>;
