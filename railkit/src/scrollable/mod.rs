//! The scrollable composite: a natively scrolling host pane bridged to an
//! overlay scroll widget.
//!
//! The composite owns the native offset — it is its sole mutator. The owned
//! [`crate::scroll::Scroll`] only ever displays a projection of that offset,
//! pushed in through `set_shift`, and asks for changes by emitting `shift`
//! requests. That one-way split is what keeps the native-scroll → display
//! path from ever feeding back into another native mutation.

mod events;
mod state;

pub use state::{Scrollable, ScrollableBuilder, ScrollableConfig};
