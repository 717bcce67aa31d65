pub mod event;
pub mod geometry;
pub mod metrics;
pub mod pane;
pub mod scroll;
pub mod visibility;

pub use event::{PointerEvent, PointerKind};
pub use geometry::Rect;
pub use metrics::{GutterProbe, ScrollbarMetrics};
pub use pane::{ContentBlock, Pane};
pub use scroll::ScrollPane;
pub use visibility::VisibilityListener;
