pub mod axis;
pub mod error;
pub mod events;
pub mod flags;
pub mod scroll;
pub mod scrollable;
pub mod timer;

pub use error::Error;

pub mod prelude {
    pub use crate::axis::{AxisStrategy, Horizontal, Vertical};
    pub use crate::error::Error;
    pub use crate::events::{EventResult, ShiftRequest, ShiftUnits};
    pub use crate::scroll::{HorizontalScroll, Scroll, ScrollConfig, VerticalScroll};
    pub use crate::scrollable::{Scrollable, ScrollableBuilder, ScrollableConfig};
    pub use crate::timer::{Debounced, Repeater};

    pub use panedom::{
        ContentBlock, GutterProbe, Pane, PointerEvent, PointerKind, Rect, ScrollPane,
        ScrollbarMetrics, VisibilityListener,
    };
}
