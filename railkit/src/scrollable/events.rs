//! Pointer routing for the scrollable composite.

use panedom::{PointerEvent, PointerKind};

use crate::events::EventResult;

use super::Scrollable;

impl Scrollable {
    /// Route a pointer event to the owned scroll.
    ///
    /// Presses hit-test the overlay's track and thumb; moves and releases
    /// are forwarded unconditionally so an active drag keeps receiving them
    /// after the pointer leaves the widget (the `StartDrag` capture
    /// contract). Wheel ticks over the viewport become step requests.
    pub fn handle_pointer(&self, event: &PointerEvent) -> EventResult {
        if self.is_detached() {
            return EventResult::Ignored;
        }
        let Some(vertical) = self.vertical() else {
            return EventResult::Ignored;
        };

        match event.kind {
            PointerKind::Down => vertical.on_pointer_down(event),
            PointerKind::Move => vertical.on_pointer_move(event),
            PointerKind::Up => vertical.on_pointer_up(),
            PointerKind::Wheel(delta) => {
                if self.viewport_contains(event.x, event.y) {
                    vertical.on_wheel(delta)
                } else {
                    EventResult::Ignored
                }
            }
        }
    }
}
