//! Pointer handling for the scroll widget: the drag state machine and the
//! track-press auto-repeat.

use log::debug;
use panedom::{PointerEvent, Rect};

use crate::axis::AxisStrategy;
use crate::events::{EventResult, ShiftUnits};
use crate::flags;
use crate::timer::Repeater;

use super::state::{DragSession, Scroll};

impl<A: AxisStrategy> Scroll<A> {
    /// Handle drag movement.
    ///
    /// The host routes every pointer move here after a `StartDrag` result,
    /// regardless of bounds — drags routinely leave the track.
    pub fn on_pointer_move(&self, event: &PointerEvent) -> EventResult {
        let Some(drag) = self.inner.read().ok().and_then(|inner| inner.drag) else {
            return EventResult::Ignored;
        };
        let coord = self.axis.pointer_coord(event) as i32;
        let candidate = drag.start_shift as i32 + coord - drag.start_pointer as i32;
        self.shift_to(candidate, ShiftUnits::Track);
        EventResult::Consumed
    }

    /// Handle pointer release: end a drag and/or cancel a pending
    /// track-repeat task.
    pub fn on_pointer_up(&self) -> EventResult {
        let mut handled = EventResult::Ignored;

        if let Ok(mut guard) = self.repeat.lock() {
            if let Some(repeater) = guard.take() {
                repeater.cancel();
                debug!("scroll '{}' track repeat cancelled", self.root.id());
                handled = EventResult::Consumed;
            }
        }

        let had_drag = self
            .inner
            .write()
            .ok()
            .and_then(|mut inner| inner.drag.take())
            .is_some();
        if had_drag {
            self.root.del_flag(flags::DRAGGING);
            handled = EventResult::Consumed;
        }

        handled
    }

    /// Handle a wheel tick as one step request per delta unit.
    pub fn on_wheel(&self, delta: i16) -> EventResult {
        if self.is_disabled() || delta == 0 {
            return EventResult::Ignored;
        }
        self.step(delta as i32);
        EventResult::Consumed
    }

    /// Page rect of the thumb (its pane position is track-relative).
    pub fn thumb_rect(&self) -> Rect {
        let track = self.track.rect();
        let thumb = self.thumb.rect();
        Rect::new(
            track.x.saturating_add(thumb.x),
            track.y.saturating_add(thumb.y),
            thumb.width,
            thumb.height,
        )
    }

    /// Cursor position relative to the thumb along the axis: -1 before, 1
    /// past, 0 over it.
    fn pointer_rel_thumb(&self, pointer: u16) -> i32 {
        let start = self
            .axis
            .origin_of(self.track.rect())
            .saturating_add(self.axis.position_of(&self.thumb));
        let end = start.saturating_add(self.thumb_size());
        if pointer < start {
            -1
        } else if pointer > end {
            1
        } else {
            0
        }
    }
}

impl<A: AxisStrategy + Clone> Scroll<A> {
    /// Handle a pointer press on the widget.
    ///
    /// A press on the thumb opens a drag session; a press on the bare track
    /// starts the auto-repeat stepping towards the cursor. Both return
    /// `StartDrag` so the host captures the matching move/up events.
    pub fn on_pointer_down(&self, event: &PointerEvent) -> EventResult {
        if self.is_disabled() {
            return EventResult::Ignored;
        }

        if self.thumb_rect().contains(event.x, event.y) {
            self.begin_drag(event);
            return EventResult::StartDrag;
        }

        if self.track.rect().contains(event.x, event.y) {
            return self.begin_track_repeat(event);
        }

        EventResult::Ignored
    }

    fn begin_drag(&self, event: &PointerEvent) {
        let coord = self.axis.pointer_coord(event);
        if let Ok(mut inner) = self.inner.write() {
            inner.drag = Some(DragSession {
                start_pointer: coord,
                start_shift: inner.current_shift,
            });
        }
        self.root.set_flag(flags::DRAGGING);
        debug!("scroll '{}' drag started at {coord}", self.root.id());
    }

    /// Step towards the cursor once, then keep stepping on a zero-delay
    /// reschedule until the thumb reaches the cursor or pointer-up cancels.
    fn begin_track_repeat(&self, event: &PointerEvent) -> EventResult {
        let pointer = self.axis.pointer_coord(event);
        if self.pointer_rel_thumb(pointer) == 0 {
            return EventResult::Ignored;
        }

        debug!("scroll '{}' track repeat started", self.root.id());
        if self.track_step(pointer) {
            let stepper = self.clone();
            let repeater = Repeater::spawn(move || stepper.track_step(pointer));
            if let Ok(mut guard) = self.repeat.lock() {
                if let Some(previous) = guard.replace(repeater) {
                    previous.cancel();
                }
            }
        }
        EventResult::StartDrag
    }

    /// One auto-repeat step. Returns whether the loop should continue.
    ///
    /// The direction is re-derived from the thumb's current position every
    /// step, so the loop ends on its own once the thumb reaches the cursor.
    /// A request the owner cannot advance also ends it — rescheduling a
    /// step that can never be satisfied would spin forever.
    fn track_step(&self, pointer: u16) -> bool {
        let direction = self.pointer_rel_thumb(pointer);
        if direction == 0 {
            return false;
        }
        let before = self.current_scrollable_shift();
        let thumb_size = self.thumb_size() as i32;
        self.shift_by(direction * thumb_size, ShiftUnits::Track);
        self.current_scrollable_shift() != before
    }
}
