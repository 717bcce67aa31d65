/// Pointer interaction kinds delivered to panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Primary button pressed.
    Down,
    /// Pointer moved (with or without the button held).
    Move,
    /// Primary button released.
    Up,
    /// Wheel tick; positive scrolls towards the content end.
    Wheel(i16),
}

/// A pointer event in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub x: u16,
    pub y: u16,
    pub kind: PointerKind,
}

impl PointerEvent {
    pub const fn new(x: u16, y: u16, kind: PointerKind) -> Self {
        Self { x, y, kind }
    }

    pub const fn down(x: u16, y: u16) -> Self {
        Self::new(x, y, PointerKind::Down)
    }

    pub const fn moved(x: u16, y: u16) -> Self {
        Self::new(x, y, PointerKind::Move)
    }

    pub const fn up(x: u16, y: u16) -> Self {
        Self::new(x, y, PointerKind::Up)
    }

    /// Convert a crossterm mouse event into a pointer event.
    ///
    /// Secondary buttons and hover-only kinds that this toolkit does not
    /// react to map to `None`.
    pub fn from_mouse(mouse: &crossterm::event::MouseEvent) -> Option<Self> {
        use crossterm::event::{MouseButton, MouseEventKind};

        let kind = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => PointerKind::Down,
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => PointerKind::Move,
            MouseEventKind::Up(MouseButton::Left) => PointerKind::Up,
            MouseEventKind::ScrollUp => PointerKind::Wheel(-1),
            MouseEventKind::ScrollDown => PointerKind::Wheel(1),
            _ => return None,
        };

        Some(Self {
            x: mouse.column,
            y: mouse.row,
            kind,
        })
    }
}
