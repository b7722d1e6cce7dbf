//! Pointer events in logical viewport pixels, independent of the input
//! backend that produced them.

use crate::layout::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// Second press in quick succession at the same spot; sent instead of
    /// that press's `Down`.
    DoubleClick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
}

impl PointerEvent {
    pub const fn new(kind: PointerEventKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            position: Point::new(x, y),
        }
    }

    pub const fn down(x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Down, x, y)
    }

    pub const fn moved(x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Move, x, y)
    }

    pub const fn up(x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Up, x, y)
    }

    pub const fn double_click(x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::DoubleClick, x, y)
    }
}
