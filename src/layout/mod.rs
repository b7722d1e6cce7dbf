pub mod floating;

use crate::constants::{CASCADE_STEP, EDGE_MARGIN, MIN_HEIGHT, MIN_WIDTH};

/// A point in viewport pixels. Windows may sit partially off-screen, so the
/// coordinates are signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - other`.
    pub fn delta_from(self, other: Point) -> (i32, i32) {
        (
            self.x.saturating_sub(other.x),
            self.y.saturating_sub(other.y),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Raise either dimension to the window minimum.
    pub fn clamp_min(self) -> Self {
        Self {
            width: self.width.max(MIN_WIDTH),
            height: self.height.max(MIN_HEIGHT),
        }
    }
}

/// Signed origin with unsigned size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_parts(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    pub fn contains(&self, point: Point) -> bool {
        rect_contains(*self, point)
    }
}

pub fn rect_contains(rect: Rect, point: Point) -> bool {
    let (px, py) = (point.x as i64, point.y as i64);
    px >= rect.x as i64 && px < rect.right() && py >= rect.y as i64 && py < rect.bottom()
}

/// Origin that centers `size` inside `viewport`. Odd remainders round toward
/// negative infinity so oversized windows still land left/up of center.
pub fn centered_origin(viewport: Size, size: Size) -> Point {
    let dx = viewport.width as i64 - size.width as i64;
    let dy = viewport.height as i64 - size.height as i64;
    Point::new(
        clamp_i32(dx.div_euclid(2)),
        clamp_i32(dy.div_euclid(2)),
    )
}

/// Centered origin shifted by one cascade step per already-open window, then
/// pushed away from the top/left edges.
pub fn cascade_origin(viewport: Size, size: Size, open_windows: usize) -> Point {
    let center = centered_origin(viewport, size);
    let step = (CASCADE_STEP as i64).saturating_mul(open_windows as i64);
    Point::new(
        clamp_i32(center.x as i64 + step).max(EDGE_MARGIN),
        clamp_i32(center.y as i64 + step).max(EDGE_MARGIN),
    )
}

pub(crate) fn clamp_i32(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
