use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::{Point, Rect, clamp_i32};
use crate::constants::{CORNER_HANDLE, EDGE_HANDLE, MIN_HEIGHT, MIN_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    North,
    South,
    East,
    West,
}

impl Edge {
    fn is_vertical(self) -> bool {
        matches!(self, Edge::North | Edge::South)
    }
}

/// The edge or corner grabbed for a resize: one or two non-opposite edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResizeDirection {
    vertical: Option<Edge>,
    horizontal: Option<Edge>,
}

impl ResizeDirection {
    pub const NORTH: Self = Self::side(Edge::North);
    pub const SOUTH: Self = Self::side(Edge::South);
    pub const EAST: Self = Self::side(Edge::East);
    pub const WEST: Self = Self::side(Edge::West);
    pub const NORTH_EAST: Self = Self::pair(Edge::North, Edge::East);
    pub const NORTH_WEST: Self = Self::pair(Edge::North, Edge::West);
    pub const SOUTH_EAST: Self = Self::pair(Edge::South, Edge::East);
    pub const SOUTH_WEST: Self = Self::pair(Edge::South, Edge::West);

    const fn side(edge: Edge) -> Self {
        match edge {
            Edge::North | Edge::South => Self {
                vertical: Some(edge),
                horizontal: None,
            },
            Edge::East | Edge::West => Self {
                vertical: None,
                horizontal: Some(edge),
            },
        }
    }

    const fn pair(vertical: Edge, horizontal: Edge) -> Self {
        Self {
            vertical: Some(vertical),
            horizontal: Some(horizontal),
        }
    }

    /// Build a corner from two edges in any order. Returns `None` for the same
    /// edge twice or for opposite edges.
    pub fn corner(a: Edge, b: Edge) -> Option<Self> {
        match (a.is_vertical(), b.is_vertical()) {
            (true, false) => Some(Self::pair(a, b)),
            (false, true) => Some(Self::pair(b, a)),
            _ => None,
        }
    }

    pub fn edges(self) -> impl Iterator<Item = Edge> {
        self.vertical.into_iter().chain(self.horizontal)
    }

    pub fn contains(self, edge: Edge) -> bool {
        self.vertical == Some(edge) || self.horizontal == Some(edge)
    }
}

impl fmt::Display for ResizeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in self.edges() {
            let tag = match edge {
                Edge::North => "n",
                Edge::South => "s",
                Edge::East => "e",
                Edge::West => "w",
            };
            f.write_str(tag)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid resize direction: {0:?}")]
pub struct ParseDirectionError(pub String);

impl FromStr for ResizeDirection {
    type Err = ParseDirectionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let edge = |c: char| match c {
            'n' => Some(Edge::North),
            's' => Some(Edge::South),
            'e' => Some(Edge::East),
            'w' => Some(Edge::West),
            _ => None,
        };
        let err = || ParseDirectionError(value.to_string());
        let mut chars = value.chars().map(|c| c.to_ascii_lowercase());
        let first = chars.next().and_then(edge).ok_or_else(err)?;
        match chars.next() {
            None => Ok(Self::side(first)),
            Some(c) => {
                let second = edge(c).ok_or_else(err)?;
                if chars.next().is_some() {
                    return Err(err());
                }
                Self::corner(first, second).ok_or_else(err)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeHandle {
    pub rect: Rect,
    pub direction: ResizeDirection,
}

/// Resize affordances of a normal window, topmost first. The top edge has no
/// handle: resizing never moves a window's top edge.
pub fn resize_handles(rect: Rect) -> Vec<ResizeHandle> {
    let mut handles = Vec::with_capacity(5);
    if rect.width == 0 || rect.height == 0 {
        return handles;
    }
    let corner_w = CORNER_HANDLE.min(rect.width);
    let corner_h = CORNER_HANDLE.min(rect.height);
    let edge_w = EDGE_HANDLE.min(rect.width);
    let edge_h = EDGE_HANDLE.min(rect.height);
    let right = clamp_i32(rect.right());
    let bottom = clamp_i32(rect.bottom());

    handles.push(ResizeHandle {
        rect: Rect::new(right - corner_w as i32, bottom - corner_h as i32, corner_w, corner_h),
        direction: ResizeDirection::SOUTH_EAST,
    });
    handles.push(ResizeHandle {
        rect: Rect::new(rect.x, bottom - corner_h as i32, corner_w, corner_h),
        direction: ResizeDirection::SOUTH_WEST,
    });
    handles.push(ResizeHandle {
        rect: Rect::new(right - edge_w as i32, rect.y, edge_w, rect.height),
        direction: ResizeDirection::EAST,
    });
    handles.push(ResizeHandle {
        rect: Rect::new(rect.x, bottom - edge_h as i32, rect.width, edge_h),
        direction: ResizeDirection::SOUTH,
    });
    handles.push(ResizeHandle {
        rect: Rect::new(rect.x, rect.y, edge_w, rect.height),
        direction: ResizeDirection::WEST,
    });
    handles
}

/// Compute live resize geometry.
///
/// `start` is the geometry at session entry and `live` the geometry produced
/// by the previous pointer move; `dx`/`dy` are measured from the pointer
/// position at session entry. Each grabbed edge is applied independently:
///
/// - east/south grow from the start size and clamp at the minimum;
/// - west moves `x` and `width` together, or leaves both at their last valid
///   values when the proposed width would fall below the minimum;
/// - north is accepted but never changes the geometry.
pub fn apply_resize_drag(
    start: Rect,
    live: Rect,
    direction: ResizeDirection,
    dx: i32,
    dy: i32,
) -> Rect {
    let mut next = live;
    for edge in direction.edges() {
        match edge {
            Edge::East => next.width = grow(start.width, dx).max(MIN_WIDTH),
            Edge::South => next.height = grow(start.height, dy).max(MIN_HEIGHT),
            Edge::West => {
                let proposed = start.width as i64 - dx as i64;
                if proposed >= MIN_WIDTH as i64 {
                    next.width = proposed.min(u32::MAX as i64) as u32;
                    next.x = start.x.saturating_add(dx);
                }
            }
            Edge::North => {}
        }
    }
    next
}

/// Window origin that keeps the grab offset under the pointer. No clamping:
/// windows may be dragged partially off-screen.
pub fn apply_move_drag(pointer: Point, grab_offset: Point) -> Point {
    Point::new(
        pointer.x.saturating_sub(grab_offset.x),
        pointer.y.saturating_sub(grab_offset.y),
    )
}

fn grow(start: u32, delta: i32) -> u32 {
    (start as i64 + delta as i64).clamp(0, u32::MAX as i64) as u32
}
