//! Window chrome geometry: title bar, traffic-light buttons and resize
//! handles, and hit-testing against them.

use crate::constants::{BUTTON_GAP, BUTTON_PADDING, BUTTON_SIZE, TITLE_BAR_HEIGHT};
use crate::layout::floating::{ResizeDirection, resize_handles};
use crate::layout::{Point, Rect, clamp_i32};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeHit {
    Close,
    Minimize,
    Maximize,
    TitleBar,
    Resize(ResizeDirection),
    Content,
}

pub fn title_bar_rect(window: Rect) -> Rect {
    Rect::new(
        window.x,
        window.y,
        window.width,
        TITLE_BAR_HEIGHT.min(window.height),
    )
}

/// Close, minimize and maximize buttons, left to right.
pub fn button_rects(window: Rect) -> [(ChromeHit, Rect); 3] {
    let top = offset(window.y, TITLE_BAR_HEIGHT.saturating_sub(BUTTON_SIZE) / 2);
    let at = |slot: u32| {
        let left = offset(window.x, BUTTON_PADDING + slot * (BUTTON_SIZE + BUTTON_GAP));
        Rect::new(left, top, BUTTON_SIZE, BUTTON_SIZE)
    };
    [
        (ChromeHit::Close, at(0)),
        (ChromeHit::Minimize, at(1)),
        (ChromeHit::Maximize, at(2)),
    ]
}

fn offset(origin: i32, by: u32) -> i32 {
    clamp_i32(origin as i64 + by as i64)
}

/// What part of `window` lies under `point`. Resize handles sit above the
/// title bar and are only offered when `resizable` is set.
pub fn hit_test_chrome(window: Rect, point: Point, resizable: bool) -> Option<ChromeHit> {
    if !window.contains(point) {
        return None;
    }
    if resizable
        && let Some(handle) = resize_handles(window)
            .into_iter()
            .find(|handle| handle.rect.contains(point))
    {
        return Some(ChromeHit::Resize(handle.direction));
    }
    if title_bar_rect(window).contains(point) {
        let button = button_rects(window)
            .into_iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(hit, _)| hit);
        return Some(button.unwrap_or(ChromeHit::TitleBar));
    }
    Some(ChromeHit::Content)
}
