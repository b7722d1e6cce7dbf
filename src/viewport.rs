use crate::constants::{
    CONSTRAINED_CHROME, CONSTRAINED_TOP, MAXIMIZED_CHROME, MAXIMIZED_TOP, MOBILE_BREAKPOINT,
};
use crate::layout::{Rect, Size};

/// The visible surface in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Below the mobile breakpoint windows are forced full-bleed and cannot
    /// be dragged or resized.
    pub fn is_constrained(&self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }

    /// Area occupied by a maximized window, between top bar and dock.
    pub fn maximized_rect(&self) -> Rect {
        Rect::new(
            0,
            MAXIMIZED_TOP,
            self.width,
            self.height.saturating_sub(MAXIMIZED_CHROME),
        )
    }

    /// Area occupied by every window in the constrained layout.
    pub fn constrained_rect(&self) -> Rect {
        Rect::new(
            0,
            CONSTRAINED_TOP,
            self.width,
            self.height.saturating_sub(CONSTRAINED_CHROME),
        )
    }
}
