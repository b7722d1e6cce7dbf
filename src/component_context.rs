//! Per-window state handed to application views.
//!
//! `ViewContext` bundles what a view may need while rendering or handling a
//! key so the `AppView` trait stays stable as more state is exposed.

use crate::window::Payload;

/// Context passed to `AppView` methods.
///
/// - `payload`: data the window was opened (or last re-targeted) with.
/// - `focused`: whether the window is the active one.
/// - `capture_active`: a drag or resize holds the pointer; embedded content
///   must not react to input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewContext<'a> {
    payload: Option<&'a Payload>,
    dark_mode: bool,
    focused: bool,
    capture_active: bool,
}

impl<'a> ViewContext<'a> {
    pub const fn new(payload: Option<&'a Payload>) -> Self {
        Self {
            payload,
            dark_mode: false,
            focused: false,
            capture_active: false,
        }
    }

    pub const fn payload(&self) -> Option<&'a Payload> {
        self.payload
    }

    pub const fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub const fn focused(&self) -> bool {
        self.focused
    }

    pub const fn capture_active(&self) -> bool {
        self.capture_active
    }

    pub const fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    pub const fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub const fn with_capture(mut self, capture_active: bool) -> Self {
        self.capture_active = capture_active;
        self
    }
}
