//! Shared crate-wide constants.
//!
//! All lengths are logical viewport pixels.

/// Smallest width any window record may hold.
pub const MIN_WIDTH: u32 = 300;

/// Smallest height any window record may hold.
pub const MIN_HEIGHT: u32 = 200;

/// Viewports narrower than this use the constrained (mobile) layout.
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Offset applied per already-open window when placing a new one.
pub const CASCADE_STEP: i32 = 20;

/// Newly placed windows keep at least this distance from the top/left edges.
pub const EDGE_MARGIN: i32 = 50;

/// First value handed out by the stacking counter.
pub const FIRST_Z_INDEX: u64 = 10;

/// Size used for applications without a dedicated default.
pub const DEFAULT_WINDOW_WIDTH: u32 = 900;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 650;

/// Top of a maximized window (just below the top bar).
pub const MAXIMIZED_TOP: i32 = 40;

/// Vertical space reserved by the top bar and dock around a maximized window.
pub const MAXIMIZED_CHROME: u32 = 96;

/// Top of a window in the constrained layout.
pub const CONSTRAINED_TOP: i32 = 48;

/// Vertical space reserved around a window in the constrained layout.
pub const CONSTRAINED_CHROME: u32 = 112;

/// Height of the window title bar.
pub const TITLE_BAR_HEIGHT: u32 = 36;

/// Thickness of the straight edge resize handles.
pub const EDGE_HANDLE: u32 = 6;

/// Side length of the square corner resize handles.
pub const CORNER_HANDLE: u32 = 16;

/// Title bar button geometry: diameter, left padding and spacing.
pub const BUTTON_SIZE: u32 = 12;
pub const BUTTON_PADDING: u32 = 16;
pub const BUTTON_GAP: u32 = 8;
