pub mod capture;
pub mod decorator;
pub mod interaction;
pub mod registry;

mod window_manager;

use crate::apps::AppId;
use crate::layout::{Point, Rect, Size};

pub use capture::{CaptureLease, CaptureState, NoopCapture, PointerCapture};
pub use decorator::{ChromeHit, hit_test_chrome};
pub use interaction::{InteractionController, InteractionKind, SessionEnd};
pub use registry::{OpenOutcome, WindowRegistry, WindowTemplate};
pub use window_manager::{LayoutBranch, WindowDraw, WindowLayout, WindowManager};

/// Opaque data handed to an application view when its window is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Page the browser-style view should show.
    Navigate { url: String },
}

impl Payload {
    pub fn navigate(url: impl Into<String>) -> Self {
        Payload::Navigate { url: url.into() }
    }
}

/// A request from chrome or an application view to open (or re-open) a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    pub app: AppId,
    pub payload: Option<Payload>,
}

impl OpenRequest {
    pub fn new(app: AppId) -> Self {
        Self { app, payload: None }
    }

    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Persistent state of one open application window.
///
/// `position`/`size` hold the restored geometry; the maximized and
/// constrained layouts are computed from the viewport and never written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    id: AppId,
    title: String,
    minimized: bool,
    maximized: bool,
    z_index: u64,
    position: Point,
    size: Size,
    payload: Option<Payload>,
}

impl WindowRecord {
    pub fn id(&self) -> AppId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn z_index(&self) -> u64 {
        self.z_index
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn restored_rect(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }

    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }
}
