//! Drag/resize sessions.
//!
//! A session turns a stream of pointer moves into live geometry. The live
//! value stays inside the session; only `finish` hands it back so the caller
//! can commit it to the registry.

use std::rc::Rc;

use super::capture::{CaptureLease, NoopCapture, PointerCapture};
use crate::apps::AppId;
use crate::layout::floating::{ResizeDirection, apply_move_drag, apply_resize_drag};
use crate::layout::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Move,
    Resize(ResizeDirection),
}

#[derive(Debug)]
struct Session {
    target: AppId,
    kind: InteractionKind,
    pointer_start: Point,
    grab_offset: Point,
    start: Rect,
    live: Rect,
    _capture: CaptureLease,
}

/// Final geometry of an ended session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionEnd {
    pub target: AppId,
    pub kind: InteractionKind,
    pub geometry: Rect,
}

#[derive(Debug)]
pub struct InteractionController {
    capture: Rc<dyn PointerCapture>,
    session: Option<Session>,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(Rc::new(NoopCapture))
    }
}

impl InteractionController {
    pub fn new(capture: Rc<dyn PointerCapture>) -> Self {
        Self {
            capture,
            session: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn target(&self) -> Option<AppId> {
        self.session.as_ref().map(|s| s.target)
    }

    /// In-flight geometry for `id`, if a session targets it.
    pub fn live_geometry(&self, id: AppId) -> Option<Rect> {
        self.session
            .as_ref()
            .filter(|s| s.target == id)
            .map(|s| s.live)
    }

    /// Start a session. Returns `false` and changes nothing while another
    /// session is still running.
    pub fn begin(
        &mut self,
        target: AppId,
        kind: InteractionKind,
        start: Rect,
        pointer: Point,
    ) -> bool {
        if let Some(current) = &self.session {
            tracing::debug!(
                window_id = %target,
                busy_with = %current.target,
                "ignoring session entry while another session is active"
            );
            return false;
        }
        let (dx, dy) = pointer.delta_from(start.origin());
        self.session = Some(Session {
            target,
            kind,
            pointer_start: pointer,
            grab_offset: Point::new(dx, dy),
            start,
            live: start,
            _capture: CaptureLease::acquire(self.capture.clone()),
        });
        tracing::debug!(window_id = %target, ?kind, "interaction started");
        true
    }

    pub fn begin_move(&mut self, target: AppId, start: Rect, pointer: Point) -> bool {
        self.begin(target, InteractionKind::Move, start, pointer)
    }

    pub fn begin_resize(
        &mut self,
        target: AppId,
        direction: ResizeDirection,
        start: Rect,
        pointer: Point,
    ) -> bool {
        self.begin(target, InteractionKind::Resize(direction), start, pointer)
    }

    /// Feed a pointer move. Returns the new live geometry.
    pub fn update(&mut self, pointer: Point) -> Option<Rect> {
        let session = self.session.as_mut()?;
        session.live = match session.kind {
            InteractionKind::Move => {
                Rect::from_parts(apply_move_drag(pointer, session.grab_offset), session.start.size())
            }
            InteractionKind::Resize(direction) => {
                let (dx, dy) = pointer.delta_from(session.pointer_start);
                apply_resize_drag(session.start, session.live, direction, dx, dy)
            }
        };
        tracing::trace!(
            window_id = %session.target,
            x = session.live.x,
            y = session.live.y,
            width = session.live.width,
            height = session.live.height,
            "interaction moved"
        );
        Some(session.live)
    }

    /// End the session and hand back the geometry to commit.
    pub fn finish(&mut self) -> Option<SessionEnd> {
        let session = self.session.take()?;
        tracing::debug!(window_id = %session.target, "interaction finished");
        Some(SessionEnd {
            target: session.target,
            kind: session.kind,
            geometry: session.live,
        })
    }

    /// End the session only if it targets `id`. Used when the window goes
    /// away underneath a running session.
    pub fn finish_for(&mut self, id: AppId) -> Option<SessionEnd> {
        if self.target() == Some(id) {
            self.finish()
        } else {
            None
        }
    }
}
