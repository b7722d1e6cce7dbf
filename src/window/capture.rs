//! Surface-wide pointer capture held for the lifetime of one interaction
//! session.
//!
//! While a drag or resize is in flight the host must route every pointer
//! move/up to the window manager, even when the pointer leaves the window,
//! and embedded content that would swallow pointer events must stand down.
//! The session owns a [`CaptureLease`]; dropping the session releases the
//! capture, so every exit path (pointer-up, window closed mid-drag, manager
//! dropped) gives it back.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

pub trait PointerCapture: fmt::Debug {
    /// Widen capture to the whole surface and suppress embedded content.
    fn acquire(&self);

    /// Undo `acquire`.
    fn release(&self);
}

/// Capture host for surfaces that always deliver every pointer event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCapture;

impl PointerCapture for NoopCapture {
    fn acquire(&self) {}
    fn release(&self) {}
}

/// Capture host that records its state so renderers can react to it.
#[derive(Debug, Default)]
pub struct CaptureState {
    held: Cell<u32>,
    acquisitions: Cell<u64>,
}

impl CaptureState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a session currently holds the capture.
    pub fn is_active(&self) -> bool {
        self.held.get() > 0
    }

    /// Total number of times the capture has been acquired.
    pub fn acquisitions(&self) -> u64 {
        self.acquisitions.get()
    }
}

impl PointerCapture for CaptureState {
    fn acquire(&self) {
        self.held.set(self.held.get() + 1);
        self.acquisitions.set(self.acquisitions.get() + 1);
        tracing::trace!("pointer capture acquired");
    }

    fn release(&self) {
        self.held.set(self.held.get().saturating_sub(1));
        tracing::trace!("pointer capture released");
    }
}

/// Held capture; released on drop.
#[derive(Debug)]
pub struct CaptureLease {
    host: Rc<dyn PointerCapture>,
}

impl CaptureLease {
    pub fn acquire(host: Rc<dyn PointerCapture>) -> Self {
        host.acquire();
        Self { host }
    }
}

impl Drop for CaptureLease {
    fn drop(&mut self) {
        self.host.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lease_releases_on_drop() {
        let state = Rc::new(CaptureState::new());
        let lease = CaptureLease::acquire(state.clone());
        assert!(state.is_active());
        drop(lease);
        assert!(!state.is_active());
        assert_eq!(state.acquisitions(), 1);
    }

    #[test]
    fn stray_release_does_not_underflow() {
        let state = CaptureState::new();
        state.release();
        assert!(!state.is_active());
    }
}
