//! Ordered collection of window records plus the stacking counter.
//!
//! Every lifecycle operation on an unknown id is a silent no-op; callers get
//! `false` back so they can tell nothing happened, but nothing is reported.

use super::{Payload, WindowRecord};
use crate::apps::{AppId, AppProfile};
use crate::constants::FIRST_Z_INDEX;
use crate::layout::{Point, Size, cascade_origin};
use crate::viewport::Viewport;

/// Defaults used when `open` has to create a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowTemplate {
    pub id: AppId,
    pub title: String,
    pub size: Size,
    pub windowed_on_mobile: bool,
    pub payload_reopens: bool,
}

impl WindowTemplate {
    pub fn from_profile(id: AppId, profile: &AppProfile) -> Self {
        Self {
            id,
            title: profile.title.clone(),
            size: profile.default_size,
            windowed_on_mobile: profile.windowed_on_mobile,
            payload_reopens: profile.payload_reopens,
        }
    }
}

/// What `open` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new record was created.
    Created,
    /// The record already existed and was only raised.
    Refocused,
    /// The record was minimized; it is visible and raised again.
    Restored,
    /// The record took the new payload and was raised (and un-minimized).
    Retargeted,
}

#[derive(Debug, Clone)]
pub struct WindowRegistry {
    windows: Vec<WindowRecord>,
    next_z: u64,
    active: Option<AppId>,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            next_z: FIRST_Z_INDEX,
            active: None,
        }
    }

    /// Open `template.id`, or bring its existing record back to the front.
    pub fn open(
        &mut self,
        template: WindowTemplate,
        payload: Option<Payload>,
        viewport: Viewport,
    ) -> OpenOutcome {
        if let Some(idx) = self.index_of(template.id) {
            let record = &mut self.windows[idx];
            let outcome = if template.payload_reopens && payload.is_some() {
                record.payload = payload;
                record.minimized = false;
                OpenOutcome::Retargeted
            } else if record.minimized {
                record.minimized = false;
                OpenOutcome::Restored
            } else {
                OpenOutcome::Refocused
            };
            self.raise(idx);
            tracing::debug!(window_id = %template.id, ?outcome, "re-opened window");
            return outcome;
        }

        let size = template.size.clamp_min();
        let (position, maximized) = if viewport.is_constrained() {
            (Point::default(), !template.windowed_on_mobile)
        } else {
            (
                cascade_origin(viewport.size(), size, self.windows.len()),
                false,
            )
        };
        self.windows.push(WindowRecord {
            id: template.id,
            title: template.title,
            minimized: false,
            maximized,
            z_index: 0,
            position,
            size,
            payload,
        });
        let idx = self.windows.len() - 1;
        self.raise(idx);
        tracing::debug!(
            window_id = %template.id,
            x = position.x,
            y = position.y,
            width = size.width,
            height = size.height,
            maximized,
            "opened window"
        );
        OpenOutcome::Created
    }

    pub fn close(&mut self, id: AppId) -> bool {
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        self.windows.remove(idx);
        if self.active == Some(id) {
            self.active = None;
        }
        tracing::debug!(window_id = %id, "closed window");
        true
    }

    /// Hide the window. The active designation is cleared; it does not pass
    /// to another window. Minimizing twice changes nothing.
    pub fn minimize(&mut self, id: AppId) -> bool {
        let Some(record) = self.record_mut(id) else {
            return false;
        };
        if record.minimized {
            return false;
        }
        record.minimized = true;
        self.active = None;
        tracing::debug!(window_id = %id, "minimized window");
        true
    }

    /// Flip the maximized flag and raise the window, whichever way it went.
    pub fn toggle_maximize(&mut self, id: AppId) -> bool {
        let Some(record) = self.record_mut(id) else {
            return false;
        };
        record.maximized = !record.maximized;
        let maximized = record.maximized;
        self.focus(id);
        tracing::debug!(window_id = %id, maximized, "toggled maximize");
        true
    }

    /// Raise the window and mark it active. Minimized windows can't take
    /// focus; they come back through `open`.
    pub fn focus(&mut self, id: AppId) -> bool {
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        if self.windows[idx].minimized {
            return false;
        }
        self.raise(idx);
        true
    }

    /// Overwrite the restored geometry. Ignored while maximized; sizes below
    /// the minimum are raised to it.
    pub fn commit_geometry(&mut self, id: AppId, size: Size, position: Point) -> bool {
        let Some(record) = self.record_mut(id) else {
            return false;
        };
        if record.maximized {
            return false;
        }
        record.size = size.clamp_min();
        record.position = position;
        tracing::debug!(
            window_id = %id,
            x = position.x,
            y = position.y,
            width = record.size.width,
            height = record.size.height,
            "committed geometry"
        );
        true
    }

    pub fn get(&self, id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn contains(&self, id: AppId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Records in creation order.
    pub fn records(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Visible records, bottom to top.
    pub fn stacking_order(&self) -> Vec<&WindowRecord> {
        let mut visible: Vec<&WindowRecord> =
            self.windows.iter().filter(|w| !w.minimized).collect();
        visible.sort_by_key(|w| w.z_index);
        visible
    }

    pub fn topmost(&self) -> Option<&WindowRecord> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.z_index)
    }

    pub fn active(&self) -> Option<AppId> {
        self.active
    }

    pub fn active_record(&self) -> Option<&WindowRecord> {
        self.active.and_then(|id| self.get(id))
    }

    /// Most recently issued stacking value, if any.
    pub fn last_z_index(&self) -> Option<u64> {
        (self.next_z > FIRST_Z_INDEX).then(|| self.next_z - 1)
    }

    fn raise(&mut self, idx: usize) {
        let z = self.next_z;
        self.next_z += 1;
        let record = &mut self.windows[idx];
        record.z_index = z;
        self.active = Some(record.id);
    }

    fn index_of(&self, id: AppId) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }

    fn record_mut(&mut self, id: AppId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.id == id)
    }
}
