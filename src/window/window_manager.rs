use std::rc::Rc;

use super::capture::{NoopCapture, PointerCapture};
use super::decorator::{ChromeHit, hit_test_chrome};
use super::interaction::{InteractionController, SessionEnd};
use super::registry::{OpenOutcome, WindowRegistry, WindowTemplate};
use super::{OpenRequest, Payload, WindowRecord};
use crate::apps::{AppCatalog, AppId};
use crate::input::{PointerEvent, PointerEventKind};
use crate::layout::floating::ResizeDirection;
use crate::layout::{Point, Rect};
use crate::viewport::Viewport;

/// Which geometry a window is drawn with. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutBranch {
    /// Viewport below the mobile breakpoint.
    Constrained,
    Maximized,
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowLayout {
    pub branch: LayoutBranch,
    pub rect: Rect,
}

impl WindowLayout {
    /// Only normal windows can be dragged or resized.
    pub fn interactive(&self) -> bool {
        self.branch == LayoutBranch::Normal
    }
}

/// One entry of the render plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowDraw {
    pub id: AppId,
    pub title: String,
    pub rect: Rect,
    pub branch: LayoutBranch,
    pub z_index: u64,
    pub focused: bool,
    /// Geometry changes may be eased; off while a session drives the window.
    pub animate: bool,
}

/// Composition root: the registry, the interaction controller, the app
/// policy table and the current viewport.
#[derive(Debug)]
pub struct WindowManager {
    registry: WindowRegistry,
    interaction: InteractionController,
    catalog: AppCatalog,
    viewport: Viewport,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(AppCatalog::default(), Viewport::default())
    }
}

impl WindowManager {
    pub fn new(catalog: AppCatalog, viewport: Viewport) -> Self {
        Self::with_capture(catalog, viewport, Rc::new(NoopCapture))
    }

    pub fn with_capture(
        catalog: AppCatalog,
        viewport: Viewport,
        capture: Rc<dyn PointerCapture>,
    ) -> Self {
        Self {
            registry: WindowRegistry::new(),
            interaction: InteractionController::new(capture),
            catalog,
            viewport,
        }
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &AppCatalog {
        &self.catalog
    }

    pub fn window(&self, id: AppId) -> Option<&WindowRecord> {
        self.registry.get(id)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_constrained(&self) -> bool {
        self.viewport.is_constrained()
    }

    /// Track a viewport change. Crossing into the constrained layout ends any
    /// running session, committing what it had.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport == viewport {
            return;
        }
        tracing::debug!(width = viewport.width, height = viewport.height, "viewport changed");
        self.viewport = viewport;
        if viewport.is_constrained()
            && let Some(end) = self.interaction.finish()
        {
            self.commit(end);
        }
    }

    pub fn open(&mut self, app: AppId, payload: Option<Payload>) -> OpenOutcome {
        let template = WindowTemplate::from_profile(app, self.catalog.profile(app));
        self.registry.open(template, payload, self.viewport)
    }

    pub fn open_request(&mut self, request: OpenRequest) -> OpenOutcome {
        self.open(request.app, request.payload)
    }

    /// Close the window. A session on it is torn down without committing.
    pub fn close(&mut self, id: AppId) -> bool {
        if self.interaction.finish_for(id).is_some() {
            tracing::debug!(window_id = %id, "session dropped by close");
        }
        self.registry.close(id)
    }

    /// Minimize the window. A session on it ends and commits first.
    pub fn minimize(&mut self, id: AppId) -> bool {
        if let Some(end) = self.interaction.finish_for(id) {
            self.commit(end);
        }
        self.registry.minimize(id)
    }

    pub fn toggle_maximize(&mut self, id: AppId) -> bool {
        if let Some(end) = self.interaction.finish_for(id) {
            self.commit(end);
        }
        self.registry.toggle_maximize(id)
    }

    pub fn focus(&mut self, id: AppId) -> bool {
        self.registry.focus(id)
    }

    pub fn active(&self) -> Option<AppId> {
        self.registry.active()
    }

    /// Title for the top bar.
    pub fn active_title(&self) -> Option<&str> {
        self.registry.active_record().map(WindowRecord::title)
    }

    pub fn interaction_active(&self) -> bool {
        self.interaction.is_active()
    }

    pub fn interaction_target(&self) -> Option<AppId> {
        self.interaction.target()
    }

    /// Effective geometry of a window, or `None` when it is unknown or
    /// minimized.
    pub fn layout_for(&self, id: AppId) -> Option<WindowLayout> {
        let record = self.registry.get(id)?;
        if record.is_minimized() {
            return None;
        }
        Some(self.layout_of(record))
    }

    fn layout_of(&self, record: &WindowRecord) -> WindowLayout {
        if self.viewport.is_constrained() {
            WindowLayout {
                branch: LayoutBranch::Constrained,
                rect: self.viewport.constrained_rect(),
            }
        } else if record.is_maximized() {
            WindowLayout {
                branch: LayoutBranch::Maximized,
                rect: self.viewport.maximized_rect(),
            }
        } else {
            let rect = self
                .interaction
                .live_geometry(record.id())
                .unwrap_or_else(|| record.restored_rect());
            WindowLayout {
                branch: LayoutBranch::Normal,
                rect,
            }
        }
    }

    /// Visible windows, bottom to top.
    pub fn draw_plan(&self) -> Vec<WindowDraw> {
        let active = self.registry.active();
        let dragging = self.interaction.target();
        self.registry
            .stacking_order()
            .into_iter()
            .map(|record| {
                let layout = self.layout_of(record);
                WindowDraw {
                    id: record.id(),
                    title: record.title().to_string(),
                    rect: layout.rect,
                    branch: layout.branch,
                    z_index: record.z_index(),
                    focused: active == Some(record.id()),
                    animate: dragging != Some(record.id()),
                }
            })
            .collect()
    }

    /// Topmost visible window under `point` and the chrome part hit.
    pub fn hit_test(&self, point: Point) -> Option<(AppId, ChromeHit)> {
        self.registry
            .stacking_order()
            .into_iter()
            .rev()
            .find_map(|record| {
                let layout = self.layout_of(record);
                hit_test_chrome(layout.rect, point, layout.interactive())
                    .map(|hit| (record.id(), hit))
            })
    }

    /// Start dragging a window by its title bar. Raises the window.
    pub fn begin_move(&mut self, id: AppId, pointer: Point) -> bool {
        let Some(start) = self.session_start(id) else {
            return false;
        };
        self.registry.focus(id);
        self.interaction.begin_move(id, start, pointer)
    }

    /// Start resizing a window from an edge or corner. Raises the window.
    pub fn begin_resize(&mut self, id: AppId, direction: ResizeDirection, pointer: Point) -> bool {
        let Some(start) = self.session_start(id) else {
            return false;
        };
        self.registry.focus(id);
        self.interaction.begin_resize(id, direction, start, pointer)
    }

    fn session_start(&self, id: AppId) -> Option<Rect> {
        if self.interaction.is_active() {
            return None;
        }
        let layout = self.layout_for(id)?;
        layout.interactive().then_some(layout.rect)
    }

    pub fn pointer_moved(&mut self, pointer: Point) -> Option<Rect> {
        self.interaction.update(pointer)
    }

    /// End the running session, wherever the pointer is, and commit it.
    pub fn pointer_released(&mut self) -> bool {
        match self.interaction.finish() {
            Some(end) => {
                self.commit(end);
                true
            }
            None => false,
        }
    }

    fn commit(&mut self, end: SessionEnd) {
        self.registry
            .commit_geometry(end.target, end.geometry.size(), end.geometry.origin());
    }

    /// Route one pointer event. Returns `true` when the event was consumed.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        let point = event.position;
        match event.kind {
            PointerEventKind::Down => {
                if self.interaction.is_active() {
                    return true;
                }
                let Some((id, hit)) = self.hit_test(point) else {
                    return false;
                };
                tracing::debug!(window_id = %id, ?hit, x = point.x, y = point.y, "pointer down");
                match hit {
                    ChromeHit::Close => {
                        self.close(id);
                    }
                    ChromeHit::Minimize => {
                        self.minimize(id);
                    }
                    ChromeHit::Maximize => {
                        self.toggle_maximize(id);
                    }
                    ChromeHit::TitleBar => {
                        if !self.begin_move(id, point) {
                            self.focus(id);
                        }
                    }
                    ChromeHit::Resize(direction) => {
                        if !self.begin_resize(id, direction, point) {
                            self.focus(id);
                        }
                    }
                    ChromeHit::Content => {
                        self.focus(id);
                    }
                }
                true
            }
            PointerEventKind::Move => self.pointer_moved(point).is_some(),
            PointerEventKind::Up => self.pointer_released(),
            PointerEventKind::DoubleClick => {
                if self.interaction.is_active() {
                    return true;
                }
                let Some((id, hit)) = self.hit_test(point) else {
                    return false;
                };
                if hit == ChromeHit::TitleBar && !self.is_constrained() {
                    self.toggle_maximize(id);
                } else {
                    self.focus(id);
                }
                true
            }
        }
    }
}
