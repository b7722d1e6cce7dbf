//! The desktop shell: window manager, application views, top bar and dock,
//! wired to terminal events.

use std::collections::BTreeMap;
use std::rc::Rc;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::apps::AppId;
use crate::components::{AppView, StatusBar, ViewContext, view_for};
use crate::config::DeskConfig;
use crate::drivers::pointer::PointerTranslator;
use crate::event_loop::ControlFlow;
use crate::theme::Theme;
use crate::ui::{HitMap, Scale, UiFrame, dock_slots, render_window, safe_set_string};
use crate::window::{CaptureState, ChromeHit, OpenOutcome, OpenRequest, WindowManager};

/// Top bar title when no window is active.
pub const DEFAULT_TITLE: &str = "Finder";

pub struct Desktop {
    wm: WindowManager,
    capture: Rc<CaptureState>,
    views: BTreeMap<AppId, Box<dyn AppView>>,
    translator: PointerTranslator,
    scale: Scale,
    dark_mode: bool,
    hits: HitMap,
}

impl Desktop {
    /// Build the desktop for a `cols` x `rows` terminal and open the startup
    /// applications in order.
    pub fn new(config: &DeskConfig, cols: u16, rows: u16) -> Self {
        let capture = Rc::new(CaptureState::new());
        let wm = WindowManager::with_capture(
            config.catalog.clone(),
            config.scale.viewport(cols, rows),
            capture.clone(),
        );
        let mut desktop = Self {
            wm,
            capture,
            views: BTreeMap::new(),
            translator: PointerTranslator::new(config.scale),
            scale: config.scale,
            dark_mode: config.dark_mode,
            hits: HitMap::default(),
        };
        for app in &config.startup_apps {
            desktop.open(OpenRequest::new(*app));
        }
        desktop
    }

    pub fn window_manager(&self) -> &WindowManager {
        &self.wm
    }

    pub fn capture_active(&self) -> bool {
        self.capture.is_active()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn top_bar_title(&self) -> &str {
        self.wm.active_title().unwrap_or(DEFAULT_TITLE)
    }

    pub fn open(&mut self, request: OpenRequest) -> OpenOutcome {
        let app = request.app;
        let outcome = self.wm.open_request(request);
        let title = self.wm.catalog().title(app);
        self.views.entry(app).or_insert_with(|| view_for(app, title));
        outcome
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.wm.set_viewport(self.scale.viewport(cols, rows));
    }

    pub fn handle_event(&mut self, event: &Event) -> ControlFlow {
        match event {
            Event::Key(key) => return self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(cols, rows) => self.resize(*cols, *rows),
            _ => {}
        }
        ControlFlow::Continue
    }

    fn handle_key(&mut self, key: &KeyEvent) -> ControlFlow {
        if key.kind == KeyEventKind::Release {
            return ControlFlow::Continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') => return ControlFlow::Quit,
                KeyCode::Char('w') => {
                    if let Some(id) = self.wm.active() {
                        self.close(id);
                    }
                    return ControlFlow::Continue;
                }
                KeyCode::Char('d') => {
                    self.dark_mode = !self.dark_mode;
                    return ControlFlow::Continue;
                }
                _ => {}
            }
        }
        let Some(active) = self.wm.active() else {
            return ControlFlow::Continue;
        };
        let ctx = ViewContext::new(self.wm.window(active).and_then(|w| w.payload()))
            .with_dark_mode(self.dark_mode)
            .with_focus(true)
            .with_capture(self.capture.is_active());
        let request = self
            .views
            .get_mut(&active)
            .and_then(|view| view.handle_key(key, &ctx));
        if let Some(request) = request {
            self.open(request);
        }
        ControlFlow::Continue
    }

    fn close(&mut self, id: AppId) {
        if self.wm.close(id) {
            self.views.remove(&id);
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && !self.wm.interaction_active()
            && self.click_drawn_element(mouse.column, mouse.row)
        {
            return;
        }
        let Some(event) = self.translator.translate(mouse) else {
            return;
        };
        self.wm.handle_pointer(&event);
        let wm = &self.wm;
        self.views.retain(|id, _| wm.window(*id).is_some());
    }

    /// Dock entries and chrome buttons are matched by the cell they were
    /// drawn on.
    fn click_drawn_element(&mut self, col: u16, row: u16) -> bool {
        if let Some(app) = self.hits.dock_at(col, row) {
            self.open(OpenRequest::new(app));
            return true;
        }
        let Some(glyph) = self.hits.button_at(col, row) else {
            return false;
        };
        // Only if no other window has since been raised over the glyph.
        let point = self.scale.cell_center(col, row);
        if self.wm.hit_test(point).map(|(id, _)| id) != Some(glyph.window) {
            return false;
        }
        match glyph.hit {
            ChromeHit::Close => self.close(glyph.window),
            ChromeHit::Minimize => {
                self.wm.minimize(glyph.window);
            }
            ChromeHit::Maximize => {
                self.wm.toggle_maximize(glyph.window);
            }
            _ => return false,
        }
        true
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>) {
        let area = frame.area();
        if area.width == 0 || area.height == 0 {
            return;
        }
        let theme = Theme::for_mode(self.dark_mode);
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.desktop_bg)),
            area,
        );

        let mut hits = HitMap::default();
        let capture_active = self.capture.is_active();
        for draw in self.wm.draw_plan() {
            let payload = self.wm.window(draw.id).and_then(|w| w.payload());
            let ctx = ViewContext::new(payload)
                .with_dark_mode(self.dark_mode)
                .with_focus(draw.focused)
                .with_capture(capture_active);
            let view = self.views.get_mut(&draw.id);
            render_window(frame, self.scale, &draw, &theme, &mut hits, |frame, body| {
                if let Some(view) = view {
                    view.render(frame, body, &ctx);
                }
            });
        }

        let mut top_bar = StatusBar::new();
        top_bar.set_left(format!(" {}", self.top_bar_title()));
        top_bar.set_right("^Q quit ");
        top_bar.set_style(theme.bar_style());
        top_bar.render(frame, Rect::new(area.x, area.y, area.width, 1));

        if area.height > 1 {
            let dock_row = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
            frame.render_widget(Block::default().style(theme.dock_style(false)), dock_row);
            hits.dock = dock_slots(area, self.wm.catalog());
            for slot in &hits.dock {
                let running = self.wm.window(slot.app).is_some();
                let label = format!(" {} ", self.wm.catalog().title(slot.app));
                safe_set_string(
                    frame.buffer_mut(),
                    slot.area,
                    slot.area.x,
                    slot.area.y,
                    &label,
                    theme.dock_style(running),
                );
            }
        }
        self.hits = hits;
    }
}
