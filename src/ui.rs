//! UiFrame: a thin wrapper around `ratatui::Frame` that clamps drawing to the
//! visible area, plus the cell/pixel mapping and desktop painting.
//!
//! Windows live in logical pixels and may hang off any screen edge. Each one
//! is painted into an offscreen buffer at its full cell size and then blitted
//! at a signed offset, so borders stay where the window really ends instead
//! of being redrawn at the screen edge.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

use crate::apps::{AppCatalog, AppId};
use crate::layout::{self, Point};
use crate::viewport::Viewport;
use crate::window::decorator::button_rects;
use crate::window::{ChromeHit, WindowDraw};

/// Logical pixels per terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    pub px_per_col: u32,
    pub px_per_row: u32,
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(10, 20)
    }
}

impl Scale {
    pub const fn new(px_per_col: u32, px_per_row: u32) -> Self {
        Self {
            px_per_col,
            px_per_row,
        }
    }

    fn col_px(&self) -> i64 {
        self.px_per_col.max(1) as i64
    }

    fn row_px(&self) -> i64 {
        self.px_per_row.max(1) as i64
    }

    /// Viewport covered by a terminal of `cols` x `rows` cells.
    pub fn viewport(&self, cols: u16, rows: u16) -> Viewport {
        Viewport::new(
            (cols as u32).saturating_mul(self.px_per_col),
            (rows as u32).saturating_mul(self.px_per_row),
        )
    }

    /// Logical pixel at the center of a cell.
    pub fn cell_center(&self, col: u16, row: u16) -> Point {
        let x = col as i64 * self.col_px() + self.col_px() / 2;
        let y = row as i64 * self.row_px() + self.row_px() / 2;
        Point::new(layout::clamp_i32(x), layout::clamp_i32(y))
    }

    pub fn col_of(&self, x: i64) -> i64 {
        x.div_euclid(self.col_px())
    }

    pub fn row_of(&self, y: i64) -> i64 {
        y.div_euclid(self.row_px())
    }

    /// Cells touched by a pixel rectangle. May lie partly off screen.
    pub fn cells(&self, rect: layout::Rect) -> CellRect {
        let left = self.col_of(rect.x as i64);
        let top = self.row_of(rect.y as i64);
        let right = (rect.right() + self.col_px() - 1).div_euclid(self.col_px());
        let bottom = (rect.bottom() + self.row_px() - 1).div_euclid(self.row_px());
        CellRect {
            x: layout::clamp_i32(left),
            y: layout::clamp_i32(top),
            width: (right - left).clamp(0, u16::MAX as i64) as u16,
            height: (bottom - top).clamp(0, u16::MAX as i64) as u16,
        }
    }
}

/// Cell rectangle with a signed origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

/// Wrapper around `ratatui::Frame` that clamps drawing to the visible area.
pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Construct a `UiFrame` directly from an area and buffer. Used for the
    /// offscreen window buffers and in tests.
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }

    /// Copy `src` (anchored at its own origin) so its top-left cell lands on
    /// `dest`, skipping whatever falls outside the frame.
    pub fn blit_from_signed(&mut self, src: &Buffer, dest: CellRect) {
        let frame_x0 = self.area.x as i32;
        let frame_y0 = self.area.y as i32;
        let frame_x1 = frame_x0 + self.area.width as i32;
        let frame_y1 = frame_y0 + self.area.height as i32;
        for sy in 0..dest.height as i32 {
            let dy = dest.y + sy;
            if dy < frame_y0 || dy >= frame_y1 {
                continue;
            }
            for sx in 0..dest.width as i32 {
                let dx = dest.x + sx;
                if dx < frame_x0 || dx >= frame_x1 {
                    continue;
                }
                if let (Some(src_cell), Some(dst_cell)) = (
                    src.cell((sx as u16, sy as u16)),
                    self.buffer.cell_mut((dx as u16, dy as u16)),
                ) {
                    *dst_cell = src_cell.clone();
                }
            }
        }
    }
}

pub(crate) fn safe_set_string(
    buffer: &mut Buffer,
    bounds: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }
    let max_x = bounds.x.saturating_add(bounds.width);
    let max_y = bounds.y.saturating_add(bounds.height);
    if x < bounds.x || x >= max_x || y < bounds.y || y >= max_y {
        return;
    }
    let available = max_x.saturating_sub(x);
    if available == 0 {
        return;
    }
    let text = truncate_to_width(text, available as usize);
    buffer.set_string(x, y, text, style);
}

pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}

/// A chrome button as drawn on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonGlyph {
    pub window: AppId,
    pub hit: ChromeHit,
    pub col: u16,
    pub row: u16,
}

/// A dock entry as drawn on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockSlot {
    pub app: AppId,
    pub area: Rect,
}

/// Screen regions recorded while painting, for routing clicks on cells
/// whose center pixel misses the element drawn there.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    pub buttons: Vec<ButtonGlyph>,
    pub dock: Vec<DockSlot>,
}

impl HitMap {
    pub fn dock_at(&self, col: u16, row: u16) -> Option<AppId> {
        self.dock
            .iter()
            .find(|slot| slot.area.contains((col, row).into()))
            .map(|slot| slot.app)
    }

    /// Topmost button drawn at a cell.
    pub fn button_at(&self, col: u16, row: u16) -> Option<ButtonGlyph> {
        self.buttons
            .iter()
            .rev()
            .find(|b| b.col == col && b.row == row)
            .copied()
    }
}

pub const BUTTON_GLYPH: &str = "●";

/// Dock entries centered on the last row of `area`.
pub fn dock_slots(area: Rect, catalog: &AppCatalog) -> Vec<DockSlot> {
    if area.height == 0 {
        return Vec::new();
    }
    let labels: Vec<(AppId, u16)> = AppId::ALL
        .into_iter()
        .map(|app| (app, catalog.title(app).chars().count() as u16 + 2))
        .collect();
    let total: u16 = labels
        .iter()
        .map(|(_, w)| *w)
        .fold(0u16, |acc, w| acc.saturating_add(w).saturating_add(1))
        .saturating_sub(1);
    let row = area.y + area.height - 1;
    let mut x = area.x + area.width.saturating_sub(total) / 2;
    let max_x = area.x.saturating_add(area.width);
    let mut slots = Vec::with_capacity(labels.len());
    for (app, width) in labels {
        if x >= max_x {
            break;
        }
        let width = width.min(max_x - x);
        slots.push(DockSlot {
            app,
            area: Rect::new(x, row, width, 1),
        });
        x = x.saturating_add(width).saturating_add(1);
    }
    slots
}

/// Paint one window into the frame and record where its buttons went.
/// `body` renders the content into the area inside the chrome.
pub fn render_window<F>(
    frame: &mut UiFrame<'_>,
    scale: Scale,
    draw: &WindowDraw,
    theme: &crate::theme::Theme,
    hits: &mut HitMap,
    body: F,
) where
    F: FnOnce(&mut UiFrame<'_>, Rect),
{
    let cells = scale.cells(draw.rect);
    if cells.width == 0 || cells.height == 0 {
        return;
    }
    let local = Rect::new(0, 0, cells.width, cells.height);
    let mut buffer = Buffer::empty(local);
    {
        let mut offscreen = UiFrame::from_parts(local, &mut buffer);
        let block = Block::bordered()
            .border_style(theme.border_style(draw.focused))
            .style(theme.window_style());
        offscreen.render_widget(block, local);

        let title_mid = draw.rect.y as i64 + crate::constants::TITLE_BAR_HEIGHT as i64 / 2;
        let title_row =
            (scale.row_of(title_mid) - cells.y as i64).clamp(0, local.height as i64 - 1) as u16;
        let title = truncate_to_width(&draw.title, local.width.saturating_sub(2) as usize);
        let title_x = (local.width.saturating_sub(title.chars().count() as u16)) / 2;
        safe_set_string(
            offscreen.buffer_mut(),
            local,
            title_x,
            title_row,
            &title,
            theme.title_style(draw.focused),
        );

        for (hit, rect) in button_rects(draw.rect) {
            let mid_x = rect.x as i64 + rect.width as i64 / 2;
            let col = scale.col_of(mid_x) - cells.x as i64;
            if col < 0 || col >= local.width as i64 {
                continue;
            }
            let color = match hit {
                ChromeHit::Close => theme.close,
                ChromeHit::Minimize => theme.minimize,
                _ => theme.maximize,
            };
            safe_set_string(
                offscreen.buffer_mut(),
                local,
                col as u16,
                title_row,
                BUTTON_GLYPH,
                theme.window_style().fg(color),
            );
            let screen_col = cells.x as i64 + col;
            let screen_row = cells.y as i64 + title_row as i64;
            let area = frame.area();
            if screen_col >= area.x as i64
                && screen_col < area.right() as i64
                && screen_row >= area.y as i64
                && screen_row < area.bottom() as i64
            {
                hits.buttons.push(ButtonGlyph {
                    window: draw.id,
                    hit,
                    col: screen_col as u16,
                    row: screen_row as u16,
                });
            }
        }

        let body_top = title_row.saturating_add(1).max(1);
        let body_area = Rect::new(
            1,
            body_top,
            local.width.saturating_sub(2),
            local.height.saturating_sub(body_top).saturating_sub(1),
        );
        if body_area.width > 0 && body_area.height > 0 {
            body(&mut offscreen, body_area);
        }
    }
    frame.blit_from_signed(&buffer, cells);
}
