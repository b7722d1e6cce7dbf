//! Terminal mouse reports to window-manager pointer events.
//!
//! Cells are mapped to the logical pixel at their center, so a cell and the
//! pixels it covers on screen agree under the same [`Scale`].

use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::input::{PointerEvent, PointerEventKind};
use crate::ui::Scale;

pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct PointerTranslator {
    scale: Scale,
    last_press: Option<(Instant, u16, u16)>,
}

impl PointerTranslator {
    pub fn new(scale: Scale) -> Self {
        Self {
            scale,
            last_press: None,
        }
    }

    pub fn translate(&mut self, event: &MouseEvent) -> Option<PointerEvent> {
        self.translate_at(event, Instant::now())
    }

    /// Translate with an explicit clock. Only the left button is tracked.
    pub fn translate_at(&mut self, event: &MouseEvent, now: Instant) -> Option<PointerEvent> {
        let kind = match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.press_kind(event, now),
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                PointerEventKind::Move
            }
            MouseEventKind::Up(MouseButton::Left) => PointerEventKind::Up,
            _ => return None,
        };
        let position = self.scale.cell_center(event.column, event.row);
        Some(PointerEvent { kind, position })
    }

    fn press_kind(&mut self, event: &MouseEvent, now: Instant) -> PointerEventKind {
        let repeat = self.last_press.is_some_and(|(at, col, row)| {
            col == event.column
                && row == event.row
                && now.saturating_duration_since(at) <= DOUBLE_CLICK_WINDOW
        });
        if repeat {
            // A third press starts a new pair.
            self.last_press = None;
            PointerEventKind::DoubleClick
        } else {
            self.last_press = Some((now, event.column, event.row));
            PointerEventKind::Down
        }
    }
}
