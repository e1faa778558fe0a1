//! Terminal renderer for the on-screen keyboard.
//!
//! Draws every non-empty cell's display text at its cell rectangle, reverses
//! the cursor rectangle, and shows the name entered so far above the grid.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::core::NameEntry;
use crate::keyboard::{COLS, ROWS};

/// Height of the name box drawn above the keyboard window
pub const NAME_BOX_HEIGHT: u16 = 3;

pub struct KeyboardView<'a, 'r> {
    entry: &'a NameEntry<'r>,
    key_style: Style,
    cursor_style: Style,
    border_style: Style,
}

impl<'a, 'r> KeyboardView<'a, 'r> {
    pub fn new(entry: &'a NameEntry<'r>) -> Self {
        Self {
            entry,
            key_style: Style::default().fg(Color::White),
            cursor_style: Style::default().add_modifier(Modifier::REVERSED),
            border_style: Style::default().fg(Color::Cyan),
        }
    }

    fn render_name(&self, area: Rect, buf: &mut Buffer) {
        let entered = self.entry.key_count();
        let max = self.entry.max_chars();
        let mut spans = vec![Span::raw(" "), Span::styled(self.entry.name(), self.key_style)];
        if entered < max {
            spans.push(Span::styled("_", Style::default().fg(Color::DarkGray)));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style)
            .title(format!(" Name {}/{} ", entered, max));
        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }

    fn render_keys(&self, buf: &mut Buffer) {
        let keyboard = self.entry.keyboard();
        let area = keyboard.area();
        let metrics = keyboard.metrics();
        let (origin_x, origin_y) = metrics.content_origin(area);
        let text_inset = metrics.cell_padding / 2;
        let clip = area.intersection(buf.area);

        Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style)
            .title(format!(" {} ", keyboard.mode()))
            .render(clip, buf);

        for row in 0..ROWS {
            for col in 0..COLS {
                if keyboard.raw_content(row, col).is_empty() {
                    continue;
                }
                let cell = keyboard.cell_rect(row, col);
                let x = origin_x.saturating_add(cell.x).saturating_add(text_inset);
                let y = origin_y.saturating_add(cell.y);
                if y >= clip.bottom() || x >= clip.right() {
                    continue;
                }
                let room = (clip.right() - x) as usize;
                buf.set_stringn(x, y, keyboard.display_text(row, col), room, self.key_style);
            }
        }

        // A finished prompt drops the highlight
        if !keyboard.is_active() {
            return;
        }
        let cursor = keyboard.cursor_rect();
        let cursor = Rect {
            x: origin_x.saturating_add(cursor.x),
            y: origin_y.saturating_add(cursor.y),
            ..cursor
        };
        buf.set_style(cursor.intersection(clip), self.cursor_style);
    }
}

impl Widget for KeyboardView<'_, '_> {
    /// `area` is where the name box goes; the keys render at the keyboard's
    /// own window area
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_name(area.intersection(buf.area), buf);
        self.render_keys(buf);
    }
}
