//! Cell placement for the key grid.
//!
//! Columns are laid out on a uniform pitch, but each cell is as wide as its
//! text, so long labels such as the page and confirm keys overflow into the
//! filler columns beside them.

use ratatui::layout::Rect;
use ratatui::text::Span;

use super::layout::COLS;

/// Spacing constants for one rendering surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    /// Window frame thickness on each side, outside the content area
    pub frame: u16,
    pub border_x: u16,
    pub border_y: u16,
    pub row_spacing: u16,
    /// Added to the measured text width of every cell
    pub cell_padding: u16,
    /// How far the cursor rectangle sits above its cell
    pub cursor_lift: u16,
}

impl Metrics {
    /// Bitmap windows with a 16 pixel line height
    pub fn pixel() -> Self {
        Self {
            frame: 8,
            border_x: 8,
            border_y: 8,
            row_spacing: 16,
            cell_padding: 8,
            cursor_lift: 2,
        }
    }

    /// Terminal cells inside a bordered block
    pub fn terminal() -> Self {
        Self {
            frame: 1,
            border_x: 0,
            border_y: 0,
            row_spacing: 1,
            cell_padding: 2,
            cursor_lift: 0,
        }
    }

    /// Uniform column pitch for a window of the given outer width
    pub fn col_spacing(&self, width: u16) -> u16 {
        let content = width.saturating_sub(self.frame * 2);
        content.saturating_sub(self.border_x * 2) / COLS as u16
    }

    /// Top-left of the content area inside a window
    pub fn content_origin(&self, area: Rect) -> (u16, u16) {
        (area.x.saturating_add(self.frame), area.y.saturating_add(self.frame))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::pixel()
    }
}

/// Font collaborator: how wide a piece of key text renders
pub trait TextMeasure {
    fn width(&self, text: &str) -> u16;
}

/// Terminal display columns (wide CJK glyphs count as two)
#[derive(Debug, Clone, Copy, Default)]
pub struct CellWidth;

impl TextMeasure for CellWidth {
    fn width(&self, text: &str) -> u16 {
        Span::raw(text).width() as u16
    }
}

/// A fixed advance per character, like a bitmap font
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvance(pub u16);

impl TextMeasure for FixedAdvance {
    fn width(&self, text: &str) -> u16 {
        (text.chars().count() as u16).saturating_mul(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_col_spacing_pixel_window() {
        // 320 wide window: 304 content, 288 after borders
        assert_eq!(Metrics::pixel().col_spacing(320), 28);
    }

    #[test]
    fn test_col_spacing_never_underflows() {
        assert_eq!(Metrics::pixel().col_spacing(10), 0);
        assert_eq!(Metrics::terminal().col_spacing(0), 0);
    }

    #[test]
    fn test_cell_width_counts_wide_glyphs() {
        assert_eq!(CellWidth.width("A"), 1);
        assert_eq!(CellWidth.width("あ"), 2);
        assert_eq!(CellWidth.width("<Done>"), 6);
    }

    #[test]
    fn test_fixed_advance() {
        assert_eq!(FixedAdvance(6).width("$A"), 12);
        assert_eq!(FixedAdvance(6).width("決定"), 12);
    }
}
