//! On-screen keyboard for controller-driven text entry (rendering-agnostic)
//!
//! [`Keyboard`] holds the selected layout pair, the cursor and the derived
//! geometry. It never draws anything itself: a frontend reads
//! [`Keyboard::display_text`] and [`Keyboard::cell_rect`] for every non-empty
//! cell, and the owning screen interprets [`Keyboard::selected`].

pub mod geometry;
pub mod layout;
pub mod layouts;
pub mod navigation;
pub mod validate;

pub use geometry::{CellWidth, FixedAdvance, Metrics, TextMeasure};
pub use layout::{Layout, LayoutRegistry, Mode, COLS, DONE, NEXT_PAGE, ROWS, SPACE};
pub use navigation::{Cursor, Direction, Directions};

use ratatui::layout::Rect;
use tracing::{debug, warn};

use crate::sound::CursorSound;

/// Keyboard widget state for one text-entry prompt
pub struct Keyboard<'r> {
    registry: &'r LayoutRegistry,
    area: Rect,
    metrics: Metrics,
    measure: Box<dyn TextMeasure>,
    sound: Box<dyn CursorSound>,
    done_text: String,

    mode: Mode,
    next_mode: Mode,
    cursor: Cursor,
    active: bool,

    col_spacing: u16,
    cursor_rect: Rect,
    play_cursor: bool,
    needs_redraw: bool,
}

impl<'r> Keyboard<'r> {
    /// Create a keyboard in a window at `area`
    ///
    /// Starts on the Letter page linked to Symbol, with the cursor on the
    /// first key. `done_text` is what the confirm key displays.
    pub fn new(
        registry: &'r LayoutRegistry,
        area: Rect,
        done_text: impl Into<String>,
        sound: Box<dyn CursorSound>,
    ) -> Self {
        let metrics = Metrics::default();
        let mode = Mode::Letter;
        let mut keyboard = Self {
            registry,
            area,
            metrics,
            measure: Box::new(FixedAdvance(6)),
            sound,
            done_text: done_text.into(),
            mode,
            next_mode: Mode::Symbol,
            cursor: navigation::first_selectable(registry.of(mode)),
            active: true,
            col_spacing: metrics.col_spacing(area.width),
            cursor_rect: Rect::default(),
            play_cursor: false,
            needs_redraw: true,
        };
        keyboard.update_cursor_rect();
        keyboard
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self.refresh();
        self
    }

    pub fn with_measure(mut self, measure: Box<dyn TextMeasure>) -> Self {
        self.measure = measure;
        self.refresh();
        self
    }

    /// Switch to a new layout pair and put the cursor on its first key
    pub fn set_mode(&mut self, mode: Mode, next_mode: Mode) {
        debug!("Keyboard mode {} -> {} (next page {})", self.mode, mode, next_mode);
        self.mode = mode;
        self.next_mode = next_mode;
        self.cursor = navigation::first_selectable(self.layout());
        self.refresh();
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn next_mode(&self) -> Mode {
        self.next_mode
    }

    pub fn layout(&self) -> &'r Layout {
        self.registry.of(self.mode)
    }

    /// Literal cell content, used for emptiness and token checks
    pub fn raw_content(&self, row: usize, col: usize) -> &'static str {
        self.layout().raw(row, col)
    }

    /// Text a cell shows: the page key shows the next layout's label and the
    /// confirm key shows the caller's confirmation text
    pub fn display_text(&self, row: usize, col: usize) -> &str {
        let raw = self.raw_content(row, col);
        if raw == NEXT_PAGE {
            self.registry.of(self.next_mode).label
        } else if raw == DONE {
            &self.done_text
        } else {
            raw
        }
    }

    /// Raw content of the cell under the cursor
    pub fn selected(&self) -> &'static str {
        self.raw_content(self.cursor.row, self.cursor.col)
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Rectangle of a cell relative to the window's content origin
    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let text_width = self.measure.width(self.display_text(row, col));
        Rect {
            x: (col as u16)
                .saturating_mul(self.col_spacing)
                .saturating_add(self.metrics.border_x),
            y: (row as u16)
                .saturating_mul(self.metrics.row_spacing)
                .saturating_add(self.metrics.border_y),
            width: text_width.saturating_add(self.metrics.cell_padding),
            height: self.metrics.row_spacing,
        }
    }

    /// Highlight rectangle around the selected cell
    pub fn cursor_rect(&self) -> Rect {
        self.cursor_rect
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    /// Move the window, recomputing the column pitch
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
        self.refresh();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Inactive keyboards ignore directional input
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Consume the pending redraw request
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Advance one frame with the directional events that fired this tick
    pub fn update(&mut self, dirs: Directions) {
        let dirs = if self.active { dirs } else { Directions::none() };
        let start = self.cursor;

        match navigation::resolve(self.layout(), start, dirs) {
            Some(cursor) => self.cursor = cursor,
            None => warn!(
                "Layout {} has no key reachable from ({}, {}); cursor kept",
                self.mode, start.row, start.col
            ),
        }

        if self.cursor != start {
            self.play_cursor = true;
        }
        if self.play_cursor {
            self.sound.play_cursor();
            self.play_cursor = false;
        }

        self.update_cursor_rect();
    }

    fn refresh(&mut self) {
        self.col_spacing = self.metrics.col_spacing(self.area.width);
        self.needs_redraw = true;
        self.update_cursor_rect();
    }

    fn update_cursor_rect(&mut self) {
        let mut rect = self.cell_rect(self.cursor.row, self.cursor.col);
        rect.y = rect.y.saturating_sub(self.metrics.cursor_lift);
        self.cursor_rect = rect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::layouts::BUILTIN_LAYOUTS;
    use crate::sound::Silent;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingSound(Rc<Cell<usize>>);

    impl CursorSound for CountingSound {
        fn play_cursor(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn window() -> Rect {
        Rect::new(0, 0, 320, 176)
    }

    fn keyboard(registry: &LayoutRegistry) -> Keyboard<'_> {
        Keyboard::new(registry, window(), "<Done>", Box::new(Silent))
    }

    fn counting(registry: &LayoutRegistry) -> (Keyboard<'_>, Rc<Cell<usize>>) {
        let plays = Rc::new(Cell::new(0));
        let kb = Keyboard::new(registry, window(), "<Done>", Box::new(CountingSound(plays.clone())));
        (kb, plays)
    }

    fn press(kb: &mut Keyboard<'_>, dir: Direction) {
        kb.update(Directions::only(dir));
    }

    #[test]
    fn test_new_keyboard_defaults() {
        let registry = LayoutRegistry::builtin().unwrap();
        let mut kb = keyboard(&registry);
        assert_eq!(kb.mode(), Mode::Letter);
        assert_eq!(kb.next_mode(), Mode::Symbol);
        assert_eq!(kb.cursor(), Cursor::new(0, 0));
        assert_eq!(kb.selected(), "A");
        assert!(kb.take_redraw());
        assert!(!kb.take_redraw());
    }

    #[test]
    fn test_construction_skips_empty_first_cell() {
        let mut layouts = BUILTIN_LAYOUTS.clone();
        let mut grid = layouts[Mode::Letter.index()].grid;
        grid[0][0] = "";
        grid[0][1] = "";
        layouts[Mode::Letter.index()] = Layout::new("<Abcd>", grid);
        let registry = LayoutRegistry::new(layouts).unwrap();

        let kb = keyboard(&registry);
        assert_eq!(kb.cursor(), Cursor::new(0, 2));
        assert_eq!(kb.selected(), "C");
    }

    #[test]
    fn test_page_key_previews_next_layout() {
        let registry = LayoutRegistry::builtin().unwrap();
        let mut kb = keyboard(&registry);
        assert_eq!(kb.raw_content(ROWS - 1, 6), NEXT_PAGE);
        assert_eq!(kb.display_text(ROWS - 1, 6), "<$A$B>");

        kb.set_mode(Mode::Hiragana, Mode::Katakana);
        assert_eq!(kb.display_text(ROWS - 1, 6), "<カナ>");
        kb.set_mode(Mode::Hiragana, Mode::Letter);
        assert_eq!(kb.display_text(ROWS - 1, 6), "<Abcd>");
    }

    #[test]
    fn test_done_key_shows_confirmation_text() {
        let registry = LayoutRegistry::builtin().unwrap();
        let kb = Keyboard::new(&registry, window(), "<決定>", Box::new(Silent));
        assert_eq!(kb.raw_content(ROWS - 1, 8), DONE);
        assert_eq!(kb.display_text(ROWS - 1, 8), "<決定>");
    }

    #[test]
    fn test_literal_cells_pass_through() {
        let registry = LayoutRegistry::builtin().unwrap();
        let mut kb = keyboard(&registry);
        kb.set_mode(Mode::Symbol, Mode::Letter);
        assert_eq!(kb.display_text(0, 0), "$A");
        kb.set_mode(Mode::Letter, Mode::Symbol);
        assert_eq!(kb.display_text(7, 0), SPACE);
    }

    #[test]
    fn test_display_text_is_empty_only_for_empty_cells() {
        let registry = LayoutRegistry::builtin().unwrap();
        let mut kb = keyboard(&registry);
        for mode in Mode::ALL {
            kb.set_mode(mode, mode.partner());
            for row in 0..ROWS {
                for col in 0..COLS {
                    let raw_empty = kb.raw_content(row, col).is_empty();
                    assert_eq!(kb.display_text(row, col).is_empty(), raw_empty, "{} ({}, {})", mode, row, col);
                }
            }
        }
    }

    #[test]
    fn test_wrap_through_widget() {
        let registry = LayoutRegistry::builtin().unwrap();
        let mut kb = keyboard(&registry);
        kb.set_mode(Mode::Hiragana, Mode::Katakana);

        press(&mut kb, Direction::Up);
        assert_eq!(kb.cursor(), Cursor::new(ROWS - 1, 0));
        press(&mut kb, Direction::Down);
        assert_eq!(kb.cursor(), Cursor::new(0, 0));
        press(&mut kb, Direction::Left);
        assert_eq!(kb.cursor(), Cursor::new(0, COLS - 1));
        press(&mut kb, Direction::Right);
        assert_eq!(kb.cursor(), Cursor::new(0, 0));
    }

    #[test]
    fn test_page_to_done_skips_filler() {
        let registry = LayoutRegistry::builtin().unwrap();
        let mut kb = keyboard(&registry);
        for _ in 0..6 {
            press(&mut kb, Direction::Right);
        }
        // Rows 5 and 7 are empty in column 6
        for _ in 0..5 {
            press(&mut kb, Direction::Down);
        }
        assert_eq!(kb.cursor(), Cursor::new(6, 6));
        press(&mut kb, Direction::Down);
        assert_eq!(kb.cursor(), Cursor::new(ROWS - 1, 6));
        assert_eq!(kb.selected(), NEXT_PAGE);

        press(&mut kb, Direction::Right);
        assert_eq!(kb.cursor(), Cursor::new(ROWS - 1, 8));
        assert_eq!(kb.selected(), DONE);
    }

    #[test]
    fn test_cursor_never_rests_on_empty_cell() {
        let registry = LayoutRegistry::builtin().unwrap();
        let mut kb = keyboard(&registry);
        let moves = [
            Direction::Down,
            Direction::Right,
            Direction::Right,
            Direction::Up,
            Direction::Left,
            Direction::Down,
            Direction::Down,
            Direction::Down,
        ];
        for mode in Mode::ALL {
            kb.set_mode(mode, mode.partner());
            for _ in 0..20 {
                for dir in moves {
                    press(&mut kb, dir);
                    assert!(!kb.selected().is_empty(), "{} at {:?}", mode, kb.cursor());
                }
            }
        }
    }

    #[test]
    fn test_sound_plays_once_per_moving_tick() {
        let registry = LayoutRegistry::builtin().unwrap();
        let (mut kb, plays) = counting(&registry);

        kb.update(Directions::none());
        assert_eq!(plays.get(), 0);

        press(&mut kb, Direction::Right);
        assert_eq!(plays.get(), 1);

        // Diagonal tick still plays a single cue
        kb.update(Directions { down: true, right: true, ..Directions::default() });
        assert_eq!(plays.get(), 2);
    }

    #[test]
    fn test_no_sound_when_cursor_ends_where_it_started() {
        let registry = LayoutRegistry::builtin().unwrap();
        let (mut kb, plays) = counting(&registry);
        // Down to the space bar, alone in row 7
        for _ in 0..7 {
            press(&mut kb, Direction::Down);
        }
        assert_eq!(kb.selected(), SPACE);
        let before = plays.get();

        press(&mut kb, Direction::Right);
        assert_eq!(kb.selected(), SPACE);
        assert_eq!(plays.get(), before);
    }

    #[test]
    fn test_inactive_keyboard_ignores_input() {
        let registry = LayoutRegistry::builtin().unwrap();
        let (mut kb, plays) = counting(&registry);
        kb.set_active(false);
        assert!(!kb.is_active());
        press(&mut kb, Direction::Down);
        assert_eq!(kb.cursor(), Cursor::new(0, 0));
        assert_eq!(plays.get(), 0);
    }

    #[test]
    fn test_mode_round_trip_resets_cursor() {
        let registry = LayoutRegistry::builtin().unwrap();
        let mut kb = keyboard(&registry);

        kb.set_mode(Mode::Hiragana, Mode::Katakana);
        press(&mut kb, Direction::Down);
        press(&mut kb, Direction::Right);
        assert_eq!(kb.cursor(), Cursor::new(1, 1));

        kb.set_mode(Mode::Katakana, Mode::Hiragana);
        assert_eq!(kb.cursor(), Cursor::new(0, 0));
        assert_eq!(kb.selected(), "ア");

        press(&mut kb, Direction::Up);
        kb.set_mode(Mode::Hiragana, Mode::Katakana);
        assert_eq!(kb.cursor(), Cursor::new(0, 0));
        assert_eq!(kb.selected(), "あ");
        assert!(kb.take_redraw());
    }

    #[test]
    fn test_cell_rect_geometry() {
        let registry = LayoutRegistry::builtin().unwrap();
        let kb = keyboard(&registry);
        assert_eq!(kb.cell_rect(0, 1).x - kb.cell_rect(0, 0).x, 28);

        assert_eq!(kb.cell_rect(0, 0), Rect::new(8, 8, 14, 16));
        // The page key is as wide as the next layout's label
        assert_eq!(kb.cell_rect(ROWS - 1, 6), Rect::new(176, 136, 44, 16));
        assert_eq!(kb.cell_rect(ROWS - 1, 8), Rect::new(232, 136, 44, 16));
    }

    #[test]
    fn test_cursor_rect_is_lifted_and_stable() {
        let registry = LayoutRegistry::builtin().unwrap();
        let mut kb = keyboard(&registry);
        press(&mut kb, Direction::Down);
        let first = kb.cursor_rect();
        assert_eq!(first, Rect::new(8, 22, 14, 16));
        assert_eq!(kb.cursor_rect(), first);
    }

    #[test]
    fn test_terminal_metrics() {
        let registry = LayoutRegistry::builtin().unwrap();
        let mut kb = keyboard(&registry)
            .with_metrics(Metrics::terminal())
            .with_measure(Box::new(CellWidth));
        kb.set_area(Rect::new(0, 0, 64, 11));
        assert_eq!(kb.cell_rect(0, 1).x - kb.cell_rect(0, 0).x, 6);
        assert_eq!(kb.cell_rect(ROWS - 1, 8), Rect::new(48, 8, 8, 1));

        kb.set_mode(Mode::Hiragana, Mode::Katakana);
        assert_eq!(kb.cell_rect(0, 1), Rect::new(6, 0, 4, 1));
    }
}
