//! Cursor movement over a key grid.
//!
//! The grid is a torus: every move wraps. Two extra rules keep the cursor off
//! cells it must not rest on. Filler columns of wide controls (the page and
//! confirm keys, and the cell after a space bar) are stepped over, and empty
//! cells are passed by repeating the same move until a key is reached.

use super::layout::{Layout, COLS, ROWS, SPACE};

/// Column of the page-flip key on the last row
pub const PAGE_COL: usize = COLS - 4;
/// Column of the confirm key on the last row
pub const DONE_COL: usize = COLS - 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Directional repeat events that fired during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directions {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Directions {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn only(direction: Direction) -> Self {
        let mut dirs = Self::default();
        dirs.press(direction);
        dirs
    }

    pub fn press(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
    }

    pub fn is_pressed(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn is_idle(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Filler cells to the right of the page and confirm keys
pub fn is_control_filler(row: usize, col: usize) -> bool {
    row == ROWS - 1 && (col == COLS - 3 || col == COLS - 1)
}

/// Whether a cell is the non-landable right half of a wide control
pub fn is_wide_filler(layout: &Layout, row: usize, col: usize) -> bool {
    col > 0 && (is_control_filler(row, col) || layout.raw(row, col - 1) == SPACE)
}

/// One move plus the wide-cell adjustment, without the empty-cell retry
pub fn step(layout: &Layout, cursor: Cursor, dirs: Directions) -> Cursor {
    let Cursor { mut row, mut col } = cursor;
    // Wide controls resolve leftwards unless the move was to the right
    let mut skip_right = false;

    if dirs.down {
        row = (row + 1) % ROWS;
    }
    if dirs.up {
        row = (row + ROWS - 1) % ROWS;
    }
    if dirs.right {
        col = (col + 1) % COLS;
        skip_right = true;
    }
    if dirs.left {
        col = (col + COLS - 1) % COLS;
    }

    if is_wide_filler(layout, row, col) {
        col = if skip_right { (col + 1).min(COLS - 1) } else { col - 1 };
    }

    Cursor { row, col }
}

/// Apply one tick of input, continuing in the same direction past empty cells
///
/// Returns `None` if no key is reached within `ROWS * COLS` steps.
pub fn resolve(layout: &Layout, start: Cursor, dirs: Directions) -> Option<Cursor> {
    let mut cursor = start;
    for _ in 0..ROWS * COLS {
        cursor = step(layout, cursor, dirs);
        if !layout.is_empty_cell(cursor.row, cursor.col) {
            return Some(cursor);
        }
    }
    None
}

/// First cell in row-major order the cursor may rest on
pub fn first_selectable(layout: &Layout) -> Cursor {
    (0..ROWS)
        .flat_map(|row| (0..COLS).map(move |col| Cursor::new(row, col)))
        .find(|c| !layout.is_empty_cell(c.row, c.col) && !is_wide_filler(layout, c.row, c.col))
        .unwrap_or_default()
}
