//! Key grids, reserved tokens and the process-wide layout registry.
//!
//! Every layout shares the same fixed grid size. Cells hold either literal
//! glyph text, one of the reserved tokens, or an empty string for a cell the
//! cursor can never rest on.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

use super::layouts::BUILTIN_LAYOUTS;
use super::validate::validate_table;

/// Number of key rows in every layout
pub const ROWS: usize = 9;
/// Number of key columns in every layout
pub const COLS: usize = 10;

/// Flips to the layout at `next_mode`; displays that layout's label
pub const NEXT_PAGE: &str = "<Page>";
/// Finalizes the prompt; displays the caller's confirmation text
pub const DONE: &str = "<Done>";
/// Enters a space; the cell to its right is part of the same control
pub const SPACE: &str = "SPACE";

pub type Grid = [[&'static str; COLS]; ROWS];

/// A named key grid for one script or variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Shown on the page-flip key of the layout that links here
    pub label: &'static str,
    pub grid: Grid,
}

impl Layout {
    pub const fn new(label: &'static str, grid: Grid) -> Self {
        Self { label, grid }
    }

    /// Literal cell value, never token-substituted
    pub fn raw(&self, row: usize, col: usize) -> &'static str {
        self.grid[row][col]
    }

    pub fn is_empty_cell(&self, row: usize, col: usize) -> bool {
        self.grid[row][col].is_empty()
    }

    /// Positions of all cells holding `token`, in row-major order
    pub fn find(&self, token: &str) -> Vec<(usize, usize)> {
        let mut found = Vec::new();
        for (row, cells) in self.grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if *cell == token {
                    found.push((row, col));
                }
            }
        }
        found
    }
}

/// Index of a built-in layout, in registry order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Hiragana,
    Katakana,
    ZhHiragana,
    ZhKatakana,
    Hangul1,
    Hangul2,
    ZhCn1,
    ZhCn2,
    ZhCnAltA1,
    ZhCnAltA2,
    ZhCnAltB1,
    ZhCnAltB2,
    ZhCnAltC1,
    ZhCnAltC2,
    ZhTw1,
    ZhTw2,
    ZhTwAlt1,
    ZhTwAlt2,
    RuCyrl,
    Letter,
    Symbol,
    LetterEn,
    SymbolEn,
    Letter2k3,
    Symbol2k3,
    LetterEs,
    SymbolEs,
    Letter2ke,
    Letter2k3e,
    Symbol2ke,
}

impl Mode {
    pub const COUNT: usize = 30;

    pub const ALL: [Mode; Mode::COUNT] = [
        Mode::Hiragana,
        Mode::Katakana,
        Mode::ZhHiragana,
        Mode::ZhKatakana,
        Mode::Hangul1,
        Mode::Hangul2,
        Mode::ZhCn1,
        Mode::ZhCn2,
        Mode::ZhCnAltA1,
        Mode::ZhCnAltA2,
        Mode::ZhCnAltB1,
        Mode::ZhCnAltB2,
        Mode::ZhCnAltC1,
        Mode::ZhCnAltC2,
        Mode::ZhTw1,
        Mode::ZhTw2,
        Mode::ZhTwAlt1,
        Mode::ZhTwAlt2,
        Mode::RuCyrl,
        Mode::Letter,
        Mode::Symbol,
        Mode::LetterEn,
        Mode::SymbolEn,
        Mode::Letter2k3,
        Mode::Symbol2k3,
        Mode::LetterEs,
        Mode::SymbolEs,
        Mode::Letter2ke,
        Mode::Letter2k3e,
        Mode::Symbol2ke,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Name used in config files and on the command line
    pub fn name(self) -> &'static str {
        match self {
            Mode::Hiragana => "hiragana",
            Mode::Katakana => "katakana",
            Mode::ZhHiragana => "zh_hiragana",
            Mode::ZhKatakana => "zh_katakana",
            Mode::Hangul1 => "hangul1",
            Mode::Hangul2 => "hangul2",
            Mode::ZhCn1 => "zh_cn1",
            Mode::ZhCn2 => "zh_cn2",
            Mode::ZhCnAltA1 => "zh_cn_alt_a1",
            Mode::ZhCnAltA2 => "zh_cn_alt_a2",
            Mode::ZhCnAltB1 => "zh_cn_alt_b1",
            Mode::ZhCnAltB2 => "zh_cn_alt_b2",
            Mode::ZhCnAltC1 => "zh_cn_alt_c1",
            Mode::ZhCnAltC2 => "zh_cn_alt_c2",
            Mode::ZhTw1 => "zh_tw1",
            Mode::ZhTw2 => "zh_tw2",
            Mode::ZhTwAlt1 => "zh_tw_alt1",
            Mode::ZhTwAlt2 => "zh_tw_alt2",
            Mode::RuCyrl => "ru_cyrl",
            Mode::Letter => "letter",
            Mode::Symbol => "symbol",
            Mode::LetterEn => "letter_en",
            Mode::SymbolEn => "symbol_en",
            Mode::Letter2k3 => "letter2k3",
            Mode::Symbol2k3 => "symbol2k3",
            Mode::LetterEs => "letter_es",
            Mode::SymbolEs => "symbol_es",
            Mode::Letter2ke => "letter2ke",
            Mode::Letter2k3e => "letter2k3e",
            Mode::Symbol2ke => "symbol2ke",
        }
    }

    /// The page this layout is normally chained with
    pub fn partner(self) -> Mode {
        match self {
            Mode::Hiragana => Mode::Katakana,
            Mode::Katakana => Mode::Hiragana,
            Mode::ZhHiragana => Mode::ZhKatakana,
            Mode::ZhKatakana => Mode::ZhHiragana,
            Mode::Hangul1 => Mode::Hangul2,
            Mode::Hangul2 => Mode::Hangul1,
            Mode::ZhCn1 => Mode::ZhCn2,
            Mode::ZhCn2 => Mode::ZhCn1,
            Mode::ZhCnAltA1 => Mode::ZhCnAltA2,
            Mode::ZhCnAltA2 => Mode::ZhCnAltA1,
            Mode::ZhCnAltB1 => Mode::ZhCnAltB2,
            Mode::ZhCnAltB2 => Mode::ZhCnAltB1,
            Mode::ZhCnAltC1 => Mode::ZhCnAltC2,
            Mode::ZhCnAltC2 => Mode::ZhCnAltC1,
            Mode::ZhTw1 => Mode::ZhTw2,
            Mode::ZhTw2 => Mode::ZhTw1,
            Mode::ZhTwAlt1 => Mode::ZhTwAlt2,
            Mode::ZhTwAlt2 => Mode::ZhTwAlt1,
            Mode::RuCyrl => Mode::Letter,
            Mode::Letter => Mode::Symbol,
            Mode::Symbol => Mode::Letter,
            Mode::LetterEn => Mode::SymbolEn,
            Mode::SymbolEn => Mode::LetterEn,
            Mode::Letter2k3 => Mode::Symbol2k3,
            Mode::Symbol2k3 => Mode::Letter2k3,
            Mode::LetterEs => Mode::SymbolEs,
            Mode::SymbolEs => Mode::LetterEs,
            Mode::Letter2ke | Mode::Letter2k3e => Mode::Symbol2ke,
            Mode::Symbol2ke => Mode::Letter2ke,
        }
    }

    /// Confirmation label the engine variant behind this layout uses
    pub fn confirm_text(self) -> ConfirmText {
        match self {
            Mode::Hiragana | Mode::Katakana => ConfirmText::Japanese,
            Mode::ZhHiragana | Mode::ZhKatakana => ConfirmText::ChineseKana,
            Mode::Hangul1 | Mode::Hangul2 => ConfirmText::Korean,
            Mode::ZhCn1
            | Mode::ZhCn2
            | Mode::ZhCnAltA1
            | Mode::ZhCnAltA2
            | Mode::ZhCnAltB1
            | Mode::ZhCnAltB2
            | Mode::ZhCnAltC1
            | Mode::ZhCnAltC2 => ConfirmText::SimplifiedChinese,
            Mode::ZhTw1 | Mode::ZhTw2 | Mode::ZhTwAlt1 | Mode::ZhTwAlt2 => {
                ConfirmText::TraditionalChinese
            }
            Mode::RuCyrl => ConfirmText::Russian,
            Mode::Letter | Mode::Symbol | Mode::LetterEn | Mode::SymbolEn => ConfirmText::Done,
            Mode::Letter2k3
            | Mode::Symbol2k3
            | Mode::LetterEs
            | Mode::SymbolEs
            | Mode::Letter2k3e => ConfirmText::Ok2k3,
            Mode::Letter2ke | Mode::Symbol2ke => ConfirmText::Ok2ke,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        match Mode::ALL.iter().find(|mode| mode.name() == wanted) {
            Some(mode) => Ok(*mode),
            None => bail!("Unknown keyboard mode '{}'", s),
        }
    }
}

/// Confirmation key texts used by the different engine releases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmText {
    Done,
    Ok2ke,
    Ok2k3,
    Japanese,
    Russian,
    Korean,
    SimplifiedChinese,
    TraditionalChinese,
    ChineseKana,
}

impl ConfirmText {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfirmText::Done => "<Done>",
            ConfirmText::Ok2ke => "<OK!>",
            ConfirmText::Ok2k3 => "< OK >",
            ConfirmText::Japanese => "<決定>",
            ConfirmText::Russian => "<OK>",
            ConfirmText::Korean => "<결정>",
            ConfirmText::SimplifiedChinese => "<确定>",
            ConfirmText::TraditionalChinese => "<確定>",
            ConfirmText::ChineseKana => "<确认>",
        }
    }
}

static REGISTRY: OnceLock<LayoutRegistry> = OnceLock::new();

/// Immutable table of every layout, one per [`Mode`]
#[derive(Debug, Clone)]
pub struct LayoutRegistry {
    layouts: [Layout; Mode::COUNT],
}

impl LayoutRegistry {
    /// Build a registry from an arbitrary table, rejecting layouts with errors
    ///
    /// Warnings are logged and the layout is kept.
    pub fn new(layouts: [Layout; Mode::COUNT]) -> Result<Self> {
        let mut errors = Vec::new();
        for (mode, issue) in validate_table(&layouts) {
            if issue.is_error() {
                errors.push(format!("{}: {}", mode, issue.message));
            } else {
                warn!("Layout {} ({}): {}", mode, issue.layout, issue.message);
            }
        }

        if !errors.is_empty() {
            bail!("Invalid keyboard layouts:\n  {}", errors.join("\n  "));
        }

        Ok(Self { layouts })
    }

    /// Registry of the layouts shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::new(BUILTIN_LAYOUTS.clone())
    }

    /// Process-wide registry, validated on first use
    pub fn global() -> Result<&'static LayoutRegistry> {
        if let Some(registry) = REGISTRY.get() {
            return Ok(registry);
        }
        let registry = Self::builtin()?;
        debug!("Loaded {} keyboard layouts", Mode::COUNT);
        Ok(REGISTRY.get_or_init(|| registry))
    }

    pub fn of(&self, mode: Mode) -> &Layout {
        &self.layouts[mode.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_table_matches_registry_order() {
        for (i, mode) in Mode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), i);
        }
        assert_eq!(Mode::ALL.len(), BUILTIN_LAYOUTS.len());
    }

    #[test]
    fn test_mode_names_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(mode.name().parse::<Mode>().unwrap(), mode);
        }
        assert_eq!(" Letter ".parse::<Mode>().unwrap(), Mode::Letter);
        assert!("klingon".parse::<Mode>().is_err());
    }

    #[test]
    fn test_partners_link_back() {
        for mode in Mode::ALL {
            let partner = mode.partner();
            assert_ne!(partner, mode);
            // Only the shared 2ke symbol page and the Cyrillic page are one-way
            if !matches!(mode, Mode::Letter2k3e | Mode::RuCyrl) {
                assert_eq!(partner.partner(), mode, "{} <-> {}", mode, partner);
            }
        }
    }

    #[test]
    fn test_builtin_registry_is_valid() {
        let registry = LayoutRegistry::builtin().expect("builtin layouts validate");
        assert_eq!(registry.of(Mode::Letter).label, "<Abcd>");
        assert_eq!(registry.of(Mode::Symbol).label, "<$A$B>");
        assert_eq!(registry.of(Mode::Hiragana).raw(0, 0), "あ");
    }

    #[test]
    fn test_global_registry_is_shared() {
        let a = LayoutRegistry::global().unwrap();
        let b = LayoutRegistry::global().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_registry_rejects_layout_without_selectable_cells() {
        let mut layouts = BUILTIN_LAYOUTS.clone();
        layouts[Mode::Katakana.index()] = Layout::new("<Void>", [[""; COLS]; ROWS]);
        let err = LayoutRegistry::new(layouts).unwrap_err();
        assert!(err.to_string().contains("katakana"));
    }

    #[test]
    fn test_every_layout_has_page_and_done_controls() {
        for layout in BUILTIN_LAYOUTS.iter() {
            assert_eq!(layout.find(NEXT_PAGE), vec![(ROWS - 1, COLS - 4)], "{}", layout.label);
            assert_eq!(layout.find(DONE), vec![(ROWS - 1, COLS - 2)], "{}", layout.label);
        }
    }

    #[test]
    fn test_confirm_text_presets() {
        assert_eq!(Mode::Letter.confirm_text().as_str(), DONE);
        assert_eq!(Mode::Hiragana.confirm_text().as_str(), "<決定>");
        assert_eq!(Mode::Letter2ke.confirm_text().as_str(), "<OK!>");
        assert_eq!(Mode::LetterEs.confirm_text().as_str(), "< OK >");
    }
}
