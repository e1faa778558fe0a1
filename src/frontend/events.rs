//! Frontend-agnostic input events.
//!
//! Frontends translate their native event streams (crossterm, etc.) into this
//! enum so the prompt only handles one event shape.

use crossterm::event::{KeyCode, KeyModifiers};

use tracing::debug;

use crate::core::NameEntry;
use crate::keyboard::{Direction, Directions};

/// Events emitted by frontends, converted to a unified format
#[derive(Debug, Clone, PartialEq)]
pub enum FrontendEvent {
    /// Directional press or auto-repeat
    Move(Direction),
    /// Act on the selected key
    Decide,
    /// Erase a key or leave the prompt
    Cancel,
    /// Terminal/window resize
    Resize { width: u16, height: u16 },
    /// Application quit signal
    Quit,
}

impl FrontendEvent {
    /// Map a key press to an event, if the key means anything here
    pub fn from_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Self> {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c') => Some(Self::Quit),
                _ => None,
            };
        }

        match code {
            KeyCode::Up | KeyCode::Char('k') => Some(Self::Move(Direction::Up)),
            KeyCode::Down | KeyCode::Char('j') => Some(Self::Move(Direction::Down)),
            KeyCode::Left | KeyCode::Char('h') => Some(Self::Move(Direction::Left)),
            KeyCode::Right | KeyCode::Char('l') => Some(Self::Move(Direction::Right)),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('z') => Some(Self::Decide),
            KeyCode::Backspace | KeyCode::Esc | KeyCode::Char('x') => Some(Self::Cancel),
            KeyCode::Char('q') => Some(Self::Quit),
            _ => None,
        }
    }

    pub fn resize(width: u16, height: u16) -> Self {
        Self::Resize { width, height }
    }
}

/// Feed one frame's events to the prompt in the order they arrived
///
/// Moves gather into a [`Directions`] tick. The tick is flushed through
/// `update` before every decide/cancel and whenever a direction repeats, so
/// a key always acts on the cell the cursor had reached when it was pressed.
/// Returns true when the user asked to quit.
pub fn apply_events(entry: &mut NameEntry<'_>, events: &[FrontendEvent]) -> bool {
    let mut dirs = Directions::none();
    for event in events {
        match event {
            FrontendEvent::Move(direction) => {
                if dirs.is_pressed(*direction) {
                    entry.update(std::mem::take(&mut dirs));
                }
                dirs.press(*direction);
            }
            FrontendEvent::Decide => {
                flush_moves(entry, &mut dirs);
                entry.decide();
            }
            FrontendEvent::Cancel => {
                flush_moves(entry, &mut dirs);
                entry.cancel();
            }
            FrontendEvent::Resize { width, height } => {
                debug!("Terminal resized to {}x{}", width, height);
            }
            FrontendEvent::Quit => return true,
        }
    }
    entry.update(dirs);
    false
}

fn flush_moves(entry: &mut NameEntry<'_>, dirs: &mut Directions) {
    if !dirs.is_idle() {
        entry.update(std::mem::take(dirs));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::{Cursor, Keyboard, LayoutRegistry};
    use crate::sound::Silent;
    use ratatui::layout::Rect;

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            FrontendEvent::from_key(KeyCode::Up, KeyModifiers::NONE),
            Some(FrontendEvent::Move(Direction::Up))
        );
        assert_eq!(
            FrontendEvent::from_key(KeyCode::Char('l'), KeyModifiers::NONE),
            Some(FrontendEvent::Move(Direction::Right))
        );
        assert_eq!(
            FrontendEvent::from_key(KeyCode::Enter, KeyModifiers::NONE),
            Some(FrontendEvent::Decide)
        );
        assert_eq!(
            FrontendEvent::from_key(KeyCode::Backspace, KeyModifiers::NONE),
            Some(FrontendEvent::Cancel)
        );
        assert_eq!(
            FrontendEvent::from_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(FrontendEvent::Quit)
        );
        assert_eq!(FrontendEvent::from_key(KeyCode::Char('l'), KeyModifiers::CONTROL), None);
        assert_eq!(FrontendEvent::from_key(KeyCode::F(1), KeyModifiers::NONE), None);
    }

    fn entry(registry: &LayoutRegistry) -> NameEntry<'_> {
        let kb = Keyboard::new(registry, Rect::new(0, 0, 320, 176), "<Done>", Box::new(Silent));
        NameEntry::new(kb, 12)
    }

    #[test]
    fn test_decide_acts_before_later_moves() {
        let registry = LayoutRegistry::builtin().unwrap();
        let mut e = entry(&registry);
        let quit = apply_events(&mut e, &[FrontendEvent::Decide, FrontendEvent::Move(Direction::Right)]);
        assert!(!quit);
        assert_eq!(e.name(), "A");
        assert_eq!(e.keyboard().selected(), "B");
    }

    #[test]
    fn test_moves_before_decide_are_applied_first() {
        let registry = LayoutRegistry::builtin().unwrap();
        let mut e = entry(&registry);
        let events = [
            FrontendEvent::Move(Direction::Right),
            FrontendEvent::Decide,
            FrontendEvent::Move(Direction::Right),
            FrontendEvent::Move(Direction::Right),
            FrontendEvent::Decide,
            FrontendEvent::Cancel,
            FrontendEvent::Move(Direction::Down),
            FrontendEvent::Decide,
        ];
        apply_events(&mut e, &events);
        // B, then D erased, then I one row below D
        assert_eq!(e.name(), "BI");
    }

    #[test]
    fn test_repeated_direction_moves_twice() {
        let registry = LayoutRegistry::builtin().unwrap();
        let mut e = entry(&registry);
        let events = [
            FrontendEvent::Move(Direction::Right),
            FrontendEvent::Move(Direction::Down),
            FrontendEvent::Move(Direction::Right),
        ];
        apply_events(&mut e, &events);
        assert_eq!(e.keyboard().cursor(), Cursor::new(1, 2));
        assert_eq!(e.keyboard().selected(), "H");
    }

    #[test]
    fn test_quit_stops_the_batch() {
        let registry = LayoutRegistry::builtin().unwrap();
        let mut e = entry(&registry);
        let events = [FrontendEvent::resize(80, 24), FrontendEvent::Quit, FrontendEvent::Decide];
        assert!(apply_events(&mut e, &events));
        assert_eq!(e.name(), "");
    }
}
