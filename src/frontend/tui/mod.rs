//! TUI Frontend (ratatui-based)
//!
//! This module implements the Frontend trait using ratatui for terminal rendering.
//! It wraps crossterm for event handling and terminal management.

pub mod keyboard;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::config::UiConfig;
use crate::core::NameEntry;
use crate::frontend::{Frontend, FrontendEvent};
pub use keyboard::{KeyboardView, NAME_BOX_HEIGHT};

/// TUI Frontend using ratatui
///
/// Renders the name prompt centered in the terminal and turns crossterm key
/// presses into [`FrontendEvent`]s.
pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    poll_timeout: Duration,
    window: (u16, u16),
}

impl TuiFrontend {
    /// Create a new TUI frontend
    ///
    /// Initializes terminal in raw mode and enters alternate screen.
    pub fn new(ui: &UiConfig) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            poll_timeout: Duration::from_millis(ui.frame_ms),
            window: (ui.width, ui.height),
        })
    }

    /// Keyboard window placement for the current terminal size
    pub fn keyboard_area(&self) -> Rect {
        let (width, height) = self.size();
        keyboard_area(Rect::new(0, 0, width, height), self.window)
    }

    /// Convert crossterm event to FrontendEvent
    fn convert_event(event: Event) -> Option<FrontendEvent> {
        match event {
            Event::Key(key_event) => {
                // Held keys arrive as repeats and keep the cursor moving
                if key_event.kind == KeyEventKind::Release {
                    return None;
                }
                FrontendEvent::from_key(key_event.code, key_event.modifiers)
            }
            Event::Resize(w, h) => Some(FrontendEvent::resize(w, h)),
            _ => None,
        }
    }
}

/// Center a `window` sized keyboard, plus the name box above it, in `screen`
pub fn keyboard_area(screen: Rect, window: (u16, u16)) -> Rect {
    let (width, height) = window;
    let width = width.min(screen.width);
    let total = height.saturating_add(NAME_BOX_HEIGHT);
    let top = screen.y + screen.height.saturating_sub(total) / 2;
    let y = (top + NAME_BOX_HEIGHT).min(screen.bottom());
    Rect {
        x: screen.x + (screen.width - width) / 2,
        y,
        width,
        height: height.min(screen.bottom() - y),
    }
}

impl Frontend for TuiFrontend {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = Vec::new();
        let deadline = Instant::now() + self.poll_timeout;

        // Read until the frame is over, not until input goes quiet
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !event::poll(remaining)? {
                break;
            }
            if let Ok(ev) = event::read() {
                if let Some(frontend_event) = Self::convert_event(ev) {
                    events.push(frontend_event);
                }
            }
        }

        Ok(events)
    }

    fn render(&mut self, entry: &mut NameEntry<'_>) -> Result<()> {
        let area = self.keyboard_area();
        if entry.keyboard().area() != area {
            debug!("Keyboard window moved to {:?}", area);
            entry.keyboard_mut().set_area(area);
        }
        if entry.keyboard_mut().take_redraw() {
            self.terminal.clear()?;
        }

        let entry: &NameEntry<'_> = entry;
        self.terminal.draw(|f| {
            let name_area = Rect {
                y: area.y.saturating_sub(NAME_BOX_HEIGHT),
                height: NAME_BOX_HEIGHT.min(area.y),
                ..area
            };
            f.render_widget(KeyboardView::new(entry), name_area);
        })?;

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        let size = self.terminal.size().unwrap_or_default();
        (size.width, size.height)
    }
}

impl Drop for TuiFrontend {
    fn drop(&mut self) {
        // Ensure terminal is restored even if cleanup() wasn't called
        let _ = self.cleanup();
    }
}
