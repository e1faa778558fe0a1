//! Frontend abstraction layer
//!
//! This module defines the `Frontend` trait a terminal (or any other) frontend
//! implements. It supplies input events to the prompt and draws its state.

pub mod events;
pub mod tui;

use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

use crate::core::NameEntry;

/// Frontend trait - input collaborator and renderer for a name entry prompt
pub trait Frontend {
    /// Poll for user input events
    ///
    /// Returns every pending event converted to [`FrontendEvent`], empty if
    /// nothing happened during the frame.
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Render the prompt; called once per frame
    fn render(&mut self, entry: &mut NameEntry<'_>) -> Result<()>;

    /// Restore the terminal/window before exit
    fn cleanup(&mut self) -> Result<()>;

    /// Current size of the rendering area as `(width, height)`
    fn size(&self) -> (u16, u16);
}
