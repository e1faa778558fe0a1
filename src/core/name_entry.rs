//! Name entry prompt: the screen that owns a [`Keyboard`] and acts on the
//! selected key.

use tracing::debug;

use crate::keyboard::{Directions, Keyboard, DONE, NEXT_PAGE, SPACE};

/// How a prompt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    Confirmed(String),
    Cancelled,
}

pub struct NameEntry<'r> {
    keyboard: Keyboard<'r>,
    /// One entry per pressed key; glyph codes like `$A` stay a single entry
    keys: Vec<String>,
    max_chars: usize,
    outcome: Option<EntryOutcome>,
}

impl<'r> NameEntry<'r> {
    pub fn new(keyboard: Keyboard<'r>, max_chars: usize) -> Self {
        Self {
            keyboard,
            keys: Vec::new(),
            max_chars,
            outcome: None,
        }
    }

    /// Pre-fill the name with already entered keys
    ///
    /// Keys are kept whole, so a glyph code like `$A` stays one key for
    /// [`cancel`](Self::cancel) and the length limit.
    pub fn with_initial<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().take(self.max_chars).map(Into::into).collect();
        self
    }

    pub fn keyboard(&self) -> &Keyboard<'r> {
        &self.keyboard
    }

    pub fn keyboard_mut(&mut self) -> &mut Keyboard<'r> {
        &mut self.keyboard
    }

    pub fn name(&self) -> String {
        self.keys.concat()
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn outcome(&self) -> Option<&EntryOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Per-frame update with this tick's directional events
    pub fn update(&mut self, dirs: Directions) {
        self.keyboard.update(dirs);
    }

    /// Act on the key under the cursor
    pub fn decide(&mut self) {
        if self.is_finished() {
            return;
        }

        match self.keyboard.selected() {
            NEXT_PAGE => {
                // The page we leave becomes the target of the next flip
                let (current, next) = (self.keyboard.mode(), self.keyboard.next_mode());
                self.keyboard.set_mode(next, current);
            }
            DONE => {
                let name = self.name();
                debug!("Name entry confirmed: {:?}", name);
                self.finish(EntryOutcome::Confirmed(name));
            }
            SPACE => self.push_key(" "),
            "" => {}
            key => self.push_key(key),
        }
    }

    /// Erase the last key, or abandon the prompt when nothing is entered
    pub fn cancel(&mut self) {
        if self.is_finished() {
            return;
        }
        if self.keys.pop().is_none() {
            debug!("Name entry cancelled");
            self.finish(EntryOutcome::Cancelled);
        }
    }

    fn push_key(&mut self, key: &str) {
        if self.keys.len() < self.max_chars {
            self.keys.push(key.to_string());
        }
    }

    fn finish(&mut self, outcome: EntryOutcome) {
        self.keyboard.set_active(false);
        self.outcome = Some(outcome);
    }
}
