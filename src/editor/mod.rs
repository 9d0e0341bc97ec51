//! The single-line expression buffer.
//!
//! Buttons and keys only ever add to the end of the line, so the caret is
//! always at the end. Every change is recorded so it can be undone, and a
//! whole-line replacement (used when an evaluation result is written back)
//! is a single undo step.

mod history;

pub use history::{Edit, History};

/// Default number of undo steps kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

#[derive(Clone, Debug)]
pub struct Editor {
    text: String,
    history: History,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl Editor {
    pub fn new(history_limit: usize) -> Self {
        Self {
            text: String::new(),
            history: History::new(history_limit),
        }
    }

    /// Current buffer content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Insert a character at the caret.
    pub fn append(&mut self, c: char) {
        let before = self.text.clone();
        self.text.push(c);
        self.history.record(before, self.text.clone());
    }

    /// Remove the character before the caret. Does nothing on an empty buffer.
    pub fn backspace(&mut self) {
        let before = self.text.clone();
        if self.text.pop().is_some() {
            self.history.record(before, self.text.clone());
        }
    }

    /// Replace the whole line with `text` as one undoable step.
    pub fn replace_all(&mut self, text: &str) {
        if self.text == text {
            return;
        }
        let before = std::mem::replace(&mut self.text, text.to_string());
        self.history.record(before, self.text.clone());
    }

    pub fn clear(&mut self) {
        self.replace_all("");
    }

    /// Revert the most recent edit. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(edit) => {
                self.text = edit.before.clone();
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone edit. Returns `false` if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(edit) => {
                self.text = edit.after.clone();
                true
            }
            None => false,
        }
    }
}
