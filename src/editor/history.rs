//! Undo/redo history for the expression buffer.

use std::collections::VecDeque;

/// One change to the buffer, stored as the full text before and after.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edit {
    pub before: String,
    pub after: String,
}

/// Bounded undo stack plus a redo stack that any new edit clears.
#[derive(Clone, Debug)]
pub struct History {
    undo: VecDeque<Edit>,
    redo: Vec<Edit>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit,
        }
    }

    /// Record a new edit. Drops the oldest entry once the limit is reached.
    pub fn record(&mut self, before: String, after: String) {
        self.redo.clear();
        if self.limit == 0 {
            return;
        }
        if self.undo.len() == self.limit {
            self.undo.pop_front();
        }
        self.undo.push_back(Edit { before, after });
    }

    /// Take the most recent edit, moving it onto the redo stack.
    pub fn undo(&mut self) -> Option<&Edit> {
        let edit = self.undo.pop_back()?;
        self.redo.push(edit);
        self.redo.last()
    }

    /// Take the most recently undone edit, moving it back onto the undo stack.
    pub fn redo(&mut self) -> Option<&Edit> {
        let edit = self.redo.pop()?;
        self.undo.push_back(edit);
        self.undo.back()
    }

    #[cfg(test)]
    fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[cfg(test)]
    fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(history: &mut History, before: &str, after: &str) {
        history.record(before.to_string(), after.to_string());
    }

    #[test]
    fn test_undo_then_redo() {
        let mut history = History::new(8);
        record(&mut history, "", "1");
        record(&mut history, "1", "12");

        assert_eq!(history.undo().map(|e| e.before.as_str()), Some("1"));
        assert_eq!(history.undo().map(|e| e.before.as_str()), Some(""));
        assert!(history.undo().is_none());

        assert_eq!(history.redo().map(|e| e.after.as_str()), Some("1"));
        assert_eq!(history.redo().map(|e| e.after.as_str()), Some("12"));
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut history = History::new(8);
        record(&mut history, "", "1");
        history.undo();
        assert!(history.can_redo());

        record(&mut history, "", "2");
        assert!(!history.can_redo());
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = History::new(2);
        record(&mut history, "", "1");
        record(&mut history, "1", "12");
        record(&mut history, "12", "123");

        assert!(history.undo().is_some());
        assert!(history.undo().is_some());
        assert!(!history.can_undo());
    }

    #[test]
    fn test_zero_limit_keeps_nothing() {
        let mut history = History::new(0);
        record(&mut history, "", "1");
        assert!(!history.can_undo());
    }
}
