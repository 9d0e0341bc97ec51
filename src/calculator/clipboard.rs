//! Clipboard access for the copy and paste shortcuts.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to access clipboard: {0}")]
    Unavailable(String),
    #[error("Failed to copy to clipboard: {0}")]
    Write(String),
    #[error("Failed to read clipboard: {0}")]
    Read(String),
}

/// Something that can hold a piece of text for copy and paste.
pub trait ClipboardProvider {
    fn get_text(&mut self) -> Result<String, ClipboardError>;
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard, backed by arboard.
pub struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard = Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.clipboard
            .get_text()
            .map_err(|e| ClipboardError::Read(e.to_string()))
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// A clipboard that lives only inside this process.
///
/// Used when the desktop clipboard cannot be opened.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    content: String,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        Ok(self.content.clone())
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.content = text.to_string();
        Ok(())
    }
}

/// Open the desktop clipboard, falling back to an in-process one.
pub fn open_clipboard() -> Box<dyn ClipboardProvider> {
    match SystemClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(e) => {
            tracing::warn!("{}, using in-process clipboard", e);
            Box::new(MemoryClipboard::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_round_trip() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.get_text().unwrap(), "");

        clipboard.set_text("720+80").unwrap();
        assert_eq!(clipboard.get_text().unwrap(), "720+80");
    }

    #[test]
    fn test_with_content() {
        let mut clipboard = MemoryClipboard::with_content("50");
        assert_eq!(clipboard.get_text().unwrap(), "50");
    }
}
