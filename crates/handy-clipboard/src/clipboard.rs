use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Clipboard command `{0}` timed out after {1:?}")]
    Timeout(String, Duration),
    #[error("Clipboard command `{0}` failed with status {1}")]
    CommandFailed(String, std::process::ExitStatus),
}

/// A destination that can receive copied text.
///
/// Callers take this as a parameter instead of reaching for the ambient
/// system clipboard, which keeps copy-dependent code testable and lets
/// headless environments substitute [`MemoryClipboard`].
pub trait Clipboard: Send + Sync {
    /// Places `text` on the clipboard, replacing previous contents.
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// In-memory [`Clipboard`] for tests and headless callers.
///
/// Stores the last copied string; never fails.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last copied text, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().expect("clipboard store poisoned").clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock().expect("clipboard store poisoned") = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_starts_empty() {
        let clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.contents(), None);
    }

    #[test]
    fn test_memory_clipboard_keeps_last_copy() {
        let clipboard = MemoryClipboard::new();
        clipboard.copy("first").unwrap();
        clipboard.copy("second").unwrap();
        assert_eq!(clipboard.contents(), Some("second".to_string()));
    }

    #[test]
    fn test_trait_object_usability() {
        let clipboard = MemoryClipboard::new();
        let target: &dyn Clipboard = &clipboard;
        target.copy("via trait").unwrap();
        assert_eq!(clipboard.contents(), Some("via trait".to_string()));
    }
}
