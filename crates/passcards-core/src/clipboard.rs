//! Clipboard access for copying passwords.
//!
//! Copying can fail when the platform refuses clipboard access (no display,
//! sandboxing). Failures come back as [`Error::Clipboard`] so callers decide
//! whether to log or report them.

use crate::error::{Error, Result};

/// Anything that can receive plaintext.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The operating system clipboard.
///
/// On Linux the copied text is served by this process, so the handle has to
/// outlive the copy. Short-lived processes should use [`SystemClipboard::persistent`].
pub struct SystemClipboard {
    inner: arboard::Clipboard,
    wait_for_owner: bool,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new().map_err(clipboard_error)?;
        Ok(Self {
            inner,
            wait_for_owner: false,
        })
    }

    /// A clipboard whose `set_text` blocks until another program takes the
    /// selection over (Linux only; elsewhere identical to [`SystemClipboard::new`]).
    pub fn persistent() -> Result<Self> {
        let mut clipboard = Self::new()?;
        clipboard.wait_for_owner = true;
        Ok(clipboard)
    }
}

impl Clipboard for SystemClipboard {
    #[cfg(target_os = "linux")]
    fn set_text(&mut self, text: &str) -> Result<()> {
        use arboard::SetExtLinux;

        let result = if self.wait_for_owner {
            self.inner.set().wait().text(text)
        } else {
            self.inner.set_text(text)
        };
        result.map_err(clipboard_error)
    }

    #[cfg(not(target_os = "linux"))]
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner.set_text(text).map_err(clipboard_error)
    }
}

/// In-process clipboard, for headless runs and tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[allow(clippy::needless_pass_by_value)]
fn clipboard_error(error: arboard::Error) -> Error {
    Error::Clipboard(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_keeps_last_text() {
        let mut clipboard = MemoryClipboard::default();
        assert_eq!(clipboard.contents(), None);
        clipboard.set_text("first").unwrap();
        clipboard.set_text("second").unwrap();
        assert_eq!(clipboard.contents(), Some("second"));
    }
}
