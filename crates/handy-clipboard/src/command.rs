use crate::clipboard::{Clipboard, ClipboardError};
use std::io::Write;
use std::process::{Command, Stdio};
use std::time::Duration;
use wait_timeout::ChildExt;

/// [`Clipboard`] backed by a shell command that reads the text on stdin.
///
/// The command is run through the platform shell, its stdout discarded.
/// If it does not exit within the timeout it is killed.
///
/// # Example
///
/// ```rust,no_run
/// use handy_clipboard::{Clipboard, CommandClipboard};
///
/// let clipboard = CommandClipboard::new("pbcopy");
/// clipboard.copy("selected item")?;
/// # Ok::<(), handy_clipboard::ClipboardError>(())
/// ```
pub struct CommandClipboard {
    command: String,
    timeout: Duration,
}

impl CommandClipboard {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Clipboard for CommandClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut cmd = if cfg!(target_os = "windows") {
            let mut c = Command::new("cmd");
            c.arg("/C").arg(&self.command);
            c
        } else {
            let mut c = Command::new("sh");
            c.arg("-c").arg(&self.command);
            c
        };

        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let mut child = cmd.spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        match child.wait_timeout(self.timeout)? {
            Some(status) => {
                if !status.success() {
                    return Err(ClipboardError::CommandFailed(self.command.clone(), status));
                }
            }
            None => {
                child.kill()?;
                return Err(ClipboardError::Timeout(self.command.clone(), self.timeout));
            }
        }

        Ok(())
    }
}
