use crate::command::CommandClipboard;

/// Returns the system clipboard for macOS (pbcopy).
#[cfg(target_os = "macos")]
pub fn system_clipboard() -> Option<CommandClipboard> {
    Some(CommandClipboard::new("pbcopy"))
}

/// Returns the system clipboard for Linux (xclip).
#[cfg(target_os = "linux")]
pub fn system_clipboard() -> Option<CommandClipboard> {
    Some(CommandClipboard::new("xclip -selection clipboard"))
}

/// Returns None on unsupported platforms.
#[cfg(not(any(target_os = "macos", target_os = "linux")))]
pub fn system_clipboard() -> Option<CommandClipboard> {
    None
}
