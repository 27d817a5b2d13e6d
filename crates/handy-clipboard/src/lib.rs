//! # Handy Clipboard - Copy-to-Clipboard Capability
//!
//! A small capability port around "put this text on the clipboard". The
//! [`Clipboard`] trait is the seam: production code receives an
//! implementation instead of touching the system clipboard directly, so
//! tests and headless environments swap in [`MemoryClipboard`] while
//! desktop callers use [`system_clipboard`] (which pipes through `pbcopy`
//! or `xclip`).
//!
//! ```rust
//! use handy_clipboard::{Clipboard, MemoryClipboard};
//!
//! fn copy_selection(clipboard: &dyn Clipboard, item: &str) {
//!     let _ = clipboard.copy(item);
//! }
//!
//! let clipboard = MemoryClipboard::new();
//! copy_selection(&clipboard, "plumbing");
//! assert_eq!(clipboard.contents(), Some("plumbing".to_string()));
//! ```

pub mod clipboard;
pub mod command;
pub mod platform;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard};
pub use command::CommandClipboard;
pub use platform::system_clipboard;
