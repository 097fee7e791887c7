//! TUI module for interactive terminal interfaces.
//!
//! The widget library lives in [`components`]; [`chat`] is the screen the
//! `confab chat` command runs fullscreen.

pub mod chat;
pub mod components;
pub mod theme;

pub use chat::{ChatScreen, ChatScreenProps};
pub use theme::{HeaderTheme, Theme, theme};
