pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod i18n;
pub mod tui;

pub use client::{
    ChannelHandle, ChannelState, ChatClient, ConnectionMonitor, ConnectionStatus, StatusFeed, User,
};
pub use config::Config;
pub use error::{ConfabError, Result};
pub use i18n::{Locale, Translations};
