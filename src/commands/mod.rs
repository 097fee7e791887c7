//! Command implementations for the `confab` binary.

mod chat;
mod config;

pub use chat::cmd_chat;
pub use config::{cmd_config_path, cmd_config_set, cmd_config_show};
