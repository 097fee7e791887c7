//! Chat screen command (`confab chat`).
//!
//! Builds the client session, joins the requested channel, starts the demo
//! simulator, and runs the chat screen fullscreen until the user backs out.

use std::sync::Arc;

use iocraft::prelude::*;

use crate::client::{ChatClient, Simulator, User};
use crate::config::Config;
use crate::error::{ConfabError, Result};
use crate::i18n::{Locale, Translations};
use crate::tui::ChatScreen;

/// Launch the chat TUI
pub async fn cmd_chat(
    channel: Option<String>,
    locale: Option<String>,
    no_avatars: bool,
) -> Result<()> {
    let config = Config::load()?;
    let locale = match locale {
        Some(tag) => Locale::parse(&tag)?,
        None => config.locale()?,
    };
    let strings = Translations::for_locale(locale);

    let client = Arc::new(ChatClient::new(User::guest(config.display_name.clone())));
    let channel_id = channel.unwrap_or_else(|| config.default_channel.clone());
    let handle = client.join(&channel_id);

    let simulator = Simulator::new(Arc::clone(&client), handle.clone());
    let sim_task = tokio::spawn(simulator.run());

    let result = element! {
        ChatScreen(
            client: Some(Arc::clone(&client)),
            channel: Some(handle),
            strings: strings,
            show_avatars: config.show_avatars && !no_avatars,
        )
    }
    .fullscreen()
    .await;

    sim_task.abort();
    result.map_err(|e| ConfabError::Other(format!("TUI error: {}", e)))
}
