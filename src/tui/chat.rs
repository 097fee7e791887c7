//! Chat screen (`confab chat`).
//!
//! Hosts the channel header over a simple activity pane, wiring the header's
//! callbacks to visible feedback and mapping a few keys onto client
//! operations so every header state can be reached interactively.
//!
//! Layout:
//! ```text
//! +------------------------------------------+
//! | ChannelHeader (banner + toolbar)          |
//! +------------------------------------------+
//! | activity pane                             |
//! |                                           |
//! +------------------------------------------+
//! | Toast (when present)                      |
//! | Footer                                    |
//! +------------------------------------------+
//! ```

use std::sync::Arc;
use std::time::Duration;

use iocraft::prelude::*;

use crate::client::{ChannelHandle, ChatClient, ConnectionStatus, User};
use crate::i18n::Translations;
use crate::tui::components::{
    ChannelHeader, Footer, Toast, ToastNotification, chat_shortcuts,
};
use crate::tui::theme::theme;

/// Props for the ChatScreen component
#[derive(Default, Props)]
pub struct ChatScreenProps {
    /// Client session driving the screen
    pub client: Option<Arc<ChatClient>>,
    /// The channel being viewed
    pub channel: Option<ChannelHandle>,
    /// Localized strings
    pub strings: Translations,
    /// Whether the header keeps its default avatar action
    pub show_avatars: bool,
}

/// Conversation screen hosting the channel header
#[component]
pub fn ChatScreen(props: &ChatScreenProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let client = props
        .client
        .clone()
        .expect("ChatScreen mounted without a client");
    let channel = props
        .channel
        .clone()
        .expect("ChatScreen mounted without a channel");

    let should_exit = hooks.use_state(|| false);
    let toast: State<Option<Toast>> = hooks.use_state(|| None);

    // Re-render whenever the channel's state changes under us
    let channel_version = hooks.use_state(|| 0u64);
    hooks.use_future({
        let mut rx = channel.watch();
        let mut channel_version = channel_version;
        async move {
            while rx.changed().await.is_ok() {
                channel_version.set(*rx.borrow_and_update());
            }
        }
    });

    // Header callbacks
    let back_handler: Handler<()> = hooks.use_async_handler({
        let should_exit = should_exit;
        move |()| {
            let mut should_exit = should_exit;
            async move {
                should_exit.set(true);
            }
        }
    });
    let title_handler: Handler<()> = hooks.use_async_handler({
        let toast = toast;
        let channel = channel.clone();
        let strings = props.strings;
        move |()| {
            let mut toast = toast;
            let channel = channel.clone();
            async move {
                let (name, members, online) = {
                    let state = channel.read();
                    (
                        state.name.clone().unwrap_or_else(|| state.id.clone()),
                        state.member_count,
                        state.online_count,
                    )
                };
                toast.set(Some(Toast::info(format!(
                    "{}: {}",
                    name,
                    strings.members_online(members, online)
                ))));
            }
        }
    });
    let avatar_handler: Handler<()> = hooks.use_async_handler({
        let toast = toast;
        let channel = channel.clone();
        move |()| {
            let mut toast = toast;
            let channel = channel.clone();
            async move {
                let name = channel.read().id.clone();
                toast.set(Some(Toast::info(format!("Channel image for #{}", name))));
            }
        }
    });

    // Keyboard controls
    hooks.use_terminal_events({
        let client = Arc::clone(&client);
        let channel = channel.clone();
        let mut toast = toast;
        let mut should_exit = should_exit;
        move |event| {
            let TerminalEvent::Key(KeyEvent { code, kind, .. }) = event else {
                return;
            };
            if kind == KeyEventKind::Release {
                return;
            }
            match code {
                KeyCode::Char('q') | KeyCode::Esc => should_exit.set(true),
                KeyCode::Char('m') => {
                    let id = channel.read().id.clone();
                    match client.mark_read(&id) {
                        Ok(()) => toast.set(Some(Toast::success("Marked as read"))),
                        Err(e) => toast.set(Some(Toast::error(e.to_string()))),
                    }
                }
                KeyCode::Char('d') => {
                    client.connection().set(ConnectionStatus::Disconnected);
                }
                KeyCode::Char('r') => {
                    client.connection().set(ConnectionStatus::Connecting);
                    let client = Arc::clone(&client);
                    tokio::spawn(async move {
                        tokio::time::sleep(Duration::from_millis(1_200)).await;
                        client.connection().set(ConnectionStatus::Connected);
                    });
                }
                KeyCode::Char('t') => {
                    let now = jiff::Timestamp::now();
                    channel.update(|state| {
                        state.set_typing(User::new("local-demo", "Sam"), now);
                    });
                }
                _ => {}
            }
        }
    });

    if should_exit.get() {
        system.exit();
    }

    // Snapshot for the activity pane
    let (unread, last_message_at) = {
        let state = channel.read();
        (state.unread_count, state.last_message_at)
    };
    let last_line = last_message_at
        .map(|ts| format!("Last message at {}", ts.strftime("%H:%M:%S")))
        .unwrap_or_else(|| "No messages yet".to_string());
    let current_toast = toast.read().clone().filter(|t| !t.is_expired());

    element! {
        View(
            width: width,
            height: height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            ChannelHeader(
                channel: Some(channel.clone()),
                status: Some(client.connection().subscribe()),
                theme: theme.header.clone(),
                strings: props.strings,
                show_back_button: true,
                show_typing_indicator: true,
                show_connection_banner: true,
                on_back_pressed: Some(back_handler),
                on_title_tap: Some(title_handler),
                on_image_tap: Some(avatar_handler),
                actions: if props.show_avatars { None } else { Some(Vec::new()) },
            )

            // Activity pane
            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                Text(
                    content: match unread {
                        0 => "You're all caught up".to_string(),
                        1 => "1 unread message".to_string(),
                        n => format!("{} unread messages", n),
                    },
                    color: theme.text,
                    weight: Weight::Bold,
                )
                View(margin_top: 1) {
                    Text(content: last_line, color: theme.text_dimmed)
                }
            }

            #(current_toast.map(|t| element! {
                ToastNotification(toast: Some(t))
            }))

            Footer(shortcuts: chat_shortcuts())
        }
    }
}
