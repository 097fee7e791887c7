//! Channel subtitle line.
//!
//! Default subtitle widget for the channel header. Shows who is typing when
//! the typing indicator is enabled and someone is, otherwise falls back to
//! member/online counts.

use iocraft::prelude::*;
use jiff::Timestamp;

use crate::client::{ChannelHandle, ChannelState};
use crate::i18n::Translations;
use crate::tui::theme::HeaderTheme;

/// Resolve the subtitle for a channel at a point in time
pub fn subtitle_text(
    state: &ChannelState,
    strings: &Translations,
    show_typing: bool,
    now: Timestamp,
) -> String {
    if show_typing {
        if let Some(line) = strings.typing(&state.typing_user_names(now)) {
            return line;
        }
    }
    strings.members_online(state.member_count, state.online_count)
}

/// Props for the ChannelInfo component
#[derive(Default, Props)]
pub struct ChannelInfoProps {
    /// Channel the subtitle describes
    pub channel: Option<ChannelHandle>,
    /// Localized strings
    pub strings: Translations,
    /// Header styling section
    pub theme: HeaderTheme,
    /// Whether typing activity takes over the subtitle
    pub show_typing_indicator: bool,
}

/// Single-line channel status text
#[component]
pub fn ChannelInfo(props: &ChannelInfoProps) -> impl Into<AnyElement<'static>> {
    let line = match props.channel.as_ref() {
        Some(handle) => subtitle_text(
            &handle.read(),
            &props.strings,
            props.show_typing_indicator,
            Timestamp::now(),
        ),
        None => props.strings.no_members.to_string(),
    };

    element! {
        Text(
            content: line,
            color: props.theme.subtitle_color,
        )
    }
}
