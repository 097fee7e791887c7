//! Channel title text.
//!
//! Default title widget for the channel header: the channel's name, or a
//! localized placeholder when it has none, truncated to the available width.

use iocraft::prelude::*;

use crate::client::ChannelHandle;
use crate::i18n::Translations;
use crate::tui::theme::HeaderTheme;

/// Resolve the title to display for a channel name
pub fn display_title(name: Option<&str>, strings: &Translations) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => strings.unnamed_channel.to_string(),
    }
}

/// Truncate to `max` columns, ellipsizing when the text is longer.
/// A `max` of zero means unlimited.
pub fn truncate(text: &str, max: usize) -> String {
    if max == 0 || text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(1);
    let mut out: String = text.chars().take(keep).collect();
    out.push('…');
    out
}

/// Props for the ChannelName component
#[derive(Default, Props)]
pub struct ChannelNameProps {
    /// Channel whose name is displayed
    pub channel: Option<ChannelHandle>,
    /// Localized strings (unnamed-channel fallback)
    pub strings: Translations,
    /// Header styling section
    pub theme: HeaderTheme,
    /// Maximum width in columns; zero means unlimited
    pub max_width: usize,
}

/// Single-line channel title
#[component]
pub fn ChannelName(props: &ChannelNameProps) -> impl Into<AnyElement<'static>> {
    let name = props
        .channel
        .as_ref()
        .and_then(|handle| handle.read().name.clone());
    let title = truncate(&display_title(name.as_deref(), &props.strings), props.max_width);

    element! {
        Text(
            content: title,
            color: props.theme.title_color,
            weight: props.theme.title_weight,
        )
    }
}
