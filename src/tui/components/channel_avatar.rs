//! Channel avatar.
//!
//! Terminals cannot show the channel's remote image, so the avatar renders
//! as a small bordered box with the channel's initials, sized from the
//! header theme. Tapping it invokes the header's image callback.

use iocraft::prelude::*;

use super::channel_header::TOOLBAR_HEIGHT;
use super::tappable::Tappable;
use crate::client::ChannelHandle;
use crate::tui::theme::HeaderTheme;

/// Initials shown in the avatar box: first letters of the first two words,
/// uppercased. Unnamed channels get a placeholder glyph.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// Props for the ChannelAvatar component
#[derive(Default, Props)]
pub struct ChannelAvatarProps {
    /// Channel whose name the initials derive from
    pub channel: Option<ChannelHandle>,
    /// Handler invoked when the avatar is tapped
    pub on_tap: Option<Handler<()>>,
    /// Header styling section
    pub theme: HeaderTheme,
}

/// Bordered initials box acting as the channel's avatar
#[component]
pub fn ChannelAvatar(props: &ChannelAvatarProps) -> impl Into<AnyElement<'static>> {
    let label = props
        .channel
        .as_ref()
        .and_then(|handle| handle.read().name.clone())
        .map(|name| initials(&name))
        .unwrap_or_else(|| "?".to_string());

    element! {
        Tappable(on_tap: props.on_tap.clone()) {
            View(
                width: props.theme.avatar_width,
                height: TOOLBAR_HEIGHT,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                border_style: BorderStyle::Round,
                border_color: props.theme.avatar_border,
            ) {
                Text(
                    content: label,
                    color: props.theme.avatar_initials_color,
                    weight: Weight::Bold,
                )
            }
        }
    }
}
