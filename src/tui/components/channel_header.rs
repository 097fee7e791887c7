//! Channel header bar.
//!
//! The top bar of a conversation screen: a connection banner strip over a
//! toolbar row with a leading control, a tappable title block, and trailing
//! actions. Everything the header consumes arrives explicitly through
//! props: the channel handle, the resolved theme section, the localized
//! strings, and a [`StatusFeed`] subscription it holds only while mounted.
//!
//! Layout:
//! ```text
//! +------------------------------------------+
//! |            Reconnecting...               |  <- banner strip (1 row)
//! +------------------------------------------+
//! | <- 3 |  channel-name            | (CN)   |  <- toolbar (3 rows)
//! |      |  4 members, 2 online     |        |
//! +------------------------------------------+
//! ```

use iocraft::prelude::*;

use super::back_button::BackButton;
use super::channel_avatar::ChannelAvatar;
use super::channel_info::ChannelInfo;
use super::channel_name::ChannelName;
use super::connection_banner::{BANNER_HEIGHT, BannerState, ConnectionBanner};
use super::tappable::Tappable;
use crate::client::{ChannelHandle, StatusFeed};
use crate::i18n::Translations;
use crate::tui::theme::HeaderTheme;

/// Toolbar rows below the banner strip
pub(crate) const TOOLBAR_HEIGHT: u16 = 3;

/// Trailing padding after the default avatar action, in columns
const TRAILING_PADDING: u16 = 1;

/// Fixed height of the header in rows.
///
/// Hosts reserve this much vertical space; the value never varies with
/// configuration, overrides, or connection status.
pub const CHANNEL_HEADER_HEIGHT: u16 = BANNER_HEIGHT + TOOLBAR_HEIGHT;

/// Which control occupies the header's leading slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadingSlot {
    /// Caller-supplied fragment, used verbatim
    Override,
    /// Back button with unread badge
    BackButton,
    /// Zero-size placeholder
    Placeholder,
}

/// Select the leading control; first match wins
pub fn leading_slot(has_override: bool, show_back_button: bool) -> LeadingSlot {
    if has_override {
        LeadingSlot::Override
    } else if show_back_button {
        LeadingSlot::BackButton
    } else {
        LeadingSlot::Placeholder
    }
}

/// Props for the ChannelHeader component
#[derive(Default, Props)]
pub struct ChannelHeaderProps<'a> {
    /// Handle to the active channel. Required: a header without a channel
    /// is a setup error in the hosting screen, not a recoverable state.
    pub channel: Option<ChannelHandle>,
    /// Live connection-status subscription; the header tracks it while
    /// mounted and drops it on unmount
    pub status: Option<StatusFeed>,
    /// Resolved style values
    pub theme: HeaderTheme,
    /// Localized strings
    pub strings: Translations,

    /// Render the back button in the leading slot
    pub show_back_button: bool,
    /// Let typing activity take over the subtitle
    pub show_typing_indicator: bool,
    /// Master switch for the connection banner strip
    pub show_connection_banner: bool,

    /// Invoked when the back button is pressed
    pub on_back_pressed: Option<Handler<()>>,
    /// Invoked when the title block is tapped; absent means the region is inert
    pub on_title_tap: Option<Handler<()>>,
    /// Invoked when the avatar is tapped
    pub on_image_tap: Option<Handler<()>>,

    /// Replaces the leading control entirely
    pub leading: Option<AnyElement<'a>>,
    /// Replaces the default channel-name title
    pub title: Option<AnyElement<'a>>,
    /// Replaces the default channel-info subtitle
    pub subtitle: Option<AnyElement<'a>>,
    /// Replaces the default trailing actions
    pub actions: Option<Vec<AnyElement<'a>>>,

    /// Overrides the themed toolbar background
    pub background_color: Option<Color>,
}

/// Channel header bar: banner strip + leading control + title block + actions
#[component]
pub fn ChannelHeader<'a>(
    props: &mut ChannelHeaderProps<'a>,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'a>> {
    let channel = props
        .channel
        .clone()
        .expect("ChannelHeader mounted without a channel handle");

    // Track the status sequence for exactly the mounted lifetime: the
    // subscription future is dropped with the component.
    let initial_status = props
        .status
        .as_ref()
        .map(|feed| feed.current())
        .unwrap_or_default();
    let status_state = hooks.use_state(|| initial_status);
    hooks.use_future({
        let feed = props.status.clone();
        let mut status_state = status_state;
        async move {
            let Some(mut feed) = feed else { return };
            while let Some(status) = feed.changed().await {
                status_state.set(status);
            }
        }
    });
    let status = status_state.get();

    let banner = BannerState::resolve(status, props.show_connection_banner, &props.strings);
    let background = props.background_color.unwrap_or(props.theme.background);
    let unread_count = channel.read().unread_count;

    // Leading control
    let slot = leading_slot(props.leading.is_some(), props.show_back_button);
    let leading: AnyElement<'a> = match slot {
        LeadingSlot::Override => props
            .leading
            .take()
            .unwrap_or_else(|| element!(View).into_any()),
        LeadingSlot::BackButton => element! {
            BackButton(
                on_pressed: props.on_back_pressed.clone(),
                unread_count: unread_count,
                show_unread_badge: true,
                theme: props.theme.clone(),
            )
        }
        .into_any(),
        LeadingSlot::Placeholder => element! {
            View(width: 0, height: 0)
        }
        .into_any(),
    };

    // Title block: override-or-default title stacked over override-or-default
    // subtitle, centered in the toolbar rows
    let title: AnyElement<'a> = props.title.take().unwrap_or_else(|| {
        element! {
            ChannelName(
                channel: Some(channel.clone()),
                strings: props.strings,
                theme: props.theme.clone(),
            )
        }
        .into_any()
    });
    let subtitle: AnyElement<'a> = props.subtitle.take().unwrap_or_else(|| {
        element! {
            ChannelInfo(
                channel: Some(channel.clone()),
                strings: props.strings,
                theme: props.theme.clone(),
                show_typing_indicator: props.show_typing_indicator,
            )
        }
        .into_any()
    });

    // Trailing actions: override, or the single default avatar action
    let actions: Vec<AnyElement<'a>> = props.actions.take().unwrap_or_else(|| {
        vec![
            element! {
                View(padding_right: TRAILING_PADDING) {
                    ChannelAvatar(
                        channel: Some(channel.clone()),
                        on_tap: props.on_image_tap.clone(),
                        theme: props.theme.clone(),
                    )
                }
            }
            .into_any(),
        ]
    });

    element! {
        View(
            width: 100pct,
            height: CHANNEL_HEADER_HEIGHT,
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
            background_color: background,
        ) {
            ConnectionBanner(state: banner, theme: props.theme.clone())
            View(
                width: 100pct,
                height: TOOLBAR_HEIGHT,
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
            ) {
                #(Some(leading))
                Tappable(on_tap: props.on_title_tap.clone()) {
                    View(
                        height: TOOLBAR_HEIGHT,
                        padding_left: 1,
                        padding_right: 1,
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                    ) {
                        #(Some(title))
                        #(Some(subtitle))
                    }
                }
                View(
                    height: TOOLBAR_HEIGHT,
                    flex_direction: FlexDirection::Row,
                    align_items: AlignItems::Center,
                ) {
                    #(actions)
                }
            }
        }
    }
}
