//! Connection status banner strip.
//!
//! A one-row strip above the channel header toolbar. Non-steady connection
//! states show a localized label; the steady state keeps the strip blank so
//! the header's overall height never changes.

use iocraft::prelude::*;

use crate::client::ConnectionStatus;
use crate::i18n::Translations;
use crate::tui::theme::HeaderTheme;

/// Height of the banner strip in rows
pub const BANNER_HEIGHT: u16 = 1;

/// Resolved banner content for one render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannerState {
    /// Label computed for the current status; always present, even while
    /// the banner is hidden
    pub label: String,
    /// Whether the strip shows the label this render
    pub visible: bool,
}

impl BannerState {
    /// Resolve the banner for a status.
    ///
    /// A label is computed for every status, including the steady state
    /// whose label is immediately suppressed. Visibility is the enabled
    /// flag AND the status-implied visibility.
    pub fn resolve(status: ConnectionStatus, enabled: bool, strings: &Translations) -> Self {
        Self {
            label: status.label(strings).to_string(),
            visible: enabled && status.shows_banner(),
        }
    }
}

/// Props for the ConnectionBanner component
#[derive(Default, Props)]
pub struct ConnectionBannerProps {
    /// Resolved banner content
    pub state: BannerState,
    /// Header styling section
    pub theme: HeaderTheme,
}

/// The banner strip itself
///
/// Always occupies [`BANNER_HEIGHT`] rows; an invisible banner renders as a
/// blank strip in the toolbar background color.
#[component]
pub fn ConnectionBanner(props: &ConnectionBannerProps) -> impl Into<AnyElement<'static>> {
    let background = if props.state.visible {
        props.theme.banner_background
    } else {
        props.theme.background
    };

    element! {
        View(
            width: 100pct,
            height: BANNER_HEIGHT,
            flex_shrink: 0.0,
            justify_content: JustifyContent::Center,
            background_color: background,
        ) {
            #(if props.state.visible {
                Some(element! {
                    Text(
                        content: props.state.label.clone(),
                        color: props.theme.banner_foreground,
                    )
                })
            } else {
                None
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_mapping_connected() {
        let state = BannerState::resolve(ConnectionStatus::Connected, true, &Translations::default());
        assert_eq!(state.label, "Connected");
        assert!(!state.visible, "steady-state banner is suppressed");
    }

    #[test]
    fn test_banner_mapping_connecting() {
        let state =
            BannerState::resolve(ConnectionStatus::Connecting, true, &Translations::default());
        assert_eq!(state.label, "Reconnecting...");
        assert!(state.visible);
    }

    #[test]
    fn test_banner_mapping_disconnected() {
        let state =
            BannerState::resolve(ConnectionStatus::Disconnected, true, &Translations::default());
        assert_eq!(state.label, "Disconnected");
        assert!(state.visible);
    }

    #[test]
    fn test_banner_disabled_never_visible() {
        for status in [
            ConnectionStatus::Connected,
            ConnectionStatus::Connecting,
            ConnectionStatus::Disconnected,
        ] {
            let state = BannerState::resolve(status, false, &Translations::default());
            assert!(!state.visible, "disabled banner must stay hidden for {status}");
            assert!(!state.label.is_empty(), "label is still computed for {status}");
        }
    }
}
