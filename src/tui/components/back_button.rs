//! Back button with an unread-count badge.
//!
//! The leading control of the channel header: a tappable `←` glyph with an
//! optional badge surfacing how many messages are waiting in the channels
//! the user would navigate back to.

use iocraft::prelude::*;

use super::channel_header::TOOLBAR_HEIGHT;
use super::tappable::Tappable;
use crate::tui::theme::HeaderTheme;

/// Column width reserved for the back control
pub const BACK_BUTTON_WIDTH: u16 = 6;

/// Badge text for an unread count; `None` hides the badge
pub fn badge_label(count: usize) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some("99+".to_string()),
    }
}

/// Props for the BackButton component
#[derive(Default, Props)]
pub struct BackButtonProps {
    /// Handler invoked when the control is tapped
    pub on_pressed: Option<Handler<()>>,
    /// Unread messages surfaced on the badge
    pub unread_count: usize,
    /// Whether the badge is rendered at all
    pub show_unread_badge: bool,
    /// Header styling section
    pub theme: HeaderTheme,
}

/// Tappable back control with optional unread badge
#[component]
pub fn BackButton(props: &BackButtonProps) -> impl Into<AnyElement<'static>> {
    let badge = if props.show_unread_badge {
        badge_label(props.unread_count)
    } else {
        None
    };
    let badge_color = props.theme.unread_badge_color;

    element! {
        Tappable(on_tap: props.on_pressed.clone()) {
            View(
                width: BACK_BUTTON_WIDTH,
                height: TOOLBAR_HEIGHT,
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                gap: 1,
            ) {
                Text(
                    content: "←",
                    color: props.theme.back_button_color,
                    weight: Weight::Bold,
                )
                #(badge.map(|label| element! {
                    Text(
                        content: label,
                        color: badge_color,
                        weight: Weight::Bold,
                    )
                }))
            }
        }
    }
}
