//! Chat widget library.
//!
//! Reusable components for channel screens. The channel header is the main
//! entry point; the rest are the sub-widgets it composes by default, all
//! usable on their own.

pub mod back_button;
pub mod channel_avatar;
pub mod channel_header;
pub mod channel_info;
pub mod channel_name;
pub mod connection_banner;
pub mod footer;
pub mod tappable;
pub mod toast;

pub use back_button::{BACK_BUTTON_WIDTH, BackButton, BackButtonProps, badge_label};
pub use channel_avatar::{ChannelAvatar, ChannelAvatarProps, initials};
pub use channel_header::{
    CHANNEL_HEADER_HEIGHT, ChannelHeader, ChannelHeaderProps, LeadingSlot, leading_slot,
};
pub use channel_info::{ChannelInfo, ChannelInfoProps, subtitle_text};
pub use channel_name::{ChannelName, ChannelNameProps, display_title, truncate};
pub use connection_banner::{BANNER_HEIGHT, BannerState, ConnectionBanner, ConnectionBannerProps};
pub use footer::{Footer, FooterProps, Shortcut, chat_shortcuts};
pub use tappable::{Tappable, TappableProps};
pub use toast::{TOAST_TTL, Toast, ToastLevel, ToastNotification, ToastNotificationProps};
