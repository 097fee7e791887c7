//! Channel header contract tests.
//!
//! Exercises the render-selection logic the header is built from: the
//! status-to-banner mapping, leading-slot selection, subtitle resolution,
//! and the fixed-height contract, across locales and against a live
//! status feed.

mod common;

use common::mock_data::mock_channel;

use confab::client::{ConnectionMonitor, ConnectionStatus, User};
use confab::i18n::{Locale, Translations};
use confab::tui::components::{
    BannerState, CHANNEL_HEADER_HEIGHT, LeadingSlot, badge_label, display_title, initials,
    leading_slot, subtitle_text, truncate,
};

// ============================================================================
// Banner mapping
// ============================================================================

#[test]
fn test_banner_mapping_matrix() {
    let strings = Translations::default();
    let matrix: Vec<(String, String, bool)> = [
        ConnectionStatus::Connected,
        ConnectionStatus::Connecting,
        ConnectionStatus::Disconnected,
    ]
    .into_iter()
    .map(|status| {
        let banner = BannerState::resolve(status, true, &strings);
        (status.to_string(), banner.label, banner.visible)
    })
    .collect();

    assert_eq!(
        matrix,
        vec![
            ("connected".to_string(), "Connected".to_string(), false),
            ("connecting".to_string(), "Reconnecting...".to_string(), true),
            ("disconnected".to_string(), "Disconnected".to_string(), true),
        ]
    );
}

#[test]
fn test_banner_flag_overrides_every_status() {
    let strings = Translations::default();
    for status in [
        ConnectionStatus::Connected,
        ConnectionStatus::Connecting,
        ConnectionStatus::Disconnected,
    ] {
        assert!(!BannerState::resolve(status, false, &strings).visible);
    }
}

#[test]
fn test_banner_snapshot_connecting() {
    let banner = BannerState::resolve(
        ConnectionStatus::Connecting,
        true,
        &Translations::default(),
    );
    insta::assert_debug_snapshot!(banner, @r###"
BannerState {
    label: "Reconnecting...",
    visible: true,
}
"###);
}

#[test]
fn test_banner_snapshot_connected_suppressed() {
    let banner = BannerState::resolve(
        ConnectionStatus::Connected,
        true,
        &Translations::default(),
    );
    insta::assert_debug_snapshot!(banner, @r###"
BannerState {
    label: "Connected",
    visible: false,
}
"###);
}

#[test]
fn test_banner_follows_live_feed() {
    let monitor = ConnectionMonitor::default();
    let feed = monitor.subscribe();
    let strings = Translations::for_locale(Locale::Es);

    monitor.set(ConnectionStatus::Disconnected);
    let banner = BannerState::resolve(feed.current(), true, &strings);
    assert_eq!(banner.label, "Desconectado");
    assert!(banner.visible);

    monitor.set(ConnectionStatus::Connected);
    let banner = BannerState::resolve(feed.current(), true, &strings);
    assert_eq!(banner.label, "Conectado");
    assert!(!banner.visible);
}

// ============================================================================
// Leading slot
// ============================================================================

#[test]
fn test_leading_override_bypasses_back_button() {
    assert_eq!(leading_slot(true, true), LeadingSlot::Override);
    assert_eq!(leading_slot(true, false), LeadingSlot::Override);
}

#[test]
fn test_leading_defaults() {
    assert_eq!(leading_slot(false, true), LeadingSlot::BackButton);
    assert_eq!(leading_slot(false, false), LeadingSlot::Placeholder);
}

#[test]
fn test_unread_badge_feeds_back_button() {
    assert_eq!(badge_label(0), None);
    assert_eq!(badge_label(12).as_deref(), Some("12"));
    assert_eq!(badge_label(250).as_deref(), Some("99+"));
}

// ============================================================================
// Title block
// ============================================================================

#[test]
fn test_title_fallback_is_localized() {
    let fr = Translations::for_locale(Locale::Fr);
    assert_eq!(display_title(None, &fr), "Nouvelle conversation");
    assert_eq!(display_title(Some("rustaceans"), &fr), "rustaceans");
}

#[test]
fn test_title_truncates_to_available_width() {
    assert_eq!(truncate("a-very-long-channel-name", 12), "a-very-long…");
}

#[test]
fn test_subtitle_prefers_typing_then_counts() {
    let channel = mock_channel("general", 5, 3);
    let now = jiff::Timestamp::now();
    let strings = Translations::default();

    let quiet = subtitle_text(&channel.read(), &strings, true, now);
    assert_eq!(quiet, "5 members, 3 online");

    channel.update(|state| state.set_typing(User::new("u1", "Ana"), now));
    let typing = subtitle_text(&channel.read(), &strings, true, now);
    assert_eq!(typing, "Ana is typing...");

    let indicator_off = subtitle_text(&channel.read(), &strings, false, now);
    assert_eq!(indicator_off, "5 members, 3 online");
}

#[test]
fn test_subtitle_localized_typing() {
    let channel = mock_channel("general", 5, 3);
    let now = jiff::Timestamp::now();
    channel.update(|state| {
        state.set_typing(User::new("u1", "Ana"), now);
        state.set_typing(User::new("u2", "Bo"), now);
        state.set_typing(User::new("u3", "Cy"), now);
    });
    let es = Translations::for_locale(Locale::Es);
    assert_eq!(
        subtitle_text(&channel.read(), &es, true, now),
        "Ana y 2 más están escribiendo..."
    );
}

// ============================================================================
// Avatar & fixed height
// ============================================================================

#[test]
fn test_avatar_initials_from_channel_name() {
    assert_eq!(initials("rust lovers"), "RL");
    assert_eq!(initials("general"), "G");
}

#[test]
fn test_header_height_is_fixed() {
    // Part of the public contract: hosts reserve this many rows, no matter
    // which overrides, flags, or connection status are in play.
    assert_eq!(CHANNEL_HEADER_HEIGHT, 4);
}
