//! Theme system for TUI colors and styles.
//!
//! The application reads the global [`theme()`]; widgets that advertise an
//! explicit style surface (the channel header and its sub-widgets) receive
//! their [`HeaderTheme`] section by value instead of reaching for the global.

use iocraft::prelude::{Color, Weight};

/// Style values consumed by the channel header and its sub-widgets
#[derive(Debug, Clone)]
pub struct HeaderTheme {
    /// Toolbar background
    pub background: Color,
    pub title_color: Color,
    pub title_weight: Weight,
    pub subtitle_color: Color,
    /// Connection banner strip colors
    pub banner_background: Color,
    pub banner_foreground: Color,
    pub back_button_color: Color,
    pub unread_badge_color: Color,
    /// Avatar box border and initials
    pub avatar_border: Color,
    pub avatar_initials_color: Color,
    /// Avatar box width in columns; the box height follows the toolbar rows
    pub avatar_width: u16,
}

impl Default for HeaderTheme {
    fn default() -> Self {
        Self {
            background: Color::Blue,
            title_color: Color::White,
            title_weight: Weight::Bold,
            subtitle_color: Color::Rgb {
                r: 200,
                g: 200,
                b: 200,
            },
            banner_background: Color::Rgb {
                r: 40,
                g: 40,
                b: 40,
            },
            banner_foreground: Color::Yellow,
            back_button_color: Color::White,
            unread_badge_color: Color::Yellow,
            avatar_border: Color::Cyan,
            avatar_initials_color: Color::White,
            avatar_width: 6,
        }
    }
}

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    /// Channel header styling
    pub header: HeaderTheme,

    // UI colors
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub border: Color,
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header: HeaderTheme::default(),
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
