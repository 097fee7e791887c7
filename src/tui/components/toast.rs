//! Toast notifications.
//!
//! Transient feedback bar shown above the footer, used by the chat screen
//! to acknowledge header interactions (title taps, avatar taps, mark-read).

use std::time::{Duration, Instant};

use iocraft::prelude::*;

/// How long a toast stays on screen
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// A toast notification message
#[derive(Debug, Clone)]
pub struct Toast {
    /// The message to display
    pub message: String,
    /// The severity level of the toast
    pub level: ToastLevel,
    /// When the toast was created
    pub created_at: Instant,
}

/// Severity level for toast notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl Toast {
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self {
            message,
            level,
            created_at: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }

    /// Whether the toast has outlived [`TOAST_TTL`]
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= TOAST_TTL
    }

    /// Get the color associated with this toast's level
    pub fn color(&self) -> Color {
        match self.level {
            ToastLevel::Info => Color::Cyan,
            ToastLevel::Success => Color::Green,
            ToastLevel::Error => Color::Red,
        }
    }
}

/// Props for the ToastNotification component
#[derive(Default, Props)]
pub struct ToastNotificationProps {
    /// The toast to display
    pub toast: Option<Toast>,
}

/// A toast notification bar
#[component]
pub fn ToastNotification(props: &ToastNotificationProps) -> impl Into<AnyElement<'static>> {
    element! {
        View() {
            #(props.toast.as_ref().map(|t| {
                element! {
                    View(
                        width: 100pct,
                        height: 3,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        background_color: Color::Black,
                        border_edges: Edges::Top,
                        border_style: BorderStyle::Single,
                        border_color: t.color(),
                    ) {
                        Text(content: t.message.clone(), color: t.color())
                    }
                }
            }))
        }
    }
}
