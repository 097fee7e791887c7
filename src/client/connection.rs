//! Connection status tracking.
//!
//! The client's session state relative to the chat backend is a closed set
//! of statuses published through a watch channel. Widgets subscribe with
//! [`ConnectionMonitor::subscribe`] and hold the returned [`StatusFeed`] for
//! exactly as long as they are mounted; dropping the feed unsubscribes.

use std::fmt;

use futures::Stream;
use tokio::sync::watch;

use crate::i18n::Translations;

/// The client's network/session state relative to the chat backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    /// Session established and healthy
    Connected,
    /// Session being established or reestablished
    #[default]
    Connecting,
    /// Session lost
    Disconnected,
}

impl ConnectionStatus {
    /// Whether this status implies a visible banner.
    ///
    /// The steady state hides the banner even though a label exists for it;
    /// transient success strips auto-hide.
    pub fn shows_banner(&self) -> bool {
        !matches!(self, ConnectionStatus::Connected)
    }

    /// Localized banner label for this status
    pub fn label(&self, strings: &Translations) -> &'static str {
        match self {
            ConnectionStatus::Connected => strings.connected,
            ConnectionStatus::Connecting => strings.reconnecting,
            ConnectionStatus::Disconnected => strings.disconnected,
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Connecting => "connecting",
            ConnectionStatus::Disconnected => "disconnected",
        };
        write!(f, "{}", s)
    }
}

/// Publisher side of the connection-status sequence
///
/// Owned by the client; everything else sees the sequence through
/// [`StatusFeed`] subscriptions.
#[derive(Debug)]
pub struct ConnectionMonitor {
    tx: watch::Sender<ConnectionStatus>,
}

impl ConnectionMonitor {
    /// Create a monitor with the given initial status
    pub fn new(initial: ConnectionStatus) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// The most recently published status
    pub fn current(&self) -> ConnectionStatus {
        *self.tx.borrow()
    }

    /// Publish a status transition. No-op transitions are suppressed so
    /// subscribers only wake on actual changes.
    pub fn set(&self, status: ConnectionStatus) {
        self.tx.send_if_modified(|current| {
            if *current == status {
                return false;
            }
            tracing::debug!(from = %current, to = %status, "connection status changed");
            *current = status;
            true
        });
    }

    /// Subscribe to the status sequence
    pub fn subscribe(&self) -> StatusFeed {
        StatusFeed {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for ConnectionMonitor {
    fn default() -> Self {
        Self::new(ConnectionStatus::default())
    }
}

/// Subscription handle to the connection-status sequence
///
/// Cheap to clone; each clone tracks its own read position. Dropping the
/// feed releases the subscription.
#[derive(Debug, Clone)]
pub struct StatusFeed {
    rx: watch::Receiver<ConnectionStatus>,
}

impl StatusFeed {
    /// The latest published status, without waiting
    pub fn current(&self) -> ConnectionStatus {
        *self.rx.borrow()
    }

    /// Wait for the next transition and return the new status.
    ///
    /// Returns `None` once the owning [`ConnectionMonitor`] is gone.
    pub async fn changed(&mut self) -> Option<ConnectionStatus> {
        match self.rx.changed().await {
            Ok(()) => Some(*self.rx.borrow_and_update()),
            Err(_) => None,
        }
    }

    /// Adapt the feed into a `futures` stream of transitions
    pub fn into_stream(self) -> impl Stream<Item = ConnectionStatus> {
        futures::stream::unfold(self, |mut feed| async move {
            feed.changed().await.map(|status| (status, feed))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use std::time::Duration;

    #[test]
    fn test_default_status_is_connecting() {
        assert_eq!(ConnectionStatus::default(), ConnectionStatus::Connecting);
    }

    #[test]
    fn test_banner_visibility_per_status() {
        assert!(!ConnectionStatus::Connected.shows_banner());
        assert!(ConnectionStatus::Connecting.shows_banner());
        assert!(ConnectionStatus::Disconnected.shows_banner());
    }

    #[test]
    fn test_label_always_resolves() {
        let strings = Translations::default();
        assert_eq!(ConnectionStatus::Connected.label(&strings), "Connected");
        assert_eq!(
            ConnectionStatus::Connecting.label(&strings),
            "Reconnecting..."
        );
        assert_eq!(
            ConnectionStatus::Disconnected.label(&strings),
            "Disconnected"
        );
    }

    #[tokio::test]
    async fn test_subscribe_sees_current_without_waiting() {
        let monitor = ConnectionMonitor::new(ConnectionStatus::Disconnected);
        let feed = monitor.subscribe();
        assert_eq!(feed.current(), ConnectionStatus::Disconnected);
    }

    #[tokio::test]
    async fn test_transition_wakes_subscriber() {
        let monitor = ConnectionMonitor::default();
        let mut feed = monitor.subscribe();
        monitor.set(ConnectionStatus::Connected);
        assert_eq!(feed.changed().await, Some(ConnectionStatus::Connected));
    }

    #[tokio::test]
    async fn test_noop_transition_is_suppressed() {
        let monitor = ConnectionMonitor::new(ConnectionStatus::Connected);
        let mut feed = monitor.subscribe();
        monitor.set(ConnectionStatus::Connected);
        let woke = tokio::time::timeout(Duration::from_millis(20), feed.changed()).await;
        assert!(woke.is_err(), "no-op set must not wake subscribers");
    }

    #[tokio::test]
    async fn test_feed_ends_when_monitor_dropped() {
        let monitor = ConnectionMonitor::default();
        let mut feed = monitor.subscribe();
        drop(monitor);
        assert_eq!(feed.changed().await, None);
    }

    #[tokio::test]
    async fn test_stream_adapter_yields_transitions() {
        let monitor = ConnectionMonitor::default();
        let mut stream = Box::pin(monitor.subscribe().into_stream());
        monitor.set(ConnectionStatus::Connected);
        assert_eq!(stream.next().await, Some(ConnectionStatus::Connected));
        monitor.set(ConnectionStatus::Disconnected);
        assert_eq!(stream.next().await, Some(ConnectionStatus::Disconnected));
    }
}
