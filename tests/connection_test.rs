//! Connection monitor integration tests.
//!
//! Covers the subscription lifecycle widgets rely on: late subscribers see
//! the current value, transitions wake feeds exactly once per change, and
//! feeds terminate cleanly when the monitor goes away.

use std::time::Duration;

use futures::StreamExt;

use confab::client::{ChatClient, ConnectionMonitor, ConnectionStatus, User};

#[tokio::test]
async fn test_late_subscriber_sees_latest_status() {
    let monitor = ConnectionMonitor::default();
    monitor.set(ConnectionStatus::Disconnected);

    let feed = monitor.subscribe();
    assert_eq!(feed.current(), ConnectionStatus::Disconnected);
}

#[tokio::test]
async fn test_transition_before_first_poll_is_not_lost() {
    let monitor = ConnectionMonitor::default();
    let mut feed = monitor.subscribe();

    // Published after subscription but before the subscriber polls
    monitor.set(ConnectionStatus::Connected);
    assert_eq!(feed.changed().await, Some(ConnectionStatus::Connected));
}

#[tokio::test]
async fn test_independent_feeds_each_observe_changes() {
    let monitor = ConnectionMonitor::default();
    let mut a = monitor.subscribe();
    let mut b = monitor.subscribe();

    monitor.set(ConnectionStatus::Disconnected);
    assert_eq!(a.changed().await, Some(ConnectionStatus::Disconnected));
    assert_eq!(b.changed().await, Some(ConnectionStatus::Disconnected));
}

#[tokio::test]
async fn test_rapid_transitions_collapse_to_latest() {
    let monitor = ConnectionMonitor::default();
    let mut feed = monitor.subscribe();

    monitor.set(ConnectionStatus::Disconnected);
    monitor.set(ConnectionStatus::Connecting);
    monitor.set(ConnectionStatus::Connected);

    // A slow subscriber observes the newest value, not the backlog
    assert_eq!(feed.changed().await, Some(ConnectionStatus::Connected));
    let next = tokio::time::timeout(Duration::from_millis(20), feed.changed()).await;
    assert!(next.is_err(), "no further wakeups without a new transition");
}

#[tokio::test]
async fn test_stream_adapter_terminates_with_monitor() {
    let monitor = ConnectionMonitor::default();
    let mut stream = Box::pin(monitor.subscribe().into_stream());

    monitor.set(ConnectionStatus::Connected);
    assert_eq!(stream.next().await, Some(ConnectionStatus::Connected));

    drop(monitor);
    assert_eq!(stream.next().await, None);
}

#[tokio::test]
async fn test_client_owns_the_monitor() {
    let client = ChatClient::new(User::new("u1", "Ana"));
    let mut feed = client.connection().subscribe();
    assert_eq!(feed.current(), ConnectionStatus::Connecting);

    client.connection().set(ConnectionStatus::Connected);
    assert_eq!(feed.changed().await, Some(ConnectionStatus::Connected));
}
