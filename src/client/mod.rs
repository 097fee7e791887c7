//! Lightweight chat-client core.
//!
//! This is the set of collaborators the widgets consume: a connection-status
//! sequence, per-channel live state, and a registry tying them together.
//! There is no transport here; the demo command drives the core with a
//! [`simulator`] so the widgets react the way they would against a real
//! backend.

pub mod channel;
pub mod connection;
pub mod simulator;

pub use channel::{ChannelHandle, ChannelState, TYPING_TIMEOUT, User};
pub use connection::{ConnectionMonitor, ConnectionStatus, StatusFeed};
pub use simulator::Simulator;

use dashmap::DashMap;

use crate::error::{ConfabError, Result};

/// Client-side chat session: local user, connection monitor, channel registry
#[derive(Debug, Default)]
pub struct ChatClient {
    user: User,
    monitor: ConnectionMonitor,
    channels: DashMap<String, ChannelHandle>,
}

impl ChatClient {
    pub fn new(user: User) -> Self {
        Self {
            user,
            monitor: ConnectionMonitor::default(),
            channels: DashMap::new(),
        }
    }

    /// The local user this client authenticates as
    pub fn user(&self) -> &User {
        &self.user
    }

    /// The connection-status publisher for this session
    pub fn connection(&self) -> &ConnectionMonitor {
        &self.monitor
    }

    /// Look up a channel by id
    pub fn channel(&self, id: &str) -> Option<ChannelHandle> {
        self.channels.get(id).map(|entry| entry.value().clone())
    }

    /// Get or create a channel, counting the local user as a member
    pub fn join(&self, id: &str) -> ChannelHandle {
        self.channels
            .entry(id.to_string())
            .or_insert_with(|| {
                tracing::info!(channel = id, "joining channel");
                let mut state = ChannelState::new(id);
                state.name = Some(id.to_string());
                state.member_count = 1;
                ChannelHandle::new(state)
            })
            .value()
            .clone()
    }

    /// Reset the unread counter on a channel
    pub fn mark_read(&self, id: &str) -> Result<()> {
        let handle = self
            .channel(id)
            .ok_or_else(|| ConfabError::ChannelNotFound(id.to_string()))?;
        handle.update(|state| state.unread_count = 0);
        Ok(())
    }
}
