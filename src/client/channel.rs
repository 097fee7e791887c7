//! Channel state and the shared handle widgets consume.
//!
//! A [`ChannelHandle`] is a cheaply-clonable reference to one conversation's
//! live state. The client (and the demo simulator) mutate state through
//! [`ChannelHandle::update`]; widgets only ever call [`ChannelHandle::read`].

use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};
use parking_lot::RwLock;
use tokio::sync::watch;
use uuid::Uuid;

/// A chat participant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// A throwaway local identity with a random id
    pub fn guest(name: impl Into<String>) -> Self {
        Self {
            id: format!("guest-{}", Uuid::new_v4()),
            name: name.into(),
        }
    }
}

/// How long a typing signal stays fresh without being refreshed
pub const TYPING_TIMEOUT: SignedDuration = SignedDuration::from_secs(8);

#[derive(Debug, Clone)]
struct TypingEntry {
    user: User,
    refreshed_at: Timestamp,
}

/// Live state of one conversation
#[derive(Debug, Clone, Default)]
pub struct ChannelState {
    /// Stable channel identifier (also the default lookup key)
    pub id: String,
    /// Human-readable channel name, when one has been set
    pub name: Option<String>,
    /// Remote image reference; terminals render initials instead
    pub image: Option<String>,
    pub member_count: usize,
    pub online_count: usize,
    /// Messages in this channel the local user has not read
    pub unread_count: usize,
    pub last_message_at: Option<Timestamp>,
    typing: Vec<TypingEntry>,
}

impl ChannelState {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Record (or refresh) a typing signal for a user
    pub fn set_typing(&mut self, user: User, now: Timestamp) {
        self.prune_typing(now);
        if let Some(entry) = self.typing.iter_mut().find(|e| e.user.id == user.id) {
            entry.refreshed_at = now;
        } else {
            tracing::trace!(channel = %self.id, user = %user.name, "typing started");
            self.typing.push(TypingEntry {
                user,
                refreshed_at: now,
            });
        }
    }

    /// Drop a user's typing signal, if present
    pub fn clear_typing(&mut self, user_id: &str) {
        self.typing.retain(|e| e.user.id != user_id);
    }

    /// Names of users with a fresh typing signal, oldest first
    pub fn typing_user_names(&self, now: Timestamp) -> Vec<String> {
        self.typing
            .iter()
            .filter(|e| now.duration_since(e.refreshed_at) <= TYPING_TIMEOUT)
            .map(|e| e.user.name.clone())
            .collect()
    }

    fn prune_typing(&mut self, now: Timestamp) {
        self.typing
            .retain(|e| now.duration_since(e.refreshed_at) <= TYPING_TIMEOUT);
    }
}

/// Shared handle to a channel's live state
///
/// Widgets treat the handle as read-only; only the owning client writes
/// through it. Every write bumps a version watch so hosts can re-render on
/// channel changes without polling.
#[derive(Debug, Clone)]
pub struct ChannelHandle {
    inner: Arc<RwLock<ChannelState>>,
    version: Arc<watch::Sender<u64>>,
}

impl ChannelHandle {
    pub fn new(state: ChannelState) -> Self {
        let (version, _rx) = watch::channel(0);
        Self {
            inner: Arc::new(RwLock::new(state)),
            version: Arc::new(version),
        }
    }

    /// Read the current state
    pub fn read(&self) -> parking_lot::RwLockReadGuard<'_, ChannelState> {
        self.inner.read()
    }

    /// Apply a mutation to the state (owner side only)
    pub fn update<R>(&self, f: impl FnOnce(&mut ChannelState) -> R) -> R {
        let result = f(&mut self.inner.write());
        self.version.send_modify(|v| *v = v.wrapping_add(1));
        result
    }

    /// Subscribe to change notifications for this channel
    pub fn watch(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }
}
