//! Demo traffic generator.
//!
//! Drives a [`ChatClient`] with plausible activity so the widgets have
//! something live to react to: members typing, messages arriving, presence
//! drifting, and the occasional dropped session that reconnects on its own.

use std::sync::Arc;
use std::time::Duration;

use jiff::Timestamp;
use rand::Rng;

use super::channel::{ChannelHandle, User};
use super::connection::ConnectionStatus;
use super::ChatClient;

/// Fictional channel members used for generated activity
fn cast() -> Vec<User> {
    vec![
        User::new("sim-ana", "Ana"),
        User::new("sim-bo", "Bo"),
        User::new("sim-chidi", "Chidi"),
        User::new("sim-dana", "Dana"),
    ]
}

/// Background activity generator for one channel
pub struct Simulator {
    client: Arc<ChatClient>,
    channel: ChannelHandle,
    members: Vec<User>,
}

impl Simulator {
    pub fn new(client: Arc<ChatClient>, channel: ChannelHandle) -> Self {
        let members = cast();
        channel.update(|state| {
            // Local user plus the simulated cast
            state.member_count = members.len() + 1;
            state.online_count = members.len();
        });
        Self {
            client,
            channel,
            members,
        }
    }

    /// Run until the surrounding task is dropped
    pub async fn run(self) {
        // Bring the simulated session up shortly after launch
        tokio::time::sleep(Duration::from_millis(600)).await;
        self.client.connection().set(ConnectionStatus::Connected);

        loop {
            let pause = {
                let mut rng = rand::rng();
                Duration::from_millis(rng.random_range(900..2_600))
            };
            tokio::time::sleep(pause).await;
            self.tick();
        }
    }

    /// One unit of generated activity
    fn tick(&self) {
        let roll: f64 = rand::rng().random();
        if roll < 0.40 {
            self.someone_types();
        } else if roll < 0.70 {
            self.message_arrives();
        } else if roll < 0.90 {
            self.presence_drifts();
        } else {
            self.session_flaps();
        }
    }

    fn someone_types(&self) {
        let mut rng = rand::rng();
        let user = self.members[rng.random_range(0..self.members.len())].clone();
        if rng.random_bool(0.3) {
            self.channel.update(|state| state.clear_typing(&user.id));
        } else {
            let now = Timestamp::now();
            self.channel.update(|state| state.set_typing(user, now));
        }
    }

    fn message_arrives(&self) {
        let mut rng = rand::rng();
        let author = self.members[rng.random_range(0..self.members.len())].clone();
        let now = Timestamp::now();
        self.channel.update(|state| {
            state.clear_typing(&author.id);
            state.unread_count += 1;
            state.last_message_at = Some(now);
        });
    }

    fn presence_drifts(&self) {
        let mut rng = rand::rng();
        let online = rng.random_range(1..=self.members.len());
        self.channel.update(|state| state.online_count = online);
    }

    /// Drop the session, then recover through the connecting state
    fn session_flaps(&self) {
        let client = Arc::clone(&self.client);
        tokio::spawn(async move {
            client.connection().set(ConnectionStatus::Disconnected);
            tokio::time::sleep(Duration::from_millis(1_500)).await;
            client.connection().set(ConnectionStatus::Connecting);
            tokio::time::sleep(Duration::from_millis(1_200)).await;
            client.connection().set(ConnectionStatus::Connected);
        });
    }
}
