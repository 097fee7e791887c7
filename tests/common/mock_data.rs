//! Shared mock data builders for integration tests.

use confab::client::{ChannelHandle, ChannelState, ChatClient, User};

/// A channel handle with a name and member/online counts
pub fn mock_channel(name: &str, members: usize, online: usize) -> ChannelHandle {
    let mut state = ChannelState::new(name);
    state.name = Some(name.to_string());
    state.member_count = members;
    state.online_count = online;
    ChannelHandle::new(state)
}

/// A client with a deterministic local user
pub fn mock_client(name: &str) -> ChatClient {
    ChatClient::new(User::new("test-user", name))
}
