//! Chat messages and channels.

/// A chat message, either a channel broadcast or a private message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Sender's display name.
    pub sender: String,
    /// Message body.
    pub content: String,
    /// Destination: a channel name (`"#osu"`) or a username.
    pub target: String,
    /// Sender's user id. Only carried from b20121224 onward; 0 before.
    pub sender_id: i32,
}

impl ChatMessage {
    /// True if `target` names a user rather than a channel.
    #[must_use]
    pub fn is_direct_message(&self) -> bool {
        !self.target.starts_with('#')
    }
}

/// A joinable chat channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    /// Channel name, including the leading `#`.
    pub name: String,
    /// Topic line. Empty on builds that don't carry one.
    pub topic: String,
    /// Channel owner, if the build tracks one.
    pub owner: String,
    /// Number of users currently joined.
    pub user_count: i32,
}
