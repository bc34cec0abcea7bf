//! Value snapshots of Revolt websocket events.
//!
//! Shapes follow the Revolt events protocol, tagged by the protocol's
//! `type` field and narrowed to what this adapter reads. The channel id
//! deliberately lives at a different path per subtype (top-level on
//! `Message`, under `data` on `MessageUpdate`, `channel_id` on the
//! reaction events, `id` on typing/channel events); extraction happens
//! per subtype in the normalizer, never through a shared accessor.

use serde::{Deserialize, Serialize};

const AUTUMN_BASE: &str = "https://autumn.revolt.chat";
const API_BASE: &str = "https://api.revolt.chat";

/// File attachment reference on the Autumn CDN.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevoltFile {
    #[serde(rename = "_id")]
    pub id: String,
}

impl RevoltFile {
    #[must_use]
    pub fn url(&self, max_side: u16) -> String {
        format!("{AUTUMN_BASE}/avatars/{}?max_side={max_side}", self.id)
    }
}

/// Marker present on user records that belong to bot accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevoltBotInfo {
    #[serde(default)]
    pub owner: String,
}

/// Full user record, as returned by the user lookup endpoint. The event
/// stream itself only ever carries user *ids*.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevoltUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub avatar: Option<RevoltFile>,
    /// Present iff the account is a bot.
    #[serde(default)]
    pub bot: Option<RevoltBotInfo>,
}

impl RevoltUser {
    /// Avatar URL at the given size, falling back to the API's
    /// default-avatar endpoint when none is set.
    #[must_use]
    pub fn avatar_url(&self, max_side: u16) -> String {
        match &self.avatar {
            Some(file) => file.url(max_side),
            None => format!("{API_BASE}/users/{}/default_avatar", self.id),
        }
    }
}

/// A message event; `author` is an id that must be resolved separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevoltMessage {
    #[serde(rename = "_id")]
    pub id: String,
    pub channel: String,
    pub author: String,
    #[serde(default)]
    pub content: String,
}

/// Partial message carried by `MessageUpdate`. Missing fields arrive as
/// empty strings on the wire model; the channel id lives here, not on
/// the envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevoltMessagePatch {
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevoltMessageUpdate {
    pub id: String,
    pub data: RevoltMessagePatch,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevoltMessageDelete {
    pub id: String,
    pub channel: String,
}

/// React/unreact event; the channel id is a `channel_id` field here,
/// unlike the message events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevoltReaction {
    pub id: String,
    pub channel_id: String,
    pub user_id: String,
    #[serde(default)]
    pub emoji_id: String,
}

/// Typing indicator; `id` is the channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevoltTyping {
    pub id: String,
    pub user: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevoltChannel {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub channel_type: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub server: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevoltChannelUpdate {
    pub id: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevoltChannelDelete {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevoltUserUpdate {
    pub id: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Server member join/leave; `id` is the server, `user` the member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevoltMember {
    pub id: String,
    pub user: String,
}

/// Every websocket event this adapter subscribes to, tagged with the
/// protocol's own event names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RevoltEvent {
    Message(RevoltMessage),
    MessageUpdate(RevoltMessageUpdate),
    MessageDelete(RevoltMessageDelete),
    MessageReact(RevoltReaction),
    MessageUnreact(RevoltReaction),
    ChannelStartTyping(RevoltTyping),
    ChannelCreate(RevoltChannel),
    ChannelUpdate(RevoltChannelUpdate),
    ChannelDelete(RevoltChannelDelete),
    UserUpdate(RevoltUserUpdate),
    ServerMemberJoin(RevoltMember),
    ServerMemberLeave(RevoltMember),
}

impl RevoltEvent {
    /// Protocol wire name for the event.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Message(_) => "Message",
            Self::MessageUpdate(_) => "MessageUpdate",
            Self::MessageDelete(_) => "MessageDelete",
            Self::MessageReact(_) => "MessageReact",
            Self::MessageUnreact(_) => "MessageUnreact",
            Self::ChannelStartTyping(_) => "ChannelStartTyping",
            Self::ChannelCreate(_) => "ChannelCreate",
            Self::ChannelUpdate(_) => "ChannelUpdate",
            Self::ChannelDelete(_) => "ChannelDelete",
            Self::UserUpdate(_) => "UserUpdate",
            Self::ServerMemberJoin(_) => "ServerMemberJoin",
            Self::ServerMemberLeave(_) => "ServerMemberLeave",
        }
    }
}
