//! Value snapshots of Discord gateway events.
//!
//! Each struct mirrors the dispatch (`d`) payload of the corresponding
//! gateway frame, narrowed to the fields this adapter reads. Events are
//! immutable snapshots; retaining them past the delivering callback is
//! safe.

use serde::{Deserialize, Serialize};

const CDN_BASE: &str = "https://cdn.discordapp.com";

/// Discord user record as carried inside gateway payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub bot: bool,
    /// Avatar image hash; `None` means the user has no custom avatar.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl DiscordUser {
    /// CDN URL for the user's avatar at the given size, falling back to
    /// the default embed avatar when no hash is set.
    #[must_use]
    pub fn avatar_url(&self, size: u16) -> String {
        match &self.avatar {
            Some(hash) => format!("{CDN_BASE}/avatars/{}/{hash}.png?size={size}", self.id),
            None => format!("{CDN_BASE}/embed/avatars/0.png"),
        }
    }
}

/// Guild member wrapper around a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordMember {
    pub user: DiscordUser,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// A message as delivered by MESSAGE_CREATE / MESSAGE_UPDATE, and as
/// returned by the send/edit session calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordMessage {
    pub id: String,
    pub channel_id: String,
    #[serde(default)]
    pub guild_id: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: DiscordUser,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordMessageDelete {
    pub id: String,
    pub channel_id: String,
    #[serde(default)]
    pub guild_id: Option<String>,
}

/// MESSAGE_REACTION_ADD / MESSAGE_REACTION_REMOVE payload.
///
/// The add variant carries a member snapshot in guilds; the remove
/// variant never does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordReaction {
    pub user_id: String,
    pub channel_id: String,
    pub message_id: String,
    #[serde(default)]
    pub guild_id: Option<String>,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub member: Option<DiscordMember>,
}

/// A slash-command option as provided by the invoking user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordCommandOption {
    pub name: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordCommandData {
    pub name: String,
    #[serde(default)]
    pub options: Vec<DiscordCommandOption>,
}

/// INTERACTION_CREATE payload for an application command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordInteraction {
    pub id: String,
    pub application_id: String,
    pub token: String,
    pub channel_id: String,
    #[serde(default)]
    pub guild_id: Option<String>,
    /// Set for guild invocations.
    #[serde(default)]
    pub member: Option<DiscordMember>,
    /// Set for DM invocations.
    #[serde(default)]
    pub user: Option<DiscordUser>,
    pub data: DiscordCommandData,
}

impl DiscordInteraction {
    /// The invoking user, wherever the gateway put it.
    #[must_use]
    pub fn invoking_user(&self) -> Option<&DiscordUser> {
        self.member
            .as_ref()
            .map(|member| &member.user)
            .or(self.user.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordTyping {
    pub user_id: String,
    pub channel_id: String,
    #[serde(default)]
    pub guild_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordVoiceState {
    pub user_id: String,
    /// `None` when the user disconnected from voice.
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub guild_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordPresence {
    pub user: DiscordUser,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub guild_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordMemberAdd {
    pub user: DiscordUser,
    pub guild_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordMemberRemove {
    pub user: DiscordUser,
    pub guild_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordChannel {
    pub id: String,
    #[serde(default)]
    pub guild_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Every gateway event this adapter subscribes to, tagged with the
/// gateway's own event names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t", content = "d")]
pub enum DiscordEvent {
    #[serde(rename = "MESSAGE_CREATE")]
    MessageCreate(DiscordMessage),
    #[serde(rename = "MESSAGE_UPDATE")]
    MessageUpdate(DiscordMessage),
    #[serde(rename = "MESSAGE_DELETE")]
    MessageDelete(DiscordMessageDelete),
    #[serde(rename = "MESSAGE_REACTION_ADD")]
    ReactionAdd(DiscordReaction),
    #[serde(rename = "MESSAGE_REACTION_REMOVE")]
    ReactionRemove(DiscordReaction),
    #[serde(rename = "INTERACTION_CREATE")]
    InteractionCreate(DiscordInteraction),
    #[serde(rename = "TYPING_START")]
    TypingStart(DiscordTyping),
    #[serde(rename = "VOICE_STATE_UPDATE")]
    VoiceStateUpdate(DiscordVoiceState),
    #[serde(rename = "PRESENCE_UPDATE")]
    PresenceUpdate(DiscordPresence),
    #[serde(rename = "GUILD_MEMBER_ADD")]
    GuildMemberAdd(DiscordMemberAdd),
    #[serde(rename = "GUILD_MEMBER_REMOVE")]
    GuildMemberRemove(DiscordMemberRemove),
    #[serde(rename = "CHANNEL_CREATE")]
    ChannelCreate(DiscordChannel),
    #[serde(rename = "CHANNEL_UPDATE")]
    ChannelUpdate(DiscordChannel),
    #[serde(rename = "CHANNEL_DELETE")]
    ChannelDelete(DiscordChannel),
    #[serde(rename = "USER_UPDATE")]
    UserUpdate(DiscordUser),
}

impl DiscordEvent {
    /// Gateway wire name for the event.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::MessageCreate(_) => "MESSAGE_CREATE",
            Self::MessageUpdate(_) => "MESSAGE_UPDATE",
            Self::MessageDelete(_) => "MESSAGE_DELETE",
            Self::ReactionAdd(_) => "MESSAGE_REACTION_ADD",
            Self::ReactionRemove(_) => "MESSAGE_REACTION_REMOVE",
            Self::InteractionCreate(_) => "INTERACTION_CREATE",
            Self::TypingStart(_) => "TYPING_START",
            Self::VoiceStateUpdate(_) => "VOICE_STATE_UPDATE",
            Self::PresenceUpdate(_) => "PRESENCE_UPDATE",
            Self::GuildMemberAdd(_) => "GUILD_MEMBER_ADD",
            Self::GuildMemberRemove(_) => "GUILD_MEMBER_REMOVE",
            Self::ChannelCreate(_) => "CHANNEL_CREATE",
            Self::ChannelUpdate(_) => "CHANNEL_UPDATE",
            Self::ChannelDelete(_) => "CHANNEL_DELETE",
            Self::UserUpdate(_) => "USER_UPDATE",
        }
    }
}
