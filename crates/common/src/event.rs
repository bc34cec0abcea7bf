use std::{collections::HashMap, fmt};

use {async_trait::async_trait, serde::Serialize};

use crate::user::User;

// ── Provenance ──────────────────────────────────────────────────────────────

/// Chat backend an event originated from (and a response must return to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Discord,
    Revolt,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discord => f.write_str("discord"),
            Self::Revolt => f.write_str("revolt"),
        }
    }
}

/// Normalized event classification, shared by both platforms.
///
/// Kinds that exist on only one platform (interactions on Discord,
/// server member join/leave on Revolt) still live in the one enum so
/// application logic can match without knowing the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    MessageCreate,
    MessageUpdate,
    MessageDelete,
    ReactionAdd,
    ReactionRemove,
    InteractionCreate,
    TypingStart,
    VoiceStateUpdate,
    PresenceUpdate,
    GuildMemberAdd,
    GuildMemberRemove,
    ChannelCreate,
    ChannelUpdate,
    ChannelDelete,
    UserUpdate,
    MemberJoin,
    MemberLeave,
}

// ── Reply targets ───────────────────────────────────────────────────────────

/// Reference to a Discord interaction, everything needed to acknowledge
/// or edit its response later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionRef {
    pub id: String,
    pub application_id: String,
    pub token: String,
    pub channel_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<String>,
}

/// Minimal addressing information extracted from a native event at
/// normalization time.
///
/// Response dispatch matches on this instead of inspecting the native
/// event record, so the full platform structures never leak past the
/// normalizers. `Message` is only produced for contexts a reply can be
/// sent to; channel- and guild-scoped variants feed the inspection
/// helpers ([`Event::channel_id`], [`Event::guild_id`]) but are not
/// respondable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum ReplyTarget {
    Message {
        channel_id: String,
        message_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        guild_id: Option<String>,
    },
    Interaction(InteractionRef),
    Channel {
        channel_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        guild_id: Option<String>,
    },
    Guild {
        guild_id: String,
    },
    None,
}

impl ReplyTarget {
    /// Short label for diagnostics and `UnsupportedContext` errors.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Message { .. } => "message",
            Self::Interaction(_) => "interaction",
            Self::Channel { .. } => "channel",
            Self::Guild { .. } => "guild",
            Self::None => "none",
        }
    }
}

// ── Payloads ────────────────────────────────────────────────────────────────

/// Message body carried by create/update events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagePayload {
    pub content: String,
    pub author: User,
}

/// Invoked slash command with its options flattened to strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionPayload {
    pub name: String,
    pub fields: HashMap<String, String>,
    pub author: User,
}

/// Event payload, depending on [`EventKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventPayload {
    None,
    Message(MessagePayload),
    Interaction(InteractionPayload),
    /// Membership, typing and profile events carry only the acting user.
    User(User),
}

impl EventPayload {
    #[must_use]
    pub fn author(&self) -> Option<&User> {
        match self {
            Self::Message(message) => Some(&message.author),
            Self::Interaction(interaction) => Some(&interaction.author),
            Self::User(user) => Some(user),
            Self::None => None,
        }
    }
}

// ── Envelope ────────────────────────────────────────────────────────────────

/// The normalized event forwarded to the registered sink.
///
/// Owned value snapshot; safe to retain past the delivering callback.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    /// The platform's own wire name for the native event. Diagnostic only.
    pub name: &'static str,
    pub kind: EventKind,
    pub platform: Platform,
    /// Acting user is an automated account. Reported, never enforced;
    /// `false` whenever no author is determinable.
    pub is_self_originated: bool,
    pub reply: ReplyTarget,
    pub payload: EventPayload,
}

impl Event {
    /// Channel the event happened in, when the native record carries one.
    #[must_use]
    pub fn channel_id(&self) -> Option<&str> {
        match &self.reply {
            ReplyTarget::Message { channel_id, .. } | ReplyTarget::Channel { channel_id, .. } => {
                Some(channel_id)
            },
            ReplyTarget::Interaction(interaction) => Some(&interaction.channel_id),
            ReplyTarget::Guild { .. } | ReplyTarget::None => None,
        }
    }

    /// Guild/server scope of the event, when the native record carries one.
    #[must_use]
    pub fn guild_id(&self) -> Option<&str> {
        match &self.reply {
            ReplyTarget::Message { guild_id, .. } | ReplyTarget::Channel { guild_id, .. } => {
                guild_id.as_deref()
            },
            ReplyTarget::Interaction(interaction) => interaction.guild_id.as_deref(),
            ReplyTarget::Guild { guild_id } => Some(guild_id),
            ReplyTarget::None => None,
        }
    }

    #[must_use]
    pub fn author(&self) -> Option<&User> {
        self.payload.author()
    }

    /// Message text for message-bearing events.
    #[must_use]
    pub fn message_content(&self) -> Option<&str> {
        match &self.payload {
            EventPayload::Message(message) => Some(&message.content),
            _ => None,
        }
    }
}

/// Receiver of normalized events; the application provides the
/// implementation via `Adapter::register`.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn on_event(&self, event: Event);
}
