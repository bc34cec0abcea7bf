//! Mapping from Discord gateway events to the shared event model.
//!
//! The mapping is total: every subscribed native kind produces exactly
//! one normalized event, built synchronously inside the delivering
//! dispatch task. Discord events carry full author records, so no
//! network round-trip is needed here.

use std::{collections::HashMap, sync::Arc};

use {async_trait::async_trait, tracing::debug};

use pawbridge_common::{
    Event, EventKind, EventPayload, EventSink, InteractionPayload, InteractionRef, MessagePayload,
    Platform, ReplyTarget, User,
};

use crate::{
    event::{DiscordCommandOption, DiscordEvent, DiscordInteraction, DiscordUser},
    session::DiscordEventHandler,
};

/// Avatar size requested from the CDN for normalized identities.
const AVATAR_SIZE: u16 = 128;

/// Convert a native user record into the shared identity shape.
/// Absent records normalize to the zero-value user.
#[must_use]
pub fn normalize_user(user: Option<&DiscordUser>) -> User {
    let Some(user) = user else {
        return User::default();
    };
    User {
        id: user.id.clone(),
        username: user.username.clone(),
        avatar_url: user.avatar_url(AVATAR_SIZE),
    }
}

/// Flatten command options into name → stringified value, skipping
/// options without a value. Duplicate names (invalid per the API) keep
/// the last value.
fn flatten_options(options: &[DiscordCommandOption]) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    for option in options {
        let Some(value) = &option.value else {
            continue;
        };
        let rendered = match value {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        fields.insert(option.name.clone(), rendered);
    }
    fields
}

fn interaction_payload(interaction: &DiscordInteraction) -> InteractionPayload {
    InteractionPayload {
        name: interaction.data.name.clone(),
        fields: flatten_options(&interaction.data.options),
        author: normalize_user(interaction.invoking_user()),
    }
}

/// Build the normalized event for a native gateway event. Total; cannot
/// fail.
#[must_use]
pub fn normalize(event: DiscordEvent) -> Event {
    let name = event.name();
    let (kind, is_self_originated, reply, payload) = match event {
        DiscordEvent::MessageCreate(message) => (
            EventKind::MessageCreate,
            message.author.bot,
            ReplyTarget::Message {
                channel_id: message.channel_id.clone(),
                message_id: message.id.clone(),
                guild_id: message.guild_id.clone(),
            },
            EventPayload::Message(MessagePayload {
                content: message.content.clone(),
                author: normalize_user(Some(&message.author)),
            }),
        ),
        // Edits are not reply-able on this platform; the channel scope
        // is still exposed for notification routing.
        DiscordEvent::MessageUpdate(message) => (
            EventKind::MessageUpdate,
            message.author.bot,
            ReplyTarget::Channel {
                channel_id: message.channel_id.clone(),
                guild_id: message.guild_id.clone(),
            },
            EventPayload::Message(MessagePayload {
                content: message.content.clone(),
                author: normalize_user(Some(&message.author)),
            }),
        ),
        DiscordEvent::MessageDelete(delete) => (
            EventKind::MessageDelete,
            false,
            ReplyTarget::Channel {
                channel_id: delete.channel_id,
                guild_id: delete.guild_id,
            },
            EventPayload::None,
        ),
        DiscordEvent::ReactionAdd(reaction) => (
            EventKind::ReactionAdd,
            reaction
                .member
                .as_ref()
                .is_some_and(|member| member.user.bot),
            ReplyTarget::Channel {
                channel_id: reaction.channel_id,
                guild_id: reaction.guild_id,
            },
            EventPayload::None,
        ),
        // The remove payload never carries a member snapshot, so no
        // author is determinable.
        DiscordEvent::ReactionRemove(reaction) => (
            EventKind::ReactionRemove,
            false,
            ReplyTarget::Channel {
                channel_id: reaction.channel_id,
                guild_id: reaction.guild_id,
            },
            EventPayload::None,
        ),
        DiscordEvent::InteractionCreate(interaction) => (
            EventKind::InteractionCreate,
            false,
            ReplyTarget::Interaction(InteractionRef {
                id: interaction.id.clone(),
                application_id: interaction.application_id.clone(),
                token: interaction.token.clone(),
                channel_id: interaction.channel_id.clone(),
                guild_id: interaction.guild_id.clone(),
            }),
            EventPayload::Interaction(interaction_payload(&interaction)),
        ),
        DiscordEvent::TypingStart(typing) => (
            EventKind::TypingStart,
            false,
            ReplyTarget::Channel {
                channel_id: typing.channel_id,
                guild_id: typing.guild_id,
            },
            EventPayload::User(User {
                id: typing.user_id,
                ..User::default()
            }),
        ),
        DiscordEvent::VoiceStateUpdate(voice) => (
            EventKind::VoiceStateUpdate,
            false,
            match (voice.channel_id, voice.guild_id) {
                (Some(channel_id), guild_id) => ReplyTarget::Channel {
                    channel_id,
                    guild_id,
                },
                (None, Some(guild_id)) => ReplyTarget::Guild { guild_id },
                (None, None) => ReplyTarget::None,
            },
            EventPayload::None,
        ),
        DiscordEvent::PresenceUpdate(presence) => (
            EventKind::PresenceUpdate,
            presence.user.bot,
            match presence.guild_id {
                Some(guild_id) => ReplyTarget::Guild { guild_id },
                None => ReplyTarget::None,
            },
            EventPayload::User(normalize_user(Some(&presence.user))),
        ),
        DiscordEvent::GuildMemberAdd(member) => (
            EventKind::GuildMemberAdd,
            member.user.bot,
            ReplyTarget::Guild {
                guild_id: member.guild_id,
            },
            EventPayload::User(normalize_user(Some(&member.user))),
        ),
        DiscordEvent::GuildMemberRemove(member) => (
            EventKind::GuildMemberRemove,
            member.user.bot,
            ReplyTarget::Guild {
                guild_id: member.guild_id,
            },
            EventPayload::User(normalize_user(Some(&member.user))),
        ),
        DiscordEvent::ChannelCreate(channel) => (
            EventKind::ChannelCreate,
            false,
            ReplyTarget::Channel {
                channel_id: channel.id,
                guild_id: channel.guild_id,
            },
            EventPayload::None,
        ),
        DiscordEvent::ChannelUpdate(channel) => (
            EventKind::ChannelUpdate,
            false,
            ReplyTarget::Channel {
                channel_id: channel.id,
                guild_id: channel.guild_id,
            },
            EventPayload::None,
        ),
        DiscordEvent::ChannelDelete(channel) => (
            EventKind::ChannelDelete,
            false,
            ReplyTarget::Channel {
                channel_id: channel.id,
                guild_id: channel.guild_id,
            },
            EventPayload::None,
        ),
        DiscordEvent::UserUpdate(user) => (
            EventKind::UserUpdate,
            user.bot,
            ReplyTarget::None,
            EventPayload::User(normalize_user(Some(&user))),
        ),
    };

    Event {
        name,
        kind,
        platform: Platform::Discord,
        is_self_originated,
        reply,
        payload,
    }
}

/// Gateway handler that forwards every native event, normalized, to the
/// registered sink. Stateless; safe to invoke concurrently.
pub struct DiscordNormalizer {
    sink: Arc<dyn EventSink>,
}

impl DiscordNormalizer {
    #[must_use]
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl DiscordEventHandler for DiscordNormalizer {
    async fn handle(&self, event: DiscordEvent) {
        let event = normalize(event);
        debug!(name = event.name, kind = ?event.kind, "forwarding discord event");
        self.sink.on_event(event).await;
    }
}
