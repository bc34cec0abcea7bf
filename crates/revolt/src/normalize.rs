//! Mapping from Revolt websocket events to the shared event model.
//!
//! Message events require an author lookup before the normalized event
//! can be built; when that lookup fails the event is dropped and logged
//! rather than forwarded with an unresolved author. All other kinds map
//! without I/O. Channel/guild extraction is an explicit per-subtype
//! table — the id lives at a different field path on nearly every
//! subtype.

use std::sync::Arc;

use {
    async_trait::async_trait,
    tracing::{debug, warn},
};

use pawbridge_common::{
    Error, Event, EventKind, EventPayload, EventSink, MessagePayload, Platform, ReplyTarget, User,
};

use crate::{
    event::{RevoltEvent, RevoltUser},
    session::{RevoltEventHandler, RevoltSession},
};

/// Avatar size requested from the CDN for normalized identities.
const AVATAR_SIZE: u16 = 128;

/// Convert a full native user record into the shared identity shape.
#[must_use]
pub fn normalize_user(user: &RevoltUser) -> User {
    User {
        id: user.id.clone(),
        username: user.username.clone(),
        avatar_url: user.avatar_url(AVATAR_SIZE),
    }
}

fn bare_user(id: &str) -> EventPayload {
    EventPayload::User(User {
        id: id.to_owned(),
        ..User::default()
    })
}

/// Websocket handler that resolves authors where needed and forwards
/// normalized events to the registered sink.
pub struct RevoltNormalizer {
    session: Arc<dyn RevoltSession>,
    sink: Arc<dyn EventSink>,
}

impl RevoltNormalizer {
    #[must_use]
    pub fn new(session: Arc<dyn RevoltSession>, sink: Arc<dyn EventSink>) -> Self {
        Self { session, sink }
    }

    /// Resolve an author id to the shared identity, tagging whether the
    /// account is a bot.
    async fn resolve_author(&self, user_id: &str) -> Result<(User, bool), Error> {
        let native = self
            .session
            .lookup_user(user_id)
            .await
            .map_err(|source| Error::identity_resolution(user_id, source))?;
        let is_bot = native.bot.is_some();
        Ok((normalize_user(&native), is_bot))
    }

    /// Build the normalized event. `Err` means the author could not be
    /// resolved and the event must be dropped.
    async fn normalize(&self, event: RevoltEvent) -> Result<Event, Error> {
        let name = event.name();
        let (kind, is_self_originated, reply, payload) = match event {
            RevoltEvent::Message(message) => {
                let (author, is_bot) = self.resolve_author(&message.author).await?;
                (
                    EventKind::MessageCreate,
                    is_bot,
                    ReplyTarget::Message {
                        channel_id: message.channel,
                        message_id: message.id,
                        guild_id: None,
                    },
                    EventPayload::Message(MessagePayload {
                        content: message.content,
                        author,
                    }),
                )
            },
            // The channel id lives under `data` on this subtype.
            RevoltEvent::MessageUpdate(update) => {
                let (author, is_bot) = self.resolve_author(&update.data.author).await?;
                (
                    EventKind::MessageUpdate,
                    is_bot,
                    ReplyTarget::Message {
                        channel_id: update.data.channel,
                        message_id: update.id,
                        guild_id: None,
                    },
                    EventPayload::Message(MessagePayload {
                        content: update.data.content,
                        author,
                    }),
                )
            },
            RevoltEvent::MessageDelete(delete) => (
                EventKind::MessageDelete,
                false,
                ReplyTarget::Channel {
                    channel_id: delete.channel,
                    guild_id: None,
                },
                EventPayload::None,
            ),
            RevoltEvent::MessageReact(reaction) => (
                EventKind::ReactionAdd,
                false,
                ReplyTarget::Message {
                    channel_id: reaction.channel_id,
                    message_id: reaction.id,
                    guild_id: None,
                },
                EventPayload::None,
            ),
            RevoltEvent::MessageUnreact(reaction) => (
                EventKind::ReactionRemove,
                false,
                ReplyTarget::Message {
                    channel_id: reaction.channel_id,
                    message_id: reaction.id,
                    guild_id: None,
                },
                EventPayload::None,
            ),
            // `id` is the channel on typing events.
            RevoltEvent::ChannelStartTyping(typing) => (
                EventKind::TypingStart,
                false,
                ReplyTarget::Channel {
                    channel_id: typing.id,
                    guild_id: None,
                },
                bare_user(&typing.user),
            ),
            RevoltEvent::ChannelCreate(channel) => (
                EventKind::ChannelCreate,
                false,
                ReplyTarget::Channel {
                    channel_id: channel.id,
                    guild_id: channel.server,
                },
                EventPayload::None,
            ),
            RevoltEvent::ChannelUpdate(update) => (
                EventKind::ChannelUpdate,
                false,
                ReplyTarget::Channel {
                    channel_id: update.id,
                    guild_id: None,
                },
                EventPayload::None,
            ),
            RevoltEvent::ChannelDelete(delete) => (
                EventKind::ChannelDelete,
                false,
                ReplyTarget::Channel {
                    channel_id: delete.id,
                    guild_id: None,
                },
                EventPayload::None,
            ),
            RevoltEvent::UserUpdate(update) => {
                (EventKind::UserUpdate, false, ReplyTarget::None, bare_user(&update.id))
            },
            // `id` is the server on member events; the member is `user`.
            RevoltEvent::ServerMemberJoin(member) => (
                EventKind::MemberJoin,
                false,
                ReplyTarget::Guild {
                    guild_id: member.id,
                },
                bare_user(&member.user),
            ),
            RevoltEvent::ServerMemberLeave(member) => (
                EventKind::MemberLeave,
                false,
                ReplyTarget::Guild {
                    guild_id: member.id,
                },
                bare_user(&member.user),
            ),
        };

        Ok(Event {
            name,
            kind,
            platform: Platform::Revolt,
            is_self_originated,
            reply,
            payload,
        })
    }
}

#[async_trait]
impl RevoltEventHandler for RevoltNormalizer {
    async fn handle(&self, event: RevoltEvent) {
        match self.normalize(event).await {
            Ok(event) => {
                debug!(name = event.name, kind = ?event.kind, "forwarding revolt event");
                self.sink.on_event(event).await;
            },
            // Drop-on-failure: an event whose author cannot be resolved
            // never reaches the sink.
            Err(error) => warn!(%error, "dropping revolt event"),
        }
    }
}
