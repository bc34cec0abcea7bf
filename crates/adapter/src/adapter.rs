//! The adapter context object: owns both session handles, wires the
//! normalizers into them, and routes unified response operations to the
//! right backend.

use std::sync::Arc;

use tracing::info;

use {
    pawbridge_common::{Embed, Error, Event, EventSink, Platform, Result},
    pawbridge_discord::{DiscordNormalizer, DiscordSession, event::DiscordMessage},
    pawbridge_revolt::{RevoltNormalizer, RevoltSession, event::RevoltMessage},
};

/// Native message record returned by a response operation, tagged by
/// the platform that produced it. Feed its id back as the edit target
/// of a later call to update the message in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageHandle {
    Discord(DiscordMessage),
    Revolt(RevoltMessage),
}

impl MessageHandle {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Discord(message) => &message.id,
            Self::Revolt(message) => &message.id,
        }
    }

    #[must_use]
    pub fn channel_id(&self) -> &str {
        match self {
            Self::Discord(message) => &message.channel_id,
            Self::Revolt(message) => &message.channel,
        }
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        match self {
            Self::Discord(_) => Platform::Discord,
            Self::Revolt(_) => Platform::Revolt,
        }
    }
}

/// Context object over the configured platform sessions.
///
/// Constructed once at startup; either platform may be absent, in which
/// case operations addressed to it fail with
/// [`Error::UnsupportedPlatform`].
#[derive(Default)]
pub struct Adapter {
    discord: Option<Arc<dyn DiscordSession>>,
    revolt: Option<Arc<dyn RevoltSession>>,
}

impl Adapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_discord(mut self, session: Arc<dyn DiscordSession>) -> Self {
        self.discord = Some(session);
        self
    }

    #[must_use]
    pub fn with_revolt(mut self, session: Arc<dyn RevoltSession>) -> Self {
        self.revolt = Some(session);
        self
    }

    fn discord_session(&self) -> Result<&Arc<dyn DiscordSession>> {
        self.discord
            .as_ref()
            .ok_or(Error::UnsupportedPlatform(Platform::Discord))
    }

    fn revolt_session(&self) -> Result<&Arc<dyn RevoltSession>> {
        self.revolt
            .as_ref()
            .ok_or(Error::UnsupportedPlatform(Platform::Revolt))
    }

    /// Subscribe the normalizers to every configured session and start
    /// forwarding normalized events to `sink`.
    ///
    /// Expected to be called once per process lifetime. Events are
    /// delivered on the sessions' own dispatch tasks; ordering holds
    /// within one platform, not across the two.
    pub fn register(&self, sink: Arc<dyn EventSink>) {
        if let Some(discord) = &self.discord {
            discord.subscribe(Arc::new(DiscordNormalizer::new(Arc::clone(&sink))));
            info!(platform = %Platform::Discord, "event normalizer registered");
        }
        if let Some(revolt) = &self.revolt {
            revolt.subscribe(Arc::new(RevoltNormalizer::new(
                Arc::clone(revolt),
                Arc::clone(&sink),
            )));
            info!(platform = %Platform::Revolt, "event normalizer registered");
        }
    }

    /// Answer an event on the platform it came from.
    ///
    /// Without `edit`, sends a new message addressed to the event's
    /// reply target (a reply on Discord, the originating channel on
    /// Revolt, the initial acknowledgment for an interaction). With
    /// `edit`, updates the named previous response instead.
    ///
    /// `Ok(None)` is only returned on the initial interaction
    /// acknowledgment, which yields no message object.
    pub async fn respond(
        &self,
        event: &Event,
        content: &str,
        embed: Option<&Embed>,
        edit: Option<&str>,
    ) -> Result<Option<MessageHandle>> {
        match event.platform {
            Platform::Discord => {
                let session = self.discord_session()?;
                let message =
                    pawbridge_discord::respond::respond(session.as_ref(), &event.reply, content, embed, edit)
                        .await?;
                Ok(message.map(MessageHandle::Discord))
            },
            Platform::Revolt => {
                let session = self.revolt_session()?;
                let message =
                    pawbridge_revolt::respond::respond(session.as_ref(), &event.reply, content, embed, edit)
                        .await?;
                Ok(Some(MessageHandle::Revolt(message)))
            },
        }
    }

    /// Acknowledge a Discord interaction without visible content,
    /// deferring the response. Fails with `UnsupportedContext` for any
    /// other event.
    pub async fn defer(&self, event: &Event) -> Result<()> {
        match event.platform {
            Platform::Discord => {
                let session = self.discord_session()?;
                pawbridge_discord::respond::defer(session.as_ref(), &event.reply).await
            },
            Platform::Revolt => Err(Error::unsupported_context(
                Platform::Revolt,
                event.reply.label(),
            )),
        }
    }

    /// Send to an explicitly addressed channel, independent of any
    /// triggering event.
    pub async fn send_message(
        &self,
        platform: Platform,
        channel_id: &str,
        content: &str,
        embed: Option<&Embed>,
    ) -> Result<MessageHandle> {
        match platform {
            Platform::Discord => {
                let session = self.discord_session()?;
                let message =
                    pawbridge_discord::respond::send_message(session.as_ref(), channel_id, content, embed)
                        .await?;
                Ok(MessageHandle::Discord(message))
            },
            Platform::Revolt => {
                let session = self.revolt_session()?;
                let message =
                    pawbridge_revolt::respond::send_message(session.as_ref(), channel_id, content, embed)
                        .await?;
                Ok(MessageHandle::Revolt(message))
            },
        }
    }

    /// Edit an explicitly addressed message, independent of any
    /// triggering event.
    pub async fn edit_message(
        &self,
        platform: Platform,
        channel_id: &str,
        message_id: &str,
        content: &str,
        embed: Option<&Embed>,
    ) -> Result<MessageHandle> {
        match platform {
            Platform::Discord => {
                let session = self.discord_session()?;
                let message = pawbridge_discord::respond::edit_message(
                    session.as_ref(),
                    channel_id,
                    message_id,
                    content,
                    embed,
                )
                .await?;
                Ok(MessageHandle::Discord(message))
            },
            Platform::Revolt => {
                let session = self.revolt_session()?;
                let message = pawbridge_revolt::respond::edit_message(
                    session.as_ref(),
                    channel_id,
                    message_id,
                    content,
                    embed,
                )
                .await?;
                Ok(MessageHandle::Revolt(message))
            },
        }
    }
}
