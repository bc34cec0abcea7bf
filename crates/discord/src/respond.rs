//! Discord arm of unified response dispatch.
//!
//! Selects between create-as-reply, edit, and the two interaction
//! response paths based on the event's narrowed reply target.

use pawbridge_common::{Embed, Error, Platform, ReplyTarget};

use crate::{
    embed::DiscordEmbed,
    event::DiscordMessage,
    session::{
        DiscordInteractionEdit, DiscordInteractionResponse, DiscordMessageEdit,
        DiscordMessageReference, DiscordMessageSend, DiscordResponseKind, DiscordSession,
    },
};

fn native_embeds(embed: Option<&Embed>) -> Vec<DiscordEmbed> {
    embed.map(DiscordEmbed::from).into_iter().collect()
}

/// Answer the event: reply to the originating message or acknowledge
/// the interaction, editing instead when `edit` names a previous
/// response.
///
/// Returns `None` for the initial interaction acknowledgment; the
/// platform returns no message object on that call.
pub async fn respond(
    session: &dyn DiscordSession,
    reply: &ReplyTarget,
    content: &str,
    embed: Option<&Embed>,
    edit: Option<&str>,
) -> Result<Option<DiscordMessage>, Error> {
    match reply {
        ReplyTarget::Message {
            channel_id,
            message_id,
            guild_id,
        } => match edit {
            Some(edit_id) => {
                let message = session
                    .edit_message(DiscordMessageEdit {
                        id: edit_id.to_owned(),
                        channel_id: channel_id.clone(),
                        content: content.to_owned(),
                        embeds: embed.map(|e| vec![DiscordEmbed::from(e)]),
                    })
                    .await?;
                Ok(Some(message))
            },
            None => {
                let message = session
                    .send_message(channel_id, DiscordMessageSend {
                        content: content.to_owned(),
                        embeds: native_embeds(embed),
                        reference: Some(DiscordMessageReference {
                            message_id: message_id.clone(),
                            channel_id: channel_id.clone(),
                            guild_id: guild_id.clone(),
                        }),
                    })
                    .await?;
                Ok(Some(message))
            },
        },
        ReplyTarget::Interaction(interaction) => match edit {
            // The edit addresses the original response; the platform
            // API takes no message id on this path.
            Some(_) => {
                let message = session
                    .edit_interaction_response(interaction, DiscordInteractionEdit {
                        content: content.to_owned(),
                        embeds: embed.map(|e| vec![DiscordEmbed::from(e)]),
                    })
                    .await?;
                Ok(Some(message))
            },
            None => {
                session
                    .respond_to_interaction(interaction, DiscordInteractionResponse {
                        kind: DiscordResponseKind::ChannelMessageWithSource,
                        content: content.to_owned(),
                        embeds: native_embeds(embed),
                    })
                    .await?;
                Ok(None)
            },
        },
        other => Err(Error::unsupported_context(Platform::Discord, other.label())),
    }
}

/// Acknowledge an interaction without content, deferring the visible
/// response.
pub async fn defer(session: &dyn DiscordSession, reply: &ReplyTarget) -> Result<(), Error> {
    let ReplyTarget::Interaction(interaction) = reply else {
        return Err(Error::unsupported_context(Platform::Discord, reply.label()));
    };
    session
        .respond_to_interaction(interaction, DiscordInteractionResponse {
            kind: DiscordResponseKind::DeferredChannelMessageWithSource,
            content: String::new(),
            embeds: Vec::new(),
        })
        .await?;
    Ok(())
}

/// Send to a channel directly, without an originating event.
pub async fn send_message(
    session: &dyn DiscordSession,
    channel_id: &str,
    content: &str,
    embed: Option<&Embed>,
) -> Result<DiscordMessage, Error> {
    let message = session
        .send_message(channel_id, DiscordMessageSend {
            content: content.to_owned(),
            embeds: native_embeds(embed),
            reference: None,
        })
        .await?;
    Ok(message)
}

/// Edit an addressed message directly, without an originating event.
pub async fn edit_message(
    session: &dyn DiscordSession,
    channel_id: &str,
    message_id: &str,
    content: &str,
    embed: Option<&Embed>,
) -> Result<DiscordMessage, Error> {
    let message = session
        .edit_message(DiscordMessageEdit {
            id: message_id.to_owned(),
            channel_id: channel_id.to_owned(),
            content: content.to_owned(),
            embeds: embed.map(|e| vec![DiscordEmbed::from(e)]),
        })
        .await?;
    Ok(message)
}
