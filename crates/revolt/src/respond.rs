//! Revolt arm of unified response dispatch.
//!
//! Only message-scoped contexts are respondable; the platform has no
//! reply reference in this adapter's usage, so a response is a plain
//! send to the extracted channel (or an edit of a named message).

use pawbridge_common::{Embed, Error, Platform, ReplyTarget};

use crate::{
    embed::RevoltEmbed,
    event::RevoltMessage,
    session::{RevoltMessageEdit, RevoltMessageSend, RevoltSession},
};

fn native_embeds(embed: Option<&Embed>) -> Vec<RevoltEmbed> {
    embed.map(RevoltEmbed::from).into_iter().collect()
}

/// Answer the event in its channel, editing instead when `edit` names a
/// previously sent message.
pub async fn respond(
    session: &dyn RevoltSession,
    reply: &ReplyTarget,
    content: &str,
    embed: Option<&Embed>,
    edit: Option<&str>,
) -> Result<RevoltMessage, Error> {
    let ReplyTarget::Message { channel_id, .. } = reply else {
        return Err(Error::unsupported_context(Platform::Revolt, reply.label()));
    };
    match edit {
        Some(edit_id) => edit_message(session, channel_id, edit_id, content, embed).await,
        None => send_message(session, channel_id, content, embed).await,
    }
}

/// Send to a channel directly, without an originating event.
pub async fn send_message(
    session: &dyn RevoltSession,
    channel_id: &str,
    content: &str,
    embed: Option<&Embed>,
) -> Result<RevoltMessage, Error> {
    let message = session
        .send_message(channel_id, RevoltMessageSend {
            content: content.to_owned(),
            embeds: native_embeds(embed),
        })
        .await?;
    Ok(message)
}

/// Edit an addressed message directly, without an originating event.
pub async fn edit_message(
    session: &dyn RevoltSession,
    channel_id: &str,
    message_id: &str,
    content: &str,
    embed: Option<&Embed>,
) -> Result<RevoltMessage, Error> {
    let message = session
        .edit_message(channel_id, message_id, RevoltMessageEdit {
            content: content.to_owned(),
            embeds: embed.map(|e| vec![RevoltEmbed::from(e)]),
        })
        .await?;
    Ok(message)
}
