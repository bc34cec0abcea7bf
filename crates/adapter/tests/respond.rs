#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Unified response dispatch tests: events produced by the real
//! normalizers are answered through the adapter, and the fake sessions
//! record which native calls were made.

use std::sync::Arc;

use {
    pawbridge::{Adapter, Embed, EmbedField, Error, Event, MessageHandle, Platform},
    pawbridge_discord::{
        DiscordResponseKind,
        event::{
            DiscordCommandData, DiscordEvent, DiscordInteraction, DiscordMember, DiscordMessage,
            DiscordReaction, DiscordUser,
        },
    },
    pawbridge_revolt::event::{
        RevoltEvent, RevoltMessage, RevoltMessageDelete, RevoltMessagePatch, RevoltMessageUpdate,
        RevoltReaction, RevoltUser,
    },
    pawbridge_testing::{DiscordCall, FakeDiscordSession, FakeRevoltSession, RecordingSink, RevoltCall},
};

struct Harness {
    adapter: Adapter,
    discord: Arc<FakeDiscordSession>,
    revolt: Arc<FakeRevoltSession>,
    sink: Arc<RecordingSink>,
}

fn harness() -> Harness {
    let discord = Arc::new(FakeDiscordSession::new());
    let revolt = Arc::new(FakeRevoltSession::new());
    let sink = Arc::new(RecordingSink::new());

    revolt.insert_user(RevoltUser {
        id: "RU1".into(),
        username: "tabby".into(),
        avatar: None,
        bot: None,
    });

    let adapter = Adapter::new()
        .with_discord(discord.clone())
        .with_revolt(revolt.clone());
    adapter.register(sink.clone());

    Harness {
        adapter,
        discord,
        revolt,
        sink,
    }
}

fn author() -> DiscordUser {
    DiscordUser {
        id: "U1".into(),
        username: "mira".into(),
        bot: false,
        avatar: None,
    }
}

async fn discord_message_event(h: &Harness) -> Event {
    h.discord
        .emit(DiscordEvent::MessageCreate(DiscordMessage {
            id: "M1".into(),
            channel_id: "C1".into(),
            guild_id: Some("G1".into()),
            content: "hello".into(),
            author: author(),
        }))
        .await;
    h.sink.events().pop().unwrap()
}

async fn discord_interaction_event(h: &Harness) -> Event {
    h.discord
        .emit(DiscordEvent::InteractionCreate(DiscordInteraction {
            id: "I1".into(),
            application_id: "A1".into(),
            token: "tok".into(),
            channel_id: "C1".into(),
            guild_id: Some("G1".into()),
            member: Some(DiscordMember {
                user: author(),
                roles: Vec::new(),
            }),
            user: None,
            data: DiscordCommandData {
                name: "ping".into(),
                options: Vec::new(),
            },
        }))
        .await;
    h.sink.events().pop().unwrap()
}

// ── Discord dispatch ────────────────────────────────────────────────────────

#[tokio::test]
async fn responding_to_a_message_sends_one_reply() {
    let h = harness();
    let event = discord_message_event(&h).await;

    let handle = h.adapter.respond(&event, "hi there", None, None).await.unwrap();

    let calls = h.discord.calls();
    assert_eq!(calls.len(), 1);
    let DiscordCall::SendMessage {
        channel_id,
        message,
    } = &calls[0]
    else {
        panic!("expected a send, got {:?}", calls[0]);
    };
    assert_eq!(channel_id, "C1");
    assert_eq!(message.content, "hi there");
    let reference = message.reference.as_ref().unwrap();
    assert_eq!(reference.message_id, "M1");
    assert_eq!(reference.channel_id, "C1");
    assert_eq!(reference.guild_id.as_deref(), Some("G1"));

    match handle {
        Some(MessageHandle::Discord(message)) => assert_eq!(message.channel_id, "C1"),
        other => panic!("expected discord handle, got {other:?}"),
    }
}

#[tokio::test]
async fn responding_with_an_edit_target_edits_instead() {
    let h = harness();
    let event = discord_message_event(&h).await;

    h.adapter
        .respond(&event, "updated", None, Some("M2"))
        .await
        .unwrap();

    let calls = h.discord.calls();
    assert_eq!(calls.len(), 1);
    let DiscordCall::EditMessage(edit) = &calls[0] else {
        panic!("expected an edit, got {:?}", calls[0]);
    };
    assert_eq!(edit.id, "M2");
    assert_eq!(edit.channel_id, "C1");
    assert_eq!(edit.content, "updated");
    assert!(edit.embeds.is_none());
}

#[tokio::test]
async fn reaction_context_is_not_respondable() {
    let h = harness();
    h.discord
        .emit(DiscordEvent::ReactionAdd(DiscordReaction {
            user_id: "U1".into(),
            channel_id: "C1".into(),
            message_id: "M1".into(),
            ..DiscordReaction::default()
        }))
        .await;
    let event = h.sink.events().pop().unwrap();

    let err = h.adapter.respond(&event, "nope", None, None).await.unwrap_err();

    assert!(matches!(err, Error::UnsupportedContext { .. }));
    assert!(h.discord.calls().is_empty());
}

#[tokio::test]
async fn initial_interaction_response_returns_no_handle() {
    let h = harness();
    let event = discord_interaction_event(&h).await;

    let handle = h.adapter.respond(&event, "pong", None, None).await.unwrap();

    assert!(handle.is_none());
    let calls = h.discord.calls();
    assert_eq!(calls.len(), 1);
    let DiscordCall::RespondToInteraction {
        interaction,
        response,
    } = &calls[0]
    else {
        panic!("expected an interaction response, got {:?}", calls[0]);
    };
    assert_eq!(interaction.id, "I1");
    assert_eq!(interaction.token, "tok");
    assert_eq!(response.kind, DiscordResponseKind::ChannelMessageWithSource);
    assert_eq!(response.content, "pong");
}

#[tokio::test]
async fn interaction_edit_returns_a_handle() {
    let h = harness();
    let event = discord_interaction_event(&h).await;

    let handle = h
        .adapter
        .respond(&event, "pong: 12ms", None, Some("whatever"))
        .await
        .unwrap();

    assert!(handle.is_some());
    let calls = h.discord.calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(calls[0], DiscordCall::EditInteractionResponse { .. }));
}

#[tokio::test]
async fn defer_acknowledges_an_interaction() {
    let h = harness();
    let event = discord_interaction_event(&h).await;

    h.adapter.defer(&event).await.unwrap();

    let calls = h.discord.calls();
    let DiscordCall::RespondToInteraction { response, .. } = &calls[0] else {
        panic!("expected an interaction response, got {:?}", calls[0]);
    };
    assert_eq!(
        response.kind,
        DiscordResponseKind::DeferredChannelMessageWithSource
    );
}

#[tokio::test]
async fn defer_rejects_non_interaction_events() {
    let h = harness();
    let event = discord_message_event(&h).await;

    let err = h.adapter.defer(&event).await.unwrap_err();

    assert!(matches!(err, Error::UnsupportedContext { .. }));
    assert!(h.discord.calls().is_empty());
}

// ── Revolt dispatch ─────────────────────────────────────────────────────────

#[tokio::test]
async fn revolt_response_sends_to_the_originating_channel() {
    let h = harness();
    h.revolt
        .emit(RevoltEvent::Message(RevoltMessage {
            id: "RM1".into(),
            channel: "RC1".into(),
            author: "RU1".into(),
            content: "meow".into(),
        }))
        .await;
    let event = h.sink.events().pop().unwrap();

    let handle = h.adapter.respond(&event, "purr", None, None).await.unwrap();

    let calls = h.revolt.calls();
    assert_eq!(calls.len(), 1);
    let RevoltCall::SendMessage {
        channel_id,
        message,
    } = &calls[0]
    else {
        panic!("expected a send, got {:?}", calls[0]);
    };
    assert_eq!(channel_id, "RC1");
    assert_eq!(message.content, "purr");
    assert!(matches!(handle, Some(MessageHandle::Revolt(_))));
}

#[tokio::test]
async fn revolt_edit_targets_the_named_message() {
    let h = harness();
    h.revolt
        .emit(RevoltEvent::Message(RevoltMessage {
            id: "RM1".into(),
            channel: "RC1".into(),
            author: "RU1".into(),
            content: "meow".into(),
        }))
        .await;
    let event = h.sink.events().pop().unwrap();

    h.adapter
        .respond(&event, "purr (edited)", None, Some("RM9"))
        .await
        .unwrap();

    let calls = h.revolt.calls();
    assert_eq!(calls.len(), 1);
    let RevoltCall::EditMessage {
        channel_id,
        message_id,
        ..
    } = &calls[0]
    else {
        panic!("expected an edit, got {:?}", calls[0]);
    };
    assert_eq!(channel_id, "RC1");
    assert_eq!(message_id, "RM9");
}

#[tokio::test]
async fn revolt_update_and_reaction_contexts_are_respondable() {
    let h = harness();
    h.revolt
        .emit(RevoltEvent::MessageUpdate(RevoltMessageUpdate {
            id: "RM1".into(),
            data: RevoltMessagePatch {
                channel: "RC-update".into(),
                author: "RU1".into(),
                content: "edited".into(),
            },
        }))
        .await;
    h.revolt
        .emit(RevoltEvent::MessageReact(RevoltReaction {
            id: "RM1".into(),
            channel_id: "RC-react".into(),
            user_id: "RU1".into(),
            emoji_id: "E1".into(),
        }))
        .await;

    for event in h.sink.events() {
        h.adapter.respond(&event, "ack", None, None).await.unwrap();
    }

    let channels: Vec<String> = h
        .revolt
        .calls()
        .iter()
        .map(|call| match call {
            RevoltCall::SendMessage { channel_id, .. } => channel_id.clone(),
            RevoltCall::EditMessage { channel_id, .. } => channel_id.clone(),
        })
        .collect();
    assert_eq!(channels, vec!["RC-update".to_owned(), "RC-react".to_owned()]);
}

#[tokio::test]
async fn revolt_delete_context_is_not_respondable() {
    let h = harness();
    h.revolt
        .emit(RevoltEvent::MessageDelete(RevoltMessageDelete {
            id: "RM1".into(),
            channel: "RC1".into(),
        }))
        .await;
    let event = h.sink.events().pop().unwrap();

    let err = h.adapter.respond(&event, "nope", None, None).await.unwrap_err();

    assert!(matches!(err, Error::UnsupportedContext { .. }));
    assert!(h.revolt.calls().is_empty());
}

// ── Embed attachment ────────────────────────────────────────────────────────

fn status_embed() -> Embed {
    Embed {
        title: "Status".into(),
        description: "All good".into(),
        fields: Some(vec![EmbedField {
            name: "Uptime".into(),
            value: "99.9%".into(),
            inline: false,
        }]),
        color: 0x00FF00,
        ..Embed::default()
    }
}

#[tokio::test]
async fn discord_embed_keeps_structured_fields() {
    let h = harness();
    let event = discord_message_event(&h).await;

    h.adapter
        .respond(&event, "", Some(&status_embed()), None)
        .await
        .unwrap();

    let calls = h.discord.calls();
    let DiscordCall::SendMessage { message, .. } = &calls[0] else {
        panic!("expected a send, got {:?}", calls[0]);
    };
    assert_eq!(message.embeds.len(), 1);
    assert_eq!(message.embeds[0].color, 0x00FF00);
    assert_eq!(message.embeds[0].fields.len(), 1);
    assert_eq!(message.embeds[0].fields[0].name, "Uptime");
}

#[tokio::test]
async fn revolt_embed_flattens_fields_and_hex_colour() {
    let h = harness();
    h.revolt
        .emit(RevoltEvent::Message(RevoltMessage {
            id: "RM1".into(),
            channel: "RC1".into(),
            author: "RU1".into(),
            content: "meow".into(),
        }))
        .await;
    let event = h.sink.events().pop().unwrap();

    h.adapter
        .respond(&event, "", Some(&status_embed()), None)
        .await
        .unwrap();

    let calls = h.revolt.calls();
    let RevoltCall::SendMessage { message, .. } = &calls[0] else {
        panic!("expected a send, got {:?}", calls[0]);
    };
    assert_eq!(message.embeds.len(), 1);
    assert_eq!(message.embeds[0].colour, "#00FF00");
    assert!(message.embeds[0].description.contains("**Uptime**\n99.9%"));
}

#[tokio::test]
async fn edits_replace_the_embed_list_wholesale() {
    let h = harness();
    let event = discord_message_event(&h).await;

    h.adapter
        .respond(&event, "updated", Some(&status_embed()), Some("M2"))
        .await
        .unwrap();

    let calls = h.discord.calls();
    let DiscordCall::EditMessage(edit) = &calls[0] else {
        panic!("expected an edit, got {:?}", calls[0]);
    };
    let embeds = edit.embeds.as_ref().unwrap();
    assert_eq!(embeds.len(), 1);
}

// ── Channel-addressed operations ────────────────────────────────────────────

#[tokio::test]
async fn send_message_bypasses_event_context() {
    let h = harness();

    let handle = h
        .adapter
        .send_message(Platform::Discord, "C9", "notice", None)
        .await
        .unwrap();

    assert_eq!(handle.channel_id(), "C9");
    let calls = h.discord.calls();
    let DiscordCall::SendMessage {
        channel_id,
        message,
    } = &calls[0]
    else {
        panic!("expected a send, got {:?}", calls[0]);
    };
    assert_eq!(channel_id, "C9");
    // Direct sends are not replies.
    assert!(message.reference.is_none());
}

#[tokio::test]
async fn edit_message_bypasses_event_context() {
    let h = harness();

    h.adapter
        .edit_message(Platform::Revolt, "RC9", "RM9", "notice (edited)", None)
        .await
        .unwrap();

    let calls = h.revolt.calls();
    assert!(
        matches!(&calls[0], RevoltCall::EditMessage { channel_id, message_id, .. }
            if channel_id == "RC9" && message_id == "RM9")
    );
}

#[tokio::test]
async fn operations_on_an_unconfigured_platform_fail() {
    let discord = Arc::new(FakeDiscordSession::new());
    let adapter = Adapter::new().with_discord(discord.clone());

    let err = adapter
        .send_message(Platform::Revolt, "RC1", "notice", None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnsupportedPlatform(Platform::Revolt)));
    assert!(discord.calls().is_empty());
}

// ── Transport failures ──────────────────────────────────────────────────────

#[tokio::test]
async fn transport_errors_propagate_to_the_caller() {
    let h = harness();
    let event = discord_message_event(&h).await;
    h.discord.set_fail_calls(true);

    let err = h.adapter.respond(&event, "hi", None, None).await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
}
