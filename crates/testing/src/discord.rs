use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use async_trait::async_trait;

use {
    pawbridge_common::{InteractionRef, TransportError},
    pawbridge_discord::{
        DiscordEventHandler, DiscordInteractionEdit, DiscordInteractionResponse,
        DiscordMessageEdit, DiscordMessageSend, DiscordSession,
        event::{DiscordEvent, DiscordMessage, DiscordUser},
    },
};

/// One recorded outbound call on the fake Discord session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscordCall {
    SendMessage {
        channel_id: String,
        message: DiscordMessageSend,
    },
    EditMessage(DiscordMessageEdit),
    RespondToInteraction {
        interaction: InteractionRef,
        response: DiscordInteractionResponse,
    },
    EditInteractionResponse {
        interaction: InteractionRef,
        edit: DiscordInteractionEdit,
    },
}

/// In-memory Discord session double.
///
/// `emit` replays a synthetic gateway event through every subscribed
/// handler, awaiting each in turn; outbound calls are recorded and
/// answered with canned message objects.
#[derive(Default)]
pub struct FakeDiscordSession {
    handlers: Mutex<Vec<Arc<dyn DiscordEventHandler>>>,
    calls: Mutex<Vec<DiscordCall>>,
    next_id: AtomicUsize,
    fail_calls: AtomicBool,
}

impl FakeDiscordSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a native event to every subscribed handler.
    pub async fn emit(&self, event: DiscordEvent) {
        let handlers: Vec<_> = self
            .handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for handler in handlers {
            handler.handle(event.clone()).await;
        }
    }

    /// Snapshot of the outbound calls issued so far.
    #[must_use]
    pub fn calls(&self) -> Vec<DiscordCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Make every subsequent outbound call fail with a transport error.
    pub fn set_fail_calls(&self, fail: bool) {
        self.fail_calls.store(fail, Ordering::SeqCst);
    }

    fn record(&self, call: DiscordCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }

    fn check_available(&self, op: &str) -> Result<(), TransportError> {
        if self.fail_calls.load(Ordering::SeqCst) {
            return Err(TransportError::message(op, "transport unavailable"));
        }
        Ok(())
    }

    fn sent_message(&self, channel_id: &str, content: &str) -> DiscordMessage {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        DiscordMessage {
            id: format!("sent-{n}"),
            channel_id: channel_id.to_owned(),
            guild_id: None,
            content: content.to_owned(),
            author: DiscordUser {
                id: "bot".into(),
                username: "pawbridge".into(),
                bot: true,
                avatar: None,
            },
        }
    }
}

#[async_trait]
impl DiscordSession for FakeDiscordSession {
    fn subscribe(&self, handler: Arc<dyn DiscordEventHandler>) {
        self.handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(handler);
    }

    async fn send_message(
        &self,
        channel_id: &str,
        message: DiscordMessageSend,
    ) -> Result<DiscordMessage, TransportError> {
        self.check_available("send message")?;
        let sent = self.sent_message(channel_id, &message.content);
        self.record(DiscordCall::SendMessage {
            channel_id: channel_id.to_owned(),
            message,
        });
        Ok(sent)
    }

    async fn edit_message(
        &self,
        edit: DiscordMessageEdit,
    ) -> Result<DiscordMessage, TransportError> {
        self.check_available("edit message")?;
        let edited = DiscordMessage {
            id: edit.id.clone(),
            channel_id: edit.channel_id.clone(),
            guild_id: None,
            content: edit.content.clone(),
            author: DiscordUser {
                id: "bot".into(),
                username: "pawbridge".into(),
                bot: true,
                avatar: None,
            },
        };
        self.record(DiscordCall::EditMessage(edit));
        Ok(edited)
    }

    async fn respond_to_interaction(
        &self,
        interaction: &InteractionRef,
        response: DiscordInteractionResponse,
    ) -> Result<(), TransportError> {
        self.check_available("respond to interaction")?;
        self.record(DiscordCall::RespondToInteraction {
            interaction: interaction.clone(),
            response,
        });
        Ok(())
    }

    async fn edit_interaction_response(
        &self,
        interaction: &InteractionRef,
        edit: DiscordInteractionEdit,
    ) -> Result<DiscordMessage, TransportError> {
        self.check_available("edit interaction response")?;
        let edited = self.sent_message(&interaction.channel_id, &edit.content);
        self.record(DiscordCall::EditInteractionResponse {
            interaction: interaction.clone(),
            edit,
        });
        Ok(edited)
    }
}
