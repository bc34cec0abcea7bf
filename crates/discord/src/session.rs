//! Collaborator contract for the long-lived Discord connection.
//!
//! The transport layer (or a test fake) implements [`DiscordSession`];
//! this crate only calls into it. Request payload shapes follow the
//! REST API bodies the session ultimately submits.

use std::sync::Arc;

use {
    async_trait::async_trait,
    serde::{Deserialize, Serialize},
};

use pawbridge_common::{InteractionRef, TransportError};

use crate::{
    embed::DiscordEmbed,
    event::{DiscordEvent, DiscordMessage},
};

/// Reference attached to a message so it renders as a reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordMessageReference {
    pub message_id: String,
    pub channel_id: String,
    #[serde(default)]
    pub guild_id: Option<String>,
}

/// Body of a create-message call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordMessageSend {
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<DiscordEmbed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<DiscordMessageReference>,
}

/// Body of an edit-message call. `embeds: Some(_)` replaces the embed
/// list wholesale; `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordMessageEdit {
    pub id: String,
    pub channel_id: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<DiscordEmbed>>,
}

/// Interaction callback type codes this adapter issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscordResponseKind {
    /// Immediate visible response (callback type 4).
    ChannelMessageWithSource,
    /// Acknowledge now, respond later (callback type 5).
    DeferredChannelMessageWithSource,
}

impl DiscordResponseKind {
    /// Numeric callback type on the wire.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::ChannelMessageWithSource => 4,
            Self::DeferredChannelMessageWithSource => 5,
        }
    }
}

/// Initial response to an interaction. The acknowledgment call returns
/// no message object; retrieving it requires a follow-up fetch, which
/// this adapter does not perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordInteractionResponse {
    pub kind: DiscordResponseKind,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<DiscordEmbed>,
}

/// Edit of the original interaction response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordInteractionEdit {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<DiscordEmbed>>,
}

/// Receiver of native gateway events. The session invokes handlers on
/// its own dispatch tasks; implementations must tolerate concurrent
/// invocation across event kinds.
#[async_trait]
pub trait DiscordEventHandler: Send + Sync {
    async fn handle(&self, event: DiscordEvent);
}

/// The long-lived Discord connection, owned outside this crate.
///
/// Opening, closing and reconnecting the gateway is the owner's
/// responsibility; this crate only subscribes handlers and issues
/// outbound calls on the existing connection.
#[async_trait]
pub trait DiscordSession: Send + Sync {
    /// Register a handler for every supported gateway event kind.
    fn subscribe(&self, handler: Arc<dyn DiscordEventHandler>);

    /// Create a message in a channel.
    async fn send_message(
        &self,
        channel_id: &str,
        message: DiscordMessageSend,
    ) -> Result<DiscordMessage, TransportError>;

    /// Edit an existing message.
    async fn edit_message(&self, edit: DiscordMessageEdit)
    -> Result<DiscordMessage, TransportError>;

    /// Submit the initial interaction callback. No message object is
    /// returned by the platform on this path.
    async fn respond_to_interaction(
        &self,
        interaction: &InteractionRef,
        response: DiscordInteractionResponse,
    ) -> Result<(), TransportError>;

    /// Edit the original interaction response.
    async fn edit_interaction_response(
        &self,
        interaction: &InteractionRef,
        edit: DiscordInteractionEdit,
    ) -> Result<DiscordMessage, TransportError>;
}
