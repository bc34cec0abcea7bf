//! Collaborator contract for the long-lived Revolt connection.
//!
//! Unlike Discord, the Revolt event stream carries author *ids* only,
//! so the session exposes a user lookup the normalizer calls before an
//! event can be forwarded.

use std::sync::Arc;

use {
    async_trait::async_trait,
    serde::{Deserialize, Serialize},
};

use pawbridge_common::TransportError;

use crate::{
    embed::RevoltEmbed,
    event::{RevoltEvent, RevoltMessage, RevoltUser},
};

/// Body of a create-message call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevoltMessageSend {
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<RevoltEmbed>,
}

/// Body of an edit-message call. `embeds: Some(_)` replaces the embed
/// list wholesale; `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevoltMessageEdit {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<RevoltEmbed>>,
}

/// Receiver of native websocket events. Invoked on the session's own
/// dispatch tasks, concurrently across event kinds.
#[async_trait]
pub trait RevoltEventHandler: Send + Sync {
    async fn handle(&self, event: RevoltEvent);
}

/// The long-lived Revolt connection, owned outside this crate.
#[async_trait]
pub trait RevoltSession: Send + Sync {
    /// Register a handler for every supported websocket event kind.
    fn subscribe(&self, handler: Arc<dyn RevoltEventHandler>);

    /// Create a message in a channel.
    async fn send_message(
        &self,
        channel_id: &str,
        message: RevoltMessageSend,
    ) -> Result<RevoltMessage, TransportError>;

    /// Edit an existing message.
    async fn edit_message(
        &self,
        channel_id: &str,
        message_id: &str,
        edit: RevoltMessageEdit,
    ) -> Result<RevoltMessage, TransportError>;

    /// Fetch a full user record by id. One network round-trip; the
    /// normalizer awaits this inline for every inbound message event.
    async fn lookup_user(&self, id: &str) -> Result<RevoltUser, TransportError>;
}
