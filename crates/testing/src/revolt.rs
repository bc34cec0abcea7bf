use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex, PoisonError,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;

use {
    pawbridge_common::TransportError,
    pawbridge_revolt::{
        RevoltEventHandler, RevoltMessageEdit, RevoltMessageSend, RevoltSession,
        event::{RevoltEvent, RevoltMessage, RevoltUser},
    },
};

/// One recorded outbound call on the fake Revolt session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevoltCall {
    SendMessage {
        channel_id: String,
        message: RevoltMessageSend,
    },
    EditMessage {
        channel_id: String,
        message_id: String,
        edit: RevoltMessageEdit,
    },
}

/// In-memory Revolt session double with a scriptable user directory.
///
/// `lookup_user` resolves against users inserted up front; flip
/// `set_fail_lookups` to exercise the drop-on-failure path.
#[derive(Default)]
pub struct FakeRevoltSession {
    handlers: Mutex<Vec<Arc<dyn RevoltEventHandler>>>,
    calls: Mutex<Vec<RevoltCall>>,
    users: Mutex<HashMap<String, RevoltUser>>,
    next_id: AtomicUsize,
    fail_lookups: AtomicBool,
}

impl FakeRevoltSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user the fake lookup endpoint will resolve.
    pub fn insert_user(&self, user: RevoltUser) {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user.id.clone(), user);
    }

    /// Make every subsequent lookup fail with a transport error.
    pub fn set_fail_lookups(&self, fail: bool) {
        self.fail_lookups.store(fail, Ordering::SeqCst);
    }

    /// Deliver a native event to every subscribed handler.
    pub async fn emit(&self, event: RevoltEvent) {
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
    pub fn calls(&self) -> Vec<RevoltCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: RevoltCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

#[async_trait]
impl RevoltSession for FakeRevoltSession {
    fn subscribe(&self, handler: Arc<dyn RevoltEventHandler>) {
        self.handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(handler);
    }

    async fn send_message(
        &self,
        channel_id: &str,
        message: RevoltMessageSend,
    ) -> Result<RevoltMessage, TransportError> {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let sent = RevoltMessage {
            id: format!("sent-{n}"),
            channel: channel_id.to_owned(),
            author: "bot".into(),
            content: message.content.clone(),
        };
        self.record(RevoltCall::SendMessage {
            channel_id: channel_id.to_owned(),
            message,
        });
        Ok(sent)
    }

    async fn edit_message(
        &self,
        channel_id: &str,
        message_id: &str,
        edit: RevoltMessageEdit,
    ) -> Result<RevoltMessage, TransportError> {
        let edited = RevoltMessage {
            id: message_id.to_owned(),
            channel: channel_id.to_owned(),
            author: "bot".into(),
            content: edit.content.clone(),
        };
        self.record(RevoltCall::EditMessage {
            channel_id: channel_id.to_owned(),
            message_id: message_id.to_owned(),
            edit,
        });
        Ok(edited)
    }

    async fn lookup_user(&self, id: &str) -> Result<RevoltUser, TransportError> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(TransportError::message("lookup user", "transport unavailable"));
        }
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| TransportError::message("lookup user", format!("unknown user {id}")))
    }
}
