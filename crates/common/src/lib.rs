//! Shared data model for the pawbridge adapter crates.
//!
//! Defines the normalized event envelope produced by the platform
//! normalizers, the reply-target shapes consumed by response dispatch,
//! the platform-agnostic embed description, and the error taxonomy
//! shared by every crate in the workspace.

pub mod embed;
pub mod error;
pub mod event;
pub mod user;

pub use {
    embed::{Embed, EmbedField, EmbedFooter},
    error::{Error, Result, TransportError},
    event::{
        Event, EventKind, EventPayload, EventSink, InteractionPayload, InteractionRef,
        MessagePayload, Platform, ReplyTarget,
    },
    user::User,
};
