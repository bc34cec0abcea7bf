//! Unified adapter over the Discord and Revolt backends.
//!
//! Applications construct an [`Adapter`] from the session handles they
//! opened, register one [`pawbridge_common::EventSink`] to receive the
//! normalized event stream from both platforms, and answer events
//! through [`Adapter::respond`] without caring which backend they came
//! from.
//!
//! ```no_run
//! # use std::sync::Arc;
//! # async fn wire(
//! #     discord: Arc<dyn pawbridge_discord::DiscordSession>,
//! #     revolt: Arc<dyn pawbridge_revolt::RevoltSession>,
//! #     sink: Arc<dyn pawbridge_common::EventSink>,
//! # ) {
//! let adapter = pawbridge::Adapter::new()
//!     .with_discord(discord)
//!     .with_revolt(revolt);
//! adapter.register(sink);
//! # }
//! ```

pub mod adapter;
pub mod config;
pub mod cooldown;
pub mod util;

pub use {
    adapter::{Adapter, MessageHandle},
    config::{AdapterConfig, ConfigError, DiscordConfig, RevoltConfig},
    cooldown::Cooldowns,
    pawbridge_common::{
        Embed, EmbedField, EmbedFooter, Error, Event, EventKind, EventPayload, EventSink,
        Platform, ReplyTarget, Result, User,
    },
};
