//! Test doubles for the pawbridge adapter.
//!
//! In-memory fake sessions that record every outbound call and replay
//! synthetic native events through subscribed handlers, plus a sink
//! that records forwarded events. Used by the adapter's own tests and
//! available to applications testing against the adapter.

pub mod discord;
pub mod revolt;
pub mod sink;

pub use {
    discord::{DiscordCall, FakeDiscordSession},
    revolt::{FakeRevoltSession, RevoltCall},
    sink::RecordingSink,
};
