//! Revolt side of the pawbridge adapter.
//!
//! Native websocket event snapshots, the session collaborator contract
//! (including the user lookup the event stream makes necessary),
//! normalization into the shared event model, embed translation, and
//! the Revolt arm of response dispatch.

pub mod embed;
pub mod event;
pub mod normalize;
pub mod respond;
pub mod session;

pub use {
    embed::{RevoltEmbed, RevoltEmbedImage},
    event::{RevoltEvent, RevoltMessage, RevoltUser},
    normalize::{RevoltNormalizer, normalize_user},
    session::{RevoltEventHandler, RevoltMessageEdit, RevoltMessageSend, RevoltSession},
};
