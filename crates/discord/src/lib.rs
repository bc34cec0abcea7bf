//! Discord side of the pawbridge adapter.
//!
//! Native gateway event snapshots, the session collaborator contract,
//! normalization into the shared event model, embed translation, and
//! the Discord arm of response dispatch.

pub mod embed;
pub mod event;
pub mod normalize;
pub mod respond;
pub mod session;

pub use {
    embed::{
        DiscordEmbed, DiscordEmbedField, DiscordEmbedFooter, DiscordEmbedImage,
        DiscordEmbedThumbnail,
    },
    event::{DiscordEvent, DiscordInteraction, DiscordMessage, DiscordUser},
    normalize::{DiscordNormalizer, normalize, normalize_user},
    session::{
        DiscordEventHandler, DiscordInteractionEdit, DiscordInteractionResponse,
        DiscordMessageEdit, DiscordMessageReference, DiscordMessageSend, DiscordResponseKind,
        DiscordSession,
    },
};
