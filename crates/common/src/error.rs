use std::error::Error as StdError;

use crate::event::Platform;

/// Crate-wide result type for adapter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure of an underlying session call (network, permission, rate
/// limit). Propagated verbatim to the caller; never retried here.
#[derive(Debug, thiserror::Error)]
#[error("{context}: {source}")]
pub struct TransportError {
    context: String,
    #[source]
    source: Box<dyn StdError + Send + Sync>,
}

impl TransportError {
    #[must_use]
    pub fn new(context: impl Into<String>, source: impl StdError + Send + Sync + 'static) -> Self {
        Self {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// Build from a plain message, for session implementations whose
    /// underlying errors are already rendered to strings.
    #[must_use]
    pub fn message(context: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self {
            context: context.into(),
            source: message.to_string().into(),
        }
    }

    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }
}

/// Typed errors for normalization and response dispatch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Author lookup failed for an inbound message event. The event is
    /// dropped and logged; this variant never reaches the event sink's
    /// caller.
    #[error("identity resolution failed for user {user_id}: {source}")]
    IdentityResolution {
        user_id: String,
        #[source]
        source: TransportError,
    },

    /// The event's reply target cannot be answered on its platform.
    #[error("unsupported {context} context for {platform} response")]
    UnsupportedContext {
        platform: Platform,
        context: &'static str,
    },

    /// No session is configured for the requested platform.
    #[error("no {0} session is configured")]
    UnsupportedPlatform(Platform),

    /// Wrapped failure from the underlying session call.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    #[must_use]
    pub fn identity_resolution(user_id: impl Into<String>, source: TransportError) -> Self {
        Self::IdentityResolution {
            user_id: user_id.into(),
            source,
        }
    }

    #[must_use]
    pub fn unsupported_context(platform: Platform, context: &'static str) -> Self {
        Self::UnsupportedContext { platform, context }
    }

    /// True for the no-side-effect dispatch refusals, as opposed to
    /// failures of an attempted session call.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedContext { .. } | Self::UnsupportedPlatform(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_preserves_context() {
        let err = TransportError::message("send message", "429 too many requests");
        assert_eq!(err.context(), "send message");
        assert_eq!(err.to_string(), "send message: 429 too many requests");
    }

    #[test]
    fn unsupported_variants_are_flagged() {
        assert!(Error::UnsupportedPlatform(Platform::Revolt).is_unsupported());
        assert!(Error::unsupported_context(Platform::Discord, "reaction").is_unsupported());
        assert!(!Error::Transport(TransportError::message("edit", "boom")).is_unsupported());
    }
}
