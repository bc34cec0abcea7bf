//! Translation of the shared embed description into Revolt's sendable
//! embed.
//!
//! Revolt has no structured fields or footer in this adapter's usage:
//! fields are flattened into the description as Markdown and the footer
//! and icon are dropped. The color becomes a `#RRGGBB` string.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use pawbridge_common::Embed;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevoltEmbedImage {
    pub url: String,
}

/// Revolt's native sendable embed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevoltEmbed {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<RevoltEmbedImage>,
    /// Uppercase `#RRGGBB`, zero-padded to six digits.
    pub colour: String,
}

impl From<&Embed> for RevoltEmbed {
    fn from(embed: &Embed) -> Self {
        let mut description = embed.description.clone();

        // Fields become blank-line separated Markdown sections.
        if let Some(fields) = embed.fields.as_deref().filter(|fields| !fields.is_empty()) {
            description.push_str("\n\n");
            for field in fields {
                let _ = write!(description, "**{}**\n{}\n\n", field.name, field.value);
            }
        }

        Self {
            title: embed.title.clone(),
            description,
            url: embed.url.clone(),
            image: embed.photo_url.clone().map(|url| RevoltEmbedImage { url }),
            colour: format!("#{:06X}", embed.color),
        }
    }
}
