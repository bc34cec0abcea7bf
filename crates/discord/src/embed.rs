//! Translation of the shared embed description into Discord's
//! structured embed objects.

use serde::{Deserialize, Serialize};

use pawbridge_common::Embed;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordEmbedThumbnail {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordEmbedImage {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordEmbedFooter {
    pub text: String,
    #[serde(default)]
    pub icon_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordEmbedField {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

/// Discord's native embed shape. Structure is preserved one-to-one from
/// the shared description: fields, footer and thumbnail stay discrete
/// sub-objects and the color stays a raw integer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordEmbed {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<DiscordEmbedThumbnail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<DiscordEmbedImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<DiscordEmbedFooter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<DiscordEmbedField>,
}

impl From<&Embed> for DiscordEmbed {
    fn from(embed: &Embed) -> Self {
        Self {
            title: embed.title.clone(),
            description: embed.description.clone(),
            url: embed.url.clone(),
            color: embed.color,
            thumbnail: embed
                .icon_url
                .clone()
                .map(|url| DiscordEmbedThumbnail { url }),
            image: embed.photo_url.clone().map(|url| DiscordEmbedImage { url }),
            footer: embed.footer.as_ref().map(|footer| DiscordEmbedFooter {
                text: footer.text.clone(),
                icon_url: footer.icon_url.clone(),
            }),
            fields: embed
                .fields
                .iter()
                .flatten()
                .map(|field| DiscordEmbedField {
                    name: field.name.clone(),
                    value: field.value.clone(),
                    inline: field.inline,
                })
                .collect(),
        }
    }
}
