//! # Rich embeds
//!
//! Plain data for the platform's rich embed objects, plus a builder that
//! checks the platform's length limits before anything is sent. Nothing here
//! talks to the network; serialize an [`Embed`] (feature `serde`) and hand it
//! to whatever client you use.
//!
//! ```
//! use discokit::EmbedBuilder;
//!
//! let builder = EmbedBuilder::new()
//!     .image_simple("https://example.com/img/fh982h93.jpg")
//!     .footer_simple("Look at this awesome picture!");
//! assert!(builder.in_limits());
//!
//! let embed = builder.build();
//! assert_eq!(embed.footer.unwrap().text, "Look at this awesome picture!");
//! ```

mod builder;
mod limits;
#[cfg(test)]
mod tests;

pub use builder::*;
pub use limits::*;

use core::fmt;

/// Default embed color (material white).
pub const DEFAULT_COLOR: u32 = 0xFFFFFF;

/// The `type` of an embed. Bots may only send [`EmbedKind::Rich`]; the other
/// kinds describe link previews generated by the platform.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EmbedKind {
    #[default]
    Rich,
    Image,
    Video,
    Gifv,
    Article,
    Link,
}

impl EmbedKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rich => "rich",
            Self::Image => "image",
            Self::Video => "video",
            Self::Gifv => "gifv",
            Self::Article => "article",
            Self::Link => "link",
        }
    }
}

impl fmt::Display for EmbedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rich embed. Field names follow the platform's JSON schema.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Embed {
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", skip_serializing_if = "Option::is_none", default)
    )]
    pub kind: Option<EmbedKind>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub title: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub url: Option<String>,
    /// RFC 3339 timestamp.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub timestamp: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub color: Option<u32>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub footer: Option<EmbedFooter>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub image: Option<EmbedMedia>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub thumbnail: Option<EmbedMedia>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub video: Option<EmbedMedia>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub provider: Option<EmbedProvider>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub author: Option<EmbedAuthor>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty", default))]
    pub fields: Vec<EmbedField>,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmbedFooter {
    pub text: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub icon_url: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub proxy_icon_url: Option<String>,
}

/// Image, thumbnail or video attachment.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmbedMedia {
    pub url: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub proxy_url: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub height: Option<u32>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub width: Option<u32>,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmbedProvider {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub url: Option<String>,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmbedAuthor {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub url: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub icon_url: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub proxy_icon_url: Option<String>,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub inline: bool,
}

/// A title-only embed, handy for one-line replies. Uses [`DEFAULT_COLOR`]
/// when `color` is `None`.
pub fn inline(message: impl Into<String>, color: Option<u32>) -> Embed {
    EmbedBuilder::new()
        .title(message)
        .color(color.unwrap_or(DEFAULT_COLOR))
        .build()
}
