use super::{
    DEFAULT_COLOR, Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedKind, EmbedMedia,
    EmbedProvider, LimitExceeded,
};
use crate::{Error, Result, format_rfc3339};
use chrono::{DateTime, TimeZone};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Chainable builder for [`Embed`].
///
/// Starts as a rich embed with [`DEFAULT_COLOR`]. Setters never fail; limits
/// are checked by [`EmbedBuilder::limit_exceeds`] or enforced by
/// [`EmbedBuilder::try_build`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbedBuilder {
    embed: Embed,
}

impl Default for EmbedBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn media(url: String, proxy_url: Option<String>, height: u32, width: u32) -> EmbedMedia {
    EmbedMedia {
        url,
        proxy_url,
        height: Some(height),
        width: Some(width),
    }
}

impl EmbedBuilder {
    pub fn new() -> Self {
        Self {
            embed: Embed {
                kind: Some(EmbedKind::Rich),
                color: Some(DEFAULT_COLOR),
                ..Embed::default()
            },
        }
    }

    /// Clears every field, including the default kind and color.
    pub fn reset(mut self) -> Self {
        self.embed = Embed::default();
        self
    }

    pub fn kind(mut self, kind: EmbedKind) -> Self {
        self.embed.kind = Some(kind);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.embed.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.embed.description = Some(description.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.embed.url = Some(url.into());
        self
    }

    /// Stores `time` as an RFC 3339 string, keeping its offset.
    pub fn timestamp<Tz>(mut self, time: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: core::fmt::Display,
    {
        self.embed.timestamp = Some(format_rfc3339(time));
        self
    }

    pub fn color(mut self, color: u32) -> Self {
        self.embed.color = Some(color);
        self
    }

    pub fn image(
        mut self,
        url: impl Into<String>,
        proxy_url: impl Into<String>,
        height: u32,
        width: u32,
    ) -> Self {
        self.embed.image = Some(media(url.into(), Some(proxy_url.into()), height, width));
        self
    }

    pub fn image_simple(mut self, url: impl Into<String>) -> Self {
        self.embed.image = Some(EmbedMedia {
            url: url.into(),
            ..EmbedMedia::default()
        });
        self
    }

    pub fn thumbnail(
        mut self,
        url: impl Into<String>,
        proxy_url: impl Into<String>,
        height: u32,
        width: u32,
    ) -> Self {
        self.embed.thumbnail = Some(media(url.into(), Some(proxy_url.into()), height, width));
        self
    }

    pub fn thumbnail_simple(mut self, url: impl Into<String>) -> Self {
        self.embed.thumbnail = Some(EmbedMedia {
            url: url.into(),
            ..EmbedMedia::default()
        });
        self
    }

    pub fn video(
        mut self,
        url: impl Into<String>,
        proxy_url: impl Into<String>,
        height: u32,
        width: u32,
    ) -> Self {
        self.embed.video = Some(media(url.into(), Some(proxy_url.into()), height, width));
        self
    }

    pub fn video_simple(mut self, url: impl Into<String>) -> Self {
        self.embed.video = Some(EmbedMedia {
            url: url.into(),
            ..EmbedMedia::default()
        });
        self
    }

    pub fn provider(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.embed.provider = Some(EmbedProvider {
            name: Some(name.into()),
            url: Some(url.into()),
        });
        self
    }

    pub fn author(
        mut self,
        name: impl Into<String>,
        url: impl Into<String>,
        icon_url: impl Into<String>,
        proxy_icon_url: impl Into<String>,
    ) -> Self {
        self.embed.author = Some(EmbedAuthor {
            name: name.into(),
            url: Some(url.into()),
            icon_url: Some(icon_url.into()),
            proxy_icon_url: Some(proxy_icon_url.into()),
        });
        self
    }

    pub fn author_simple(mut self, name: impl Into<String>) -> Self {
        self.embed.author = Some(EmbedAuthor {
            name: name.into(),
            ..EmbedAuthor::default()
        });
        self
    }

    pub fn footer(
        mut self,
        text: impl Into<String>,
        icon_url: impl Into<String>,
        proxy_icon_url: impl Into<String>,
    ) -> Self {
        self.embed.footer = Some(EmbedFooter {
            text: text.into(),
            icon_url: Some(icon_url.into()),
            proxy_icon_url: Some(proxy_icon_url.into()),
        });
        self
    }

    pub fn footer_simple(mut self, text: impl Into<String>) -> Self {
        self.embed.footer = Some(EmbedFooter {
            text: text.into(),
            ..EmbedFooter::default()
        });
        self
    }

    /// Appends a field. Fields keep insertion order.
    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.embed.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    /// See [`Embed::limit_exceeds`].
    pub fn limit_exceeds(&self) -> Vec<LimitExceeded> {
        self.embed.limit_exceeds()
    }

    pub fn in_limits(&self) -> bool {
        self.embed.in_limits()
    }

    /// The embed as built so far, limits unchecked.
    pub fn build(self) -> Embed {
        self.embed
    }

    /// The embed as built so far.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmbedLimits`] listing every broken limit.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_build(self) -> Result<Embed> {
        let exceeds = self.embed.limit_exceeds();
        if exceeds.is_empty() {
            Ok(self.embed)
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(count = exceeds.len(), "embed exceeds limits");
            Err(Error::EmbedLimits(exceeds))
        }
    }
}
