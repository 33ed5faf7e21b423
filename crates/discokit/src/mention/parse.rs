use super::{Attribute, Mention, MentionKind};
use crate::{Error, Result, Snowflake};
use core::str::FromStr;
#[cfg(feature = "tracing")]
use tracing::instrument;

impl Mention {
    /// Decodes a mention token.
    ///
    /// Surrounding whitespace is ignored. The token must start with `<` and
    /// end with `>`; every leading and trailing bracket is then stripped, so
    /// `<<@80351110224678912>>` decodes like `<@80351110224678912>`.
    ///
    /// The short `<PREFIX ID>` forms are tried first, then the colon-separated
    /// forms. A snowflake embedded in any form must pass
    /// [`Snowflake::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAMention`] if no form matches.
    ///
    /// # Example
    ///
    /// ```
    /// use discokit::{Error, Mention, MentionKind};
    ///
    /// let m = Mention::parse("<t:1618953630:d>").unwrap();
    /// assert_eq!(m.kind(), MentionKind::TimestampStyled);
    /// assert_eq!(m.timestamp_text(), Some("1618953630"));
    /// assert_eq!(m.style(), Some("d"));
    /// assert_eq!(m.id(), None);
    ///
    /// // 22 decodes to a time before the epoch.
    /// assert_eq!(Mention::parse("<@22>"), Err(Error::NotAMention));
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace"))]
    pub fn parse(text: &str) -> Result<Self> {
        let body = strip_delimiters(text).ok_or(Error::NotAMention)?;

        if let Some(mention) = parse_prefixed(body) {
            return Ok(mention);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(body, "no prefixed form matched, trying segments");

        parse_segmented(body).ok_or(Error::NotAMention)
    }
}

impl FromStr for Mention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn strip_delimiters(text: &str) -> Option<&str> {
    let text = text.trim();
    if !text.starts_with('<') || !text.ends_with('>') {
        return None;
    }
    Some(text.trim_matches(|c| c == '<' || c == '>'))
}

/// `(@&|@!|@|#)DIGITS` over the whole body.
fn parse_prefixed(body: &str) -> Option<Mention> {
    MentionKind::PREFIXES.iter().find_map(|&(prefix, kind)| {
        let digits = body.strip_prefix(prefix)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match Snowflake::parse(digits) {
            Ok(id) => Some(Mention::bare(kind, Some(id))),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(prefix, digits, "prefix matched but id rejected: {_e}");
                None
            }
        }
    })
}

/// Dispatch on the number of `:`-separated segments and on the first one.
fn parse_segmented(body: &str) -> Option<Mention> {
    let segments: Vec<&str> = body.split(':').collect();

    let mention = match segments.as_slice() {
        [name, id] if name.starts_with('/') => {
            Mention::bare(MentionKind::SlashCommand, Some(Snowflake::parse(id).ok()?))
                .with(Attribute::Command, name.trim_start_matches('/'))
        }
        ["t", timestamp] => {
            Mention::bare(MentionKind::Timestamp, None).with(Attribute::Timestamp, *timestamp)
        }
        ["id", navigation_type] => Mention::bare(MentionKind::GuildNavigation, None)
            .with(Attribute::GuildNavigationType, *navigation_type),
        ["", name, id] => Mention::bare(MentionKind::CustomEmoji, Some(Snowflake::parse(id).ok()?))
            .with(Attribute::EmojiName, *name),
        ["a", name, id] => Mention::bare(
            MentionKind::CustomEmojiAnimated,
            Some(Snowflake::parse(id).ok()?),
        )
        .with(Attribute::EmojiName, *name),
        ["t", timestamp, style] => Mention::bare(MentionKind::TimestampStyled, None)
            .with(Attribute::Timestamp, *timestamp)
            .with(Attribute::Style, *style),
        _ => return None,
    };

    Some(mention)
}
