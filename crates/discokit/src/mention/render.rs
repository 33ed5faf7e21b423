use super::{Attribute, Mention, MentionKind};
use core::fmt;

/// Written between the brackets when a mention lacks its ID or a required
/// attribute.
pub const UNKNOWN_MENTION: &str = "unknown-mention-type";

impl Mention {
    /// Renders the canonical token, e.g. `<@80351110224678912>`.
    ///
    /// Never fails: an incomplete mention, see [`Mention::is_complete`],
    /// renders as `<unknown-mention-type>`. Users always render in the plain
    /// `<@ID>` form, never the legacy `<@!ID>` one.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Token text between the brackets, or `None` if something required is
    /// missing.
    fn body(&self) -> Option<String> {
        if !self.is_complete() {
            return None;
        }
        let attr = |key: Attribute| self.attribute(key);
        let body = match self.kind {
            MentionKind::Role => format!("@&{}", self.id?),
            MentionKind::User => format!("@{}", self.id?),
            MentionKind::Channel => format!("#{}", self.id?),
            MentionKind::SlashCommand => format!("/{}:{}", attr(Attribute::Command)?, self.id?),
            MentionKind::Timestamp => format!("t:{}", attr(Attribute::Timestamp)?),
            MentionKind::TimestampStyled => format!(
                "t:{}:{}",
                attr(Attribute::Timestamp)?,
                attr(Attribute::Style)?
            ),
            MentionKind::GuildNavigation => {
                format!("id:{}", attr(Attribute::GuildNavigationType)?)
            }
            MentionKind::CustomEmoji => format!(":{}:{}", attr(Attribute::EmojiName)?, self.id?),
            MentionKind::CustomEmojiAnimated => {
                format!("a:{}:{}", attr(Attribute::EmojiName)?, self.id?)
            }
        };
        Some(body)
    }
}

impl fmt::Display for Mention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.body() {
            Some(body) => write!(f, "<{body}>"),
            None => write!(f, "<{UNKNOWN_MENTION}>"),
        }
    }
}
