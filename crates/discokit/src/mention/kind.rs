use core::fmt;

/// The nine shapes a mention token can take.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MentionKind {
    /// `<@&ID>`
    #[cfg_attr(feature = "serde", serde(rename = "role"))]
    Role,
    /// `<@ID>` or the legacy nickname form `<@!ID>`
    #[cfg_attr(feature = "serde", serde(rename = "user"))]
    User,
    /// `<#ID>`
    #[cfg_attr(feature = "serde", serde(rename = "channel"))]
    Channel,
    /// `</NAME:ID>`
    #[cfg_attr(feature = "serde", serde(rename = "slash_command"))]
    SlashCommand,
    /// `<t:TIMESTAMP>`
    #[cfg_attr(feature = "serde", serde(rename = "timestamp"))]
    Timestamp,
    /// `<t:TIMESTAMP:STYLE>`
    #[cfg_attr(feature = "serde", serde(rename = "timestamp_styled"))]
    TimestampStyled,
    /// `<id:TYPE>`
    #[cfg_attr(feature = "serde", serde(rename = "guild_navigation"))]
    GuildNavigation,
    /// `<:NAME:ID>`
    #[cfg_attr(feature = "serde", serde(rename = "emoji"))]
    CustomEmoji,
    /// `<a:NAME:ID>`
    #[cfg_attr(feature = "serde", serde(rename = "emoji_animate"))]
    CustomEmojiAnimated,
}

impl MentionKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Role,
        Self::User,
        Self::Channel,
        Self::SlashCommand,
        Self::Timestamp,
        Self::TimestampStyled,
        Self::GuildNavigation,
        Self::CustomEmoji,
        Self::CustomEmojiAnimated,
    ];

    /// Discriminators of the short `<PREFIX ID>` forms. `@!` is listed before
    /// `@` so that the longest prefix wins.
    pub(crate) const PREFIXES: [(&'static str, Self); 4] = [
        ("@&", Self::Role),
        ("@!", Self::User),
        ("@", Self::User),
        ("#", Self::Channel),
    ];

    /// Canonical display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::User => "user",
            Self::Channel => "channel",
            Self::SlashCommand => "slash_command",
            Self::Timestamp => "timestamp",
            Self::TimestampStyled => "timestamp_styled",
            Self::GuildNavigation => "guild_navigation",
            Self::CustomEmoji => "emoji",
            Self::CustomEmojiAnimated => "emoji_animate",
        }
    }

    /// Looks up a kind by its canonical name, as returned by
    /// [`MentionKind::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Maps a short-form discriminator (`@&`, `@`, `@!`, `#`) to its kind.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::PREFIXES
            .iter()
            .find(|(p, _)| *p == prefix)
            .map(|&(_, kind)| kind)
    }

    /// Whether mentions of this kind carry a snowflake.
    pub const fn has_id(&self) -> bool {
        !matches!(
            self,
            Self::Timestamp | Self::TimestampStyled | Self::GuildNavigation
        )
    }

    /// Attributes a complete mention of this kind must carry.
    pub const fn required_attributes(&self) -> &'static [Attribute] {
        match self {
            Self::Role | Self::User | Self::Channel => &[],
            Self::SlashCommand => &[Attribute::Command],
            Self::Timestamp => &[Attribute::Timestamp],
            Self::TimestampStyled => &[Attribute::Timestamp, Attribute::Style],
            Self::GuildNavigation => &[Attribute::GuildNavigationType],
            Self::CustomEmoji | Self::CustomEmojiAnimated => &[Attribute::EmojiName],
        }
    }
}

impl fmt::Display for MentionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Keys of the kind-specific attributes carried by a [`Mention`](crate::Mention).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attribute {
    /// Slash command name, without the leading `/`.
    Command,
    /// Unix timestamp in seconds, kept verbatim.
    Timestamp,
    /// Timestamp style abbreviation, kept verbatim.
    Style,
    /// Guild navigation target, e.g. `customize`.
    GuildNavigationType,
    /// Custom emoji name.
    EmojiName,
}

impl Attribute {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Timestamp => "timestamp",
            Self::Style => "style",
            Self::GuildNavigationType => "guild_navigation_type",
            Self::EmojiName => "emoji_name",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
