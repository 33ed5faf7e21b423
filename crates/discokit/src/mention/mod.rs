//! # Mention tokens
//!
//! Chat text references entities through short bracketed tokens such as
//! `<@80351110224678912>` or `<t:1618953630:d>`. This module classifies a
//! token into one of the nine [`MentionKind`]s, renders a [`Mention`] back to
//! its canonical token, and offers constructors for building well-formed
//! mentions directly.
//!
//! ```
//! use discokit::{Mention, MentionKind};
//!
//! let mention: Mention = "</airhorn:816437322781949972>".parse().unwrap();
//! assert_eq!(mention.kind(), MentionKind::SlashCommand);
//! assert_eq!(mention.command(), Some("airhorn"));
//! assert_eq!(mention.to_string(), "</airhorn:816437322781949972>");
//! ```

mod kind;
mod parse;
mod render;
mod style;

pub use kind::*;
pub use render::*;
pub use style::*;

use crate::Snowflake;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::BTreeMap;

/// A decoded mention token.
///
/// `id` is present for the kinds that reference an entity and absent for
/// [`MentionKind::Timestamp`], [`MentionKind::TimestampStyled`] and
/// [`MentionKind::GuildNavigation`]. `attributes` holds the kind-specific
/// values listed by [`MentionKind::required_attributes`].
///
/// Parsing always yields a complete mention. [`Mention::new`] can build an
/// incomplete one, which renders as `<unknown-mention-type>`. Deserializing
/// (feature `serde`) rejects incomplete mentions.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Mention {
    kind: MentionKind,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    id: Option<Snowflake>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "BTreeMap::is_empty")
    )]
    attributes: BTreeMap<Attribute, String>,
}

impl Mention {
    /// Builds a mention from raw parts without checking that `attributes`
    /// matches what `kind` requires.
    pub fn new<I, S>(kind: MentionKind, id: Option<Snowflake>, attributes: I) -> Self
    where
        I: IntoIterator<Item = (Attribute, S)>,
        S: Into<String>,
    {
        Self {
            kind,
            id,
            attributes: attributes
                .into_iter()
                .map(|(key, value)| (key, value.into()))
                .collect(),
        }
    }

    fn bare(kind: MentionKind, id: Option<Snowflake>) -> Self {
        Self {
            kind,
            id,
            attributes: BTreeMap::new(),
        }
    }

    fn with(mut self, key: Attribute, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value.into());
        self
    }

    /// `<@ID>`
    pub fn user(id: Snowflake) -> Self {
        Self::bare(MentionKind::User, Some(id))
    }

    /// `<@&ID>`
    pub fn role(id: Snowflake) -> Self {
        Self::bare(MentionKind::Role, Some(id))
    }

    /// `<#ID>`
    pub fn channel(id: Snowflake) -> Self {
        Self::bare(MentionKind::Channel, Some(id))
    }

    /// `<:NAME:ID>`
    pub fn emoji(id: Snowflake, name: impl Into<String>) -> Self {
        Self::bare(MentionKind::CustomEmoji, Some(id)).with(Attribute::EmojiName, name)
    }

    /// `<a:NAME:ID>`
    pub fn animated_emoji(id: Snowflake, name: impl Into<String>) -> Self {
        Self::bare(MentionKind::CustomEmojiAnimated, Some(id)).with(Attribute::EmojiName, name)
    }

    /// `</COMMAND:ID>`. Subcommands are written with spaces, e.g.
    /// `"permissions user get"`.
    pub fn slash_command(id: Snowflake, command: impl Into<String>) -> Self {
        Self::bare(MentionKind::SlashCommand, Some(id)).with(Attribute::Command, command)
    }

    /// `<id:TYPE>`, where `TYPE` is a navigation target such as `customize`,
    /// `browse` or `guide`.
    pub fn guild_navigation(navigation_type: impl Into<String>) -> Self {
        Self::bare(MentionKind::GuildNavigation, None)
            .with(Attribute::GuildNavigationType, navigation_type)
    }

    /// `<t:SECONDS>`, or `<t:SECONDS:STYLE>` when a style is given. Sub-second
    /// precision is dropped.
    pub fn timestamp<Tz: TimeZone>(time: &DateTime<Tz>, style: Option<TimestampStyle>) -> Self {
        let mention = Self::bare(MentionKind::Timestamp, None)
            .with(Attribute::Timestamp, time.timestamp().to_string());
        match style {
            Some(style) => Self {
                kind: MentionKind::TimestampStyled,
                ..mention
            }
            .with(Attribute::Style, style.as_str()),
            None => mention,
        }
    }

    pub fn kind(&self) -> MentionKind {
        self.kind
    }

    /// The referenced entity, if this kind carries one.
    pub fn id(&self) -> Option<Snowflake> {
        self.id
    }

    pub fn attribute(&self, key: Attribute) -> Option<&str> {
        self.attributes.get(&key).map(String::as_str)
    }

    /// All attributes, ordered by key.
    pub fn attributes(&self) -> impl Iterator<Item = (Attribute, &str)> {
        self.attributes
            .iter()
            .map(|(&key, value)| (key, value.as_str()))
    }

    pub fn command(&self) -> Option<&str> {
        self.attribute(Attribute::Command)
    }

    /// The timestamp attribute as written in the token.
    pub fn timestamp_text(&self) -> Option<&str> {
        self.attribute(Attribute::Timestamp)
    }

    /// The style attribute as written in the token.
    pub fn style(&self) -> Option<&str> {
        self.attribute(Attribute::Style)
    }

    pub fn guild_navigation_type(&self) -> Option<&str> {
        self.attribute(Attribute::GuildNavigationType)
    }

    pub fn emoji_name(&self) -> Option<&str> {
        self.attribute(Attribute::EmojiName)
    }

    /// The style attribute, if it is one of the known abbreviations.
    pub fn timestamp_style(&self) -> Option<TimestampStyle> {
        TimestampStyle::from_abbreviation(self.style()?)
    }

    /// The timestamp attribute read as Unix seconds.
    pub fn timestamp_time(&self) -> Option<DateTime<Utc>> {
        let seconds = self.timestamp_text()?.parse::<i64>().ok()?;
        DateTime::from_timestamp(seconds, 0)
    }

    /// Whether the mention carries an ID exactly when its kind takes one, and
    /// every attribute its kind needs, i.e. whether it renders to a real
    /// token that parses back into an equal mention.
    pub fn is_complete(&self) -> bool {
        self.kind.has_id() == self.id.is_some()
            && self
                .kind
                .required_attributes()
                .iter()
                .all(|key| self.attributes.contains_key(key))
    }
}
