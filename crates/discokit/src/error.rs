use crate::{LimitExceeded, MentionKind};

/// A result type whose error defaults to [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `discokit` can produce.
///
/// Every error is terminal: a failed parse never yields a partial value.
/// Callers are expected to treat [`Error::InvalidFormat`] and
/// [`Error::NotAMention`] as "the input is not of this form" and branch on
/// it, not as a fatal condition.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The text is not a base-10 `u64`, or it decodes to a creation time at
    /// or before [`DISCORD_EPOCH`](crate::DISCORD_EPOCH).
    #[error("discord snowflake format error")]
    InvalidFormat,

    /// The text lacks the `<`/`>` delimiters, matches none of the known
    /// mention shapes, or embeds an invalid snowflake.
    #[error("is not a valid mention")]
    NotAMention,

    /// A decoded mention carries an ID its kind does not take, or lacks the
    /// ID or an attribute its kind needs.
    ///
    /// Only returned when deserializing a [`Mention`](crate::Mention).
    #[error("mention fields do not match its kind `{0}`")]
    MismatchedMention(MentionKind),

    /// The embed breaks one or more platform length limits.
    ///
    /// Only returned by [`EmbedBuilder::try_build`](crate::EmbedBuilder::try_build).
    #[error("embed exceeds limits: {}", join_exceeds(.0))]
    EmbedLimits(Vec<LimitExceeded>),
}

fn join_exceeds(exceeds: &[LimitExceeded]) -> String {
    exceeds
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::InvalidFormat.to_string(),
            "discord snowflake format error"
        );
        assert_eq!(Error::NotAMention.to_string(), "is not a valid mention");
        assert_eq!(
            Error::MismatchedMention(MentionKind::Timestamp).to_string(),
            "mention fields do not match its kind `timestamp`"
        );
        assert_eq!(
            Error::EmbedLimits(vec![LimitExceeded::Title, LimitExceeded::FieldValue(3)])
                .to_string(),
            "embed exceeds limits: title, field.value:3"
        );
    }
}
