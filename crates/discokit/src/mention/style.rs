use core::fmt;

/// Display styles a client may apply to a `<t:TIMESTAMP:STYLE>` mention.
///
/// The parser keeps the style attribute verbatim and never checks it against
/// this set; see [`Mention::timestamp_style`](crate::Mention::timestamp_style).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimestampStyle {
    /// `t`, e.g. 16:20
    #[cfg_attr(feature = "serde", serde(rename = "t"))]
    ShortTime,
    /// `T`, e.g. 16:20:30
    #[cfg_attr(feature = "serde", serde(rename = "T"))]
    LongTime,
    /// `d`, e.g. 20/04/2021
    #[cfg_attr(feature = "serde", serde(rename = "d"))]
    ShortDate,
    /// `D`, e.g. 20 April 2021
    #[cfg_attr(feature = "serde", serde(rename = "D"))]
    LongDate,
    /// `f`, e.g. 20 April 2021 16:20
    #[cfg_attr(feature = "serde", serde(rename = "f"))]
    ShortDateTime,
    /// `F`, e.g. Tuesday, 20 April 2021 16:20
    #[cfg_attr(feature = "serde", serde(rename = "F"))]
    LongDateTime,
    /// `R`, e.g. 2 months ago
    #[cfg_attr(feature = "serde", serde(rename = "R"))]
    Relative,
}

impl TimestampStyle {
    pub const ALL: [Self; 7] = [
        Self::ShortTime,
        Self::LongTime,
        Self::ShortDate,
        Self::LongDate,
        Self::ShortDateTime,
        Self::LongDateTime,
        Self::Relative,
    ];

    /// Looks up a style by its one-letter abbreviation. Case matters: `d`
    /// and `D` are different styles.
    pub fn from_abbreviation(abbreviation: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == abbreviation)
    }

    /// The one-letter abbreviation used inside the token.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ShortTime => "t",
            Self::LongTime => "T",
            Self::ShortDate => "d",
            Self::LongDate => "D",
            Self::ShortDateTime => "f",
            Self::LongDateTime => "F",
            Self::Relative => "R",
        }
    }
}

impl fmt::Display for TimestampStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
