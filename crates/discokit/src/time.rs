use chrono::{DateTime, SecondsFormat, TimeZone};
use core::time::Duration;

/// Discord epoch: Thursday, January 1, 2015 00:00:00 UTC
pub const DISCORD_EPOCH: Duration = Duration::from_millis(DISCORD_EPOCH_MILLIS);

/// [`DISCORD_EPOCH`] as milliseconds since the Unix epoch.
pub const DISCORD_EPOCH_MILLIS: u64 = 1_420_070_400_000;

/// Renders `time` in the RFC 3339 profile used for snowflake creation times
/// and embed timestamps: `YYYY-MM-DDThh:mm:ss±hh:mm`, whole seconds only, and
/// `Z` when the offset is zero.
///
/// # Example
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use discokit::format_rfc3339;
///
/// let tz = FixedOffset::east_opt(4 * 3600).unwrap();
/// let time = tz.with_ymd_and_hms(2024, 3, 16, 2, 32, 20).unwrap();
/// assert_eq!(format_rfc3339(&time), "2024-03-16T02:32:20+04:00");
/// ```
pub fn format_rfc3339<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: core::fmt::Display,
{
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}
