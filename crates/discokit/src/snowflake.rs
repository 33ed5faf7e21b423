use crate::{DISCORD_EPOCH_MILLIS, Error, Result, format_rfc3339};
use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use core::{fmt, str::FromStr};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A 64-bit Discord snowflake ID.
///
/// - 42 bits timestamp (ms since [`DISCORD_EPOCH`])
/// - 5 bits worker ID
/// - 5 bits process ID
/// - 12 bits increment
///
/// ```text
///  Bit Index:  63             22 21           17 16            12 11              0
///              +----------------+---------------+----------------+----------------+
///  Field:      | timestamp (42) | worker ID (5) | process ID (5) | increment (12) |
///              +----------------+---------------+----------------+----------------+
///              |<----- MSB ---------------- 64 bits ---------------- LSB -------->|
/// ```
///
/// A snowflake is valid only when its creation time is strictly after the
/// epoch, i.e. the timestamp field is non-zero. [`Snowflake::parse`] and
/// [`TryFrom<u64>`] enforce this; [`Snowflake::from_raw`] does not.
///
/// # Example
///
/// ```
/// use discokit::Snowflake;
///
/// let id: Snowflake = "1218325944931192904".parse().unwrap();
/// assert_eq!(id.worker_id(), 2);
/// assert_eq!(id.process_id(), 1);
/// assert_eq!(id.increment(), 72);
/// assert_eq!(id.to_string(), "1218325944931192904");
/// ```
///
/// [`DISCORD_EPOCH`]: crate::DISCORD_EPOCH
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Snowflake {
    id: u64,
}

impl Snowflake {
    /// Bitmask for extracting the 42-bit timestamp field. Occupies bits 22
    /// through 63.
    pub const TIMESTAMP_MASK: u64 = (1 << 42) - 1;

    /// Bitmask for extracting the 5-bit worker ID field. Occupies bits 17
    /// through 21.
    pub const WORKER_ID_MASK: u64 = (1 << 5) - 1;

    /// Bitmask for extracting the 5-bit process ID field. Occupies bits 12
    /// through 16.
    pub const PROCESS_ID_MASK: u64 = (1 << 5) - 1;

    /// Bitmask for extracting the 12-bit increment field. Occupies bits 0
    /// through 11.
    pub const INCREMENT_MASK: u64 = (1 << 12) - 1;

    /// Number of bits to shift the timestamp to its correct position (bit 22).
    pub const TIMESTAMP_SHIFT: u64 = 22;

    /// Number of bits to shift the worker ID to its correct position (bit 17).
    pub const WORKER_ID_SHIFT: u64 = 17;

    /// Number of bits to shift the process ID to its correct position (bit 12).
    pub const PROCESS_ID_SHIFT: u64 = 12;

    /// Number of bits to shift the increment field (bit 0).
    pub const INCREMENT_SHIFT: u64 = 0;

    /// The zero value. Never valid; rendered as the epoch start by
    /// [`Snowflake::describe_time`].
    pub const ZERO: Self = Self { id: 0 };

    /// Packs the given fields. Each component is masked to its bit width.
    pub const fn from_components(
        timestamp: u64,
        worker_id: u64,
        process_id: u64,
        increment: u64,
    ) -> Self {
        let timestamp = (timestamp & Self::TIMESTAMP_MASK) << Self::TIMESTAMP_SHIFT;
        let worker_id = (worker_id & Self::WORKER_ID_MASK) << Self::WORKER_ID_SHIFT;
        let process_id = (process_id & Self::PROCESS_ID_MASK) << Self::PROCESS_ID_SHIFT;
        let increment = (increment & Self::INCREMENT_MASK) << Self::INCREMENT_SHIFT;
        Self {
            id: timestamp | worker_id | process_id | increment,
        }
    }

    /// Wraps a raw value without the epoch check.
    pub const fn from_raw(raw: u64) -> Self {
        Self { id: raw }
    }

    /// Returns the raw packed value.
    pub const fn to_raw(&self) -> u64 {
        self.id
    }

    /// Parses a base-10 snowflake.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if `text` is not a plain run of ASCII
    /// digits that fits in a `u64`, or if the decoded creation time is at or
    /// before the epoch.
    #[cfg_attr(feature = "tracing", instrument(level = "trace"))]
    pub fn parse(text: &str) -> Result<Self> {
        // `u64::from_str` also accepts a leading `+`, which is not canonical.
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidFormat);
        }
        let raw = text.parse::<u64>().map_err(|_| Error::InvalidFormat)?;
        Self::try_from(raw)
    }

    /// Returns true if the creation time is strictly after the epoch.
    pub const fn is_valid(&self) -> bool {
        self.timestamp() > 0
    }

    /// Extracts the timestamp (ms since the epoch) from the packed ID.
    pub const fn timestamp(&self) -> u64 {
        (self.id >> Self::TIMESTAMP_SHIFT) & Self::TIMESTAMP_MASK
    }

    /// Extracts the worker ID from the packed ID.
    pub const fn worker_id(&self) -> u8 {
        ((self.id >> Self::WORKER_ID_SHIFT) & Self::WORKER_ID_MASK) as u8
    }

    /// Extracts the process ID from the packed ID.
    pub const fn process_id(&self) -> u8 {
        ((self.id >> Self::PROCESS_ID_SHIFT) & Self::PROCESS_ID_MASK) as u8
    }

    /// Extracts the per-process increment from the packed ID.
    pub const fn increment(&self) -> u16 {
        ((self.id >> Self::INCREMENT_SHIFT) & Self::INCREMENT_MASK) as u16
    }

    /// Creation time as milliseconds since the Unix epoch.
    pub const fn unix_millis(&self) -> u64 {
        self.timestamp() + DISCORD_EPOCH_MILLIS
    }

    /// Creation time of the object this ID refers to.
    pub fn creation_time(&self) -> DateTime<Utc> {
        // At most 2^42 - 1 ms past the epoch, far inside chrono's range.
        DateTime::<Utc>::UNIX_EPOCH + TimeDelta::milliseconds(self.unix_millis() as i64)
    }

    /// Creation time in the host's local offset, see [`format_rfc3339`].
    pub fn format_time(&self) -> String {
        self.format_time_in(&Local)
    }

    /// Creation time rendered in `tz`, see [`format_rfc3339`].
    pub fn format_time_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        format_rfc3339(&self.creation_time().with_timezone(tz))
    }

    /// Like [`Snowflake::format_time`], except that the zero value is
    /// described as the epoch start.
    pub fn describe_time(&self) -> String {
        if self.id == 0 {
            return String::from("id value is 0 (discord epoch start)");
        }
        self.format_time()
    }

    /// Lifts an instant into a snowflake with worker, process and increment
    /// all zero.
    ///
    /// This is not a distributed ID generator; it builds reference IDs, e.g.
    /// for "messages after this time" queries. Instants before the epoch clamp
    /// to a zero timestamp.
    pub fn generate<Tz: TimeZone>(time: &DateTime<Tz>) -> Self {
        let since_epoch = time
            .timestamp_millis()
            .saturating_sub(DISCORD_EPOCH_MILLIS as i64)
            .max(0) as u64;
        Self::from_components(since_epoch, 0, 0, 0)
    }

    /// Returns the ID as a zero-padded 20-digit string.
    pub fn to_padded_string(&self) -> String {
        format!("{:020}", self.id)
    }

    /// Field breakdown, most significant field first.
    pub const fn fields(&self) -> [FieldLayout; 4] {
        [
            FieldLayout {
                name: "timestamp",
                bits: 42,
                value: self.timestamp(),
            },
            FieldLayout {
                name: "worker_id",
                bits: 5,
                value: self.worker_id() as u64,
            },
            FieldLayout {
                name: "process_id",
                bits: 5,
                value: self.process_id() as u64,
            },
            FieldLayout {
                name: "increment",
                bits: 12,
                value: self.increment() as u64,
            },
        ]
    }

    /// Returns a value whose `Display` draws the bit layout as a table.
    pub const fn layout(&self) -> Layout {
        Layout(*self)
    }
}

impl TryFrom<u64> for Snowflake {
    type Error = Error;

    fn try_from(raw: u64) -> Result<Self> {
        let id = Self::from_raw(raw);
        if !id.is_valid() {
            return Err(Error::InvalidFormat);
        }
        Ok(id)
    }
}

impl From<Snowflake> for u64 {
    fn from(id: Snowflake) -> Self {
        id.id
    }
}

impl FromStr for Snowflake {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return write!(f, "{}", self.layout());
        }
        f.debug_tuple("Snowflake").field(&self.id).finish()
    }
}

/// One bit field of a [`Snowflake`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldLayout {
    /// Field name, e.g. `worker_id`.
    pub name: &'static str,
    /// Width of the field in bits.
    pub bits: u8,
    /// Value of the field, shifted down to bit 0.
    pub value: u64,
}

/// Table rendering of a snowflake's bit layout, see [`Snowflake::layout`].
#[derive(Clone, Copy, Debug)]
pub struct Layout(Snowflake);

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.0;
        let fields = id.fields();

        // Compute max width per column: label, dec, hex
        let columns: Vec<usize> = fields
            .iter()
            .map(|field| {
                let label_len = format!("{} ({})", field.name, field.bits).len();
                let dec_len = field.value.to_string().len();
                let hex_len = format!("0x{:x}", field.value).len();
                label_len.max(dec_len).max(hex_len) + 2
            })
            .collect();

        fn center(s: impl ToString, width: usize) -> String {
            let s = s.to_string();
            let len = s.len();
            if len >= width {
                return s;
            }
            let pad = width - len;
            let left = pad / 2;
            let right = pad - left;
            format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
        }

        fn border(f: &mut fmt::Formatter<'_>, columns: &[usize]) -> fmt::Result {
            write!(f, "        +")?;
            for &w in columns {
                write!(f, "{}+", "-".repeat(w))?;
            }
            writeln!(f)
        }

        writeln!(f, "Snowflake {{")?;
        writeln!(f, "    raw id     : 0x{:016x} ({})", id.id, id.id)?;
        writeln!(f, "    padded     : {}", id.to_padded_string())?;
        writeln!(f, "    created    : {}", id.format_time_in(&Utc))?;
        writeln!(f, "    layout     :")?;

        border(f, &columns)?;
        write!(f, "        |")?;
        for (field, &w) in fields.iter().zip(&columns) {
            write!(f, "{}|", center(format!("{} ({})", field.name, field.bits), w))?;
        }
        writeln!(f)?;
        border(f, &columns)?;

        write!(f, "        |")?;
        for (field, &w) in fields.iter().zip(&columns) {
            write!(f, "{}|", center(field.value, w))?;
        }
        writeln!(f)?;

        write!(f, "        |")?;
        for (field, &w) in fields.iter().zip(&columns) {
            write!(f, "{}|", center(format!("0x{:x}", field.value), w))?;
        }
        writeln!(f)?;
        border(f, &columns)?;

        write!(f, "}}")
    }
}
