use crate::Snowflake;
use core::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Snowflakes travel as decimal strings, since 64-bit integers do not survive
/// JSON parsers that store numbers as doubles.
impl Serialize for Snowflake {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(self)
    }
}

/// Accepts either a decimal string or an integer. Both forms go through the
/// epoch check.
impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_any(SnowflakeVisitor)
    }
}

struct SnowflakeVisitor;

impl de::Visitor<'_> for SnowflakeVisitor {
    type Value = Snowflake;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a snowflake as a decimal string or an unsigned integer")
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Snowflake::parse(v).map_err(de::Error::custom)
    }

    #[inline]
    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Snowflake::try_from(v).map_err(de::Error::custom)
    }

    #[inline]
    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let v = u64::try_from(v).map_err(|_| de::Error::custom(crate::Error::InvalidFormat))?;
        self.visit_u64(v)
    }
}

pub mod as_native_snowflake {
    use super::{Deserialize, Deserializer, Serialize, Serializer};
    use crate::Snowflake;

    /// Serialize a snowflake as its native integer representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &Snowflake, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.to_raw().serialize(s)
    }

    /// Deserialize a snowflake from its native integer representation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The value decodes to a creation time at or before the epoch
    pub fn deserialize<'de, D>(d: D) -> Result<Snowflake, D::Error>
    where
        D: Deserializer<'de>,
    {
        let n = u64::deserialize(d)?;
        Snowflake::try_from(n).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::json;

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct Row {
        id: Snowflake,
    }

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct NativeRow {
        #[serde(with = "as_native_snowflake")]
        id: Snowflake,
    }

    #[test]
    fn string_roundtrip() {
        let row = Row {
            id: Snowflake::from_raw(80_351_110_224_678_912),
        };
        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, r#"{"id":"80351110224678912"}"#);
        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn accepts_integer() {
        let row: Row = serde_json::from_value(json!({"id": 80_351_110_224_678_912u64}))
            .expect("deserialize");
        assert_eq!(row.id.to_raw(), 80_351_110_224_678_912);
    }

    #[test]
    fn rejects_epoch_values() {
        for value in [json!({"id": "22"}), json!({"id": 22}), json!({"id": -5})] {
            let err = serde_json::from_value::<Row>(value).expect_err("should fail");
            assert_eq!(err.to_string(), Error::InvalidFormat.to_string());
        }
    }

    #[test]
    fn native_roundtrip() {
        let row = NativeRow {
            id: Snowflake::from_raw(1_218_325_944_931_192_904),
        };
        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, r#"{"id":1218325944931192904}"#);
        let back: NativeRow = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn native_rejects_zero() {
        let err = serde_json::from_value::<NativeRow>(json!({"id": 0})).expect_err("should fail");
        assert_eq!(err.to_string(), Error::InvalidFormat.to_string());
    }
}
