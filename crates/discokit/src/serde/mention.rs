use crate::{Attribute, Error, Mention, MentionKind, Snowflake};
use serde::{Deserialize, Deserializer, de};
use std::collections::BTreeMap;

/// Wire shape of a [`Mention`], checked against its kind before it becomes
/// one.
#[derive(Deserialize)]
struct RawMention {
    kind: MentionKind,
    #[serde(default)]
    id: Option<Snowflake>,
    #[serde(default)]
    attributes: BTreeMap<Attribute, String>,
}

/// Rejects mentions that [`Mention::is_complete`] would flag: an ID on a kind
/// that takes none, or a missing ID or required attribute.
impl<'de> Deserialize<'de> for Mention {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawMention::deserialize(d)?;
        let mention = Mention::new(raw.kind, raw.id, raw.attributes);
        if !mention.is_complete() {
            return Err(de::Error::custom(Error::MismatchedMention(raw.kind)));
        }
        Ok(mention)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rejected(value: serde_json::Value) -> String {
        serde_json::from_value::<Mention>(value)
            .expect_err("should fail")
            .to_string()
    }

    #[test]
    fn accepts_complete_mentions() {
        let m: Mention = serde_json::from_value(json!({
            "kind": "timestamp_styled",
            "attributes": {"timestamp": "1618953630", "style": "R"}
        }))
        .expect("deserialize");
        assert!(m.is_complete());
        assert_eq!(m.to_text(), "<t:1618953630:R>");
        assert_eq!(Mention::parse(&m.to_text()), Ok(m));
    }

    #[test]
    fn rejects_id_on_kind_without_one() {
        let err = rejected(json!({
            "kind": "timestamp",
            "id": "80351110224678912",
            "attributes": {"timestamp": "1"}
        }));
        assert_eq!(
            err,
            Error::MismatchedMention(MentionKind::Timestamp).to_string()
        );
    }

    #[test]
    fn rejects_missing_id() {
        let err = rejected(json!({"kind": "user"}));
        assert_eq!(err, Error::MismatchedMention(MentionKind::User).to_string());
    }

    #[test]
    fn rejects_missing_attribute() {
        let err = rejected(json!({"kind": "emoji", "id": "216154654256398347"}));
        assert_eq!(
            err,
            Error::MismatchedMention(MentionKind::CustomEmoji).to_string()
        );
    }

    #[test]
    fn rejects_invalid_id() {
        assert_eq!(
            rejected(json!({"kind": "role", "id": "22"})),
            Error::InvalidFormat.to_string()
        );
    }
}
