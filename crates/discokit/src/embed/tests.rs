use crate::{
    DEFAULT_COLOR, Embed, EmbedBuilder, EmbedField, EmbedKind, Error, LIMIT_DESCRIPTION,
    LIMIT_FIELD_VALUE, LIMIT_FIELDS_COUNT, LIMIT_TITLE, LimitExceeded, inline,
};
use chrono::{FixedOffset, TimeZone, Utc};

fn text(len: usize) -> String {
    "x".repeat(len)
}

#[test]
fn new_builder_defaults() {
    let embed = EmbedBuilder::new().build();
    assert_eq!(embed.kind, Some(EmbedKind::Rich));
    assert_eq!(embed.color, Some(DEFAULT_COLOR));
    assert_eq!(embed.title, None);
    assert!(embed.fields.is_empty());
    assert_eq!(EmbedBuilder::default(), EmbedBuilder::new());
}

#[test]
fn reset_clears_defaults_too() {
    let embed = EmbedBuilder::new().title("gone").reset().build();
    assert_eq!(embed, Embed::default());
}

#[test]
fn setters_fill_fields() {
    let embed = EmbedBuilder::new()
        .kind(EmbedKind::Article)
        .title("Title")
        .description("Body")
        .url("https://example.com")
        .color(0x00FF00)
        .image("https://example.com/a.png", "https://proxy/a.png", 10, 20)
        .thumbnail_simple("https://example.com/t.png")
        .video("https://example.com/v.mp4", "https://proxy/v.mp4", 720, 1280)
        .provider("Example", "https://example.com")
        .author_simple("someone")
        .footer("foot", "https://example.com/i.png", "https://proxy/i.png")
        .field("a", "1", true)
        .field("b", "2", false)
        .build();

    assert_eq!(embed.kind, Some(EmbedKind::Article));
    assert_eq!(embed.title.as_deref(), Some("Title"));
    assert_eq!(embed.description.as_deref(), Some("Body"));
    assert_eq!(embed.color, Some(0x00FF00));

    let image = embed.image.expect("image");
    assert_eq!(image.proxy_url.as_deref(), Some("https://proxy/a.png"));
    assert_eq!((image.height, image.width), (Some(10), Some(20)));

    let thumbnail = embed.thumbnail.expect("thumbnail");
    assert_eq!(thumbnail.url, "https://example.com/t.png");
    assert_eq!(thumbnail.proxy_url, None);

    let video = embed.video.expect("video");
    assert_eq!(video.proxy_url.as_deref(), Some("https://proxy/v.mp4"));

    assert_eq!(embed.provider.and_then(|p| p.name).as_deref(), Some("Example"));
    assert_eq!(embed.author.expect("author").name, "someone");
    assert_eq!(embed.footer.expect("footer").text, "foot");
    assert_eq!(
        embed.fields,
        [
            EmbedField {
                name: "a".into(),
                value: "1".into(),
                inline: true
            },
            EmbedField {
                name: "b".into(),
                value: "2".into(),
                inline: false
            },
        ]
    );
}

#[test]
fn timestamp_keeps_offset() {
    let tz = FixedOffset::east_opt(4 * 3600).unwrap();
    let time = tz.with_ymd_and_hms(2024, 3, 16, 2, 32, 20).unwrap();
    let embed = EmbedBuilder::new().timestamp(&time).build();
    assert_eq!(embed.timestamp.as_deref(), Some("2024-03-16T02:32:20+04:00"));

    let utc = Utc.with_ymd_and_hms(2021, 4, 20, 21, 20, 30).unwrap();
    let embed = EmbedBuilder::new().timestamp(&utc).build();
    assert_eq!(embed.timestamp.as_deref(), Some("2021-04-20T21:20:30Z"));
}

#[test]
fn limits_at_boundary_pass() {
    let builder = EmbedBuilder::new()
        .title(text(LIMIT_TITLE))
        .description(text(LIMIT_DESCRIPTION));
    assert!(builder.in_limits());
    assert!(builder.try_build().is_ok());
}

#[test]
fn limits_count_chars_not_bytes() {
    let builder = EmbedBuilder::new().title("é".repeat(LIMIT_TITLE));
    assert!(builder.in_limits());
}

#[test]
fn reports_each_exceeded_limit() {
    let builder = EmbedBuilder::new()
        .title(text(LIMIT_TITLE + 1))
        .field("ok", "ok", false)
        .field("ok", text(LIMIT_FIELD_VALUE + 1), false);
    assert_eq!(
        builder.limit_exceeds(),
        [LimitExceeded::Title, LimitExceeded::FieldValue(2)]
    );
    assert!(!builder.in_limits());
}

#[test]
fn reports_total_and_field_count() {
    let mut builder = EmbedBuilder::new().description(text(LIMIT_DESCRIPTION));
    for _ in 0..=LIMIT_FIELDS_COUNT {
        builder = builder.field("name", text(100), true);
    }
    assert_eq!(
        builder.limit_exceeds(),
        [LimitExceeded::FieldsCount, LimitExceeded::Total]
    );
}

#[test]
fn limit_check_does_not_accumulate() {
    let builder = EmbedBuilder::new().description(text(3000));
    assert!(builder.in_limits());
    assert!(builder.in_limits());
    assert!(builder.limit_exceeds().is_empty());
}

#[test]
fn try_build_lists_violations() {
    let err = EmbedBuilder::new()
        .footer_simple(text(3000))
        .author_simple(text(300))
        .try_build()
        .unwrap_err();
    assert_eq!(
        err,
        Error::EmbedLimits(vec![LimitExceeded::FooterText, LimitExceeded::AuthorName])
    );
    assert_eq!(
        err.to_string(),
        "embed exceeds limits: footer.text, author.name"
    );
}

#[test]
fn inline_embed() {
    let embed = inline("hello", None);
    assert_eq!(embed.title.as_deref(), Some("hello"));
    assert_eq!(embed.color, Some(DEFAULT_COLOR));
    assert_eq!(inline("hello", Some(0xFF0000)).color, Some(0xFF0000));
}

#[cfg(feature = "serde")]
#[test]
fn serializes_platform_shape() {
    let embed = EmbedBuilder::new()
        .title("hi")
        .field("a", "1", true)
        .build();
    let json = serde_json::to_value(&embed).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "type": "rich",
            "title": "hi",
            "color": 0xFFFFFF,
            "fields": [{"name": "a", "value": "1", "inline": true}]
        })
    );
    let back: Embed = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, embed);
}
