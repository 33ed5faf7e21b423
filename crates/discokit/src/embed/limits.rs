use super::Embed;
use core::fmt;

/// Maximum characters in the title.
pub const LIMIT_TITLE: usize = 256;
/// Maximum characters in the description.
pub const LIMIT_DESCRIPTION: usize = 4096;
/// Maximum characters in a field name.
pub const LIMIT_FIELD_NAME: usize = 256;
/// Maximum characters in a field value.
pub const LIMIT_FIELD_VALUE: usize = 1024;
/// Maximum characters in the footer text.
pub const LIMIT_FOOTER_TEXT: usize = 2048;
/// Maximum characters in the author name.
pub const LIMIT_AUTHOR_NAME: usize = 256;
/// Maximum number of fields.
pub const LIMIT_FIELDS_COUNT: usize = 25;
/// Maximum characters across title, description, field names and values,
/// footer text and author name combined.
pub const LIMIT_TOTAL: usize = 6000;

/// A platform limit the embed breaks. Field positions are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LimitExceeded {
    Title,
    Description,
    FooterText,
    AuthorName,
    FieldsCount,
    FieldName(usize),
    FieldValue(usize),
    Total,
}

impl fmt::Display for LimitExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => f.write_str("title"),
            Self::Description => f.write_str("description"),
            Self::FooterText => f.write_str("footer.text"),
            Self::AuthorName => f.write_str("author.name"),
            Self::FieldsCount => f.write_str("fieldsCount"),
            Self::FieldName(n) => write!(f, "field.name:{n}"),
            Self::FieldValue(n) => write!(f, "field.value:{n}"),
            Self::Total => f.write_str("total"),
        }
    }
}

#[derive(Default)]
struct Tally {
    exceeds: Vec<LimitExceeded>,
    total: usize,
}

impl Tally {
    /// Lengths are counted in Unicode scalar values, like the platform does.
    fn check(&mut self, text: &str, limit: usize, exceeded: LimitExceeded) {
        let len = text.chars().count();
        self.total += len;
        if len > limit {
            self.exceeds.push(exceeded);
        }
    }
}

impl Embed {
    /// Every limit this embed breaks, in a stable order: title, description,
    /// footer, author, field count, per-field name/value, total.
    pub fn limit_exceeds(&self) -> Vec<LimitExceeded> {
        let mut tally = Tally::default();

        if let Some(title) = &self.title {
            tally.check(title, LIMIT_TITLE, LimitExceeded::Title);
        }
        if let Some(description) = &self.description {
            tally.check(description, LIMIT_DESCRIPTION, LimitExceeded::Description);
        }
        if let Some(footer) = &self.footer {
            tally.check(&footer.text, LIMIT_FOOTER_TEXT, LimitExceeded::FooterText);
        }
        if let Some(author) = &self.author {
            tally.check(&author.name, LIMIT_AUTHOR_NAME, LimitExceeded::AuthorName);
        }
        if self.fields.len() > LIMIT_FIELDS_COUNT {
            tally.exceeds.push(LimitExceeded::FieldsCount);
        }
        for (i, field) in self.fields.iter().enumerate() {
            tally.check(&field.name, LIMIT_FIELD_NAME, LimitExceeded::FieldName(i + 1));
            tally.check(&field.value, LIMIT_FIELD_VALUE, LimitExceeded::FieldValue(i + 1));
        }
        if tally.total > LIMIT_TOTAL {
            tally.exceeds.push(LimitExceeded::Total);
        }

        tally.exceeds
    }

    /// Whether the embed respects every platform limit.
    pub fn in_limits(&self) -> bool {
        self.limit_exceeds().is_empty()
    }
}
