use super::config::OutputFormat;
use chrono::Utc;
use discokit::{Mention, Snowflake};
use serde::Serialize;
use std::io::Write;

/// Human-readable rendering of a report.
pub trait TextReport {
    fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()>;
}

/// Writes `report` in the requested format. JSON reports are one object per
/// line.
pub fn emit<W, R>(out: &mut W, format: OutputFormat, report: &R) -> anyhow::Result<()>
where
    W: Write,
    R: Serialize + TextReport,
{
    match format {
        OutputFormat::Text => report.write_text(out)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn render_time(id: Snowflake, utc: bool) -> String {
    if utc {
        id.format_time_in(&Utc)
    } else {
        id.format_time()
    }
}

fn row<W: Write>(out: &mut W, label: &str, value: impl std::fmt::Display) -> std::io::Result<()> {
    writeln!(out, "  {label:<22} {value}")
}

#[derive(Debug, Serialize)]
pub struct MentionReport<'a> {
    pub input: &'a str,
    #[serde(flatten)]
    pub mention: &'a Mention,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    pub canonical: String,
}

impl<'a> MentionReport<'a> {
    pub fn new(input: &'a str, mention: &'a Mention, utc: bool) -> Self {
        Self {
            input,
            mention,
            created: mention.id().map(|id| render_time(id, utc)),
            canonical: mention.to_text(),
        }
    }
}

impl TextReport for MentionReport<'_> {
    fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.input)?;
        row(out, "kind", self.mention.kind())?;
        if let Some(id) = self.mention.id() {
            row(out, "id", id)?;
        }
        if let Some(created) = &self.created {
            row(out, "created", created)?;
        }
        for (key, value) in self.mention.attributes() {
            row(out, key.name(), value)?;
        }
        row(out, "canonical", &self.canonical)
    }
}

/// A token that did not parse, reported under `--keep-going`.
#[derive(Debug, Serialize)]
pub struct FailureReport<'a> {
    pub input: &'a str,
    pub error: String,
}

impl TextReport for FailureReport<'_> {
    fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.input)?;
        row(out, "error", &self.error)
    }
}

#[derive(Debug, Serialize)]
pub struct SnowflakeReport {
    pub id: Snowflake,
    pub created: String,
    pub unix_millis: u64,
    pub timestamp: u64,
    pub worker_id: u8,
    pub process_id: u8,
    pub increment: u16,
    #[serde(skip)]
    pub layout: bool,
}

impl SnowflakeReport {
    pub fn new(id: Snowflake, utc: bool, layout: bool) -> Self {
        Self {
            id,
            created: render_time(id, utc),
            unix_millis: id.unix_millis(),
            timestamp: id.timestamp(),
            worker_id: id.worker_id(),
            process_id: id.process_id(),
            increment: id.increment(),
            layout,
        }
    }
}

impl TextReport for SnowflakeReport {
    fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.id)?;
        row(out, "created", &self.created)?;
        row(out, "timestamp", self.timestamp)?;
        row(out, "worker_id", self.worker_id)?;
        row(out, "process_id", self.process_id)?;
        row(out, "increment", self.increment)?;
        if self.layout {
            writeln!(out, "{}", self.id.layout())?;
        }
        Ok(())
    }
}
