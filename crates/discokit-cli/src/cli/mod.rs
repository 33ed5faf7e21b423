pub mod config;
pub mod report;
pub mod telemetry;
#[cfg(test)]
mod tests;

use anyhow::Context;
use chrono::Utc;
use config::{Config, OutputFormat, Task};
use discokit::{Mention, Snowflake};
use report::{FailureReport, MentionReport, SnowflakeReport, emit};
use std::io::Write;

/// Executes the configured task, writing reports to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<()> {
    match &config.task {
        Task::Mention { tokens, keep_going } => {
            mentions(out, config.format, config.utc, tokens, *keep_going)
        }
        Task::Snowflake { ids, layout } => {
            for &id in ids {
                emit(out, config.format, &SnowflakeReport::new(id, config.utc, *layout))?;
            }
            Ok(())
        }
        Task::Generate { at } => {
            let at = at.unwrap_or_else(|| Utc::now().fixed_offset());
            let id = Snowflake::generate(&at);
            if !id.is_valid() {
                tracing::warn!(%at, "instant is not after the discord epoch, clamped to zero");
            }
            emit(out, config.format, &SnowflakeReport::new(id, config.utc, false))
        }
    }
}

fn mentions<W: Write>(
    out: &mut W,
    format: OutputFormat,
    utc: bool,
    tokens: &[String],
    keep_going: bool,
) -> anyhow::Result<()> {
    for token in tokens {
        match Mention::parse(token) {
            Ok(mention) => emit(out, format, &MentionReport::new(token, &mention, utc))?,
            Err(err) if keep_going => {
                tracing::warn!(token = token.as_str(), %err, "skipping token");
                let failure = FailureReport {
                    input: token,
                    error: err.to_string(),
                };
                emit(out, format, &failure)?;
            }
            Err(err) => return Err(err).with_context(|| format!("`{token}`")),
        }
    }
    Ok(())
}
