use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand, ValueEnum};
use discokit::Snowflake;

/// Command-line arguments for the `discokit` binary.
///
/// Global options can also come from the environment or a `.env` file.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "discokit",
    version,
    about = "Decode Discord mention tokens and snowflake IDs"
)]
pub struct CliArgs {
    /// Output format.
    ///
    /// `json` prints one JSON object per line.
    ///
    /// Environment variable: `DISCOKIT_FORMAT`
    #[arg(
        long,
        global = true,
        env = "DISCOKIT_FORMAT",
        value_enum,
        default_value_t = OutputFormat::Text
    )]
    pub format: OutputFormat,

    /// Render times in UTC instead of the local offset.
    ///
    /// Environment variable: `DISCOKIT_UTC`
    #[arg(long, global = true, env = "DISCOKIT_UTC", default_value_t = false)]
    pub utc: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Parse mention tokens such as `<@80351110224678912>`.
    Mention {
        #[arg(required = true, value_name = "TOKEN")]
        tokens: Vec<String>,

        /// Report tokens that are not mentions and carry on instead of
        /// stopping at the first one.
        #[arg(long, default_value_t = false)]
        keep_going: bool,
    },
    /// Decode snowflake IDs.
    Snowflake {
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,

        /// Also draw the bit layout.
        #[arg(long, default_value_t = false)]
        layout: bool,
    },
    /// Build the smallest snowflake for an instant.
    Generate {
        /// RFC 3339 instant, e.g. `2024-03-15T22:32:20Z`. Defaults to now.
        #[arg(long, value_name = "RFC3339")]
        at: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Validated form of [`CliArgs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    pub utc: bool,
    pub task: Task,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Mention {
        tokens: Vec<String>,
        keep_going: bool,
    },
    Snowflake {
        ids: Vec<Snowflake>,
        layout: bool,
    },
    Generate {
        at: Option<DateTime<FixedOffset>>,
    },
}

impl TryFrom<CliArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let task = match args.command {
            Command::Mention { tokens, keep_going } => Task::Mention { tokens, keep_going },
            Command::Snowflake { ids, layout } => {
                let ids = ids
                    .iter()
                    .map(|id| {
                        Snowflake::parse(id).with_context(|| format!("invalid snowflake `{id}`"))
                    })
                    .collect::<anyhow::Result<_>>()?;
                Task::Snowflake { ids, layout }
            }
            Command::Generate { at } => {
                let at = at
                    .as_deref()
                    .map(|at| {
                        DateTime::parse_from_rfc3339(at)
                            .with_context(|| format!("invalid RFC 3339 time `{at}`"))
                    })
                    .transpose()?;
                Task::Generate { at }
            }
        };

        Ok(Self {
            format: args.format,
            utc: args.utc,
            task,
        })
    }
}
