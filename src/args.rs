use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::api::{DataLocation, DataSource, FetchError, STATS_FILE, TEAMS_FILE};
use crate::model::structures::{
    flag_style::FlagStyle, output_format::OutputFormat, timestamp_policy::TimestampPolicy
};

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "ELO Ranking",
    long_about = "Fetches the team roster and stats documents and renders the ELO ranking table"
)]
pub struct Args {
    /// Directory or URL holding teams.json and stats.json.
    /// Example: https://example.org/elo/data
    #[arg(short, long, env, help = "Location of teams.json and stats.json")]
    pub data_root: Option<String>,

    /// Overrides <data-root>/teams.json
    #[arg(long, env)]
    pub teams_url: Option<String>,

    /// Overrides <data-root>/stats.json
    #[arg(long, env)]
    pub stats_url: Option<String>,

    /// "table" reads the country prefix of the team id (ita/juventus),
    /// "regional-indicator" builds the flag from country_iso2
    #[arg(short, long, env, default_value_t = FlagStyle::default())]
    pub flag_style: FlagStyle,

    /// Show an unparseable last update timestamp verbatim instead of failing
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub timestamp_fallback: bool,

    #[arg(long, env = "OUTPUT_FORMAT", default_value_t = OutputFormat::default(), help = "fragment, page or json")]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Per-request timeout when fetching remote documents
    #[arg(long, env, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}

impl Args {
    pub fn timestamp_policy(&self) -> TimestampPolicy {
        if self.timestamp_fallback {
            TimestampPolicy::RawFallback
        } else {
            TimestampPolicy::Strict
        }
    }

    /// Resolves both document locations. An explicit URL wins over the data
    /// root; a document with neither is a configuration error.
    pub fn data_source(&self) -> Result<DataSource, FetchError> {
        let root = self.data_root.as_deref().map(DataLocation::parse).transpose()?;

        let resolve = |explicit: &Option<String>, file: &str| match (explicit, &root) {
            (Some(raw), _) => DataLocation::parse(raw),
            (None, Some(root)) => root.join(file),
            (None, None) => Err(FetchError::InvalidLocation(format!(
                "no location for {}, set --data-root",
                file
            )))
        };

        DataSource::new(
            resolve(&self.teams_url, TEAMS_FILE)?,
            resolve(&self.stats_url, STATS_FILE)?,
            Duration::from_secs(self.timeout_secs)
        )
    }
}
