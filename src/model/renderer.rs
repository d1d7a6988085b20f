use std::cmp::Ordering;

use itertools::Itertools;
use tracing::{debug, warn};

use crate::{
    api::api_structs::{StatsRecord, TeamRecord},
    model::{
        flags::{flag_lookup, FlagLookup},
        formatting::{format_rating, format_timestamp, FormatError},
        structures::{
            display_row::{DisplayRow, RenderedTable},
            flag_style::FlagStyle,
            timestamp_policy::TimestampPolicy
        }
    }
};

/// Turns a team roster and its stats blob into ranked display rows.
///
/// Rendering is pure: the inputs are only read, and every call builds a fresh
/// [`RenderedTable`].
pub struct RankingTableRenderer {
    flags: Box<dyn FlagLookup + Send + Sync>,
    timestamp_policy: TimestampPolicy
}

impl Default for RankingTableRenderer {
    fn default() -> Self {
        Self::new(FlagStyle::default(), TimestampPolicy::default())
    }
}

impl RankingTableRenderer {
    pub fn new(flag_style: FlagStyle, timestamp_policy: TimestampPolicy) -> RankingTableRenderer {
        Self::with_flags(flag_lookup(flag_style), timestamp_policy)
    }

    pub fn with_flags(
        flags: Box<dyn FlagLookup + Send + Sync>,
        timestamp_policy: TimestampPolicy
    ) -> RankingTableRenderer {
        RankingTableRenderer {
            flags,
            timestamp_policy
        }
    }

    /// # Ranking table rendering
    ///
    /// 1. Format `stats.last_update`, applying the timestamp policy on failure.
    /// 2. Stable sort by rating, highest first. Teams with equal ratings keep
    ///    their input order.
    /// 3. Number the sorted teams from 1 and format each row.
    pub fn render(&self, teams: &[TeamRecord], stats: &StatsRecord) -> Result<RenderedTable, FormatError> {
        let last_update = self.last_update(stats)?;

        let rows = teams
            .iter()
            .sorted_by(|a, b| b.elo.partial_cmp(&a.elo).unwrap_or(Ordering::Equal))
            .enumerate()
            .map(|(i, team)| self.row(i + 1, team))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Rendered {} rows, last update {}", rows.len(), last_update);

        Ok(RenderedTable { last_update, rows })
    }

    fn last_update(&self, stats: &StatsRecord) -> Result<String, FormatError> {
        match (format_timestamp(&stats.last_update), self.timestamp_policy) {
            (Ok(formatted), _) => Ok(formatted),
            (Err(e), TimestampPolicy::RawFallback) => {
                warn!("{}, showing it unformatted", e);
                Ok(stats.last_update.clone())
            }
            (Err(e), TimestampPolicy::Strict) => Err(e)
        }
    }

    fn row(&self, rank: usize, team: &TeamRecord) -> Result<DisplayRow, FormatError> {
        let rating = format_rating(team.elo).ok_or_else(|| FormatError::Rating {
            team_id: team.id.clone(),
            value: team.elo
        })?;

        Ok(DisplayRow {
            rank,
            flag: self.flags.flag_for(team),
            name: team.name.clone(),
            rating
        })
    }
}
