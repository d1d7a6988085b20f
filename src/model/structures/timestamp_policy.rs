use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// What a render does with a `last_update` value it cannot parse.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TimestampPolicy {
    /// Fail the whole render
    #[default]
    Strict,
    /// Show the raw string in place of the formatted one
    RawFallback
}
