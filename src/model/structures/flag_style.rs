use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Which strategy turns a team into a flag prefix.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum FlagStyle {
    /// Static table keyed by the country prefix of the team id
    Table,
    /// Regional indicator pair built from the ISO 3166 alpha-2 code
    #[default]
    RegionalIndicator
}
