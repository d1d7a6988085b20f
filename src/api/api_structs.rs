use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A team's `elo` field held something other than a JSON number.
#[derive(Debug, Error, PartialEq)]
#[error("Team '{team_id}' has a non-numeric elo value: {value}")]
pub struct DataFormatError {
    pub team_id: String,
    pub value: String
}

/// One entry of `teams.json`, exactly as it arrives over the wire.
///
/// `elo` is kept untyped so that a bad rating surfaces as a [`DataFormatError`]
/// naming the offending team instead of an anonymous serde error.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamDTO {
    pub id: String,
    pub name: String,
    pub elo: Value,
    #[serde(default)]
    pub country_iso2: Option<String>
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamRecord {
    /// Opaque identifier. The first `/` separated component is the team's
    /// country code for the lookup-table flag style, e.g. `ita/juventus`.
    pub id: String,
    pub name: String,
    pub elo: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_iso2: Option<String>
}

impl TeamRecord {
    pub fn new(id: &str, name: &str, elo: f64, country_iso2: Option<&str>) -> TeamRecord {
        TeamRecord {
            id: id.to_string(),
            name: name.to_string(),
            elo,
            country_iso2: country_iso2.map(str::to_string)
        }
    }

    /// First `/` separated component of `id`; the whole id when it has no
    /// `/`. `None` only when that component is empty.
    pub fn id_prefix(&self) -> Option<&str> {
        self.id.split('/').next().filter(|p| !p.is_empty())
    }
}

impl TryFrom<TeamDTO> for TeamRecord {
    type Error = DataFormatError;

    fn try_from(dto: TeamDTO) -> Result<Self, Self::Error> {
        let elo = match &dto.elo {
            Value::Number(n) => n.as_f64(),
            _ => None
        };

        match elo {
            Some(elo) => Ok(TeamRecord {
                id: dto.id,
                name: dto.name,
                elo,
                country_iso2: dto.country_iso2
            }),
            None => Err(DataFormatError {
                team_id: dto.id,
                value: dto.elo.to_string()
            })
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsRecord {
    /// ISO-8601 timestamp of the last data refresh
    pub last_update: String
}
