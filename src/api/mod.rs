pub mod api_structs;

use std::{
    fmt,
    path::{Path, PathBuf},
    time::Duration
};

use reqwest::{Client, ClientBuilder, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};

use crate::api::api_structs::{DataFormatError, StatsRecord, TeamDTO, TeamRecord};

pub const TEAMS_FILE: &str = "teams.json";
pub const STATS_FILE: &str = "stats.json";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} responded with status {status}")]
    Status { url: Url, status: reqwest::StatusCode },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },

    #[error("Failed to parse {location} as JSON: {source}")]
    Json {
        location: DataLocation,
        #[source]
        source: serde_json::Error
    },

    #[error(transparent)]
    DataFormat(#[from] DataFormatError),

    #[error("Invalid data location '{0}'")]
    InvalidLocation(String)
}

/// Where a single JSON document lives.
#[derive(Debug, Clone, PartialEq)]
pub enum DataLocation {
    Remote(Url),
    Local(PathBuf)
}

impl DataLocation {
    /// Interprets `http://` and `https://` strings (any case) as URLs and
    /// everything else as a filesystem path.
    pub fn parse(raw: &str) -> Result<DataLocation, FetchError> {
        if raw.trim().is_empty() {
            return Err(FetchError::InvalidLocation(raw.to_string()));
        }

        let lower = raw.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(raw).map_err(|_| FetchError::InvalidLocation(raw.to_string()))?;
            return Ok(DataLocation::Remote(url));
        }

        Ok(DataLocation::Local(PathBuf::from(raw)))
    }

    /// Resolves `file` relative to this location, treating it as a directory.
    pub fn join(&self, file: &str) -> Result<DataLocation, FetchError> {
        match self {
            DataLocation::Remote(url) => {
                let mut base = url.clone();
                if !base.path().ends_with('/') {
                    base.set_path(&format!("{}/", base.path()));
                }

                base.join(file)
                    .map(DataLocation::Remote)
                    .map_err(|_| FetchError::InvalidLocation(format!("{}{}", base, file)))
            }
            DataLocation::Local(dir) => Ok(DataLocation::Local(dir.join(file)))
        }
    }
}

impl fmt::Display for DataLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataLocation::Remote(url) => write!(f, "{}", url),
            DataLocation::Local(path) => write!(f, "{}", path.display())
        }
    }
}

/// The pair of documents a render needs.
#[derive(Debug, Clone)]
pub struct DataSource {
    pub teams: DataLocation,
    pub stats: DataLocation,
    client: Client
}

impl DataSource {
    pub fn new(teams: DataLocation, stats: DataLocation, timeout: Duration) -> Result<DataSource, FetchError> {
        Ok(DataSource {
            teams,
            stats,
            client: client(timeout)?
        })
    }

    /// Both documents under a common root, using the standard file names.
    pub fn from_root(root: &DataLocation, timeout: Duration) -> Result<DataSource, FetchError> {
        DataSource::new(root.join(TEAMS_FILE)?, root.join(STATS_FILE)?, timeout)
    }

    /// Loads both documents concurrently. Either one failing fails the whole
    /// load; there is no partial result and no retry.
    pub async fn fetch_all(&self) -> Result<(Vec<TeamRecord>, StatsRecord), FetchError> {
        info!("Fetching ranking data from {} and {}", self.teams, self.stats);

        let (teams, stats) = tokio::try_join!(self.fetch_teams(), self.fetch_stats())?;

        info!("Fetched {} teams", teams.len());
        Ok((teams, stats))
    }

    pub async fn fetch_teams(&self) -> Result<Vec<TeamRecord>, FetchError> {
        let dtos: Vec<TeamDTO> = self.fetch_json(&self.teams).await?;

        dtos.into_iter()
            .map(|dto| TeamRecord::try_from(dto).map_err(FetchError::from))
            .collect()
    }

    pub async fn fetch_stats(&self) -> Result<StatsRecord, FetchError> {
        self.fetch_json(&self.stats).await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, location: &DataLocation) -> Result<T, FetchError> {
        let body = match location {
            DataLocation::Remote(url) => self.fetch_remote(url).await?,
            DataLocation::Local(path) => read_local(path).await?
        };

        serde_json::from_slice(&body).map_err(|source| FetchError::Json {
            location: location.clone(),
            source
        })
    }

    async fn fetch_remote(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: url.clone(), status });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

async fn read_local(path: &Path) -> Result<Vec<u8>, FetchError> {
    debug!("Reading {}", path.display());

    tokio::fs::read(path).await.map_err(|source| FetchError::Io {
        path: path.to_path_buf(),
        source
    })
}

fn client(timeout: Duration) -> Result<Client, FetchError> {
    Ok(ClientBuilder::new()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?)
}
