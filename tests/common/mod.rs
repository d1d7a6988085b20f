use std::{
    path::{Path, PathBuf},
    sync::Once
};

static INIT: Once = Once::new();

/// Initialize test environment with RUST_LOG=WARN
pub fn init_test_env() {
    INIT.call_once(|| {
        std::env::set_var("RUST_LOG", "warn");
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Creates a fresh data directory containing the given documents.
pub fn data_dir(name: &str, teams: Option<&str>, stats: Option<&str>) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("elo-ranking-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    if let Some(teams) = teams {
        std::fs::write(dir.join("teams.json"), teams).unwrap();
    }
    if let Some(stats) = stats {
        std::fs::write(dir.join("stats.json"), stats).unwrap();
    }

    dir
}

pub fn cleanup(dir: &Path) {
    let _ = std::fs::remove_dir_all(dir);
}

pub const TEAMS: &str = r#"[
    {"id": "ita/atalanta", "name": "Atalanta", "elo": 1400, "country_iso2": "IT"},
    {"id": "esp/barcelona", "name": "Barcelona", "elo": 1600.04, "country_iso2": "ES"},
    {"id": "xyz/celtic", "name": "Celtic <FC>", "elo": 1600.04},
    {"id": "ger/dortmund", "name": "Dortmund", "elo": 1499.95, "country_iso2": "DE"}
]"#;

pub const STATS: &str = r#"{"last_update": "2025-10-29T20:22:00"}"#;
