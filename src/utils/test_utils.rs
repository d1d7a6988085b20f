use crate::api::api_structs::{StatsRecord, TeamRecord};

/// A team with no country information, identified by its name.
pub fn team(name: &str, elo: f64) -> TeamRecord {
    TeamRecord::new(&name.to_lowercase(), name, elo, None)
}

pub fn stats(last_update: &str) -> StatsRecord {
    StatsRecord {
        last_update: last_update.to_string()
    }
}

/// Generates `n` teams with deterministic, unordered ratings. Every fifth
/// team shares its rating with the one before it.
pub fn generate_teams(n: usize) -> Vec<TeamRecord> {
    let prefixes = ["ita", "esp", "eng", "ger", "fra"];
    let iso2 = ["IT", "ES", "GB", "DE", "FR"];

    let mut teams: Vec<TeamRecord> = Vec::with_capacity(n);
    for i in 0..n {
        let elo = match teams.last() {
            Some(prev) if i % 5 == 4 => prev.elo,
            _ => 1200.0 + ((i * 7919) % 800) as f64 + (i % 10) as f64 * 0.05
        };

        teams.push(TeamRecord::new(
            &format!("{}/team-{}", prefixes[i % prefixes.len()], i),
            &format!("Team {}", i),
            elo,
            Some(iso2[i % iso2.len()])
        ));
    }

    teams
}
