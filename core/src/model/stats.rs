use serde::{Deserialize, Serialize};

/// Aggregate performance over a set of games. All rates are 0 for an empty set.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    /// Overtime and shootout losses combined.
    pub ot_losses: u32,
    pub shots_against: u64,
    pub goals_allowed: u64,
    // Signed: unvalidated records may allow more goals than shots.
    pub saves: i64,
    pub save_percentage: f64,
    /// Goals allowed per game played, not normalized to 60 minutes.
    pub gaa: f64,
    /// Games with zero goals allowed, regardless of result.
    pub shutouts: u32,
    pub win_percentage: f64,
}

impl Stats {
    pub fn record(&self) -> String {
        crate::service::format::record_string(self)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueStats {
    pub league: String,
    #[serde(flatten)]
    pub stats: Stats,
}
