use serde::{Deserialize, Serialize};

/// Team-level Statcast batting aggregate for one season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatcast {
    pub team_id: i64,
    pub team: String,
    pub season: i64,
    #[serde(rename = "xwOBA")]
    pub xwoba: Option<f64>,
    pub barrel_rate: Option<f64>,
    pub hard_hit_pct: Option<f64>,
    pub sprint_speed: Option<f64>,
    pub sample_size: i64,
}

/// Soft errors: a valid query with nothing to report. Served with 200 so
/// callers can tell "no data yet" apart from a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "error")]
pub enum NoStatcastData {
    /// The league-wide leaderboard is empty, e.g. a season not yet played.
    #[serde(rename = "NO_DATA", rename_all = "camelCase")]
    League { team_id: i64, season: i64 },

    #[serde(rename = "NO_TEAM_DATA")]
    Team { team: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamEntry {
    pub team_id: i64,
    pub abbreviation: String,
}
