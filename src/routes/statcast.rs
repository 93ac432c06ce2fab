use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use chrono::Datelike;

use crate::error::ApiError;
use crate::models::{NoStatcastData, TeamStatcast};
use crate::provider::StatcastProvider;
use crate::stats::aggregate;
use crate::teams;
use crate::AppState;

/// Batters below this many plate appearances are left out upstream.
pub const MIN_PLATE_APPEARANCES: u32 = 50;
/// Runners below this many competitive opportunities are left out upstream.
pub const MIN_SPRINT_OPPORTUNITIES: u32 = 10;

/// Statcast leaderboards barely move within a day.
pub const CACHE_CONTROL: &str = "s-maxage=21600, stale-while-revalidate=3600";

/// Query parameters for the statcast endpoint. Kept as raw strings so bad
/// input can be answered with this API's own error bodies.
#[derive(Debug, Default, PartialEq)]
pub struct StatcastQuery {
    pub team_id: Option<String>,
    pub season: Option<String>,
}

impl StatcastQuery {
    /// Build from raw query pairs. The first occurrence of a repeated key wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "teamId" => &mut query.team_id,
                "season" => &mut query.season,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

/// GET /api/statcast?teamId=147&season=2025 - Team Statcast batting aggregate
///
/// Query params:
/// - teamId: MLB team id (required)
/// - season: year, defaults to the current one
pub async fn get_team_statcast(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(pairs) = query.map_err(|err| {
        tracing::debug!("Rejected statcast query: {}", err);
        ApiError::InvalidParams
    })?;
    let params = StatcastQuery::from_pairs(pairs);

    let team_id = params
        .team_id
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::MissingTeamId)?;
    let season = params
        .season
        .unwrap_or_else(|| chrono::Local::now().year().to_string());

    let (team_id, season) = parse_params(&team_id, &season).ok_or(ApiError::InvalidParams)?;
    let team = teams::abbreviation(team_id).ok_or(ApiError::UnknownTeam(team_id))?;

    let barrels = state
        .provider
        .batter_exit_velo_barrels(season, MIN_PLATE_APPEARANCES)
        .await
        .map_err(|err| ApiError::from_provider(err, team))?;

    if barrels.is_empty() {
        tracing::info!("No Statcast leaderboard for {}", season);
        return Ok(Json(NoStatcastData::League { team_id, season }).into_response());
    }

    let team_rows = aggregate::team_rows(&barrels, team);
    if team_rows.is_empty() {
        tracing::info!("No Statcast rows for {} in {}", team, season);
        return Ok(Json(NoStatcastData::Team { team: team.to_string() }).into_response());
    }

    let summary = aggregate::summarize_batting(&team_rows);
    let sprint_speed = fetch_sprint_speed(state.provider.as_ref(), season, team).await;

    let body = TeamStatcast {
        team_id,
        team: team.to_string(),
        season,
        xwoba: aggregate::round_metric(summary.xwoba, 3),
        barrel_rate: aggregate::round_metric(summary.barrel_rate, 4),
        hard_hit_pct: aggregate::round_metric(summary.hard_hit_pct, 4),
        sprint_speed: aggregate::round_metric(sprint_speed, 2),
        sample_size: summary.sample_size,
    };

    Ok(([(header::CACHE_CONTROL, CACHE_CONTROL)], Json(body)).into_response())
}

/// OPTIONS /api/statcast - CORS preflight
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

fn parse_params(team_id: &str, season: &str) -> Option<(i64, i64)> {
    let team_id = team_id.trim().parse().ok()?;
    let season = season.trim().parse().ok()?;
    Some((team_id, season))
}

/// Sprint speed is supplementary: any failure leaves it absent.
async fn fetch_sprint_speed(provider: &dyn StatcastProvider, season: i64, team: &str) -> Option<f64> {
    match provider.sprint_speed(season, MIN_SPRINT_OPPORTUNITIES).await {
        Ok(frame) => aggregate::team_sprint_speed(&frame, team),
        Err(err) => {
            tracing::warn!("Sprint speed unavailable for {} in {}: {}", team, season, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_params() {
        assert_eq!(parse_params("147", "2025"), Some((147, 2025)));
        assert_eq!(parse_params(" 147 ", "2025"), Some((147, 2025)));
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn repeated_keys_keep_first_value() {
        let query = StatcastQuery::from_pairs(pairs(&[
            ("teamId", "147"),
            ("season", "2024"),
            ("teamId", "111"),
            ("season", "2025"),
            ("extra", "x"),
        ]));

        assert_eq!(query.team_id.as_deref(), Some("147"));
        assert_eq!(query.season.as_deref(), Some("2024"));
    }

    #[test]
    fn absent_keys_stay_unset() {
        assert_eq!(StatcastQuery::from_pairs(Vec::new()), StatcastQuery::default());
    }

    #[test]
    fn rejects_non_integer_params() {
        assert_eq!(parse_params("abc", "2025"), None);
        assert_eq!(parse_params("147", "20x5"), None);
        assert_eq!(parse_params("147.0", "2025"), None);
        assert_eq!(parse_params("147", ""), None);
    }
}
