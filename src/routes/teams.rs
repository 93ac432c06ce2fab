use axum::response::Json;

use crate::models::TeamEntry;
use crate::teams;

// GET /api/teams - List the MLB teams the statcast endpoint accepts
pub async fn get_teams() -> Json<Vec<TeamEntry>> {
    let entries = teams::all()
        .iter()
        .map(|(team_id, abbreviation)| TeamEntry {
            team_id: *team_id,
            abbreviation: abbreviation.to_string(),
        })
        .collect();

    Json(entries)
}
