/// MLB team id → Statcast team abbreviation.
#[rustfmt::skip]
const TEAMS: &[(i64, &str)] = &[
    (108, "LAA"), (109, "ARI"), (110, "BAL"), (111, "BOS"), (112, "CHC"),
    (113, "CIN"), (114, "CLE"), (115, "COL"), (116, "DET"), (117, "HOU"),
    (118, "KC"),  (119, "LAD"), (120, "WSH"), (121, "NYM"), (133, "OAK"),
    (134, "PIT"), (135, "SD"),  (136, "SEA"), (137, "SF"),  (138, "STL"),
    (139, "TB"),  (140, "TEX"), (141, "TOR"), (142, "MIN"), (143, "PHI"),
    (144, "ATL"), (145, "CWS"), (146, "MIA"), (147, "NYY"), (158, "MIL"),
];

/// Look up the Statcast abbreviation for an MLB team id.
pub fn abbreviation(team_id: i64) -> Option<&'static str> {
    TEAMS
        .iter()
        .find(|(id, _)| *id == team_id)
        .map(|(_, abbr)| *abbr)
}

pub fn all() -> &'static [(i64, &'static str)] {
    TEAMS
}
