use super::frame::Frame;

// Candidate column names, highest priority first. Savant has renamed several of
// these between leaderboard versions.
pub const TEAM_COLUMNS: &[&str] = &["team_name_alt", "team"];
pub const WEIGHT_COLUMNS: &[&str] = &["pa", "attempts"];
pub const XWOBA_COLUMNS: &[&str] = &["xwoba", "est_woba"];
pub const BARREL_COLUMNS: &[&str] = &["brl_percent"];
pub const HARD_HIT_COLUMNS: &[&str] = &["hard_hit_percent", "ev95percent"];
pub const SPRINT_TEAM_COLUMNS: &[&str] = &["team"];
pub const SPEED_COLUMNS: &[&str] = &["hp_to_1b", "sprint_speed"];

/// Team-level batting aggregate before rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct BattingSummary {
    pub xwoba: Option<f64>,
    pub barrel_rate: Option<f64>,
    pub hard_hit_pct: Option<f64>,
    /// Summed plate appearances, or the row count when no weight column exists.
    pub sample_size: i64,
}

/// Rows belonging to `abbr`.
///
/// Tries an exact match on the first team column present, then falls back to a
/// substring match on the same column. A frame without any team column yields
/// no rows.
pub fn team_rows(frame: &Frame, abbr: &str) -> Frame {
    let Some(col) = frame.find_column(TEAM_COLUMNS) else {
        return Frame::default();
    };

    let exact = frame.filter_by_text(col, |team| team == abbr);
    if !exact.is_empty() {
        return exact;
    }

    frame.filter_by_text(col, |team| team.contains(abbr))
}

/// Unweighted mean of the numeric cells in `col`.
pub fn mean(frame: &Frame, col: usize) -> Option<f64> {
    let (sum, count) = (0..frame.len())
        .filter_map(|row| frame.number(row, col))
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    (count > 0).then(|| sum / count as f64)
}

/// Average of `value_col` weighted by `weight_col`.
///
/// Only rows carrying both a value and a weight contribute. Falls back to the
/// plain mean when there is no weight column or the weights sum to zero.
pub fn weighted_average(
    frame: &Frame,
    value_col: Option<usize>,
    weight_col: Option<usize>,
) -> Option<f64> {
    let value_col = value_col?;
    let Some(weight_col) = weight_col else {
        return mean(frame, value_col);
    };

    let (weighted, total_weight) = (0..frame.len())
        .filter_map(|row| Some((frame.number(row, value_col)?, frame.number(row, weight_col)?)))
        .fold((0.0, 0.0), |(weighted, total), (value, weight)| {
            (weighted + value * weight, total + weight)
        });

    if total_weight > 0.0 {
        Some(weighted / total_weight)
    } else {
        mean(frame, value_col)
    }
}

/// Convert a percentage to a 0–1 fraction.
///
/// Anything above 1 is assumed to be on the 0–100 scale. A true fraction
/// greater than 1 would be misread, which is accepted for these metrics.
pub fn normalize_percentage(value: f64) -> f64 {
    if value > 1.0 { value / 100.0 } else { value }
}

pub fn summarize_batting(team: &Frame) -> BattingSummary {
    let weight_col = team.find_column(WEIGHT_COLUMNS);

    let sample_size = match weight_col {
        Some(col) => (0..team.len())
            .filter_map(|row| team.number(row, col))
            .sum::<f64>() as i64,
        None => team.len() as i64,
    };

    let xwoba = weighted_average(team, team.find_column(XWOBA_COLUMNS), weight_col);
    let barrel_rate = weighted_average(team, team.find_column(BARREL_COLUMNS), weight_col)
        .map(normalize_percentage);
    let hard_hit_pct = weighted_average(team, team.find_column(HARD_HIT_COLUMNS), weight_col)
        .map(normalize_percentage);

    BattingSummary {
        xwoba,
        barrel_rate,
        hard_hit_pct,
        sample_size,
    }
}

/// Mean speed figure for `abbr`, preferring home-to-first time.
///
/// Leaderboards without a team column are averaged as a whole.
pub fn team_sprint_speed(frame: &Frame, abbr: &str) -> Option<f64> {
    if frame.is_empty() {
        return None;
    }

    let team = match frame.find_column(SPRINT_TEAM_COLUMNS) {
        Some(col) => frame.filter_by_text(col, |team| team == abbr),
        None => frame.clone(),
    };
    if team.is_empty() {
        return None;
    }

    let speed_col = team.find_column(SPEED_COLUMNS)?;
    mean(&team, speed_col)
}

pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Rounded metric for the response. Zero and non-finite values are reported
/// as absent.
pub fn round_metric(value: Option<f64>, places: u32) -> Option<f64> {
    value
        .filter(|v| v.is_finite() && *v != 0.0)
        .map(|v| round_to(v, places))
}
