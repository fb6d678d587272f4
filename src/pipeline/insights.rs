//! Growth-factor summaries and player rankings

use serde::Serialize;

use super::records::PlayerRecord;

/// Percentile above which a growth factor is highlighted in the summary table
pub const HIGHLIGHT_QUANTILE: f64 = 0.75;

/// Mean growth factors across the whole dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthAverages {
    pub injury: f64,
    pub missed_days: f64,
}

/// One row of the injury growth ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthSummaryRow {
    pub rank: usize,
    pub player: String,
    pub injury_growth: f64,
    pub missed_days_growth: f64,
    pub injury_high: bool,
    pub missed_days_high: bool,
}

/// Everything printed in the closing console summary
#[derive(Debug, Clone, Serialize)]
pub struct InjuryInsights {
    pub averages: GrowthAverages,
    pub injury_growth_p75: Option<f64>,
    pub missed_days_growth_p75: Option<f64>,
    pub growth_summary: Vec<GrowthSummaryRow>,
    pub most_missed_days: Vec<PlayerRecord>,
    pub ironmen: Vec<PlayerRecord>,
}

impl InjuryInsights {
    pub fn compute(records: &[PlayerRecord], top_n: usize) -> Self {
        let injury: Vec<f64> = records.iter().map(|r| r.injury_growth_factor).collect();
        let missed: Vec<f64> = records.iter().map(|r| r.missed_days_growth_factor).collect();

        Self {
            averages: average_growth(records),
            injury_growth_p75: quantile(&injury, HIGHLIGHT_QUANTILE),
            missed_days_growth_p75: quantile(&missed, HIGHLIGHT_QUANTILE),
            growth_summary: growth_summary(records),
            most_missed_days: most_missed_days(records, top_n),
            ironmen: ironmen(records, top_n),
        }
    }
}

/// Arithmetic mean of both growth factors. Empty input yields NaN.
pub fn average_growth(records: &[PlayerRecord]) -> GrowthAverages {
    let n = records.len() as f64;
    let injury: f64 = records.iter().map(|r| r.injury_growth_factor).sum();
    let missed_days: f64 = records.iter().map(|r| r.missed_days_growth_factor).sum();

    GrowthAverages {
        injury: injury / n,
        missed_days: missed_days / n,
    }
}

/// Quantile with linear interpolation between closest ranks.
///
/// NaN values are ignored. Returns `None` when nothing is left.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(|a, b| a.total_cmp(b));

    let q = q.clamp(0.0, 1.0);
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;

    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * frac)
}

/// Players ranked by injury growth factor, highest first.
///
/// Ties keep dataset order. Each factor is flagged when it reaches its column's 75th percentile.
pub fn growth_summary(records: &[PlayerRecord]) -> Vec<GrowthSummaryRow> {
    let injury: Vec<f64> = records.iter().map(|r| r.injury_growth_factor).collect();
    let missed: Vec<f64> = records.iter().map(|r| r.missed_days_growth_factor).collect();
    let hi_injury = quantile(&injury, HIGHLIGHT_QUANTILE);
    let hi_missed = quantile(&missed, HIGHLIGHT_QUANTILE);

    let mut ranked: Vec<&PlayerRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.injury_growth_factor.total_cmp(&a.injury_growth_factor));

    ranked
        .into_iter()
        .enumerate()
        .map(|(i, r)| GrowthSummaryRow {
            rank: i + 1,
            player: r.name.clone(),
            injury_growth: r.injury_growth_factor,
            missed_days_growth: r.missed_days_growth_factor,
            injury_high: hi_injury.is_some_and(|q| r.injury_growth_factor >= q),
            missed_days_high: hi_missed.is_some_and(|q| r.missed_days_growth_factor >= q),
        })
        .collect()
}

/// The `n` players with the most missed days after 22
pub fn most_missed_days(records: &[PlayerRecord], n: usize) -> Vec<PlayerRecord> {
    let mut sorted: Vec<&PlayerRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.missed_days_after.cmp(&a.missed_days_after));
    sorted.into_iter().take(n).cloned().collect()
}

/// The `n` players with the fewest injuries after 22
pub fn ironmen(records: &[PlayerRecord], n: usize) -> Vec<PlayerRecord> {
    let mut sorted: Vec<&PlayerRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.injuries_after);
    sorted.into_iter().take(n).cloned().collect()
}
