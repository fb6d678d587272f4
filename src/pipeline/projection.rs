//! Single-prospect durability projection

use clap::ValueEnum;
use serde::Serialize;

use super::insights::GrowthAverages;

pub const DEFAULT_INJURY_GROWTH: f64 = 4.4;
pub const DEFAULT_MISSED_DAYS_GROWTH: f64 = 4.3;

/// A young player's before-22 record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prospect {
    pub name: String,
    pub matches_before: u32,
    pub injuries_before: u32,
    pub missed_days_before: u32,
}

impl Default for Prospect {
    fn default() -> Self {
        Self {
            name: "Lamine Yamal".to_string(),
            matches_before: 122,
            injuries_before: 8,
            missed_days_before: 200,
        }
    }
}

/// Multipliers applied to before-22 counts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthFactors {
    pub injury: f64,
    pub missed_days: f64,
}

impl Default for GrowthFactors {
    fn default() -> Self {
        Self {
            injury: DEFAULT_INJURY_GROWTH,
            missed_days: DEFAULT_MISSED_DAYS_GROWTH,
        }
    }
}

impl From<GrowthAverages> for GrowthFactors {
    fn from(avg: GrowthAverages) -> Self {
        Self {
            injury: avg.injury,
            missed_days: avg.missed_days,
        }
    }
}

/// Where projection growth factors come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthSource {
    /// Use the factors given on the command line
    #[default]
    Fixed,
    /// Use the averages computed from the loaded dataset
    Dataset,
}

impl GrowthSource {
    pub fn resolve(&self, fixed: GrowthFactors, dataset: GrowthAverages) -> GrowthFactors {
        match self {
            GrowthSource::Fixed => fixed,
            GrowthSource::Dataset => dataset.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub prospect: Prospect,
    pub factors: GrowthFactors,
    pub projected_injuries: f64,
    pub projected_missed_days: f64,
}

/// Scale the prospect's before-22 counts by the growth factors
pub fn project(prospect: &Prospect, factors: GrowthFactors) -> Projection {
    Projection {
        prospect: prospect.clone(),
        factors,
        projected_injuries: prospect.injuries_before as f64 * factors.injury,
        projected_missed_days: prospect.missed_days_before as f64 * factors.missed_days,
    }
}
