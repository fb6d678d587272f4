//! Head-to-head player profiles for the radar chart

use serde::Serialize;

use super::records::{Metric, PlayerRecord};

/// Raw and max-normalised metric values for one player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonProfile {
    pub player: String,
    pub raw: Vec<f64>,
    pub normalized: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub metrics: Vec<Metric>,
    pub profiles: Vec<ComparisonProfile>,
    /// Requested names with no matching row
    pub missing: Vec<String>,
}

impl Comparison {
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Select the named players (in dataset order) and scale each metric by its maximum over the
/// selection. A metric whose maximum is 0 normalises to 0 for everyone.
pub fn build_comparison(
    records: &[PlayerRecord],
    names: &[String],
    metrics: &[Metric],
) -> Comparison {
    let selected: Vec<&PlayerRecord> = records
        .iter()
        .filter(|r| names.iter().any(|n| n == &r.name))
        .collect();

    let missing: Vec<String> = names
        .iter()
        .filter(|n| !records.iter().any(|r| &r.name == *n))
        .cloned()
        .collect();

    let maxima: Vec<f64> = metrics
        .iter()
        .map(|m| selected.iter().map(|r| m.value(r)).fold(0.0, f64::max))
        .collect();

    let profiles = selected
        .iter()
        .map(|r| {
            let raw: Vec<f64> = metrics.iter().map(|m| m.value(r)).collect();
            let normalized = raw
                .iter()
                .zip(&maxima)
                .map(|(&v, &max)| if max == 0.0 { 0.0 } else { v / max })
                .collect();
            ComparisonProfile {
                player: r.name.clone(),
                raw,
                normalized,
            }
        })
        .collect();

    Comparison {
        metrics: metrics.to_vec(),
        profiles,
        missing,
    }
}
