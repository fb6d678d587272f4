//! Typed player rows extracted from the derived table

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::Serialize;

use super::columns::*;

/// One winger's raw before/after-22 counts plus the derived ratios
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRecord {
    pub name: String,
    pub position: String,
    pub matches_before: u32,
    pub matches_after: u32,
    pub injuries_before: u32,
    pub injuries_after: u32,
    pub missed_days_before: u32,
    pub missed_days_after: u32,
    pub total_matches: u32,
    pub total_injuries: u32,
    pub total_missed_days: u32,
    pub pct_matches_before: Option<f64>,
    pub injury_growth_factor: f64,
    pub missed_days_growth_factor: f64,
}

/// Workload metrics compared across players (correlation heatmap and radar chart)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    MatchesBefore,
    MatchesAfter,
    InjuriesAfter,
    MissedDaysAfter,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::MatchesBefore,
        Metric::MatchesAfter,
        Metric::InjuriesAfter,
        Metric::MissedDaysAfter,
    ];

    pub fn column(&self) -> &'static str {
        match self {
            Metric::MatchesBefore => MATCHES_BEFORE,
            Metric::MatchesAfter => MATCHES_AFTER,
            Metric::InjuriesAfter => INJURIES_AFTER,
            Metric::MissedDaysAfter => MISSED_DAYS_AFTER,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::MatchesBefore => "Matches Before 22",
            Metric::MatchesAfter => "Matches After 22",
            Metric::InjuriesAfter => "Injuries After 22",
            Metric::MissedDaysAfter => "Missed Days After 22",
        }
    }

    pub fn value(&self, record: &PlayerRecord) -> f64 {
        let raw = match self {
            Metric::MatchesBefore => record.matches_before,
            Metric::MatchesAfter => record.matches_after,
            Metric::InjuriesAfter => record.injuries_after,
            Metric::MissedDaysAfter => record.missed_days_after,
        };
        raw as f64
    }
}

/// Read every row of a derived frame into `PlayerRecord`s, preserving dataset order
pub fn extract_records(df: &DataFrame) -> Result<Vec<PlayerRecord>> {
    let names = string_values(df, PLAYER_NAME)?;
    let positions = string_values(df, POSITION)?;

    let matches_before = count_values(df, MATCHES_BEFORE)?;
    let matches_after = count_values(df, MATCHES_AFTER)?;
    let injuries_before = count_values(df, INJURIES_BEFORE)?;
    let injuries_after = count_values(df, INJURIES_AFTER)?;
    let missed_days_before = count_values(df, MISSED_DAYS_BEFORE)?;
    let missed_days_after = count_values(df, MISSED_DAYS_AFTER)?;
    let total_matches = count_values(df, TOTAL_MATCHES)?;
    let total_injuries = count_values(df, TOTAL_INJURIES)?;
    let total_missed_days = count_values(df, TOTAL_MISSED_DAYS)?;

    let pct_matches_before = float_values(df, PCT_MATCHES_BEFORE)?;
    let injury_growth = float_values(df, INJURY_GROWTH_FACTOR)?;
    let missed_days_growth = float_values(df, MISSED_DAYS_GROWTH_FACTOR)?;

    let records = (0..df.height())
        .map(|i| PlayerRecord {
            name: names[i].clone(),
            position: positions[i].clone(),
            matches_before: matches_before[i],
            matches_after: matches_after[i],
            injuries_before: injuries_before[i],
            injuries_after: injuries_after[i],
            missed_days_before: missed_days_before[i],
            missed_days_after: missed_days_after[i],
            total_matches: total_matches[i],
            total_injuries: total_injuries[i],
            total_missed_days: total_missed_days[i],
            pct_matches_before: pct_matches_before[i],
            injury_growth_factor: injury_growth[i].unwrap_or(f64::NAN),
            missed_days_growth_factor: missed_days_growth[i].unwrap_or(f64::NAN),
        })
        .collect();

    Ok(records)
}

fn string_values(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let column = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?
        .cast(&DataType::String)?;

    Ok(column
        .str()?
        .iter()
        .map(|v| v.unwrap_or_default().to_string())
        .collect())
}

fn count_values(df: &DataFrame, name: &str) -> Result<Vec<u32>> {
    let column = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?
        .cast(&DataType::Int64)?;

    column
        .i64()?
        .iter()
        .map(|v| {
            let v = v.with_context(|| format!("Column '{}' contains a missing count", name))?;
            u32::try_from(v)
                .with_context(|| format!("Column '{}' has an out-of-range count: {}", name, v))
        })
        .collect()
}

fn float_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?
        .cast(&DataType::Float64)?;

    Ok(column.f64()?.iter().collect())
}
