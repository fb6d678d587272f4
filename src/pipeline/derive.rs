//! Derived workload and durability columns

use anyhow::{Context, Result};
use polars::prelude::*;

use super::columns::*;

/// Denominator used in place of a zero before-22 count when computing growth factors
pub const ZERO_DENOMINATOR: f64 = 0.1;

/// Append totals, the before-22 match share and both growth factors, in that order.
///
/// Input columns are left untouched. `pct_matches_before` is null for players with no matches.
pub fn derive_metrics(df: DataFrame) -> Result<DataFrame> {
    let derived = df
        .lazy()
        .with_columns([
            (col(MATCHES_BEFORE) + col(MATCHES_AFTER)).alias(TOTAL_MATCHES),
            (col(INJURIES_BEFORE) + col(INJURIES_AFTER)).alias(TOTAL_INJURIES),
            (col(MISSED_DAYS_BEFORE) + col(MISSED_DAYS_AFTER)).alias(TOTAL_MISSED_DAYS),
        ])
        .with_column(
            when(col(TOTAL_MATCHES).eq(lit(0)))
                .then(lit(NULL).cast(DataType::Float64))
                .otherwise(
                    col(MATCHES_BEFORE).cast(DataType::Float64)
                        / col(TOTAL_MATCHES).cast(DataType::Float64)
                        * lit(100.0),
                )
                .alias(PCT_MATCHES_BEFORE),
        )
        .with_columns([
            growth_factor(INJURIES_AFTER, INJURIES_BEFORE).alias(INJURY_GROWTH_FACTOR),
            growth_factor(MISSED_DAYS_AFTER, MISSED_DAYS_BEFORE).alias(MISSED_DAYS_GROWTH_FACTOR),
        ])
        .collect()
        .context("Failed to compute derived columns")?;

    Ok(derived)
}

fn growth_factor(after: &str, before: &str) -> Expr {
    let denominator = when(col(before).eq(lit(0)))
        .then(lit(ZERO_DENOMINATOR))
        .otherwise(col(before).cast(DataType::Float64));

    col(after).cast(DataType::Float64) / denominator
}
