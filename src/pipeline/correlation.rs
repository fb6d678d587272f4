//! Pearson correlation between workload and injury metrics

use faer::Mat;
use rayon::prelude::*;
use serde::Serialize;

use super::records::{Metric, PlayerRecord};

/// Square correlation matrix labelled by metric
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub metrics: Vec<Metric>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn size(&self) -> usize {
        self.metrics.len()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.metrics.iter().map(|m| m.label()).collect()
    }
}

/// Compute the Pearson correlation matrix for the given metrics.
///
/// Algorithm:
/// 1. Standardize each metric column: Z = (X - mean) / (std * sqrt(n))
/// 2. Compute R = Z^T * Z
///
/// A constant metric has no defined correlation, so its whole row and column are NaN.
pub fn correlation_matrix(records: &[PlayerRecord], metrics: &[Metric]) -> CorrelationMatrix {
    let n_rows = records.len();
    let n_cols = metrics.len();

    let standardized: Vec<Option<Vec<f64>>> = metrics
        .par_iter()
        .map(|metric| {
            let values: Vec<f64> = records.iter().map(|r| metric.value(r)).collect();
            standardize(&values)
        })
        .collect();

    let mut z = Mat::<f64>::zeros(n_rows, n_cols);
    for (col_idx, col_data) in standardized.iter().enumerate() {
        if let Some(col_data) = col_data {
            for (row_idx, &val) in col_data.iter().enumerate() {
                z[(row_idx, col_idx)] = val;
            }
        }
    }

    let product = z.transpose() * &z;

    let values = (0..n_cols)
        .map(|i| {
            (0..n_cols)
                .map(|j| {
                    if standardized[i].is_none() || standardized[j].is_none() {
                        f64::NAN
                    } else if i == j {
                        1.0
                    } else {
                        product[(i, j)].clamp(-1.0, 1.0)
                    }
                })
                .collect()
        })
        .collect();

    CorrelationMatrix {
        metrics: metrics.to_vec(),
        values,
    }
}

fn standardize(values: &[f64]) -> Option<Vec<f64>> {
    let n = values.len();
    if n < 2 {
        return None;
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let sum_sq_dev: f64 = values.iter().map(|x| (x - mean) * (x - mean)).sum();
    let std = (sum_sq_dev / n as f64).sqrt();
    if std == 0.0 {
        return None;
    }

    let scale = std * (n as f64).sqrt();
    Some(values.iter().map(|x| (x - mean) / scale).collect())
}
