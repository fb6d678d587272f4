//! JSON export of the full analysis

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{CorrelationMatrix, InjuryInsights, PlayerRecord, Projection};

/// File name of the export inside the output directory
pub const EXPORT_FILE_NAME: &str = "injury_analysis.json";

/// Metadata about the analysis run
#[derive(Debug, Serialize)]
pub struct ExportMetadata {
    /// Timestamp of the analysis (RFC 3339)
    pub timestamp: String,
    pub durascope_version: String,
    pub input_file: String,
    pub output_dir: String,
    pub chart_format: String,
    pub dpi: u32,
}

/// Correlation matrix keyed by display labels
#[derive(Debug, Serialize)]
pub struct CorrelationExport {
    pub labels: Vec<String>,
    /// NaN entries are written as null
    pub values: Vec<Vec<Option<f64>>>,
}

impl From<&CorrelationMatrix> for CorrelationExport {
    fn from(matrix: &CorrelationMatrix) -> Self {
        Self {
            labels: matrix.labels().iter().map(|s| s.to_string()).collect(),
            values: matrix
                .values
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|v| if v.is_nan() { None } else { Some(*v) })
                        .collect()
                })
                .collect(),
        }
    }
}

/// Complete analysis export
#[derive(Debug, Serialize)]
pub struct AnalysisExport<'a> {
    pub metadata: ExportMetadata,
    pub players: &'a [PlayerRecord],
    pub insights: &'a InjuryInsights,
    pub correlation: CorrelationExport,
    pub projection: &'a Projection,
}

/// Parameters describing the run, recorded in the export metadata
pub struct ExportParams<'a> {
    pub input_file: &'a Path,
    pub output_dir: &'a Path,
    pub chart_format: &'a str,
    pub dpi: u32,
}

/// Assemble the export document
pub fn build_export<'a>(
    params: &ExportParams<'_>,
    players: &'a [PlayerRecord],
    insights: &'a InjuryInsights,
    correlation: &CorrelationMatrix,
    projection: &'a Projection,
) -> AnalysisExport<'a> {
    AnalysisExport {
        metadata: ExportMetadata {
            timestamp: Utc::now().to_rfc3339(),
            durascope_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: params.input_file.display().to_string(),
            output_dir: params.output_dir.display().to_string(),
            chart_format: params.chart_format.to_string(),
            dpi: params.dpi,
        },
        players,
        insights,
        correlation: correlation.into(),
        projection,
    }
}

/// Write the export as pretty-printed JSON, creating the parent directory if needed
pub fn write_export(export: &AnalysisExport<'_>, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let json =
        serde_json::to_string_pretty(export).context("Failed to serialize analysis to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write analysis to {}", output_path.display()))?;

    Ok(())
}
