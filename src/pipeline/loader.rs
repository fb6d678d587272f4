//! Dataset loader for the winger injury CSV

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use super::columns::{required_columns, COUNT_COLUMNS, PLAYER_NAME, TEXT_COLUMNS};
use super::error::DatasetError;

/// Load a CSV dataset into memory.
///
/// `infer_schema_length` of 0 scans the whole file for type inference.
pub fn load_dataset(path: &Path, infer_schema_length: usize) -> Result<DataFrame> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if extension != "csv" {
        anyhow::bail!(
            "Unsupported file format: {}. Supported formats: csv",
            extension
        );
    }

    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    let schema_rows = if infer_schema_length == 0 {
        None
    } else {
        Some(infer_schema_length)
    };

    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(schema_rows)
        .finish()
        .with_context(|| format!("Failed to load CSV file: {}", path.display()))?
        .collect()
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;

    Ok(df)
}

/// Trim header whitespace and map case variants onto the canonical column names.
///
/// `Missed_days_after_22` becomes `missed_days_after_22`, `"Total Matches "` becomes `"Total Matches"`.
pub fn normalize_headers(mut df: DataFrame) -> Result<DataFrame> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    for name in names {
        let trimmed = name.trim();
        let canonical = required_columns()
            .find(|c| c.eq_ignore_ascii_case(trimmed))
            .unwrap_or(trimmed)
            .to_string();

        if canonical != name {
            df.rename(&name, canonical.as_str().into())
                .with_context(|| format!("Failed to rename column '{}' to '{}'", name, canonical))?;
        }
    }

    Ok(df)
}

/// Check the before/after-22 schema and cast every count column to `Int64`.
pub fn validate_schema(mut df: DataFrame) -> Result<DataFrame> {
    let available: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    for column in required_columns() {
        if !available.iter().any(|c| c == column) {
            return Err(DatasetError::MissingColumn {
                column: column.to_string(),
                available: available.clone(),
            }
            .into());
        }
    }

    if df.height() == 0 {
        return Err(DatasetError::Empty.into());
    }

    for column in TEXT_COLUMNS {
        let text = df.column(column)?.cast(&DataType::String)?;
        let first_null = text.str()?.iter().position(|v| v.is_none());
        if let Some(row) = first_null {
            return Err(DatasetError::NullValue {
                column: column.to_string(),
                row,
            }
            .into());
        }
    }

    let players: Vec<String> = df
        .column(PLAYER_NAME)?
        .cast(&DataType::String)?
        .str()?
        .iter()
        .map(|v| v.unwrap_or_default().to_string())
        .collect();

    for column in COUNT_COLUMNS {
        let counts = validate_counts(&df, column, &players)?;
        df.with_column(Column::new(column.into(), counts))?;
    }

    Ok(df)
}

fn validate_counts(df: &DataFrame, column: &str, players: &[String]) -> Result<Vec<i64>> {
    let raw = df.column(column)?;
    let floats = raw.cast(&DataType::Float64)?;
    let values = floats.f64()?;

    let mut counts = Vec::with_capacity(values.len());
    for (row, value) in values.iter().enumerate() {
        let invalid = || -> anyhow::Error {
            let original = raw
                .get(row)
                .map(|v| v.to_string())
                .unwrap_or_default();
            DatasetError::InvalidCount {
                column: column.to_string(),
                player: players[row].clone(),
                value: original,
            }
            .into()
        };

        match value {
            Some(v) if v >= 0.0 && v.fract() == 0.0 => counts.push(v as i64),
            Some(_) => return Err(invalid()),
            None => {
                // A non-null cell that failed the numeric cast is a bad value, not a gap
                if raw.get(row).map(|v| v.is_null()).unwrap_or(true) {
                    return Err(DatasetError::NullValue {
                        column: column.to_string(),
                        row,
                    }
                    .into());
                }
                return Err(invalid());
            }
        }
    }

    Ok(counts)
}

/// Load, normalise and validate the winger injury table in one step
pub fn load_wingers(path: &Path, infer_schema_length: usize) -> Result<DataFrame> {
    let df = load_dataset(path, infer_schema_length)?;
    let df = normalize_headers(df)?;
    validate_schema(df).with_context(|| format!("Invalid dataset: {}", path.display()))
}

/// Save dataset to file (CSV or Parquet based on extension)
pub fn save_dataset(df: &mut DataFrame, path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    match extension.as_str() {
        "csv" => {
            let mut file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            CsvWriter::new(&mut file)
                .finish(df)
                .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
        }
        "parquet" => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            ParquetWriter::new(file)
                .finish(df)
                .with_context(|| format!("Failed to write Parquet file: {}", path.display()))?;
        }
        _ => anyhow::bail!(
            "Unsupported output format: {}. Supported formats: csv, parquet",
            extension
        ),
    }

    Ok(())
}
