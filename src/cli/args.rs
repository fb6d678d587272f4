//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::charts::ChartFormat;
use crate::pipeline::{GrowthFactors, GrowthSource, Prospect};

/// Durascope - Explore winger workload and injury durability before and after age 22
#[derive(Parser, Debug)]
#[command(name = "durascope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV with one row of before/after-22 statistics per player
    #[arg(short, long, default_value = "Wingers_Injury.csv")]
    pub input: PathBuf,

    /// Directory that receives the charts and the JSON export (created if absent)
    #[arg(short, long, default_value = "visuals")]
    pub output_dir: PathBuf,

    /// Chart image format
    #[arg(long, value_enum, default_value = "png")]
    pub format: ChartFormat,

    /// Chart resolution in dots per inch.
    /// Figure sizes are fixed in inches, so this scales the pixel dimensions.
    #[arg(long, default_value = "300", value_parser = validate_dpi)]
    pub dpi: u32,

    /// Number of rows shown in the dataset preview
    #[arg(long, default_value = "5")]
    pub preview_rows: usize,

    /// Number of players in the "most missed days" and "ironmen" tables
    #[arg(long, default_value = "3", value_parser = validate_top)]
    pub top: usize,

    /// Players compared on the radar chart (comma-separated, matched on Player_Name)
    #[arg(
        long,
        value_delimiter = ',',
        default_values = ["Lionel Messi", "Cristiano Ronaldo"]
    )]
    pub compare: Vec<String>,

    /// Name of the prospect whose durability is projected
    #[arg(long, default_value = "Lamine Yamal")]
    pub prospect_name: String,

    /// Prospect's matches before age 22
    #[arg(long, default_value = "122")]
    pub prospect_matches: u32,

    /// Prospect's injuries before age 22
    #[arg(long, default_value = "8")]
    pub prospect_injuries: u32,

    /// Prospect's missed days before age 22
    #[arg(long, default_value = "200")]
    pub prospect_missed_days: u32,

    /// Injury growth factor applied to the prospect (with --growth-source fixed)
    #[arg(long, default_value = "4.4", value_parser = validate_growth)]
    pub injury_growth: f64,

    /// Missed days growth factor applied to the prospect (with --growth-source fixed)
    #[arg(long, default_value = "4.3", value_parser = validate_growth)]
    pub missed_days_growth: f64,

    /// Source of the projection growth factors.
    /// "fixed" uses --injury-growth/--missed-days-growth, "dataset" uses the computed averages.
    #[arg(long, value_enum, default_value = "fixed")]
    pub growth_source: GrowthSource,

    /// Number of rows to use for schema inference.
    /// Use 0 for full table scan.
    #[arg(long, default_value = "100")]
    pub infer_schema_length: usize,

    /// Skip chart rendering
    #[arg(long, default_value = "false")]
    pub no_charts: bool,

    /// Skip writing the JSON analysis export
    #[arg(long, default_value = "false")]
    pub no_export: bool,

    /// Also save the table with derived columns (CSV or Parquet, determined by extension)
    #[arg(long)]
    pub save_derived: Option<PathBuf>,
}

impl Cli {
    /// The prospect described by the --prospect-* flags
    pub fn prospect(&self) -> Prospect {
        Prospect {
            name: self.prospect_name.clone(),
            matches_before: self.prospect_matches,
            injuries_before: self.prospect_injuries,
            missed_days_before: self.prospect_missed_days,
        }
    }

    /// Growth factors given on the command line
    pub fn fixed_growth(&self) -> GrowthFactors {
        GrowthFactors {
            injury: self.injury_growth,
            missed_days: self.missed_days_growth,
        }
    }

    /// Compared player names with surrounding whitespace and empty entries removed
    pub fn compare_players(&self) -> Vec<String> {
        self.compare
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Path of the JSON export inside the output directory
    pub fn export_path(&self) -> PathBuf {
        self.output_dir.join(crate::report::EXPORT_FILE_NAME)
    }
}

/// Validator for dpi parameter
fn validate_dpi(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid integer", s))?;

    if !(50..=600).contains(&value) {
        Err(format!("dpi must be between 50 and 600, got {}", value))
    } else {
        Ok(value)
    }
}

/// Validator for top parameter
fn validate_top(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid integer", s))?;

    if value == 0 {
        Err("top must be at least 1".to_string())
    } else {
        Ok(value)
    }
}

/// Validator for growth factor parameters
fn validate_growth(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if !value.is_finite() || value <= 0.0 {
        Err(format!("growth factor must be greater than 0, got {}", value))
    } else {
        Ok(value)
    }
}
