//! Tests for the JSON analysis export

use durascope::pipeline::{
    correlation_matrix, project, GrowthFactors, InjuryInsights, Metric, Prospect,
};
use durascope::report::{build_export, write_export, ExportParams, EXPORT_FILE_NAME};
use std::path::Path;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

use common::*;

fn export_fixture(records: &[durascope::pipeline::PlayerRecord], path: &Path) {
    let insights = InjuryInsights::compute(records, 3);
    let correlation = correlation_matrix(records, &Metric::ALL);
    let projection = project(&Prospect::default(), GrowthFactors::default());
    let params = ExportParams {
        input_file: Path::new("Wingers_Injury.csv"),
        output_dir: Path::new("visuals"),
        chart_format: "png",
        dpi: 300,
    };

    let export = build_export(&params, records, &insights, &correlation, &projection);
    write_export(&export, path).unwrap();
}

fn read_json(path: &Path) -> serde_json::Value {
    let contents = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&contents).unwrap()
}

#[test]
fn test_export_structure() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(EXPORT_FILE_NAME);
    let records = fixture_records();

    export_fixture(&records, &path);
    let json = read_json(&path);

    assert_eq!(json["metadata"]["input_file"], "Wingers_Injury.csv");
    assert_eq!(json["metadata"]["chart_format"], "png");
    assert_eq!(json["metadata"]["dpi"], 300);
    assert!(json["metadata"]["timestamp"].is_string());

    assert_eq!(json["players"].as_array().unwrap().len(), 8);
    assert_eq!(json["players"][0]["name"], "Lionel Messi");
    assert_eq!(json["insights"]["growth_summary"][0]["player"], "Vinicius Junior");
    assert_eq!(json["insights"]["most_missed_days"][0]["name"], "Arjen Robben");
    assert_eq!(json["correlation"]["labels"].as_array().unwrap().len(), 4);
    assert_eq!(json["projection"]["prospect"]["name"], "Lamine Yamal");
    assert_eq!(json["projection"]["projected_missed_days"], 860.0);
}

#[test]
fn test_export_nan_correlation_written_as_null() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(EXPORT_FILE_NAME);
    let records = vec![
        record("A", "RW", [10, 100, 1, 5, 10, 10]),
        record("B", "LW", [20, 80, 1, 5, 10, 20]),
    ];

    export_fixture(&records, &path);
    let json = read_json(&path);

    assert!(json["correlation"]["values"][2][2].is_null());
    assert_eq!(json["correlation"]["values"][0][0], 1.0);
}

#[test]
fn test_export_creates_parent_directory() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("a").join("b").join(EXPORT_FILE_NAME);

    export_fixture(&fixture_records(), &path);

    assert!(path.exists());
}
