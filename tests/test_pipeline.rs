//! End-to-end tests running the durascope binary

use assert_cmd::Command;
use predicates::prelude::*;

#[path = "common/mod.rs"]
mod common;

use common::*;

fn durascope() -> Command {
    Command::cargo_bin("durascope").unwrap()
}

#[test]
fn test_full_run_without_charts() {
    let (temp_dir, csv_path) = create_temp_csv(WINGERS_CSV);
    let output_dir = temp_dir.path().join("visuals");

    durascope()
        .arg("-i")
        .arg(&csv_path)
        .arg("-o")
        .arg(&output_dir)
        .arg("--no-charts")
        .assert()
        .success()
        .stdout(predicate::str::contains("KEY INSIGHTS"))
        .stdout(predicate::str::contains("Arjen Robben"))
        .stdout(predicate::str::contains("Lamine Yamal"))
        .stdout(predicate::str::contains(
            "Growth factors > 1 indicate an increase after age 22",
        ))
        .stdout(predicate::str::contains(
            "Injury Growth Summary (sorted by injury growth)",
        ))
        .stdout(predicate::str::contains(
            "Top 3 — Most Missed Days After 22",
        ))
        .stdout(predicate::str::contains(
            "Top 3 — Ironmen (Fewest Injuries After 22)",
        ));

    let export = output_dir.join("injury_analysis.json");
    assert!(export.exists());

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(export).unwrap()).unwrap();
    assert_eq!(json["players"].as_array().unwrap().len(), 8);
    assert_eq!(json["projection"]["projected_missed_days"], 860.0);
}

#[test]
fn test_top_option_sizes_tables() {
    let (temp_dir, csv_path) = create_temp_csv(WINGERS_CSV);

    durascope()
        .arg("-i")
        .arg(&csv_path)
        .arg("-o")
        .arg(temp_dir.path().join("visuals"))
        .args(["--no-charts", "--no-export", "--top", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Top 2 — Most Missed Days After 22"))
        .stdout(predicate::str::contains(
            "Top 2 — Ironmen (Fewest Injuries After 22)",
        ))
        .stdout(predicate::str::contains("Top 3 —").not());
}

#[test]
fn test_dataset_growth_source() {
    let (temp_dir, csv_path) = create_temp_csv(WINGERS_CSV);
    let output_dir = temp_dir.path().join("visuals");

    durascope()
        .arg("-i")
        .arg(&csv_path)
        .arg("-o")
        .arg(&output_dir)
        .args(["--no-charts", "--growth-source", "dataset"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(output_dir.join("injury_analysis.json")).unwrap(),
    )
    .unwrap();
    let injury = json["projection"]["factors"]["injury"].as_f64().unwrap();
    let average = json["insights"]["averages"]["injury"].as_f64().unwrap();
    assert!((injury - average).abs() < 1e-9);
}

#[test]
fn test_no_export_writes_nothing() {
    let (temp_dir, csv_path) = create_temp_csv(WINGERS_CSV);
    let output_dir = temp_dir.path().join("visuals");

    durascope()
        .arg("-i")
        .arg(&csv_path)
        .arg("-o")
        .arg(&output_dir)
        .args(["--no-charts", "--no-export"])
        .assert()
        .success();

    assert!(!output_dir.join("injury_analysis.json").exists());
}

#[test]
fn test_save_derived_table() {
    let (temp_dir, csv_path) = create_temp_csv(WINGERS_CSV);
    let derived = temp_dir.path().join("derived.csv");

    durascope()
        .arg("-i")
        .arg(&csv_path)
        .arg("-o")
        .arg(temp_dir.path().join("visuals"))
        .args(["--no-charts", "--no-export"])
        .arg("--save-derived")
        .arg(&derived)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&derived).unwrap();
    let header = contents.lines().next().unwrap();
    assert!(header.contains("injury_growth_factor"));
    assert!(header.contains("pct_matches_before"));
    assert_eq!(contents.lines().count(), 9);
}

#[test]
fn test_missing_compare_player_warns() {
    let (temp_dir, csv_path) = create_temp_csv(WINGERS_CSV);

    durascope()
        .arg("-i")
        .arg(&csv_path)
        .arg("-o")
        .arg(temp_dir.path().join("visuals"))
        .args(["--no-charts", "--no-export", "--compare", "Lionel Messi,Nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'Nobody' not found"));
}

#[test]
fn test_missing_input_fails() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    durascope()
        .arg("-i")
        .arg(temp_dir.path().join("absent.csv"))
        .arg("--no-charts")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_invalid_dataset_fails() {
    let (_temp_dir, csv_path) = create_temp_csv("Player_Name,Position\nA,RW\n");

    durascope()
        .arg("-i")
        .arg(&csv_path)
        .arg("--no-charts")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Required column"));
}
