//! Shared test utilities and fixture generators

#![allow(dead_code)]

use durascope::pipeline::{derive_metrics, extract_records, load_wingers, PlayerRecord};
use std::path::PathBuf;
use tempfile::TempDir;

/// Eight wingers with the untidy header spelling of a spreadsheet export:
/// - `Total Matches ` has a trailing space
/// - `Missed_days_after_22` is capitalised
/// - Vinicius Junior has zero injuries and zero missed days before 22
pub const WINGERS_CSV: &str = "\
Player_Name,Position,matches_before_22,matches_after_22,Total Matches ,injuries_before_22,injuries_after_22,missed_days_before_22,Missed_days_after_22
Lionel Messi,RW,175,678,853,9,22,180,560
Cristiano Ronaldo,LW,230,950,1180,4,18,60,420
Neymar,LW,250,430,680,6,34,120,980
Mohamed Salah,RW,150,520,670,3,12,40,210
Arjen Robben,RW,190,410,600,12,48,310,1450
Eden Hazard,LW,260,320,580,2,26,30,1090
Raheem Sterling,LW,290,360,650,5,11,70,190
Vinicius Junior,LW,240,110,350,0,3,0,40
";

/// Write CSV text into a fresh temporary directory
pub fn create_temp_csv(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("Wingers_Injury.csv");
    std::fs::write(&csv_path, contents).unwrap();
    (temp_dir, csv_path)
}

/// Records for the standard fixture, loaded through the real pipeline
pub fn fixture_records() -> Vec<PlayerRecord> {
    let (_temp_dir, csv_path) = create_temp_csv(WINGERS_CSV);
    let df = load_wingers(&csv_path, 100).unwrap();
    let df = derive_metrics(df).unwrap();
    extract_records(&df).unwrap()
}

/// Build a record by hand: `[matches_before, matches_after, injuries_before, injuries_after,
/// missed_days_before, missed_days_after]`
pub fn record(name: &str, position: &str, counts: [u32; 6]) -> PlayerRecord {
    let [mb, ma, ib, ia, db, da] = counts;
    let denom = |x: u32| if x == 0 { 0.1 } else { x as f64 };
    let total_matches = mb + ma;

    PlayerRecord {
        name: name.to_string(),
        position: position.to_string(),
        matches_before: mb,
        matches_after: ma,
        injuries_before: ib,
        injuries_after: ia,
        missed_days_before: db,
        missed_days_after: da,
        total_matches,
        total_injuries: ib + ia,
        total_missed_days: db + da,
        pct_matches_before: if total_matches == 0 {
            None
        } else {
            Some(mb as f64 / total_matches as f64 * 100.0)
        },
        injury_growth_factor: ia as f64 / denom(ib),
        missed_days_growth_factor: da as f64 / denom(db),
    }
}

/// Assert two floats agree to within `1e-9`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

pub fn names(records: &[PlayerRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}
