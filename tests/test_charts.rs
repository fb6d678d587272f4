//! Rendering tests for the full chart set

use durascope::charts::{
    chart_jobs, render_all, ChartFormat, ChartJob, ChartStyle, RenderOptions, StackedBarChart,
};
use durascope::pipeline::{
    build_comparison, correlation_matrix, project, GrowthFactors, Metric, PlayerRecord, Prospect,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

use common::*;

const FIXTURE_CHARTS: [&str; 6] = [
    "match_distribution",
    "injury_growth",
    "workload_vs_durability_labeled",
    "correlation_heatmap_styled",
    "radar_messi_vs_ronaldo",
    "visual6_lamine_projection",
];

fn options(format: ChartFormat) -> RenderOptions {
    RenderOptions {
        format,
        style: ChartStyle::new(50),
    }
}

/// Build and render the standard chart set for `records`
fn render_records(
    records: &[PlayerRecord],
    compare: &[&str],
    dir: &Path,
    format: ChartFormat,
) -> anyhow::Result<Vec<PathBuf>> {
    let names: Vec<String> = compare.iter().map(|s| s.to_string()).collect();
    let correlation = correlation_matrix(records, &Metric::ALL);
    let comparison = build_comparison(records, &names, &Metric::ALL);
    let projection = project(&Prospect::default(), GrowthFactors::default());

    let jobs = chart_jobs(records, &correlation, &comparison, &projection);
    render_all(&jobs, dir, &options(format))
}

fn assert_charts_written(dir: &Path, stems: &[&str], extension: &str) {
    for stem in stems {
        let path = dir.join(format!("{}.{}", stem, extension));
        assert!(path.exists(), "missing chart {}", path.display());
        let size = std::fs::metadata(&path).unwrap().len();
        assert!(size > 0, "empty chart {}", path.display());
    }
}

#[test]
fn test_render_fixture_svg() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("visuals");
    let records = fixture_records();

    let paths = render_records(
        &records,
        &["Lionel Messi", "Cristiano Ronaldo"],
        &out,
        ChartFormat::Svg,
    )
    .unwrap();

    assert_eq!(paths.len(), 6);
    assert_charts_written(&out, &FIXTURE_CHARTS, "svg");

    let radar = std::fs::read_to_string(out.join("radar_messi_vs_ronaldo.svg")).unwrap();
    assert!(radar.contains("<svg"));
}

#[test]
fn test_render_fixture_png() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("visuals");
    let records = fixture_records();

    let paths = render_records(
        &records,
        &["Lionel Messi", "Cristiano Ronaldo"],
        &out,
        ChartFormat::Png,
    )
    .unwrap();

    // Paths come back in job order
    assert_eq!(paths[0], out.join("match_distribution.png"));
    assert_eq!(paths[5], out.join("visual6_lamine_projection.png"));
    assert_charts_written(&out, &FIXTURE_CHARTS, "png");
}

#[test]
fn test_render_single_zero_player() {
    let temp_dir = TempDir::new().unwrap();
    let records = vec![record("Solo Winger", "CF", [0, 0, 0, 0, 0, 0])];

    let paths = render_records(&records, &["Solo Winger"], temp_dir.path(), ChartFormat::Png)
        .unwrap();

    assert_eq!(paths.len(), 6);
    assert_charts_written(
        temp_dir.path(),
        &[
            "match_distribution",
            "injury_growth",
            "workload_vs_durability_labeled",
            "correlation_heatmap_styled",
            "radar_winger",
            "visual6_lamine_projection",
        ],
        "png",
    );
}

#[test]
fn test_radar_skipped_without_compared_players() {
    let temp_dir = TempDir::new().unwrap();
    let records = fixture_records();

    let paths = render_records(&records, &["Nobody"], temp_dir.path(), ChartFormat::Svg).unwrap();

    assert_eq!(paths.len(), 5);
    assert!(paths
        .iter()
        .all(|p| !p.to_string_lossy().contains("radar_")));
}

#[test]
fn test_render_failure_names_chart() {
    let temp_dir = TempDir::new().unwrap();
    let records = fixture_records();

    // A directory squatting on the output file name makes the write fail
    std::fs::create_dir(temp_dir.path().join("match_distribution.svg")).unwrap();

    let jobs = vec![ChartJob::Stacked(StackedBarChart::match_distribution(&records))];
    let err = render_all(&jobs, temp_dir.path(), &options(ChartFormat::Svg)).unwrap_err();

    assert_eq!(err.to_string(), "Failed to render chart 'match_distribution'");
}
