//! Tests for growth averages, the growth ranking and top-N tables

use durascope::pipeline::{
    average_growth, growth_summary, ironmen, most_missed_days, quantile, InjuryInsights,
};

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_average_growth() {
    let records = fixture_records();

    let averages = average_growth(&records);

    let injury = (22.0 / 9.0 + 4.5 + 34.0 / 6.0 + 4.0 + 4.0 + 13.0 + 2.2 + 30.0) / 8.0;
    assert!((averages.injury - injury).abs() < 1e-9);
    assert!(averages.missed_days > averages.injury);
}

#[test]
fn test_average_growth_empty_is_nan() {
    let averages = average_growth(&[]);
    assert!(averages.injury.is_nan());
    assert!(averages.missed_days.is_nan());
}

#[test]
fn test_quantile_interpolates() {
    assert_eq!(quantile(&[], 0.75), None);
    assert_eq!(quantile(&[f64::NAN], 0.75), None);
    assert_close(quantile(&[5.0], 0.75).unwrap(), 5.0);
    assert_close(quantile(&[1.0, 2.0, 3.0, 4.0], 0.75).unwrap(), 3.25);
    assert_close(quantile(&[4.0, 1.0, 3.0, 2.0, f64::NAN], 0.5).unwrap(), 2.5);
}

#[test]
fn test_growth_summary_ranking() {
    let records = fixture_records();

    let summary = growth_summary(&records);
    let order: Vec<&str> = summary.iter().map(|r| r.player.as_str()).collect();

    assert_eq!(
        order,
        vec![
            "Vinicius Junior",
            "Eden Hazard",
            "Neymar",
            "Cristiano Ronaldo",
            "Mohamed Salah",
            "Arjen Robben",
            "Lionel Messi",
            "Raheem Sterling",
        ]
    );
    assert_eq!(summary[0].rank, 1);
    assert_eq!(summary[7].rank, 8);
}

#[test]
fn test_growth_summary_highlights_upper_quartile() {
    let records = fixture_records();

    let summary = growth_summary(&records);
    let injury_high: Vec<&str> = summary
        .iter()
        .filter(|r| r.injury_high)
        .map(|r| r.player.as_str())
        .collect();
    let missed_high: Vec<&str> = summary
        .iter()
        .filter(|r| r.missed_days_high)
        .map(|r| r.player.as_str())
        .collect();

    assert_eq!(injury_high, vec!["Vinicius Junior", "Eden Hazard"]);
    assert_eq!(missed_high, vec!["Vinicius Junior", "Eden Hazard"]);
}

#[test]
fn test_most_missed_days() {
    let records = fixture_records();

    let top = most_missed_days(&records, 3);

    assert_eq!(names(&top), vec!["Arjen Robben", "Eden Hazard", "Neymar"]);
    assert_eq!(top[0].missed_days_after, 1450);
}

#[test]
fn test_ironmen() {
    let records = fixture_records();

    let top = ironmen(&records, 3);

    assert_eq!(
        names(&top),
        vec!["Vinicius Junior", "Raheem Sterling", "Mohamed Salah"]
    );
}

#[test]
fn test_top_n_larger_than_dataset() {
    let records = vec![
        record("A", "RW", [10, 10, 1, 2, 10, 20]),
        record("B", "LW", [10, 10, 1, 2, 10, 20]),
    ];

    assert_eq!(most_missed_days(&records, 5).len(), 2);
    // Ties keep dataset order
    assert_eq!(names(&ironmen(&records, 5)), vec!["A", "B"]);
}

#[test]
fn test_compute_bundles_everything() {
    let records = fixture_records();

    let insights = InjuryInsights::compute(&records, 2);

    assert_close(insights.injury_growth_p75.unwrap(), 7.5);
    assert_eq!(insights.growth_summary.len(), 8);
    assert_eq!(insights.most_missed_days.len(), 2);
    assert_eq!(insights.ironmen.len(), 2);
}
