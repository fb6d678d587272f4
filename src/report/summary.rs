//! Console summary tables for the injury analysis

use std::path::Path;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use console::style;
use polars::prelude::*;

use crate::pipeline::{InjuryInsights, PlayerRecord, Projection};
use crate::utils::print_rule;

fn header(labels: &[&str]) -> Vec<Cell> {
    labels
        .iter()
        .map(|l| Cell::new(l).add_attribute(Attribute::Bold))
        .collect()
}

fn rank_cell(rank: usize) -> Cell {
    Cell::new(rank)
        .add_attribute(Attribute::Dim)
        .set_alignment(CellAlignment::Right)
}

fn number_cell(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
}

fn print_indented(table: &Table) {
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

fn print_title(title: &str) {
    println!();
    println!("    {}", style(title).white().bold());
}

fn format_value(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => "null".to_string(),
        AnyValue::Float64(v) => format!("{:.2}", v),
        AnyValue::Float32(v) => format!("{:.2}", v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// First `rows` rows of the derived table, every column
pub fn preview_table(df: &DataFrame, rows: usize) -> Table {
    let head = df.head(Some(rows));

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(
        head.get_column_names()
            .iter()
            .map(|name| Cell::new(name.as_str()).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );

    for i in 0..head.height() {
        if let Some(values) = head.get(i) {
            table.add_row(
                values
                    .iter()
                    .map(|v| Cell::new(format_value(v)))
                    .collect::<Vec<_>>(),
            );
        }
    }

    table
}

/// Print the dataset preview
pub fn display_preview(df: &DataFrame, rows: usize) {
    print_title("Dataset Preview");
    print_indented(&preview_table(df, rows));
}

/// Average growth factors with the interpretation note
pub fn insights_panel(insights: &InjuryInsights) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![Cell::new("KEY INSIGHTS")
        .fg(Color::Magenta)
        .add_attribute(Attribute::Bold)]);

    table.add_row(vec![Cell::new(format!(
        "Average injury growth factor: {:.2}x",
        insights.averages.injury
    ))]);
    table.add_row(vec![Cell::new(format!(
        "Average missed days growth factor: {:.2}x",
        insights.averages.missed_days
    ))]);
    table.add_row(vec![Cell::new(
        "Note: Growth factors > 1 indicate an increase after age 22.",
    )
    .add_attribute(Attribute::Dim)]);

    table
}

/// Players ranked by injury growth, top-quartile values in red
pub fn growth_table(insights: &InjuryInsights) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(header(&[
        "#",
        "Player",
        "Injury Growth (x)",
        "Missed Days Growth (x)",
    ]));

    let highlight = |high: bool| if high { Color::Red } else { Color::White };

    for row in &insights.growth_summary {
        table.add_row(vec![
            rank_cell(row.rank),
            Cell::new(&row.player).add_attribute(Attribute::Bold),
            number_cell(format!("{:.2}", row.injury_growth)).fg(highlight(row.injury_high)),
            number_cell(format!("{:.2}", row.missed_days_growth))
                .fg(highlight(row.missed_days_high)),
        ]);
    }

    table
}

/// Players with the most missed days after 22
pub fn most_missed_table(players: &[PlayerRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(header(&[
        "#",
        "Player",
        "Missed Days After 22",
        "Injuries After 22",
    ]));

    for (i, p) in players.iter().enumerate() {
        table.add_row(vec![
            rank_cell(i + 1),
            Cell::new(&p.name).add_attribute(Attribute::Bold),
            number_cell(p.missed_days_after),
            number_cell(p.injuries_after),
        ]);
    }

    table
}

/// Players with the fewest injuries after 22
pub fn ironmen_table(players: &[PlayerRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(header(&[
        "#",
        "Player",
        "Injuries After 22",
        "Missed Days After 22",
    ]));

    for (i, p) in players.iter().enumerate() {
        table.add_row(vec![
            rank_cell(i + 1),
            Cell::new(&p.name).add_attribute(Attribute::Bold),
            number_cell(p.injuries_after),
            number_cell(p.missed_days_after),
        ]);
    }

    table
}

/// Print the projection inputs and rounded outputs
pub fn display_projection(projection: &Projection) {
    let p = projection;
    println!();
    println!(
        "    {}",
        style(format!(
            "=== {} DURABILITY PROJECTION ===",
            p.prospect.name.to_uppercase()
        ))
        .cyan()
        .bold()
    );
    println!("      Matches before 22: {}", p.prospect.matches_before);
    println!("      Injuries before 22: {}", p.prospect.injuries_before);
    println!("      Missed days before 22: {}", p.prospect.missed_days_before);
    println!(
        "      Projected injuries after 22: {}",
        style(format!("{:.0}", p.projected_injuries)).yellow().bold()
    );
    println!(
        "      Projected missed days after 22: {}",
        style(format!("{:.0}", p.projected_missed_days)).yellow().bold()
    );
    println!(
        "      {}",
        style(format!(
            "(growth factors: injuries {:.2}x, missed days {:.2}x)",
            p.factors.injury, p.factors.missed_days
        ))
        .dim()
    );
}

/// Print the closing summary: insights panel, growth ranking and both top-N tables
pub fn display_summary(insights: &InjuryInsights, visuals_dir: Option<&Path>) {
    print_rule("FOOTBALL INJURY ANALYSIS — Summary");

    print_indented(&insights_panel(insights));

    print_title("Injury Growth Summary (sorted by injury growth)");
    print_indented(&growth_table(insights));

    print_title(&format!(
        "Top {} — Most Missed Days After 22",
        insights.most_missed_days.len()
    ));
    print_indented(&most_missed_table(&insights.most_missed_days));

    print_title(&format!(
        "Top {} — Ironmen (Fewest Injuries After 22)",
        insights.ironmen.len()
    ));
    print_indented(&ironmen_table(&insights.ironmen));

    if let Some(dir) = visuals_dir {
        println!();
        println!(
            "    {} Visuals saved in {} folder.",
            style("📁").green(),
            style(dir.display()).bold()
        );
    }
}
