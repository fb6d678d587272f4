//! Chart rendering with plotters
//!
//! Every chart implements [`Chart`] once, generically over the drawing backend,
//! and [`render_all`] writes the whole set to disk in parallel as PNG or SVG.

pub mod bars;
pub mod heatmap;
pub mod projection;
pub mod radar;
pub mod theme;
pub mod workload;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use plotters::coord::Shift;
use plotters::prelude::*;
use rayon::prelude::*;

use crate::pipeline::{Comparison, CorrelationMatrix, PlayerRecord, Projection};

pub use bars::StackedBarChart;
pub use heatmap::CorrelationHeatmap;
pub use projection::ProjectionChart;
pub use radar::RadarChart;
pub use theme::ChartStyle;
pub use workload::WorkloadChart;

/// Image format for chart output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ChartFormat {
    #[default]
    Png,
    Svg,
}

impl ChartFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ChartFormat::Png => "png",
            ChartFormat::Svg => "svg",
        }
    }
}

/// A single figure that can be drawn on any plotters backend
pub trait Chart: Sync {
    /// File name without extension
    fn file_stem(&self) -> String;

    /// Figure size in inches
    fn figsize(&self) -> (f64, f64);

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, style: &ChartStyle) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static;
}

/// Output settings shared by every chart in a run
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub format: ChartFormat,
    pub style: ChartStyle,
}

/// Draw one chart into `dir`, returning the written path
pub fn render<C: Chart>(chart: &C, dir: &Path, options: &RenderOptions) -> Result<PathBuf> {
    let path = dir.join(format!(
        "{}.{}",
        chart.file_stem(),
        options.format.extension()
    ));
    let size = options.style.size(chart.figsize());

    match options.format {
        ChartFormat::Png => {
            let root = BitMapBackend::new(&path, size).into_drawing_area();
            chart.draw(&root, &options.style)?;
            root.present()
                .with_context(|| format!("Failed to write chart: {}", path.display()))?;
        }
        ChartFormat::Svg => {
            let root = SVGBackend::new(&path, size).into_drawing_area();
            chart.draw(&root, &options.style)?;
            root.present()
                .with_context(|| format!("Failed to write chart: {}", path.display()))?;
        }
    }

    Ok(path)
}

/// The fixed chart set of an analysis run
pub enum ChartJob<'a> {
    Stacked(StackedBarChart<'a>),
    Workload(WorkloadChart<'a>),
    Heatmap(CorrelationHeatmap<'a>),
    Radar(RadarChart<'a>),
    Projection(ProjectionChart<'a>),
}

impl ChartJob<'_> {
    pub fn name(&self) -> String {
        match self {
            ChartJob::Stacked(c) => c.file_stem(),
            ChartJob::Workload(c) => c.file_stem(),
            ChartJob::Heatmap(c) => c.file_stem(),
            ChartJob::Radar(c) => c.file_stem(),
            ChartJob::Projection(c) => c.file_stem(),
        }
    }

    pub fn render(&self, dir: &Path, options: &RenderOptions) -> Result<PathBuf> {
        match self {
            ChartJob::Stacked(c) => render(c, dir, options),
            ChartJob::Workload(c) => render(c, dir, options),
            ChartJob::Heatmap(c) => render(c, dir, options),
            ChartJob::Radar(c) => render(c, dir, options),
            ChartJob::Projection(c) => render(c, dir, options),
        }
    }
}

/// The standard chart set for one analysis run.
///
/// The radar chart is left out when no compared player was found.
pub fn chart_jobs<'a>(
    records: &'a [PlayerRecord],
    correlation: &'a CorrelationMatrix,
    comparison: &'a Comparison,
    projection: &'a Projection,
) -> Vec<ChartJob<'a>> {
    let mut jobs = vec![
        ChartJob::Stacked(StackedBarChart::match_distribution(records)),
        ChartJob::Stacked(StackedBarChart::injury_growth(records)),
        ChartJob::Workload(WorkloadChart::new(records)),
        ChartJob::Heatmap(CorrelationHeatmap::new(correlation)),
    ];
    if !comparison.is_empty() {
        jobs.push(ChartJob::Radar(RadarChart::new(comparison)));
    }
    jobs.push(ChartJob::Projection(ProjectionChart::new(projection)));
    jobs
}

/// Render every job into `dir` (created if needed) using the rayon pool.
///
/// Paths are returned in job order. The first failure aborts the run.
pub fn render_all(jobs: &[ChartJob<'_>], dir: &Path, options: &RenderOptions) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    jobs.par_iter()
        .map(|job| {
            job.render(dir, options)
                .with_context(|| format!("Failed to render chart '{}'", job.name()))
        })
        .collect()
}

/// Lowercase ASCII slug of the last word of a player's name ("Lionel Messi" -> "messi")
pub fn surname_slug(name: &str) -> String {
    slugify(name.split_whitespace().last().unwrap_or(name))
}

/// Lowercase ASCII slug of the first word of a player's name ("Lamine Yamal" -> "lamine")
pub fn first_name_slug(name: &str) -> String {
    slugify(name.split_whitespace().next().unwrap_or(name))
}

fn slugify(word: &str) -> String {
    let slug: String = word
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if slug.is_empty() {
        "player".to_string()
    } else {
        slug
    }
}

/// Last word of a name, used in chart titles
pub fn short_name(name: &str) -> &str {
    name.split_whitespace().last().unwrap_or(name)
}
