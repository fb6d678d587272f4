//! Early workload vs later injury burden scatter plot

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::theme::{interp, position_color, ChartStyle, GREY, INK, LIGHT_GREY, PINK};
use super::Chart;
use crate::pipeline::PlayerRecord;

/// Vertical offset of player labels above their marker, in missed days
pub const LABEL_OFFSET: f64 = 40.0;

/// Marker area range in pt², mapped from the injuries-after-22 range
pub const MARKER_AREA: (f64, f64) = (60.0, 300.0);

/// Reference levels shown in the marker-size legend
pub const SIZE_LEVELS: [f64; 5] = [10.0, 20.0, 30.0, 40.0, 50.0];

pub struct WorkloadChart<'a> {
    pub records: &'a [PlayerRecord],
}

impl<'a> WorkloadChart<'a> {
    pub fn new(records: &'a [PlayerRecord]) -> Self {
        Self { records }
    }

    /// Marker radius in points for a player with `injuries_after` injuries
    pub fn marker_radius_pt(&self, injuries_after: u32) -> f64 {
        let (lo, hi) = self.injuries_range();
        let area = interp(injuries_after as f64, (lo, hi), MARKER_AREA);
        (area / std::f64::consts::PI).sqrt()
    }

    /// Legend marker diameter in points for a reference level
    pub fn legend_marker_pt(level: f64) -> f64 {
        interp(level, (SIZE_LEVELS[0], SIZE_LEVELS[4]), (6.0, 14.0))
    }

    fn injuries_range(&self) -> (f64, f64) {
        let values = self.records.iter().map(|r| r.injuries_after as f64);
        let lo = values.clone().fold(f64::INFINITY, f64::min);
        let hi = values.fold(f64::NEG_INFINITY, f64::max);
        if lo.is_finite() {
            (lo, hi)
        } else {
            (0.0, 0.0)
        }
    }

    fn axis_max(values: impl Iterator<Item = f64>, pad: f64) -> f64 {
        let max = values.fold(0.0, f64::max);
        if max > 0.0 {
            (max + pad) * 1.12
        } else {
            1.0
        }
    }

    fn draw_legend<DB>(&self, area: &DrawingArea<DB, Shift>, style: &ChartStyle) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let x0 = style.px_i(8.0);
        let line = style.px_i(18.0);
        let text_x = x0 + style.px_i(24.0);
        let marker_x = x0 + style.px_i(10.0);
        let label_style = style.font(10.0).color(&BLACK).pos(Pos::new(HPos::Left, VPos::Center));

        // Position legend
        let mut y = style.px_i(40.0);
        let top = y - style.px_i(12.0);
        area.draw(&Text::new(
            "Position",
            (x0, y),
            style.bold(11.0).color(&BLACK).pos(Pos::new(HPos::Left, VPos::Center)),
        ))?;
        for (label, color) in [("RW", INK), ("LW", PINK)] {
            y += line;
            area.draw(&Circle::new((marker_x, y), style.px_u(5.0), color.filled()))?;
            area.draw(&Text::new(label, (text_x, y), label_style.clone()))?;
        }
        area.draw(&Rectangle::new(
            [(x0 - style.px_i(4.0), top), (text_x + style.px_i(70.0), y + style.px_i(12.0))],
            LIGHT_GREY.stroke_width(style.px_u(0.8).max(1)),
        ))?;

        // Size legend
        y += style.px_i(48.0);
        let top = y - style.px_i(12.0);
        area.draw(&Text::new(
            "Injuries after 22",
            (x0, y),
            style.bold(11.0).color(&BLACK).pos(Pos::new(HPos::Left, VPos::Center)),
        ))?;
        for level in SIZE_LEVELS {
            y += line;
            let radius = style.px_u(Self::legend_marker_pt(level) / 2.0);
            area.draw(&Circle::new((marker_x, y), radius, GREY.filled()))?;
            area.draw(&Text::new(
                format!("{}", level as u32),
                (text_x, y),
                label_style.clone(),
            ))?;
        }
        area.draw(&Rectangle::new(
            [(x0 - style.px_i(4.0), top), (text_x + style.px_i(70.0), y + style.px_i(12.0))],
            LIGHT_GREY.stroke_width(style.px_u(0.8).max(1)),
        ))?;

        Ok(())
    }
}

impl Chart for WorkloadChart<'_> {
    fn file_stem(&self) -> String {
        "workload_vs_durability_labeled".to_string()
    }

    fn figsize(&self) -> (f64, f64) {
        (11.0, 7.0)
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, style: &ChartStyle) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE)?;

        let (width, _) = root.dim_in_pixel();
        let (plot_area, legend_area) = root.split_horizontally((width as f64 * 0.8) as i32);

        let x_max = Self::axis_max(self.records.iter().map(|r| r.matches_before as f64), 0.0);
        let y_max = Self::axis_max(
            self.records.iter().map(|r| r.missed_days_after as f64),
            LABEL_OFFSET,
        );

        let mut chart = ChartBuilder::on(&plot_area)
            .caption(
                "Does Early Workload Predict Later Injury Burden?",
                style.bold(14.0),
            )
            .margin(style.px_i(10.0))
            .x_label_area_size(style.px_i(40.0))
            .y_label_area_size(style.px_i(55.0))
            .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;

        chart
            .configure_mesh()
            .x_desc("Matches Before Age 22")
            .y_desc("Missed Days After 22")
            .axis_desc_style(style.bold(12.0))
            .label_style(style.font(10.0))
            .x_label_formatter(&|v| format!("{:.0}", v))
            .y_label_formatter(&|v| format!("{:.0}", v))
            .draw()?;

        chart.draw_series(self.records.iter().map(|r| {
            Circle::new(
                (r.matches_before as f64, r.missed_days_after as f64),
                style.px_u(self.marker_radius_pt(r.injuries_after)),
                position_color(&r.position).mix(0.85).filled(),
            )
        }))?;

        let name_style = style
            .bold(9.0)
            .color(&BLACK.mix(0.9))
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(self.records.iter().map(|r| {
            Text::new(
                r.name.clone(),
                (
                    r.matches_before as f64,
                    r.missed_days_after as f64 + LABEL_OFFSET,
                ),
                name_style.clone(),
            )
        }))?;

        self.draw_legend(&legend_area, style)
    }
}
