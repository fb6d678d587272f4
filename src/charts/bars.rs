//! Stacked before/after-22 bar charts

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;

use super::theme::{ChartStyle, AFTER_YELLOW, BEFORE_BLUE, INK, PINK};
use super::Chart;
use crate::pipeline::PlayerRecord;

/// One bar per player: the before-22 segment with the after-22 segment stacked on top
pub struct StackedBarChart<'a> {
    pub file_stem: &'static str,
    pub title: &'static str,
    pub y_desc: &'static str,
    pub players: Vec<&'a str>,
    pub before: Vec<f64>,
    pub after: Vec<f64>,
    pub before_color: RGBColor,
    pub after_color: RGBColor,
}

impl<'a> StackedBarChart<'a> {
    pub fn match_distribution(records: &'a [PlayerRecord]) -> Self {
        Self {
            file_stem: "match_distribution",
            title: "Career Match Distribution: Before vs After Age 22",
            y_desc: "Matches Played",
            players: records.iter().map(|r| r.name.as_str()).collect(),
            before: records.iter().map(|r| r.matches_before as f64).collect(),
            after: records.iter().map(|r| r.matches_after as f64).collect(),
            before_color: BEFORE_BLUE,
            after_color: AFTER_YELLOW,
        }
    }

    pub fn injury_growth(records: &'a [PlayerRecord]) -> Self {
        Self {
            file_stem: "injury_growth",
            title: "Injury Count Growth: Before vs After Age 22",
            y_desc: "Number of Injuries",
            players: records.iter().map(|r| r.name.as_str()).collect(),
            before: records.iter().map(|r| r.injuries_before as f64).collect(),
            after: records.iter().map(|r| r.injuries_after as f64).collect(),
            before_color: PINK,
            after_color: INK,
        }
    }

    /// Upper bound of the value axis: tallest stack plus 10% headroom
    pub fn y_max(&self) -> f64 {
        let tallest = self
            .before
            .iter()
            .zip(&self.after)
            .map(|(b, a)| b + a)
            .fold(0.0, f64::max);

        if tallest > 0.0 {
            tallest * 1.1
        } else {
            1.0
        }
    }
}

impl Chart for StackedBarChart<'_> {
    fn file_stem(&self) -> String {
        self.file_stem.to_string()
    }

    fn figsize(&self) -> (f64, f64) {
        (10.0, 6.0)
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, style: &ChartStyle) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE)?;

        let n = self.players.len() as u32;
        let players = &self.players;

        let mut chart = ChartBuilder::on(root)
            .caption(self.title, style.bold(15.0))
            .margin(style.px_i(10.0))
            .x_label_area_size(style.px_i(95.0))
            .y_label_area_size(style.px_i(55.0))
            .build_cartesian_2d((0u32..n).into_segmented(), 0f64..self.y_max())?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(players.len())
            .x_label_formatter(&|v: &SegmentValue<u32>| match v {
                SegmentValue::CenterOf(i) => players
                    .get(*i as usize)
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .x_label_style(style.font(10.0).transform(FontTransform::Rotate90))
            .y_label_style(style.font(10.0))
            .x_desc("Player")
            .y_desc(self.y_desc)
            .axis_desc_style(style.bold(12.0))
            .draw()?;

        let gap = style.px_u(6.0);
        let bar = |i: usize, y0: f64, y1: f64, color: RGBColor| {
            let mut rect = Rectangle::new(
                [
                    (SegmentValue::Exact(i as u32), y0),
                    (SegmentValue::Exact(i as u32 + 1), y1),
                ],
                color.filled(),
            );
            rect.set_margin(0, 0, gap, gap);
            rect
        };

        // Legend title rides along as a glyph-less series
        chart
            .draw_series(std::iter::empty::<Rectangle<(SegmentValue<u32>, f64)>>())?
            .label("Age Period");

        let swatch = style.px_i(5.0);
        let before_color = self.before_color;
        chart
            .draw_series(
                self.before
                    .iter()
                    .enumerate()
                    .map(|(i, &b)| bar(i, 0.0, b, before_color)),
            )?
            .label("Before 22")
            .legend(move |(x, y)| {
                Rectangle::new(
                    [(x, y - swatch), (x + 2 * swatch, y + swatch)],
                    before_color.filled(),
                )
            });

        let after_color = self.after_color;
        chart
            .draw_series(
                self.before
                    .iter()
                    .zip(&self.after)
                    .enumerate()
                    .map(|(i, (&b, &a))| bar(i, b, b + a, after_color)),
            )?
            .label("After 22")
            .legend(move |(x, y)| {
                Rectangle::new(
                    [(x, y - swatch), (x + 2 * swatch, y + swatch)],
                    after_color.filled(),
                )
            });

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font(style.font(10.0))
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK)
            .draw()?;

        Ok(())
    }
}
