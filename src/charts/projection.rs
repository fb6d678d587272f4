//! Single-prospect durability projection figure

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::theme::{ChartStyle, MAGENTA, SKY};
use super::{first_name_slug, Chart};
use crate::pipeline::Projection;

const CATEGORIES: [&str; 2] = ["Before 22", "Predicted After 22"];

pub struct ProjectionChart<'a> {
    pub projection: &'a Projection,
}

impl<'a> ProjectionChart<'a> {
    pub fn new(projection: &'a Projection) -> Self {
        Self { projection }
    }

    pub fn title(&self) -> String {
        format!(
            "Visual 6 — {}: Single-Player Durability Projection",
            self.projection.prospect.name
        )
    }

    /// Text block printed under the two bar panels
    pub fn summary_lines(&self) -> Vec<String> {
        let p = self.projection;
        vec![
            format!("{} — Durability Projection", p.prospect.name),
            format!("• Matches before 22: {}", p.prospect.matches_before),
            format!("• Injuries before 22: {}", p.prospect.injuries_before),
            format!("• Missed days before 22: {}", p.prospect.missed_days_before),
            format!("• Predicted injuries after 22: {:.0}", p.projected_injuries),
            format!(
                "• Predicted missed days after 22: {:.0}",
                p.projected_missed_days
            ),
            String::new(),
            "Note: Projection uses average post-22 growth factors from elite winger dataset"
                .to_string(),
        ]
    }

    fn draw_panel<DB>(
        area: &DrawingArea<DB, Shift>,
        style: &ChartStyle,
        title: &str,
        y_desc: &str,
        values: [f64; 2],
        label_offset: f64,
    ) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let top = values.iter().copied().fold(0.0, f64::max);
        let y_max = if top > 0.0 {
            top * 1.2 + label_offset
        } else {
            1.0
        };

        let mut chart = ChartBuilder::on(area)
            .caption(title, style.bold(12.0))
            .margin(style.px_i(8.0))
            .x_label_area_size(style.px_i(22.0))
            .y_label_area_size(style.px_i(45.0))
            .build_cartesian_2d((0u32..2).into_segmented(), 0f64..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(2)
            .x_label_formatter(&|v: &SegmentValue<u32>| match v {
                SegmentValue::CenterOf(i) => CATEGORIES
                    .get(*i as usize)
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .y_desc(y_desc)
            .label_style(style.font(9.0))
            .axis_desc_style(style.font(10.0))
            .draw()?;

        let gap = style.px_u(30.0);
        let colors = [SKY, MAGENTA];
        let outline = BLACK.stroke_width(style.px_u(0.8).max(1));

        for (i, &v) in values.iter().enumerate() {
            let corners = [
                (SegmentValue::Exact(i as u32), 0.0),
                (SegmentValue::Exact(i as u32 + 1), v),
            ];

            let mut fill = Rectangle::new(corners.clone(), colors[i].filled());
            fill.set_margin(0, 0, gap, gap);
            let mut edge = Rectangle::new(corners, outline);
            edge.set_margin(0, 0, gap, gap);

            chart.draw_series([fill, edge])?;
            chart.draw_series(std::iter::once(Text::new(
                format!("{:.0}", v),
                (SegmentValue::CenterOf(i as u32), v + label_offset),
                style
                    .bold(10.0)
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Center, VPos::Bottom)),
            )))?;
        }

        Ok(())
    }
}

impl Chart for ProjectionChart<'_> {
    fn file_stem(&self) -> String {
        format!(
            "visual6_{}_projection",
            first_name_slug(&self.projection.prospect.name)
        )
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
        let area = root.titled(&self.title(), style.bold(14.0))?;

        let (width, height) = area.dim_in_pixel();
        let (panels, text_area) = area.split_vertically((height as f64 * 0.62) as i32);
        let (left, right) = panels.split_horizontally((width / 2) as i32);

        let p = self.projection;
        Self::draw_panel(
            &left,
            style,
            "Injuries",
            "Count",
            [p.prospect.injuries_before as f64, p.projected_injuries],
            1.0,
        )?;
        Self::draw_panel(
            &right,
            style,
            "Missed Days",
            "Days",
            [p.prospect.missed_days_before as f64, p.projected_missed_days],
            10.0,
        )?;

        let line_height = style.px_i(14.0);
        let x = style.px_i(14.0);
        let mut y = style.px_i(8.0);
        for (i, line) in self.summary_lines().into_iter().enumerate() {
            let font = if i == 0 {
                style.bold(11.0)
            } else {
                style.font(11.0)
            };
            text_area.draw(&Text::new(
                line,
                (x, y),
                font.color(&BLACK).pos(Pos::new(HPos::Left, VPos::Top)),
            ))?;
            y += line_height;
        }

        Ok(())
    }
}
