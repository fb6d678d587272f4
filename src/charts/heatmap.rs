//! Annotated correlation heatmap with a colour bar

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::theme::{coolwarm, ChartStyle};
use super::Chart;
use crate::pipeline::CorrelationMatrix;

pub struct CorrelationHeatmap<'a> {
    pub matrix: &'a CorrelationMatrix,
}

impl<'a> CorrelationHeatmap<'a> {
    pub fn new(matrix: &'a CorrelationMatrix) -> Self {
        Self { matrix }
    }

    /// Annotation text for a cell
    pub fn annotation(value: f64) -> String {
        if value.is_nan() {
            "nan".to_string()
        } else {
            format!("{:.2}", value)
        }
    }

    fn draw_colorbar<DB>(&self, area: &DrawingArea<DB, Shift>, style: &ChartStyle) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        const STEPS: usize = 200;

        let mut bar = ChartBuilder::on(area)
            .margin_top(style.px_i(30.0))
            .margin_bottom(style.px_i(60.0))
            .margin_left(style.px_i(6.0))
            .set_label_area_size(LabelAreaPosition::Right, style.px_i(55.0))
            .build_cartesian_2d(0f64..1f64, -1f64..1f64)?;

        bar.configure_mesh()
            .disable_mesh()
            .disable_x_axis()
            .y_labels(5)
            .y_label_formatter(&|v| format!("{:.1}", v))
            .y_desc("Correlation Strength")
            .label_style(style.font(9.0))
            .axis_desc_style(style.font(10.0))
            .draw()?;

        let step = 2.0 / STEPS as f64;
        bar.draw_series((0..STEPS).map(|i| {
            let lo = -1.0 + i as f64 * step;
            Rectangle::new([(0.0, lo), (1.0, lo + step)], coolwarm(lo + step / 2.0).filled())
        }))?;

        Ok(())
    }
}

impl Chart for CorrelationHeatmap<'_> {
    fn file_stem(&self) -> String {
        "correlation_heatmap_styled".to_string()
    }

    fn figsize(&self) -> (f64, f64) {
        (7.0, 5.0)
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, style: &ChartStyle) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE)?;
        let area = root.titled(
            "Correlation Matrix: Workload & Injury Metrics",
            style.bold(13.0),
        )?;

        let (width, _) = area.dim_in_pixel();
        let (grid_area, bar_area) = area.split_horizontally((width as f64 * 0.84) as i32);

        let n = self.matrix.size() as u32;
        let labels = self.matrix.labels();

        let mut chart = ChartBuilder::on(&grid_area)
            .margin(style.px_i(6.0))
            .x_label_area_size(style.px_i(30.0))
            .y_label_area_size(style.px_i(115.0))
            .build_cartesian_2d((0u32..n).into_segmented(), (0u32..n).into_segmented())?;

        // Row 0 is drawn at the top, so the y axis reads its labels in reverse
        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(labels.len())
            .y_labels(labels.len())
            .x_label_formatter(&|v: &SegmentValue<u32>| match v {
                SegmentValue::CenterOf(j) => labels
                    .get(*j as usize)
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .y_label_formatter(&|v: &SegmentValue<u32>| match v {
                SegmentValue::CenterOf(y) if *y < n => labels
                    .get((n - 1 - *y) as usize)
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .x_label_style(style.bold(8.0))
            .y_label_style(style.bold(8.0))
            .draw()?;

        let cells: Vec<(u32, u32, f64)> = (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .map(|(i, j)| (n - 1 - i, j, self.matrix.get(i as usize, j as usize)))
            .collect();

        chart.draw_series(cells.iter().map(|&(y, x, v)| {
            Rectangle::new(
                [
                    (SegmentValue::Exact(x), SegmentValue::Exact(y)),
                    (SegmentValue::Exact(x + 1), SegmentValue::Exact(y + 1)),
                ],
                coolwarm(v).filled(),
            )
        }))?;

        let border = WHITE.stroke_width(style.px_u(1.0).max(1));
        chart.draw_series(cells.iter().map(|&(y, x, _)| {
            Rectangle::new(
                [
                    (SegmentValue::Exact(x), SegmentValue::Exact(y)),
                    (SegmentValue::Exact(x + 1), SegmentValue::Exact(y + 1)),
                ],
                border,
            )
        }))?;

        chart.draw_series(cells.iter().map(|&(y, x, v)| {
            let ink = if v.abs() > 0.6 { WHITE } else { BLACK };
            Text::new(
                Self::annotation(v),
                (SegmentValue::CenterOf(x), SegmentValue::CenterOf(y)),
                style.bold(10.0).color(&ink).pos(Pos::new(HPos::Center, VPos::Center)),
            )
        }))?;

        self.draw_colorbar(&bar_area, style)
    }
}
