//! Head-to-head radar chart drawn on a cartesian canvas

use std::f64::consts::PI;

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::theme::{ChartStyle, GREY, LIGHT_GREY, PANEL, PLAYER_PALETTE};
use super::{short_name, surname_slug, Chart};
use crate::pipeline::Comparison;

pub const RINGS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];

const LABEL_RADIUS: f64 = 1.12;
const RING_LABEL_ANGLE: f64 = PI / 8.0;

pub struct RadarChart<'a> {
    pub comparison: &'a Comparison,
}

impl<'a> RadarChart<'a> {
    pub fn new(comparison: &'a Comparison) -> Self {
        Self { comparison }
    }

    pub fn title(&self) -> String {
        let names: Vec<&str> = self
            .comparison
            .profiles
            .iter()
            .map(|p| short_name(&p.player))
            .collect();
        format!("Best of the Best: {}", names.join(" vs "))
    }

    /// Spoke angles in radians, counter-clockwise from the positive x axis
    pub fn angles(n: usize) -> Vec<f64> {
        (0..n).map(|k| k as f64 / n as f64 * 2.0 * PI).collect()
    }

    /// Cartesian vertices of a closed polygon through `values` on the spokes
    pub fn polygon(values: &[f64]) -> Vec<(f64, f64)> {
        let angles = Self::angles(values.len());
        let mut points: Vec<(f64, f64)> = values
            .iter()
            .zip(&angles)
            .map(|(&r, &a)| (r * a.cos(), r * a.sin()))
            .collect();
        if let Some(&first) = points.first() {
            points.push(first);
        }
        points
    }

    fn circle(radius: f64) -> Vec<(f64, f64)> {
        (0..=120)
            .map(|i| {
                let a = i as f64 / 120.0 * 2.0 * PI;
                (radius * a.cos(), radius * a.sin())
            })
            .collect()
    }

    fn label_anchor(angle: f64) -> Pos {
        let (c, s) = (angle.cos(), angle.sin());
        let h = if c > 0.1 {
            HPos::Left
        } else if c < -0.1 {
            HPos::Right
        } else {
            HPos::Center
        };
        let v = if s > 0.1 {
            VPos::Bottom
        } else if s < -0.1 {
            VPos::Top
        } else {
            VPos::Center
        };
        Pos::new(h, v)
    }
}

impl Chart for RadarChart<'_> {
    fn file_stem(&self) -> String {
        let slugs: Vec<String> = self
            .comparison
            .profiles
            .iter()
            .map(|p| surname_slug(&p.player))
            .collect();
        format!("radar_{}", slugs.join("_vs_"))
    }

    fn figsize(&self) -> (f64, f64) {
        (7.0, 7.0)
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, style: &ChartStyle) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE)?;
        let area = root.titled(&self.title(), style.bold(15.0))?;

        // Keep the unit circle round on a non-square area
        let margin = style.px_i(45.0);
        let (w, h) = area.dim_in_pixel();
        let x_half = 1.5;
        let y_half =
            x_half * (h as f64 - 2.0 * margin as f64) / (w as f64 - 2.0 * margin as f64).max(1.0);

        let mut chart = ChartBuilder::on(&area)
            .margin(margin)
            .build_cartesian_2d(-x_half..x_half, -y_half..y_half)?;

        chart.draw_series(std::iter::once(Polygon::new(
            Self::circle(1.0),
            PANEL.filled(),
        )))?;

        let grid = LIGHT_GREY.stroke_width(style.px_u(0.8).max(1));
        chart.draw_series(
            RINGS
                .iter()
                .map(|&r| PathElement::new(Self::circle(r), grid)),
        )?;

        let metrics = &self.comparison.metrics;
        let angles = Self::angles(metrics.len());
        chart.draw_series(
            angles
                .iter()
                .map(|&a| PathElement::new(vec![(0.0, 0.0), (a.cos(), a.sin())], grid)),
        )?;

        chart.draw_series(RINGS.iter().map(|&r| {
            Text::new(
                format!("{:.1}", r),
                (r * RING_LABEL_ANGLE.cos(), r * RING_LABEL_ANGLE.sin()),
                style
                    .font(9.0)
                    .color(&GREY)
                    .pos(Pos::new(HPos::Left, VPos::Bottom)),
            )
        }))?;

        chart.draw_series(metrics.iter().zip(&angles).map(|(m, &a)| {
            Text::new(
                m.label(),
                (LABEL_RADIUS * a.cos(), LABEL_RADIUS * a.sin()),
                style.bold(11.0).color(&BLACK).pos(Self::label_anchor(a)),
            )
        }))?;

        for (idx, profile) in self.comparison.profiles.iter().enumerate() {
            let color = PLAYER_PALETTE[idx % PLAYER_PALETTE.len()];
            let points = Self::polygon(&profile.normalized);

            chart.draw_series(std::iter::once(Polygon::new(
                points.clone(),
                color.mix(0.15).filled(),
            )))?;

            let legend_width = style.px_i(14.0);
            let legend_stroke = style.px_u(2.0).max(1);
            chart
                .draw_series(std::iter::once(PathElement::new(
                    points.clone(),
                    color.stroke_width(style.px_u(2.8).max(1)),
                )))?
                .label(profile.player.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + legend_width, y)],
                        color.stroke_width(legend_stroke),
                    )
                });

            let marker = style.px_u(3.0);
            chart.draw_series(
                points
                    .iter()
                    .take(profile.normalized.len())
                    .map(|&p| Circle::new(p, marker, color.filled())),
            )?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font(style.font(10.0))
            .background_style(WHITE.mix(0.9))
            .border_style(LIGHT_GREY)
            .draw()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{ComparisonProfile, Metric};

    fn comparison(names: &[&str]) -> Comparison {
        Comparison {
            metrics: Metric::ALL.to_vec(),
            profiles: names
                .iter()
                .map(|n| ComparisonProfile {
                    player: n.to_string(),
                    raw: vec![1.0; 4],
                    normalized: vec![1.0; 4],
                })
                .collect(),
            missing: Vec::new(),
        }
    }

    #[test]
    fn test_file_stem_and_title() {
        let c = comparison(&["Lionel Messi", "Cristiano Ronaldo"]);
        let chart = RadarChart::new(&c);
        assert_eq!(chart.file_stem(), "radar_messi_vs_ronaldo");
        assert_eq!(chart.title(), "Best of the Best: Messi vs Ronaldo");
    }

    #[test]
    fn test_polygon_is_closed() {
        let points = RadarChart::polygon(&[1.0, 0.5, 0.25, 0.0]);
        assert_eq!(points.len(), 5);
        assert_eq!(points.first(), points.last());
        assert!((points[0].0 - 1.0).abs() < 1e-12);
        assert!(points[1].0.abs() < 1e-12);
        assert!((points[1].1 - 0.5).abs() < 1e-12);
        assert!((points[2].0 + 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_angles_evenly_spaced() {
        let angles = RadarChart::angles(4);
        assert_eq!(angles.len(), 4);
        assert!((angles[1] - PI / 2.0).abs() < 1e-12);
        assert!((angles[3] - 3.0 * PI / 2.0).abs() < 1e-12);
    }
}
