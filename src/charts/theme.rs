//! Chart palette, sizing and typography

use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};

pub const BEFORE_BLUE: RGBColor = RGBColor(0x34, 0x98, 0xdb);
pub const AFTER_YELLOW: RGBColor = RGBColor(0xf1, 0xc4, 0x0f);
pub const PINK: RGBColor = RGBColor(0xff, 0x99, 0xcc);
pub const INK: RGBColor = RGBColor(0x00, 0x00, 0x00);
pub const AMBER: RGBColor = RGBColor(0xff, 0xbf, 0x00);
pub const SKY: RGBColor = RGBColor(0x66, 0xb3, 0xff);
pub const MAGENTA: RGBColor = RGBColor(0xff, 0x66, 0xcc);
pub const GREY: RGBColor = RGBColor(0x66, 0x66, 0x66);
pub const LIGHT_GREY: RGBColor = RGBColor(0xd0, 0xd0, 0xd0);
pub const PANEL: RGBColor = RGBColor(0xf9, 0xf9, 0xf9);
pub const GRID: RGBColor = RGBColor(0xea, 0xea, 0xf2);

/// Series colours for the radar chart, in player order
pub const PLAYER_PALETTE: [RGBColor; 6] = [
    BEFORE_BLUE,
    AMBER,
    RGBColor(0x2e, 0xcc, 0x71),
    RGBColor(0xe7, 0x4c, 0x3c),
    RGBColor(0x9b, 0x59, 0xb6),
    RGBColor(0x1a, 0xbc, 0x9c),
];

/// Marker colour for a playing position
pub fn position_color(position: &str) -> RGBColor {
    match position.trim().to_uppercase().as_str() {
        "RW" => INK,
        "LW" => PINK,
        _ => GREY,
    }
}

/// Diverging blue-white-red palette over [-1, 1]; NaN maps to light grey
pub fn coolwarm(value: f64) -> RGBColor {
    const COOL: (f64, f64, f64) = (59.0, 76.0, 192.0);
    const NEUTRAL: (f64, f64, f64) = (221.0, 221.0, 221.0);
    const WARM: (f64, f64, f64) = (180.0, 4.0, 38.0);

    if value.is_nan() {
        return LIGHT_GREY;
    }

    let v = value.clamp(-1.0, 1.0);
    let (from, to, t) = if v < 0.0 {
        (COOL, NEUTRAL, v + 1.0)
    } else {
        (NEUTRAL, WARM, v)
    };

    let mix = |a: f64, b: f64| (a + (b - a) * t).round() as u8;
    RGBColor(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

/// Linear interpolation of `x` from `[x0, x1]` onto `[y0, y1]`, clamped at both ends
pub fn interp(x: f64, (x0, x1): (f64, f64), (y0, y1): (f64, f64)) -> f64 {
    if x1 == x0 {
        return y0;
    }
    let t = ((x - x0) / (x1 - x0)).clamp(0.0, 1.0);
    y0 + (y1 - y0) * t
}

/// Converts figure inches and typographic points into pixels at a fixed DPI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub dpi: u32,
}

impl ChartStyle {
    pub fn new(dpi: u32) -> Self {
        Self { dpi }
    }

    /// Pixel dimensions of a `(width, height)` figure in inches
    pub fn size(&self, figsize: (f64, f64)) -> (u32, u32) {
        let dpi = self.dpi as f64;
        ((figsize.0 * dpi).round() as u32, (figsize.1 * dpi).round() as u32)
    }

    /// Pixel length of `points` (1/72 inch)
    pub fn px(&self, points: f64) -> f64 {
        points * self.dpi as f64 / 72.0
    }

    pub fn px_i(&self, points: f64) -> i32 {
        self.px(points).round() as i32
    }

    pub fn px_u(&self, points: f64) -> u32 {
        self.px(points).round().max(0.0) as u32
    }

    pub fn font(&self, points: f64) -> FontDesc<'static> {
        FontDesc::new(FontFamily::SansSerif, self.px(points), FontStyle::Normal)
    }

    pub fn bold(&self, points: f64) -> FontDesc<'static> {
        FontDesc::new(FontFamily::SansSerif, self.px(points), FontStyle::Bold)
    }
}
