//! Radial gauge: a 220 degree arc that fills clockwise with the value, an
//! optional ring of hash marks, and the value, range and label as text.

use std::f64::consts::FRAC_PI_2;

use bon::Builder;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::GaugeGeometry;
use crate::error::{Error, Result};
use crate::text::{draw_text, FontSet, TextSize};

/// Number of hash mark positions around a full circle.
const MARK_POSITIONS: usize = 60;

/// Positions that fall into the gap at the bottom of the dial.
const MARK_GAP: std::ops::RangeInclusive<usize> = 20..=40;

/// The value shown on a gauge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GaugeReading {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl GaugeReading {
    /// Text shown in the middle of the gauge; floats keep two decimals.
    pub fn format(&self) -> String {
        match self {
            GaugeReading::Int(v) => v.to_string(),
            GaugeReading::UInt(v) => v.to_string(),
            GaugeReading::Float(v) => format!("{v:.2}"),
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            GaugeReading::Int(v) => v as f64,
            GaugeReading::UInt(v) => v as f64,
            GaugeReading::Float(v) => v,
        }
    }
}

macro_rules! reading_from {
    ($variant:ident, $target:ty, $($source:ty),+) => {
        $(
            impl From<$source> for GaugeReading {
                fn from(value: $source) -> Self {
                    GaugeReading::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

reading_from!(Int, i64, i8, i16, i32, i64);
reading_from!(UInt, u64, u8, u16, u32, u64);
reading_from!(Float, f64, f32, f64);

/// Everything needed to draw one gauge.
#[derive(Debug, Clone, Builder)]
pub struct Gauge {
    #[builder(into)]
    pub label: String,
    /// Appended to the value, e.g. `"%"` or `" rpm"`.
    #[builder(default, into)]
    pub suffix: String,
    #[builder(into)]
    pub value: GaugeReading,
    pub min: i64,
    pub max: i64,
    /// Color of the unfilled arc and of the range labels.
    pub bg_color: Color,
    /// Color of the filled arc, the value and the label.
    pub fg_color: Color,
    #[builder(default = true)]
    pub hash_marks: bool,
}

impl Gauge {
    /// Fraction of the dial covered by the value, clamped to [0, 1].
    pub fn fill_ratio(&self) -> Result<f64> {
        if self.min >= self.max {
            return Err(Error::InvalidGaugeRange {
                min: self.min,
                max: self.max,
            });
        }
        let span = self.max as f64 - self.min as f64;
        Ok(((self.value.as_f64() - self.min as f64) / span).clamp(0.0, 1.0))
    }

    pub fn display_text(&self) -> String {
        format!("{}{}", self.value.format(), self.suffix)
    }
}

/// A single tick around the dial, drawn from `outer` to `inner`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashMark {
    pub outer: (i32, i32),
    pub inner: (i32, i32),
    pub major: bool,
}

impl HashMark {
    pub fn color(&self) -> Color {
        if self.major {
            Color::BLACK
        } else {
            Color::DARKGREY
        }
    }
}

/// Ticks every 6 degrees, starting at twelve o'clock and going clockwise,
/// skipping the gap at the bottom. Even positions are long major marks, odd
/// positions short minor ones.
pub fn hash_marks(geometry: &GaugeGeometry) -> Vec<HashMark> {
    let center = f64::from(geometry.center);
    let outer = f64::from(geometry.outer_radius());
    let major_inner = outer - f64::from(geometry.major_mark_len());
    let minor_inner = outer - f64::from(geometry.minor_mark_len());
    let step = (360.0 / MARK_POSITIONS as f64).to_radians();

    (0..MARK_POSITIONS)
        .filter(|i| !MARK_GAP.contains(i))
        .map(|i| {
            let major = i % 2 == 0;
            let inner = if major { major_inner } else { minor_inner };
            let angle = step * i as f64 - FRAC_PI_2;
            let (x, y) = (angle.cos(), angle.sin());
            HashMark {
                outer: ((x * outer + center) as i32, (y * outer + center) as i32),
                inner: ((x * inner + center) as i32, (y * inner + center) as i32),
                major,
            }
        })
        .collect()
}

/// Draws the arc band and, if enabled, the hash marks.
pub fn draw_dial(canvas: &mut Canvas, geometry: &GaugeGeometry, gauge: &Gauge) -> Result<()> {
    let ratio = gauge.fill_ratio()?;
    let c = geometry.center;
    let (outer, inner) = (geometry.outer_radius(), geometry.inner_radius());
    let (start, end) = (geometry.start_deg, geometry.end_deg());

    if gauge.value.as_f64() > gauge.min as f64 {
        let split = start + geometry.sweep_deg * ratio as f32;
        canvas.draw_smooth_arc(c, c, outer, inner, split, end, gauge.bg_color, gauge.bg_color, true);
        canvas.draw_smooth_arc(c, c, outer, inner, start, split, gauge.fg_color, gauge.bg_color, true);
    } else {
        canvas.draw_smooth_arc(c, c, outer, inner, start, end, gauge.fg_color, gauge.fg_color, true);
    }

    if gauge.hash_marks {
        for mark in hash_marks(geometry) {
            canvas.draw_line(
                mark.outer.0,
                mark.outer.1,
                mark.inner.0,
                mark.inner.1,
                mark.color(),
            );
        }
    }
    Ok(())
}

/// Draws a full gauge: dial, value, range labels and title.
pub fn draw_gauge(
    canvas: &mut Canvas,
    fonts: &FontSet,
    geometry: &GaugeGeometry,
    gauge: &Gauge,
) -> Result<()> {
    draw_dial(canvas, geometry, gauge)?;

    let large = fonts.face(TextSize::Large);
    let small = fonts.face(TextSize::Small);
    let mid = canvas.width() as i32 / 2;

    let value = gauge.display_text();
    let x = mid - large.text_width(&value) / 2;
    draw_text(canvas, large, &value, x, geometry.value_y, gauge.fg_color, Color::BLACK);

    let (min_x, min_y) = geometry.min_label;
    draw_text(canvas, small, &gauge.min.to_string(), min_x, min_y, gauge.bg_color, Color::BLACK);
    let (max_x, max_y) = geometry.max_label;
    draw_text(canvas, small, &gauge.max.to_string(), max_x, max_y, gauge.bg_color, Color::BLACK);

    let x = mid - large.text_width(&gauge.label) / 2;
    draw_text(canvas, large, &gauge.label, x, geometry.title_y, gauge.fg_color, Color::BLACK);
    Ok(())
}
