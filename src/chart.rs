//! Sparkline-style line charts with a fading fill under the line.
//!
//! A chart always plots the first [`CHART_LEN`] samples of a series. The
//! samples are normalized into the plot height, drawn as a three pixel thick
//! polyline, and every column then gets a vertical gradient starting right
//! under the line.

use crate::canvas::Canvas;
use crate::color::{Color, Palette};
use crate::error::{Error, Result};

/// Number of samples a chart plots.
pub const CHART_LEN: usize = 30;

/// Palette bands walked by the gradient, top to bottom.
const GRADIENT_BANDS: std::ops::RangeInclusive<usize> = 3..=15;

/// Palette entry used for every gradient pixel on tall charts.
const TALL_GRADIENT_INDEX: usize = 8;

const LINE_THICKNESS: i32 = 3;

/// Horizontal spacing between samples and the sprite height a chart is laid out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    pub spacing: i32,
    pub height: i32,
}

impl ChartLayout {
    pub const STANDARD: ChartLayout = ChartLayout {
        spacing: 7,
        height: 80,
    };
    /// Fills the whole 240 px width.
    pub const WIDE: ChartLayout = ChartLayout {
        spacing: 8,
        height: 80,
    };
    pub const LARGE: ChartLayout = ChartLayout {
        spacing: 8,
        height: 120,
    };

    /// Pixels per gradient band.
    pub fn gradient_step(&self) -> i32 {
        if self.height > 80 {
            self.height / 13
        } else {
            5
        }
    }

    /// Vertical range the normalized samples occupy.
    pub fn plot_height(&self) -> i32 {
        plot_height(self.height)
    }
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}

fn plot_height(height: i32) -> i32 {
    if height > 80 {
        (height / 5) * 4
    } else {
        50
    }
}

/// Maps the first [`CHART_LEN`] samples to row offsets, 0 being the highest sample.
///
/// Samples are first scaled to integers with a multiplier picked from the
/// magnitude of the first sample, truncating toward zero, so small prices keep
/// their decimals. A flat series sits on the bottom of the plot.
pub fn format_chart(values: &[f32], height: i32) -> Result<[i32; CHART_LEN]> {
    if values.len() < CHART_LEN {
        log::warn!("malformed chart data: {} samples", values.len());
        return Err(Error::ChartTooShort {
            len: values.len(),
            required: CHART_LEN,
        });
    }

    let first = values[0];
    let multiplier: f32 = if first >= 1000.0 {
        1.0
    } else if first >= 10.0 {
        100.0
    } else {
        10_000.0
    };

    let mut scaled = [0i64; CHART_LEN];
    for (slot, value) in scaled.iter_mut().zip(values) {
        *slot = (value * multiplier) as i64;
    }
    let hi = scaled.iter().copied().max().unwrap_or(0);
    let lo = scaled.iter().copied().min().unwrap_or(0);

    // Saturated samples can span the whole i64 range.
    let h = i128::from(plot_height(height));
    let diff = i128::from(hi) - i128::from(lo);
    let mut rows = [h as i32; CHART_LEN];
    if diff == 0 {
        return Ok(rows);
    }
    for (row, v) in rows.iter_mut().zip(scaled) {
        let offset = ((i128::from(v) - i128::from(lo)) * h) / diff;
        *row = (h - offset).clamp(0, h) as i32;
    }
    Ok(rows)
}

/// Pixels painted by the gradient for a column whose line ends at row `y`.
///
/// Returns `(row, palette index)` pairs going down from `y`. The walk covers
/// 13 bands of `step` positions; the first `|step - y| - 1` positions are
/// skipped, so lines low in the chart start further into the ramp.
pub fn gradient_run(y: i32, step: i32) -> Vec<(i32, usize)> {
    let mut skip = (step - y).abs();
    let mut row = y;
    let mut run = Vec::new();
    for band in GRADIENT_BANDS {
        for _ in 0..step {
            let prev = skip;
            skip -= 1;
            if prev != 0 && skip > 0 {
                continue;
            }
            let index = if step > 5 { TALL_GRADIENT_INDEX } else { band };
            run.push((row, index));
            row += 1;
        }
    }
    run
}

/// Paints the gradient for one column.
pub fn draw_vertical_gradient(canvas: &mut Canvas, x: i32, y: i32, step: i32, palette: &Palette) {
    for (row, index) in gradient_run(y, step) {
        canvas.set_pixel(x, row, palette.get(index));
    }
}

/// Three stacked one pixel lines.
pub fn draw_graph_line(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    for offset in 0..LINE_THICKNESS {
        canvas.draw_line(x0, y0 + offset, x1, y1 + offset, color);
    }
}

/// Draws the polyline and the fill for already normalized rows onto a black canvas.
pub fn render_chart(
    canvas: &mut Canvas,
    rows: &[i32; CHART_LEN],
    layout: ChartLayout,
    color: Color,
    palette: &Palette,
) {
    // The first sample only anchors the scale; the line starts at the second.
    for i in 0..CHART_LEN - 2 {
        let x = i as i32 * layout.spacing;
        draw_graph_line(
            canvas,
            x,
            rows[i + 1],
            x + layout.spacing,
            rows[i + 2],
            color,
        );
    }

    let step = layout.gradient_step();
    let height = layout.height.min(canvas.height() as i32);
    for x in 0..canvas.width() as i32 {
        for y in 1..height {
            if canvas.pixel(x, y) == Color::BLACK && canvas.pixel(x, y - 1) != Color::BLACK {
                draw_vertical_gradient(canvas, x, y, step, palette);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(start: f32, step: f32) -> Vec<f32> {
        (0..CHART_LEN).map(|i| start + i as f32 * step).collect()
    }

    #[test]
    fn test_short_series_rejected() {
        let err = format_chart(&[1.0; 29], 80).unwrap_err();
        assert!(matches!(
            err,
            Error::ChartTooShort {
                len: 29,
                required: 30
            }
        ));
    }

    #[test]
    fn test_rising_series_spans_plot() {
        let rows = format_chart(&ramp(0.0, 1.0), 80).unwrap();
        assert_eq!(rows[0], 50);
        assert_eq!(rows[1], 49);
        assert_eq!(rows[2], 47);
        assert_eq!(rows[15], 25);
        assert_eq!(rows[29], 0);
    }

    #[test]
    fn test_multiplier_tiers_normalize_alike() {
        let small = format_chart(&ramp(0.5, 0.01), 80).unwrap();
        let medium = format_chart(&ramp(10.0, 1.0), 80).unwrap();
        let large = format_chart(&ramp(1000.0, 1.0), 80).unwrap();
        assert_eq!(medium, large);
        assert_eq!(small[0], 50);
        assert_eq!(small[29], 0);
    }

    #[test]
    fn test_tall_chart_height() {
        let rows = format_chart(&ramp(1000.0, 1.0), 120).unwrap();
        assert_eq!(rows[0], 96);
        assert_eq!(rows[29], 0);
    }

    #[test]
    fn test_flat_series_sits_on_bottom() {
        let rows = format_chart(&[42.0; 40], 80).unwrap();
        assert!(rows.iter().all(|&r| r == 50));
    }

    #[test]
    fn test_only_first_samples_count() {
        let mut values = ramp(1000.0, 1.0);
        values.extend([5000.0, 0.0]);
        let rows = format_chart(&values, 80).unwrap();
        assert_eq!(rows[29], 0);
        assert_eq!(rows[0], 50);
    }

    #[test]
    fn test_extreme_samples_stay_in_plot() {
        let mut values = [0.0f32; CHART_LEN];
        values[0] = 1.0e18;
        let rows = format_chart(&values, 80).unwrap();
        assert_eq!(rows[0], 0);
        assert!(rows[1..].iter().all(|&r| r == 50));

        values[1] = -1.0e30;
        let rows = format_chart(&values, 80).unwrap();
        assert_eq!(rows[0], 0);
        assert_eq!(rows[1], 50);
        assert!(rows.iter().all(|&r| (0..=50).contains(&r)));
    }

    #[test]
    fn test_gradient_skips_by_distance() {
        let run = gradient_run(10, 5);
        assert_eq!(run.len(), 61);
        assert_eq!(run[0], (10, 3));
        assert_eq!(run[1], (11, 4));
        assert_eq!(run[60], (70, 15));
    }

    #[test]
    fn test_gradient_near_step_draws_everything() {
        for y in [4, 5, 6] {
            let run = gradient_run(y, 5);
            assert_eq!(run.len(), 65);
            assert_eq!(run[0], (y, 3));
            assert_eq!(run[64], (y + 64, 15));
        }
    }

    #[test]
    fn test_tall_gradient_is_flat() {
        let run = gradient_run(9, 9);
        assert_eq!(run.len(), 117);
        assert!(run.iter().all(|&(_, index)| index == 8));
    }

    #[test]
    fn test_gradient_step() {
        assert_eq!(ChartLayout::STANDARD.gradient_step(), 5);
        assert_eq!(ChartLayout::LARGE.gradient_step(), 9);
        assert_eq!(ChartLayout::LARGE.plot_height(), 96);
    }

    #[test]
    fn test_graph_line_is_three_rows() {
        let mut canvas = Canvas::new(10, 10);
        draw_graph_line(&mut canvas, 0, 2, 9, 2, Color::GREEN);
        for y in 2..5 {
            assert_eq!(canvas.pixel(4, y), Color::GREEN);
        }
        assert_eq!(canvas.pixel(4, 5), Color::BLACK);
    }
}
