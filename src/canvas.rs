use crate::color::Color;

/// RGB565 pixel buffer. Used both for the screen and for sprites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: Vec<Color>,
    width: usize,
    height: usize,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![Color::BLACK; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Writes a pixel; coordinates outside the canvas are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color;
        }
    }

    /// Reads a pixel; coordinates outside the canvas read as black.
    pub fn pixel(&self, x: i32, y: i32) -> Color {
        self.index(x, y)
            .map(|idx| self.pixels[idx])
            .unwrap_or(Color::BLACK)
    }

    /// Writes `color` mixed over `bg` with the given coverage.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, bg: Color, alpha: f32) {
        if alpha > 0.01 {
            self.set_pixel(x, y, Color::blend(color, bg, alpha));
        }
    }

    /// One pixel wide line, both endpoints included.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let (mut x, mut y) = (x0, y0);
        let mut err = dx + dy;
        loop {
            self.set_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Filled circle with a one pixel anti-aliased rim blended toward `bg`.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color, bg: Color) {
        let reach = radius.ceil() as i32 + 1;
        let (icx, icy) = (cx.round() as i32, cy.round() as i32);
        for y in icy - reach..=icy + reach {
            for x in icx - reach..=icx + reach {
                let dist = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
                let aa = (radius + 0.5 - dist).clamp(0.0, 1.0);
                self.blend_pixel(x, y, color, bg, aa);
            }
        }
    }

    /// Thick arc between radii `ir` and `r`.
    ///
    /// Angles are degrees measured clockwise from six o'clock, so a dial
    /// running from 70 to 290 leaves its gap at the bottom. Radial edges are
    /// smoothed toward `bg`; `round_ends` adds a cap at both ends.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_smooth_arc(
        &mut self,
        cx: i32,
        cy: i32,
        r: i32,
        ir: i32,
        start_deg: f32,
        end_deg: f32,
        fg: Color,
        bg: Color,
        round_ends: bool,
    ) {
        if start_deg >= end_deg || r <= 0 {
            return;
        }
        let (outer, inner) = (r as f32, ir.max(0) as f32);

        for y in cy - r - 1..=cy + r + 1 {
            for x in cx - r - 1..=cx + r + 1 {
                let (dx, dy) = ((x - cx) as f32, (y - cy) as f32);
                let dist = (dx * dx + dy * dy).sqrt();
                if dist > outer + 0.5 || dist < inner - 0.5 {
                    continue;
                }
                let angle = dial_angle(dx, dy);
                if angle < start_deg || angle > end_deg {
                    continue;
                }
                let aa = (outer + 0.5 - dist)
                    .clamp(0.0, 1.0)
                    .min((dist - inner + 0.5).clamp(0.0, 1.0));
                self.blend_pixel(x, y, fg, bg, aa);
            }
        }

        if round_ends {
            let mid = (outer + inner) / 2.0;
            let cap = (outer - inner) / 2.0;
            for deg in [start_deg, end_deg] {
                let (px, py) = dial_point(cx, cy, mid, deg);
                self.fill_circle(px, py, cap, fg, bg);
            }
        }
    }

    /// Copies `src` with its top-left corner at (x, y), clipped to this canvas.
    pub fn blit(&mut self, src: &Canvas, x: i32, y: i32) {
        for sy in 0..src.height {
            let ty = y + sy as i32;
            if ty < 0 || ty as usize >= self.height {
                continue;
            }
            for sx in 0..src.width {
                self.set_pixel(x + sx as i32, ty, src.pixels[sy * src.width + sx]);
            }
        }
    }

    /// Expands into an RGBA8888 frame of the same dimensions.
    pub fn rgba_into(&self, frame: &mut [u8]) {
        for (chunk, color) in frame.chunks_exact_mut(4).zip(self.pixels.iter()) {
            let (r, g, b) = color.to_rgb888();
            chunk.copy_from_slice(&[r, g, b, 0xff]);
        }
    }
}

/// Angle of (dx, dy) in dial degrees: 0 at six o'clock, clockwise, [0, 360).
pub(crate) fn dial_angle(dx: f32, dy: f32) -> f32 {
    let deg = (-dx).atan2(dy).to_degrees();
    if deg < 0.0 {
        deg + 360.0
    } else {
        deg
    }
}

/// Point at `radius` from the center along a dial angle.
pub(crate) fn dial_point(cx: i32, cy: i32, radius: f32, deg: f32) -> (f32, f32) {
    let rad = deg.to_radians();
    (cx as f32 - radius * rad.sin(), cy as f32 + radius * rad.cos())
}
