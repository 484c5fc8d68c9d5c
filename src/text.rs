use rusttype::{point, Font, PositionedGlyph, Scale};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::{Error, Result};

/// A sized typeface that can measure and rasterize a single line of text.
pub trait Typeface {
    /// Horizontal advance of `text` in pixels.
    fn text_width(&self, text: &str) -> i32;

    fn line_height(&self) -> i32;

    /// Calls `plot(x, y, coverage)` for every covered pixel, relative to the
    /// top-left corner of the line.
    fn rasterize(&self, text: &str, plot: &mut dyn FnMut(i32, i32, f32));
}

/// TrueType/OpenType face at a fixed pixel size.
pub struct TtfFont {
    font: Font<'static>,
    scale: Scale,
}

impl TtfFont {
    pub fn from_vec(data: Vec<u8>, size: f32) -> Result<Self> {
        let font = Font::try_from_vec(data).ok_or(Error::InvalidFont)?;
        Ok(Self {
            font,
            scale: Scale::uniform(size),
        })
    }

    fn layout(&self, text: &str) -> Vec<PositionedGlyph<'static>> {
        let ascent = self.font.v_metrics(self.scale).ascent;
        self.font
            .layout(text, self.scale, point(0.0, ascent))
            .collect()
    }
}

impl Typeface for TtfFont {
    fn text_width(&self, text: &str) -> i32 {
        self.layout(text)
            .last()
            .map(|g| (g.position().x + g.unpositioned().h_metrics().advance_width).ceil() as i32)
            .unwrap_or(0)
    }

    fn line_height(&self) -> i32 {
        let v = self.font.v_metrics(self.scale);
        (v.ascent - v.descent + v.line_gap).ceil() as i32
    }

    fn rasterize(&self, text: &str, plot: &mut dyn FnMut(i32, i32, f32)) {
        for glyph in self.layout(text) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| plot(bb.min.x + gx as i32, bb.min.y + gy as i32, v));
            }
        }
    }
}

/// Which of the two faces in a [`FontSet`] to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    /// Scale labels (12 px regular).
    Small,
    /// Values and titles (24 px bold).
    Large,
}

pub struct FontSet {
    small: Box<dyn Typeface>,
    large: Box<dyn Typeface>,
}

impl FontSet {
    pub const SMALL_PX: f32 = 12.0;
    pub const LARGE_PX: f32 = 24.0;

    pub fn new(small: Box<dyn Typeface>, large: Box<dyn Typeface>) -> Self {
        Self { small, large }
    }

    /// Loads a regular face for small text and a bold face for large text.
    pub fn from_ttf(regular: Vec<u8>, bold: Vec<u8>) -> Result<Self> {
        Ok(Self::new(
            Box::new(TtfFont::from_vec(regular, Self::SMALL_PX)?),
            Box::new(TtfFont::from_vec(bold, Self::LARGE_PX)?),
        ))
    }

    pub fn face(&self, size: TextSize) -> &dyn Typeface {
        match size {
            TextSize::Small => self.small.as_ref(),
            TextSize::Large => self.large.as_ref(),
        }
    }
}

/// Draws `text` with its top-left corner at (x, y), smoothing glyph edges
/// toward `bg`.
pub fn draw_text(
    canvas: &mut Canvas,
    face: &dyn Typeface,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    bg: Color,
) {
    face.rasterize(text, &mut |px: i32, py: i32, v: f32| {
        canvas.blend_pixel(x + px, y + py, color, bg, v)
    });
}
