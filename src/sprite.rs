use crate::canvas::Canvas;
use crate::error::{Error, Result};

/// Storage depth a sprite is accounted at against the sprite memory limit.
///
/// A 16-bit sprite of about 200x200 already uses ~80 KB, so full-width
/// sprites are created at 8 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    Bits16,
    Bits8,
}

impl ColorDepth {
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            ColorDepth::Bits16 => 2,
            ColorDepth::Bits8 => 1,
        }
    }
}

/// Off-screen drawing surface that is pushed onto the screen in one go.
#[derive(Debug, Clone)]
pub struct Sprite {
    canvas: Canvas,
    depth: ColorDepth,
}

impl Sprite {
    /// Allocates a black sprite, refusing empty sizes and sizes over `limit` bytes.
    pub fn new(width: usize, height: usize, depth: ColorDepth, limit: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptySprite);
        }
        let bytes = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(depth.bytes_per_pixel()))
            .unwrap_or(usize::MAX);
        if bytes > limit {
            return Err(Error::SpriteTooLarge {
                width,
                height,
                bytes,
                limit,
            });
        }
        log::debug!("created {width}x{height} sprite ({bytes} bytes, {depth:?})");
        Ok(Self {
            canvas: Canvas::new(width, height),
            depth,
        })
    }

    pub fn width(&self) -> usize {
        self.canvas.width()
    }

    pub fn height(&self) -> usize {
        self.canvas.height()
    }

    pub fn depth(&self) -> ColorDepth {
        self.depth
    }

    pub fn byte_size(&self) -> usize {
        self.width() * self.height() * self.depth.bytes_per_pixel()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Copies the sprite onto `target` with its top-left corner at (x, y).
    pub fn push(&self, target: &mut Canvas, x: i32, y: i32) {
        target.blit(&self.canvas, x, y);
    }
}
