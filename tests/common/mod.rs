use kgfx::{FontSet, Kgfx, KgfxConfig, Typeface};

/// Fixed-pitch face that draws every character as a solid 5x8 box.
pub struct BlockFace;

pub const ADVANCE: i32 = 6;
pub const GLYPH_WIDTH: i32 = 5;
pub const GLYPH_HEIGHT: i32 = 8;

impl Typeface for BlockFace {
    fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * ADVANCE
    }

    fn line_height(&self) -> i32 {
        GLYPH_HEIGHT
    }

    fn rasterize(&self, text: &str, plot: &mut dyn FnMut(i32, i32, f32)) {
        for (i, _) in text.chars().enumerate() {
            let left = i as i32 * ADVANCE;
            for y in 0..GLYPH_HEIGHT {
                for x in 0..GLYPH_WIDTH {
                    plot(left + x, y, 1.0);
                }
            }
        }
    }
}

pub fn block_fonts() -> FontSet {
    FontSet::new(Box::new(BlockFace), Box::new(BlockFace))
}

pub fn setup() -> Kgfx {
    let mut gfx = Kgfx::new(KgfxConfig::default(), block_fonts());
    gfx.init();
    gfx
}
