/// 16-bit RGB565 color, the native pixel format of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);
    pub const RED: Color = Color(0xF800);
    pub const GREEN: Color = Color(0x07E0);
    pub const BLUE: Color = Color(0x001F);
    pub const DARKGREY: Color = Color(0x7BEF);
    pub const LIGHTGREY: Color = Color(0xD69A);
    pub const YELLOW: Color = Color(0xFFE0);
    pub const ORANGE: Color = Color(0xFDA0);
    pub const CYAN: Color = Color(0x07FF);

    /// Packs 8-bit channels, dropping the low bits.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3))
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    const fn channels(self) -> (u16, u16, u16) {
        ((self.0 >> 11) & 0x1F, (self.0 >> 5) & 0x3F, self.0 & 0x1F)
    }

    /// Expands to 8-bit channels, replicating the high bits into the low ones.
    pub const fn to_rgb888(self) -> (u8, u8, u8) {
        let (r, g, b) = self.channels();
        (
            ((r << 3) | (r >> 2)) as u8,
            ((g << 2) | (g >> 4)) as u8,
            ((b << 3) | (b >> 2)) as u8,
        )
    }

    /// Mixes `fg` over `bg`; `alpha` is the coverage of `fg` in [0, 1].
    pub fn blend(fg: Color, bg: Color, alpha: f32) -> Color {
        let a = alpha.clamp(0.0, 1.0);
        if a >= 1.0 {
            return fg;
        }
        if a <= 0.0 {
            return bg;
        }
        let (fr, fgn, fb) = fg.channels();
        let (br, bgn, bb) = bg.channels();
        let mix = |f: u16, b: u16| (f as f32 * a + b as f32 * (1.0 - a)).round() as u16;
        Color((mix(fr, br) << 11) | (mix(fgn, bgn) << 5) | mix(fb, bb))
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

const GREEN_RAMP: [u16; 15] = [
    0x07E0, 0x02C0, 0x0240, 0x0200, 0x01C0, 0x0180, 0x0140, 0x0100, 0x00E0, 0x00C0, 0x00A0,
    0x0080, 0x0060, 0x0040, 0x0020,
];

// Thirteen shades; the last two slots stay black.
const RED_RAMP: [u16; 15] = [
    0xF800, 0x5000, 0x5000, 0x4800, 0x4800, 0x4000, 0x4000, 0x3800, 0x3800, 0x3000, 0x3000,
    0x2800, 0x2000, 0x0000, 0x0000,
];

/// Sixteen-entry lookup table used by the chart gradient. Entry 0 is always black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette([Color; 16]);

impl Palette {
    pub const LEN: usize = 16;

    pub const fn black() -> Self {
        Self([Color::BLACK; Self::LEN])
    }

    /// Fading ramp for a chart series color. Only the green and red series
    /// have a ramp; other colors return `None`.
    pub fn for_series(color: Color) -> Option<Self> {
        let ramp = match color {
            Color::GREEN => &GREEN_RAMP,
            Color::RED => &RED_RAMP,
            _ => return None,
        };
        let mut entries = [Color::BLACK; Self::LEN];
        for (slot, raw) in entries[1..].iter_mut().zip(ramp.iter()) {
            *slot = Color(*raw);
        }
        Some(Self(entries))
    }

    pub fn get(&self, index: usize) -> Color {
        self.0.get(index).copied().unwrap_or(Color::BLACK)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::black()
    }
}
