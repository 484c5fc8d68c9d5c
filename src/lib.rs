//! Graphics helpers for a small 16-bit color LCD: text, sprites, line charts
//! with a gradient fill, and radial gauges.
//!
//! Everything is drawn into an RGB565 screen buffer owned by [`Kgfx`]. The
//! [`Preview`] window presents that buffer on a desktop.
//!
//! # Example
//!
//! ```rust,no_run
//! use kgfx::{ChartLayout, Color, FontSet, Gauge, Kgfx, KgfxConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fonts = FontSet::from_ttf(
//!         std::fs::read("DejaVuSans.ttf")?,
//!         std::fs::read("DejaVuSans-Bold.ttf")?,
//!     )?;
//!     let mut gfx = Kgfx::new(KgfxConfig::default(), fonts);
//!     gfx.init();
//!
//!     gfx.create_chart_sprite()?;
//!     let prices: Vec<f32> = (0..30).map(|i| 100.0 + i as f32).collect();
//!     gfx.draw_chart(&prices, Color::GREEN, 80, ChartLayout::STANDARD)?;
//!     gfx.delete_chart_sprite();
//!
//!     gfx.clear();
//!     let cpu = Gauge::builder()
//!         .label("CPU")
//!         .suffix("%")
//!         .value(42)
//!         .min(0)
//!         .max(100)
//!         .bg_color(Color::DARKGREY)
//!         .fg_color(Color::GREEN)
//!         .build();
//!     gfx.draw_gauge(&cpu)?;
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

pub mod canvas;
pub mod chart;
pub mod color;
pub mod config;
pub mod error;
pub mod gauge;
pub mod preview;
pub mod sprite;
pub mod text;

pub use crate::{
    canvas::Canvas,
    chart::{ChartLayout, CHART_LEN},
    color::{Color, Palette},
    config::{GaugeGeometry, KgfxConfig},
    error::{Error, Result},
    gauge::{Gauge, GaugeReading},
    preview::Preview,
    sprite::{ColorDepth, Sprite},
    text::{FontSet, TextSize, TtfFont, Typeface},
};

// ============================================================================
// RETAINED COMMANDS
// ============================================================================

/// A drawing request that can be sent across threads and replayed on a [`Kgfx`].
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Clear,
    Text {
        text: String,
        size: TextSize,
        color: Color,
        x: i32,
        y: i32,
    },
    TextCenter {
        text: String,
        size: TextSize,
        color: Color,
        y: i32,
    },
    Chart {
        values: Vec<f32>,
        color: Color,
        y: i32,
        layout: ChartLayout,
    },
    Gauge(Gauge),
}

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

/// Drawing context: the screen buffer, the chart sprite and the fonts.
pub struct Kgfx {
    config: KgfxConfig,
    screen: Canvas,
    palette: Palette,
    chart_sprite: Option<Sprite>,
    fonts: FontSet,
}

impl Kgfx {
    pub fn new(config: KgfxConfig, fonts: FontSet) -> Self {
        let screen = Canvas::new(config.screen_width, config.screen_height);
        Self {
            config,
            screen,
            palette: Palette::black(),
            chart_sprite: None,
            fonts,
        }
    }

    /// Resets the gradient palette so entry 0 is black.
    pub fn init(&mut self) {
        self.palette = Palette::black();
        log::info!(
            "kgfx ready: {}x{} screen, {} byte sprite limit",
            self.config.screen_width,
            self.config.screen_height,
            self.config.sprite_memory_limit
        );
    }

    /// Paints the whole screen black.
    pub fn clear(&mut self) {
        self.screen.fill(Color::BLACK);
    }

    pub fn config(&self) -> &KgfxConfig {
        &self.config
    }

    pub fn screen(&self) -> &Canvas {
        &self.screen
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    // ------------------------------------------------------------------------
    // Sprites
    // ------------------------------------------------------------------------

    /// 16-bit sprite; limited to roughly 200x200 by the sprite memory limit.
    pub fn create_sprite(&self, width: usize, height: usize) -> Result<Sprite> {
        Sprite::new(width, height, ColorDepth::Bits16, self.config.sprite_memory_limit)
    }

    /// 8-bit accounted sprite, large enough for full-screen areas.
    pub fn create_sprite_large(&self, width: usize, height: usize) -> Result<Sprite> {
        Sprite::new(width, height, ColorDepth::Bits8, self.config.sprite_memory_limit)
    }

    pub fn delete_sprite(&self, sprite: Sprite) {
        log::debug!("deleted {}x{} sprite", sprite.width(), sprite.height());
        drop(sprite);
    }

    /// Allocates the default chart sprite (240x80, 16-bit), replacing any previous one.
    pub fn create_chart_sprite(&mut self) -> Result<()> {
        let sprite = self.create_sprite(self.config.chart_width, self.config.chart_height)?;
        self.chart_sprite = Some(sprite);
        Ok(())
    }

    /// Allocates an 8-bit chart sprite of any size, e.g. 240x120 for tall charts.
    pub fn create_chart_sprite_large(&mut self, width: usize, height: usize) -> Result<()> {
        let sprite = self.create_sprite_large(width, height)?;
        self.chart_sprite = Some(sprite);
        Ok(())
    }

    pub fn delete_chart_sprite(&mut self) {
        if let Some(sprite) = self.chart_sprite.take() {
            self.delete_sprite(sprite);
        }
    }

    pub fn chart_sprite(&self) -> Option<&Sprite> {
        self.chart_sprite.as_ref()
    }

    // ------------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------------

    /// Draws text directly on the screen with its top-left corner at (x, y).
    pub fn draw_text(&mut self, text: &str, size: TextSize, color: Color, x: i32, y: i32) {
        let face = self.fonts.face(size);
        crate::text::draw_text(&mut self.screen, face, text, x, y, color, Color::BLACK);
    }

    /// Draws text horizontally centered on the screen.
    pub fn draw_text_center(&mut self, text: &str, size: TextSize, color: Color, y: i32) {
        let face = self.fonts.face(size);
        let x = self.screen.width() as i32 / 2 - face.text_width(text) / 2;
        crate::text::draw_text(&mut self.screen, face, text, x, y, color, Color::BLACK);
    }

    /// Clears `sprite`, writes text at its origin and pushes it to (x, y).
    pub fn draw_text_in(
        &mut self,
        sprite: &mut Sprite,
        text: &str,
        size: TextSize,
        color: Color,
        x: i32,
        y: i32,
    ) {
        let face = self.fonts.face(size);
        sprite.canvas_mut().fill(Color::BLACK);
        crate::text::draw_text(sprite.canvas_mut(), face, text, 0, 0, color, Color::BLACK);
        sprite.push(&mut self.screen, x, y);
    }

    /// Centers text within `sprite` and the sprite within the screen width.
    pub fn draw_text_center_in(
        &mut self,
        sprite: &mut Sprite,
        text: &str,
        size: TextSize,
        color: Color,
        y: i32,
    ) {
        let face = self.fonts.face(size);
        let sprite_width = sprite.width() as i32;
        let text_x = (sprite_width - face.text_width(text)) / 2;
        let sprite_x = (self.screen.width() as i32 - sprite_width) / 2;

        sprite.canvas_mut().fill(Color::BLACK);
        crate::text::draw_text(sprite.canvas_mut(), face, text, text_x, 0, color, Color::BLACK);
        sprite.push(&mut self.screen, sprite_x, y);
    }

    // ------------------------------------------------------------------------
    // Charts
    // ------------------------------------------------------------------------

    /// Renders the first [`CHART_LEN`] samples into the chart sprite and
    /// pushes it to the screen at row `y`.
    ///
    /// Green and red series get their own gradient palette; any other color
    /// reuses the palette of the previous chart.
    pub fn draw_chart(
        &mut self,
        values: &[f32],
        color: Color,
        y: i32,
        layout: ChartLayout,
    ) -> Result<()> {
        let sprite = self.chart_sprite.as_mut().ok_or(Error::ChartSpriteMissing)?;
        let rows = chart::format_chart(values, layout.height)?;

        match Palette::for_series(color) {
            Some(palette) => self.palette = palette,
            None => log::debug!("no gradient ramp for {color:?}, keeping previous palette"),
        }

        let canvas = sprite.canvas_mut();
        canvas.fill(Color::BLACK);
        chart::render_chart(canvas, &rows, layout, color, &self.palette);
        sprite.push(&mut self.screen, 0, y);
        Ok(())
    }

    /// Chart spaced to fill the full 240 px width.
    pub fn draw_chart_wide(&mut self, values: &[f32], color: Color, y: i32) -> Result<()> {
        self.draw_chart(values, color, y, ChartLayout::WIDE)
    }

    /// Full-width chart for a taller sprite; [`ChartLayout::LARGE`] uses 120 px.
    pub fn draw_chart_large(
        &mut self,
        values: &[f32],
        color: Color,
        y: i32,
        height: i32,
    ) -> Result<()> {
        let layout = ChartLayout {
            height,
            ..ChartLayout::LARGE
        };
        self.draw_chart(values, color, y, layout)
    }

    // ------------------------------------------------------------------------
    // Gauges
    // ------------------------------------------------------------------------

    pub fn draw_gauge(&mut self, gauge: &Gauge) -> Result<()> {
        crate::gauge::draw_gauge(&mut self.screen, &self.fonts, &self.config.gauge, gauge)
    }

    // ------------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------------

    pub fn apply(&mut self, command: DrawCommand) -> Result<()> {
        match command {
            DrawCommand::Clear => self.clear(),
            DrawCommand::Text {
                text,
                size,
                color,
                x,
                y,
            } => self.draw_text(&text, size, color, x, y),
            DrawCommand::TextCenter {
                text,
                size,
                color,
                y,
            } => self.draw_text_center(&text, size, color, y),
            DrawCommand::Chart {
                values,
                color,
                y,
                layout,
            } => self.draw_chart(&values, color, y, layout)?,
            DrawCommand::Gauge(gauge) => self.draw_gauge(&gauge)?,
        }
        Ok(())
    }
}
