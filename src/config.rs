use bon::Builder;

/// Top-level settings for a [`crate::Kgfx`] instance.
#[derive(Debug, Clone, Builder)]
pub struct KgfxConfig {
    // Panel
    #[builder(default = 240)]
    pub screen_width: usize,
    #[builder(default = 240)]
    pub screen_height: usize,

    // Sprites
    #[builder(default = 240)]
    pub chart_width: usize,
    #[builder(default = 80)]
    pub chart_height: usize,
    /// Bytes available for a single sprite's pixel storage.
    #[builder(default = 81_920)]
    pub sprite_memory_limit: usize,

    // Gauge
    #[builder(default)]
    pub gauge: GaugeGeometry,

    // Preview window
    #[builder(default = "KGFX".to_string(), into)]
    pub window_title: String,
    #[builder(default = 2)]
    pub window_scale: u32,
    #[builder(default = 30.0)]
    pub max_framerate: f64,
}

impl Default for KgfxConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Layout of the radial gauge on a 240x240 panel.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeGeometry {
    pub center: i32,
    /// Thickness of the arc band; also the gap between the band and the panel edge.
    pub band_width: i32,
    /// Dial degrees, clockwise from six o'clock.
    pub start_deg: f32,
    pub sweep_deg: f32,
    pub value_y: i32,
    pub min_label: (i32, i32),
    pub max_label: (i32, i32),
    pub title_y: i32,
}

impl Default for GaugeGeometry {
    fn default() -> Self {
        Self {
            center: 120,
            band_width: 20,
            start_deg: 70.0,
            sweep_deg: 220.0,
            value_y: 110,
            min_label: (25, 170),
            max_label: (180, 170),
            title_y: 200,
        }
    }
}

impl GaugeGeometry {
    pub fn outer_radius(&self) -> i32 {
        self.center - self.band_width
    }

    pub fn inner_radius(&self) -> i32 {
        self.outer_radius() - self.band_width
    }

    pub fn end_deg(&self) -> f32 {
        self.start_deg + self.sweep_deg
    }

    pub fn major_mark_len(&self) -> i32 {
        (self.outer_radius() * 5 / 6) / 2
    }

    pub fn minor_mark_len(&self) -> i32 {
        (self.outer_radius() * 5 / 6) / 6
    }
}
