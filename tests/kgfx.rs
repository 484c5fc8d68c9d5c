mod common;

use common::{setup, ADVANCE};
use kgfx::{ChartLayout, Color, DrawCommand, Error, Gauge, Palette, TextSize};

fn ascending() -> Vec<f32> {
    (0..30).map(|i| i as f32).collect()
}

fn cpu_gauge(value: i32) -> Gauge {
    Gauge::builder()
        .label("CPU")
        .suffix("%")
        .value(value)
        .min(0)
        .max(100)
        .bg_color(Color::DARKGREY)
        .fg_color(Color::GREEN)
        .build()
}

// ============================================================================
// Charts
// ============================================================================

#[test]
fn test_chart_line_and_gradient_on_screen() {
    let mut gfx = setup();
    gfx.create_chart_sprite().unwrap();
    gfx.draw_chart(&ascending(), Color::GREEN, 100, ChartLayout::STANDARD)
        .unwrap();

    let screen = gfx.screen();
    // second sample sits one row above the bottom of the plot
    for y in 149..152 {
        assert_eq!(screen.pixel(0, y), Color::GREEN);
    }
    // the fill starts deep into the ramp and fades to the darkest shade
    assert_eq!(screen.pixel(0, 152), Color(0x0080));
    assert_eq!(screen.pixel(0, 170), Color(0x0020));
    assert_eq!(screen.pixel(0, 171), Color::BLACK);
    // nothing above the sprite is touched
    assert_eq!(screen.pixel(0, 99), Color::BLACK);
}

#[test]
fn test_chart_needs_sprite() {
    let mut gfx = setup();
    let err = gfx
        .draw_chart(&ascending(), Color::GREEN, 0, ChartLayout::STANDARD)
        .unwrap_err();
    assert!(matches!(err, Error::ChartSpriteMissing));

    gfx.create_chart_sprite().unwrap();
    gfx.delete_chart_sprite();
    assert!(gfx.chart_sprite().is_none());
    assert!(gfx.draw_chart_wide(&ascending(), Color::GREEN, 0).is_err());
}

#[test]
fn test_wide_chart_spans_screen() {
    let mut gfx = setup();
    gfx.create_chart_sprite().unwrap();
    gfx.draw_chart_wide(&ascending(), Color::GREEN, 100).unwrap();

    // 28 segments of 8 px end at x 224, on the top row of the plot
    let screen = gfx.screen();
    for y in 100..103 {
        assert_eq!(screen.pixel(224, y), Color::GREEN);
    }
    assert_eq!(screen.pixel(225, 100), Color::BLACK);
    assert_eq!(screen.pixel(0, 149), Color::GREEN);
}

#[test]
fn test_chart_rejects_short_series() {
    let mut gfx = setup();
    gfx.create_chart_sprite().unwrap();
    let err = gfx
        .draw_chart(&[1.0; 12], Color::RED, 0, ChartLayout::STANDARD)
        .unwrap_err();
    assert!(matches!(err, Error::ChartTooShort { len: 12, .. }));
}

#[test]
fn test_unknown_series_color_keeps_palette() {
    let mut gfx = setup();
    gfx.create_chart_sprite().unwrap();
    gfx.draw_chart(&ascending(), Color::GREEN, 0, ChartLayout::STANDARD)
        .unwrap();
    let green = *gfx.palette();

    gfx.draw_chart(&ascending(), Color::BLUE, 0, ChartLayout::STANDARD)
        .unwrap();
    assert_eq!(*gfx.palette(), green);
    assert_eq!(gfx.screen().pixel(0, 49), Color::BLUE);
    assert_eq!(gfx.screen().pixel(0, 52), Color(0x0080));

    gfx.draw_chart(&ascending(), Color::RED, 0, ChartLayout::STANDARD)
        .unwrap();
    assert_eq!(Some(*gfx.palette()), Palette::for_series(Color::RED));
}

#[test]
fn test_large_chart_uses_tall_sprite() {
    let mut gfx = setup();
    gfx.create_chart_sprite_large(240, 120).unwrap();
    gfx.draw_chart_large(&ascending(), Color::GREEN, 0, 120)
        .unwrap();

    let sprite = gfx.chart_sprite().unwrap();
    assert_eq!((sprite.width(), sprite.height()), (240, 120));
    // 28 segments of 8 px end at x 224, on the top row
    assert_eq!(gfx.screen().pixel(224, 0), Color::GREEN);
    assert_eq!(gfx.screen().pixel(225, 0), Color::BLACK);
}

// ============================================================================
// Sprites
// ============================================================================

#[test]
fn test_sprite_memory_budget() {
    let gfx = setup();
    assert!(matches!(
        gfx.create_sprite(240, 240),
        Err(Error::SpriteTooLarge { bytes: 115_200, .. })
    ));
    assert!(gfx.create_sprite(200, 200).is_ok());

    let large = gfx.create_sprite_large(240, 240).unwrap();
    assert_eq!(large.byte_size(), 57_600);
    gfx.delete_sprite(large);
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn test_text_at_cursor() {
    let mut gfx = setup();
    gfx.draw_text("AB", TextSize::Small, Color::WHITE, 10, 20);
    let screen = gfx.screen();
    assert_eq!(screen.pixel(10, 20), Color::WHITE);
    assert_eq!(screen.pixel(15, 20), Color::BLACK);
    assert_eq!(screen.pixel(16, 27), Color::WHITE);
    assert_eq!(screen.pixel(10, 28), Color::BLACK);
}

#[test]
fn test_text_center() {
    let mut gfx = setup();
    gfx.draw_text_center("ABC", TextSize::Large, Color::YELLOW, 40);
    // three glyphs are 18 px wide, so the run starts at 120 - 9
    let screen = gfx.screen();
    assert_eq!(screen.pixel(110, 40), Color::BLACK);
    assert_eq!(screen.pixel(111, 40), Color::YELLOW);
    assert_eq!(screen.pixel(111 + 2 * ADVANCE + 4, 47), Color::YELLOW);
}

#[test]
fn test_text_in_sprite_clears_area() {
    let mut gfx = setup();
    gfx.draw_text("WWWWWWWWWW", TextSize::Small, Color::WHITE, 0, 30);
    let mut sprite = gfx.create_sprite(40, 10).unwrap();
    gfx.draw_text_in(&mut sprite, "1", TextSize::Small, Color::RED, 0, 30);

    let screen = gfx.screen();
    assert_eq!(screen.pixel(0, 30), Color::RED);
    // the rest of the sprite area was wiped
    assert_eq!(screen.pixel(6, 30), Color::BLACK);
    // text outside the sprite survives
    assert_eq!(screen.pixel(42, 30), Color::WHITE);
}

#[test]
fn test_text_center_in_sprite() {
    let mut gfx = setup();
    let mut sprite = gfx.create_sprite(100, 10).unwrap();
    gfx.draw_text_center_in(&mut sprite, "AB", TextSize::Small, Color::CYAN, 60);

    // sprite lands at x 70, text inside it at 44
    let screen = gfx.screen();
    assert_eq!(screen.pixel(113, 60), Color::BLACK);
    assert_eq!(screen.pixel(114, 60), Color::CYAN);
    assert_eq!(sprite.canvas().pixel(44, 0), Color::CYAN);
}

// ============================================================================
// Gauges
// ============================================================================

#[test]
fn test_gauge_screen() {
    let mut gfx = setup();
    gfx.draw_gauge(&cpu_gauge(50)).unwrap();

    let screen = gfx.screen();
    // top hash mark over the arc
    assert_eq!(screen.pixel(120, 25), Color::BLACK);
    // "50%" centered at the value row
    assert_eq!(screen.pixel(111, 110), Color::GREEN);
    // range labels in the background color
    assert_eq!(screen.pixel(25, 170), Color::DARKGREY);
    assert_eq!(screen.pixel(180, 170), Color::DARKGREY);
    // "CPU" title
    assert_eq!(screen.pixel(111, 200), Color::GREEN);
    // the gap at the bottom of the dial stays empty
    assert_eq!(screen.pixel(120, 215), Color::BLACK);
}

#[test]
fn test_gauge_rejects_empty_range() {
    let mut gfx = setup();
    let mut gauge = cpu_gauge(5);
    gauge.min = 10;
    gauge.max = 10;
    assert!(matches!(
        gfx.draw_gauge(&gauge),
        Err(Error::InvalidGaugeRange { min: 10, max: 10 })
    ));
}

// ============================================================================
// Commands
// ============================================================================

#[test]
fn test_apply_commands() {
    let mut gfx = setup();
    gfx.apply(DrawCommand::Text {
        text: "X".to_string(),
        size: TextSize::Small,
        color: Color::WHITE,
        x: 5,
        y: 5,
    })
    .unwrap();
    assert_eq!(gfx.screen().pixel(5, 5), Color::WHITE);

    gfx.apply(DrawCommand::Clear).unwrap();
    assert_eq!(gfx.screen().pixel(5, 5), Color::BLACK);

    let err = gfx
        .apply(DrawCommand::Chart {
            values: ascending(),
            color: Color::GREEN,
            y: 0,
            layout: ChartLayout::WIDE,
        })
        .unwrap_err();
    assert!(matches!(err, Error::ChartSpriteMissing));

    gfx.apply(DrawCommand::Gauge(cpu_gauge(75))).unwrap();
    assert_eq!(gfx.screen().pixel(120, 25), Color::BLACK);
}
