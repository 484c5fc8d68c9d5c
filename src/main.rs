use std::env;
use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::Duration;

use kgfx::{
    ChartLayout, Color, DrawCommand, FontSet, Gauge, Kgfx, KgfxConfig, Preview, TextSize,
    CHART_LEN,
};
use rand::Rng;

const DEFAULT_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";
const DEFAULT_BOLD_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Updates between switching from the ticker to the gauge and back.
const SCREEN_UPDATES: u32 = 10;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut window_title = "KGFX".to_string();
    let mut font_path = DEFAULT_FONT.to_string();
    let mut bold_font_path = DEFAULT_BOLD_FONT.to_string();
    let mut scale = 2;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--title" {
            if let Some(title) = args.next() {
                window_title = title;
            }
        } else if arg == "--font" {
            if let Some(path) = args.next() {
                font_path = path;
            }
        } else if arg == "--bold-font" {
            if let Some(path) = args.next() {
                bold_font_path = path;
            }
        } else if arg == "--scale" {
            if let Some(value) = args.next().and_then(|s| s.parse::<u32>().ok()) {
                scale = value;
            }
        } else {
            log::warn!("ignoring unknown argument {arg}");
        }
    }

    let fonts = FontSet::from_ttf(std::fs::read(&font_path)?, std::fs::read(&bold_font_path)?)?;
    let config = KgfxConfig::builder()
        .window_title(window_title)
        .window_scale(scale)
        .build();
    let preview = Preview::from_config(&config);

    let mut kgfx = Kgfx::new(config, fonts);
    kgfx.init();
    kgfx.create_chart_sprite()?;

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || produce(tx));

    preview.show_with_commands(kgfx, rx)?;
    Ok(())
}

/// Random-walks a price series and a CPU reading, alternating between a
/// ticker screen and a gauge screen.
fn produce(tx: Sender<DrawCommand>) {
    let mut rng = rand::rng();
    let mut prices: Vec<f32> = Vec::with_capacity(CHART_LEN);
    let mut price = 120.0f32;
    for _ in 0..CHART_LEN {
        price = (price + rng.random_range(-2.0..2.0)).max(1.0);
        prices.push(price);
    }
    let mut cpu = 40.0f64;
    let mut tick = 0u32;

    loop {
        price = (price + rng.random_range(-2.0..2.0)).max(1.0);
        prices.remove(0);
        prices.push(price);
        cpu = (cpu + rng.random_range(-8.0..8.0)).clamp(0.0, 100.0);

        let commands = if (tick / SCREEN_UPDATES) % 2 == 0 {
            ticker_screen(&prices)
        } else {
            gauge_screen(cpu)
        };
        for command in commands {
            if tx.send(command).is_err() {
                return;
            }
        }

        tick = tick.wrapping_add(1);
        thread::sleep(Duration::from_millis(500));
    }
}

fn ticker_screen(prices: &[f32]) -> Vec<DrawCommand> {
    let first = prices.first().copied().unwrap_or_default();
    let last = prices.last().copied().unwrap_or_default();
    let color = if last >= first { Color::GREEN } else { Color::RED };
    let change = if first != 0.0 {
        (last - first) / first * 100.0
    } else {
        0.0
    };

    vec![
        DrawCommand::Clear,
        DrawCommand::TextCenter {
            text: "KGFX/USD".to_string(),
            size: TextSize::Large,
            color: Color::WHITE,
            y: 20,
        },
        DrawCommand::TextCenter {
            text: format!("${last:.2}"),
            size: TextSize::Large,
            color,
            y: 55,
        },
        DrawCommand::Chart {
            values: prices.to_vec(),
            color,
            y: 100,
            layout: ChartLayout::STANDARD,
        },
        DrawCommand::Text {
            text: format!("{change:+.2}% over {} samples", prices.len()),
            size: TextSize::Small,
            color: Color::LIGHTGREY,
            x: 10,
            y: 200,
        },
    ]
}

fn gauge_screen(cpu: f64) -> Vec<DrawCommand> {
    let fg_color = if cpu > 80.0 {
        Color::RED
    } else if cpu > 60.0 {
        Color::ORANGE
    } else {
        Color::GREEN
    };
    let gauge = Gauge::builder()
        .label("CPU")
        .suffix("%")
        .value(cpu)
        .min(0)
        .max(100)
        .bg_color(Color::DARKGREY)
        .fg_color(fg_color)
        .build();
    vec![DrawCommand::Clear, DrawCommand::Gauge(gauge)]
}
