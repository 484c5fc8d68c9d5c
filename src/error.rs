use thiserror::Error;

/// Errors returned by the drawing helpers and the preview window.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed chart data: {len} samples, need at least {required}")]
    ChartTooShort { len: usize, required: usize },

    #[error("chart sprite has not been created")]
    ChartSpriteMissing,

    #[error("sprite {width}x{height} needs {bytes} bytes, limit is {limit}")]
    SpriteTooLarge {
        width: usize,
        height: usize,
        bytes: usize,
        limit: usize,
    },

    #[error("sprite dimensions must be non-zero")]
    EmptySprite,

    #[error("gauge range is empty: min {min} >= max {max}")]
    InvalidGaugeRange { min: i64, max: i64 },

    #[error("could not parse font data")]
    InvalidFont,

    #[error(transparent)]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error(transparent)]
    Window(#[from] winit::error::OsError),

    #[error(transparent)]
    Surface(#[from] pixels::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
