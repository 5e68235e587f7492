// One error type for the whole crate.
// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A buffer or noise request asked for a width or height of zero or less.
    #[error("invalid dimension: {width}x{height} (both must be > 0)")]
    InvalidDimension { width: i64, height: i64 },

    /// The coordinate mapper was handed a display with no usable extent.
    #[error("degenerate display: {width}x{height}")]
    DegenerateDisplay { width: f64, height: f64 },

    /// Plus glyphs must be at least one pixel and leave room for an anchor.
    #[error("invalid plus size: {0}")]
    InvalidPlusSize(i64),

    /// The demo was asked to run at zero frames per second.
    #[error("invalid frame rate: {0} fps (must be > 0)")]
    InvalidFrameRate(u32),

    #[error("window init error: {0}")]
    WindowInit(String), // Creating the window failed

    #[error("window update error: {0}")]
    WindowUpdate(String), // Updating the window buffer failed
}

pub type Result<T> = std::result::Result<T, Error>;
