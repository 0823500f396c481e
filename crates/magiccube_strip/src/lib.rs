//! LED strip output for MagicCube.
//!
//! A [`StripController`] decides what color each LED should be and sends it
//! through a [`PixelSink`]. [`LineProtocolSink`] is a sink that speaks the
//! line protocol of the companion Arduino sketch over any byte stream.

mod controller;
mod sink;
mod wheel;

pub use controller::StripController;
pub use sink::{LATCH_INDEX, LineProtocolSink, PixelSink};
pub use wheel::{WHEEL_SIZE, wheel};

/// Maximum number of LEDs on a strip. Index 255 is reserved for the latch
/// command.
pub const MAX_LED_COUNT: usize = 255;

/// Error from driving an LED strip.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug)]
pub enum StripError {
    #[error("strip has {0} LEDs; the maximum is {MAX_LED_COUNT}")]
    TooManyLeds(usize),
    #[error("LED index {0} is out of range")]
    IndexOutOfRange(usize),
    #[error("no palette entry for color {0}")]
    UnknownColor(u8),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
