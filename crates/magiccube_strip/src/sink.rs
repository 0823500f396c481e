use std::io::{self, BufRead, Write};

use magiccube_core::Rgb;

use crate::StripError;

/// Pixel index that the line protocol uses to latch pending colors onto the
/// strip.
pub const LATCH_INDEX: u8 = 0xFF;

/// Something that can set the color of individual LEDs.
pub trait PixelSink {
    /// Sets the pending color of one LED. It does not appear until the next
    /// call to [`PixelSink::flush()`].
    fn set_pixel(&mut self, index: u8, color: Rgb) -> Result<(), StripError>;
    /// Shows all pending colors at once.
    fn flush(&mut self) -> Result<(), StripError>;
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn set_pixel(&mut self, index: u8, color: Rgb) -> Result<(), StripError> {
        (**self).set_pixel(index, color)
    }
    fn flush(&mut self) -> Result<(), StripError> {
        (**self).flush()
    }
}

/// [`PixelSink`] that writes the Arduino line protocol.
///
/// Each LED is set with a line containing its two-digit hex index followed by
/// its six-digit hex color, such as `"03FFCF00"`. The line `"FF"` latches the
/// pending colors. The device answers every line with one line of its own,
/// which is logged and otherwise ignored.
#[derive(Debug)]
pub struct LineProtocolSink<W, R> {
    writer: W,
    reader: R,
}

impl<W: Write> LineProtocolSink<W, io::Empty> {
    /// Constructs a sink that does not wait for acknowledgements.
    pub fn write_only(writer: W) -> Self {
        Self::new(writer, io::empty())
    }
}

impl<W: Write, R: BufRead> LineProtocolSink<W, R> {
    /// Constructs a sink that writes commands to `writer` and reads
    /// acknowledgements from `reader`.
    pub fn new(writer: W, reader: R) -> Self {
        Self { writer, reader }
    }

    /// Returns the writer and reader.
    pub fn into_inner(self) -> (W, R) {
        (self.writer, self.reader)
    }

    fn send_line(&mut self, line: &str) -> Result<(), StripError> {
        log::trace!("sending {line:?}");
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;

        let mut ack = String::new();
        if self.reader.read_line(&mut ack)? > 0 {
            log::debug!("device: {}", ack.trim_end());
        }
        Ok(())
    }
}

impl<W: Write, R: BufRead> PixelSink for LineProtocolSink<W, R> {
    fn set_pixel(&mut self, index: u8, color: Rgb) -> Result<(), StripError> {
        if index == LATCH_INDEX {
            return Err(StripError::IndexOutOfRange(index as usize));
        }
        self.send_line(&format!("{index:02X}{}", hex::encode_upper(color.rgb)))
    }

    fn flush(&mut self) -> Result<(), StripError> {
        self.send_line(&format!("{LATCH_INDEX:02X}"))
    }
}
