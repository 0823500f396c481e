use magiccube_core::Rgb;

use crate::{MAX_LED_COUNT, PixelSink, StripError, WHEEL_SIZE, wheel};

/// Controller for a strip of LEDs, one per sticker.
#[derive(Debug)]
pub struct StripController<S> {
    sink: S,
    led_count: usize,
    /// LED index for each sticker slot, or `None` if LED `i` shows slot `i`.
    mapping: Option<Vec<usize>>,
}

impl<S: PixelSink> StripController<S> {
    /// Constructs a controller and turns off every LED.
    pub fn new(sink: S, led_count: usize) -> Result<Self, StripError> {
        if led_count > MAX_LED_COUNT {
            return Err(StripError::TooManyLeds(led_count));
        }
        let mut ret = Self {
            sink,
            led_count,
            mapping: None,
        };
        ret.turn_off()?;
        Ok(ret)
    }

    /// Sets which LED shows each sticker slot.
    pub fn set_mapping(&mut self, mapping: Vec<usize>) -> Result<(), StripError> {
        if let Some(&bad) = mapping.iter().find(|&&led| led >= self.led_count) {
            return Err(StripError::IndexOutOfRange(bad));
        }
        self.mapping = Some(mapping);
        Ok(())
    }

    /// Returns the number of LEDs.
    pub fn led_count(&self) -> usize {
        self.led_count
    }
    /// Returns the pixel sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }
    /// Returns the pixel sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn set(&mut self, led: usize, color: Rgb) -> Result<(), StripError> {
        let index = u8::try_from(led)
            .ok()
            .filter(|_| led < self.led_count)
            .ok_or(StripError::IndexOutOfRange(led))?;
        self.sink.set_pixel(index, color)
    }

    /// Sets every LED to the same color.
    pub fn set_uniform_color(&mut self, color: Rgb) -> Result<(), StripError> {
        for led in 0..self.led_count {
            self.set(led, color)?;
        }
        self.sink.flush()
    }

    /// Turns off every LED.
    pub fn turn_off(&mut self) -> Result<(), StripError> {
        self.set_uniform_color(Rgb::BLACK)
    }

    /// Spreads the whole color wheel evenly along the strip, rotated by
    /// `offset` wheel positions.
    pub fn rainbow(&mut self, offset: usize) -> Result<(), StripError> {
        for led in 0..self.led_count {
            let pos = led * WHEEL_SIZE / self.led_count + offset;
            self.set(led, wheel(pos))?;
        }
        self.sink.flush()
    }

    /// Shows the color state of a cube, where `state[i]` is an index into
    /// `palette`.
    ///
    /// Only the first `led_count` slots are shown. Slots that are not mapped
    /// to any LED are skipped.
    pub fn show_cube_state(&mut self, state: &[u8], palette: &[Rgb]) -> Result<(), StripError> {
        for (slot, &color_id) in state.iter().enumerate().take(self.led_count) {
            let color = *palette
                .get(color_id as usize)
                .ok_or(StripError::UnknownColor(color_id))?;
            let led = match &self.mapping {
                Some(mapping) => match mapping.get(slot) {
                    Some(&led) => led,
                    None => continue,
                },
                None => slot,
            };
            self.set(led, color)?;
        }
        self.sink.flush()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::LineProtocolSink;

    #[derive(Debug, Default)]
    struct RecordingSink {
        pending: Vec<(u8, Rgb)>,
        frames: Vec<Vec<(u8, Rgb)>>,
    }
    impl PixelSink for RecordingSink {
        fn set_pixel(&mut self, index: u8, color: Rgb) -> Result<(), StripError> {
            self.pending.push((index, color));
            Ok(())
        }
        fn flush(&mut self) -> Result<(), StripError> {
            self.frames.push(std::mem::take(&mut self.pending));
            Ok(())
        }
    }

    #[test]
    fn test_new_turns_off() {
        let strip = StripController::new(RecordingSink::default(), 3).expect("valid strip");
        assert_eq!(
            strip.sink().frames,
            [vec![(0, Rgb::BLACK), (1, Rgb::BLACK), (2, Rgb::BLACK)]],
        );
    }

    #[test]
    fn test_too_many_leds() {
        assert!(matches!(
            StripController::new(RecordingSink::default(), 256),
            Err(StripError::TooManyLeds(256)),
        ));
        assert!(StripController::new(RecordingSink::default(), 255).is_ok());
    }

    #[test]
    fn test_show_cube_state() {
        let palette = [Rgb::WHITE, Rgb::new(0xff, 0xcf, 0x00), Rgb::new(0, 0, 0x8f)];
        let mut strip = StripController::new(RecordingSink::default(), 2).expect("valid strip");
        strip.show_cube_state(&[2, 0, 1], &palette).expect("valid state");
        let frames = strip.into_sink().frames;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1], [(0, palette[2]), (1, palette[0])]);

        let mut strip = StripController::new(RecordingSink::default(), 2).expect("valid strip");
        assert!(matches!(
            strip.show_cube_state(&[0, 7], &palette),
            Err(StripError::UnknownColor(7)),
        ));
    }

    #[test]
    fn test_show_cube_state_with_mapping() {
        let palette = [Rgb::WHITE, Rgb::BLACK];
        let mut strip = StripController::new(RecordingSink::default(), 3).expect("valid strip");
        assert!(strip.set_mapping(vec![0, 3]).is_err());
        strip.set_mapping(vec![2, 0]).expect("valid mapping");
        strip.show_cube_state(&[0, 1, 0], &palette).expect("valid state");
        let frames = strip.into_sink().frames;
        assert_eq!(frames[1], [(2, Rgb::WHITE), (0, Rgb::BLACK)]);
    }

    #[test]
    fn test_rainbow_over_line_protocol() {
        let mut strip =
            StripController::new(LineProtocolSink::write_only(vec![]), 3).expect("valid strip");
        strip.rainbow(0).expect("valid rainbow");
        let (written, _) = strip.into_sink().into_inner();
        let written = String::from_utf8(written).expect("ascii");
        let lines = written.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            [
                "00000000", "01000000", "02000000", "FF", // turned off
                "007F0000", "01007F00", "0200007F", "FF",
            ],
        );
    }
}
