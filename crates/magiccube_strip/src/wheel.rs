use magiccube_core::Rgb;

/// Number of distinct positions on the color wheel.
pub const WHEEL_SIZE: usize = 384;

/// Returns a color on a wheel that fades red to green to blue and back to red,
/// with 7-bit channels. `pos` wraps around modulo [`WHEEL_SIZE`].
pub fn wheel(pos: usize) -> Rgb {
    let pos = pos % WHEEL_SIZE;
    let up = (pos % 128) as u8;
    let down = 127 - up;
    match pos / 128 {
        0 => Rgb::new(down, up, 0),
        1 => Rgb::new(0, down, up),
        _ => Rgb::new(up, 0, down),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel() {
        assert_eq!(wheel(0), Rgb::new(127, 0, 0));
        assert_eq!(wheel(64), Rgb::new(63, 64, 0));
        assert_eq!(wheel(128), Rgb::new(0, 127, 0));
        assert_eq!(wheel(256), Rgb::new(0, 0, 127));
        assert_eq!(wheel(383), Rgb::new(127, 0, 0));
        assert_eq!(wheel(384), wheel(0));
        for pos in 0..WHEEL_SIZE {
            assert!(wheel(pos).rgb.iter().all(|&c| c <= 127));
        }
    }
}
