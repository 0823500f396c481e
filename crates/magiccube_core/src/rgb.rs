use std::fmt;
use std::str::FromStr;

use serde::de::Error;

/// 8-bit sRGB color that serializes to a string like `"#ff00ff"`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// sRGB component values.
    pub rgb: [u8; 3],
}
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode(self.rgb))
    }
}
impl FromStr for Rgb {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(named) = Self::from_name(s) {
            return Ok(named);
        }
        let rgb = color_from_hex_str(s)?;
        Ok(Rgb { rgb })
    }
}
impl serde::Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_string().serialize(serializer)
    }
}
impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Self>().map_err(D::Error::custom)
    }
}
impl Rgb {
    /// Pure black
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    /// Pure white
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    /// Medium gray
    pub const GRAY: Rgb = Rgb::new(0x80, 0x80, 0x80);

    /// Constructs a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { rgb: [r, g, b] }
    }

    /// Returns the color with a well-known name such as `white` or `red`.
    pub fn from_name(name: &str) -> Option<Self> {
        let rgb = match name.to_ascii_lowercase().as_str() {
            "w" | "white" => Self::WHITE,
            "k" | "black" | "none" => Self::BLACK,
            "gray" | "grey" => Self::GRAY,
            "r" | "red" => Self::new(0xff, 0x00, 0x00),
            "g" | "green" => Self::new(0x00, 0x80, 0x00),
            "b" | "blue" => Self::new(0x00, 0x00, 0xff),
            "y" | "yellow" => Self::new(0xff, 0xff, 0x00),
            "orange" => Self::new(0xff, 0xa5, 0x00),
            _ => return None,
        };
        Some(rgb)
    }

    /// Returns the color with each channel scaled by `brightness`, which is
    /// clamped to `0.0..=1.0`.
    #[must_use]
    pub fn scaled(self, brightness: f32) -> Self {
        let brightness = brightness.clamp(0.0, 1.0);
        Rgb {
            rgb: self.rgb.map(|c| (c as f32 * brightness).round() as u8),
        }
    }
}

/// Deserializes a color from a hex string like `#ff00ff` or `#f0f`.
fn color_from_hex_str(s: &str) -> Result<[u8; 3], hex::FromHexError> {
    let mut rgb = [0_u8; 3];
    let s = s.strip_prefix('#').unwrap_or(s).trim();
    match s.len() {
        3 => {
            let s = &s.chars().flat_map(|c| [c, c]).collect::<String>();
            hex::decode_to_slice(s, &mut rgb)?;
        }
        _ => hex::decode_to_slice(s, &mut rgb)?,
    }
    Ok(rgb)
}
