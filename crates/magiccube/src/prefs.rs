//! User preferences, layered from built-in defaults and an optional YAML file.

use std::path::Path;

use eyre::{Context, Result};
use magiccube_core::{Cube, DEFAULT_FACE_COLORS, DEFAULT_PLASTIC_COLOR, Face, Rgb, ScrambleParams};
use serde::{Deserialize, Serialize};

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct Preferences {
    pub cube: CubePreferences,
    pub scramble: ScramblePreferences,
    pub life: LifePreferences,
    pub strip: StripPreferences,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct CubePreferences {
    pub size: usize,
    pub plastic_color: Rgb,
    pub face_colors: Vec<Rgb>,
}
impl Default for CubePreferences {
    fn default() -> Self {
        Self {
            size: 3,
            plastic_color: DEFAULT_PLASTIC_COLOR,
            face_colors: DEFAULT_FACE_COLORS.to_vec(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct ScramblePreferences {
    pub length: u32,
    pub all_layers: bool,
}
impl Default for ScramblePreferences {
    fn default() -> Self {
        Self {
            length: ScrambleParams::DEFAULT_LENGTH,
            all_layers: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct LifePreferences {
    pub max_ticks: u32,
}
impl Default for LifePreferences {
    fn default() -> Self {
        Self {
            max_ticks: magiccube_life::DEFAULT_MAX_TICKS,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct StripPreferences {
    pub led_count: usize,
    /// Multiplier for every channel, from 0 to 1.
    pub brightness: f32,
}
impl Default for StripPreferences {
    fn default() -> Self {
        Self {
            led_count: 54,
            brightness: 1.0,
        }
    }
}

impl Preferences {
    /// Loads the default preferences, overridden by the YAML file at
    /// `user_file` if there is one.
    pub fn load(user_file: Option<&Path>) -> Result<Self> {
        let user_source = user_file.map(|path| config::File::from(path).format(PREFS_FILE_FORMAT));
        Self::load_from_sources(user_source)
            .wrap_err_with(|| match user_file {
                Some(path) => format!("error loading preferences from {}", path.display()),
                None => "error loading default preferences".to_owned(),
            })
    }

    fn load_from_sources<S>(user_source: Option<S>) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));
        if let Some(source) = user_source {
            config = config.add_source(source);
        }
        let mut prefs: Self = config.build()?.try_deserialize()?;
        prefs.validate();
        Ok(prefs)
    }

    /// Replaces unusable values with defaults.
    fn validate(&mut self) {
        let defaults = Self::default();
        if self.cube.face_colors.len() < Face::COUNT {
            log::warn!(
                "need at least {} face colors but only {} are set; using defaults",
                Face::COUNT,
                self.cube.face_colors.len(),
            );
            self.cube.face_colors = defaults.cube.face_colors;
        }
        if !(0.0..=1.0).contains(&self.strip.brightness) {
            log::warn!("strip brightness {} is out of range; clamping", self.strip.brightness);
            self.strip.brightness = self.strip.brightness.clamp(0.0, 1.0);
        }
    }

    /// Constructs a cube using these preferences.
    pub fn new_cube(&self, size: Option<usize>) -> Result<Cube> {
        let size = size.unwrap_or(self.cube.size);
        Cube::with_colors(size, self.cube.plastic_color, self.cube.face_colors.clone())
            .wrap_err("error constructing cube")
    }

    /// Returns the face colors scaled by the strip brightness.
    pub fn strip_palette(&self) -> Vec<Rgb> {
        self.cube
            .face_colors
            .iter()
            .map(|c| c.scaled(self.strip.brightness))
            .collect()
    }

    /// Serializes the preferences to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_norway::to_string(self).wrap_err("error serializing preferences")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn load_str(user_yaml: &str) -> Result<Preferences> {
        Preferences::load_from_sources(Some(config::File::from_str(user_yaml, PREFS_FILE_FORMAT)))
    }

    #[test]
    fn test_default_prefs_file_matches_defaults() {
        let prefs = Preferences::load(None).expect("valid default preferences");
        assert_eq!(prefs, Preferences::default());
        let parsed: Preferences =
            serde_norway::from_str(DEFAULT_PREFS_STR).expect("valid default preferences");
        assert_eq!(parsed, Preferences::default());
    }

    #[test]
    fn test_user_prefs_override_defaults() {
        let prefs = load_str("cube:\n  size: 4\nlife:\n  max_ticks: 7\n").expect("valid prefs");
        assert_eq!(prefs.cube.size, 4);
        assert_eq!(prefs.life.max_ticks, 7);
        assert_eq!(prefs.cube.face_colors, DEFAULT_FACE_COLORS.to_vec());
        assert_eq!(prefs.strip, StripPreferences::default());
    }

    #[test]
    fn test_invalid_prefs_are_repaired() {
        let prefs = load_str("strip:\n  brightness: 3.0\n").expect("valid prefs");
        assert_eq!(prefs.strip.brightness, 1.0);

        let mut prefs = Preferences::default();
        prefs.cube.face_colors.truncate(2);
        prefs.validate();
        assert_eq!(prefs.cube.face_colors, DEFAULT_FACE_COLORS.to_vec());

        assert!(load_str("cube:\n  plastic_color: notacolor\n").is_err());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let prefs = Preferences::default();
        let yaml = prefs.to_yaml().expect("serializable");
        assert_eq!(load_str(&yaml).expect("valid prefs"), prefs);
    }
}
