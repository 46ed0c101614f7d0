use std::{fs, path::Path, time::Duration};

use serde::Deserialize;

use crate::{Algorithm, error::ConfigError};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaybackConfig {
  pub min_speed: f64,
  pub max_speed: f64,
  pub default_speed: f64,
}

impl Default for PlaybackConfig {
  fn default() -> Self {
    PlaybackConfig {
      min_speed: 0.5,
      max_speed: 3.0,
      default_speed: 1.0,
    }
  }
}

impl PlaybackConfig {
  /// Clamps `speed` into `[min_speed, max_speed]`. Non-finite or non-positive values fall
  /// back to the default speed, or to `min_speed` if the default is unusable too.
  /// Always returns a finite, positive speed, even for a config that never went through
  /// validation.
  pub fn clamp_speed(&self, speed: f64) -> f64 {
    let speed = if usable(speed) {
      speed
    } else if usable(self.default_speed) {
      self.default_speed
    } else {
      self.min_speed
    };
    // f64::max/min skip NaN bounds, unlike f64::clamp which panics on them
    let clamped = speed.max(self.min_speed).min(self.max_speed);
    if usable(clamped) { clamped } else { FALLBACK_SPEED }
  }

  /// Auto-advance interval at `speed` steps per second.
  pub fn interval(&self, speed: f64) -> Duration {
    Duration::from_secs_f64(1.0 / self.clamp_speed(speed))
  }

  fn validate(&self) -> Result<(), ConfigError> {
    let (min, max) = (self.min_speed, self.max_speed);
    if !(usable(min) && usable(max) && min <= max) {
      return Err(ConfigError::InvalidSpeedRange { min, max });
    }
    if !usable(self.default_speed) {
      return Err(ConfigError::InvalidDefaultSpeed(self.default_speed));
    }
    Ok(())
  }
}

const FALLBACK_SPEED: f64 = 1.0;

fn usable(speed: f64) -> bool {
  speed.is_finite() && speed > 0.0
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  pub algorithm: Algorithm,
  /// upper-case text and pattern before searching
  pub uppercase: bool,
  pub playback: PlaybackConfig,
}

impl Config {
  pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
    let config: Config = toml::from_str(s)?;
    config.playback.validate()?;
    Ok(config)
  }

  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_toml_str(&contents)
  }
}
