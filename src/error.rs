use std::path::PathBuf;

use thiserror::Error;

/// Reasons an input pair is rejected before it reaches an engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
  #[error("Please enter a text to search in")]
  EmptyText,

  #[error("Please enter a pattern to search for")]
  EmptyPattern,

  #[error("Pattern cannot be longer than text (pattern: {pattern_len}, text: {text_len})")]
  PatternTooLong { pattern_len: usize, text_len: usize },
}

/// Checks the caller-side precondition of both engines: `1 <= |pattern| <= |text|`.
pub fn validate(text: &[char], pattern: &[char]) -> Result<(), InputError> {
  if text.is_empty() {
    return Err(InputError::EmptyText);
  }
  if pattern.is_empty() {
    return Err(InputError::EmptyPattern);
  }
  if pattern.len() > text.len() {
    return Err(InputError::PatternTooLong { pattern_len: pattern.len(), text_len: text.len() });
  }
  Ok(())
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown algorithm '{0}' (expected 'kmp' or 'boyer-moore')")]
pub struct ParseAlgorithmError(pub String);

#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("Failed to read config file {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to parse config: {0}")]
  Parse(#[from] toml::de::Error),

  #[error("Invalid speed range: min {min} must be positive and not above max {max}")]
  InvalidSpeedRange { min: f64, max: f64 },

  #[error("Invalid default speed {0}: must be a positive number")]
  InvalidDefaultSpeed(f64),
}
