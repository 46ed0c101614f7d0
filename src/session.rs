use std::rc::Rc;

use log::debug;

use crate::{
  Algorithm,
  config::Config,
  error::{InputError, validate},
  playback::Playback,
  trace::SearchResult,
};

/// Owns the inputs of a visualisation and keeps the result and its playback in step with them.
///
/// Changing the text, the pattern or the algorithm drops the current result and resets the
/// playback, so a trace is never replayed against inputs it was not computed from.
pub struct Session {
  text: Vec<char>,
  pattern: Vec<char>,
  algorithm: Algorithm,
  uppercase: bool,
  result: Option<Rc<SearchResult>>,
  playback: Playback,
}

impl Session {
  pub fn new(config: &Config) -> Self {
    Session {
      text: vec![],
      pattern: vec![],
      algorithm: config.algorithm,
      uppercase: config.uppercase,
      result: None,
      playback: Playback::new(config.playback.clone()),
    }
  }

  fn normalize(&self, s: &str) -> Vec<char> {
    if self.uppercase {
      s.chars().flat_map(char::to_uppercase).collect()
    } else {
      s.chars().collect()
    }
  }

  pub fn text(&self) -> &[char] {
    &self.text
  }

  pub fn pattern(&self) -> &[char] {
    &self.pattern
  }

  pub fn algorithm(&self) -> Algorithm {
    self.algorithm
  }

  pub fn set_text(&mut self, text: &str) {
    let text = self.normalize(text);
    if text != self.text {
      self.text = text;
      self.invalidate();
    }
  }

  pub fn set_pattern(&mut self, pattern: &str) {
    let pattern = self.normalize(pattern);
    if pattern != self.pattern {
      self.pattern = pattern;
      self.invalidate();
    }
  }

  pub fn set_algorithm(&mut self, algorithm: Algorithm) {
    if algorithm != self.algorithm {
      self.algorithm = algorithm;
      self.invalidate();
    }
  }

  fn invalidate(&mut self) {
    if self.result.take().is_some() {
      debug!("inputs changed, dropping trace");
    }
    self.playback.unload();
  }

  /// Validates the inputs, runs the selected engine and loads the trace into the playback.
  pub fn visualize(&mut self) -> Result<&SearchResult, InputError> {
    validate(&self.text, &self.pattern)?;
    let result = Rc::new(self.algorithm.matcher().search(&self.text, &self.pattern));
    self.playback.load(Rc::clone(&result));
    let result: &SearchResult = self.result.insert(result);
    Ok(result)
  }

  pub fn result(&self) -> Option<&SearchResult> {
    self.result.as_deref()
  }

  pub fn playback(&self) -> &Playback {
    &self.playback
  }

  pub fn playback_mut(&mut self) -> &mut Playback {
    &mut self.playback
  }
}
