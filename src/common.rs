use crate::trace::{SearchOp, SearchStep};

pub fn to_chars(s: &str) -> Vec<char> {
  s.chars().collect()
}

// Collects the search phase of one run.
// Each recorded step gets its own copy of the matches found so far, so a consumer holding an
// older step never sees matches appended afterwards.
#[derive(Debug, Default)]
pub struct SearchTrace {
  steps: Vec<SearchStep>,
  matches: Vec<usize>,
}

impl SearchTrace {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn record(&mut self, text_index: usize, pattern_index: usize, alignment: usize, op: SearchOp) {
    self.steps.push(SearchStep {
      text_index,
      pattern_index,
      alignment,
      op,
      matches: self.matches.clone(),
    });
  }

  // appends the match before recording, so the found step already lists it
  pub fn found(&mut self, text_index: usize, pattern_index: usize, at: usize, shift: Option<usize>) {
    debug_assert!(self.matches.last().is_none_or(|&last| last < at));
    self.matches.push(at);
    self.record(text_index, pattern_index, at, SearchOp::Found { at, shift });
  }

  pub fn finish(self) -> (Vec<SearchStep>, Vec<usize>) {
    (self.steps, self.matches)
  }
}
