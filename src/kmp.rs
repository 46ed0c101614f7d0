//! Knuth-Morris-Pratt search with a recorded trace.

use log::debug;

use crate::{
  Algorithm,
  PatternMatcher,
  common::{SearchTrace, to_chars},
  trace::{CompareOutcome, SearchOp, SearchResult, Table},
};

mod lps;
pub use lps::{LpsBuild, build_lps};

#[derive(Clone, Copy, Debug, Default)]
pub struct Kmp;

impl PatternMatcher for Kmp {
  fn algorithm(&self) -> Algorithm {
    Algorithm::Kmp
  }

  fn search(&self, text: &[char], pattern: &[char]) -> SearchResult {
    kmp_search(text, pattern)
  }
}

/// Finds every (possibly overlapping) occurrence of `pattern` in `text`.
///
/// Each loop iteration records the pending comparison of `text[i]` and `pattern[j]` before
/// either cursor moves. An empty text or pattern yields `SearchResult::empty`.
/// A pattern longer than the text is a caller error; it simply never matches here.
pub fn kmp_search(text: &[char], pattern: &[char]) -> SearchResult {
  if text.is_empty() || pattern.is_empty() {
    return SearchResult::empty(Algorithm::Kmp);
  }

  let LpsBuild { lps, steps: preprocess_steps } = build_lps(pattern);
  let m = pattern.len();

  let mut trace = SearchTrace::new();
  let mut i = 0;
  let mut j = 0;

  while i < text.len() {
    let outcome = if text[i] == pattern[j] {
      CompareOutcome::Match
    } else if j > 0 {
      CompareOutcome::Fallback { to: lps[j - 1] }
    } else {
      CompareOutcome::Advance
    };
    trace.record(i, j, i - j, SearchOp::Compare { outcome });

    match outcome {
      CompareOutcome::Match => {
        i += 1;
        j += 1;
        if j == m {
          trace.found(i, j, i - j, None);
          j = lps[j - 1];
        }
      }
      CompareOutcome::Fallback { to } => j = to,
      CompareOutcome::Advance => i += 1,
    }
  }

  let (search_steps, matches) = trace.finish();
  debug!(
    "kmp: text={} pattern={} preprocess_steps={} search_steps={} matches={}",
    text.len(), m, preprocess_steps.len(), search_steps.len(), matches.len()
  );

  SearchResult {
    algorithm: Algorithm::Kmp,
    text: text.to_vec(),
    pattern: pattern.to_vec(),
    preprocess_steps,
    search_steps,
    matches,
    table: Table::Lps(lps),
  }
}

pub fn kmp_search_str(text: &str, pattern: &str) -> SearchResult {
  kmp_search(&to_chars(text), &to_chars(pattern))
}
