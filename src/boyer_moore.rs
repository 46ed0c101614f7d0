//! Boyer-Moore search using the bad-character rule only, with a recorded trace.

use log::debug;

use crate::{
  Algorithm,
  PatternMatcher,
  common::{SearchTrace, to_chars},
  trace::{LastOccurrenceTable, SearchOp, SearchResult, Table},
};

mod bad_char;
pub use bad_char::{BadCharBuild, build_bad_char_table};

#[derive(Clone, Copy, Debug, Default)]
pub struct BoyerMoore;

impl PatternMatcher for BoyerMoore {
  fn algorithm(&self) -> Algorithm {
    Algorithm::BoyerMoore
  }

  fn search(&self, text: &[char], pattern: &[char]) -> SearchResult {
    boyer_moore_search(text, pattern)
  }
}

// `to - last_occurrence(c)` where an absent character counts as -1.
// The result is clamped to at least 1 so the alignment always moves forward.
fn bad_char_shift(table: &LastOccurrenceTable, c: char, to: usize) -> (Option<usize>, usize) {
  let last = table.get(c);
  let shift = match last {
    Some(k) if k >= to => 1,
    Some(k) => to - k,
    None => to + 1,
  };
  (last, shift)
}

/// Finds every (possibly overlapping) occurrence of `pattern` in `text`, comparing each
/// alignment right to left.
///
/// After a full match the next shift looks at the character just past the window
/// (`m - last_occurrence`), or is 1 when the window ends the text. After a mismatch at `j`
/// the shift is `max(1, j - last_occurrence(bad char))`.
pub fn boyer_moore_search(text: &[char], pattern: &[char]) -> SearchResult {
  if text.is_empty() || pattern.is_empty() {
    return SearchResult::empty(Algorithm::BoyerMoore);
  }

  let BadCharBuild { table, steps: preprocess_steps } = build_bad_char_table(pattern);
  let n = text.len();
  let m = pattern.len();

  let mut trace = SearchTrace::new();
  let mut s = 0;

  while s + m <= n {
    // j counts unmatched characters, the compared index is j - 1
    let mut j = m;
    while j > 0 && pattern[j - 1] == text[s + j - 1] {
      trace.record(s + j - 1, j - 1, s, SearchOp::MatchChar);
      j -= 1;
    }

    if j == 0 {
      let shift = if s + m < n {
        bad_char_shift(&table, text[s + m], m).1
      } else {
        1
      };
      trace.found(s, 0, s, Some(shift));
      s += shift;
    } else {
      let j = j - 1;
      let bad_char = text[s + j];
      let (last_occurrence, shift) = bad_char_shift(&table, bad_char, j);
      trace.record(s + j, j, s, SearchOp::ShiftBadChar { bad_char, last_occurrence, shift });
      s += shift;
    }
  }

  let (search_steps, matches) = trace.finish();
  debug!(
    "boyer-moore: text={} pattern={} preprocess_steps={} search_steps={} matches={}",
    n, m, preprocess_steps.len(), search_steps.len(), matches.len()
  );

  SearchResult {
    algorithm: Algorithm::BoyerMoore,
    text: text.to_vec(),
    pattern: pattern.to_vec(),
    preprocess_steps,
    search_steps,
    matches,
    table: Table::LastOccurrence(table),
  }
}

pub fn boyer_moore_search_str(text: &str, pattern: &str) -> SearchResult {
  boyer_moore_search(&to_chars(text), &to_chars(pattern))
}
