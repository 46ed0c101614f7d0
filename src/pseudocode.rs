//! Pseudocode listings shown next to a trace, and the line each operation highlights.
//! Lines are 0-based indices into the listing of the step's phase.

use crate::{
  Algorithm,
  trace::{CompareOutcome, Phase, PreprocessOp, SearchOp},
};

const KMP_PREPROCESSING: &[&str] = &[
  "1. Initialize lps array of size m with all 0s",
  "2. Set len = 0, i = 1",
  "3. While i < m:",
  "4.   If pattern[i] == pattern[len]:",
  "5.     Set lps[i] = len + 1",
  "6.     Increment len and i",
  "7.   Else if len > 0:",
  "8.     Set len = lps[len - 1]",
  "9.   Else:",
  "10.    Set lps[i] = 0",
  "11.    Increment i",
  "12. Return lps array",
];

const KMP_SEARCH: &[&str] = &[
  "1. Initialize i = 0, j = 0 (text and pattern indices)",
  "2. While i < n (text length):",
  "3.   If pattern[j] == text[i]:",
  "4.     Increment both i and j",
  "5.   If j == m (pattern length):",
  "6.     Record match at index i - j",
  "7.     Set j = lps[j - 1]",
  "8.   Else if text[i] != pattern[j]:",
  "9.     If j > 0:",
  "10.      Set j = lps[j - 1]",
  "11.    Else:",
  "12.      Increment i",
  "13. Return all match indices",
];

const BOYER_MOORE_PREPROCESSING: &[&str] = &[
  "1. Initialize bad character table",
  "2. For each character in pattern:",
  "3.   Set table[char] = its last occurrence index",
  "4. Characters not in pattern get value -1",
  "5. Return bad character table",
];

const BOYER_MOORE_SEARCH: &[&str] = &[
  "1. Initialize s = 0 (shift position)",
  "2. While s <= n - m (text length - pattern length):",
  "3.   Set j = m - 1 (start from end of pattern)",
  "4.   While j >= 0 and pattern[j] == text[s + j]:",
  "5.     Decrement j",
  "6.   If j < 0:",
  "7.     Pattern found at index s",
  "8.     Calculate shift using last occurrence",
  "9.   Else:",
  "10.    Get character at text[s + j]",
  "11.    Calculate shift = max(1, j - lastOccurrence)",
  "12.    Set s = s + shift",
  "13. Return all match indices",
];

pub fn listing(algorithm: Algorithm, phase: Phase) -> &'static [&'static str] {
  match (algorithm, phase) {
    (Algorithm::Kmp, Phase::Preprocessing) => KMP_PREPROCESSING,
    (Algorithm::Kmp, Phase::Search) => KMP_SEARCH,
    (Algorithm::BoyerMoore, Phase::Preprocessing) => BOYER_MOORE_PREPROCESSING,
    (Algorithm::BoyerMoore, Phase::Search) => BOYER_MOORE_SEARCH,
  }
}

pub fn preprocess_line(op: PreprocessOp) -> usize {
  match op {
    PreprocessOp::Initialize => 0,
    PreprocessOp::MatchExtend { .. } => 4,
    PreprocessOp::Backtrack { .. } => 7,
    PreprocessOp::ForcedZero => 9,
    PreprocessOp::RecordOccurrence => 2,
  }
}

pub fn search_line(algorithm: Algorithm, op: SearchOp) -> usize {
  match (algorithm, op) {
    (_, SearchOp::Compare { outcome: CompareOutcome::Match }) => 2,
    (_, SearchOp::Compare { outcome: CompareOutcome::Fallback { .. } }) => 9,
    (_, SearchOp::Compare { outcome: CompareOutcome::Advance }) => 11,
    (Algorithm::Kmp, SearchOp::Found { .. }) => 5,
    (Algorithm::BoyerMoore, SearchOp::Found { .. }) => 6,
    (_, SearchOp::MatchChar) => 3,
    (_, SearchOp::ShiftBadChar { .. }) => 10,
  }
}
