//! Instrumented substring search.
//!
//! Knuth-Morris-Pratt and Boyer-Moore (bad-character rule) implementations that, besides the
//! match positions, record every comparison, table write and shift decision they make. The
//! recorded trace is replayed by [`playback::Playback`], which steps through the preprocessing
//! phase and then the search phase.
//!
//! ```
//! use pattern_trace::{Algorithm, run};
//!
//! let result = run(Algorithm::BoyerMoore, "AAAA", "AA");
//! assert_eq!(vec![0, 1, 2], result.matches);
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

mod common;
pub mod boyer_moore;
pub mod config;
pub mod error;
pub mod format;
pub mod kmp;
pub mod naive;
pub mod playback;
pub mod pseudocode;
pub mod session;
pub mod trace;

pub use boyer_moore::{BoyerMoore, boyer_moore_search, boyer_moore_search_str, build_bad_char_table};
pub use common::to_chars;
pub use error::{ConfigError, InputError, ParseAlgorithmError};
pub use kmp::{Kmp, build_lps, kmp_search, kmp_search_str};
pub use playback::{Playback, PlaybackEvent};
pub use session::Session;
pub use trace::{Phase, SearchResult, Table};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
  #[default]
  Kmp,
  BoyerMoore,
}

impl Algorithm {
  pub const ALL: [Algorithm; 2] = [Algorithm::Kmp, Algorithm::BoyerMoore];

  pub fn matcher(self) -> &'static dyn PatternMatcher {
    match self {
      Algorithm::Kmp => &Kmp,
      Algorithm::BoyerMoore => &BoyerMoore,
    }
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Algorithm::Kmp => "kmp",
      Algorithm::BoyerMoore => "boyer-moore",
    })
  }
}

impl FromStr for Algorithm {
  type Err = ParseAlgorithmError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "kmp" => Ok(Algorithm::Kmp),
      "boyer-moore" | "boyermoore" | "bm" => Ok(Algorithm::BoyerMoore),
      _ => Err(ParseAlgorithmError(s.to_string())),
    }
  }
}

/// A traced substring search.
///
/// Implementations are pure: the same `(text, pattern)` always yields an equal result.
/// An empty text or pattern yields [`SearchResult::empty`]. `pattern.len() <= text.len()` is a
/// precondition the caller checks (see [`error::validate`]).
pub trait PatternMatcher {
  fn algorithm(&self) -> Algorithm;

  fn search(&self, text: &[char], pattern: &[char]) -> SearchResult;
}

pub fn run(algorithm: Algorithm, text: &str, pattern: &str) -> SearchResult {
  algorithm.matcher().search(&to_chars(text), &to_chars(pattern))
}
