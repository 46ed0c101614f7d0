//! The trace model shared by both engines and consumed by the playback layer.
//!
//! Every record here is plain owned data: a step's snapshot is a copy of the table as it
//! stood when the step was emitted, so later mutation of the live table can never reach it.

use std::{
  collections::HashMap,
  hash::{Hash, Hasher},
};

use serde::Serialize;

use crate::Algorithm;

/// Last occurrence of every character of a pattern, in first-seen order.
///
/// Entries are kept in a vector for ordered display, with a map from character to slot so
/// lookups and overwrites stay constant time on wide alphabets.
#[derive(Clone, Debug, Default, Serialize)]
pub struct LastOccurrenceTable {
  entries: Vec<(char, usize)>,
  #[serde(skip)]
  slots: HashMap<char, usize>,
}

impl LastOccurrenceTable {
  pub fn new() -> Self {
    Self::default()
  }

  /// Highest index at which `c` has been recorded, `None` if `c` never was.
  pub fn get(&self, c: char) -> Option<usize> {
    self.slots.get(&c).map(|&slot| self.entries[slot].1)
  }

  /// Records `c` at `index`, overwriting any earlier occurrence.
  pub fn set(&mut self, c: char, index: usize) {
    match self.slots.get(&c) {
      Some(&slot) => self.entries[slot].1 = index,
      None => {
        self.slots.insert(c, self.entries.len());
        self.entries.push((c, index));
      }
    }
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
    self.entries.iter().copied()
  }
}

// the slot map is derived from the entries, so equality and hashing look at entries only
impl PartialEq for LastOccurrenceTable {
  fn eq(&self, other: &Self) -> bool {
    self.entries == other.entries
  }
}

impl Eq for LastOccurrenceTable {}

impl Hash for LastOccurrenceTable {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.entries.hash(state);
  }
}

impl FromIterator<(char, usize)> for LastOccurrenceTable {
  fn from_iter<I: IntoIterator<Item = (char, usize)>>(iter: I) -> Self {
    let mut table = Self::new();
    for (c, i) in iter {
      table.set(c, i);
    }
    table
  }
}

/// The auxiliary structure built during preprocessing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum Table {
  Lps(Vec<usize>),
  LastOccurrence(LastOccurrenceTable),
}

impl Table {
  pub fn is_empty(&self) -> bool {
    match self {
      Table::Lps(lps) => lps.is_empty(),
      Table::LastOccurrence(table) => table.is_empty(),
    }
  }

  pub fn as_lps(&self) -> Option<&[usize]> {
    match self {
      Table::Lps(lps) => Some(lps),
      Table::LastOccurrence(_) => None,
    }
  }

  pub fn as_last_occurrence(&self) -> Option<&LastOccurrenceTable> {
    match self {
      Table::Lps(_) => None,
      Table::LastOccurrence(table) => Some(table),
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PreprocessOp {
  /// lps starts out all zero
  Initialize,
  /// pattern[i] == pattern[len]; lps[i] becomes `len`
  MatchExtend { len: usize },
  /// mismatch with len > 0; len falls back without advancing i
  Backtrack { from: usize, to: usize },
  /// mismatch with len == 0; lps[i] = 0
  ForcedZero,
  /// table[pattern[i]] = i
  RecordOccurrence,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PreprocessStep {
  pub index: usize,
  pub ch: char,
  pub op: PreprocessOp,
  pub snapshot: Table,
}

/// What a pending KMP comparison is about to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CompareOutcome {
  /// advance both cursors
  Match,
  /// mismatch with j > 0, j = lps[j - 1]
  Fallback { to: usize },
  /// mismatch with j == 0, advance the text cursor only
  Advance,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SearchOp {
  Compare { outcome: CompareOutcome },
  MatchChar,
  Found { at: usize, shift: Option<usize> },
  ShiftBadChar { bad_char: char, last_occurrence: Option<usize>, shift: usize },
}

impl SearchOp {
  /// The alignment shift this step applies, if it is a Boyer-Moore shift decision.
  pub fn shift(&self) -> Option<usize> {
    match *self {
      SearchOp::Found { shift, .. } => shift,
      SearchOp::ShiftBadChar { shift, .. } => Some(shift),
      _ => None,
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SearchStep {
  /// text cursor; on a KMP `Found` step it has already advanced past the match and can
  /// equal `text.len()`, so it is not always a valid index into the text
  pub text_index: usize,
  pub pattern_index: usize,
  /// start of the pattern window against the text
  pub alignment: usize,
  pub op: SearchOp,
  /// matches found so far, including the one reported by a `Found` step
  pub matches: Vec<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
  Preprocessing,
  Search,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SearchResult {
  pub algorithm: Algorithm,
  pub text: Vec<char>,
  pub pattern: Vec<char>,
  pub preprocess_steps: Vec<PreprocessStep>,
  pub search_steps: Vec<SearchStep>,
  pub matches: Vec<usize>,
  pub table: Table,
}

impl SearchResult {
  /// The all-empty result returned for an empty text or pattern.
  pub fn empty(algorithm: Algorithm) -> Self {
    let table = match algorithm {
      Algorithm::Kmp => Table::Lps(vec![]),
      Algorithm::BoyerMoore => Table::LastOccurrence(LastOccurrenceTable::new()),
    };
    SearchResult {
      algorithm,
      text: vec![],
      pattern: vec![],
      preprocess_steps: vec![],
      search_steps: vec![],
      matches: vec![],
      table,
    }
  }

  pub fn is_empty(&self) -> bool {
    self.preprocess_steps.is_empty() && self.search_steps.is_empty()
  }

  pub fn steps_in(&self, phase: Phase) -> usize {
    match phase {
      Phase::Preprocessing => self.preprocess_steps.len(),
      Phase::Search => self.search_steps.len(),
    }
  }
}
