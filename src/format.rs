//! Turns step records into display rows and action descriptions, on demand.
//!
//! The engines only record indices and operation variants; everything a presentation layer
//! shows for a step is derived here from the step plus the inputs held by its `SearchResult`.

use std::fmt;

use itertools::Itertools;

use crate::{
  Algorithm,
  trace::{CompareOutcome, PreprocessOp, PreprocessStep, SearchOp, SearchResult, SearchStep, Table},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
  /// position being compared
  Pointer,
  Matched,
  Mismatch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
  Index(usize),
  Char(char),
  Marker(Marker),
  Empty,
}

impl fmt::Display for Cell {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Cell::Index(i) => write!(f, "{}", i),
      Cell::Char(c) => write!(f, "{}", c),
      Cell::Marker(Marker::Pointer) => f.write_str("↓"),
      Cell::Marker(Marker::Matched) => f.write_str("✓"),
      Cell::Marker(Marker::Mismatch) => f.write_str("✗"),
      Cell::Empty => Ok(()),
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayTable {
  pub headers: Vec<&'static str>,
  pub rows: Vec<Vec<Cell>>,
}

impl DisplayTable {
  /// Plain-text rendering with left-aligned, padded columns.
  pub fn render(&self) -> String {
    let widths = self.headers.iter().enumerate()
      .map(|(col, header)| {
        self.rows.iter()
          .map(|row| row.get(col).map_or(0, |cell| cell.to_string().chars().count()))
          .chain(std::iter::once(header.chars().count()))
          .max()
          .unwrap_or(0)
      })
      .collect::<Vec<_>>();

    let line = |cells: Vec<String>| {
      cells.iter()
        .zip(&widths)
        .map(|(cell, &w)| format!("{:<w$}", cell, w = w))
        .join(" | ")
        .trim_end()
        .to_string()
    };

    let mut out = vec![line(self.headers.iter().map(|h| h.to_string()).collect())];
    out.push(widths.iter().map(|&w| "-".repeat(w)).join("-+-"));
    for row in &self.rows {
      out.push(line(row.iter().map(Cell::to_string).collect()));
    }
    out.join("\n")
  }
}

pub fn preprocess_table(result: &SearchResult, step: &PreprocessStep) -> DisplayTable {
  match &step.snapshot {
    Table::Lps(lps) => DisplayTable {
      headers: vec!["Index", "Pattern", "LPS"],
      rows: result.pattern.iter().zip(lps)
        .enumerate()
        .map(|(i, (&c, &v))| vec![Cell::Index(i), Cell::Char(c), Cell::Index(v)])
        .collect(),
    },
    Table::LastOccurrence(table) => DisplayTable {
      headers: vec!["Character", "Last Occurrence"],
      rows: table.iter().map(|(c, i)| vec![Cell::Char(c), Cell::Index(i)]).collect(),
    },
  }
}

fn comparison(step: &SearchStep, m: usize, idx: usize) -> Cell {
  let window = step.alignment..step.alignment + m;
  match step.op {
    SearchOp::Found { at, .. } if (at..at + m).contains(&idx) => Cell::Marker(Marker::Matched),
    SearchOp::Found { .. } => Cell::Empty,
    _ if idx == step.text_index => match step.op {
      SearchOp::ShiftBadChar { .. } => Cell::Marker(Marker::Mismatch),
      _ => Cell::Marker(Marker::Pointer),
    },
    SearchOp::MatchChar | SearchOp::ShiftBadChar { .. } if idx > step.text_index && window.contains(&idx) => {
      Cell::Marker(Marker::Matched)
    }
    _ => Cell::Empty,
  }
}

pub fn search_table(result: &SearchResult, step: &SearchStep) -> DisplayTable {
  let m = result.pattern.len();
  let end = (step.alignment + m).min(result.text.len());
  DisplayTable {
    headers: vec!["Index", "Text", "Comparison"],
    rows: (0..end)
      .map(|idx| vec![Cell::Index(idx), Cell::Char(result.text[idx]), comparison(step, m, idx)])
      .collect(),
  }
}

pub fn describe_preprocess(result: &SearchResult, step: &PreprocessStep) -> String {
  let p = &result.pattern;
  let (i, c) = (step.index, step.ch);
  match step.op {
    PreprocessOp::Initialize => "Initialize: lps[0] = 0 (every string has empty prefix)".to_string(),
    PreprocessOp::MatchExtend { len } => format!(
      "Match found: pattern[{}]='{}' == pattern[{}]='{}' → lps[{}] = {}",
      i, c, len - 1, p[len - 1], i, len
    ),
    PreprocessOp::Backtrack { from, to } => format!(
      "Mismatch: pattern[{}]='{}' != pattern[{}]='{}' → backtrack len to lps[{}] = {}",
      i, c, from, p[from], from - 1, to
    ),
    PreprocessOp::ForcedZero => format!(
      "Mismatch at start: pattern[{}]='{}' != pattern[0]='{}' → lps[{}] = 0",
      i, c, p[0], i
    ),
    PreprocessOp::RecordOccurrence => format!("Setting last occurrence of '{}' = {}", c, i),
  }
}

pub fn describe_search(result: &SearchResult, step: &SearchStep) -> String {
  let (i, j) = (step.text_index, step.pattern_index);
  let text = &result.text;
  let pattern = &result.pattern;
  match step.op {
    SearchOp::Compare { outcome: CompareOutcome::Match } => format!(
      "Characters match: text[{}]='{}' == pattern[{}]='{}'",
      i, text[i], j, pattern[j]
    ),
    SearchOp::Compare { outcome: CompareOutcome::Fallback { to } } => format!(
      "Mismatch: text[{}]='{}' != pattern[{}]='{}' → use LPS to jump to j = {}",
      i, text[i], j, pattern[j], to
    ),
    SearchOp::Compare { outcome: CompareOutcome::Advance } => format!(
      "Mismatch: text[{}]='{}' != pattern[0]='{}' → move text pointer",
      i, text[i], pattern[0]
    ),
    SearchOp::MatchChar => format!("Match at text[{}] ('{}')", i, text[i]),
    SearchOp::Found { at, shift: Some(shift) } => {
      format!("Pattern found at index {} → shift by {}", at, shift)
    }
    SearchOp::Found { at, shift: None } => format!("Pattern found at index {}", at),
    SearchOp::ShiftBadChar { bad_char, shift, .. } => {
      format!("Mismatch at text[{}] ('{}') → shift by {}", i, bad_char, shift)
    }
  }
}

pub fn algorithm_name(algorithm: Algorithm) -> &'static str {
  match algorithm {
    Algorithm::Kmp => "KMP",
    Algorithm::BoyerMoore => "Boyer-Moore",
  }
}
