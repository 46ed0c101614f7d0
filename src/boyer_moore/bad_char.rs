use crate::trace::{LastOccurrenceTable, PreprocessOp, PreprocessStep, Table};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadCharBuild {
  pub table: LastOccurrenceTable,
  pub steps: Vec<PreprocessStep>,
}

/// Builds the last-occurrence table left to right, one step per pattern index.
/// Later occurrences overwrite earlier ones.
pub fn build_bad_char_table(pattern: &[char]) -> BadCharBuild {
  let mut table = LastOccurrenceTable::new();
  let mut steps = Vec::with_capacity(pattern.len());

  for (i, &c) in pattern.iter().enumerate() {
    table.set(c, i);
    steps.push(PreprocessStep {
      index: i,
      ch: c,
      op: PreprocessOp::RecordOccurrence,
      snapshot: Table::LastOccurrence(table.clone()),
    });
  }

  BadCharBuild { table, steps }
}
