use crate::trace::{PreprocessOp, PreprocessStep, Table};

/// The failure function of a pattern together with the steps that built it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LpsBuild {
  pub lps: Vec<usize>,
  pub steps: Vec<PreprocessStep>,
}

fn step(index: usize, ch: char, op: PreprocessOp, lps: &[usize]) -> PreprocessStep {
  PreprocessStep { index, ch, op, snapshot: Table::Lps(lps.to_vec()) }
}

/// Computes `lps[i]`, the length of the longest proper prefix of `pattern[..=i]` that is
/// also a suffix of it.
///
/// The first step is always `Initialize` with the all-zero array; every later step carries a
/// full copy of the array after its write.
pub fn build_lps(pattern: &[char]) -> LpsBuild {
  if pattern.is_empty() {
    return LpsBuild { lps: vec![], steps: vec![] };
  }

  let mut lps = vec![0; pattern.len()];
  let mut steps = vec![step(0, pattern[0], PreprocessOp::Initialize, &lps)];

  // len: length of the prefix-suffix matched so far
  let mut len = 0;
  let mut i = 1;

  while i < pattern.len() {
    if pattern[i] == pattern[len] {
      len += 1;
      lps[i] = len;
      steps.push(step(i, pattern[i], PreprocessOp::MatchExtend { len }, &lps));
      i += 1;
    } else if len > 0 {
      let from = len;
      len = lps[len - 1];
      steps.push(step(i, pattern[i], PreprocessOp::Backtrack { from, to: len }, &lps));
    } else {
      lps[i] = 0;
      steps.push(step(i, pattern[i], PreprocessOp::ForcedZero, &lps));
      i += 1;
    }
  }

  LpsBuild { lps, steps }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::common::to_chars;
  use test_case::test_case;

  #[test_case("A", vec![0] ; "single")]
  #[test_case("AAAA", vec![0, 1, 2, 3] ; "run")]
  #[test_case("ABCD", vec![0, 0, 0, 0] ; "distinct")]
  #[test_case("ABABCABAB", vec![0, 0, 1, 2, 0, 1, 2, 3, 4] ; "classic")]
  #[test_case("AABAACAABAA", vec![0, 1, 0, 1, 2, 0, 1, 2, 3, 4, 5] ; "nested borders")]
  #[test_case("AAACAAAA", vec![0, 1, 2, 0, 1, 2, 3, 3] ; "fallback then extend")]
  fn lps_values(pattern: &str, expected: Vec<usize>) {
    assert_eq!(expected, build_lps(&to_chars(pattern)).lps);
  }

  #[test]
  fn agrees_with_kmp_crate() {
    for pattern in ["ABABCABAB", "abacabadabacaba", "aaabaaab", "xyz"] {
      let pattern = to_chars(pattern);
      assert_eq!(::kmp::kmp_table(&pattern), build_lps(&pattern).lps);
    }
  }

  #[test]
  fn single_character_has_only_initialization() {
    let build = build_lps(&['Q']);
    assert_eq!(1, build.steps.len());
    assert_eq!(PreprocessOp::Initialize, build.steps[0].op);
  }

  #[test]
  fn empty_pattern_builds_nothing() {
    let build = build_lps(&[]);
    assert!(build.lps.is_empty());
    assert!(build.steps.is_empty());
  }

  #[test]
  fn step_sequence() {
    let build = build_lps(&to_chars("AAB"));
    let ops = build.steps.iter().map(|s| s.op).collect::<Vec<_>>();
    assert_eq!(
      vec![
        PreprocessOp::Initialize,
        PreprocessOp::MatchExtend { len: 1 },
        PreprocessOp::Backtrack { from: 1, to: 0 },
        PreprocessOp::ForcedZero,
      ],
      ops
    );
    // the backtrack does not advance i
    assert_eq!(2, build.steps[2].index);
    assert_eq!(2, build.steps[3].index);
  }

  #[test]
  fn snapshots_are_full_copies() {
    let build = build_lps(&to_chars("AAAA"));
    let snapshots = build.steps.iter()
      .map(|s| s.snapshot.as_lps().map(<[usize]>::to_vec))
      .collect::<Vec<_>>();
    assert_eq!(
      vec![
        Some(vec![0, 0, 0, 0]),
        Some(vec![0, 1, 0, 0]),
        Some(vec![0, 1, 2, 0]),
        Some(vec![0, 1, 2, 3]),
      ],
      snapshots
    );
  }
}
