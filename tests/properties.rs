//! Cross-engine properties over random inputs, plus the fixed scenarios both engines must agree on.

use std::rc::Rc;

use itertools::Itertools;
use pattern_trace::{
  Algorithm,
  Playback,
  boyer_moore_search,
  build_bad_char_table,
  build_lps,
  kmp_search,
  naive,
  run,
  trace::{LastOccurrenceTable, Phase, PreprocessOp, SearchResult, Table},
};
use proptest::prelude::*;

fn chars(alphabet: &'static [char], len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<char>> {
  prop::collection::vec(prop::sample::select(alphabet), len)
}

fn text_and_pattern() -> impl Strategy<Value = (Vec<char>, Vec<char>)> {
  (chars(&['A', 'B', 'C'], 0..48), chars(&['A', 'B', 'C'], 0..6))
}

fn strictly_increasing(v: &[usize]) -> bool {
  v.iter().tuple_windows().all(|(a, b)| a < b)
}

#[derive(Clone, Debug)]
enum Action {
  Forward,
  Backward,
  Seek(usize),
  Play(f64),
  Pause,
  Reset,
  Tick,
}

fn action() -> impl Strategy<Value = Action> {
  prop_oneof![
    4 => Just(Action::Forward),
    2 => Just(Action::Backward),
    1 => (0usize..40).prop_map(Action::Seek),
    1 => (0.0f64..5.0).prop_map(Action::Play),
    1 => Just(Action::Pause),
    1 => Just(Action::Reset),
    3 => Just(Action::Tick),
  ]
}

proptest! {
  /// Both engines report exactly the brute-force occurrences
  #[test]
  fn prop_matches_agree_with_brute_force((text, pattern) in text_and_pattern()) {
    let expected = naive::find_all(&text, &pattern);
    let by_kmp = kmp_search(&text, &pattern);
    let by_boyer_moore = boyer_moore_search(&text, &pattern);
    prop_assert_eq!(&expected, &by_kmp.matches);
    prop_assert_eq!(&expected, &by_boyer_moore.matches);
  }

  #[test]
  fn prop_matches_strictly_increasing((text, pattern) in text_and_pattern()) {
    for algorithm in Algorithm::ALL {
      let result = algorithm.matcher().search(&text, &pattern);
      prop_assert!(strictly_increasing(&result.matches));
      for step in &result.search_steps {
        prop_assert!(strictly_increasing(&step.matches));
        prop_assert!(result.matches.starts_with(&step.matches));
      }
    }
  }

  #[test]
  fn prop_lps_invariant(pattern in chars(&['A', 'B'], 1..24)) {
    let lps = build_lps(&pattern).lps;
    prop_assert_eq!(lps.len(), pattern.len());
    prop_assert_eq!(lps[0], 0);
    for (i, &v) in lps.iter().enumerate() {
      prop_assert!(v <= i);
      // a border of pattern[..=i] of length v
      prop_assert_eq!(&pattern[..v], &pattern[i + 1 - v..=i]);
    }
    prop_assert_eq!(kmp::kmp_table(&pattern), lps);
  }

  #[test]
  fn prop_bad_char_invariant(pattern in chars(&['A', 'B', 'C', 'D'], 1..24)) {
    let table = build_bad_char_table(&pattern).table;
    for c in ['A', 'B', 'C', 'D', 'E'] {
      let expected = pattern.iter().rposition(|&p| p == c);
      prop_assert_eq!(expected, table.get(c));
    }
  }

  #[test]
  fn prop_boyer_moore_always_progresses((text, pattern) in text_and_pattern()) {
    let result = boyer_moore_search(&text, &pattern);
    for step in &result.search_steps {
      if let Some(shift) = step.op.shift() {
        prop_assert!(shift >= 1);
      }
    }
    let alignments = result.search_steps.iter().map(|s| s.alignment).collect::<Vec<_>>();
    prop_assert!(alignments.iter().tuple_windows().all(|(a, b)| a <= b));
  }

  #[test]
  fn prop_trace_is_deterministic((text, pattern) in text_and_pattern()) {
    prop_assert_eq!(kmp_search(&text, &pattern), kmp_search(&text, &pattern));
    prop_assert_eq!(boyer_moore_search(&text, &pattern), boyer_moore_search(&text, &pattern));
  }

  /// Every snapshot shows the table exactly as it stood when its step was recorded.
  #[test]
  fn prop_snapshots_are_independent(pattern in chars(&['A', 'B', 'C'], 1..16)) {
    let build = build_lps(&pattern);
    for step in &build.steps {
      let snapshot = step.snapshot.as_lps().map(<[usize]>::to_vec).unwrap_or_default();
      let written = match step.op {
        PreprocessOp::MatchExtend { .. } | PreprocessOp::ForcedZero => step.index + 1,
        _ => step.index,
      };
      let expected = (0..pattern.len())
        .map(|k| if k < written { build.lps[k] } else { 0 })
        .collect::<Vec<_>>();
      prop_assert_eq!(expected, snapshot);
    }

    let build = build_bad_char_table(&pattern);
    for step in &build.steps {
      let expected: LastOccurrenceTable = pattern[..=step.index].iter().copied().zip(0..).collect();
      prop_assert_eq!(&Table::LastOccurrence(expected), &step.snapshot);
    }
  }

  /// Any sequence of playback actions keeps the position in bounds and never panics.
  #[test]
  fn prop_playback_stays_in_bounds(
    (text, pattern) in text_and_pattern(),
    algorithm in prop::sample::select(Algorithm::ALL.to_vec()),
    actions in prop::collection::vec(action(), 0..64),
  ) {
    let result = Rc::new(algorithm.matcher().search(&text, &pattern));
    let mut playback = Playback::default();
    playback.load(Rc::clone(&result));

    for action in actions {
      match action {
        Action::Forward => { playback.step_forward(); }
        Action::Backward => { playback.step_backward(); }
        Action::Seek(i) => { playback.seek(i); }
        Action::Play(speed) => { playback.play(speed); }
        Action::Pause => playback.pause(),
        Action::Reset => playback.reset(),
        Action::Tick => {
          if let Some((handle, _)) = playback.active_timer() {
            playback.tick(handle);
          }
        }
      }
      let len = result.steps_in(playback.phase());
      prop_assert!(len == 0 || playback.index() < len);
      prop_assert!(playback.phase() == Phase::Preprocessing || !result.search_steps.is_empty());
    }
  }
}

fn both(text: &str, pattern: &str) -> [SearchResult; 2] {
  [run(Algorithm::Kmp, text, pattern), run(Algorithm::BoyerMoore, text, pattern)]
}

#[test]
fn classic_example() {
  for result in both("ABABDABACDABABCABAB", "ABABCABAB") {
    assert_eq!(vec![10], result.matches);
  }
}

#[test]
fn overlapping_matches_are_kept() {
  for result in both("AAAA", "AA") {
    assert_eq!(vec![0, 1, 2], result.matches);
  }
}

#[test]
fn disjoint_alphabets_never_match() {
  for result in both("ABC", "XYZ") {
    assert!(result.matches.is_empty());
  }
}

#[test]
fn lps_of_a_run() {
  assert_eq!(vec![0, 1, 2, 3], build_lps(&['A'; 4]).lps);
}

#[test]
fn bad_char_table_of_abcab() {
  let table = build_bad_char_table(&['A', 'B', 'C', 'A', 'B']).table;
  let expected: LastOccurrenceTable = [('A', 3), ('B', 4), ('C', 2)].into_iter().collect();
  assert_eq!(expected, table);
}

#[test]
fn empty_inputs_give_empty_results() {
  for (text, pattern) in [("", "AB"), ("AB", ""), ("", "")] {
    for result in both(text, pattern) {
      assert!(result.preprocess_steps.is_empty());
      assert!(result.search_steps.is_empty());
      assert!(result.matches.is_empty());
      assert!(result.table.is_empty());
    }
  }
}
