//! Brute-force reference matcher. Produces no trace; used to check the traced engines.

/// Every `i` with `text[i..i + pattern.len()] == pattern`, ascending.
/// An empty pattern or text yields no matches, matching the traced engines.
pub fn find_all(text: &[char], pattern: &[char]) -> Vec<usize> {
  if pattern.is_empty() || pattern.len() > text.len() {
    return vec![];
  }
  text.windows(pattern.len())
    .enumerate()
    .filter(|(_, window)| *window == pattern)
    .map(|(i, _)| i)
    .collect()
}

pub fn find_all_str(text: &str, pattern: &str) -> Vec<usize> {
  let text = text.chars().collect::<Vec<_>>();
  let pattern = pattern.chars().collect::<Vec<_>>();
  find_all(&text, &pattern)
}
