use crate::*;
use common::exact_occurrences;

/// `KDifferences` by a full dynamic program for every start position.
/// Quadratic in the text length; intended as a reference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaiveSearch;

impl KDifferences for NaiveSearch {
  fn find_matches<A: Eq>(&self, text: &[A], pattern: &[A], k: usize) -> Result<Vec<Match>, Error> {
    Config::new(k).validate()?;
    if pattern.is_empty() {
      return Err(Error::EmptyPattern);
    }
    if k == 0 {
      return Ok(
        exact_occurrences(pattern, text)
          .into_iter()
          .map(|start| Match { start, differences: 0 })
          .collect()
      );
    }
    Ok(naive_matches(text, pattern, k))
  }
}

/// Unit cost edit distance between `a` and `b`
pub fn edit_distance<A: Eq>(a: &[A], b: &[A]) -> usize {
  let mut row: Vec<usize> = (0..=b.len()).collect();
  for (i, x) in a.iter().enumerate() {
    let mut diagonal = row[0];
    row[0] = i + 1;
    for (j, y) in b.iter().enumerate() {
      let substitution = diagonal + usize::from(x != y);
      diagonal = row[j + 1];
      row[j + 1] = substitution.min(row[j] + 1).min(row[j + 1] + 1);
    }
  }
  row[b.len()]
}

/// Minimal edit distance between the pattern and any prefix of the text
pub fn prefix_distance<A: Eq>(pattern: &[A], text: &[A]) -> usize {
  // column j holds the distance between the pattern prefix and text[..j]
  let mut column: Vec<usize> = (0..=text.len()).collect();
  for (i, x) in pattern.iter().enumerate() {
    let mut diagonal = column[0];
    column[0] = i + 1;
    for (j, y) in text.iter().enumerate() {
      let substitution = diagonal + usize::from(x != y);
      diagonal = column[j + 1];
      column[j + 1] = substitution.min(column[j] + 1).min(column[j + 1] + 1);
    }
  }
  column.into_iter().min().unwrap_or(pattern.len())
}

// every start i in 0..=n+k-m whose best alignment needs at most k differences
// an alignment starting at i consumes at most m+k text symbols
pub fn naive_matches<A: Eq>(text: &[A], pattern: &[A], k: usize) -> Vec<Match> {
  let Some(last_start) = (text.len() + k).checked_sub(pattern.len()) else {
    return vec![];
  };
  (0..=last_start)
    .filter_map(|start| {
      let from = start.min(text.len());
      let to = start.saturating_add(pattern.len()).saturating_add(k).min(text.len());
      let differences = prefix_distance(pattern, &text[from..to]);
      (differences <= k).then_some(Match { start, differences })
    })
    .collect()
}
