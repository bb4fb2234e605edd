use super::*;
use itertools::Itertools;

/// Longest common prefix lengths between every pair of pattern suffixes.
/// `get(i, j)` is the number of symbols for which `pattern[i..]` and `pattern[j..]` agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapTable {
  m: usize,
  // row-major m x m
  cells: Vec<usize>,
}

impl OverlapTable {
  // runtime: O(m^2) pairs, each extended symbol by symbol
  pub fn new<A: Eq>(pattern: &[A]) -> Self {
    let m = pattern.len();
    let mut cells = vec![0; m * m];

    for i in 0..m {
      cells[i * m + i] = m - i;
    }
    for (i, j) in (0..m).tuple_combinations() {
      // i < j, so j bounds the extension
      let f = pattern[i..].iter()
        .zip(&pattern[j..])
        .take_while(|(a, b)| a == b)
        .count();
      cells[i * m + j] = f;
      cells[j * m + i] = f;
    }

    Self { m, cells }
  }

  pub fn len(&self) -> usize {
    self.m
  }

  pub fn is_empty(&self) -> bool {
    self.m == 0
  }

  // panics on indices outside the pattern
  pub fn get(&self, i: usize, j: usize) -> usize {
    assert!(i < self.m && j < self.m, "overlap ({i}, {j}) outside of a pattern of length {}", self.m);
    self.cells[i * self.m + j]
  }
}

impl fmt::Display for OverlapTable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for row in self.cells.chunks(self.m.max(1)).take(self.m) {
      write!(f, "[")?;
      for cell in row {
        write!(f, " {cell:3} ")?;
      }
      writeln!(f, "]")?;
    }
    Ok(())
  }
}
