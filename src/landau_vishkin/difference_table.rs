use super::*;

/// Row value of cells no alignment path can reach
pub const UNREACHED: isize = isize::MIN / 2;

/// Furthest row reached on diagonal `d` with `e` differences, for d in -(k+1)..=k+1 and e in -2..=k.
/// `reset` restores the freshly seeded state, so one buffer can serve several start positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifferenceTable {
  k: isize,
  cells: Vec<isize>,
}

impl DifferenceTable {
  pub fn new(k: usize) -> Self {
    let k = k as isize;
    let mut table = Self {
      k,
      cells: vec![UNREACHED; Self::diagonals(k) * Self::budgets(k)],
    };
    table.reset();
    table
  }

  const fn diagonals(k: isize) -> usize {
    (2 * (k + 1) + 1) as usize
  }

  const fn budgets(k: isize) -> usize {
    (k + 3) as usize
  }

  fn index(&self, d: isize, e: isize) -> Option<usize> {
    let row = d + self.k + 1;
    let col = e + 2;
    if row < 0 || row as usize >= Self::diagonals(self.k) || col < 0 || col as usize >= Self::budgets(self.k) {
      return None;
    }
    Some(row as usize * Self::budgets(self.k) + col as usize)
  }

  // out of range cells are unreached; the recurrence never asks for them
  pub fn get(&self, d: isize, e: isize) -> isize {
    let index = self.index(d, e);
    debug_assert!(index.is_some(), "difference table access ({d}, {e}) with k = {}", self.k);
    index.map_or(UNREACHED, |i| self.cells[i])
  }

  pub fn set(&mut self, d: isize, e: isize, row: isize) {
    let index = self.index(d, e);
    debug_assert!(index.is_some(), "difference table write ({d}, {e}) with k = {}", self.k);
    if let Some(i) = index {
      self.cells[i] = row;
    }
  }

  /// Seeds the boundary of every diagonal so that e = 0 is computed by the regular recurrence
  pub fn reset(&mut self) {
    self.cells.fill(UNREACHED);
    for d in -(self.k + 1)..=(self.k + 1) {
      let distance = d.abs();
      self.set(d, distance - 2, UNREACHED);
      self.set(d, distance - 1, if d < 0 { distance - 1 } else { -1 });
    }
  }
}

impl fmt::Display for DifferenceTable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for d in -(self.k + 1)..=(self.k + 1) {
      for e in 0..=self.k {
        match self.get(d, e) {
          UNREACHED => write!(f, "({d}, {e}) = -inf\t")?,
          row => write!(f, "({d}, {e}) = {row}\t")?,
        }
      }
      writeln!(f)?;
    }
    Ok(())
  }
}
