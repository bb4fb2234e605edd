use super::*;

/// One correspondence list per diagonal in -k..=k.
/// Diagonals outside that range take no part in the current budget: writes to them are dropped
/// and reads return an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagonalTraces {
  k: isize,
  lists: Vec<CorrespondenceList>,
}

impl DiagonalTraces {
  pub fn new(k: usize) -> Self {
    Self {
      k: k as isize,
      lists: vec![CorrespondenceList::new(); 2 * k + 1],
    }
  }

  fn index(&self, d: isize) -> Option<usize> {
    let index = d + self.k;
    (0..self.lists.len() as isize).contains(&index).then_some(index as usize)
  }

  pub fn get(&self, d: isize) -> CorrespondenceList {
    self.index(d).map(|i| self.lists[i].clone()).unwrap_or_default()
  }

  pub fn set(&mut self, d: isize, list: CorrespondenceList) {
    if let Some(i) = self.index(d) {
      self.lists[i] = list;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_set_and_get() {
    let mut traces = DiagonalTraces::new(2);
    let list: CorrespondenceList = [Correspondence::new(1, 0, 3)].into_iter().collect();
    traces.set(-2, list.clone());
    let mut extended = traces.get(-2);
    extended.push(Correspondence::marker(4));
    traces.set(-2, extended);

    assert_eq!(2, traces.get(-2).len());
    assert_eq!(1, list.len());
    assert!(traces.get(0).is_empty());
  }

  #[test]
  fn test_outside_diagonals_are_inert() {
    let mut traces = DiagonalTraces::new(1);
    let list: CorrespondenceList = [Correspondence::new(1, 0, 3)].into_iter().collect();
    traces.set(2, list.clone());
    traces.set(-2, list);

    assert!(traces.get(2).is_empty());
    assert!(traces.get(-2).is_empty());
    assert!((-1..=1).all(|d| traces.get(d).is_empty()));
  }
}
