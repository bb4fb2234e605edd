use super::*;

/// `text[text_start..text_start+len)` is known to equal `pattern[pattern_start..pattern_start+len)`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Correspondence {
  pub text_start: usize,
  pub pattern_start: usize,
  pub len: usize,
}

impl Correspondence {
  pub const fn new(text_start: usize, pattern_start: usize, len: usize) -> Self {
    Self { text_start, pattern_start, len }
  }

  /// zero-length record marking the position where an alignment spent a difference
  pub const fn marker(text_start: usize) -> Self {
    Self::new(text_start, 0, 0)
  }

  pub const fn text_end(&self) -> usize {
    self.text_start + self.len
  }

  // the end is covered too, by an empty remainder
  pub fn covers(&self, index: usize) -> bool {
    self.text_start <= index && index <= self.text_end()
  }

  // the remainder of this record from `index` on
  // panics if `index` is not covered
  pub fn shifted_to(&self, index: usize) -> Self {
    debug_assert!(self.covers(index));
    let offset = index - self.text_start;
    Self::new(index, self.pattern_start + offset, self.len - offset)
  }
}

impl fmt::Display for Correspondence {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {}, {})", self.text_start, self.pattern_start, self.len)
  }
}

/// The correspondences along one alignment path, in discovery order.
/// Clones share their records until one of them is extended.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorrespondenceList {
  records: Rc<Vec<Correspondence>>,
}

impl CorrespondenceList {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  pub fn push(&mut self, record: Correspondence) {
    Rc::make_mut(&mut self.records).push(record);
  }

  // returns the first record (in discovery order) covering `index`, moved forward to start at `index`
  // returns None when no record covers it
  pub fn find_covering(&self, index: usize) -> Option<Correspondence> {
    self.records
      .iter()
      .find(|record| record.covers(index))
      .map(|record| record.shifted_to(index))
  }
}

impl FromIterator<Correspondence> for CorrespondenceList {
  fn from_iter<T: IntoIterator<Item = Correspondence>>(iter: T) -> Self {
    Self { records: Rc::new(iter.into_iter().collect()) }
  }
}

impl fmt::Display for CorrespondenceList {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[")?;
    for (i, record) in self.records.iter().enumerate() {
      if i > 0 {
        write!(f, " ")?;
      }
      write!(f, "{record}")?;
    }
    write!(f, "]")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use test_case::test_case;

  fn list(records: &[(usize, usize, usize)]) -> CorrespondenceList {
    records.iter().map(|&(p, c, f)| Correspondence::new(p, c, f)).collect()
  }

  #[test_case(&[(4,1,3)], 4, Some((4,1,3)) ; "exact start")]
  #[test_case(&[(4,1,3)], 6, Some((6,3,1)) ; "inside")]
  #[test_case(&[(4,1,3)], 7, Some((7,4,0)) ; "end")]
  #[test_case(&[(4,1,3)], 8, None ; "behind")]
  #[test_case(&[(4,1,3)], 3, None ; "before")]
  #[test_case(&[], 0, None ; "empty")]
  #[test_case(&[(0,0,2),(5,0,0),(6,2,4)], 7, Some((7,3,3)) ; "later record")]
  #[test_case(&[(6,2,4),(2,0,0),(0,0,2)], 1, Some((1,1,1)) ; "cover after a non covering record")]
  #[test_case(&[(0,0,3),(3,4,2)], 3, Some((3,3,0)) ; "first cover wins")]
  fn test_find_covering(records: &[(usize, usize, usize)], index: usize, expected: Option<(usize, usize, usize)>) {
    let expected = expected.map(|(p, c, f)| Correspondence::new(p, c, f));
    assert_eq!(expected, list(records).find_covering(index));
  }

  #[test]
  fn test_covering_consistency() {
    let (p, c, f) = (10, 3, 6);
    let records = list(&[(p, c, f)]);
    for index in p..=p+f {
      let found = records.find_covering(index).unwrap();
      assert_eq!(index, found.text_start);
      assert_eq!(p + f, found.text_start + found.len);
      assert_eq!(c + index - p, found.pattern_start);
    }
  }

  #[test]
  fn test_copies_are_independent() {
    let mut original = list(&[(0,0,2)]);
    let mut copy = original.clone();
    copy.push(Correspondence::marker(3));
    original.push(Correspondence::new(5,1,1));

    assert_eq!(list(&[(0,0,2),(3,0,0)]), copy);
    assert_eq!(list(&[(0,0,2),(5,1,1)]), original);
  }

  #[test]
  fn test_display() {
    assert_eq!("[(0, 0, 2) (3, 0, 0)]", list(&[(0,0,2),(3,0,0)]).to_string());
    assert_eq!("[]", CorrespondenceList::new().to_string());
  }
}
