use kmp;

/// The edit operation by which an alignment path enters a diagonal at a new difference budget
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditStep {
  Substitution,
  Deletion,
  Insertion,
}

// arguments
// * the rows reachable by substitution, deletion and insertion
// returns
// * the largest row
// * the step that reached it; on ties substitution wins over deletion, deletion over insertion
pub fn furthest_step(substitution: isize, deletion: isize, insertion: isize) -> (isize, EditStep) {
  let row = substitution.max(deletion).max(insertion);
  let step = if row == substitution {
    EditStep::Substitution
  } else if row == deletion {
    EditStep::Deletion
  } else {
    EditStep::Insertion
  };
  (row, step)
}

// searches the pattern in the text without any differences
// returns the start of every occurrence, overlapping ones included
// runtime: linear in text length
pub fn exact_occurrences<A>(pattern: &[A], text: &[A]) -> Vec<usize>
where A: Eq
{
  if pattern.is_empty() {
    return (0..=text.len()).collect();
  }

  let lsp_array = kmp::kmp_table(pattern);

  let mut res = vec![];
  let mut text_index = 0;
  let mut pattern_index = 0;

  while text_index < text.len() {
    if text[text_index] == pattern[pattern_index] {
      text_index += 1;
      pattern_index += 1;

      if pattern_index == pattern.len() {
        res.push(text_index - pattern_index);
        pattern_index = lsp_array[pattern_index-1];
      }
    } else if pattern_index > 0 {
      pattern_index = lsp_array[pattern_index-1];
    } else {
      text_index += 1;
    }
  }
  res
}
