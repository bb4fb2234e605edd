use crate::{
  Config,
  Error,
  KDifferences,
  Match,
  common::{EditStep, furthest_step},
};

use std::{fmt, rc::Rc};

mod overlap;
pub use overlap::OverlapTable;

mod correspondence;
pub use correspondence::{Correspondence, CorrespondenceList};

mod difference_table;
pub use difference_table::{DifferenceTable, UNREACHED};

mod trace_set;
pub use trace_set::DiagonalTraces;

/// The furthest text position reached by any start position processed so far,
/// together with the correspondences of the alignment that reached it.
/// This is the only state carried from one start position to the next.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frontier {
  pub position: usize,
  pub trace: CorrespondenceList,
}

/// One evaluated cell of the difference table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepEvent {
  pub start: usize,
  pub diagonal: isize,
  pub differences: usize,
  pub row: usize,
}

/// Hook called once per evaluated (diagonal, budget) cell; it can not influence the result
pub trait StepObserver {
  fn observe(&mut self, event: &StepEvent);
}

impl<F: FnMut(&StepEvent)> StepObserver for F {
  fn observe(&mut self, event: &StepEvent) {
    self(event)
  }
}

/// k-differences matcher over a text and a pattern held in memory
#[derive(Debug)]
pub struct LandauVishkin<'a, A> {
  text: &'a [A],
  pattern: &'a [A],
  overlap: OverlapTable,
  config: Config,
  // the pattern alone never needs more than m differences, so k beyond m only widens the start range
  budget: usize,
}

impl<'a, A: Eq> LandauVishkin<'a, A> {
  pub fn new(text: &'a [A], pattern: &'a [A], config: Config) -> Result<Self, Error> {
    config.validate()?;
    if pattern.is_empty() {
      return Err(Error::EmptyPattern);
    }
    tracing::debug!(
      text_len = text.len(),
      pattern_len = pattern.len(),
      k = config.max_differences,
      fast_forward = config.fast_forward,
      "building matcher"
    );
    Ok(Self {
      text,
      pattern,
      overlap: OverlapTable::new(pattern),
      config,
      budget: config.max_differences.min(pattern.len()),
    })
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn overlap_table(&self) -> &OverlapTable {
    &self.overlap
  }

  /// The last start position an alignment with at most k differences can have,
  /// or None if the pattern is longer than the text plus k
  pub fn last_start(&self) -> Option<usize> {
    (self.text.len() + self.config.max_differences).checked_sub(self.pattern.len())
  }

  pub fn matches(&self) -> Matches<'_, 'a, A> {
    Matches {
      matcher: self,
      next_start: 0,
      frontier: Frontier::default(),
    }
  }

  pub fn find_all(&self) -> Vec<Match> {
    self.matches().collect()
  }

  /// Processes start position `start`; see `step_observed`
  pub fn step(&self, start: usize, frontier: Frontier) -> (Option<Match>, Frontier) {
    self.step_observed(start, frontier, &mut |_: &StepEvent| {})
  }

  /// Computes the difference table for alignments beginning at `start`, budgets smallest first,
  /// and stops at the first budget that consumes the whole pattern.
  /// Returns that match, if any, and the frontier to hand to the next start position.
  pub fn step_observed(
    &self,
    start: usize,
    frontier: Frontier,
    observer: &mut impl StepObserver,
  ) -> (Option<Match>, Frontier) {
    let k = self.budget;
    let m = self.pattern.len() as isize;
    let i = start as isize;

    let mut table = DifferenceTable::new(k);
    let mut traces = DiagonalTraces::new(k);

    let mut best_position = frontier.position;
    let mut best_trace = None;
    let mut found = None;

    'budgets: for e in 0..=k as isize {
      let previous = std::mem::replace(&mut traces, DiagonalTraces::new(k));

      for d in -e..=e {
        let (entry_row, step) = furthest_step(
          table.get(d, e - 1) + 1,
          table.get(d - 1, e - 1),
          table.get(d + 1, e - 1) + 1,
        );

        let mut trace = match step {
          EditStep::Substitution => previous.get(d),
          EditStep::Deletion => previous.get(d - 1),
          EditStep::Insertion => previous.get(d + 1),
        };
        if step != EditStep::Insertion {
          // the first substitution at the very start of the text has no text position
          if let Ok(position) = usize::try_from(i + entry_row + d - 1) {
            trace.push(Correspondence::marker(position));
          }
        }

        let row = self.extend(i, d, entry_row, &frontier);
        table.set(d, e, row);

        // every cell the recurrence evaluates has row >= max(0, -d)
        let text_position = (i + row + d) as usize;
        if row > entry_row {
          trace.push(Correspondence::new(
            (i + entry_row + d) as usize,
            entry_row as usize,
            (row - entry_row) as usize,
          ));
        }

        observer.observe(&StepEvent { start, diagonal: d, differences: e as usize, row: row as usize });

        if text_position > best_position {
          best_position = text_position;
          best_trace = Some(trace.clone());
        }
        traces.set(d, trace);

        if row == m {
          tracing::debug!(start, differences = e, "found match");
          found = Some(Match { start, differences: e as usize });
          break 'budgets;
        }
      }
    }

    let frontier = match best_trace {
      Some(trace) => {
        tracing::trace!(start, from = frontier.position, to = best_position, "frontier advanced");
        Frontier { position: best_position, trace }
      }
      None => frontier,
    };
    (found, frontier)
  }

  // extends `row` on diagonal `d` as far as text and pattern agree
  fn extend(&self, i: isize, d: isize, mut row: isize, frontier: &Frontier) -> isize {
    let m = self.pattern.len() as isize;
    let n = self.text.len() as isize;

    if self.config.fast_forward {
      // text positions up to the frontier were compared before; reuse what is known about them
      while row < m && i + row + d < n && i + row + d < frontier.position as isize {
        let index = (i + row + d) as usize;
        match frontier.trace.find_covering(index) {
          Some(known) if known.len > 1 => {
            let overlap = self.overlap.get(known.pattern_start, row as usize);
            if overlap != known.len {
              // the text continues as pattern[known.pattern_start..], which leaves pattern[row..] here
              return row + overlap.min(known.len) as isize;
            }
            row += known.len as isize;
          }
          _ => {
            if self.text[index] != self.pattern[row as usize] {
              return row;
            }
            row += 1;
          }
        }
      }
    }

    while row < m && i + row + d < n && self.text[(i + row + d) as usize] == self.pattern[row as usize] {
      row += 1;
    }
    row
  }
}

/// Lazily computed matches in increasing start order.
/// Dropping the iterator abandons the run.
pub struct Matches<'m, 'a, A> {
  matcher: &'m LandauVishkin<'a, A>,
  next_start: usize,
  frontier: Frontier,
}

impl<A: Eq> Iterator for Matches<'_, '_, A> {
  type Item = Match;

  fn next(&mut self) -> Option<Match> {
    let last_start = self.matcher.last_start()?;
    while self.next_start <= last_start {
      let start = self.next_start;
      self.next_start += 1;

      let frontier = std::mem::take(&mut self.frontier);
      let (found, frontier) = self.matcher.step(start, frontier);
      self.frontier = frontier;
      if found.is_some() {
        return found;
      }
    }
    None
  }
}

/// Minimal number of differences, at most `k`, with which the pattern matches a prefix of the text
pub fn min_differences_at<A: Eq>(text: &[A], pattern: &[A], k: usize) -> Result<Option<usize>, Error> {
  let matcher = LandauVishkin::new(text, pattern, Config::new(k).with_fast_forward(false))?;
  let (found, _) = matcher.step(0, Frontier::default());
  Ok(found.map(|found| found.differences))
}

/// `KDifferences` through the Landau-Vishkin-Nussinov matcher
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LandauVishkinSearch {
  pub fast_forward: bool,
}

impl Default for LandauVishkinSearch {
  fn default() -> Self {
    Self { fast_forward: true }
  }
}

impl KDifferences for LandauVishkinSearch {
  fn find_matches<A: Eq>(&self, text: &[A], pattern: &[A], k: usize) -> Result<Vec<Match>, Error> {
    let config = Config::new(k).with_fast_forward(self.fast_forward);
    Ok(LandauVishkin::new(text, pattern, config)?.find_all())
  }
}
