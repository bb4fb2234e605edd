//! Approximate substring matching with at most `k` differences.
//! It contains the Landau-Vishkin-Nussinov matcher, which reuses the alignments of earlier
//! start positions through a pattern self-overlap table, and a naive reference implementation.

mod common;
pub mod landau_vishkin;
pub mod naive;

pub use landau_vishkin::{Frontier, LandauVishkin, LandauVishkinSearch, Matches, StepEvent, StepObserver};
pub use naive::NaiveSearch;

/// An occurrence of the pattern in the text
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Match {
  /// offset into the text where the alignment begins
  pub start: usize,
  /// minimal number of edit operations over all alignments beginning at `start`
  pub differences: usize,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  #[error("the pattern must contain at least one symbol")]
  EmptyPattern,
  #[error("difference budget {k} is too large")]
  DifferenceBudgetTooLarge { k: usize },
}

/// Parameters of a single matching run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
  /// maximal number of differences (`k`)
  pub max_differences: usize,
  /// reuse alignments found for earlier start positions instead of comparing symbol by symbol
  pub fast_forward: bool,
}

impl Config {
  pub const fn new(max_differences: usize) -> Self {
    Self { max_differences, fast_forward: true }
  }

  pub const fn with_fast_forward(mut self, fast_forward: bool) -> Self {
    self.fast_forward = fast_forward;
    self
  }

  pub(crate) fn validate(&self) -> Result<(), Error> {
    if self.max_differences > isize::MAX as usize / 4 {
      return Err(Error::DifferenceBudgetTooLarge { k: self.max_differences });
    }
    Ok(())
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::new(0)
  }
}

pub trait KDifferences {
  // returns every start index in the text at which the pattern matches with at most k differences,
  // sorted by start index
  fn find_matches<A: Eq>(&self, text: &[A], pattern: &[A], k: usize) -> Result<Vec<Match>, Error>;

  fn find_matches_str(&self, text: &str, pattern: &str, k: usize) -> Result<Vec<Match>, Error> {
    let text = text.chars().collect::<Vec<_>>();
    let pattern = pattern.chars().collect::<Vec<_>>();
    self.find_matches(&text, &pattern, k)
  }
}
