//! Errors produced by the `single` family of operators.

use thiserror::Error;

/// Error channel of [`Single`](crate::ops::single::Single).
///
/// `Source` carries the upstream error (or the error returned by a fallible
/// predicate) exactly as it was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SingleError<E> {
  /// A second element satisfied the predicate.
  #[error("sequence contains more than one matching element")]
  MultipleMatches,

  #[error("{0}")]
  Source(E),
}

impl<E> SingleError<E> {
  /// Returns `true` for a uniqueness violation.
  pub fn is_multiple_matches(&self) -> bool { matches!(self, SingleError::MultipleMatches) }

  /// Returns the upstream error, if this is one.
  pub fn into_source(self) -> Option<E> {
    match self {
      SingleError::Source(e) => Some(e),
      SingleError::MultipleMatches => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use std::convert::Infallible;

  use super::*;

  #[rxsingle_macro::test]
  fn display() {
    let err: SingleError<Infallible> = SingleError::MultipleMatches;
    assert_eq!(err.to_string(), "sequence contains more than one matching element");

    let err = SingleError::Source("disk on fire");
    assert_eq!(err.to_string(), "disk on fire");
  }

  #[rxsingle_macro::test]
  fn accessors() {
    assert!(SingleError::<()>::MultipleMatches.is_multiple_matches());
    assert_eq!(SingleError::<()>::MultipleMatches.into_source(), None);
    assert_eq!(SingleError::Source(7).into_source(), Some(7));
  }
}
