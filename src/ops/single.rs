//! The `single` family of operators.
//!
//! All variants share one observer, [`SingleObserver`], parameterized by a
//! [`MatchPredicate`] and an optional default value:
//!
//! | Operator | Predicate | Default |
//! |----------|-----------|---------|
//! | `single(f)` | [`MatchFn`] | none |
//! | `single_all()` | [`MatchAll`] | none |
//! | `try_single(f)` | [`TryMatchFn`] | none |
//! | `single_or_default(d)` | [`MatchAll`] | `d` |
//! | `single_or_default_by(d, f)` | [`MatchFn`] | `d` |
//!
//! A second match fails the stream immediately. The observer then reports
//! `is_closed`, which tells synchronous and scheduled sources to stop.

use crate::{
  context::Context,
  error::SingleError,
  logging::{debug, trace},
  observable::{CoreObservable, ObservableType},
  observer::Observer,
};

// ==================== Predicates ====================

/// Decides whether a value counts toward the single match.
pub trait MatchPredicate<Item, Err> {
  fn matches(&mut self, value: &Item) -> Result<bool, Err>;
}

/// Every value matches.
#[derive(Clone, Copy, Default)]
pub struct MatchAll;

impl<Item, Err> MatchPredicate<Item, Err> for MatchAll {
  #[inline]
  fn matches(&mut self, _: &Item) -> Result<bool, Err> { Ok(true) }
}

/// Infallible predicate closure.
#[derive(Clone)]
pub struct MatchFn<F>(pub F);

impl<F, Item, Err> MatchPredicate<Item, Err> for MatchFn<F>
where
  F: FnMut(&Item) -> bool,
{
  #[inline]
  fn matches(&mut self, value: &Item) -> Result<bool, Err> { Ok((self.0)(value)) }
}

/// Fallible predicate closure; its error shares the source's error type.
#[derive(Clone)]
pub struct TryMatchFn<F>(pub F);

impl<F, Item, Err> MatchPredicate<Item, Err> for TryMatchFn<F>
where
  F: FnMut(&Item) -> Result<bool, Err>,
{
  #[inline]
  fn matches(&mut self, value: &Item) -> Result<bool, Err> { (self.0)(value) }
}

// ==================== Single ====================

#[derive(Clone)]
pub struct Single<S, P, Item> {
  pub source: S,
  pub predicate: P,
  pub default: Option<Item>,
}

impl<S, P, Item> Single<S, P, Item> {
  pub fn new(source: S, predicate: P, default: Option<Item>) -> Self {
    Self { source, predicate, default }
  }
}

impl<S, P, Item> ObservableType for Single<S, P, Item>
where
  S: ObservableType<Item = Item>,
{
  type Item = Item;
  type Err = SingleError<S::Err>;
}

/// Per-subscription progress of a [`SingleObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinglePhase<Item> {
  /// No match seen yet.
  AwaitingFirst,
  /// Exactly one match, held until the source completes.
  HaveOne(Item),
  /// An error was forwarded; everything else is ignored.
  Failed,
}

pub struct SingleObserver<O, P, Item> {
  observer: Option<O>,
  predicate: P,
  phase: SinglePhase<Item>,
  default: Option<Item>,
}

impl<O, P, Item> SingleObserver<O, P, Item> {
  pub fn new(observer: O, predicate: P, default: Option<Item>) -> Self {
    Self { observer: Some(observer), predicate, phase: SinglePhase::AwaitingFirst, default }
  }

  pub fn phase(&self) -> &SinglePhase<Item> { &self.phase }

  fn fail<Err>(&mut self, err: SingleError<Err>)
  where
    O: Observer<Item, SingleError<Err>>,
  {
    self.phase = SinglePhase::Failed;
    if let Some(observer) = self.observer.take() {
      observer.error(err);
    }
  }
}

impl<O, P, Item, Err> Observer<Item, Err> for SingleObserver<O, P, Item>
where
  O: Observer<Item, SingleError<Err>>,
  P: MatchPredicate<Item, Err>,
{
  fn next(&mut self, value: Item) {
    if self.observer.is_none() {
      return;
    }
    match self.predicate.matches(&value) {
      Ok(false) => {}
      Ok(true) => match self.phase {
        SinglePhase::AwaitingFirst => self.phase = SinglePhase::HaveOne(value),
        SinglePhase::HaveOne(_) => {
          debug!("single: second match, failing early");
          self.fail(SingleError::MultipleMatches);
        }
        SinglePhase::Failed => {}
      },
      Err(err) => self.fail(SingleError::Source(err)),
    }
  }

  fn error(self, err: Err) {
    if let Some(observer) = self.observer {
      observer.error(SingleError::Source(err));
    }
  }

  fn complete(self) {
    let SingleObserver { observer, phase, default, .. } = self;
    let Some(mut observer) = observer else {
      return;
    };
    trace!(matched = matches!(phase, SinglePhase::HaveOne(_)), "single: upstream completed");
    match phase {
      SinglePhase::HaveOne(value) => observer.next(value),
      SinglePhase::AwaitingFirst => {
        if let Some(default) = default {
          observer.next(default);
        }
      }
      SinglePhase::Failed => return,
    }
    observer.complete();
  }

  fn is_closed(&self) -> bool { self.observer.as_ref().is_none_or(|o| o.is_closed()) }
}

impl<S, P, Item, C> CoreObservable<C> for Single<S, P, Item>
where
  C: Context,
  C::Inner: Observer<Item, SingleError<S::Err>>,
  S: CoreObservable<C::With<SingleObserver<C::Inner, P, Item>>, Item = Item>,
  P: MatchPredicate<Item, S::Err>,
{
  type Unsub = S::Unsub;

  fn subscribe(self, context: C) -> Self::Unsub {
    let Single { source, predicate, default } = self;
    let wrapped = context.transform(|observer| SingleObserver::new(observer, predicate, default));
    source.subscribe(wrapped)
  }
}
