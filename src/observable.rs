//! Observable traits
//!
//! An operator chain is a nested value, e.g. `Single<Map<FromIter<..>>>`,
//! wrapped in a [`Context`] that carries the scheduler. Nothing runs until
//! the chain is subscribed: each layer wraps the observer it receives and
//! passes it upstream via [`CoreObservable::subscribe`].

use crate::{
  context::Context,
  observer::FnMutObserver,
  ops::{
    filter::Filter,
    lifecycle::{OnComplete, OnError},
    map::Map,
    map_err::MapErr,
    single::{MatchAll, MatchFn, Single, TryMatchFn},
    take::Take,
  },
  subscription::Subscription,
};

pub mod create;
pub mod from_iter;
pub mod interval;
pub mod trivial;

pub use create::*;
pub use from_iter::*;
pub use interval::*;
pub use trivial::*;

/// The value and error types flowing out of an observable.
pub trait ObservableType {
  type Item;
  type Err;
}

/// The subscription entry point implemented by every source and operator.
///
/// `C` is the context wrapping the downstream observer.
pub trait CoreObservable<C>: ObservableType {
  type Unsub: Subscription;

  fn subscribe(self, context: C) -> Self::Unsub;
}

/// Item type of the observable held by context `C`.
pub type ItemOf<C> = <<C as Context>::Inner as ObservableType>::Item;

/// Error type of the observable held by context `C`.
pub type ErrOf<C> = <<C as Context>::Inner as ObservableType>::Err;

/// Operator methods, available on every [`Context`] that holds an
/// observable.
pub trait Observable: Context {
  /// Subscribe with a closure receiving each value.
  ///
  /// Only infallible streams accept a bare closure; handle the error channel
  /// first with [`on_error`](Observable::on_error), or use
  /// [`subscribe_with`](Observable::subscribe_with).
  fn subscribe<F>(self, f: F) -> <Self::Inner as CoreObservable<Self::With<FnMutObserver<F>>>>::Unsub
  where
    Self::Inner: CoreObservable<Self::With<FnMutObserver<F>>>,
    F: FnMut(ItemOf<Self>),
  {
    let (core, wrapped) = self.swap(FnMutObserver(f));
    core.subscribe(wrapped)
  }

  /// Subscribe with a full observer.
  fn subscribe_with<O>(self, observer: O) -> <Self::Inner as CoreObservable<Self::With<O>>>::Unsub
  where
    Self::Inner: CoreObservable<Self::With<O>>,
  {
    let (core, wrapped) = self.swap(observer);
    core.subscribe(wrapped)
  }

  // ==================== Companion operators ====================

  /// Emit only the values for which `filter` returns `true`.
  fn filter<F>(self, filter: F) -> Self::With<Filter<Self::Inner, F>>
  where
    Self::Inner: ObservableType,
    F: FnMut(&ItemOf<Self>) -> bool,
  {
    self.transform(|source| Filter { source, filter })
  }

  fn map<F, Out>(self, func: F) -> Self::With<Map<Self::Inner, F>>
  where
    Self::Inner: ObservableType,
    F: FnMut(ItemOf<Self>) -> Out,
  {
    self.transform(|source| Map { source, func })
  }

  /// Emit the first `count` values, then complete.
  fn take(self, count: usize) -> Self::With<Take<Self::Inner>> {
    self.transform(|source| Take { source, count })
  }

  fn map_err<F, OutErr>(self, func: F) -> Self::With<MapErr<Self::Inner, F>>
  where
    Self::Inner: ObservableType,
    F: FnOnce(ErrOf<Self>) -> OutErr,
  {
    self.transform(|source| MapErr { source, func })
  }

  /// Consume the error channel with `callback`, leaving an infallible stream.
  fn on_error<F>(self, callback: F) -> Self::With<OnError<Self::Inner, F>>
  where
    Self::Inner: ObservableType,
    F: FnOnce(ErrOf<Self>),
  {
    self.transform(|source| OnError::new(source, callback))
  }

  fn on_complete<F>(self, callback: F) -> Self::With<OnComplete<Self::Inner, F>>
  where
    F: FnOnce(),
  {
    self.transform(|source| OnComplete::new(source, callback))
  }

  // ==================== single family ====================

  /// Emit the only value satisfying `predicate`, once the source completes.
  ///
  /// - exactly one match: emits it, then completes
  /// - no match: completes without emitting
  /// - a second match: errors with
  ///   [`SingleError::MultipleMatches`](crate::error::SingleError) right
  ///   away, without waiting for the source to complete
  ///
  /// ```rust
  /// use rxsingle::prelude::*;
  ///
  /// let mut errors = Vec::new();
  /// TestCtx::from_iter([1, 2, 3, 4])
  ///   .single(|v| v % 2 == 0)
  ///   .on_error(|e| errors.push(e))
  ///   .subscribe(|_| unreachable!());
  ///
  /// assert_eq!(errors, vec![SingleError::MultipleMatches]);
  /// ```
  fn single<F>(self, predicate: F) -> Self::With<Single<Self::Inner, MatchFn<F>, ItemOf<Self>>>
  where
    Self::Inner: ObservableType,
    F: FnMut(&ItemOf<Self>) -> bool,
  {
    self.transform(|source| Single::new(source, MatchFn(predicate), None))
  }

  /// Like [`single`](Observable::single) with every value counting as a
  /// match.
  fn single_all(self) -> Self::With<Single<Self::Inner, MatchAll, ItemOf<Self>>>
  where
    Self::Inner: ObservableType,
  {
    self.transform(|source| Single::new(source, MatchAll, None))
  }

  /// Like [`single`](Observable::single), with a fallible predicate. An
  /// `Err` from the predicate terminates the stream with
  /// [`SingleError::Source`](crate::error::SingleError).
  fn try_single<F>(self, predicate: F) -> Self::With<Single<Self::Inner, TryMatchFn<F>, ItemOf<Self>>>
  where
    Self::Inner: ObservableType,
    F: FnMut(&ItemOf<Self>) -> Result<bool, ErrOf<Self>>,
  {
    self.transform(|source| Single::new(source, TryMatchFn(predicate), None))
  }

  /// Emit the only value of the source, or `default` if the source completes
  /// empty. A second value is an error.
  ///
  /// ```rust
  /// use std::{cell::RefCell, rc::Rc};
  ///
  /// use rxsingle::prelude::*;
  ///
  /// let got = Rc::new(RefCell::new(vec![]));
  /// let got_clone = got.clone();
  /// TestCtx::empty()
  ///   .single_or_default(-1)
  ///   .on_error(|e| panic!("{}", e))
  ///   .subscribe(move |v| got_clone.borrow_mut().push(v));
  ///
  /// assert_eq!(*got.borrow(), vec![-1]);
  /// ```
  fn single_or_default(
    self, default: ItemOf<Self>,
  ) -> Self::With<Single<Self::Inner, MatchAll, ItemOf<Self>>>
  where
    Self::Inner: ObservableType,
  {
    self.transform(|source| Single::new(source, MatchAll, Some(default)))
  }

  /// Emit the only value satisfying `predicate`, or `default` when none
  /// does.
  fn single_or_default_by<F>(
    self, default: ItemOf<Self>, predicate: F,
  ) -> Self::With<Single<Self::Inner, MatchFn<F>, ItemOf<Self>>>
  where
    Self::Inner: ObservableType,
    F: FnMut(&ItemOf<Self>) -> bool,
  {
    self.transform(|source| Single::new(source, MatchFn(predicate), Some(default)))
  }
}

impl<C: Context> Observable for C {}
