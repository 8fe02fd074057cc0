//! Lifecycle operators: OnError and OnComplete
//!
//! Hooks for reacting to the terminal notifications of a stream.

use std::convert::Infallible;

use crate::{
  context::Context,
  observable::{CoreObservable, ObservableType},
  observer::Observer,
};

// ==================== OnError ====================

/// Consumes the error channel with a callback.
///
/// The resulting stream is infallible, which is what lets a closure be used
/// to subscribe to it.
#[derive(Clone)]
pub struct OnError<S, F> {
  pub source: S,
  pub callback: F,
}

impl<S, F> OnError<S, F> {
  pub fn new(source: S, callback: F) -> Self { Self { source, callback } }
}

impl<S: ObservableType, F> ObservableType for OnError<S, F> {
  type Item = S::Item;
  type Err = Infallible;
}

/// Observer wrapper for OnError that executes the callback on error
#[derive(Clone)]
pub struct OnErrorObserver<O, F> {
  observer: O,
  callback: F,
}

impl<O, F, Item, Err> Observer<Item, Err> for OnErrorObserver<O, F>
where
  O: Observer<Item, Infallible>,
  F: FnOnce(Err),
{
  fn next(&mut self, value: Item) { self.observer.next(value); }

  fn error(self, err: Err) { (self.callback)(err); }

  fn complete(self) { self.observer.complete(); }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}

impl<S, F, C> CoreObservable<C> for OnError<S, F>
where
  C: Context,
  C::Inner: Observer<S::Item, Infallible>,
  S: CoreObservable<C::With<OnErrorObserver<C::Inner, F>>>,
  F: FnOnce(S::Err),
{
  type Unsub = S::Unsub;

  fn subscribe(self, context: C) -> Self::Unsub {
    let OnError { source, callback } = self;
    let wrapped = context.transform(|observer| OnErrorObserver { observer, callback });
    source.subscribe(wrapped)
  }
}

// ==================== OnComplete ====================

/// OnComplete operator that executes a callback when the stream completes
#[derive(Clone)]
pub struct OnComplete<S, F> {
  pub source: S,
  pub callback: F,
}

impl<S, F> OnComplete<S, F> {
  pub fn new(source: S, callback: F) -> Self { Self { source, callback } }
}

impl<S: ObservableType, F> ObservableType for OnComplete<S, F> {
  type Item = S::Item;
  type Err = S::Err;
}

/// Observer wrapper for OnComplete that executes the callback on completion
pub struct OnCompleteObserver<O, F> {
  observer: O,
  callback: F,
}

impl<O, F, Item, Err> Observer<Item, Err> for OnCompleteObserver<O, F>
where
  O: Observer<Item, Err>,
  F: FnOnce(),
{
  fn next(&mut self, value: Item) { self.observer.next(value); }

  fn error(self, err: Err) { self.observer.error(err); }

  fn complete(self) {
    (self.callback)();
    self.observer.complete();
  }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}

impl<S, F, C> CoreObservable<C> for OnComplete<S, F>
where
  C: Context,
  S: CoreObservable<C::With<OnCompleteObserver<C::Inner, F>>>,
  F: FnOnce(),
{
  type Unsub = S::Unsub;

  fn subscribe(self, context: C) -> Self::Unsub {
    let OnComplete { source, callback } = self;
    let wrapped = context.transform(|observer| OnCompleteObserver { observer, callback });
    source.subscribe(wrapped)
  }
}

// ==================== Tests ====================
