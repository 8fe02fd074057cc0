//! Receiving side of a chain
//!
//! Every operator in this crate wraps the observer below it, so a subscribed
//! chain is a stack of observers ending in the one passed to `subscribe`.

use std::convert::Infallible;

/// Consumer of a stream of `Item`s that may fail with `Err`.
///
/// `error` and `complete` take `self`: once either has run there is no
/// observer left to notify.
pub trait Observer<Item, Err> {
  fn next(&mut self, value: Item);

  fn error(self, err: Err);

  fn complete(self);

  /// `true` once nothing more will be accepted.
  ///
  /// `take` reports closed after its last value and `single` after a second
  /// match. Sources check it before producing each value.
  fn is_closed(&self) -> bool;
}

/// Object-safe notification sink handed to a `create` closure.
///
/// The closure only sees `&mut dyn Emitter`, so terminal calls cannot
/// consume anything; the implementation ignores calls made after the first
/// terminal one.
pub trait Emitter<Item, Err> {
  fn next(&mut self, value: Item);
  fn error(&mut self, err: Err);
  fn complete(&mut self);

  /// Check this before computing the next value.
  fn is_closed(&self) -> bool;
}

/// Wraps the closure given to `subscribe`.
///
/// Only implemented for `Infallible` errors: a chain that can fail has to go
/// through `on_error` before a bare closure can end it.
#[derive(Clone)]
pub struct FnMutObserver<F>(pub F);

impl<F, Item> Observer<Item, Infallible> for FnMutObserver<F>
where
  F: FnMut(Item),
{
  #[inline]
  fn next(&mut self, v: Item) { (self.0)(v); }

  #[inline]
  fn error(self, err: Infallible) { match err {} }

  #[inline]
  fn complete(self) {}

  #[inline]
  fn is_closed(&self) -> bool { false }
}
