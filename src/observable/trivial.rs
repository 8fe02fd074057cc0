//! Observables that emit at most one notification.
//!
//! | Type | Values | Terminal |
//! |------|--------|----------|
//! | [`Of`] | one | complete |
//! | [`Empty`] | none | complete |
//! | [`Never`] | none | none |
//! | [`ThrowErr`] | none | error |

use std::{convert::Infallible, marker::PhantomData};

use crate::{
  context::Context,
  observable::{CoreObservable, ObservableType},
  observer::Observer,
};

/// Emits a single value, then completes.
#[derive(Clone)]
pub struct Of<T>(pub T);

impl<T> ObservableType for Of<T> {
  type Item = T;
  type Err = Infallible;
}

impl<C, T> CoreObservable<C> for Of<T>
where
  C: Context,
  C::Inner: Observer<T, Infallible>,
{
  type Unsub = ();

  fn subscribe(self, context: C) -> Self::Unsub {
    let mut observer = context.into_inner();
    observer.next(self.0);
    observer.complete();
  }
}

/// Completes immediately without emitting.
pub struct Empty<Item>(PhantomData<Item>);

impl<Item> Empty<Item> {
  pub fn new() -> Self { Empty(PhantomData) }
}

impl<Item> Default for Empty<Item> {
  fn default() -> Self { Self::new() }
}

impl<Item> Clone for Empty<Item> {
  fn clone(&self) -> Self { Self::new() }
}

impl<Item> ObservableType for Empty<Item> {
  type Item = Item;
  type Err = Infallible;
}

impl<C, Item> CoreObservable<C> for Empty<Item>
where
  C: Context,
  C::Inner: Observer<Item, Infallible>,
{
  type Unsub = ();

  fn subscribe(self, context: C) -> Self::Unsub { context.into_inner().complete(); }
}

/// Never emits and never terminates.
pub struct Never<Item>(PhantomData<Item>);

impl<Item> Never<Item> {
  pub fn new() -> Self { Never(PhantomData) }
}

impl<Item> Default for Never<Item> {
  fn default() -> Self { Self::new() }
}

impl<Item> Clone for Never<Item> {
  fn clone(&self) -> Self { Self::new() }
}

impl<Item> ObservableType for Never<Item> {
  type Item = Item;
  type Err = Infallible;
}

impl<C, Item> CoreObservable<C> for Never<Item>
where
  C: Context,
  C::Inner: Observer<Item, Infallible>,
{
  type Unsub = ();

  fn subscribe(self, _context: C) -> Self::Unsub {}
}

/// Errors immediately without emitting.
#[derive(Clone)]
pub struct ThrowErr<Item, E> {
  pub error: E,
  _marker: PhantomData<Item>,
}

impl<Item, E> ThrowErr<Item, E> {
  pub fn new(error: E) -> Self { ThrowErr { error, _marker: PhantomData } }
}

impl<Item, E> ObservableType for ThrowErr<Item, E> {
  type Item = Item;
  type Err = E;
}

impl<C, Item, E> CoreObservable<C> for ThrowErr<Item, E>
where
  C: Context,
  C::Inner: Observer<Item, E>,
{
  type Unsub = ();

  fn subscribe(self, context: C) -> Self::Unsub { context.into_inner().error(self.error); }
}
