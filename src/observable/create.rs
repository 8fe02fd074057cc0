use std::marker::PhantomData;

use crate::{
  context::Context,
  observable::{CoreObservable, ObservableType},
  observer::{Emitter, Observer},
  subscription::Subscription,
};

/// Source driven by a user closure, built by `ObservableFactory::create`.
///
/// The closure runs once per subscription against an [`Emitter`] and returns
/// the teardown for whatever it started.
#[derive(Clone)]
pub struct Create<F, Item, Err> {
  f: F,
  _marker: PhantomData<(Item, Err)>,
}

impl<F, Item, Err> Create<F, Item, Err> {
  pub fn new(f: F) -> Self { Self { f, _marker: PhantomData } }
}

impl<F, Item, Err> ObservableType for Create<F, Item, Err> {
  type Item = Item;
  type Err = Err;
}

/// Holds the observer until the first terminal call; later calls find `None`.
struct CreateEmitter<O>(Option<O>);

impl<O, Item, Err> Emitter<Item, Err> for CreateEmitter<O>
where
  O: Observer<Item, Err>,
{
  #[inline]
  fn next(&mut self, value: Item) {
    if let Some(observer) = &mut self.0 {
      observer.next(value);
    }
  }

  #[inline]
  fn error(&mut self, err: Err) {
    if let Some(observer) = self.0.take() {
      observer.error(err);
    }
  }

  #[inline]
  fn complete(&mut self) {
    if let Some(observer) = self.0.take() {
      observer.complete();
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.0.as_ref().is_none_or(|o| o.is_closed()) }
}

impl<C, F, Item, Err, U> CoreObservable<C> for Create<F, Item, Err>
where
  C: Context,
  C::Inner: Observer<Item, Err>,
  F: FnOnce(&mut dyn Emitter<Item, Err>) -> U,
  U: Subscription,
{
  type Unsub = U;

  fn subscribe(self, context: C) -> Self::Unsub {
    let observer = context.into_inner();
    let mut emitter = CreateEmitter(Some(observer));
    (self.f)(&mut emitter)
  }
}

#[cfg(test)]
mod tests {
  use std::{cell::RefCell, convert::Infallible, rc::Rc};

  use crate::{prelude::*, subscription::ClosureSubscription};

  #[rxsingle_macro::test]
  fn calls_after_complete_are_dropped() {
    let emitted = Rc::new(RefCell::new(vec![]));
    let emitted_clone = emitted.clone();

    TestCtx::create(|emitter| {
      emitter.next(1);
      emitter.next(2);
      emitter.complete();
      emitter.next(3);
    })
    .subscribe(move |v| emitted_clone.borrow_mut().push(v));

    assert_eq!(*emitted.borrow(), vec![1, 2]);
  }

  #[rxsingle_macro::test]
  fn error_reaches_on_error() {
    let error = Rc::new(RefCell::new(None));
    let error_clone = error.clone();

    TestCtx::create(|emitter| {
      emitter.error("oops");
    })
    .on_error(move |e| *error_clone.borrow_mut() = Some(e))
    .subscribe(|_: ()| {});

    assert_eq!(*error.borrow(), Some("oops"));
  }

  #[rxsingle_macro::test]
  fn producer_stops_when_single_decides() {
    let produced = Rc::new(RefCell::new(0));
    let produced_clone = produced.clone();

    TestCtx::create(move |emitter| {
      for i in 0..100 {
        if emitter.is_closed() {
          break;
        }
        *produced_clone.borrow_mut() += 1;
        emitter.next(i);
      }
      emitter.complete();
    })
    .single(|v| *v >= 1)
    .on_error(|_: SingleError<Infallible>| {})
    .subscribe(|_| {});

    // 1 and 2 match, so production stops after the third value.
    assert_eq!(*produced.borrow(), 3);
  }

  #[rxsingle_macro::test]
  fn returned_teardown_runs_on_unsubscribe() {
    let unsubscribed = Rc::new(RefCell::new(false));
    let unsub_clone = unsubscribed.clone();

    let subscription = TestCtx::create(move |emitter| {
      emitter.next(1);
      ClosureSubscription(move || *unsub_clone.borrow_mut() = true)
    })
    .subscribe(|_| {});

    assert!(!*unsubscribed.borrow());
    subscription.unsubscribe();
    assert!(*unsubscribed.borrow());
  }
}
