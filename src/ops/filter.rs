use crate::{
  context::Context,
  observable::{CoreObservable, ObservableType},
  observer::Observer,
};

/// Emit only those items from an Observable that pass a predicate test.
///
/// ```rust
/// use std::{cell::RefCell, rc::Rc};
///
/// use rxsingle::prelude::*;
///
/// let coll = Rc::new(RefCell::new(vec![]));
/// let coll_clone = coll.clone();
///
/// TestCtx::from_iter(0..10)
///   .filter(|v| *v % 2 == 0)
///   .subscribe(move |v| coll_clone.borrow_mut().push(v));
///
/// assert_eq!(*coll.borrow(), vec![0, 2, 4, 6, 8]);
/// ```
#[derive(Clone)]
pub struct Filter<S, F> {
  pub source: S,
  pub filter: F,
}

pub struct FilterObserver<O, F> {
  observer: O,
  filter: F,
}

impl<O, F, Item, Err> Observer<Item, Err> for FilterObserver<O, F>
where
  O: Observer<Item, Err>,
  F: FnMut(&Item) -> bool,
{
  fn next(&mut self, value: Item) {
    if (self.filter)(&value) {
      self.observer.next(value);
    }
  }

  fn error(self, err: Err) { self.observer.error(err); }

  fn complete(self) { self.observer.complete(); }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}

impl<S: ObservableType, F> ObservableType for Filter<S, F> {
  type Item = S::Item;
  type Err = S::Err;
}

impl<S, F, C> CoreObservable<C> for Filter<S, F>
where
  C: Context,
  S: CoreObservable<C::With<FilterObserver<C::Inner, F>>>,
  F: FnMut(&S::Item) -> bool,
{
  type Unsub = S::Unsub;

  fn subscribe(self, context: C) -> Self::Unsub {
    let Filter { source, filter } = self;
    let wrapped = context.transform(|observer| FilterObserver { observer, filter });
    source.subscribe(wrapped)
  }
}
