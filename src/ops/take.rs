use crate::{
  context::Context,
  observable::{CoreObservable, ObservableType},
  observer::Observer,
};

/// Emits only the first `count` values emitted by the source, then
/// completes, regardless of whether the source completes.
///
/// `take(0)` completes as soon as it is subscribed.
#[derive(Clone)]
pub struct Take<S> {
  pub source: S,
  pub count: usize,
}

pub struct TakeObserver<O> {
  observer: Option<O>,
  remaining: usize,
}

impl<O, Item, Err> Observer<Item, Err> for TakeObserver<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    let Some(observer) = self.observer.as_mut() else {
      return;
    };
    observer.next(value);
    self.remaining -= 1;
    if self.remaining == 0 {
      if let Some(observer) = self.observer.take() {
        observer.complete();
      }
    }
  }

  fn error(self, err: Err) {
    if let Some(observer) = self.observer {
      observer.error(err);
    }
  }

  fn complete(self) {
    if let Some(observer) = self.observer {
      observer.complete();
    }
  }

  fn is_closed(&self) -> bool { self.observer.as_ref().is_none_or(|o| o.is_closed()) }
}

impl<S: ObservableType> ObservableType for Take<S> {
  type Item = S::Item;
  type Err = S::Err;
}

impl<S, C> CoreObservable<C> for Take<S>
where
  C: Context,
  C::Inner: Observer<S::Item, S::Err>,
  S: CoreObservable<C::With<TakeObserver<C::Inner>>>,
{
  type Unsub = S::Unsub;

  fn subscribe(self, context: C) -> Self::Unsub {
    let Take { source, count } = self;
    let wrapped = context.transform(|observer| {
      if count == 0 {
        <C::Inner as Observer<S::Item, S::Err>>::complete(observer);
        TakeObserver { observer: None, remaining: 0 }
      } else {
        TakeObserver { observer: Some(observer), remaining: count }
      }
    });
    source.subscribe(wrapped)
  }
}
