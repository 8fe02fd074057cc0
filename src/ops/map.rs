use crate::{
  context::Context,
  observable::{CoreObservable, ObservableType},
  observer::Observer,
};

/// Creates a new stream which calls a closure on each element and uses its
/// return as the value.
#[derive(Clone)]
pub struct Map<S, F> {
  pub source: S,
  pub func: F,
}

pub struct MapObserver<O, F> {
  observer: O,
  func: F,
}

impl<O, F, Item, Out, Err> Observer<Item, Err> for MapObserver<O, F>
where
  O: Observer<Out, Err>,
  F: FnMut(Item) -> Out,
{
  #[inline]
  fn next(&mut self, value: Item) { self.observer.next((self.func)(value)); }

  fn error(self, err: Err) { self.observer.error(err); }

  fn complete(self) { self.observer.complete(); }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}

impl<S, F, Out> ObservableType for Map<S, F>
where
  S: ObservableType,
  F: FnMut(S::Item) -> Out,
{
  type Item = Out;
  type Err = S::Err;
}

impl<S, F, C, Out> CoreObservable<C> for Map<S, F>
where
  C: Context,
  S: CoreObservable<C::With<MapObserver<C::Inner, F>>>,
  F: FnMut(S::Item) -> Out,
{
  type Unsub = S::Unsub;

  fn subscribe(self, context: C) -> Self::Unsub {
    let Map { source, func } = self;
    let wrapped = context.transform(|observer| MapObserver { observer, func });
    source.subscribe(wrapped)
  }
}
