use crate::{
  context::Context,
  observable::{CoreObservable, ObservableType},
  observer::Observer,
};

/// Converts the error of the source with a function.
#[derive(Clone)]
pub struct MapErr<S, F> {
  pub source: S,
  pub func: F,
}

pub struct MapErrObserver<O, F> {
  observer: O,
  func: F,
}

impl<O, F, Item, Err, OutErr> Observer<Item, Err> for MapErrObserver<O, F>
where
  O: Observer<Item, OutErr>,
  F: FnOnce(Err) -> OutErr,
{
  fn next(&mut self, value: Item) { self.observer.next(value); }

  fn error(self, err: Err) {
    let out_err = (self.func)(err);
    self.observer.error(out_err);
  }

  fn complete(self) { self.observer.complete(); }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}

impl<S, F, OutErr> ObservableType for MapErr<S, F>
where
  S: ObservableType,
  F: FnOnce(S::Err) -> OutErr,
{
  type Item = S::Item;
  type Err = OutErr;
}

impl<S, F, C, OutErr> CoreObservable<C> for MapErr<S, F>
where
  C: Context,
  S: CoreObservable<C::With<MapErrObserver<C::Inner, F>>>,
  F: FnOnce(S::Err) -> OutErr,
{
  type Unsub = S::Unsub;

  fn subscribe(self, context: C) -> Self::Unsub {
    let MapErr { source, func } = self;
    let wrapped = context.transform(|observer| MapErrObserver { observer, func });
    source.subscribe(wrapped)
  }
}
