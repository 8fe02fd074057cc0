use std::convert::Infallible;

use crate::{
  context::Context,
  observable::{CoreObservable, ObservableType},
  observer::Observer,
};

/// Emits every element of an iterator, then completes.
///
/// The iterator is pulled lazily: once the observer reports `is_closed`
/// (for instance after `single` saw a second match) no further element is
/// produced and no completion is sent.
#[derive(Clone)]
pub struct FromIter<I>(pub I);

impl<I: IntoIterator> ObservableType for FromIter<I> {
  type Item = I::Item;
  type Err = Infallible;
}

impl<C, I> CoreObservable<C> for FromIter<I>
where
  C: Context,
  I: IntoIterator,
  C::Inner: Observer<I::Item, Infallible>,
{
  type Unsub = ();

  fn subscribe(self, context: C) -> Self::Unsub {
    let mut observer = context.into_inner();
    let mut iter = self.0.into_iter();
    loop {
      if observer.is_closed() {
        return;
      }
      match iter.next() {
        Some(v) => observer.next(v),
        None => break,
      }
    }
    observer.complete();
  }
}

#[cfg(test)]
mod tests {
  use std::{cell::RefCell, rc::Rc};

  use bencher::Bencher;

  use crate::prelude::*;

  #[rxsingle_macro::test]
  fn from_range() {
    let hit_count = Rc::new(RefCell::new(0));
    let hits = hit_count.clone();
    let completed = Rc::new(RefCell::new(false));
    let done = completed.clone();

    TestCtx::from_iter(0..100)
      .on_complete(move || *done.borrow_mut() = true)
      .subscribe(move |_| *hits.borrow_mut() += 1);

    assert_eq!(*hit_count.borrow(), 100);
    assert!(*completed.borrow());
  }

  #[rxsingle_macro::test]
  fn from_vec() {
    let got = Rc::new(RefCell::new(vec![]));
    let got_clone = got.clone();

    TestCtx::from_iter(vec!['a', 'b']).subscribe(move |v| got_clone.borrow_mut().push(v));

    assert_eq!(*got.borrow(), vec!['a', 'b']);
  }

  #[rxsingle_macro::test]
  fn stops_pulling_once_closed() {
    let pulled = Rc::new(RefCell::new(0));
    let pulled_clone = pulled.clone();

    TestCtx::from_iter((0..).inspect(move |_| *pulled_clone.borrow_mut() += 1))
      .take(4)
      .subscribe(|_| {});

    assert_eq!(*pulled.borrow(), 4);
  }

  #[rxsingle_macro::test]
  fn bench() { do_bench(); }

  benchmark_group!(do_bench, bench_from_iter);

  fn bench_from_iter(b: &mut Bencher) { b.iter(from_range); }
}
