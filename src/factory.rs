//! Observable factory pattern
//!
//! The `ObservableFactory` trait provides the constructors that start a
//! chain (`of`, `from_iter`, `interval`, ...). It is implemented for every
//! [`Context`] holding `()`, so a chain picks up its scheduler from the
//! context type it was started on:
//!
//! ```rust
//! use rxsingle::prelude::*;
//!
//! // Virtual time, driven by `TestScheduler::advance_by`
//! TestScheduler::init();
//! let _sub = TestCtx::interval(Duration::from_millis(100)).subscribe(|n| println!("tick {}", n));
//! ```
//!
//! ## Trivial Observables
//!
//! | Method | Completion | Values Emitted | Error Emitted |
//! |--------|------------|----------------|---------------|
//! | `empty()` | Yes | None | None |
//! | `never()` | No | None | None |
//! | `throw_err()` | No | None | Yes |

use crate::{
  context::Context,
  observable::{Create, Empty, FromIter, Interval, Never, Of, ThrowErr},
  observer::Emitter,
  scheduler::Duration,
  subscription::Subscription,
};

/// `ObservableFactory` trait for creating observable sequences.
///
/// A blanket implementation covers every `Context<Inner = ()>`.
pub trait ObservableFactory: Context<Inner = ()> {
  /// Creates an Observable from a closure that defines the subscription logic.
  ///
  /// The closure receives an `Emitter` and returns the teardown for the
  /// subscription (`()` when there is nothing to release).
  ///
  /// ```rust
  /// use rxsingle::prelude::*;
  ///
  /// TestCtx::create(|emitter| {
  ///   emitter.next(1);
  ///   emitter.complete();
  /// })
  /// .subscribe(|v: i32| println!("{}", v));
  /// ```
  fn create<Item, Err, F, U>(f: F) -> Self::With<Create<F, Item, Err>>
  where
    F: FnOnce(&mut dyn Emitter<Item, Err>) -> U,
    U: Subscription,
  {
    Self::lift(Create::new(f))
  }

  /// Emits `v` and completes.
  fn of<V>(v: V) -> Self::With<Of<V>> { Self::lift(Of(v)) }

  /// Completes immediately without emitting.
  fn empty<Item>() -> Self::With<Empty<Item>> { Self::lift(Empty::new()) }

  /// Never emits and never completes. Useful for exercising cancellation.
  fn never<Item>() -> Self::With<Never<Item>> { Self::lift(Never::new()) }

  /// Errors with `error` without emitting.
  fn throw_err<Item, E>(error: E) -> Self::With<ThrowErr<Item, E>> {
    Self::lift(ThrowErr::new(error))
  }

  /// Emits every element of `iter` in order, then completes.
  ///
  /// ```rust
  /// use rxsingle::prelude::*;
  ///
  /// TestCtx::from_iter(vec![0, 1, 2, 3]).subscribe(|v| println!("{},", v));
  /// ```
  fn from_iter<I: IntoIterator>(iter: I) -> Self::With<FromIter<I>> { Self::lift(FromIter(iter)) }

  /// Emits `0, 1, 2, ...` every `period` on the context's scheduler,
  /// indefinitely until unsubscribed.
  ///
  /// # See Also
  ///
  /// * [`Self::interval_with`] - Same functionality with custom scheduler
  fn interval(period: Duration) -> Self::With<Interval<Self::Scheduler>> {
    Self::lift(Interval { period, scheduler: Self::Scheduler::default() })
  }

  /// Same as [`Self::interval`], but ticks on `scheduler` instead of the
  /// context's default one.
  fn interval_with<S>(period: Duration, scheduler: S) -> Self::With<Interval<S>> {
    Self::lift(Interval { period, scheduler })
  }
}

impl<C: Context<Inner = ()>> ObservableFactory for C {}

#[cfg(test)]
mod tests {
  use std::{cell::RefCell, rc::Rc};

  use crate::prelude::*;

  #[rxsingle_macro::test]
  fn interval_with_overrides_scheduler() {
    TestScheduler::init();
    let ticks = Rc::new(RefCell::new(0));
    let ticks_clone = ticks.clone();

    #[derive(Clone, Default)]
    struct Unused;
    type OtherCtx<T> = LocalCtx<T, Unused>;

    let _sub = OtherCtx::interval_with(Duration::from_millis(10), TestScheduler)
      .take(2)
      .subscribe(move |_| *ticks_clone.borrow_mut() += 1);

    TestScheduler::advance_by(Duration::from_millis(50));
    assert_eq!(*ticks.borrow(), 2);
  }
}
