//! Context trait and the single-threaded `LocalCtx` implementation
//!
//! The Context trait carries the Scheduler through an operator chain so that
//! time-based sources such as `interval` can reach it without threading it
//! through every call site.

#[cfg(feature = "scheduler")]
use crate::scheduler::local_scheduler::LocalScheduler;
use crate::scheduler::test_scheduler::TestScheduler;

// ==================== Context Trait ====================

/// Context trait: Defines the execution environment and provides scheduling
/// capabilities
///
/// This trait is stateful, carrying a Scheduler that can be accessed and
/// preserved across transformations. It provides the following key methods:
///
/// ## Constructors (Static)
/// - `from_parts`: Create from inner value and scheduler (full control)
/// - `new`: Create with default scheduler
/// - `lift<U>`: Create `With<U>` with default scheduler
///
/// ## Combinators (Instance)
/// - `transform`: Transform inner value (Functor map)
/// - `swap<U>`: Exchange inner value, returning old value
///
/// ## Destructors
/// - `into_inner`: Consume and return inner value
pub trait Context: Sized {
  type Inner;
  type Scheduler: Clone + Default;

  type With<T>: Context<Inner = T, Scheduler = Self::Scheduler>;

  // ==================== Constructors (Static) ====================

  /// Create a new Context from its parts (inner value and scheduler).
  fn from_parts(inner: Self::Inner, scheduler: Self::Scheduler) -> Self;

  /// Create a new Context with the given inner value and default scheduler.
  ///
  /// ```rust
  /// use rxsingle::context::{Context, LocalCtx};
  ///
  /// #[derive(Clone, Default)]
  /// struct MyScheduler;
  ///
  /// let ctx = LocalCtx::<_, MyScheduler>::new(1);
  /// assert_eq!(*ctx.inner(), 1);
  /// ```
  fn new(inner: Self::Inner) -> Self { Self::from_parts(inner, Self::Scheduler::default()) }

  /// Lift a value into Context with default scheduler, producing
  /// `Self::With<U>`.
  fn lift<U>(inner: U) -> Self::With<U>;

  // ==================== Combinators (Instance) ====================

  /// Transform the inner value (Functor map), inheriting the scheduler.
  ///
  /// Used inside operators to wrap observers.
  fn transform<U, F>(self, f: F) -> Self::With<U>
  where
    F: FnOnce(Self::Inner) -> U;

  /// Swap the inner value, returning (old_inner, new_context).
  ///
  /// Used at subscribe boundaries to exchange logic with observer.
  fn swap<U>(self, inner: U) -> (Self::Inner, Self::With<U>);

  // ==================== Accessors ====================

  fn scheduler(&self) -> &Self::Scheduler;

  fn inner(&self) -> &Self::Inner;

  // ==================== Destructors ====================

  fn into_inner(self) -> Self::Inner;
}

// ==================== Local Context ====================

/// Local context for single-threaded execution
///
/// Generic over the scheduler. Use the `Local` type alias for the default
/// `LocalScheduler`, or `TestCtx` for virtual time.
#[derive(Clone)]
pub struct LocalCtx<T, S> {
  pub inner: T,
  pub scheduler: S,
}

impl<T, S> Context for LocalCtx<T, S>
where
  S: Clone + Default,
{
  type Inner = T;
  type Scheduler = S;
  type With<U> = LocalCtx<U, S>;

  fn from_parts(inner: T, scheduler: S) -> LocalCtx<T, S> { LocalCtx { inner, scheduler } }

  fn lift<U>(inner: U) -> LocalCtx<U, S> { LocalCtx { inner, scheduler: S::default() } }

  fn transform<U, F>(self, f: F) -> LocalCtx<U, S>
  where
    F: FnOnce(T) -> U,
  {
    LocalCtx { inner: f(self.inner), scheduler: self.scheduler }
  }

  fn swap<U>(self, new_inner: U) -> (T, LocalCtx<U, S>) {
    (self.inner, LocalCtx { inner: new_inner, scheduler: self.scheduler })
  }

  fn scheduler(&self) -> &S { &self.scheduler }

  fn inner(&self) -> &T { &self.inner }

  fn into_inner(self) -> T { self.inner }
}

// ==================== Type Aliases ====================

/// Default single-threaded context backed by the tokio `LocalScheduler`.
///
/// Tip: You can define your own aliases to inject a custom scheduler without
/// implementing `Context` yourself:
///
/// ```rust
/// use rxsingle::context::LocalCtx;
///
/// #[derive(Clone, Default)]
/// struct MyScheduler;
///
/// type MyLocal<T> = LocalCtx<T, MyScheduler>;
/// ```
#[cfg(feature = "scheduler")]
pub type Local<T> = LocalCtx<T, LocalScheduler>;

/// Test context for deterministic time-based testing.
///
/// Uses the thread-local virtual clock of [`TestScheduler`]: nothing
/// scheduled through it runs until the test advances time.
///
/// ```rust
/// use std::{cell::RefCell, rc::Rc};
///
/// use rxsingle::prelude::*;
///
/// TestScheduler::init();
///
/// let received = Rc::new(RefCell::new(Vec::new()));
/// let received_clone = received.clone();
///
/// let _sub = TestCtx::interval(Duration::from_millis(100))
///   .take(3)
///   .subscribe(move |v| received_clone.borrow_mut().push(v));
///
/// assert!(received.borrow().is_empty());
///
/// TestScheduler::advance_by(Duration::from_millis(300));
/// assert_eq!(*received.borrow(), vec![0, 1, 2]);
/// ```
pub type TestCtx<T> = LocalCtx<T, TestScheduler>;

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Clone, Default, PartialEq, Debug)]
  struct TagScheduler(u8);

  type Tagged<T> = LocalCtx<T, TagScheduler>;

  #[rxsingle_macro::test]
  fn new_uses_default_scheduler() {
    let ctx = Tagged::new("a");
    assert_eq!(*ctx.scheduler(), TagScheduler(0));
    assert_eq!(*ctx.inner(), "a");
  }

  #[rxsingle_macro::test]
  fn combinators_keep_scheduler() {
    let ctx = Tagged::from_parts(1, TagScheduler(7));

    let mapped = ctx.transform(|v| v + 1);
    assert_eq!(mapped.inner, 2);
    assert_eq!(mapped.scheduler, TagScheduler(7));

    let (old, swapped) = mapped.swap('c');
    assert_eq!(old, 2);
    assert_eq!(swapped.scheduler, TagScheduler(7));
    assert_eq!(swapped.into_inner(), 'c');
  }

  #[rxsingle_macro::test]
  fn lift_resets_scheduler() {
    let lifted = Tagged::<i32>::lift(3u8);
    assert_eq!(lifted.scheduler, TagScheduler(0));
    assert_eq!(lifted.into_inner(), 3);
  }
}
