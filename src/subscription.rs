//! Subscription trait and combinators
//!
//! A subscription is returned by `subscribe` and lets the caller cancel the
//! work that feeds the chain, such as a scheduled `interval`.

/// Handle to an active subscription.
pub trait Subscription {
  /// Stop the upstream from delivering any further notification.
  fn unsubscribe(self);

  fn is_closed(&self) -> bool;

  /// Activates "RAII" behavior for this subscription: `unsubscribe()` is
  /// called as soon as the returned guard goes out of scope.
  ///
  /// **Attention:** If you don't assign the return value to a variable,
  /// `unsubscribe()` is called immediately.
  fn unsubscribe_when_dropped(self) -> SubscriptionGuard<Self>
  where
    Self: Sized,
  {
    SubscriptionGuard::new(self)
  }
}

/// Synchronous sources have already finished by the time `subscribe`
/// returns, so there is nothing left to cancel.
impl Subscription for () {
  #[inline]
  fn unsubscribe(self) {}

  #[inline]
  fn is_closed(&self) -> bool { true }
}

/// Teardown logic given as a closure.
pub struct ClosureSubscription<F>(pub F);

impl<F: FnOnce()> Subscription for ClosureSubscription<F> {
  fn unsubscribe(self) { (self.0)() }

  fn is_closed(&self) -> bool { false }
}

/// An RAII implementation of a "scoped subscribed" of a subscription.
/// When this structure is dropped (falls out of scope), the subscription will
/// be unsubscribed.
///
/// If you want to drop it immediately, wrap it in its own scope
#[must_use]
pub struct SubscriptionGuard<T: Subscription>(Option<T>);

impl<T: Subscription> SubscriptionGuard<T> {
  /// Wraps an existing subscription with a guard to enable RAII behavior for
  /// it.
  pub fn new(subscription: T) -> SubscriptionGuard<T> { SubscriptionGuard(Some(subscription)) }

  /// Consumes the guard without unsubscribing.
  pub fn into_inner(mut self) -> Option<T> { self.0.take() }
}

impl<T: Subscription> Drop for SubscriptionGuard<T> {
  #[inline]
  fn drop(&mut self) {
    if let Some(subscription) = self.0.take() {
      subscription.unsubscribe();
    }
  }
}

#[cfg(test)]
mod tests {
  use std::{cell::RefCell, rc::Rc};

  use super::*;

  struct MockSubscription {
    closed: Rc<RefCell<bool>>,
  }

  impl MockSubscription {
    fn new() -> (Self, Rc<RefCell<bool>>) {
      let closed = Rc::new(RefCell::new(false));
      (Self { closed: closed.clone() }, closed)
    }
  }

  impl Subscription for MockSubscription {
    fn unsubscribe(self) { *self.closed.borrow_mut() = true; }

    fn is_closed(&self) -> bool { *self.closed.borrow() }
  }

  #[rxsingle_macro::test]
  fn guard_unsubscribes_on_drop() {
    let (mock, closed) = MockSubscription::new();
    {
      let _guard = mock.unsubscribe_when_dropped();
      assert!(!*closed.borrow());
    }
    assert!(*closed.borrow());
  }

  #[rxsingle_macro::test]
  fn guard_into_inner_keeps_subscription() {
    let (mock, closed) = MockSubscription::new();
    let inner = mock.unsubscribe_when_dropped().into_inner();
    assert!(inner.is_some());
    assert!(!*closed.borrow());
  }

  #[rxsingle_macro::test]
  fn closure_subscription_runs_teardown() {
    let ran = Rc::new(RefCell::new(false));
    let ran_clone = ran.clone();
    ClosureSubscription(move || *ran_clone.borrow_mut() = true).unsubscribe();
    assert!(*ran.borrow());
  }
}
