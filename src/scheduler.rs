//! Scheduling primitives
//!
//! Time-based sources describe their work as a [`Task`]: a piece of state and
//! a plain function that advances it one step. A [`Scheduler`] decides when
//! each step runs, either on a tokio `LocalSet` ([`local_scheduler`]) or on
//! a virtual clock ([`test_scheduler`]).

use std::{
  cell::{Cell, RefCell},
  rc::Rc,
};

use futures::future::AbortHandle;
pub use std::time::Duration;

use crate::subscription::Subscription;

#[cfg(feature = "scheduler")]
pub mod local_scheduler;
pub mod test_scheduler;

// ==================== Task ====================

/// What a task wants after running one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
  /// The task is done and will not run again.
  Finished,
  /// Run again as soon as possible.
  Yield,
  /// Run again after the given duration.
  Sleeping(Duration),
}

/// A unit of schedulable work.
///
/// The handler is a plain function pointer: all tasks over the same state
/// type share one concrete type.
pub struct Task<S> {
  state: S,
  handler: fn(&mut S) -> TaskState,
}

impl<S> Task<S> {
  pub fn new(state: S, handler: fn(&mut S) -> TaskState) -> Self { Self { state, handler } }

  /// Run one step of the task.
  #[inline]
  pub fn step(&mut self) -> TaskState { (self.handler)(&mut self.state) }
}

// ==================== TaskHandle ====================

struct HandleInner {
  closed: Cell<bool>,
  abort: RefCell<Option<AbortHandle>>,
}

/// Cancellation handle returned by [`Scheduler::schedule`].
///
/// A handle is closed once the task finished on its own or was unsubscribed.
#[derive(Clone)]
pub struct TaskHandle(Rc<HandleInner>);

impl TaskHandle {
  pub fn new() -> Self {
    TaskHandle(Rc::new(HandleInner { closed: Cell::new(false), abort: RefCell::new(None) }))
  }

  pub fn mark_finished(&self) { self.0.closed.set(true); }

  /// Attach the abort switch of the future driving this task.
  pub fn set_abort(&self, abort: AbortHandle) {
    if self.0.closed.get() {
      abort.abort();
    } else {
      *self.0.abort.borrow_mut() = Some(abort);
    }
  }
}

impl Default for TaskHandle {
  fn default() -> Self { Self::new() }
}

impl Subscription for TaskHandle {
  fn unsubscribe(self) {
    self.0.closed.set(true);
    if let Some(abort) = self.0.abort.borrow_mut().take() {
      abort.abort();
    }
  }

  fn is_closed(&self) -> bool { self.0.closed.get() }
}

// ==================== Scheduler ====================

/// Something that can run a task of type `S`, now or after a delay.
pub trait Scheduler<S> {
  fn schedule(&self, task: S, delay: Option<Duration>) -> TaskHandle;
}
