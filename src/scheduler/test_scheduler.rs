//! Virtual-time scheduler for tests.
//!
//! Each thread owns one virtual clock and one queue of pending task steps.
//! Nothing runs until the test moves the clock, so an `interval` emits
//! exactly the ticks that fit in the time a test advances:
//!
//! ```rust
//! use rxsingle::prelude::*;
//!
//! TestScheduler::init();
//!
//! let _sub = TestCtx::interval(Duration::from_millis(100))
//!   .single(|v| *v == 5)
//!   .on_error(|e| panic!("{}", e))
//!   .subscribe(|v| println!("{}", v));
//!
//! // Ten ticks run; `single` keeps its match until a completion that an
//! // unbounded interval never sends.
//! TestScheduler::advance_by(Duration::from_millis(1000));
//! assert_eq!(TestScheduler::pending_count(), 1);
//! ```

use std::{cell::RefCell, cmp::Ordering, collections::BinaryHeap};

use super::{Duration, Scheduler, Task, TaskHandle, TaskState};
use crate::{logging::trace, subscription::Subscription};

struct Clock {
  now: Duration,
  queue: BinaryHeap<Pending>,
  seq: usize,
  ready: bool,
}

/// One queued step. `seq` breaks ties between steps due at the same time in
/// the order they were queued.
struct Pending {
  due: Duration,
  seq: usize,
  step: Box<dyn FnMut() -> TaskState>,
  handle: TaskHandle,
}

impl Pending {
  fn key(&self) -> (Duration, usize) { (self.due, self.seq) }
}

impl PartialEq for Pending {
  fn eq(&self, other: &Self) -> bool { self.key() == other.key() }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for Pending {
  // `BinaryHeap` pops the greatest entry; the earliest key has to win.
  fn cmp(&self, other: &Self) -> Ordering { other.key().cmp(&self.key()) }
}

impl Clock {
  fn push(&mut self, delay: Duration, step: Box<dyn FnMut() -> TaskState>, handle: TaskHandle) {
    let due = self.now + delay;
    let seq = self.seq;
    self.seq += 1;
    trace!(seq, ?due, "step queued");
    self.queue.push(Pending { due, seq, step, handle });
  }

  /// Pop the earliest step due no later than `limit`, moving the clock to it.
  fn pop_due(&mut self, limit: Option<Duration>) -> Option<Pending> {
    let next_due = self.queue.peek()?.due;
    if limit.is_some_and(|limit| next_due > limit) {
      return None;
    }
    let pending = self.queue.pop()?;
    self.now = pending.due;
    Some(pending)
  }
}

thread_local! {
  static CLOCK: RefCell<Clock> = RefCell::new(Clock {
    now: Duration::ZERO,
    queue: BinaryHeap::new(),
    seq: 0,
    ready: false,
  });
}

fn with_clock<R>(f: impl FnOnce(&mut Clock) -> R) -> R {
  CLOCK.with(|clock| {
    let mut clock = clock.borrow_mut();
    assert!(clock.ready, "TestScheduler::init() must be called before using the scheduler");
    f(&mut clock)
  })
}

/// Handle to the current thread's virtual clock.
///
/// All instances on a thread drive the same clock, so the `TestCtx` of every
/// chain in a test shares one timeline.
#[derive(Clone, Copy, Default)]
pub struct TestScheduler;

impl TestScheduler {
  /// Reset the clock to zero and drop every pending step.
  ///
  /// Every other method panics on a thread where this was never called.
  pub fn init() {
    CLOCK.with(|clock| {
      let mut clock = clock.borrow_mut();
      clock.now = Duration::ZERO;
      clock.queue.clear();
      clock.seq = 0;
      clock.ready = true;
    });
  }

  /// Virtual time elapsed since `init`.
  pub fn now() -> Duration { with_clock(|clock| clock.now) }

  /// Steps waiting in the queue. A live `interval` counts as one.
  pub fn pending_count() -> usize { with_clock(|clock| clock.queue.len()) }

  pub fn is_empty() -> bool { Self::pending_count() == 0 }

  /// Move the clock forward by `duration`, running every step that falls due
  /// on the way in due-time order.
  ///
  /// A step that asks to sleep is queued again at `now + sleep` and runs in
  /// the same call if that is still within the target.
  pub fn advance_by(duration: Duration) {
    let target = with_clock(|clock| clock.now + duration);
    trace!(?target, "advancing virtual time");
    Self::run_until(Some(target));
    with_clock(|clock| clock.now = target);
  }

  /// Run until the queue is empty, jumping the clock from step to step.
  ///
  /// Only use it on bounded work: an unbounded `interval` keeps it running
  /// forever.
  pub fn flush() { Self::run_until(None); }

  fn run_until(limit: Option<Duration>) {
    // The clock is not borrowed while a step runs: observers reached from
    // the step may read `now` or schedule further work.
    while let Some(mut pending) = with_clock(|clock| clock.pop_due(limit)) {
      trace!(seq = pending.seq, "running step");
      let delay = match (pending.step)() {
        TaskState::Finished => {
          pending.handle.mark_finished();
          continue;
        }
        TaskState::Yield => Duration::ZERO,
        TaskState::Sleeping(sleep) => sleep,
      };
      if pending.handle.is_closed() {
        continue;
      }
      with_clock(|clock| clock.push(delay, pending.step, pending.handle));
    }
  }
}

impl<S: 'static> Scheduler<Task<S>> for TestScheduler {
  fn schedule(&self, mut task: Task<S>, delay: Option<Duration>) -> TaskHandle {
    let handle = TaskHandle::new();
    let guard = handle.clone();
    let step = Box::new(move || {
      if guard.is_closed() { TaskState::Finished } else { task.step() }
    });
    with_clock(|clock| clock.push(delay.unwrap_or(Duration::ZERO), step, handle.clone()));
    handle
  }
}
