//! Real-time single-threaded scheduler on top of tokio.
//!
//! Tasks are spawned with `tokio::task::spawn_local`, so scheduling must
//! happen inside a `tokio::task::LocalSet`.

use futures::future::abortable;
use tokio::{task, time};

use super::{Duration, Scheduler, Task, TaskHandle, TaskState};
use crate::logging::trace;

/// Scheduler driving tasks on the current thread's tokio `LocalSet`.
#[derive(Clone, Copy, Default)]
pub struct LocalScheduler;

async fn run_task<S>(mut task: Task<S>, delay: Option<Duration>) {
  if let Some(delay) = delay {
    time::sleep(delay).await;
  }
  loop {
    match task.step() {
      TaskState::Finished => break,
      TaskState::Yield => task::yield_now().await,
      TaskState::Sleeping(duration) => time::sleep(duration).await,
    }
  }
}

impl<S: 'static> Scheduler<Task<S>> for LocalScheduler {
  fn schedule(&self, task: Task<S>, delay: Option<Duration>) -> TaskHandle {
    trace!(?delay, "local task scheduled");
    let handle = TaskHandle::new();
    let (fut, abort) = abortable(run_task(task, delay));
    handle.set_abort(abort);

    let finished = handle.clone();
    task::spawn_local(async move {
      if fut.await.is_ok() {
        finished.mark_finished();
      } else {
        trace!("local task aborted");
      }
    });
    handle
  }
}

#[cfg(test)]
mod tests {
  use std::{cell::RefCell, rc::Rc};

  use super::*;
  use crate::subscription::Subscription;

  #[rxsingle_macro::test]
  async fn runs_sleeping_task_until_finished() {
    let ticks = Rc::new(RefCell::new(Vec::new()));

    let handle = LocalScheduler.schedule(
      Task::new((ticks.clone(), 0), |(ticks, n)| {
        ticks.borrow_mut().push(*n);
        *n += 1;
        if *n < 3 { TaskState::Sleeping(Duration::from_millis(10)) } else { TaskState::Finished }
      }),
      Some(Duration::from_millis(10)),
    );

    time::sleep(Duration::from_millis(100)).await;
    assert_eq!(*ticks.borrow(), vec![0, 1, 2]);
    assert!(handle.is_closed());
  }

  #[rxsingle_macro::test]
  async fn unsubscribe_stops_task() {
    let ticks = Rc::new(RefCell::new(0));

    let handle = LocalScheduler.schedule(
      Task::new(ticks.clone(), |ticks| {
        *ticks.borrow_mut() += 1;
        TaskState::Sleeping(Duration::from_millis(10))
      }),
      Some(Duration::from_millis(10)),
    );

    time::sleep(Duration::from_millis(25)).await;
    handle.unsubscribe();
    let seen = *ticks.borrow();
    assert!(seen >= 1);

    time::sleep(Duration::from_millis(100)).await;
    assert_eq!(*ticks.borrow(), seen);
  }
}
