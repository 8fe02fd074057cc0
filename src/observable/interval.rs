use std::convert::Infallible;

use crate::{
  context::Context,
  observable::{CoreObservable, ObservableType},
  observer::Observer,
  scheduler::{Duration, Scheduler, Task, TaskHandle, TaskState},
};

/// Emits `0, 1, 2, ...`, one value per `period`, starting one period after
/// subscription. Never completes on its own.
#[derive(Clone)]
pub struct Interval<S> {
  pub period: Duration,
  pub scheduler: S,
}

impl<S> ObservableType for Interval<S> {
  type Item = usize;
  type Err = Infallible;
}

/// Task state of a running interval.
pub struct IntervalState<O> {
  observer: O,
  seq: usize,
  period: Duration,
}

fn interval_tick<O>(state: &mut IntervalState<O>) -> TaskState
where
  O: Observer<usize, Infallible>,
{
  if state.observer.is_closed() {
    return TaskState::Finished;
  }
  state.observer.next(state.seq);
  state.seq += 1;
  if state.observer.is_closed() { TaskState::Finished } else { TaskState::Sleeping(state.period) }
}

impl<C, S> CoreObservable<C> for Interval<S>
where
  C: Context,
  C::Inner: Observer<usize, Infallible>,
  S: Scheduler<Task<IntervalState<C::Inner>>>,
{
  type Unsub = TaskHandle;

  fn subscribe(self, context: C) -> Self::Unsub {
    let Interval { period, scheduler } = self;
    let state = IntervalState { observer: context.into_inner(), seq: 0, period };
    scheduler.schedule(Task::new(state, interval_tick::<C::Inner>), Some(period))
  }
}
