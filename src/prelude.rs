#[cfg(feature = "scheduler")]
pub use crate::{context::Local, scheduler::local_scheduler::LocalScheduler};
pub use crate::{
  context::{Context, LocalCtx, TestCtx},
  error::SingleError,
  factory::ObservableFactory,
  observable::{CoreObservable, ErrOf, ItemOf, Observable, ObservableType},
  observer::{Emitter, FnMutObserver, Observer},
  ops::single::{MatchAll, MatchFn, MatchPredicate, SinglePhase, TryMatchFn},
  scheduler::{test_scheduler::TestScheduler, Duration, Scheduler, Task, TaskHandle, TaskState},
  subscription::{ClosureSubscription, Subscription, SubscriptionGuard},
};
