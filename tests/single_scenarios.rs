//! End-to-end behavior of the `single` family on timed and synchronous
//! sources.

use std::{cell::RefCell, convert::Infallible, rc::Rc};

use rxsingle::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum Event<T, E> {
  Next(T),
  Error(E),
  Complete,
}

/// Observer that records every notification it receives.
#[derive(Clone)]
struct Recorder<T, E> {
  log: Rc<RefCell<Vec<Event<T, E>>>>,
}

impl<T, E> Recorder<T, E> {
  fn new() -> Self { Recorder { log: Rc::new(RefCell::new(Vec::new())) } }

  fn events(&self) -> Vec<Event<T, E>>
  where
    T: Clone,
    E: Clone,
  {
    self.log.borrow().clone()
  }

  fn values(&self) -> Vec<T>
  where
    T: Clone,
  {
    self
      .log
      .borrow()
      .iter()
      .filter_map(|e| match e {
        Event::Next(v) => Some(v.clone()),
        _ => None,
      })
      .collect()
  }

  fn count(&self, pred: impl Fn(&Event<T, E>) -> bool) -> usize {
    self.log.borrow().iter().filter(|&e| pred(e)).count()
  }
}

impl<T, E> Observer<T, E> for Recorder<T, E> {
  fn next(&mut self, value: T) { self.log.borrow_mut().push(Event::Next(value)); }

  fn error(self, err: E) { self.log.borrow_mut().push(Event::Error(err)); }

  fn complete(self) { self.log.borrow_mut().push(Event::Complete); }

  fn is_closed(&self) -> bool { false }
}

type TickRecorder = Recorder<usize, SingleError<Infallible>>;

#[rxsingle_macro::test]
fn bounded_interval_emits_the_match_then_completes() {
  TestScheduler::init();
  let tester = TickRecorder::new();

  let sub = TestCtx::interval(Duration::from_millis(100))
    .take(10)
    .single(|v| *v == 5)
    .subscribe_with(tester.clone());

  TestScheduler::advance_by(Duration::from_secs(2));

  assert_eq!(tester.events(), vec![Event::Next(5), Event::Complete]);
  assert!(sub.is_closed());
  assert!(TestScheduler::is_empty());
}

#[rxsingle_macro::test]
fn unbounded_interval_never_emits() {
  TestScheduler::init();
  let tester = TickRecorder::new();

  let sub = TestCtx::interval(Duration::from_millis(100))
    .single(|v| *v == 5)
    .subscribe_with(tester.clone());

  TestScheduler::advance_by(Duration::from_secs(2));

  // The match is held back until a completion that never arrives.
  assert!(tester.values().is_empty());
  assert_eq!(tester.count(|e| matches!(e, Event::Complete)), 0);
  assert_eq!(tester.count(|e| matches!(e, Event::Error(_))), 0);

  sub.unsubscribe();
  TestScheduler::advance_by(Duration::from_secs(1));
  assert!(tester.events().is_empty());
  assert!(TestScheduler::is_empty());
}

#[rxsingle_macro::test]
fn both_subscriptions_share_one_clock() {
  TestScheduler::init();
  let bounded = TickRecorder::new();
  let unbounded = TickRecorder::new();

  let s1 = TestCtx::interval(Duration::from_millis(100))
    .take(10)
    .single(|v| *v == 5)
    .subscribe_with(bounded.clone());
  let s2 = TestCtx::interval(Duration::from_millis(100))
    .single(|v| *v == 5)
    .subscribe_with(unbounded.clone());

  TestScheduler::advance_by(Duration::from_secs(2));

  assert_eq!(bounded.values(), vec![5]);
  assert_eq!(bounded.count(|e| matches!(e, Event::Complete)), 1);
  assert!(unbounded.events().is_empty());

  s1.unsubscribe();
  s2.unsubscribe();
}

#[rxsingle_macro::test]
fn empty_source_yields_default() {
  let tester = Recorder::<i32, SingleError<Infallible>>::new();

  TestCtx::empty().single_or_default(-1).subscribe_with(tester.clone());

  assert_eq!(tester.events(), vec![Event::Next(-1), Event::Complete]);
}

#[rxsingle_macro::test]
fn second_tick_match_fails_and_stops_interval() {
  TestScheduler::init();
  let tester = TickRecorder::new();

  let sub = TestCtx::interval(Duration::from_millis(100))
    .single(|v| *v >= 3)
    .subscribe_with(tester.clone());

  TestScheduler::advance_by(Duration::from_millis(400));
  assert!(tester.events().is_empty());

  TestScheduler::advance_by(Duration::from_millis(100));
  assert_eq!(tester.events(), vec![Event::Error(SingleError::MultipleMatches)]);

  // The failing tick already finished the interval task.
  assert!(sub.is_closed());
  assert!(TestScheduler::is_empty());
}

#[rxsingle_macro::test]
fn or_default_fails_on_second_tick() {
  TestScheduler::init();
  let tester = TickRecorder::new();

  let _sub = TestCtx::interval(Duration::from_millis(100))
    .single_or_default(usize::MAX)
    .subscribe_with(tester.clone());

  TestScheduler::advance_by(Duration::from_millis(200));

  assert_eq!(tester.events(), vec![Event::Error(SingleError::MultipleMatches)]);
}

#[rxsingle_macro::test]
fn upstream_error_is_forwarded_unchanged() {
  let tester = Recorder::<u8, SingleError<&str>>::new();

  TestCtx::create(|emitter| {
    emitter.next(1);
    emitter.error("connection reset");
  })
  .single_or_default(0)
  .subscribe_with(tester.clone());

  assert_eq!(tester.events(), vec![Event::Error(SingleError::Source("connection reset"))]);
  if let Some(Event::Error(e)) = tester.events().pop() {
    assert_eq!(e.to_string(), "connection reset");
  }
}

#[rxsingle_macro::test]
fn guard_cancels_on_drop() {
  TestScheduler::init();
  let tester = TickRecorder::new();

  {
    let _guard = TestCtx::interval(Duration::from_millis(100))
      .take(10)
      .single(|v| *v == 5)
      .subscribe_with(tester.clone())
      .unsubscribe_when_dropped();
    TestScheduler::advance_by(Duration::from_millis(300));
  }

  TestScheduler::advance_by(Duration::from_secs(2));
  assert!(tester.events().is_empty());
  assert!(TestScheduler::is_empty());
}

#[rxsingle_macro::test]
fn closure_subscription_after_on_error() {
  let found = Rc::new(RefCell::new(None));
  let found_clone = found.clone();
  let failed = Rc::new(RefCell::new(false));
  let failed_clone = failed.clone();

  TestCtx::from_iter(["alpha", "beta", "gamma"])
    .single(|name| name.starts_with('b'))
    .on_error(move |_| *failed_clone.borrow_mut() = true)
    .subscribe(move |name| *found_clone.borrow_mut() = Some(name));

  assert_eq!(*found.borrow(), Some("beta"));
  assert!(!*failed.borrow());
}
