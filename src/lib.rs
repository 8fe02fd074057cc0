//! # rxsingle: single-value operators for Reactive Extensions
//!
//! A small push-based reactive core in the rxRust style, built around the
//! `single` family of operators.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::{cell::RefCell, rc::Rc};
//!
//! use rxsingle::prelude::*;
//!
//! let found = Rc::new(RefCell::new(None));
//! let found_clone = found.clone();
//!
//! TestCtx::from_iter(0..10)
//!   .single(|v| *v == 5)
//!   .on_error(|e| panic!("unexpected: {}", e))
//!   .subscribe(move |v| *found_clone.borrow_mut() = Some(v));
//!
//! assert_eq!(*found.borrow(), Some(5));
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`LocalCtx`] | Execution context carrying a scheduler through a chain |
//! | [`Observable`] | Operator methods available on every context |
//! | [`Observer`] | Consumes `next`, `error`, and `complete` events |
//! | [`Subscription`] | Handle to cancel an active subscription |
//! | [`TestScheduler`] | Virtual-time scheduler for deterministic tests |
//!
//! ## Feature Flags
//!
//! - **`scheduler`** (default): tokio-based [`LocalScheduler`] and the
//!   `Local` context alias
//! - **`tracing`** (default): emit `tracing` events from operators and
//!   schedulers
//!
//! [`LocalCtx`]: context::LocalCtx
//! [`Observable`]: observable::Observable
//! [`Observer`]: observer::Observer
//! [`Subscription`]: subscription::Subscription
//! [`TestScheduler`]: scheduler::test_scheduler::TestScheduler
//! [`LocalScheduler`]: scheduler::local_scheduler::LocalScheduler

#[cfg(test)]
#[macro_use]
extern crate bencher;

mod logging;

pub mod context;
pub mod error;
pub mod factory;
pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod scheduler;
pub mod subscription;

pub use prelude::*;
