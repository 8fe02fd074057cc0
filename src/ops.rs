//! Operators
//!
//! Each operator is a pair: a struct holding the upstream source plus its
//! parameters, implementing `CoreObservable`, and an observer wrapper
//! installed on subscription. Constructors live on
//! [`Observable`](crate::observable::Observable).

pub mod filter;
pub mod lifecycle;
pub mod map;
pub mod map_err;
pub mod single;
pub mod take;
