//! # rxpipe: push-based reactive streams
//!
//! A small implementation of [Reactive Extensions](http://reactivex.io/):
//! describe a sequence of values as a pipeline of operators, choose where the
//! producer and the consumer run, and cancel a subscription at any time.
//!
//! ## Quick Start
//!
//! ```rust
//! use rxpipe::prelude::*;
//!
//! observable::from_iter::<_, ()>(0..10)
//!   .filter(|v| *v % 2 == 0)
//!   .map(|v| v * 2)
//!   .subscribe_next(|v| println!("Value: {}", v));
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Observable`] | Lazy, reusable description of a stream and its operators |
//! | [`Observer`] | Consumes `next`, `error`, and `complete` events |
//! | [`Subscriber`] | The observer a producer emits into; enforces cancellation |
//! | [`Disposable`] | Handle to cancel an active subscription |
//! | [`Scheduler`] | Where `subscribe_on` / `observe_on` run their work |
//!
//! Nothing is concurrent unless a scheduler is involved: without
//! `subscribe_on` or `observe_on`, `subscribe` runs the whole pipeline on the
//! calling thread and returns when the source is done.
//!
//! ## Feature Flags
//!
//! - **`futures-scheduler`** (default): [`ComputationScheduler`] and
//!   [`SingleThreadScheduler`] on top of `futures`' thread pool
//! - **`tokio-scheduler`**: use a `tokio::runtime::Handle` as a scheduler
//!
//! [`Observable`]: observable::Observable
//! [`Observer`]: observer::Observer
//! [`Subscriber`]: subscriber::Subscriber
//! [`Disposable`]: disposable::Disposable
//! [`Scheduler`]: scheduler::Scheduler
//! [`ComputationScheduler`]: scheduler::ComputationScheduler
//! [`SingleThreadScheduler`]: scheduler::SingleThreadScheduler
#[cfg(test)]
#[macro_use]
extern crate bencher;

pub mod disposable;
pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod rc;
pub mod scheduler;
pub mod subscriber;

pub use prelude::*;
