//! Schedulers decide where work runs.
//!
//! A [`Scheduler`] accepts a unit of work and runs it later on some thread it
//! owns. `subscribe_on` uses one to move a producer, `observe_on` uses one to
//! move every delivery.
//!
//! | Scheduler | Workers | Use for |
//! |-----------|---------|---------|
//! | [`IoScheduler`] | grows on demand, idle workers retire | blocking / IO work |
//! | [`ComputationScheduler`] | one per CPU | CPU-bound work |
//! | [`SingleThreadScheduler`] | one | strictly ordered work |
use std::sync::Arc;

use once_cell::sync::Lazy;

mod io_scheduler;
#[cfg(feature = "futures-scheduler")]
mod thread_pool_scheduler;
#[cfg(feature = "tokio-scheduler")]
mod tokio_scheduler;
pub mod worker_pool;

pub use io_scheduler::IoScheduler;
#[cfg(feature = "futures-scheduler")]
pub use thread_pool_scheduler::{ComputationScheduler, SingleThreadScheduler};
pub use worker_pool::{PoolConfig, PoolError, WorkerPool};

/// A unit of work handed to a scheduler.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs units of work somewhere else.
///
/// `execute` must return without waiting for the task, and must not drop
/// the task silently while the scheduler is running normally.
pub trait Scheduler: Send + Sync {
  fn execute(&self, task: Task);
}

impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
  #[inline]
  fn execute(&self, task: Task) { (**self).execute(task) }
}

impl<S: Scheduler + ?Sized> Scheduler for &S {
  #[inline]
  fn execute(&self, task: Task) { (**self).execute(task) }
}

static IO: Lazy<IoScheduler> =
  Lazy::new(|| IoScheduler::new().expect("failed to create the default io scheduler"));

/// The process-wide io scheduler.
pub fn io() -> IoScheduler { IO.clone() }

#[cfg(feature = "futures-scheduler")]
static COMPUTATION: Lazy<ComputationScheduler> = Lazy::new(|| {
  ComputationScheduler::new().expect("failed to create the default computation scheduler")
});

/// The process-wide computation scheduler.
#[cfg(feature = "futures-scheduler")]
pub fn computation() -> ComputationScheduler { COMPUTATION.clone() }

#[cfg(feature = "futures-scheduler")]
static SINGLE: Lazy<SingleThreadScheduler> = Lazy::new(|| {
  SingleThreadScheduler::new().expect("failed to create the default single thread scheduler")
});

/// The process-wide single thread scheduler.
#[cfg(feature = "futures-scheduler")]
pub fn single() -> SingleThreadScheduler { SINGLE.clone() }
