use std::sync::Arc;

use super::{
  worker_pool::{PoolConfig, PoolError, WorkerPool},
  Scheduler, Task,
};

/// Scheduler for blocking and IO-bound work.
///
/// Starts a new worker whenever no idle one can take a task, and retires
/// workers that stayed idle for a minute. Clones share the same pool.
#[derive(Clone)]
pub struct IoScheduler(Arc<WorkerPool>);

impl IoScheduler {
  pub fn new() -> Result<Self, PoolError> {
    Self::with_config(PoolConfig::cached().thread_name("rx-io"))
  }

  /// An io scheduler on a custom pool, e.g. with a bounded worker count.
  pub fn with_config(config: PoolConfig) -> Result<Self, PoolError> {
    Ok(IoScheduler(Arc::new(WorkerPool::new(config)?)))
  }

  pub fn pool(&self) -> &WorkerPool { &self.0 }
}

impl Scheduler for IoScheduler {
  #[inline]
  fn execute(&self, task: Task) { self.0.execute(task) }
}
