use futures::executor::ThreadPool;

use super::{worker_pool::run_guarded, PoolError, Scheduler, Task};

impl Scheduler for ThreadPool {
  fn execute(&self, task: Task) { self.spawn_ok(async move { run_guarded(task, "futures") }) }
}

fn build_pool(size: usize, name_prefix: &str) -> Result<ThreadPool, PoolError> {
  if size == 0 {
    return Err(PoolError::InvalidConfig("a thread pool needs at least one worker"));
  }
  let pool = ThreadPool::builder().pool_size(size).name_prefix(name_prefix).create()?;
  log::debug!("started thread pool `{}` with {} workers", name_prefix, size);
  Ok(pool)
}

/// Scheduler for CPU-bound work: a fixed pool with one worker per logical
/// CPU.
#[derive(Clone)]
pub struct ComputationScheduler(ThreadPool);

impl ComputationScheduler {
  pub fn new() -> Result<Self, PoolError> { Self::with_workers(num_cpus::get()) }

  pub fn with_workers(workers: usize) -> Result<Self, PoolError> {
    build_pool(workers, "rx-computation-").map(ComputationScheduler)
  }
}

impl Scheduler for ComputationScheduler {
  #[inline]
  fn execute(&self, task: Task) { self.0.execute(task) }
}

/// Scheduler with exactly one worker. Tasks run one at a time, in the order
/// they were submitted.
#[derive(Clone)]
pub struct SingleThreadScheduler(ThreadPool);

impl SingleThreadScheduler {
  pub fn new() -> Result<Self, PoolError> {
    build_pool(1, "rx-single-").map(SingleThreadScheduler)
  }
}

impl Scheduler for SingleThreadScheduler {
  #[inline]
  fn execute(&self, task: Task) { self.0.execute(task) }
}
