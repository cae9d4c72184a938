//! A bounded, growable pool of worker threads.
//!
//! The pool keeps `min_workers` threads alive, grows up to `max_workers`
//! when its queue cannot take more work, and lets workers above the minimum
//! retire after `idle_timeout` without work. Once both the queue and the
//! worker count are exhausted, new work is rejected.
use std::{
  any::Any,
  panic::{self, AssertUnwindSafe},
  sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
  },
  thread::{self, JoinHandle},
  time::Duration,
};

use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender, TrySendError};
use parking_lot::Mutex;

use super::{Scheduler, Task};

/// Sizing and naming of a [`WorkerPool`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
  /// Workers started up front and never retired.
  pub min_workers: usize,
  /// Upper bound on live workers.
  pub max_workers: usize,
  /// How long a worker above `min_workers` waits for work before exiting.
  pub idle_timeout: Duration,
  /// Tasks that may wait for a worker. `0` hands every task directly to an
  /// idle worker or to a new one, `usize::MAX` never fills up.
  pub queue_capacity: usize,
  /// Another worker is started after queueing a task whenever fewer than
  /// this many workers are idle.
  pub min_spare_workers: usize,
  /// Prefix of the worker thread names.
  pub thread_name: String,
  /// Stack size of every worker thread, the platform default when `None`.
  pub stack_size: Option<usize>,
}

impl PoolConfig {
  /// Grows without bound, keeps nothing alive when idle for a minute and
  /// never queues.
  pub fn cached() -> Self {
    PoolConfig {
      min_workers: 0,
      max_workers: usize::MAX,
      idle_timeout: Duration::from_secs(60),
      queue_capacity: 0,
      min_spare_workers: 0,
      thread_name: "rx-worker".to_owned(),
      stack_size: None,
    }
  }

  /// Exactly `workers` threads and an effectively unbounded queue.
  pub fn fixed(workers: usize) -> Self {
    PoolConfig {
      min_workers: workers,
      max_workers: workers,
      idle_timeout: Duration::MAX,
      queue_capacity: usize::MAX,
      min_spare_workers: 0,
      thread_name: "rx-worker".to_owned(),
      stack_size: None,
    }
  }

  pub fn min_workers(mut self, n: usize) -> Self {
    self.min_workers = n;
    self
  }

  pub fn max_workers(mut self, n: usize) -> Self {
    self.max_workers = n;
    self
  }

  pub fn idle_timeout(mut self, timeout: Duration) -> Self {
    self.idle_timeout = timeout;
    self
  }

  pub fn queue_capacity(mut self, capacity: usize) -> Self {
    self.queue_capacity = capacity;
    self
  }

  pub fn min_spare_workers(mut self, n: usize) -> Self {
    self.min_spare_workers = n;
    self
  }

  pub fn thread_name(mut self, name: impl Into<String>) -> Self {
    self.thread_name = name.into();
    self
  }

  pub fn stack_size(mut self, bytes: usize) -> Self {
    self.stack_size = Some(bytes);
    self
  }

  fn validate(&self) -> Result<(), PoolError> {
    if self.max_workers == 0 {
      return Err(PoolError::InvalidConfig("max_workers must be at least 1"));
    }
    if self.min_workers > self.max_workers {
      return Err(PoolError::InvalidConfig("min_workers must not exceed max_workers"));
    }
    Ok(())
  }
}

impl Default for PoolConfig {
  fn default() -> Self { Self::cached() }
}

#[derive(Debug, thiserror::Error)]
pub enum PoolError {
  #[error("task rejected: {workers} workers busy and the queue of {capacity} is full")]
  Rejected { workers: usize, capacity: usize },
  #[error("worker pool is shut down")]
  ShutDown,
  #[error("invalid pool configuration: {0}")]
  InvalidConfig(&'static str),
  #[error("failed to spawn a worker thread")]
  Spawn(#[from] std::io::Error),
}

/// See the [module documentation](self).
///
/// Dropping the pool shuts it down.
pub struct WorkerPool {
  inner: Arc<Inner>,
}

struct Inner {
  config: PoolConfig,
  sender: Mutex<Option<Sender<Task>>>,
  receiver: Receiver<Task>,
  alive: AtomicUsize,
  idle: AtomicUsize,
  next_id: AtomicUsize,
  handles: Mutex<Vec<JoinHandle<()>>>,
}

impl WorkerPool {
  /// Creates the pool and starts its `min_workers`.
  pub fn new(config: PoolConfig) -> Result<Self, PoolError> {
    config.validate()?;
    let (sender, receiver) = match config.queue_capacity {
      usize::MAX => channel::unbounded(),
      capacity => channel::bounded(capacity),
    };
    let pool = WorkerPool {
      inner: Arc::new(Inner {
        config,
        sender: Mutex::new(Some(sender)),
        receiver,
        alive: AtomicUsize::new(0),
        idle: AtomicUsize::new(0),
        next_id: AtomicUsize::new(0),
        handles: Mutex::new(vec![]),
      }),
    };
    while pool.inner.reserve_below(pool.inner.config.min_workers) {
      pool.spawn_worker(None)?;
    }
    Ok(pool)
  }

  /// Hands `task` to the pool.
  ///
  /// Fails with [`PoolError::Rejected`] when the queue is full and no more
  /// workers may be started, and with [`PoolError::ShutDown`] after
  /// [`shutdown`](WorkerPool::shutdown).
  pub fn submit(&self, task: Task) -> Result<(), PoolError> {
    // Held for the whole call so that `shutdown` never races a submission.
    let sender = self.inner.sender.lock();
    let sender = sender.as_ref().ok_or(PoolError::ShutDown)?;
    let config = &self.inner.config;

    if self.inner.reserve_below(config.min_workers) {
      return self.spawn_worker(Some(task));
    }
    match sender.try_send(task) {
      Ok(()) => {
        let starving = self.inner.alive.load(Ordering::SeqCst) == 0
          || self.inner.idle.load(Ordering::SeqCst) < config.min_spare_workers;
        if starving && self.inner.reserve_below(config.max_workers) {
          // the task is queued either way, a later worker will pick it up
          if let Err(err) = self.spawn_worker(None) {
            log::warn!("pool `{}` could not start a spare worker: {}", config.thread_name, err);
          }
        }
        Ok(())
      }
      Err(TrySendError::Full(task)) => {
        if self.inner.reserve_below(config.max_workers) {
          self.spawn_worker(Some(task))
        } else {
          let workers = self.inner.alive.load(Ordering::SeqCst);
          log::warn!(
            "pool `{}` rejected a task: {} workers busy, queue full",
            config.thread_name,
            workers
          );
          Err(PoolError::Rejected { workers, capacity: config.queue_capacity })
        }
      }
      Err(TrySendError::Disconnected(_)) => Err(PoolError::ShutDown),
    }
  }

  /// Stops accepting work, runs what is already queued and waits for every
  /// worker to exit. Later calls do nothing.
  pub fn shutdown(&self) {
    let Some(sender) = self.inner.sender.lock().take() else {
      return;
    };
    drop(sender);
    log::debug!("shutting down pool `{}`", self.inner.config.thread_name);

    let handles = std::mem::take(&mut *self.inner.handles.lock());
    let current = thread::current().id();
    for handle in handles {
      // a worker may end up dropping the last handle to its own pool
      if handle.thread().id() != current && handle.join().is_err() {
        log::error!("a worker of pool `{}` panicked", self.inner.config.thread_name);
      }
    }
  }

  pub fn is_shutdown(&self) -> bool { self.inner.sender.lock().is_none() }

  /// Workers currently alive, busy or idle.
  pub fn active_workers(&self) -> usize { self.inner.alive.load(Ordering::SeqCst) }

  /// Workers currently waiting for work.
  pub fn idle_workers(&self) -> usize { self.inner.idle.load(Ordering::SeqCst) }

  /// Tasks waiting in the queue.
  pub fn queued(&self) -> usize { self.inner.receiver.len() }

  pub fn config(&self) -> &PoolConfig { &self.inner.config }

  /// Starts a worker in a slot already reserved with `reserve_below`.
  fn spawn_worker(&self, first: Option<Task>) -> Result<(), PoolError> {
    let inner = self.inner.clone();
    let id = inner.next_id.fetch_add(1, Ordering::Relaxed);
    let mut builder = thread::Builder::new().name(format!("{}-{}", inner.config.thread_name, id));
    if let Some(size) = inner.config.stack_size {
      builder = builder.stack_size(size);
    }
    let spawned = builder.spawn(move || inner.work(first));
    match spawned {
      Ok(handle) => {
        log::debug!("pool `{}` started worker {}", self.inner.config.thread_name, id);
        let mut handles = self.inner.handles.lock();
        handles.retain(|h| !h.is_finished());
        handles.push(handle);
        Ok(())
      }
      Err(err) => {
        self.inner.alive.fetch_sub(1, Ordering::SeqCst);
        Err(err.into())
      }
    }
  }
}

impl Inner {
  /// Takes a worker slot if fewer than `limit` workers are alive.
  fn reserve_below(&self, limit: usize) -> bool {
    self
      .alive
      .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| (n < limit).then_some(n + 1))
      .is_ok()
  }

  /// Gives a worker slot back if more than `floor` workers are alive.
  fn release_above(&self, floor: usize) -> bool {
    self
      .alive
      .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| (n > floor).then(|| n - 1))
      .is_ok()
  }

  fn work(&self, first: Option<Task>) {
    if let Some(task) = first {
      run_guarded(task, &self.config.thread_name);
    }
    loop {
      self.idle.fetch_add(1, Ordering::SeqCst);
      let received = self.receiver.recv_timeout(self.config.idle_timeout);
      self.idle.fetch_sub(1, Ordering::SeqCst);
      match received {
        Ok(task) => run_guarded(task, &self.config.thread_name),
        Err(RecvTimeoutError::Timeout) => {
          if !self.release_above(self.config.min_workers) {
            continue;
          }
          // work queued while this worker was retiring would otherwise wait
          // for the next submission.
          if self.receiver.is_empty() || !self.reserve_below(self.config.max_workers) {
            log::debug!("pool `{}`: idle worker retired", self.config.thread_name);
            return;
          }
        }
        Err(RecvTimeoutError::Disconnected) => {
          self.alive.fetch_sub(1, Ordering::SeqCst);
          return;
        }
      }
    }
  }
}

impl Drop for WorkerPool {
  fn drop(&mut self) { self.shutdown() }
}

impl Scheduler for WorkerPool {
  fn execute(&self, task: Task) {
    if let Err(err) = self.submit(task) {
      log::error!("pool `{}` dropped a task: {}", self.inner.config.thread_name, err);
    }
  }
}

/// Runs `task`, logging instead of unwinding if it panics so the worker
/// survives.
pub(crate) fn run_guarded(task: Task, pool: &str) {
  if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(task)) {
    log::error!("task panicked on pool `{}`: {}", pool, panic_message(payload.as_ref()));
  }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
  if let Some(s) = payload.downcast_ref::<&str>() {
    *s
  } else if let Some(s) = payload.downcast_ref::<String>() {
    s.as_str()
  } else {
    "unknown panic payload"
  }
}
