use tokio::runtime::Handle;

use super::{worker_pool::run_guarded, Scheduler, Task};

/// Runs tasks on the runtime's blocking pool, which grows on demand and
/// reclaims idle threads.
impl Scheduler for Handle {
  fn execute(&self, task: Task) {
    self.spawn_blocking(move || run_guarded(task, "tokio"));
  }
}
