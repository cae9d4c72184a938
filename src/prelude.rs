//! Prelude module for convenient imports

pub use crate::disposable::{Disposable, DisposableGuard};
pub use crate::observable::{self, Observable};
pub use crate::observer::{Observer, ObserverAll};
pub use crate::scheduler::{self, IoScheduler, PoolConfig, PoolError, Scheduler, Task, WorkerPool};
#[cfg(feature = "futures-scheduler")]
pub use crate::scheduler::{ComputationScheduler, SingleThreadScheduler};
pub use crate::subscriber::Subscriber;
