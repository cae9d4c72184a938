use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// A thread-safe, shared, mutable cell.
///
/// Every clone points at the same value. Used wherever several producers (or
/// several scheduled tasks) must reach one observer.
pub struct MutArc<T>(Arc<Mutex<T>>);

impl<T> MutArc<T> {
  pub fn own(t: T) -> Self { Self(Arc::new(Mutex::new(t))) }

  #[inline]
  pub fn rc_deref_mut(&self) -> MutexGuard<'_, T> { self.0.lock() }

  /// Like `rc_deref_mut`, but returns `None` instead of waiting while
  /// someone else holds the value.
  #[inline]
  pub fn try_rc_deref_mut(&self) -> Option<MutexGuard<'_, T>> { self.0.try_lock() }
}

impl<T> Clone for MutArc<T> {
  #[inline]
  fn clone(&self) -> Self { Self(self.0.clone()) }
}
