use std::sync::{
  atomic::{AtomicBool, Ordering},
  Arc,
};

/// Handle returned from `Observable::subscribe` to cancel the subscription.
///
/// All clones share one flag. Once disposed, a subscription stays disposed.
///
/// Disposal is cooperative: it stops deliveries to the subscribed observer,
/// but a producer keeps running unless it polls `Observer::is_closed` on the
/// subscriber it was handed.
#[derive(Clone, Debug, Default)]
pub struct Disposable(Arc<AtomicBool>);

impl Disposable {
  /// Cancels the subscription. Calling it more than once is harmless.
  pub fn dispose(&self) {
    if !self.0.swap(true, Ordering::AcqRel) {
      log::trace!("subscription disposed");
    }
  }

  #[inline]
  pub fn is_disposed(&self) -> bool { self.0.load(Ordering::Acquire) }

  /// Activates "RAII" behavior for this subscription. That means
  /// `dispose()` will be called automatically as soon as the returned
  /// value goes out of scope.
  ///
  /// **Attention:** If you don't assign the return value to a variable,
  /// `dispose()` is called immediately, which is probably not what you
  /// want!
  pub fn unsubscribe_when_dropped(self) -> DisposableGuard { DisposableGuard(self) }
}

/// An RAII implementation of a "scoped subscribed" of a subscription.
/// When this structure is dropped (falls out of scope), the subscription will
/// be disposed.
///
/// If you want to drop it immediately, wrap it in its own scope
#[derive(Debug)]
#[must_use]
pub struct DisposableGuard(Disposable);

impl DisposableGuard {
  /// The guarded handle, e.g. to check it without dropping the guard.
  pub fn disposable(&self) -> &Disposable { &self.0 }
}

impl Drop for DisposableGuard {
  #[inline]
  fn drop(&mut self) { self.0.dispose() }
}
