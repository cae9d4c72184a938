use crate::{
  disposable::Disposable,
  observer::{BoxedObserver, Observer},
  rc::MutArc,
};

/// The observer handed to a subscription procedure.
///
/// One `Subscriber` is created per `subscribe` call. It owns the downstream
/// observer and checks the subscription's [`Disposable`] before forwarding
/// every call, which makes it the only place where cancellation is enforced.
///
/// Clones reach the same observer and the same flag, so operators and
/// scheduled tasks may each hold one.
pub struct Subscriber<Item, Err> {
  observer: MutArc<BoxedObserver<Item, Err>>,
  disposable: Disposable,
}

impl<Item, Err> Subscriber<Item, Err> {
  pub(crate) fn new(observer: BoxedObserver<Item, Err>, disposable: Disposable) -> Self {
    Subscriber { observer: MutArc::own(observer), disposable }
  }

  /// The cancellation handle of the subscription this subscriber serves.
  #[inline]
  pub fn disposable(&self) -> &Disposable { &self.disposable }
}

impl<Item, Err> Clone for Subscriber<Item, Err> {
  fn clone(&self) -> Self {
    Subscriber { observer: self.observer.clone(), disposable: self.disposable.clone() }
  }
}

impl<Item, Err> Observer<Item, Err> for Subscriber<Item, Err> {
  fn next(&mut self, value: Item) {
    if !self.disposable.is_disposed() {
      self.observer.rc_deref_mut().next(value);
    }
  }

  fn error(&mut self, err: Err) {
    if !self.disposable.is_disposed() {
      self.observer.rc_deref_mut().error(err);
    }
  }

  fn complete(&mut self) {
    if !self.disposable.is_disposed() {
      self.observer.rc_deref_mut().complete();
    }
  }

  /// Closed when this subscription, or any subscription further downstream,
  /// has been disposed.
  ///
  /// Never waits for a delivery in progress: while the observer is busy, only
  /// this subscription's own flag is consulted.
  fn is_closed(&self) -> bool {
    self.disposable.is_disposed()
      || self.observer.try_rc_deref_mut().map_or(false, |observer| observer.is_closed())
  }
}
