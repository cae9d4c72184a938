//! Observer trait and implementations
//!
//! The Observer trait defines the consumer of data in the reactive pattern.
//! It provides three methods: next (for values), error (for errors), and
//! complete (for stream completion).

// ============================================================================
// Observer Trait
// ============================================================================

/// Observer trait: The consumer of data in reactive programming
///
/// An Observer receives values, errors, and completion notifications from
/// an Observable. At most one of `error`/`complete` should be called per
/// subscription and no `next` should follow it, but this is a convention
/// between producer and consumer; nothing in the engine enforces it.
pub trait Observer<Item, Err> {
  /// Receive the next value from the observable
  fn next(&mut self, value: Item);

  /// Handle an error from the observable. Terminal.
  fn error(&mut self, err: Err);

  /// Handle completion of the observable. Terminal.
  fn complete(&mut self);

  /// Checks if the observer is closed.
  ///
  /// Used by sources (like `from_iter`) to determine if they should stop
  /// emitting values early, e.g. because the downstream subscription was
  /// disposed.
  #[inline]
  fn is_closed(&self) -> bool { false }
}

impl<Item, Err, O> Observer<Item, Err> for Box<O>
where
  O: Observer<Item, Err> + ?Sized,
{
  #[inline]
  fn next(&mut self, value: Item) { (**self).next(value) }

  #[inline]
  fn error(&mut self, err: Err) { (**self).error(err) }

  #[inline]
  fn complete(&mut self) { (**self).complete() }

  #[inline]
  fn is_closed(&self) -> bool { (**self).is_closed() }
}

/// Boxed observer that can be moved across threads.
pub type BoxedObserver<Item, Err> = Box<dyn Observer<Item, Err> + Send>;

// ============================================================================
// Closure observer
// ============================================================================

/// An observer built from three closures.
#[derive(Clone)]
pub struct ObserverAll<N, E, C> {
  next: N,
  error: E,
  complete: C,
}

impl<N, E, C> ObserverAll<N, E, C> {
  #[inline]
  pub fn new(next: N, error: E, complete: C) -> Self { ObserverAll { next, error, complete } }
}

impl<Item, Err, N, E, C> Observer<Item, Err> for ObserverAll<N, E, C>
where
  N: FnMut(Item),
  E: FnMut(Err),
  C: FnMut(),
{
  #[inline]
  fn next(&mut self, value: Item) { (self.next)(value) }

  #[inline]
  fn error(&mut self, err: Err) { (self.error)(err) }

  #[inline]
  fn complete(&mut self) { (self.complete)() }
}

/// Implements `error`, `complete` and `is_closed` by forwarding to the
/// downstream observer stored in `$field`. Expands inside an
/// `impl Observer<_, Err> for ...` block.
macro_rules! observer_proxy_impl {
  ($field: ident) => {
    #[inline]
    fn error(&mut self, err: Err) { self.$field.error(err) }

    #[inline]
    fn complete(&mut self) { self.$field.complete() }

    #[inline]
    fn is_closed(&self) -> bool { self.$field.is_closed() }
  };
}

pub(crate) use observer_proxy_impl;
