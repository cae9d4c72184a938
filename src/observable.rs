use std::sync::Arc;

use crate::{
  disposable::Disposable,
  observer::{Observer, ObserverAll},
  subscriber::Subscriber,
};

mod from_iter;
mod of;
mod trivial;
pub use from_iter::*;
pub use of::*;
pub use trivial::*;

type SubscribeFn<Item, Err> = dyn Fn(Subscriber<Item, Err>) -> Result<(), Err> + Send + Sync;

/// A representation of any set of values over any amount of time. This is the
/// most basic building block of rxpipe.
///
/// An `Observable` only describes how to drive an observer. Nothing runs until
/// it is subscribed, and every subscription is an independent run with its
/// own [`Disposable`]. Cloning is cheap and shares the description.
pub struct Observable<Item, Err> {
  subscribe_fn: Arc<SubscribeFn<Item, Err>>,
}

impl<Item, Err> Clone for Observable<Item, Err> {
  fn clone(&self) -> Self { Observable { subscribe_fn: self.subscribe_fn.clone() } }
}

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// param `subscribe`: the function that is called when the Observable is
  /// subscribed to. It is given a [`Subscriber`], to which new values can be
  /// `next`ed, or an `error` method can be called to raise an error, or
  /// `complete` can be called to notify of a successful completion.
  ///
  /// Returning `Err(e)` from the function is the same as calling
  /// `subscriber.error(e)`.
  pub fn create<F>(subscribe: F) -> Self
  where
    F: Fn(Subscriber<Item, Err>) -> Result<(), Err> + Send + Sync + 'static,
  {
    Observable { subscribe_fn: Arc::new(subscribe) }
  }

  /// Runs the subscription procedure against `observer`.
  ///
  /// Synchronous sources have finished by the time this returns; sources
  /// moved to a scheduler with `subscribe_on` (or emitting from their own
  /// threads) keep delivering afterwards until disposed or terminated.
  pub fn subscribe<O>(&self, observer: O) -> Disposable
  where
    O: Observer<Item, Err> + Send + 'static,
  {
    let disposable = Disposable::default();
    let mut subscriber = Subscriber::new(Box::new(observer), disposable.clone());
    if let Err(err) = (self.subscribe_fn)(subscriber.clone()) {
      subscriber.error(err);
    }
    disposable
  }

  /// Subscribe with only a `next` callback; errors and completion are
  /// ignored.
  pub fn subscribe_next<N>(&self, next: N) -> Disposable
  where
    N: FnMut(Item) + Send + 'static,
  {
    self.subscribe(ObserverAll::new(next, |_: Err| {}, || {}))
  }

  pub fn subscribe_err<N, E>(&self, next: N, error: E) -> Disposable
  where
    N: FnMut(Item) + Send + 'static,
    E: FnMut(Err) + Send + 'static,
  {
    self.subscribe(ObserverAll::new(next, error, || {}))
  }

  pub fn subscribe_all<N, E, C>(&self, next: N, error: E, complete: C) -> Disposable
  where
    N: FnMut(Item) + Send + 'static,
    E: FnMut(Err) + Send + 'static,
    C: FnMut() + Send + 'static,
  {
    self.subscribe(ObserverAll::new(next, error, complete))
  }
}

/// Creates an observable from a subscription procedure.
///
/// See [`Observable::create`].
pub fn create<Item, Err, F>(subscribe: F) -> Observable<Item, Err>
where
  Item: 'static,
  Err: 'static,
  F: Fn(Subscriber<Item, Err>) -> Result<(), Err> + Send + Sync + 'static,
{
  Observable::create(subscribe)
}
