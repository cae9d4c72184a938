use std::sync::Arc;

use crate::{observable::Observable, observer::Observer};

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// Maps each item to an inner observable and merges the items of all inner
  /// observables into one stream.
  ///
  /// Each inner observable is subscribed as soon as its upstream item
  /// arrives. Inner items and inner errors are forwarded downstream; inner
  /// completions are ignored. Completion of the upstream is forwarded
  /// immediately, even if inner observables are still emitting, in which
  /// case their later items still arrive after the completion (unless the
  /// subscription was disposed). There is no bound on how many inner
  /// subscriptions run at once and no ordering between them.
  pub fn flat_map<B, F>(&self, f: F) -> Observable<B, Err>
  where
    B: 'static,
    F: Fn(Item) -> Observable<B, Err> + Send + Sync + 'static,
  {
    self.try_flat_map(move |v| Ok(f(v)))
  }

  /// Like [`flat_map`](Observable::flat_map), but the mapping closure may
  /// fail. A failure is sent downstream as an error and no inner
  /// observable is subscribed for that item.
  pub fn try_flat_map<B, F>(&self, f: F) -> Observable<B, Err>
  where
    B: 'static,
    F: Fn(Item) -> Result<Observable<B, Err>, Err> + Send + Sync + 'static,
  {
    let source = self.clone();
    let func = Arc::new(f);
    Observable::create(move |subscriber| {
      source.subscribe(FlatMapObserver { observer: subscriber, func: func.clone() });
      Ok(())
    })
  }
}

pub struct FlatMapObserver<O, F> {
  observer: O,
  func: Arc<F>,
}

impl<Item, B, Err, O, F> Observer<Item, Err> for FlatMapObserver<O, F>
where
  B: 'static,
  Err: 'static,
  O: Observer<B, Err> + Clone + Send + 'static,
  F: Fn(Item) -> Result<Observable<B, Err>, Err>,
{
  fn next(&mut self, value: Item) {
    match (self.func)(value) {
      Ok(inner) => {
        // The inner subscription is not tracked, it lives until its source
        // stops on its own.
        inner.subscribe(InnerObserver(self.observer.clone()));
      }
      Err(err) => self.observer.error(err),
    }
  }

  #[inline]
  fn error(&mut self, err: Err) { self.observer.error(err) }

  #[inline]
  fn complete(&mut self) { self.observer.complete() }

  #[inline]
  fn is_closed(&self) -> bool { self.observer.is_closed() }
}

/// Forwards an inner observable's items and error, swallows its completion.
struct InnerObserver<O>(O);

impl<B, Err, O> Observer<B, Err> for InnerObserver<O>
where
  O: Observer<B, Err>,
{
  #[inline]
  fn next(&mut self, value: B) { self.0.next(value) }

  #[inline]
  fn error(&mut self, err: Err) { self.0.error(err) }

  #[inline]
  fn complete(&mut self) {}

  #[inline]
  fn is_closed(&self) -> bool { self.0.is_closed() }
}
