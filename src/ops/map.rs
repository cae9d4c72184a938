use std::sync::Arc;

use crate::{
  observable::Observable,
  observer::{observer_proxy_impl, Observer},
};

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// Creates a new stream which calls a closure on each element and uses
  /// its return as the value.
  ///
  /// # Example
  ///
  /// ```
  /// use rxpipe::prelude::*;
  /// use std::sync::{Arc, Mutex};
  ///
  /// let sum = Arc::new(Mutex::new(0));
  /// let c_sum = sum.clone();
  /// observable::from_iter::<_, ()>(1..=3)
  ///   .map(|v| v * 2)
  ///   .subscribe_next(move |v| *c_sum.lock().unwrap() += v);
  ///
  /// assert_eq!(*sum.lock().unwrap(), 12);
  /// ```
  pub fn map<B, F>(&self, f: F) -> Observable<B, Err>
  where
    B: 'static,
    F: Fn(Item) -> B + Send + Sync + 'static,
  {
    self.try_map(move |v| Ok(f(v)))
  }

  /// Like [`map`](Observable::map), but the closure may fail.
  ///
  /// A failure is sent downstream as an error in place of that one item.
  /// The upstream is not stopped, so later items keep flowing through the
  /// closure and on to the observer.
  pub fn try_map<B, F>(&self, f: F) -> Observable<B, Err>
  where
    B: 'static,
    F: Fn(Item) -> Result<B, Err> + Send + Sync + 'static,
  {
    let source = self.clone();
    let func = Arc::new(f);
    Observable::create(move |subscriber| {
      source.subscribe(MapObserver { observer: subscriber, func: func.clone() });
      Ok(())
    })
  }
}

pub struct MapObserver<O, F> {
  observer: O,
  func: Arc<F>,
}

impl<Item, B, Err, O, F> Observer<Item, Err> for MapObserver<O, F>
where
  O: Observer<B, Err>,
  F: Fn(Item) -> Result<B, Err>,
{
  fn next(&mut self, value: Item) {
    match (self.func)(value) {
      Ok(v) => self.observer.next(v),
      Err(err) => self.observer.error(err),
    }
  }

  observer_proxy_impl!(observer);
}
