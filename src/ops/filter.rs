use std::sync::Arc;

use crate::{
  observable::Observable,
  observer::{observer_proxy_impl, Observer},
};

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// Emit only those items from an Observable that pass a predicate test
  ///
  /// # Example
  ///
  /// ```
  /// use rxpipe::prelude::*;
  /// use std::sync::{Arc, Mutex};
  ///
  /// let coll = Arc::new(Mutex::new(vec![]));
  /// let coll_clone = coll.clone();
  ///
  /// observable::from_iter::<_, ()>(0..10)
  ///   .filter(|v| *v % 2 == 0)
  ///   .subscribe_next(move |v| coll_clone.lock().unwrap().push(v));
  ///
  /// // only even numbers received.
  /// assert_eq!(*coll.lock().unwrap(), vec![0, 2, 4, 6, 8]);
  /// ```
  pub fn filter<F>(&self, filter: F) -> Observable<Item, Err>
  where
    F: Fn(&Item) -> bool + Send + Sync + 'static,
  {
    self.try_filter(move |v| Ok(filter(v)))
  }

  /// Like [`filter`](Observable::filter), but the predicate may fail. A
  /// failure drops the item and is sent downstream as an error.
  pub fn try_filter<F>(&self, filter: F) -> Observable<Item, Err>
  where
    F: Fn(&Item) -> Result<bool, Err> + Send + Sync + 'static,
  {
    let source = self.clone();
    let filter = Arc::new(filter);
    Observable::create(move |subscriber| {
      source.subscribe(FilterObserver { observer: subscriber, filter: filter.clone() });
      Ok(())
    })
  }
}

pub struct FilterObserver<O, F> {
  observer: O,
  filter: Arc<F>,
}

impl<Item, Err, O, F> Observer<Item, Err> for FilterObserver<O, F>
where
  O: Observer<Item, Err>,
  F: Fn(&Item) -> Result<bool, Err>,
{
  fn next(&mut self, value: Item) {
    match (self.filter)(&value) {
      Ok(true) => self.observer.next(value),
      Ok(false) => {}
      Err(err) => self.observer.error(err),
    }
  }

  observer_proxy_impl!(observer);
}
