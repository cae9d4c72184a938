use std::iter::{Repeat, Take};

use crate::{observable::Observable, observer::Observer};

/// Creates an observable that produces values from an iterator.
///
/// Completes when all elements have been emitted. Never emits an error.
/// Stops early, without completing, once the subscriber is closed.
///
/// The iterator is cloned for every subscription, so each subscriber sees
/// the whole sequence.
///
/// # Examples
///
/// ```
/// use rxpipe::prelude::*;
///
/// observable::from_iter::<_, ()>(vec![0, 1, 2, 3])
///   .subscribe_next(|v| println!("{},", v));
/// ```
pub fn from_iter<Iter, Err>(iter: Iter) -> Observable<Iter::Item, Err>
where
  Iter: IntoIterator + Clone + Send + Sync + 'static,
  Iter::Item: 'static,
  Err: 'static,
{
  Observable::create(move |mut subscriber| {
    for v in iter.clone() {
      if subscriber.is_closed() {
        return Ok(());
      }
      subscriber.next(v);
    }
    subscriber.complete();
    Ok(())
  })
}

/// Creates an observable producing same value repeated N times.
///
/// Completes immediately after emitting N values. Never emits an error.
pub fn repeat<Item, Err>(v: Item, n: usize) -> Observable<Item, Err>
where
  Item: Clone + Send + Sync + 'static,
  Err: 'static,
{
  from_iter::<Take<Repeat<Item>>, Err>(std::iter::repeat(v).take(n))
}
