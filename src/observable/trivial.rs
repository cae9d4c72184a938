use crate::{observable::Observable, observer::Observer};

/// Creates an observable that emits no items, just terminates with an error.
pub fn throw_err<Item, Err>(e: Err) -> Observable<Item, Err>
where
  Item: 'static,
  Err: Clone + Send + Sync + 'static,
{
  Observable::create(move |_| Err(e.clone()))
}

/// Creates an observable that produces no values.
///
/// Completes immediately. Never emits an error.
pub fn empty<Item, Err>() -> Observable<Item, Err>
where
  Item: 'static,
  Err: 'static,
{
  Observable::create(|mut subscriber| {
    subscriber.complete();
    Ok(())
  })
}

/// Creates an observable that never emits anything and never terminates.
pub fn never<Item, Err>() -> Observable<Item, Err>
where
  Item: 'static,
  Err: 'static,
{
  Observable::create(|_| Ok(()))
}

#[cfg(test)]
mod test {
  use crate::prelude::*;
  use std::sync::{Arc, Mutex};

  #[derive(Default)]
  struct Events {
    next: usize,
    err: usize,
    complete: usize,
  }

  fn record(o: Observable<i32, &'static str>) -> Events {
    let events = Arc::new(Mutex::new(Events::default()));
    let (e1, e2, e3) = (events.clone(), events.clone(), events.clone());
    o.subscribe_all(
      move |_| e1.lock().unwrap().next += 1,
      move |_| e2.lock().unwrap().err += 1,
      move || e3.lock().unwrap().complete += 1,
    );
    let events = std::mem::take(&mut *events.lock().unwrap());
    events
  }

  #[test]
  fn throw() {
    let events = record(observable::throw_err("error"));
    assert_eq!((events.next, events.err, events.complete), (0, 1, 0));
  }

  #[test]
  fn empty() {
    let events = record(observable::empty());
    assert_eq!((events.next, events.err, events.complete), (0, 0, 1));
  }

  #[test]
  fn never() {
    let events = record(observable::never());
    assert_eq!((events.next, events.err, events.complete), (0, 0, 0));
  }
}
