use crate::{observable::Observable, observer::Observer};

/// Creates an observable producing a single value.
///
/// Completes immediately after emitting the value given. Never emits an error.
///
/// # Examples
///
/// ```
/// use rxpipe::prelude::*;
///
/// observable::of::<_, ()>(123).subscribe_next(|v| println!("{}", v));
/// ```
pub fn of<Item, Err>(v: Item) -> Observable<Item, Err>
where
  Item: Clone + Send + Sync + 'static,
  Err: 'static,
{
  Observable::create(move |mut subscriber| {
    subscriber.next(v.clone());
    subscriber.complete();
    Ok(())
  })
}

/// Creates an observable that emits the value or the error from a [`Result`]
/// given.
///
/// Completes immediately after emitting a value.
pub fn of_result<Item, Err>(r: Result<Item, Err>) -> Observable<Item, Err>
where
  Item: Clone + Send + Sync + 'static,
  Err: Clone + Send + Sync + 'static,
{
  Observable::create(move |mut subscriber| {
    let v = r.clone()?;
    subscriber.next(v);
    subscriber.complete();
    Ok(())
  })
}
